pub mod boundary;
pub mod chapter;
pub mod config;
pub mod constants;
pub mod driver;
pub mod narrative;
pub mod orientation;
pub mod render_loop;
pub mod resolver;
pub mod sampler;
pub mod site;
pub mod state;
pub mod subscription;
pub mod table;
pub mod throttle;

pub use boundary::*;
pub use chapter::*;
pub use config::*;
pub use driver::*;
pub use narrative::*;
pub use orientation::*;
pub use render_loop::*;
pub use resolver::*;
pub use sampler::*;
pub use state::*;
pub use subscription::*;
pub use table::*;
pub use throttle::*;
