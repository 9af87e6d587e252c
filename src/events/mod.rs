pub mod keyboard;
pub mod pointer;
pub mod scroll;

pub use keyboard::wire_keydown;
pub use pointer::wire_pointer_orbit;
pub use scroll::{wire_scroll, DomScrollSource};
