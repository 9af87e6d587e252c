//! Page behaviors around the narrative: theme, navigation, reveal effects,
//! preloader, command palette and search.

pub mod drawer;
pub mod palette;
pub mod preloader;
pub mod reveal;
pub mod scrollspy;
pub mod search;
pub mod shortcuts;
pub mod theme;

pub use drawer::{Drawer, DrawerEvent, DrawerState, DrawerView};
pub use palette::{fuzzy_score, Command, CommandAction, CommandPalette};
pub use preloader::{PreloaderPhase, PreloaderTimeline};
pub use reveal::{stagger_delay_ms, RevealTracker};
pub use scrollspy::{Heading, ScrollSpy};
pub use search::{FocusTrap, SearchEntry, SearchHit, SearchIndex};
pub use shortcuts::{allowed_while_typing, shortcut_for, Shortcut};
pub use theme::{resolve_theme, MemoryStore, PreferenceStore, StorageError, Theme, ThemeController};
