// DOM hooks and visual tuning used by the web front-end.
// Kept free of web-sys so host tests can include this file directly.

// Element ids
pub const CANVAS_ID: &str = "globe-canvas";
pub const NARRATIVE_ID: &str = "narrative";
pub const PRELOADER_ID: &str = "preloader";
pub const PRELOADER_COUNTER_ID: &str = "preloader-counter";
pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const DRAWER_ID: &str = "nav-drawer";
pub const DRAWER_TOGGLE_ID: &str = "nav-toggle";
pub const TOC_ID: &str = "toc";
pub const PALETTE_ID: &str = "command-palette";
pub const PALETTE_INPUT_ID: &str = "command-palette-input";
pub const PALETTE_LIST_ID: &str = "command-palette-list";
pub const SEARCH_ID: &str = "search-modal";
pub const SEARCH_INPUT_ID: &str = "search-input";
pub const SEARCH_RESULTS_ID: &str = "search-results";
pub const SEARCH_OPEN_ID: &str = "search-open";

// Selectors
pub const CHAPTER_SELECTOR: &str = "#narrative [id^='chapter-']";
pub const REVEAL_SELECTOR: &str = "[data-reveal]";
pub const HERO_ITEM_SELECTOR: &str = "[data-hero-item]";
pub const SEARCHABLE_SELECTOR: &str = "main section[id]";
pub const DRAWER_LINK_SELECTOR: &str = "#nav-drawer a";
pub const TOC_LINK_SELECTOR: &str = "#toc a[href^='#']";

// Classes and attributes
pub const CLASS_REVEALED: &str = "is-revealed";
pub const CLASS_OPEN: &str = "is-open";
pub const CLASS_ACTIVE: &str = "is-active";
pub const CLASS_SELECTED: &str = "is-selected";
pub const CLASS_VISIBLE: &str = "is-visible";
pub const CLASS_DONE: &str = "is-done";
pub const CLASS_BODY_LOCKED: &str = "no-scroll";
pub const ATTR_THEME: &str = "data-theme";
pub const ATTR_CHAPTER: &str = "data-chapter";

pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

// Globe mesh
pub const GLOBE_LAT_SEGMENTS: u32 = 48;
pub const GLOBE_LON_SEGMENTS: u32 = 96;
pub const GLOBE_RADIUS: f32 = 1.0;

// Background clear colours (linear RGB) per theme
pub const CLEAR_DARK: [f64; 3] = [0.012, 0.016, 0.035];
pub const CLEAR_LIGHT: [f64; 3] = [0.93, 0.94, 0.96];

// Globe shading
pub const GLOBE_BASE_COLOR: [f32; 3] = [0.10, 0.32, 0.62];
pub const GLOBE_GRID_COLOR: [f32; 3] = [0.55, 0.80, 1.00];
pub const GLOBE_GRID_LINES: f32 = 18.0; // meridians/parallels across a full turn
pub const LIGHT_DIR: [f32; 3] = [-0.4, 0.5, 0.75];
