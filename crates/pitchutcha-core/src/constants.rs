//! Tuning constants shared by the narrative driver and the page features.
//!
//! These keep magic numbers out of the logic. Anything the front-end needs to
//! vary at runtime goes through [`crate::NarrativeConfig`] instead.

use std::f32::consts::TAU;

// Globe camera
pub const CAMERA_Z_DEFAULT: f32 = 3.4; // resting eye distance from the globe centre
pub const CAMERA_Z_MIN: f32 = 1.8; // closest allowed approach
pub const CAMERA_Z_MAX: f32 = 8.0; // farthest allowed retreat
pub const CAMERA_FOVY_RADIANS: f32 = std::f32::consts::FRAC_PI_4;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Idle spin applied by the render loop while nobody is dragging
pub const IDLE_RADIANS_PER_FRAME: f32 = TAU / 3600.0; // one turn per minute at 60 fps

// Manual orbit
pub const DRAG_RADIANS_PER_PX: f32 = 0.005;
pub const MAX_MANUAL_PITCH: f32 = 1.2; // just under 70 degrees

// Scroll-coupled transitions
pub const TRANSITION_WINDOW: f32 = 0.6; // share of a chapter's range spent easing in

// DOM anchor convention
pub const CHAPTER_ID_PREFIX: &str = "chapter-";

// Theme persistence
pub const THEME_STORAGE_KEY: &str = "pitchutcha-theme";

// Layout
pub const DESKTOP_BREAKPOINT_PX: f32 = 960.0; // drawer auto-closes at or above this width
pub const SCROLLSPY_ACTIVATION_MARGIN_PX: f32 = 96.0; // roughly the sticky header height

// Reveal-on-scroll
pub const REVEAL_THRESHOLD: f32 = 0.15;
pub const REVEAL_STAGGER_MS: u32 = 80;
pub const REVEAL_STAGGER_MAX_MS: u32 = 480;

// Preloader and hero entrance (milliseconds)
pub const PRELOADER_COUNT_MS: f64 = 1800.0;
pub const PRELOADER_FADE_MS: f64 = 600.0;
pub const HERO_STAGGER_MS: f64 = 120.0;

// Search
pub const SEARCH_RESULT_LIMIT: usize = 8;
