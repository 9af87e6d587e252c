use crate::constants::CHAPTER_ID_PREFIX;
use crate::driver::TransitionConfig;
use crate::orientation::OrientationLimits;
use crate::render_loop::IdleSpin;

/// Runtime knobs for the narrative, defaulting to the crate constants.
#[derive(Clone, Debug, PartialEq)]
pub struct NarrativeConfig {
    pub anchor_prefix: String,
    pub limits: OrientationLimits,
    pub transition: TransitionConfig,
    pub idle: IdleSpin,
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            anchor_prefix: CHAPTER_ID_PREFIX.to_string(),
            limits: OrientationLimits::default(),
            transition: TransitionConfig::default(),
            idle: IdleSpin::default(),
        }
    }
}
