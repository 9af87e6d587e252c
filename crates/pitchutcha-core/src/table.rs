use crate::orientation::Orientation;
use fnv::FnvHashMap;
use std::f32::consts::{FRAC_PI_2, PI};

/// Static chapter id -> target orientation lookup.
#[derive(Clone, Debug, Default)]
pub struct OrientationTable {
    targets: FnvHashMap<String, Orientation>,
    default: Orientation,
}

impl OrientationTable {
    pub fn new(default: Orientation) -> Self {
        Self {
            targets: FnvHashMap::default(),
            default,
        }
    }

    /// The four chapters of the Pitchutcha story.
    pub fn pitchutcha() -> Self {
        let mut table = Self::new(Orientation::default());
        // Africa and Europe
        table.insert("humanity", Orientation::new(0.0, 0.18, 3.4));
        // the Americas, a little closer
        table.insert("science", Orientation::new(FRAC_PI_2, -0.12, 3.0));
        // Pacific rim, close-up
        table.insert("technology", Orientation::new(PI, 0.30, 2.6));
        // pull back to the whole globe
        table.insert("future", Orientation::new(3.0 * FRAC_PI_2, 0.0, 4.6));
        table
    }

    pub fn insert(&mut self, id: impl Into<String>, orientation: Orientation) {
        self.targets.insert(id.into(), orientation);
    }

    #[inline]
    pub fn target(&self, id: &str) -> Option<Orientation> {
        self.targets.get(id).copied()
    }

    #[inline]
    pub fn target_or_default(&self, id: &str) -> Orientation {
        self.target(id).unwrap_or(self.default)
    }

    #[inline]
    pub fn default_orientation(&self) -> Orientation {
        self.default
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
