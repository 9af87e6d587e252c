use crate::constants::{CAMERA_Z_DEFAULT, CAMERA_Z_MAX, CAMERA_Z_MIN};
use std::f32::consts::TAU;

/// Target or live attitude of the globe plus the camera distance.
///
/// Rotations are in radians and are not wrapped; the renderer treats them
/// modulo 2π. `camera_z` is the eye distance along +Z.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orientation {
    pub rotation_y: f32,
    pub rotation_x: f32,
    pub camera_z: f32,
}

impl Default for Orientation {
    fn default() -> Self {
        Self {
            rotation_y: 0.0,
            rotation_x: 0.0,
            camera_z: CAMERA_Z_DEFAULT,
        }
    }
}

impl Orientation {
    pub const fn new(rotation_y: f32, rotation_x: f32, camera_z: f32) -> Self {
        Self {
            rotation_y,
            rotation_x,
            camera_z,
        }
    }

    /// Componentwise linear interpolation; `t` is clamped to [0, 1].
    pub fn lerp(a: Orientation, b: Orientation, t: f32) -> Orientation {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        Orientation {
            rotation_y: a.rotation_y + (b.rotation_y - a.rotation_y) * t,
            rotation_x: a.rotation_x + (b.rotation_x - a.rotation_x) * t,
            camera_z: a.camera_z + (b.camera_z - a.camera_z) * t,
        }
    }

    /// Replace non-finite components with defaults and clamp the camera.
    pub fn constrained(self, limits: &OrientationLimits) -> Orientation {
        let fallback = Orientation::default();
        let pick = |v: f32, d: f32| if v.is_finite() { v } else { d };
        Orientation {
            rotation_y: pick(self.rotation_y, fallback.rotation_y),
            rotation_x: pick(self.rotation_x, fallback.rotation_x),
            camera_z: limits.clamp_camera(pick(self.camera_z, fallback.camera_z)),
        }
    }

    #[inline]
    pub fn wrapped_yaw(&self) -> f32 {
        self.rotation_y.rem_euclid(TAU)
    }

    pub fn is_finite(&self) -> bool {
        self.rotation_y.is_finite() && self.rotation_x.is_finite() && self.camera_z.is_finite()
    }
}

/// Orbit constraints on the camera distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrientationLimits {
    pub camera_min: f32,
    pub camera_max: f32,
}

impl Default for OrientationLimits {
    fn default() -> Self {
        Self {
            camera_min: CAMERA_Z_MIN,
            camera_max: CAMERA_Z_MAX,
        }
    }
}

impl OrientationLimits {
    #[inline]
    pub fn clamp_camera(&self, z: f32) -> f32 {
        if !self.camera_min.is_finite() || !self.camera_max.is_finite() {
            return z;
        }
        let (lo, hi) = if self.camera_min <= self.camera_max {
            (self.camera_min, self.camera_max)
        } else {
            (self.camera_max, self.camera_min)
        };
        z.clamp(lo, hi)
    }
}
