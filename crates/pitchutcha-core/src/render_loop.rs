//! Per-frame pose computation for the globe.
//!
//! These types avoid referencing platform APIs; the web front-end calls
//! [`RenderLoop::frame`] once per animation frame and feeds the resulting
//! matrices to the GPU.

use crate::constants::{CAMERA_FOVY_RADIANS, CAMERA_ZFAR, CAMERA_ZNEAR, IDLE_RADIANS_PER_FRAME};
use crate::orientation::Orientation;
use crate::state::{DragFlag, OrientationReader};
use glam::{Mat4, Quat, Vec3};
use std::f32::consts::TAU;

/// Fixed idle spin increment applied per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IdleSpin {
    pub radians_per_frame: f32,
}

impl Default for IdleSpin {
    fn default() -> Self {
        Self {
            radians_per_frame: IDLE_RADIANS_PER_FRAME,
        }
    }
}

/// Everything the renderer needs to place the globe for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub orientation: Orientation,
    pub idle_angle: f32,
    pub manual_yaw: f32,
    pub manual_pitch: f32,
}

impl Pose {
    pub fn yaw(&self) -> f32 {
        self.orientation.rotation_y + self.idle_angle + self.manual_yaw
    }

    pub fn pitch(&self) -> f32 {
        self.orientation.rotation_x + self.manual_pitch
    }

    /// Globe model matrix: yaw about +Y, then tilt about +X.
    pub fn model_matrix(&self) -> Mat4 {
        let rotation = Quat::from_rotation_x(self.pitch()) * Quat::from_rotation_y(self.yaw());
        Mat4::from_quat(rotation)
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Camera looking at the globe centre from `pose.orientation.camera_z`.
    pub fn for_pose(pose: &Pose, aspect: f32) -> Self {
        let aspect = if aspect.is_finite() && aspect > 0.0 {
            aspect
        } else {
            1.0
        };
        Self {
            eye: Vec3::new(0.0, 0.0, pose.orientation.camera_z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_RADIANS,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// Reads the shared orientation and drag input, owns the idle spin.
pub struct RenderLoop {
    reader: OrientationReader,
    drag: DragFlag,
    idle: IdleSpin,
    idle_angle: f32,
}

impl RenderLoop {
    pub fn new(reader: OrientationReader, drag: DragFlag, idle: IdleSpin) -> Self {
        Self {
            reader,
            drag,
            idle,
            idle_angle: 0.0,
        }
    }

    /// Advance one display frame. Idle spin only accumulates while the globe
    /// is not being dragged.
    pub fn frame(&mut self) -> Pose {
        let input = self.drag.input();
        if !input.dragging {
            self.idle_angle = (self.idle_angle + self.idle.radians_per_frame).rem_euclid(TAU);
        }
        Pose {
            orientation: self.reader.get(),
            idle_angle: self.idle_angle,
            manual_yaw: input.manual_yaw,
            manual_pitch: input.manual_pitch,
        }
    }

    pub fn idle_angle(&self) -> f32 {
        self.idle_angle
    }
}
