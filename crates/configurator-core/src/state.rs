//! Visual-side state shared with the web frontend.
//!
//! These types avoid platform-specific APIs. The web frontend ticks the rig
//! every animation frame and copies the resulting pose onto the rendering
//! engine's camera and orbit controls.

use std::time::Duration;

use glam::Vec3;

use crate::constants::{camera_target, normal_camera_position, top_camera_position};
use crate::selection::View;

/// Camera eye position and look-at target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
}

impl CameraPose {
    /// Orbit framing for `Normal`, fixed top-down framing for every tool.
    pub fn for_view(view: View) -> Self {
        let position = match view {
            View::Normal => normal_camera_position(),
            _ => top_camera_position(),
        };
        Self {
            position,
            target: camera_target(),
        }
    }

    pub fn lerp(self, other: CameraPose, t: f32) -> Self {
        Self {
            position: self.position.lerp(other.position, t),
            target: self.target.lerp(other.target, t),
        }
    }
}

/// Cubic ease-in-out over `t` in \[0, 1\].
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Smooth camera transition between view framings.
#[derive(Clone, Debug)]
pub struct CameraRig {
    from: CameraPose,
    to: CameraPose,
    current: CameraPose,
    elapsed_sec: f32,
    duration_sec: f32,
    orbit_enabled: bool,
}

impl CameraRig {
    pub fn new(view: View, duration: Duration) -> Self {
        let pose = CameraPose::for_view(view);
        Self {
            from: pose,
            to: pose,
            current: pose,
            elapsed_sec: 0.0,
            duration_sec: duration.as_secs_f32(),
            orbit_enabled: view == View::Normal,
        }
    }

    /// Start a transition from the current pose towards the view's framing.
    /// Orbit controls switch immediately.
    pub fn retarget(&mut self, view: View) {
        self.from = self.current;
        self.to = CameraPose::for_view(view);
        self.elapsed_sec = 0.0;
        self.orbit_enabled = view == View::Normal;
    }

    /// Advance the transition and return the new pose.
    pub fn tick(&mut self, dt: Duration) -> CameraPose {
        if self.is_settled() {
            return self.current;
        }
        self.elapsed_sec = (self.elapsed_sec + dt.as_secs_f32()).min(self.duration_sec);
        let t = if self.duration_sec > 0.0 {
            self.elapsed_sec / self.duration_sec
        } else {
            1.0
        };
        self.current = self.from.lerp(self.to, ease_in_out_cubic(t));
        if self.elapsed_sec >= self.duration_sec {
            self.current = self.to;
        }
        self.current
    }

    /// Adopt a pose moved by the user (free orbit) so the next transition
    /// starts from where the camera actually is.
    pub fn sync_pose(&mut self, pose: CameraPose) {
        if self.is_settled() {
            self.current = pose;
            self.from = pose;
            self.to = pose;
        }
    }

    pub fn pose(&self) -> CameraPose {
        self.current
    }

    pub fn orbit_enabled(&self) -> bool {
        self.orbit_enabled
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.to
    }
}
