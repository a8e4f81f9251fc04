use glam::Vec3;

// Shared configurator tuning constants used by the web frontend and tests.

// Classification
pub const KNOB_LUMINANCE_THRESHOLD: f32 = 0.5; // average RGB below this marks a recolorable knob cap

// Selection feedback
pub const HIGHLIGHT_EMISSIVE_HEX: u32 = 0x44_44_44;
pub const CLEAR_EMISSIVE_HEX: u32 = 0x00_00_00;

// Camera framing
pub const NORMAL_CAMERA_POSITION: [f32; 3] = [0.0, 5.0, 5.0]; // orbit framing
pub const TOP_CAMERA_POSITION: [f32; 3] = [0.0, 8.0, 0.0]; // customization framing
pub const CAMERA_TARGET: [f32; 3] = [0.0, 0.0, 0.0];
pub const CAMERA_TRANSITION_SEC: f32 = 1.2;

// Ledger and material defaults (canonical swatch names)
pub const DEFAULT_CHASSIS_SWATCH: &str = "Gray";
pub const DEFAULT_BUTTON_SWATCH: &str = "Black";
pub const DEFAULT_KNOB_SWATCH: &str = "Black";
pub const RING_BASE_HEX: u32 = 0x00_00_00;
pub const BUTTON_SHEEN_HEX: u32 = 0x1C_1C_1C;

#[inline]
pub fn normal_camera_position() -> Vec3 {
    Vec3::from_array(NORMAL_CAMERA_POSITION)
}

#[inline]
pub fn top_camera_position() -> Vec3 {
    Vec3::from_array(TOP_CAMERA_POSITION)
}

#[inline]
pub fn camera_target() -> Vec3 {
    Vec3::from_array(CAMERA_TARGET)
}
