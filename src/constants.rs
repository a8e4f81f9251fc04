// Web frontend constants: DOM hooks and three.js scene tuning.

// DOM element ids (see index.html)
pub const CANVAS_ID: &str = "configurator-canvas";
pub const CONFIGURATOR_ROOT_ID: &str = "configurator";
pub const PRODUCT_TITLE_ID: &str = "configurator-product";
pub const PALETTE_TITLE_ID: &str = "palette-title";
pub const PALETTE_GRID_ID: &str = "palette-grid";
pub const PALETTE_EMPTY_ID: &str = "palette-empty";
pub const FINISH_BUTTON_ID: &str = "finish-order";
pub const CLOSE_BUTTON_ID: &str = "configurator-close";
pub const STATUS_ID: &str = "model-status";
pub const CONFIRM_OVERLAY_ID: &str = "confirm-overlay";
pub const CONFIRM_BODY_ID: &str = "confirm-body";
pub const CONFIRM_OK_ID: &str = "confirm-ok";
pub const CONFIRM_CANCEL_ID: &str = "confirm-cancel";
pub const NOTICE_OVERLAY_ID: &str = "notice-overlay";
pub const NOTICE_BODY_ID: &str = "notice-body";
pub const NOTICE_OK_ID: &str = "notice-ok";
pub const CART_COUNT_ID: &str = "cart-count";
pub const TOOL_ID_PREFIX: &str = "tool-"; // followed by View::id()

// Attributes
pub const OPEN_CONFIGURATOR_ATTR: &str = "data-open-configurator"; // value: product id or name
pub const AUTO_OPEN_ATTR: &str = "data-product"; // on the canvas
pub const SWATCH_ATTR: &str = "data-swatch";
pub const ACTIVE_CLASS: &str = "active";
pub const CHOSEN_CLASS: &str = "chosen";

// DOM events
pub const CART_ADD_EVENT: &str = "cart:add";

// Camera
pub const CAMERA_FOV_DEG: f64 = 45.0;
pub const CAMERA_NEAR: f64 = 0.1;
pub const CAMERA_FAR: f64 = 100.0;
pub const ORBIT_DAMPING: f64 = 0.05;
pub const ORBIT_MIN_DISTANCE: f64 = 2.0;
pub const ORBIT_MAX_DISTANCE: f64 = 10.0;
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Model placement
pub const MODEL_SCALE: f64 = 22.0;
pub const MODEL_ROTATION_Y: f64 = -std::f64::consts::FRAC_PI_2;
pub const MODEL_LIFT_Y: f64 = 1.0; // model is centered, then raised by this much

// Loading placeholder (wireframe cube)
pub const PLACEHOLDER_SIZE: f64 = 2.0;
pub const PLACEHOLDER_HEX: u32 = 0x06_B6_D4;

// Lighting: (color, intensity, position)
pub const AMBIENT_LIGHT: (u32, f64) = (0xFF_FF_FF, 0.9);
pub const DIRECTIONAL_LIGHTS: [(u32, f64, [f64; 3]); 4] = [
    (0xFF_FF_FF, 1.2, [5.0, 4.0, -1.0]),
    (0x99_CC_FF, 1.0, [-8.0, 3.0, -9.0]),
    (0x99_CC_FF, 1.0, [-8.0, 3.0, 15.0]),
    (0xFF_FF_FF, 1.2, [-5.0, 30.0, 0.0]),
];
pub const POINT_LIGHT: (u32, f64, [f64; 3]) = (0xFF_FF_FF, 0.7, [0.0, 5.0, 5.0]);
