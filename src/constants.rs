/// Host page wiring and backing-buffer limits.
///
/// Canvas ids are looked up once at start; a page may omit any of them.
pub const JOURNEY_CANVAS_ID: &str = "journey-canvas";
pub const GRID_CANVAS_ID: &str = "geo-canvas";
pub const ARC_CANVAS_ID: &str = "arc-canvas";
pub const LOCK_IN_CANVAS_ID: &str = "lock-in-canvas";
pub const GLITCH_CANVAS_ID: &str = "ghost-canvas";

// Height of the journey's scroll container, in viewport heights
pub const JOURNEY_HEIGHT_VH: f32 = 200.0;

// Device pixel ratio is capped to bound backing-buffer memory
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;

// Frames slower than this are logged at debug level (ms)
pub const SLOW_FRAME_MS: f64 = 24.0;
