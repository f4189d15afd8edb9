use crate::surface::Rgb;

// Shared geometry, palette and timing constants for the journey and the
// smaller canvas effects.

// Particle field
pub const PARTICLE_COUNT: usize = 800;
pub const GLOBE_RADIUS: f32 = 400.0;
pub const GLOBE_TILT: f32 = 0.4; // globe yaw so the target starts off-center
pub const GOLDEN_ANGLE: f32 = 2.399_963_2; // PI * (3 - sqrt(5))
pub const SPACE_EXTENT: [f32; 3] = [9000.0, 7000.0, 9000.0];
pub const BRIGHTNESS_MIN: f32 = 0.25;
pub const LAND_SPACING: f32 = 22.0;
pub const SITE_COLUMNS: usize = 20;
pub const SITE_SPACING: f32 = 16.0;

// Highlighted target (degrees) and the radius that marks particles around it
pub const TARGET_LAT_DEG: f32 = 53.35;
pub const TARGET_LON_DEG: f32 = -6.26;
pub const HIGHLIGHT_RADIUS: f32 = 75.0;

// Projection
pub const FOCAL_LENGTH: f32 = 800.0;
pub const MIN_DEPTH: f32 = 2.0;
pub const CULL_MARGIN: f32 = 80.0;

// Particle sizing
pub const PARTICLE_SIZE_GAIN: f32 = 180.0;
pub const PARTICLE_SIZE_MIN: f32 = 0.4;
pub const PARTICLE_SIZE_MAX: f32 = 3.5;
pub const STRETCH_HEIGHT: f32 = 280.0;

// Overlay geometry
pub const WIREFRAME_SEGMENTS: usize = 72;
pub const WIREFRAME_LATITUDES: [f32; 6] = [0.0, 23.4, -23.4, 53.35, -40.0, 66.5];
pub const WIREFRAME_MERIDIANS: [f32; 7] = [-60.0, -30.0, -6.26, 0.0, 30.0, 60.0, 90.0];
pub const PLOT_HALF_SIZE: f32 = 140.0;
pub const SITE_HALF_SIZE: f32 = 110.0;
pub const SITE_BRACKET_LEN: f32 = 14.0;
pub const SITE_MARKER_SPACING: f32 = 42.0;
pub const SITE_MARKER_HALF_COUNT: i32 = 2; // 5x5 markers

// Scroll coalescing thresholds
pub const JOURNEY_EPSILON: f32 = 0.0004;
pub const GRID_EPSILON: f32 = 0.0008;
pub const ARC_EPSILON: f32 = 0.001;
pub const LOCK_IN_EPSILON: f32 = 0.001;
pub const GLITCH_EPSILON: f32 = 0.002;

// Palette
pub const BACKGROUND: Rgb = Rgb::new(8, 9, 10);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);
pub const ACCENT: Rgb = Rgb::new(16, 185, 129);
pub const MUTED: Rgb = Rgb::new(107, 114, 128);
pub const FOREGROUND: Rgb = Rgb::new(237, 237, 237);
pub const DANGER: Rgb = Rgb::new(239, 68, 68);

// Copy drawn onto the canvases
pub const TARGET_LAT_LABEL: &str = "53.3498° N";
pub const TARGET_LON_LABEL: &str = " 6.2603° W";
pub const TARGET_CAPTION: &str = "53.3498° N  ·  6.2603° W";
pub const TARGET_NAME: &str = "Dublin";
pub const TARGET_SHORT: &str = "53.35°N 6.26°W";
pub const FALSE_COORDINATE: &str = "53.3498° N, 6.2611° W";
pub const LOCKED_LABEL: &str = "Origin locked.";
pub const EARTH_LABEL: &str = "Earth";
