pub mod camera;
pub mod compositor;
pub mod constants;
pub mod easing;
pub mod effects;
pub mod math;
pub mod overlays;
pub mod particles;
pub mod scheduler;
pub mod scroll;
pub mod stages;
pub mod surface;

pub use camera::{CameraPath, CameraPose, Keyframe, PathError};
pub use compositor::{Journey, JourneyConfig};
pub use effects::{CanvasEffect, EffectSettings, ScrollSource, Sizing};
pub use particles::{Particle, ParticleField};
pub use scheduler::{FrameClock, FrameScheduler};
pub use scroll::{ScrollRange, ScrollSample};
pub use surface::{Painter, Recorder, Viewport};
