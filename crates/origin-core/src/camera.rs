//! Keyframed camera path resolved from scroll progress.

use crate::easing::{lerp, lerp_vec3, smoothstep};
use crate::math::{project, Projected};
use glam::{Vec2, Vec3};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    pub progress: f32,
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

impl Keyframe {
    pub const fn new(progress: f32, position: Vec3, yaw: f32, pitch: f32) -> Self {
        Self {
            progress,
            position,
            yaw,
            pitch,
        }
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.position,
            yaw: self.yaw,
            pitch: self.pitch,
        }
    }
}

/// Camera position and orientation for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

impl CameraPose {
    #[inline]
    pub fn project(&self, point: Vec3, half: Vec2) -> Option<Projected> {
        project(point, self.position, self.yaw, self.pitch, half)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum PathError {
    #[error("camera path needs at least two keyframes, got {0}")]
    TooFewKeyframes(usize),
    #[error("first keyframe must sit at progress 0, found {0}")]
    BadStart(f32),
    #[error("last keyframe must sit at progress 1, found {0}")]
    BadEnd(f32),
    #[error("keyframe {index} at {progress} does not follow {previous}")]
    NotIncreasing {
        index: usize,
        progress: f32,
        previous: f32,
    },
    #[error("keyframe {0} has a non-finite component")]
    NonFinite(usize),
}

//   p  position (x, y, z)  yaw  pitch
const JOURNEY_KEYFRAMES: [Keyframe; 13] = [
    Keyframe::new(0.00, Vec3::new(0.0, 0.0, -5500.0), 0.0, 0.0), // deep space
    Keyframe::new(0.15, Vec3::new(0.0, 0.0, -4000.0), 0.0, 0.0), // drifting
    Keyframe::new(0.20, Vec3::new(0.0, 0.0, -2800.0), 0.0, 0.0), // collapse begins
    Keyframe::new(0.35, Vec3::new(0.0, 0.0, -1500.0), 0.0, 0.0), // globe forming
    Keyframe::new(0.40, Vec3::new(0.0, 0.0, -1200.0), 0.0, 0.0), // globe complete
    Keyframe::new(0.45, Vec3::new(0.0, 50.0, -1050.0), -0.12, -0.18), // pan to target
    Keyframe::new(0.55, Vec3::new(0.0, 90.0, -850.0), -0.12, -0.18), // target centered
    Keyframe::new(0.60, Vec3::new(0.0, 160.0, -550.0), -0.06, 0.2), // descent begins
    Keyframe::new(0.70, Vec3::new(0.0, 450.0, -50.0), 0.0, 0.95), // diving through
    Keyframe::new(0.78, Vec3::new(0.0, 550.0, 40.0), 0.0, 1.2),   // overhead
    Keyframe::new(0.85, Vec3::new(0.0, 520.0, 50.0), 0.0, 1.18),  // land view
    Keyframe::new(0.92, Vec3::new(0.0, 480.0, 55.0), 0.0, 1.12),  // site forming
    Keyframe::new(1.00, Vec3::new(0.0, 460.0, 55.0), 0.0, 1.1),   // locked
];

/// Ordered keyframes; the single source of camera motion.
#[derive(Clone, Debug)]
pub struct CameraPath {
    keyframes: Vec<Keyframe>,
}

impl CameraPath {
    /// Validate and wrap a keyframe table.
    pub fn new(keyframes: Vec<Keyframe>) -> Result<Self, PathError> {
        if keyframes.len() < 2 {
            return Err(PathError::TooFewKeyframes(keyframes.len()));
        }
        for (i, k) in keyframes.iter().enumerate() {
            let finite = k.progress.is_finite()
                && k.position.is_finite()
                && k.yaw.is_finite()
                && k.pitch.is_finite();
            if !finite {
                return Err(PathError::NonFinite(i));
            }
        }
        for (i, w) in keyframes.windows(2).enumerate() {
            if w[1].progress <= w[0].progress {
                return Err(PathError::NotIncreasing {
                    index: i + 1,
                    progress: w[1].progress,
                    previous: w[0].progress,
                });
            }
        }
        let first = keyframes[0].progress;
        if first != 0.0 {
            return Err(PathError::BadStart(first));
        }
        let last = keyframes[keyframes.len() - 1].progress;
        if last != 1.0 {
            return Err(PathError::BadEnd(last));
        }
        Ok(Self { keyframes })
    }

    /// The space → globe → target → ground journey.
    pub fn journey() -> Self {
        debug_assert!(Self::new(JOURNEY_KEYFRAMES.to_vec()).is_ok());
        Self {
            keyframes: JOURNEY_KEYFRAMES.to_vec(),
        }
    }

    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    /// Index of the keyframe that opens the interval containing `progress`.
    fn segment(&self, progress: f32) -> usize {
        let last = self.keyframes.len() - 2;
        let mut i = 0;
        while i < last && self.keyframes[i + 1].progress < progress {
            i += 1;
        }
        i
    }

    /// Pose at `progress`, eased between the bracketing keyframes.
    ///
    /// At a keyframe's exact progress the result equals that keyframe.
    pub fn resolve(&self, progress: f32) -> CameraPose {
        let p = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let i = self.segment(p);
        let (a, b) = (&self.keyframes[i], &self.keyframes[i + 1]);
        let t = smoothstep(a.progress, b.progress, p);
        CameraPose {
            position: lerp_vec3(a.position, b.position, t),
            yaw: lerp(a.yaw, b.yaw, t),
            pitch: lerp(a.pitch, b.pitch, t),
        }
    }
}

impl Default for CameraPath {
    fn default() -> Self {
        Self::journey()
    }
}
