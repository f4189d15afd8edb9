//! Progress banding for the journey.
//!
//! All stage boundaries live here so the camera table, the particle pass and
//! the overlays read the same numbers.

use crate::camera::CameraPose;
use crate::easing::{bell, smoothstep};
use crate::math::Projected;
use crate::overlays;
use crate::surface::{Painter, Viewport};
use glam::{Vec2, Vec3};

/// Narrative chapter, used for particle appearance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scene {
    /// Sparse white dots drifting in deep space.
    Space,
    /// Dots collapse onto the globe and turn green.
    Collapse,
    /// Globe with the target highlighted.
    Globe,
    /// Dive toward the target with vertical streaks.
    Descent,
    /// Overhead view of the land grid.
    Land,
    /// Dense site grid forming.
    Site,
    /// Site complete and locked.
    Locked,
}

impl Scene {
    pub const ALL: [Scene; 7] = [
        Scene::Space,
        Scene::Collapse,
        Scene::Globe,
        Scene::Descent,
        Scene::Land,
        Scene::Site,
        Scene::Locked,
    ];

    /// `[start, end)` progress band; the last band is closed at 1.
    pub fn range(self) -> (f32, f32) {
        match self {
            Scene::Space => (0.0, 0.20),
            Scene::Collapse => (0.20, 0.42),
            Scene::Globe => (0.42, 0.56),
            Scene::Descent => (0.56, 0.73),
            Scene::Land => (0.73, 0.85),
            Scene::Site => (0.85, 0.95),
            Scene::Locked => (0.95, 1.0),
        }
    }

    pub fn at(progress: f32) -> Scene {
        Scene::ALL
            .into_iter()
            .find(|s| progress < s.range().1)
            .unwrap_or(Scene::Locked)
    }
}

/// Pair of worlds a particle interpolates between.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorldPair {
    SpaceGlobe,
    GlobeLand,
    LandSite,
}

impl WorldPair {
    pub const GLOBE_LAND_START: f32 = 0.56;
    pub const LAND_SITE_START: f32 = 0.84;

    pub fn at(progress: f32) -> WorldPair {
        if progress < Self::GLOBE_LAND_START {
            WorldPair::SpaceGlobe
        } else if progress < Self::LAND_SITE_START {
            WorldPair::GlobeLand
        } else {
            WorldPair::LandSite
        }
    }
}

/// Named blend weights for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Blend {
    /// space → globe
    pub to_globe: f32,
    /// dims non-highlighted globe particles
    pub globe_dim: f32,
    /// globe → land
    pub to_descend: f32,
    /// land → site
    pub to_site: f32,
    /// transient vertical stretch inside the descent window
    pub stretch: f32,
    /// global fade-in over the first sliver of progress
    pub fade_in: f32,
}

impl Blend {
    pub fn at(p: f32) -> Self {
        Self {
            to_globe: smoothstep(0.14, 0.36, p),
            globe_dim: smoothstep(0.42, 0.50, p),
            to_descend: smoothstep(0.56, 0.73, p),
            to_site: smoothstep(0.84, 0.96, p),
            stretch: bell((0.57, 0.64), (0.67, 0.74), p),
            fade_in: smoothstep(0.0, 0.04, p),
        }
    }

    /// Green tint of the collapsing particles.
    pub fn collapse_tint(p: f32) -> f32 {
        smoothstep(0.20, 0.36, p)
    }
}

/// Open progress window `(start, end)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Window {
    pub start: f32,
    pub end: f32,
}

impl Window {
    pub const fn open(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Window with no upper bound.
    pub const fn after(start: f32) -> Self {
        Self {
            start,
            end: f32::INFINITY,
        }
    }

    #[inline]
    pub fn contains(&self, p: f32) -> bool {
        p > self.start && p < self.end
    }
}

/// Everything an overlay needs to draw one frame.
pub struct SceneFrame<'a> {
    pub progress: f32,
    pub pose: CameraPose,
    pub viewport: Viewport,
    pub blend: Blend,
    pub target: Vec3,
    pub wireframe: &'a overlays::Wireframe,
}

impl SceneFrame<'_> {
    #[inline]
    pub fn project(&self, p: Vec3) -> Option<Projected> {
        self.pose.project(p, self.viewport.half())
    }

    #[inline]
    pub fn half(&self) -> Vec2 {
        self.viewport.half()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StageName {
    Wireframe,
    EarthLabel,
    TargetPulse,
    Plot,
    Site,
    Lock,
}

pub type DrawStage = fn(&SceneFrame<'_>, f32, &mut dyn Painter);

/// Overlay stage: active inside `window`, drawn when `weight` exceeds
/// `min_weight`.
#[derive(Clone, Copy)]
pub struct Stage {
    pub name: StageName,
    pub window: Window,
    pub weight: fn(f32) -> f32,
    pub min_weight: f32,
    pub draw: DrawStage,
}

impl Stage {
    /// Weight at `p`, or `None` when the stage should not draw.
    pub fn active_weight(&self, p: f32) -> Option<f32> {
        if !self.window.contains(p) {
            return None;
        }
        let w = (self.weight)(p);
        (w > self.min_weight).then_some(w)
    }
}

impl std::fmt::Debug for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stage")
            .field("name", &self.name)
            .field("window", &self.window)
            .field("min_weight", &self.min_weight)
            .finish()
    }
}

fn wireframe_weight(p: f32) -> f32 {
    bell((0.28, 0.36), (0.53, 0.57), p)
}

fn earth_label_weight(p: f32) -> f32 {
    bell((0.33, 0.37), (0.39, 0.42), p)
}

fn always(_: f32) -> f32 {
    1.0
}

fn plot_weight(p: f32) -> f32 {
    bell((0.77, 0.82), (0.85, 0.88), p)
}

fn site_weight(p: f32) -> f32 {
    smoothstep(0.87, 0.93, p)
}

fn lock_weight(p: f32) -> f32 {
    smoothstep(0.95, 0.995, p)
}

/// Overlay stages in draw order.
pub static STAGES: [Stage; 6] = [
    Stage {
        name: StageName::Wireframe,
        window: Window::open(0.26, 0.57),
        weight: wireframe_weight,
        min_weight: 0.005,
        draw: overlays::draw_wireframe,
    },
    Stage {
        name: StageName::EarthLabel,
        window: Window::open(0.32, 0.42),
        weight: earth_label_weight,
        min_weight: 0.01,
        draw: overlays::draw_earth_label,
    },
    Stage {
        name: StageName::TargetPulse,
        window: Window::open(0.42, 0.58),
        weight: always,
        min_weight: 0.0,
        draw: overlays::draw_target_pulse,
    },
    Stage {
        name: StageName::Plot,
        window: Window::open(0.76, 0.88),
        weight: plot_weight,
        min_weight: 0.01,
        draw: overlays::draw_plot,
    },
    Stage {
        name: StageName::Site,
        window: Window::after(0.86),
        weight: site_weight,
        min_weight: 0.01,
        draw: overlays::draw_site,
    },
    Stage {
        name: StageName::Lock,
        window: Window::after(0.86),
        weight: lock_weight,
        min_weight: 0.01,
        draw: overlays::draw_lock,
    },
];

/// Stages that draw at `progress`, with their weights.
pub fn active_stages(progress: f32) -> impl Iterator<Item = (&'static Stage, f32)> {
    STAGES
        .iter()
        .filter_map(move |s| s.active_weight(progress).map(|w| (s, w)))
}
