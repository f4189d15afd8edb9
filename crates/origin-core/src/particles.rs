//! Particle field: every particle carries one target position per world.
//!
//! Layout is split from the random channel. [`layout`] is a pure function of
//! `(index, count)` and fixes the globe, land and site positions plus the
//! highlight flag; only the deep-space scatter and brightness are drawn from
//! an RNG.

use crate::constants::*;
use crate::math::{sphere_point, tilt};
use glam::Vec3;
use rand::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub space: Vec3,
    pub globe: Vec3,
    pub land: Vec3,
    pub site: Vec3,
    /// Fixed at creation, in `[BRIGHTNESS_MIN, 1]`.
    pub brightness: f32,
    /// Globe position lies within [`HIGHLIGHT_RADIUS`] of the target.
    pub highlighted: bool,
}

/// Deterministic part of a particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub globe: Vec3,
    pub land: Vec3,
    pub site: Vec3,
    pub highlighted: bool,
}

/// Row-major square-ish grid on the `y = 0` plane, centered on the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grid {
    /// `None` sizes the grid to `ceil(sqrt(count))` columns.
    pub columns: Option<usize>,
    pub spacing: f32,
}

impl Grid {
    pub const LAND: Grid = Grid {
        columns: None,
        spacing: LAND_SPACING,
    };
    pub const SITE: Grid = Grid {
        columns: Some(SITE_COLUMNS),
        spacing: SITE_SPACING,
    };

    pub fn columns_for(&self, count: usize) -> usize {
        self.columns
            .unwrap_or_else(|| (count as f64).sqrt().ceil() as usize)
            .max(1)
    }

    pub fn place(&self, index: usize, count: usize) -> Vec3 {
        let cols = self.columns_for(count);
        let row = (index / cols) as f32;
        let col = (index % cols) as f32;
        let center = cols as f32 / 2.0;
        Vec3::new((col - center) * self.spacing, 0.0, (row - center) * self.spacing)
    }
}

/// Target coordinate on the tilted globe.
pub fn target_on_globe() -> Vec3 {
    tilt(
        sphere_point(
            GLOBE_RADIUS,
            TARGET_LAT_DEG.to_radians(),
            TARGET_LON_DEG.to_radians(),
        ),
        GLOBE_TILT,
    )
}

/// Evenly distributed point `index` of `count` on the globe surface.
///
/// Latitude is equal-area (arccos of a linearly spaced value) and longitude
/// advances by the golden angle.
pub fn fibonacci_sphere(index: usize, count: usize) -> Vec3 {
    let n = count.max(1) as f32;
    let theta = (1.0 - 2.0 * (index as f32 + 0.5) / n).clamp(-1.0, 1.0).acos();
    let phi = GOLDEN_ANGLE * index as f32;
    let p = Vec3::new(
        GLOBE_RADIUS * theta.sin() * phi.cos(),
        GLOBE_RADIUS * theta.cos(),
        -GLOBE_RADIUS * theta.sin() * phi.sin(),
    );
    tilt(p, GLOBE_TILT)
}

pub fn layout(index: usize, count: usize) -> Layout {
    let globe = fibonacci_sphere(index, count);
    Layout {
        globe,
        land: Grid::LAND.place(index, count),
        site: Grid::SITE.place(index, count),
        highlighted: globe.distance(target_on_globe()) < HIGHLIGHT_RADIUS,
    }
}

/// Immutable particle set, built once per mounted journey.
#[derive(Clone, Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let particles = (0..count)
            .map(|i| {
                let Layout {
                    globe,
                    land,
                    site,
                    highlighted,
                } = layout(i, count);
                let space = Vec3::new(
                    (rng.gen::<f32>() - 0.5) * SPACE_EXTENT[0],
                    (rng.gen::<f32>() - 0.5) * SPACE_EXTENT[1],
                    (rng.gen::<f32>() - 0.5) * SPACE_EXTENT[2],
                );
                let brightness = BRIGHTNESS_MIN + rng.gen::<f32>() * (1.0 - BRIGHTNESS_MIN);
                Particle {
                    space,
                    globe,
                    land,
                    site,
                    brightness,
                    highlighted,
                }
            })
            .collect::<Vec<_>>();
        let field = Self { particles };
        log::debug!(
            "[particles] generated {} ({} highlighted)",
            field.len(),
            field.highlighted_count()
        );
        field
    }

    /// Generate with an OS-seeded RNG.
    pub fn with_entropy(count: usize) -> Self {
        Self::generate(count, &mut StdRng::from_entropy())
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn highlighted_count(&self) -> usize {
        self.particles.iter().filter(|p| p.highlighted).count()
    }
}
