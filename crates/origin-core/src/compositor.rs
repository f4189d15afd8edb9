//! The journey renderer: one full repaint per call.

use crate::camera::CameraPath;
use crate::constants::*;
use crate::easing::{lerp, lerp_vec3};
use crate::effects::{CanvasEffect, EffectSettings, ScrollSource, Sizing};
use crate::overlays::Wireframe;
use crate::particles::{target_on_globe, Particle, ParticleField};
use crate::scroll::ScrollRange;
use crate::stages::{active_stages, Blend, Scene, SceneFrame, WorldPair};
use crate::surface::{Painter, Rgb, Stroke, Viewport};
use glam::{Vec2, Vec3};

#[derive(Clone, Debug)]
pub struct JourneyConfig {
    pub particle_count: usize,
}

impl Default for JourneyConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
        }
    }
}

/// Scroll-driven space → globe → site sequence.
///
/// The particle field, camera path and wireframe geometry are built once and
/// only read afterwards.
pub struct Journey {
    field: ParticleField,
    path: CameraPath,
    wireframe: Wireframe,
    target: Vec3,
}

impl Journey {
    pub fn new(field: ParticleField) -> Self {
        Self::with_path(field, CameraPath::journey())
    }

    pub fn from_config(config: &JourneyConfig) -> Self {
        Self::new(ParticleField::with_entropy(config.particle_count))
    }

    pub fn with_path(field: ParticleField, path: CameraPath) -> Self {
        Self {
            field,
            path,
            wireframe: Wireframe::globe(),
            target: target_on_globe(),
        }
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn path(&self) -> &CameraPath {
        &self.path
    }

    /// Paint the frame for `progress` onto `painter`.
    pub fn render(&self, progress: f32, viewport: Viewport, painter: &mut dyn Painter) {
        if viewport.is_empty() {
            return;
        }
        let p = progress.clamp(0.0, 1.0);
        painter.fill_background(BACKGROUND);

        let frame = SceneFrame {
            progress: p,
            pose: self.path.resolve(p),
            viewport,
            blend: Blend::at(p),
            target: self.target,
            wireframe: &self.wireframe,
        };

        self.draw_particles(&frame, painter);
        for (stage, weight) in active_stages(p) {
            (stage.draw)(&frame, weight, painter);
        }

        let half = viewport.half();
        painter.radial_vignette(
            half,
            viewport.height * 0.35,
            viewport.height * 0.85,
            BACKGROUND.alpha(0.45),
        );
    }

    fn draw_particles(&self, frame: &SceneFrame<'_>, painter: &mut dyn Painter) {
        let p = frame.progress;
        let b = frame.blend;
        let pair = WorldPair::at(p);
        let scene = Scene::at(p);
        let tint = Blend::collapse_tint(p);

        for pt in self.field.particles() {
            let pos = world_position(pt, pair, &b);
            let Some(pr) = frame.project(pos) else {
                continue;
            };
            let at = pr.pos();
            if !frame.viewport.contains(at, CULL_MARGIN) {
                continue;
            }

            let mut alpha = pt.brightness * b.fade_in;
            let mut size = (PARTICLE_SIZE_GAIN * pr.scale).clamp(PARTICLE_SIZE_MIN, PARTICLE_SIZE_MAX);
            let mut color: Rgb = ACCENT;

            match scene {
                Scene::Space => {
                    color = WHITE;
                    alpha *= 0.35;
                    size *= 0.55;
                }
                Scene::Collapse => {
                    color = WHITE.mix(ACCENT, tint);
                    alpha *= lerp(0.35, 0.65, tint);
                }
                Scene::Globe => {
                    if pt.highlighted {
                        alpha = (b.fade_in * 1.2).clamp(0.0, 1.0);
                        size *= 2.0;
                    } else {
                        alpha *= lerp(0.6, 0.12, b.globe_dim);
                    }
                }
                Scene::Descent => {
                    alpha *= 0.3 * (1.0 - b.to_descend * 0.4);
                    if b.stretch > 0.05 {
                        let len = b.stretch * 18.0 * pr.scale * 200.0;
                        painter.stroke_line(
                            at - Vec2::new(0.0, len * 0.5),
                            at + Vec2::new(0.0, len * 0.5),
                            Stroke::new(ACCENT.alpha(alpha * 0.25), 0.5),
                        );
                    }
                }
                Scene::Land => {
                    alpha *= 0.4;
                }
                Scene::Site | Scene::Locked => {
                    alpha *= 0.3 + b.to_site * 0.4;
                    size = (size * (1.0 + b.to_site * 0.5)).clamp(0.5, 3.0);
                }
            }

            painter.fill_circle(at, size, color.alpha(alpha));
        }
    }
}

/// Interpolated position of `pt` between its active pair of worlds.
pub fn world_position(pt: &Particle, pair: WorldPair, b: &Blend) -> Vec3 {
    match pair {
        WorldPair::SpaceGlobe => lerp_vec3(pt.space, pt.globe, b.to_globe),
        WorldPair::GlobeLand => {
            let mut v = lerp_vec3(pt.globe, pt.land, b.to_descend);
            let hemisphere = if pt.globe.y > 0.0 { 1.0 } else { -1.0 };
            v.y += b.stretch * hemisphere * STRETCH_HEIGHT * (1.0 - b.to_descend);
            v
        }
        WorldPair::LandSite => lerp_vec3(pt.land, pt.site, b.to_site),
    }
}

impl CanvasEffect for Journey {
    fn name(&self) -> &'static str {
        "journey"
    }

    fn settings(&self) -> EffectSettings {
        EffectSettings {
            source: ScrollSource::Element(ScrollRange::JOURNEY),
            remap: (0.0, 1.0),
            epsilon: JOURNEY_EPSILON,
            sizing: Sizing::Viewport,
            opaque: true,
        }
    }

    fn draw(&mut self, progress: f32, viewport: Viewport, painter: &mut dyn Painter) {
        self.render(progress, viewport, painter);
    }
}
