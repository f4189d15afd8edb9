use glam::Vec2;
use origin_core::surface::{Font, Painter, Rgb, Rgba, Stroke, TextAlign, TextBaseline, TextStyle};
use std::f64::consts::TAU;
use web_sys as web;

/// [`Painter`] backed by a 2D canvas context.
///
/// Drawing is in logical pixels; the device pixel ratio is folded into the
/// base transform by [`CanvasPainter::begin`].
pub struct CanvasPainter<'a> {
    ctx: &'a web::CanvasRenderingContext2d,
    dpr: f64,
    width: f64,
    height: f64,
}

impl<'a> CanvasPainter<'a> {
    /// Reset the transform for a new frame of `width` x `height` logical px.
    pub fn begin(ctx: &'a web::CanvasRenderingContext2d, dpr: f64, width: f64, height: f64) -> Self {
        _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        Self {
            ctx,
            dpr,
            width,
            height,
        }
    }

    fn set_stroke(&self, stroke: Stroke) {
        self.ctx.set_stroke_style_str(&stroke.color.css());
        self.ctx.set_line_width(stroke.width as f64);
    }

    fn trace(&self, points: &[Vec2]) -> bool {
        let Some((first, rest)) = points.split_first() else {
            return false;
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        true
    }
}

impl Painter for CanvasPainter<'_> {
    fn fill_background(&mut self, color: Rgb) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    fn stroke_rect(&mut self, origin: Vec2, size: Vec2, stroke: Stroke) {
        self.set_stroke(stroke);
        self.ctx
            .stroke_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    fn fill_rect_gradient(&mut self, origin: Vec2, size: Vec2, from: Rgba, to: Rgba) {
        let (x, y) = (origin.x as f64, origin.y as f64);
        let grad = self.ctx.create_linear_gradient(x, y, x + size.x as f64, y);
        _ = grad.add_color_stop(0.0, &from.css());
        _ = grad.add_color_stop(1.0, &to.css());
        self.ctx.set_fill_style_canvas_gradient(&grad);
        self.ctx.fill_rect(x, y, size.x as f64, size.y as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.begin_path();
        self.ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU)
            .ok();
        self.ctx.fill();
    }

    fn stroke_arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32, stroke: Stroke) {
        self.set_stroke(stroke);
        self.ctx.begin_path();
        self.ctx
            .arc(
                center.x as f64,
                center.y as f64,
                radius.max(0.0) as f64,
                start as f64,
                end as f64,
            )
            .ok();
        self.ctx.stroke();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: Stroke) {
        self.stroke_polyline(&[from, to], stroke);
    }

    fn stroke_polyline(&mut self, points: &[Vec2], stroke: Stroke) {
        if points.len() < 2 {
            return;
        }
        self.set_stroke(stroke);
        if self.trace(points) {
            self.ctx.stroke();
        }
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Rgba) {
        self.ctx.set_fill_style_str(&color.css());
        if self.trace(points) {
            self.ctx.close_path();
            self.ctx.fill();
        }
    }

    fn stroke_polygon(&mut self, points: &[Vec2], stroke: Stroke) {
        self.set_stroke(stroke);
        if self.trace(points) {
            self.ctx.close_path();
            self.ctx.stroke();
        }
    }

    fn fill_text(&mut self, text: &str, at: Vec2, style: &TextStyle) {
        self.ctx.set_font(&style.font.css());
        self.ctx.set_fill_style_str(&style.color.css());
        self.ctx.set_text_align(match style.align {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
        });
        self.ctx.set_text_baseline(match style.baseline {
            TextBaseline::Alphabetic => "alphabetic",
            TextBaseline::Middle => "middle",
        });
        _ = self.ctx.fill_text(text, at.x as f64, at.y as f64);
    }

    fn measure_text(&mut self, text: &str, font: Font) -> f32 {
        self.ctx.set_font(&font.css());
        self.ctx
            .measure_text(text)
            .map(|m| m.width() as f32)
            .unwrap_or(0.0)
    }

    fn radial_vignette(&mut self, center: Vec2, inner: f32, outer: f32, edge: Rgba) {
        let (x, y) = (center.x as f64, center.y as f64);
        let Ok(grad) = self
            .ctx
            .create_radial_gradient(x, y, inner.max(0.0) as f64, x, y, outer.max(0.0) as f64)
        else {
            return;
        };
        _ = grad.add_color_stop(0.0, &Rgba::TRANSPARENT.css());
        _ = grad.add_color_stop(1.0, &edge.css());
        self.ctx.set_fill_style_canvas_gradient(&grad);
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
    }

    fn push_transform(&mut self, translate: Vec2, scale: f32) {
        self.ctx.save();
        _ = self.ctx.translate(translate.x as f64, translate.y as f64);
        _ = self.ctx.scale(scale as f64, scale as f64);
    }

    fn pop_transform(&mut self) {
        self.ctx.restore();
    }

    // Pixel reads and writes bypass the transform, so work in device pixels.
    fn displace_slice(&mut self, y: f32, height: f32, dx: f32) {
        let sy = (y as f64 * self.dpr).round();
        let sh = (height as f64 * self.dpr).round().max(1.0);
        let sw = (self.width * self.dpr).round().max(1.0);
        match self.ctx.get_image_data(0.0, sy, sw, sh) {
            Ok(data) => {
                _ = self.ctx.put_image_data(&data, (dx as f64 * self.dpr).round(), sy);
            }
            Err(e) => log::debug!("[canvas] getImageData failed: {:?}", e),
        }
    }
}
