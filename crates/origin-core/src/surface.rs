//! Drawing-surface abstraction.
//!
//! Every renderer in this crate paints through [`Painter`], a small immediate
//! mode API shaped after the 2D canvas context. The web front-end implements it
//! on top of `CanvasRenderingContext2d`; [`Recorder`] keeps the commands in
//! memory so renderers can be inspected on the host.

use glam::Vec2;

/// Opaque 8-bit color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Attach an alpha channel. Alpha is clamped to `[0, 1]`.
    #[inline]
    pub fn alpha(self, a: f32) -> Rgba {
        Rgba {
            rgb: self,
            a: if a.is_finite() { a.clamp(0.0, 1.0) } else { 0.0 },
        }
    }

    /// Per-channel blend toward `other`, rounded to the nearest integer.
    pub fn mix(self, other: Rgb, t: f32) -> Rgb {
        let ch = |a: u8, b: u8| {
            crate::easing::lerp(a as f32, b as f32, t)
                .round()
                .clamp(0.0, 255.0) as u8
        };
        Rgb::new(ch(self.r, other.r), ch(self.g, other.g), ch(self.b, other.b))
    }

    pub fn css(self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Color with straight (non-premultiplied) alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba {
        rgb: Rgb::new(0, 0, 0),
        a: 0.0,
    };

    pub fn css(self) -> String {
        format!(
            "rgba({},{},{},{:.4})",
            self.rgb.r, self.rgb.g, self.rgb.b, self.a
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f32,
}

impl Stroke {
    #[inline]
    pub fn new(color: Rgba, width: f32) -> Self {
        Self { color, width }
    }
}

/// Monospace font request; the painter picks the family.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Font {
    pub weight: u16,
    pub size: f32,
}

impl Font {
    pub const fn new(weight: u16, size: f32) -> Self {
        Self { weight, size }
    }

    pub fn css(self) -> String {
        format!("{} {}px 'JetBrains Mono', monospace", self.weight, self.size)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextBaseline {
    #[default]
    Alphabetic,
    Middle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub font: Font,
    pub color: Rgba,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

impl TextStyle {
    pub fn new(font: Font, color: Rgba) -> Self {
        Self {
            font,
            color,
            align: TextAlign::Left,
            baseline: TextBaseline::Alphabetic,
        }
    }

    pub fn centered(mut self) -> Self {
        self.align = TextAlign::Center;
        self
    }

    pub fn middle(mut self) -> Self {
        self.baseline = TextBaseline::Middle;
        self
    }
}

/// Logical (CSS pixel) size of a drawing surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn half(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.half()
    }

    /// Nothing can be drawn on a zero-sized surface.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    #[inline]
    pub fn contains(&self, p: Vec2, margin: f32) -> bool {
        p.x >= -margin
            && p.x <= self.width + margin
            && p.y >= -margin
            && p.y <= self.height + margin
    }
}

/// Immediate-mode 2D drawing API used by every renderer.
///
/// Coordinates are logical pixels; implementations apply the device pixel
/// ratio themselves. Arcs follow canvas conventions: angles in radians,
/// clockwise in screen space.
pub trait Painter {
    /// Fill the whole surface with an opaque color.
    fn fill_background(&mut self, color: Rgb);
    /// Reset the whole surface to transparent.
    fn clear(&mut self);
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba);
    fn stroke_rect(&mut self, origin: Vec2, size: Vec2, stroke: Stroke);
    /// Horizontal linear gradient across the rectangle, `from` on the left.
    fn fill_rect_gradient(&mut self, origin: Vec2, size: Vec2, from: Rgba, to: Rgba);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn stroke_arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32, stroke: Stroke);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: Stroke);
    /// One open path through `points`.
    fn stroke_polyline(&mut self, points: &[Vec2], stroke: Stroke);
    fn fill_polygon(&mut self, points: &[Vec2], color: Rgba);
    fn stroke_polygon(&mut self, points: &[Vec2], stroke: Stroke);
    fn fill_text(&mut self, text: &str, at: Vec2, style: &TextStyle);
    fn measure_text(&mut self, text: &str, font: Font) -> f32;
    /// Radial gradient, transparent inside `inner`, reaching `edge` at `outer`;
    /// painted over the whole surface.
    fn radial_vignette(&mut self, center: Vec2, inner: f32, outer: f32, edge: Rgba);
    /// Save state, then translate and uniformly scale subsequent drawing.
    fn push_transform(&mut self, translate: Vec2, scale: f32);
    fn pop_transform(&mut self);
    /// Copy the horizontal band `[y, y + height)` of already painted pixels and
    /// paste it shifted by `dx`.
    fn displace_slice(&mut self, y: f32, height: f32, dx: f32);
}

/// One recorded drawing call.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Background(Rgb),
    Clear,
    FillRect { origin: Vec2, size: Vec2, color: Rgba },
    StrokeRect { origin: Vec2, size: Vec2, stroke: Stroke },
    Gradient { origin: Vec2, size: Vec2, from: Rgba, to: Rgba },
    Circle { center: Vec2, radius: f32, color: Rgba },
    Arc { center: Vec2, radius: f32, start: f32, end: f32, stroke: Stroke },
    Line { from: Vec2, to: Vec2, stroke: Stroke },
    Polyline { points: Vec<Vec2>, stroke: Stroke },
    FillPolygon { points: Vec<Vec2>, color: Rgba },
    StrokePolygon { points: Vec<Vec2>, stroke: Stroke },
    Text { text: String, at: Vec2, style: TextStyle },
    Vignette { center: Vec2, inner: f32, outer: f32, edge: Rgba },
    PushTransform { translate: Vec2, scale: f32 },
    PopTransform,
    Displace { y: f32, height: f32, dx: f32 },
}

/// [`Painter`] that stores commands instead of rasterizing them.
///
/// Text is measured as a fixed advance per character times the font size.
#[derive(Debug, Default)]
pub struct Recorder {
    commands: Vec<Command>,
}

impl Recorder {
    /// Advance per character, as a fraction of the font size.
    pub const CHAR_ADVANCE: f32 = 0.6;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn take(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32, Rgba)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            Command::Circle {
                center,
                radius,
                color,
            } => Some((*center, *radius, *color)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, &TextStyle)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            Command::Text { text, style, .. } => Some((text.as_str(), style)),
            _ => None,
        })
    }

    pub fn find_text(&self, needle: &str) -> Option<&TextStyle> {
        self.texts().find(|(t, _)| *t == needle).map(|(_, s)| s)
    }

    pub fn polylines(&self) -> impl Iterator<Item = &[Vec2]> + '_ {
        self.commands.iter().filter_map(|c| match c {
            Command::Polyline { points, .. } => Some(points.as_slice()),
            _ => None,
        })
    }

    pub fn count(&self, pred: impl Fn(&Command) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }
}

impl Painter for Recorder {
    fn fill_background(&mut self, color: Rgb) {
        self.commands.push(Command::Background(color));
    }

    fn clear(&mut self) {
        self.commands.push(Command::Clear);
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba) {
        self.commands.push(Command::FillRect {
            origin,
            size,
            color,
        });
    }

    fn stroke_rect(&mut self, origin: Vec2, size: Vec2, stroke: Stroke) {
        self.commands.push(Command::StrokeRect {
            origin,
            size,
            stroke,
        });
    }

    fn fill_rect_gradient(&mut self, origin: Vec2, size: Vec2, from: Rgba, to: Rgba) {
        self.commands.push(Command::Gradient {
            origin,
            size,
            from,
            to,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(Command::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32, stroke: Stroke) {
        self.commands.push(Command::Arc {
            center,
            radius,
            start,
            end,
            stroke,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: Stroke) {
        self.commands.push(Command::Line { from, to, stroke });
    }

    fn stroke_polyline(&mut self, points: &[Vec2], stroke: Stroke) {
        self.commands.push(Command::Polyline {
            points: points.to_vec(),
            stroke,
        });
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Rgba) {
        self.commands.push(Command::FillPolygon {
            points: points.to_vec(),
            color,
        });
    }

    fn stroke_polygon(&mut self, points: &[Vec2], stroke: Stroke) {
        self.commands.push(Command::StrokePolygon {
            points: points.to_vec(),
            stroke,
        });
    }

    fn fill_text(&mut self, text: &str, at: Vec2, style: &TextStyle) {
        self.commands.push(Command::Text {
            text: text.to_string(),
            at,
            style: *style,
        });
    }

    fn measure_text(&mut self, text: &str, font: Font) -> f32 {
        text.chars().count() as f32 * font.size * Self::CHAR_ADVANCE
    }

    fn radial_vignette(&mut self, center: Vec2, inner: f32, outer: f32, edge: Rgba) {
        self.commands.push(Command::Vignette {
            center,
            inner,
            outer,
            edge,
        });
    }

    fn push_transform(&mut self, translate: Vec2, scale: f32) {
        self.commands
            .push(Command::PushTransform { translate, scale });
    }

    fn pop_transform(&mut self) {
        self.commands.push(Command::PopTransform);
    }

    fn displace_slice(&mut self, y: f32, height: f32, dx: f32) {
        self.commands.push(Command::Displace { y, height, dx });
    }
}
