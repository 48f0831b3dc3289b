//! RGBA canvas with the few rasterization primitives the badge needs.
//!
//! Integer coordinates address pixel centers, so a bounding box `[x0, x1]`
//! covers the pixels `x0..=x1`. Shapes are hard-edged and clipped to the
//! canvas; each new shape overwrites what is under it.

#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]

use image::{Rgba, RgbaImage};

/// Badge fill color.
pub const BADGE_COLOR: Rgba<u8> = Rgba([102, 126, 234, 255]);

/// Magnifier stroke color.
pub const GLYPH_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Divisor applied to the glass radius for the handle's inner end.
const HANDLE_START_DIVISOR: f32 = 1.4;

/// Multiplier applied to the glass radius for the handle's outer end.
const HANDLE_END_FACTOR: f32 = 1.5;

/// Inclusive pixel bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Left column.
    pub x0: i64,
    /// Top row.
    pub y0: i64,
    /// Right column (inclusive).
    pub x1: i64,
    /// Bottom row (inclusive).
    pub y1: i64,
}

impl BoundingBox {
    /// Square box with the same bounds on both axes.
    #[must_use]
    pub fn square(lo: i64, hi: i64) -> Self {
        Self { x0: lo, y0: lo, x1: hi, y1: hi }
    }

    fn center(self) -> (f32, f32) {
        ((self.x0 + self.x1) as f32 / 2.0, (self.y0 + self.y1) as f32 / 2.0)
    }

    fn radii(self) -> (f32, f32) {
        ((self.x1 - self.x0 + 1) as f32 / 2.0, (self.y1 - self.y0 + 1) as f32 / 2.0)
    }
}

/// Whether `(x, y)` lies inside the axis-aligned ellipse at `center`.
fn in_ellipse(x: f32, y: f32, center: (f32, f32), radii: (f32, f32)) -> bool {
    let (rx, ry) = radii;
    if rx <= 0.0 || ry <= 0.0 {
        return false;
    }
    let dx = (x - center.0) / rx;
    let dy = (y - center.1) / ry;
    dx * dx + dy * dy <= 1.0
}

/// Whether `p` lies within `half` of the segment `a`-`b`.
///
/// The ends are cut square: points that project outside the segment miss.
/// A zero-length segment paints a disc around `a`.
fn on_segment(p: (f32, f32), a: (f32, f32), b: (f32, f32), half: f32) -> bool {
    let (dx, dy) = (p.0 - a.0, p.1 - a.1);
    let (vx, vy) = (b.0 - a.0, b.1 - a.1);
    let len_sq = vx * vx + vy * vy;
    if len_sq <= f32::EPSILON {
        return (dx * dx + dy * dy).sqrt() <= half;
    }
    let t = (dx * vx + dy * vy) / len_sq;
    if !(0.0..=1.0).contains(&t) {
        return false;
    }
    (dx * vy - dy * vx).abs() / len_sq.sqrt() <= half
}

/// A square, initially transparent drawing surface.
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Allocate a fully transparent `size x size` canvas.
    #[must_use]
    pub fn new(size: u32) -> Self {
        Self { image: RgbaImage::new(size, size) }
    }

    /// Fill the ellipse inscribed in `bbox`.
    pub fn fill_ellipse(&mut self, bbox: BoundingBox, color: Rgba<u8>) {
        let (center, radii) = (bbox.center(), bbox.radii());
        self.paint(bbox, color, |x, y| in_ellipse(x, y, center, radii));
    }

    /// Outline the ellipse inscribed in `bbox`; the stroke grows inward.
    pub fn stroke_ellipse(&mut self, bbox: BoundingBox, color: Rgba<u8>, width: u32) {
        let (center, radii) = (bbox.center(), bbox.radii());
        let w = width.max(1) as f32;
        let inner = (radii.0 - w, radii.1 - w);
        self.paint(bbox, color, |x, y| {
            in_ellipse(x, y, center, radii) && !in_ellipse(x, y, center, inner)
        });
    }

    /// Draw a straight segment `width` pixels thick with square ends.
    pub fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), color: Rgba<u8>, width: u32) {
        let half = width.max(1) as f32 / 2.0;
        let bbox = BoundingBox {
            x0: (from.0.min(to.0) - half).floor() as i64,
            y0: (from.1.min(to.1) - half).floor() as i64,
            x1: (from.0.max(to.0) + half).ceil() as i64,
            y1: (from.1.max(to.1) + half).ceil() as i64,
        };
        self.paint(bbox, color, |x, y| on_segment((x, y), from, to, half));
    }

    /// Finish drawing and hand back the pixel buffer.
    #[must_use]
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Set every pixel of `bbox` (clipped to the canvas) accepted by `hit`.
    fn paint(&mut self, bbox: BoundingBox, color: Rgba<u8>, hit: impl Fn(f32, f32) -> bool) {
        let (w, h) = (i64::from(self.image.width()), i64::from(self.image.height()));
        for y in bbox.y0.max(0)..=bbox.y1.min(h - 1) {
            for x in bbox.x0.max(0)..=bbox.x1.min(w - 1) {
                if hit(x as f32, y as f32) {
                    // Both coordinates are clipped to the u32 canvas bounds above.
                    self.image.put_pixel(x as u32, y as u32, color);
                }
            }
        }
    }
}

/// Draw the magnifier badge at `size` pixels square.
///
/// A filled circle inset by `size / 8`, a white ring of radius `size / 4`
/// around the center, and a white handle running diagonally out of the
/// ring toward the bottom-right. Stroke width is `max(1, size / 16)`.
#[must_use]
pub fn draw_badge(size: u32) -> RgbaImage {
    let mut canvas = Canvas::new(size);
    let size_i = i64::from(size);

    let margin = size_i / 8;
    canvas.fill_ellipse(BoundingBox::square(margin, size_i - margin), BADGE_COLOR);

    let center = size_i / 2;
    let radius = size_i / 4;
    let line_width = (size / 16).max(1);

    canvas.stroke_ellipse(
        BoundingBox::square(center - radius, center + radius),
        GLYPH_COLOR,
        line_width,
    );

    let start = center as f32 + (radius as f32 / HANDLE_START_DIVISOR).floor();
    let end = center as f32 + radius as f32 * HANDLE_END_FACTOR;
    canvas.stroke_line((start, start), (end, end), GLYPH_COLOR, line_width);

    canvas.into_image()
}
