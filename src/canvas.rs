//! Raster canvas for glyph drawing.
//!
//! [`Canvas`] wraps a `tiny_skia` pixmap and exposes the three primitives a
//! glyph needs: a rounded-rectangle background, straight lines and filled
//! circles. Coordinates are integer pixel positions; shapes are placed on
//! pixel centers so a node of radius `r` spans `2r + 1` pixels.

use image::{Rgba, RgbaImage};
use palette::Srgba;
use resvg::tiny_skia::{
    FillRule, LineCap, Paint, Path, PathBuilder, Pixmap, Rect, Stroke, Transform,
};

use crate::design::PixelPoint;
use crate::error::{Error, Result};

/// Cubic Bézier handle length for a quarter circle of radius 1.
const KAPPA: f32 = 0.552_284_8;

/// A square RGBA drawing surface, initially fully transparent.
pub struct Canvas {
    pixmap: Pixmap,
    anti_alias: bool,
}

impl Canvas {
    /// Allocates a transparent `size`×`size` canvas.
    pub fn new(size: u32, anti_alias: bool) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidSize);
        }
        let pixmap = Pixmap::new(size, size).ok_or(Error::PixmapAllocation(size))?;
        Ok(Self { pixmap, anti_alias })
    }

    pub fn size(&self) -> u32 {
        self.pixmap.width()
    }

    /// Fills the whole canvas with a rounded rectangle.
    pub fn fill_rounded_rect(&mut self, radius: u32, color: Srgba<u8>) -> Result<()> {
        let edge = self.size() as f32;
        let radius = (radius as f32).min(edge / 2.0);
        let path = rounded_rect_path(edge, radius).ok_or(Error::EmptyPath("background"))?;
        let paint = self.paint(color);
        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        Ok(())
    }

    /// Strokes a straight line with butt caps.
    ///
    /// Zero-length lines draw nothing.
    pub fn stroke_line(
        &mut self,
        from: PixelPoint,
        to: PixelPoint,
        width: u32,
        color: Srgba<u8>,
    ) -> Result<()> {
        if from == to {
            tracing::trace!(?from, "skipping zero-length line");
            return Ok(());
        }

        let mut pb = PathBuilder::new();
        let (x0, y0) = pixel_center(from);
        let (x1, y1) = pixel_center(to);
        pb.move_to(x0, y0);
        pb.line_to(x1, y1);
        let path = pb.finish().ok_or(Error::EmptyPath("line"))?;

        let stroke = Stroke {
            width: width as f32,
            line_cap: LineCap::Butt,
            ..Stroke::default()
        };
        let paint = self.paint(color);
        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        Ok(())
    }

    /// Fills a circle covering every pixel within `radius` of `center`.
    pub fn fill_circle(&mut self, center: PixelPoint, radius: u32, color: Srgba<u8>) -> Result<()> {
        let (cx, cy) = pixel_center(center);
        let path = PathBuilder::from_circle(cx, cy, radius as f32 + 0.5)
            .ok_or(Error::EmptyPath("circle"))?;
        let paint = self.paint(color);
        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        Ok(())
    }

    /// Converts the canvas to a straight-alpha RGBA image.
    pub fn into_image(self) -> RgbaImage {
        let mut img = RgbaImage::new(self.pixmap.width(), self.pixmap.height());
        for (dst, src) in img.pixels_mut().zip(self.pixmap.pixels()) {
            // tiny_skia stores premultiplied alpha
            let (r, g, b, a) = unpremultiply(src.red(), src.green(), src.blue(), src.alpha());
            *dst = Rgba([r, g, b, a]);
        }
        img
    }

    fn paint(&self, color: Srgba<u8>) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color_rgba8(color.red, color.green, color.blue, color.alpha);
        paint.anti_alias = self.anti_alias;
        paint
    }
}

fn pixel_center(point: PixelPoint) -> (f32, f32) {
    (point.x as f32 + 0.5, point.y as f32 + 0.5)
}

/// Builds an `edge`×`edge` rectangle at the origin with circular corners.
fn rounded_rect_path(edge: f32, radius: f32) -> Option<Path> {
    if radius <= 0.0 {
        return Some(PathBuilder::from_rect(Rect::from_xywh(0.0, 0.0, edge, edge)?));
    }

    let k = radius * KAPPA;
    let far = edge - radius;
    let mut pb = PathBuilder::new();
    pb.move_to(radius, 0.0);
    pb.line_to(far, 0.0);
    pb.cubic_to(far + k, 0.0, edge, radius - k, edge, radius);
    pb.line_to(edge, far);
    pb.cubic_to(edge, far + k, far + k, edge, far, edge);
    pb.line_to(radius, edge);
    pb.cubic_to(radius - k, edge, 0.0, far + k, 0.0, far);
    pb.line_to(0.0, radius);
    pb.cubic_to(0.0, radius - k, radius - k, 0.0, radius, 0.0);
    pb.close();
    pb.finish()
}

/// Unpremultiplies a premultiplied alpha pixel.
fn unpremultiply(r: u8, g: u8, b: u8, a: u8) -> (u8, u8, u8, u8) {
    if a == 0 {
        (0, 0, 0, 0)
    } else {
        let a_f = a as f32 / 255.0;
        (
            (r as f32 / a_f).round().min(255.0) as u8,
            (g as f32 / a_f).round().min(255.0) as u8,
            (b as f32 / a_f).round().min(255.0) as u8,
            a,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Srgba<u8> {
        Srgba::new(255, 0, 0, 255)
    }

    fn point(x: i32, y: i32) -> PixelPoint {
        PixelPoint { x, y }
    }

    #[test]
    fn new_canvas_is_transparent() {
        let img = Canvas::new(8, false).unwrap().into_image();
        assert_eq!(img.dimensions(), (8, 8));
        assert!(img.pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(matches!(Canvas::new(0, false), Err(Error::InvalidSize)));
    }

    #[test]
    fn rounded_rect_leaves_corners_clear() {
        let mut canvas = Canvas::new(32, false).unwrap();
        canvas.fill_rounded_rect(7, red()).unwrap();
        let img = canvas.into_image();

        for (x, y) in [(0, 0), (31, 0), (0, 31), (31, 31)] {
            assert_eq!(img.get_pixel(x, y)[3], 0, "corner ({x}, {y})");
        }
        assert_eq!(img.get_pixel(16, 16).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(16, 0).0, [255, 0, 0, 255]);
    }

    #[test]
    fn zero_radius_fills_everything() {
        let mut canvas = Canvas::new(4, false).unwrap();
        canvas.fill_rounded_rect(0, red()).unwrap();
        assert!(canvas.into_image().pixels().all(|p| p.0 == [255, 0, 0, 255]));
    }

    #[test]
    fn circle_spans_two_radius_plus_one() {
        let mut canvas = Canvas::new(16, false).unwrap();
        canvas.fill_circle(point(8, 8), 2, red()).unwrap();
        let img = canvas.into_image();

        let row: Vec<bool> = (0..16).map(|x| img.get_pixel(x, 8)[3] > 0).collect();
        assert_eq!(row.iter().filter(|&&filled| filled).count(), 5);
        assert!(row[6] && row[10]);
        assert!(!row[5] && !row[11]);
    }

    #[test]
    fn vertical_line_is_width_pixels_wide() {
        let mut canvas = Canvas::new(16, false).unwrap();
        canvas.stroke_line(point(8, 2), point(8, 13), 3, red()).unwrap();
        let img = canvas.into_image();

        let filled: Vec<u32> = (0..16).filter(|&x| img.get_pixel(x, 7)[3] > 0).collect();
        assert_eq!(filled, vec![7, 8, 9]);
    }

    #[test]
    fn zero_length_line_is_noop() {
        let mut canvas = Canvas::new(8, false).unwrap();
        canvas.stroke_line(point(3, 3), point(3, 3), 2, red()).unwrap();
        assert!(canvas.into_image().pixels().all(|p| p[3] == 0));
    }

    #[test]
    fn translucent_fill_keeps_straight_alpha() {
        let mut canvas = Canvas::new(8, false).unwrap();
        canvas
            .fill_circle(point(4, 4), 3, Srgba::new(255, 255, 255, 128))
            .unwrap();
        let px = canvas.into_image().get_pixel(4, 4).0;
        assert_eq!(px[3], 128);
        assert!(px[0] >= 254, "color should survive unpremultiply: {px:?}");
    }

    #[test]
    fn unpremultiply_transparent_is_zero() {
        assert_eq!(unpremultiply(10, 10, 10, 0), (0, 0, 0, 0));
        assert_eq!(unpremultiply(128, 0, 0, 128), (255, 0, 0, 128));
    }
}
