use glam::Vec2;
use serde::Serialize;

/// Pixel-space rectangle that normalized path coordinates are projected onto.
///
/// Recomputed whenever the surface size or the active item changes, since both
/// move the target aspect ratio independently.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct DrawingArea {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl DrawingArea {
    /// Fit a rectangle of `aspect` (width / height) inside the surface after
    /// removing `padding` from each side, centered on both axes.
    pub fn compute(surface_width: f32, surface_height: f32, aspect: f32, padding: f32) -> Self {
        let avail_w = (surface_width - padding * 2.0).max(0.0);
        let avail_h = (surface_height - padding * 2.0).max(0.0);
        if avail_w == 0.0 || avail_h == 0.0 || aspect <= 0.0 {
            return Self {
                x: padding + avail_w / 2.0,
                y: padding + avail_h / 2.0,
                width: 0.0,
                height: 0.0,
            };
        }

        let (width, height) = if avail_w / avail_h > aspect {
            // Region is wider than the target: height binds.
            (avail_h * aspect, avail_h)
        } else {
            (avail_w, avail_w / aspect)
        };

        Self {
            x: padding + (avail_w - width) / 2.0,
            y: padding + (avail_h - height) / 2.0,
            width,
            height,
        }
    }

    /// True when the area has no drawable extent.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Normalized (0..1) point to surface pixels.
    pub fn to_surface(&self, norm: Vec2) -> Vec2 {
        Vec2::new(self.x + norm.x * self.width, self.y + norm.y * self.height)
    }

    /// Surface pixels to normalized coordinates. Not clamped: points outside
    /// the area map outside 0..1. A degenerate area yields non-finite values.
    pub fn to_normalized(&self, surface: Vec2) -> Vec2 {
        Vec2::new(
            (surface.x - self.x) / self.width,
            (surface.y - self.y) / self.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tall_surface_binds_width() {
        let area = DrawingArea::compute(400.0, 800.0, 0.85, 30.0);
        assert!((area.width - 340.0).abs() < 1e-3);
        assert!((area.height - 400.0).abs() < 1e-3);
        assert!((area.x - 30.0).abs() < 1e-3);
        // Centered vertically in the 740-high padded region.
        assert!((area.y - (30.0 + 170.0)).abs() < 1e-3);
    }

    #[test]
    fn wide_surface_binds_height() {
        let area = DrawingArea::compute(1000.0, 500.0, 0.85, 30.0);
        assert!((area.height - 440.0).abs() < 1e-3);
        assert!((area.width - 374.0).abs() < 1e-3);
        assert!((area.y - 30.0).abs() < 1e-3);
        assert!((area.x - (30.0 + (940.0 - 374.0) / 2.0)).abs() < 1e-3);
    }

    #[test]
    fn word_aspect_changes_area() {
        let glyph = DrawingArea::compute(900.0, 600.0, 0.85, 30.0);
        let word = DrawingArea::compute(900.0, 600.0, 2.1, 30.0);
        assert!(word.width > glyph.width);
        assert!((word.width / word.height - 2.1).abs() < 1e-4);
    }

    #[test]
    fn degenerate_surface_gives_zero_area() {
        let area = DrawingArea::compute(40.0, 500.0, 0.85, 30.0);
        assert!(area.is_degenerate());
        assert_eq!(area.width, 0.0);
        assert_eq!(area.height, 0.0);
    }

    #[test]
    fn forward_inverse_round_trip() {
        let areas = [
            DrawingArea::compute(400.0, 800.0, 0.85, 30.0),
            DrawingArea::compute(1280.0, 720.0, 2.1, 30.0),
            DrawingArea { x: -12.5, y: 7.25, width: 333.3, height: 91.0 },
        ];
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.35, 0.72),
            Vec2::new(-0.2, 1.4),
        ];
        for area in &areas {
            for &p in &points {
                let back = area.to_normalized(area.to_surface(p));
                assert!((back - p).length() < 1e-5, "{p:?} -> {back:?} in {area:?}");
            }
        }
    }
}
