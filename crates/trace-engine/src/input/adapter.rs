use glam::Vec2;

/// The surface element's bounding box in client (CSS) pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClientRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ClientRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    /// Map a client-space point to surface pixels, accounting for the surface
    /// backing store being scaled relative to its on-page box.
    /// A zero-sized rect maps everything to the origin.
    pub fn to_surface(&self, client: Vec2, surface_size: Vec2) -> Vec2 {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Vec2::ZERO;
        }
        let offset = client - Vec2::new(self.left, self.top);
        offset * surface_size / Vec2::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_by_rect_origin() {
        let rect = ClientRect::new(20.0, 100.0, 400.0, 300.0);
        let p = rect.to_surface(Vec2::new(120.0, 250.0), Vec2::new(400.0, 300.0));
        assert_eq!(p, Vec2::new(100.0, 150.0));
    }

    #[test]
    fn scales_for_high_dpi_surface() {
        let rect = ClientRect::new(0.0, 0.0, 400.0, 300.0);
        let p = rect.to_surface(Vec2::new(100.0, 30.0), Vec2::new(800.0, 600.0));
        assert_eq!(p, Vec2::new(200.0, 60.0));
    }

    #[test]
    fn zero_rect_maps_to_origin() {
        let rect = ClientRect::default();
        assert_eq!(rect.to_surface(Vec2::new(5.0, 5.0), Vec2::new(100.0, 100.0)), Vec2::ZERO);
    }
}
