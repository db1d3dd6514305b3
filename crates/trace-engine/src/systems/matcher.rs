use glam::Vec2;

use crate::core::layout::DrawingArea;

/// Outcome of testing one input point against the current target waypoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchResult {
    pub hit: bool,
    /// Euclidean distance in normalized space.
    pub distance: f32,
}

/// Match against a target already in normalized space.
pub fn match_normalized(point: Vec2, target: Vec2, threshold: f32) -> MatchResult {
    let distance = point.distance(target);
    // Non-finite distances (degenerate area) compare false and miss.
    MatchResult {
        hit: distance < threshold,
        distance,
    }
}

/// Map a surface-space point through the area's inverse transform and test it
/// against `target`. Input outside the surface is not clamped.
pub fn match_point(area: &DrawingArea, surface: Vec2, target: Vec2, threshold: f32) -> MatchResult {
    match_normalized(area.to_normalized(surface), target, threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_area() -> DrawingArea {
        DrawingArea { x: 100.0, y: 50.0, width: 200.0, height: 200.0 }
    }

    #[test]
    fn hit_below_threshold() {
        let area = unit_area();
        // (0.5, 0.5) is at surface (200, 150); 0.09 right of it is 18 px.
        let r = match_point(&area, Vec2::new(218.0, 150.0), Vec2::new(0.5, 0.5), 0.1);
        assert!(r.hit);
        assert!((r.distance - 0.09).abs() < 1e-5);
    }

    #[test]
    fn miss_above_threshold() {
        let area = unit_area();
        let r = match_point(&area, Vec2::new(221.0, 150.0), Vec2::new(0.5, 0.5), 0.1);
        assert!(!r.hit);
        assert!((r.distance - 0.105).abs() < 1e-5);
    }

    #[test]
    fn off_surface_still_measured() {
        let area = unit_area();
        let r = match_point(&area, Vec2::new(-500.0, -500.0), Vec2::new(0.0, 0.0), 0.12);
        assert!(!r.hit);
        assert!(r.distance.is_finite());
    }

    #[test]
    fn degenerate_area_misses() {
        let area = DrawingArea::default();
        let r = match_point(&area, Vec2::new(1.0, 1.0), Vec2::new(0.5, 0.5), 0.12);
        assert!(!r.hit);
    }
}
