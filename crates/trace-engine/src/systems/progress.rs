use glam::Vec2;

use crate::catalog::Stroke;
use crate::systems::matcher::match_normalized;

/// Coarse phase of the active item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracePhase {
    /// Nothing traced yet: first stroke, first waypoint.
    Idle,
    /// At least one waypoint has been hit.
    InStroke,
    /// Every stroke has been traced.
    Completed,
}

/// A waypoint was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaypointHit {
    pub stroke: usize,
    /// Index of the waypoint that was hit.
    pub waypoint: usize,
    /// The hit was the stroke's final waypoint.
    pub stroke_done: bool,
    /// The stroke was the item's final stroke.
    pub item_done: bool,
}

/// Result of feeding one input phase into [`TraceProgress`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProgressStep {
    /// No state change (not drawing, already drawing, or nothing left to trace).
    Ignored,
    /// A begin landed too far from the stroke's first waypoint.
    StartMissed { stroke: usize, distance: f32 },
    /// A move extended the trail without reaching the target.
    Missed { distance: f32 },
    Hit(WaypointHit),
    /// Input ended mid-stroke; the stroke restarts from its first waypoint.
    Abandoned { stroke: usize, reached: usize },
}

/// Per-item tracing state: which stroke and waypoint are next, which strokes
/// are done, and the live ink trail.
///
/// Stroke and waypoint indices only move forward while tracing; the waypoint
/// index drops back to zero on abandonment and on moving to the next stroke.
/// Only [`reset`](Self::reset) rewinds the stroke index.
#[derive(Debug, Clone, Default)]
pub struct TraceProgress {
    stroke_index: usize,
    waypoint_index: usize,
    stroke_completed: Vec<bool>,
    drawing: bool,
    /// Ink trail in normalized coordinates.
    trail: Vec<Vec2>,
}

impl TraceProgress {
    pub fn new(stroke_count: usize) -> Self {
        Self {
            stroke_completed: vec![false; stroke_count],
            trail: Vec::with_capacity(256),
            ..Default::default()
        }
    }

    /// Back to `Idle` for an item with `stroke_count` strokes.
    pub fn reset(&mut self, stroke_count: usize) {
        self.stroke_index = 0;
        self.waypoint_index = 0;
        self.stroke_completed.clear();
        self.stroke_completed.resize(stroke_count, false);
        self.drawing = false;
        self.trail.clear();
    }

    pub fn stroke_index(&self) -> usize {
        self.stroke_index
    }

    pub fn waypoint_index(&self) -> usize {
        self.waypoint_index
    }

    pub fn stroke_completed(&self) -> &[bool] {
        &self.stroke_completed
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn trail(&self) -> &[Vec2] {
        &self.trail
    }

    pub fn clear_trail(&mut self) {
        self.trail.clear();
    }

    pub fn stroke_count(&self) -> usize {
        self.stroke_completed.len()
    }

    pub fn phase(&self) -> TracePhase {
        let count = self.stroke_count();
        if count > 0 && self.stroke_index >= count {
            TracePhase::Completed
        } else if self.stroke_index == 0 && self.waypoint_index == 0 {
            TracePhase::Idle
        } else {
            TracePhase::InStroke
        }
    }

    /// True when the flag list matches `stroke_count` and every flag is set.
    /// Vacuously true for an item without strokes.
    pub fn all_strokes_completed(&self, stroke_count: usize) -> bool {
        self.stroke_completed.len() == stroke_count && self.stroke_completed.iter().all(|&done| done)
    }

    /// The waypoint the next input must reach, if any stroke remains.
    pub fn target(&self, strokes: &[Stroke]) -> Option<(usize, usize, Vec2)> {
        let stroke = strokes.get(self.stroke_index)?;
        let point = stroke.waypoint(self.waypoint_index)?;
        Some((self.stroke_index, self.waypoint_index, point))
    }

    /// Input began at normalized `point`. Tracking starts only if the point is
    /// within `threshold` of the current stroke's first waypoint, and that
    /// acceptance counts as hitting it.
    pub fn begin(&mut self, strokes: &[Stroke], point: Vec2, threshold: f32) -> ProgressStep {
        if self.drawing {
            return ProgressStep::Ignored;
        }
        let Some((stroke, _, target)) = self.target(strokes) else {
            return ProgressStep::Ignored;
        };

        let m = match_normalized(point, target, threshold);
        if !m.hit {
            return ProgressStep::StartMissed {
                stroke,
                distance: m.distance,
            };
        }

        self.drawing = true;
        self.trail.clear();
        self.trail.push(point);
        ProgressStep::Hit(self.hit_target(strokes))
    }

    /// Input moved to normalized `point` while drawing.
    pub fn advance(&mut self, strokes: &[Stroke], point: Vec2, threshold: f32) -> ProgressStep {
        if !self.drawing {
            return ProgressStep::Ignored;
        }
        if point.is_finite() {
            self.trail.push(point);
        }
        let Some((_, _, target)) = self.target(strokes) else {
            return ProgressStep::Ignored;
        };

        let m = match_normalized(point, target, threshold);
        if m.hit {
            ProgressStep::Hit(self.hit_target(strokes))
        } else {
            ProgressStep::Missed { distance: m.distance }
        }
    }

    /// Input ended. Mid-stroke this abandons the stroke. Releasing before any
    /// waypoint of a carried-over stroke was reached just stops drawing.
    pub fn end(&mut self) -> ProgressStep {
        if !self.drawing {
            return ProgressStep::Ignored;
        }
        self.drawing = false;
        let reached = self.waypoint_index;
        if reached == 0 {
            return ProgressStep::Ignored;
        }
        self.waypoint_index = 0;
        self.trail.clear();
        ProgressStep::Abandoned {
            stroke: self.stroke_index,
            reached,
        }
    }

    fn hit_target(&mut self, strokes: &[Stroke]) -> WaypointHit {
        let stroke = self.stroke_index;
        let waypoint = self.waypoint_index;
        self.waypoint_index += 1;

        let len = strokes.get(stroke).map_or(0, Stroke::len);
        let stroke_done = self.waypoint_index >= len;
        if stroke_done {
            if let Some(flag) = self.stroke_completed.get_mut(stroke) {
                *flag = true;
            }
            self.stroke_index += 1;
            self.waypoint_index = 0;
        }
        let item_done = stroke_done && self.stroke_index >= strokes.len();
        // A drag carries on into the next stroke; only the last one ends it.
        if item_done {
            self.drawing = false;
        }

        WaypointHit {
            stroke,
            waypoint,
            stroke_done,
            item_done,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_point() -> Vec<Stroke> {
        vec![Stroke::from_pairs(&[[0.5, 0.5], [0.6, 0.5]])]
    }

    fn two_strokes() -> Vec<Stroke> {
        vec![
            Stroke::from_pairs(&[[0.2, 0.2], [0.2, 0.5], [0.2, 0.8]]),
            Stroke::from_pairs(&[[0.2, 0.5], [0.6, 0.5]]),
        ]
    }

    #[test]
    fn threshold_scenario() {
        let strokes = two_point();
        let mut p = TraceProgress::new(1);

        let step = p.begin(&strokes, Vec2::new(0.5, 0.61), 0.12);
        assert!(matches!(step, ProgressStep::Hit(WaypointHit { waypoint: 0, .. })));
        assert!(p.is_drawing());
        assert_eq!(p.waypoint_index(), 1);

        let step = p.advance(&strokes, Vec2::new(0.6, 0.605), 0.1);
        assert!(matches!(step, ProgressStep::Missed { .. }));
        assert_eq!(p.waypoint_index(), 1);

        let step = p.advance(&strokes, Vec2::new(0.6, 0.59), 0.1);
        assert_eq!(
            step,
            ProgressStep::Hit(WaypointHit {
                stroke: 0,
                waypoint: 1,
                stroke_done: true,
                item_done: true,
            })
        );
        assert_eq!(p.phase(), TracePhase::Completed);
        assert!(p.all_strokes_completed(1));
    }

    #[test]
    fn start_outside_threshold_is_missed() {
        let strokes = two_point();
        let mut p = TraceProgress::new(1);
        let step = p.begin(&strokes, Vec2::new(0.5, 0.63), 0.12);
        assert!(matches!(step, ProgressStep::StartMissed { stroke: 0, .. }));
        assert!(!p.is_drawing());
        assert_eq!(p.phase(), TracePhase::Idle);
    }

    #[test]
    fn progress_is_monotonic_across_strokes() {
        let strokes = two_strokes();
        let mut p = TraceProgress::new(2);
        let mut last = (0, 0);

        p.begin(&strokes, Vec2::new(0.2, 0.2), 0.12);
        for y in [0.3, 0.4, 0.5, 0.6, 0.7, 0.8] {
            p.advance(&strokes, Vec2::new(0.2, y), 0.1);
            let now = (p.stroke_index(), p.waypoint_index());
            assert!(now.0 > last.0 || (now.0 == last.0 && now.1 >= last.1));
            last = now;
        }
        assert_eq!((p.stroke_index(), p.waypoint_index()), (1, 0));
        assert_eq!(p.stroke_completed(), &[true, false]);
        // Lifting before touching the next stroke is not an abandonment.
        assert!(p.is_drawing());
        assert_eq!(p.end(), ProgressStep::Ignored);
        assert!(!p.is_drawing());
        assert_eq!(p.stroke_completed(), &[true, false]);

        p.begin(&strokes, Vec2::new(0.21, 0.5), 0.12);
        let step = p.advance(&strokes, Vec2::new(0.6, 0.5), 0.1);
        assert!(matches!(step, ProgressStep::Hit(WaypointHit { item_done: true, .. })));
        assert_eq!(p.stroke_index(), 2);
    }

    #[test]
    fn release_mid_stroke_restarts_only_that_stroke() {
        let strokes = two_strokes();
        let mut p = TraceProgress::new(2);
        p.begin(&strokes, Vec2::new(0.2, 0.2), 0.12);
        p.advance(&strokes, Vec2::new(0.2, 0.5), 0.1);
        p.advance(&strokes, Vec2::new(0.2, 0.8), 0.1);
        p.end();
        p.begin(&strokes, Vec2::new(0.2, 0.5), 0.12);
        assert_eq!(p.waypoint_index(), 1);

        assert_eq!(p.end(), ProgressStep::Abandoned { stroke: 1, reached: 1 });
        assert_eq!((p.stroke_index(), p.waypoint_index()), (1, 0));
        assert_eq!(p.stroke_completed(), &[true, false]);
        assert!(p.trail().is_empty());
    }

    #[test]
    fn drag_continues_into_next_stroke() {
        let strokes = vec![
            Stroke::from_pairs(&[[0.3, 0.2], [0.3, 0.8]]),
            Stroke::from_pairs(&[[0.3, 0.8], [0.7, 0.8]]),
        ];
        let mut p = TraceProgress::new(2);
        p.begin(&strokes, Vec2::new(0.3, 0.2), 0.12);
        let step = p.advance(&strokes, Vec2::new(0.3, 0.8), 0.1);
        assert!(matches!(
            step,
            ProgressStep::Hit(WaypointHit { stroke_done: true, item_done: false, .. })
        ));
        assert!(p.is_drawing());

        let step = p.advance(&strokes, Vec2::new(0.31, 0.8), 0.1);
        assert!(matches!(step, ProgressStep::Hit(WaypointHit { stroke: 1, waypoint: 0, .. })));
        let step = p.advance(&strokes, Vec2::new(0.7, 0.8), 0.1);
        assert!(matches!(step, ProgressStep::Hit(WaypointHit { item_done: true, .. })));
        assert!(!p.is_drawing());
        assert_eq!(p.phase(), TracePhase::Completed);
    }

    #[test]
    fn single_point_stroke_completes_on_start() {
        let strokes = vec![Stroke::from_pairs(&[[0.5, 0.5]])];
        let mut p = TraceProgress::new(1);
        let step = p.begin(&strokes, Vec2::new(0.5, 0.5), 0.12);
        assert!(matches!(step, ProgressStep::Hit(WaypointHit { item_done: true, .. })));
    }

    #[test]
    fn zero_stroke_item_ignores_input() {
        let mut p = TraceProgress::new(0);
        assert_eq!(p.begin(&[], Vec2::new(0.5, 0.5), 0.12), ProgressStep::Ignored);
        assert_eq!(p.phase(), TracePhase::Idle);
        assert!(p.all_strokes_completed(0));
    }

    #[test]
    fn begin_after_completion_is_noop() {
        let strokes = vec![Stroke::from_pairs(&[[0.5, 0.5]])];
        let mut p = TraceProgress::new(1);
        p.begin(&strokes, Vec2::new(0.5, 0.5), 0.12);
        assert_eq!(p.begin(&strokes, Vec2::new(0.5, 0.5), 0.12), ProgressStep::Ignored);
    }

    #[test]
    fn reset_returns_to_idle() {
        let strokes = two_strokes();
        let mut p = TraceProgress::new(2);
        p.begin(&strokes, Vec2::new(0.2, 0.2), 0.12);
        p.reset(3);
        assert_eq!(p.phase(), TracePhase::Idle);
        assert_eq!(p.stroke_completed(), &[false, false, false]);
        assert!(!p.is_drawing());
    }
}
