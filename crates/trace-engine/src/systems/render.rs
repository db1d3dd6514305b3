use glam::Vec2;
use serde::Serialize;

use crate::api::config::SessionConfig;
use crate::api::types::Prompt;
use crate::catalog::Stroke;
use crate::core::layout::DrawingArea;
use crate::systems::progress::TraceProgress;

const CURRENT_STROKE_WIDTH: f32 = 35.0;
const OTHER_STROKE_WIDTH: f32 = 25.0;
const ACTIVE_MARKER_RADIUS: f32 = 18.0;
const MARKER_RADIUS: f32 = 14.0;
const START_MARKER_RADIUS: f32 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StrokeStatus {
    Completed,
    Current,
    Future,
}

/// One guide path in surface pixels.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideStroke {
    pub points: Vec<[f32; 2]>,
    pub status: StrokeStatus,
    pub line_width: f32,
    /// Draw the dashed direction overlay.
    pub dashed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkerState {
    /// The waypoint the user must reach next. Pulses.
    Active,
    /// Already reached on the current stroke.
    Done,
    /// Later on the current stroke.
    Pending,
    /// First waypoint of a stroke that has not been started yet.
    StrokeStart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum MarkerLabel {
    Number(usize),
    Check,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Marker {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub state: MarkerState,
    pub label: MarkerLabel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromptView {
    pub prompt: Prompt,
    pub text: String,
}

/// Everything the render collaborator needs for one tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderFrame {
    pub area: DrawingArea,
    pub strokes: Vec<GuideStroke>,
    pub markers: Vec<Marker>,
    /// Live ink trail in surface pixels.
    pub trail: Vec<[f32; 2]>,
    pub pulse: f32,
    pub celebrating: bool,
    pub prompt: Option<PromptView>,
}

/// Session state a frame is built from.
pub struct FrameInput<'a> {
    pub area: DrawingArea,
    pub strokes: &'a [Stroke],
    pub progress: &'a TraceProgress,
    pub elapsed_ms: f64,
    pub celebrating: bool,
    pub prompt: Option<Prompt>,
}

/// Marker scale at `elapsed_ms`: `1 + amplitude * sin(t / period)`.
pub fn pulse_at(elapsed_ms: f64, config: &SessionConfig) -> f32 {
    if config.pulse_period_ms <= 0.0 {
        return 1.0;
    }
    1.0 + config.pulse_amplitude * (elapsed_ms / config.pulse_period_ms as f64).sin() as f32
}

fn project(area: &DrawingArea, p: Vec2) -> [f32; 2] {
    area.to_surface(p).to_array()
}

pub fn build_frame(input: &FrameInput<'_>, config: &SessionConfig) -> RenderFrame {
    let area = input.area;
    let progress = input.progress;
    let current = progress.stroke_index();
    let waypoint = progress.waypoint_index();
    let pulse = pulse_at(input.elapsed_ms, config);

    let mut strokes = Vec::with_capacity(input.strokes.len());
    let mut markers = Vec::new();
    let mut trail = Vec::new();

    // Nothing to project onto a zero-sized area.
    let degenerate = area.is_degenerate();
    let visible = if degenerate { &[][..] } else { input.strokes };
    if !degenerate {
        trail.extend(progress.trail().iter().map(|&p| project(&area, p)));
    }

    for (i, stroke) in visible.iter().enumerate() {
        let completed = progress.stroke_completed().get(i).copied().unwrap_or(false);
        let status = if completed {
            StrokeStatus::Completed
        } else if i == current {
            StrokeStatus::Current
        } else {
            StrokeStatus::Future
        };

        strokes.push(GuideStroke {
            points: stroke.points.iter().map(|&p| project(&area, p)).collect(),
            status,
            line_width: if i == current { CURRENT_STROKE_WIDTH } else { OTHER_STROKE_WIDTH },
            dashed: status == StrokeStatus::Current,
        });

        match status {
            StrokeStatus::Current => {
                for (j, &p) in stroke.points.iter().enumerate() {
                    let [x, y] = project(&area, p);
                    let (radius, state, label) = if j == waypoint {
                        (ACTIVE_MARKER_RADIUS * pulse, MarkerState::Active, MarkerLabel::Number(j + 1))
                    } else if j < waypoint {
                        (MARKER_RADIUS, MarkerState::Done, MarkerLabel::Check)
                    } else {
                        (MARKER_RADIUS, MarkerState::Pending, MarkerLabel::Number(j + 1))
                    };
                    markers.push(Marker { x, y, radius, state, label });
                }
            }
            StrokeStatus::Future if i > current => {
                if let Some(start) = stroke.waypoint(0) {
                    let [x, y] = project(&area, start);
                    markers.push(Marker {
                        x,
                        y,
                        radius: START_MARKER_RADIUS,
                        state: MarkerState::StrokeStart,
                        label: MarkerLabel::Number(i + 1),
                    });
                }
            }
            _ => {}
        }
    }

    RenderFrame {
        area,
        strokes,
        markers,
        trail,
        pulse,
        celebrating: input.celebrating,
        prompt: input.prompt.map(|prompt| PromptView {
            prompt,
            text: prompt.message(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strokes() -> Vec<Stroke> {
        vec![
            Stroke::from_pairs(&[[0.0, 0.0], [0.0, 1.0]]),
            Stroke::from_pairs(&[[0.0, 0.5], [0.5, 0.5], [1.0, 0.5]]),
            Stroke::from_pairs(&[[1.0, 0.0], [1.0, 1.0]]),
        ]
    }

    fn area() -> DrawingArea {
        DrawingArea { x: 10.0, y: 20.0, width: 100.0, height: 200.0 }
    }

    #[test]
    fn idle_frame_marks_first_stroke_current() {
        let strokes = strokes();
        let progress = TraceProgress::new(strokes.len());
        let frame = build_frame(
            &FrameInput {
                area: area(),
                strokes: &strokes,
                progress: &progress,
                elapsed_ms: 0.0,
                celebrating: false,
                prompt: None,
            },
            &SessionConfig::default(),
        );

        assert_eq!(frame.strokes[0].status, StrokeStatus::Current);
        assert!(frame.strokes[0].dashed);
        assert_eq!(frame.strokes[1].status, StrokeStatus::Future);
        assert_eq!(frame.strokes[0].points[1], [10.0, 220.0]);
        // Two waypoint markers on stroke 1 plus start markers for strokes 2 and 3.
        assert_eq!(frame.markers.len(), 4);
        assert_eq!(frame.markers[0].state, MarkerState::Active);
        assert!((frame.markers[0].radius - 18.0).abs() < 1e-6);
        assert_eq!(frame.markers[1].state, MarkerState::Pending);
        assert_eq!(frame.markers[2].state, MarkerState::StrokeStart);
        assert_eq!(frame.markers[2].label, MarkerLabel::Number(2));
        assert_eq!(frame.markers[2].radius, 12.0);
    }

    #[test]
    fn mid_stroke_frame() {
        let strokes = strokes();
        let mut progress = TraceProgress::new(strokes.len());
        progress.begin(&strokes, Vec2::new(0.0, 0.0), 0.12);
        progress.advance(&strokes, Vec2::new(0.0, 1.0), 0.1);
        progress.end();
        progress.begin(&strokes, Vec2::new(0.0, 0.5), 0.12);

        let frame = build_frame(
            &FrameInput {
                area: area(),
                strokes: &strokes,
                progress: &progress,
                elapsed_ms: 0.0,
                celebrating: false,
                prompt: Some(Prompt::KeepGoing),
            },
            &SessionConfig::default(),
        );

        assert_eq!(frame.strokes[0].status, StrokeStatus::Completed);
        assert_eq!(frame.strokes[1].status, StrokeStatus::Current);
        let states: Vec<_> = frame.markers.iter().map(|m| m.state).collect();
        assert_eq!(
            states,
            vec![
                MarkerState::Done,
                MarkerState::Active,
                MarkerState::Pending,
                MarkerState::StrokeStart,
            ]
        );
        assert_eq!(frame.markers[0].label, MarkerLabel::Check);
        assert_eq!(frame.trail, vec![[10.0, 120.0]]);
        assert_eq!(frame.prompt.map(|p| p.text), Some(Prompt::KeepGoing.message()));
    }

    #[test]
    fn degenerate_area_draws_nothing() {
        let strokes = strokes();
        let mut progress = TraceProgress::new(strokes.len());
        progress.begin(&strokes, Vec2::new(0.0, 0.0), 0.12);
        let frame = build_frame(
            &FrameInput {
                area: DrawingArea::compute(40.0, 40.0, 0.85, 30.0),
                strokes: &strokes,
                progress: &progress,
                elapsed_ms: 0.0,
                celebrating: true,
                prompt: Some(Prompt::Amazing),
            },
            &SessionConfig::default(),
        );
        assert!(frame.strokes.is_empty());
        assert!(frame.markers.is_empty());
        assert!(frame.trail.is_empty());
        assert!(frame.celebrating);
        assert!(frame.prompt.is_some());
    }

    #[test]
    fn pulse_follows_sine() {
        let config = SessionConfig::default();
        assert!((pulse_at(0.0, &config) - 1.0).abs() < 1e-6);
        let quarter = std::f64::consts::FRAC_PI_2 * 150.0;
        assert!((pulse_at(quarter, &config) - 1.2).abs() < 1e-5);
    }
}
