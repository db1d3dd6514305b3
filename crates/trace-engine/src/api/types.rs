use serde::Serialize;

use crate::catalog::Section;

/// A discrete notification for the feedback collaborator (audio, prompts, effects).
/// Events accumulate during a frame and are drained by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TraceEvent {
    /// A new content item became active.
    ItemSelected { section: Section, index: usize },
    /// The input began close enough to the current stroke's first waypoint.
    StrokeStarted { stroke: usize },
    /// The input began too far from the current stroke's first waypoint.
    StartMissed { stroke: usize, distance: f32 },
    /// The current target waypoint was reached. `waypoint` is the index that was hit.
    WaypointHit { stroke: usize, waypoint: usize },
    /// Every waypoint of `stroke` was visited in order.
    StrokeCompleted { stroke: usize },
    /// Input ended before the stroke's final waypoint; the stroke restarts.
    StrokeFailed { stroke: usize, reached: usize },
    /// All strokes of the active item are complete. `first_time` is false when
    /// the item was already in the section's completion set.
    ItemCompleted {
        section: Section,
        index: usize,
        first_time: bool,
    },
    /// A manual check ran before every stroke was completed.
    CheckFailed { completed: usize, total: usize },
    /// The user asked where to go next. Position is in surface space.
    HintRequested {
        stroke: usize,
        waypoint: usize,
        x: f32,
        y: f32,
    },
    /// The active item was reset to its first stroke.
    Cleared,
}

/// A sound cue emitted by the session. The host maps each cue to audio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SoundCue {
    /// Navigation and button presses.
    Click,
    /// A waypoint was hit; `step` rises along the stroke so the pitch can climb.
    Point { step: u32 },
    /// A stroke was completed.
    Stroke,
    /// A whole item was completed.
    Success,
}

/// Transient message for the speech bubble. Only one is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Prompt {
    Welcome,
    StartAtFirstPoint,
    KeepGoing,
    NextStroke { number: usize },
    Amazing,
    TraceFromStart { strokes: usize },
    LetsTrace,
    TryAgain,
    KeepTracing,
    Hint { point: usize },
}

impl Prompt {
    /// How long the prompt stays visible, in seconds.
    pub fn duration(&self) -> f32 {
        match self {
            Prompt::Welcome | Prompt::TraceFromStart { .. } => 4.0,
            Prompt::LetsTrace => 3.0,
            _ => 2.5,
        }
    }

    /// Default English text for the prompt.
    pub fn message(&self) -> String {
        match self {
            Prompt::Welcome => "Tap point 1 and trace!".to_string(),
            Prompt::StartAtFirstPoint => "Start at point 1!".to_string(),
            Prompt::KeepGoing => "Keep going! Follow the points!".to_string(),
            Prompt::NextStroke { number } => format!("Great! Now stroke {number}!"),
            Prompt::Amazing => "Amazing job!".to_string(),
            Prompt::TraceFromStart { strokes } => {
                let plural = if *strokes > 1 { "s" } else { "" };
                format!("Trace from point 1! {strokes} stroke{plural}")
            }
            Prompt::LetsTrace => "Let's trace together!".to_string(),
            Prompt::TryAgain => "Try again! Start at point 1!".to_string(),
            Prompt::KeepTracing => "Keep tracing! Follow all the points!".to_string(),
            Prompt::Hint { point } => format!("Start at point {point}!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_durations() {
        assert_eq!(Prompt::Welcome.duration(), 4.0);
        assert_eq!(Prompt::LetsTrace.duration(), 3.0);
        assert_eq!(Prompt::KeepGoing.duration(), 2.5);
    }

    #[test]
    fn stroke_count_pluralizes() {
        assert_eq!(
            Prompt::TraceFromStart { strokes: 1 }.message(),
            "Trace from point 1! 1 stroke"
        );
        assert_eq!(
            Prompt::TraceFromStart { strokes: 3 }.message(),
            "Trace from point 1! 3 strokes"
        );
    }

    #[test]
    fn events_serialize_with_kind_tag() {
        let json = serde_json::to_string(&TraceEvent::WaypointHit { stroke: 1, waypoint: 2 }).unwrap();
        assert_eq!(json, r#"{"kind":"waypointHit","stroke":1,"waypoint":2}"#);
    }
}
