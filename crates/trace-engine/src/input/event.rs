use glam::Vec2;
use serde::Deserialize;

/// One phase of a pointer or touch gesture, in surface pixels.
/// Mouse, pen and touch all collapse into this single stream.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "phase", rename_all = "camelCase")]
pub enum InputEvent {
    /// Press or touch start.
    Begin { x: f32, y: f32 },
    /// Drag while pressed.
    Move { x: f32, y: f32 },
    /// Release, cancel, or the pointer leaving the surface.
    End { x: f32, y: f32 },
}

impl InputEvent {
    pub fn position(&self) -> Vec2 {
        match *self {
            InputEvent::Begin { x, y } | InputEvent::Move { x, y } | InputEvent::End { x, y } => {
                Vec2::new(x, y)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_from_json() {
        let event: InputEvent = serde_json::from_str(r#"{"phase":"move","x":12.5,"y":40}"#).unwrap();
        assert_eq!(event, InputEvent::Move { x: 12.5, y: 40.0 });
        assert_eq!(event.position(), Vec2::new(12.5, 40.0));
    }
}
