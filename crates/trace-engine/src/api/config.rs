use serde::{Deserialize, Serialize};

/// Configuration for a tracing session.
///
/// Every field has a default that reproduces the tuned behaviour of the
/// tracing widget; a JSON override only needs to name the fields it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Padding subtracted from each side of the surface before aspect fitting (surface units).
    pub padding: f32,
    /// Target width/height ratio for single letters and digits.
    pub glyph_aspect: f32,
    /// Per-letter width factor for words: aspect = max(1, letters * factor).
    pub word_aspect_per_letter: f32,
    /// Normalized distance that accepts the start of a stroke.
    pub start_threshold: f32,
    /// Normalized distance that registers a mid-stroke waypoint.
    pub waypoint_threshold: f32,
    /// Extra slot fraction added to the letter count when composing words.
    pub word_slot_slack: f32,
    /// Shrink factor applied to each letter inside its word slot.
    pub word_letter_scale: f32,
    /// Seconds between a completed stroke and clearing its ink trail.
    pub stroke_clear_delay: f32,
    /// Seconds the celebration stays up after an item completes.
    pub celebration_duration: f32,
    /// Seconds between item completion and auto-advancing to the next item.
    pub advance_delay: f32,
    /// Seconds after session start before the welcome prompt appears.
    pub welcome_delay: f32,
    /// Milliseconds per radian of the active waypoint pulse.
    pub pulse_period_ms: f32,
    /// Relative radius swing of the active waypoint pulse.
    pub pulse_amplitude: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            padding: 30.0,
            glyph_aspect: 0.85,
            word_aspect_per_letter: 0.7,
            start_threshold: 0.12,
            waypoint_threshold: 0.1,
            word_slot_slack: 0.5,
            word_letter_scale: 0.9,
            stroke_clear_delay: 0.3,
            celebration_duration: 2.0,
            advance_delay: 2.2,
            welcome_delay: 1.0,
            pulse_period_ms: 150.0,
            pulse_amplitude: 0.2,
        }
    }
}

impl SessionConfig {
    /// Parse a configuration from a JSON string. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Target aspect ratio for a content item made of `glyph_count` glyphs.
    pub fn aspect_for(&self, glyph_count: usize, is_word: bool) -> f32 {
        if is_word {
            (glyph_count as f32 * self.word_aspect_per_letter).max(1.0)
        } else {
            self.glyph_aspect
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_tuned_constants() {
        let cfg = SessionConfig::default();
        assert_eq!(cfg.padding, 30.0);
        assert_eq!(cfg.start_threshold, 0.12);
        assert_eq!(cfg.waypoint_threshold, 0.1);
        assert_eq!(cfg.word_slot_slack, 0.5);
        assert_eq!(cfg.word_letter_scale, 0.9);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = SessionConfig::from_json(r#"{ "padding": 12.0 }"#).unwrap();
        assert_eq!(cfg.padding, 12.0);
        assert_eq!(cfg.glyph_aspect, 0.85);
        assert_eq!(cfg.advance_delay, 2.2);
    }

    #[test]
    fn aspect_for_words_and_glyphs() {
        let cfg = SessionConfig::default();
        assert!((cfg.aspect_for(1, false) - 0.85).abs() < 1e-6);
        assert!((cfg.aspect_for(3, true) - 2.1).abs() < 1e-6);
        // Short words never go narrower than square.
        assert!((cfg.aspect_for(1, true) - 1.0).abs() < 1e-6);
    }
}
