//! Word composer: lays single-glyph strokes side by side into one stroke list.

use glam::Vec2;

use super::Stroke;

/// Spacing constants for composing words out of single glyphs.
///
/// Each letter gets a slot of width `1 / (letters + slot_slack)`; inside the slot
/// the letter's own x coordinates are recentered and shrunk by `letter_scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordLayout {
    pub slot_slack: f32,
    pub letter_scale: f32,
}

impl Default for WordLayout {
    fn default() -> Self {
        Self {
            slot_slack: 0.5,
            letter_scale: 0.9,
        }
    }
}

impl WordLayout {
    /// Width of one letter slot for a word of `letters` letters.
    pub fn slot_width(&self, letters: usize) -> f32 {
        1.0 / (letters as f32 + self.slot_slack)
    }

    /// Map a glyph-space point into slot `slot` of a word with the given slot width.
    /// Only x changes; y is shared by every letter.
    pub fn place(&self, slot: usize, slot_width: f32, point: Vec2) -> Vec2 {
        let offset = slot_width * (slot as f32 + 0.5);
        Vec2::new(offset + (point.x - 0.5) * slot_width * self.letter_scale, point.y)
    }
}

/// Concatenate the strokes of each glyph in `word`, left to right.
///
/// Glyphs missing from `lookup` still occupy their slot but contribute no strokes.
pub fn compose_word<'a, F>(word: &str, lookup: F, layout: &WordLayout) -> Vec<Stroke>
where
    F: Fn(char) -> &'a [Stroke],
{
    let letters = word.chars().count();
    if letters == 0 {
        return Vec::new();
    }
    let slot_width = layout.slot_width(letters);

    let mut strokes = Vec::new();
    for (slot, ch) in word.chars().enumerate() {
        for stroke in lookup(ch) {
            let points = stroke
                .points
                .iter()
                .map(|&p| layout.place(slot, slot_width, p))
                .collect();
            strokes.push(Stroke::new(points));
        }
    }
    strokes
}
