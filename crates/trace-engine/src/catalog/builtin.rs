//! Built-in stroke table and content lists.
//!
//! Coordinates are normalized to the glyph box (0..1 on both axes, y down).
//! Strokes follow standard handwriting teaching order and each stroke's
//! waypoints are listed in the direction the pen travels.

pub(crate) type StrokeData = &'static [[f32; 2]];
pub(crate) type GlyphData = (char, &'static [StrokeData]);

pub(crate) const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
pub(crate) const NUMBERS: &str = "0123456789";
pub(crate) const WORDS: &[&str] = &[
    "CAT", "DOG", "SUN", "MOM", "DAD", "RED", "BIG", "HAT", "CUP", "BUS",
];

pub(crate) static GLYPHS: &[GlyphData] = &[
    // --- Uppercase -----------------------------------------------------------
    ('A', &[
        &[[0.5, 0.15], [0.35, 0.5], [0.2, 0.85]],
        &[[0.5, 0.15], [0.65, 0.5], [0.8, 0.85]],
        &[[0.32, 0.55], [0.5, 0.55], [0.68, 0.55]],
    ]),
    ('B', &[
        &[[0.3, 0.15], [0.3, 0.5], [0.3, 0.85]],
        &[[0.3, 0.15], [0.5, 0.15], [0.6, 0.25], [0.6, 0.4], [0.5, 0.5], [0.3, 0.5]],
        &[[0.3, 0.5], [0.55, 0.5], [0.65, 0.6], [0.65, 0.75], [0.55, 0.85], [0.3, 0.85]],
    ]),
    ('C', &[
        &[[0.7, 0.25], [0.55, 0.15], [0.4, 0.15], [0.25, 0.3], [0.2, 0.5], [0.25, 0.7], [0.4, 0.85], [0.55, 0.85], [0.7, 0.75]],
    ]),
    ('D', &[
        &[[0.3, 0.15], [0.3, 0.5], [0.3, 0.85]],
        &[[0.3, 0.15], [0.5, 0.15], [0.7, 0.3], [0.75, 0.5], [0.7, 0.7], [0.5, 0.85], [0.3, 0.85]],
    ]),
    ('E', &[
        &[[0.3, 0.15], [0.3, 0.5], [0.3, 0.85]],
        &[[0.3, 0.15], [0.5, 0.15], [0.7, 0.15]],
        &[[0.3, 0.5], [0.45, 0.5], [0.6, 0.5]],
        &[[0.3, 0.85], [0.5, 0.85], [0.7, 0.85]],
    ]),
    ('F', &[
        &[[0.35, 0.15], [0.35, 0.5], [0.35, 0.85]],
        &[[0.35, 0.15], [0.5, 0.15], [0.7, 0.15]],
        &[[0.35, 0.5], [0.5, 0.5], [0.6, 0.5]],
    ]),
    ('G', &[
        &[[0.65, 0.22], [0.5, 0.12], [0.35, 0.18], [0.25, 0.35], [0.25, 0.5], [0.25, 0.65], [0.35, 0.82], [0.5, 0.88], [0.65, 0.78], [0.65, 0.55]],
        &[[0.65, 0.55], [0.5, 0.55]],
    ]),
    ('H', &[
        &[[0.3, 0.12], [0.3, 0.5], [0.3, 0.88]],
        &[[0.7, 0.12], [0.7, 0.5], [0.7, 0.88]],
        &[[0.3, 0.5], [0.5, 0.5], [0.7, 0.5]],
    ]),
    ('I', &[
        &[[0.5, 0.12], [0.5, 0.5], [0.5, 0.88]],
    ]),
    ('J', &[
        &[[0.55, 0.15], [0.55, 0.5], [0.55, 0.7], [0.45, 0.82], [0.35, 0.85], [0.25, 0.78]],
    ]),
    ('K', &[
        &[[0.3, 0.15], [0.3, 0.5], [0.3, 0.85]],
        &[[0.7, 0.15], [0.5, 0.35], [0.3, 0.5]],
        &[[0.3, 0.5], [0.5, 0.68], [0.7, 0.85]],
    ]),
    ('L', &[
        &[[0.3, 0.15], [0.3, 0.5], [0.3, 0.85]],
        &[[0.3, 0.85], [0.5, 0.85], [0.7, 0.85]],
    ]),
    ('M', &[
        &[[0.2, 0.12], [0.2, 0.5], [0.2, 0.88]],
        &[[0.2, 0.12], [0.35, 0.45], [0.5, 0.75]],
        &[[0.5, 0.75], [0.65, 0.45], [0.8, 0.12]],
        &[[0.8, 0.12], [0.8, 0.5], [0.8, 0.88]],
    ]),
    ('N', &[
        &[[0.25, 0.12], [0.25, 0.5], [0.25, 0.88]],
        &[[0.25, 0.12], [0.5, 0.5], [0.75, 0.88]],
        &[[0.75, 0.88], [0.75, 0.5], [0.75, 0.12]],
    ]),
    ('O', &[
        &[[0.5, 0.15], [0.3, 0.2], [0.2, 0.4], [0.2, 0.6], [0.3, 0.8], [0.5, 0.85], [0.7, 0.8], [0.8, 0.6], [0.8, 0.4], [0.7, 0.2], [0.5, 0.15]],
    ]),
    ('P', &[
        &[[0.3, 0.15], [0.3, 0.5], [0.3, 0.85]],
        &[[0.3, 0.15], [0.5, 0.15], [0.65, 0.25], [0.65, 0.42], [0.5, 0.52], [0.3, 0.52]],
    ]),
    ('Q', &[
        &[[0.5, 0.15], [0.3, 0.2], [0.2, 0.4], [0.2, 0.55], [0.3, 0.72], [0.5, 0.77], [0.7, 0.72], [0.8, 0.55], [0.8, 0.4], [0.7, 0.2], [0.5, 0.15]],
        &[[0.55, 0.65], [0.68, 0.8], [0.78, 0.9]],
    ]),
    ('R', &[
        &[[0.3, 0.15], [0.3, 0.5], [0.3, 0.85]],
        &[[0.3, 0.15], [0.5, 0.15], [0.62, 0.25], [0.62, 0.38], [0.5, 0.5], [0.3, 0.5]],
        &[[0.42, 0.5], [0.55, 0.67], [0.7, 0.85]],
    ]),
    ('S', &[
        &[[0.65, 0.2], [0.5, 0.15], [0.35, 0.18], [0.25, 0.28], [0.28, 0.4], [0.45, 0.5], [0.55, 0.5], [0.72, 0.6], [0.75, 0.72], [0.65, 0.83], [0.5, 0.85], [0.35, 0.8]],
    ]),
    ('T', &[
        &[[0.2, 0.15], [0.5, 0.15], [0.8, 0.15]],
        &[[0.5, 0.15], [0.5, 0.5], [0.5, 0.85]],
    ]),
    ('U', &[
        &[[0.25, 0.15], [0.25, 0.5], [0.25, 0.7], [0.38, 0.83], [0.5, 0.85], [0.62, 0.83], [0.75, 0.7], [0.75, 0.5], [0.75, 0.15]],
    ]),
    ('V', &[
        &[[0.2, 0.15], [0.35, 0.5], [0.5, 0.85]],
        &[[0.5, 0.85], [0.65, 0.5], [0.8, 0.15]],
    ]),
    ('W', &[
        &[[0.1, 0.15], [0.2, 0.5], [0.28, 0.85]],
        &[[0.28, 0.85], [0.38, 0.5], [0.5, 0.4]],
        &[[0.5, 0.4], [0.62, 0.5], [0.72, 0.85]],
        &[[0.72, 0.85], [0.82, 0.5], [0.9, 0.15]],
    ]),
    ('X', &[
        &[[0.2, 0.15], [0.5, 0.5], [0.8, 0.85]],
        &[[0.8, 0.15], [0.5, 0.5], [0.2, 0.85]],
    ]),
    ('Y', &[
        &[[0.2, 0.15], [0.35, 0.35], [0.5, 0.5]],
        &[[0.8, 0.15], [0.65, 0.35], [0.5, 0.5]],
        &[[0.5, 0.5], [0.5, 0.68], [0.5, 0.85]],
    ]),
    ('Z', &[
        &[[0.2, 0.15], [0.5, 0.15], [0.8, 0.15]],
        &[[0.8, 0.15], [0.5, 0.5], [0.2, 0.85]],
        &[[0.2, 0.85], [0.5, 0.85], [0.8, 0.85]],
    ]),
    // --- Lowercase -----------------------------------------------------------
    ('a', &[
        &[[0.65, 0.4], [0.55, 0.35], [0.4, 0.35], [0.28, 0.45], [0.25, 0.6], [0.3, 0.75], [0.45, 0.85], [0.6, 0.8], [0.65, 0.65]],
        &[[0.65, 0.35], [0.65, 0.6], [0.65, 0.85]],
    ]),
    ('b', &[
        &[[0.35, 0.15], [0.35, 0.5], [0.35, 0.85]],
        &[[0.35, 0.45], [0.5, 0.35], [0.65, 0.45], [0.7, 0.6], [0.65, 0.78], [0.5, 0.85], [0.35, 0.78]],
    ]),
    ('c', &[
        &[[0.65, 0.4], [0.5, 0.35], [0.35, 0.42], [0.28, 0.58], [0.35, 0.75], [0.5, 0.85], [0.65, 0.78]],
    ]),
    ('d', &[
        &[[0.6, 0.45], [0.45, 0.35], [0.3, 0.45], [0.25, 0.6], [0.3, 0.78], [0.45, 0.85], [0.6, 0.75]],
        &[[0.65, 0.15], [0.65, 0.5], [0.65, 0.85]],
    ]),
    ('e', &[
        &[[0.28, 0.55], [0.5, 0.55], [0.68, 0.55], [0.7, 0.42], [0.55, 0.35], [0.35, 0.4], [0.25, 0.55], [0.3, 0.75], [0.5, 0.85], [0.68, 0.78]],
    ]),
    ('f', &[
        &[[0.65, 0.2], [0.55, 0.15], [0.42, 0.2], [0.38, 0.35], [0.38, 0.6], [0.38, 0.85]],
        &[[0.25, 0.5], [0.38, 0.5], [0.55, 0.5]],
    ]),
    ('g', &[
        &[[0.62, 0.45], [0.5, 0.35], [0.35, 0.42], [0.28, 0.55], [0.35, 0.7], [0.5, 0.75], [0.62, 0.65]],
        &[[0.62, 0.35], [0.62, 0.7], [0.62, 0.9], [0.5, 0.98], [0.35, 0.95]],
    ]),
    ('h', &[
        &[[0.3, 0.15], [0.3, 0.5], [0.3, 0.85]],
        &[[0.3, 0.5], [0.45, 0.38], [0.6, 0.42], [0.68, 0.55], [0.68, 0.7], [0.68, 0.85]],
    ]),
    ('i', &[
        &[[0.5, 0.4], [0.5, 0.62], [0.5, 0.85]],
        &[[0.5, 0.22], [0.5, 0.25]],
    ]),
    ('j', &[
        &[[0.5, 0.4], [0.5, 0.7], [0.5, 0.9], [0.4, 0.98], [0.28, 0.95]],
        &[[0.5, 0.22], [0.5, 0.25]],
    ]),
    ('k', &[
        &[[0.32, 0.15], [0.32, 0.5], [0.32, 0.85]],
        &[[0.65, 0.38], [0.48, 0.52], [0.32, 0.58]],
        &[[0.4, 0.55], [0.52, 0.7], [0.68, 0.85]],
    ]),
    ('l', &[
        &[[0.5, 0.15], [0.5, 0.5], [0.5, 0.85]],
    ]),
    ('m', &[
        &[[0.15, 0.4], [0.15, 0.62], [0.15, 0.85]],
        &[[0.15, 0.48], [0.28, 0.38], [0.4, 0.45], [0.42, 0.65], [0.42, 0.85]],
        &[[0.42, 0.48], [0.58, 0.38], [0.72, 0.45], [0.75, 0.65], [0.75, 0.85]],
    ]),
    ('n', &[
        &[[0.28, 0.4], [0.28, 0.62], [0.28, 0.85]],
        &[[0.28, 0.5], [0.45, 0.38], [0.62, 0.45], [0.68, 0.6], [0.68, 0.72], [0.68, 0.85]],
    ]),
    ('o', &[
        &[[0.5, 0.35], [0.35, 0.4], [0.25, 0.55], [0.28, 0.72], [0.42, 0.85], [0.58, 0.85], [0.72, 0.72], [0.75, 0.55], [0.65, 0.4], [0.5, 0.35]],
    ]),
    ('p', &[
        &[[0.32, 0.4], [0.32, 0.7], [0.32, 1.0]],
        &[[0.32, 0.45], [0.48, 0.35], [0.65, 0.42], [0.7, 0.58], [0.65, 0.75], [0.48, 0.82], [0.32, 0.72]],
    ]),
    ('q', &[
        &[[0.6, 0.45], [0.48, 0.35], [0.32, 0.42], [0.25, 0.58], [0.32, 0.75], [0.48, 0.82], [0.6, 0.72]],
        &[[0.65, 0.4], [0.65, 0.7], [0.65, 1.0]],
    ]),
    ('r', &[
        &[[0.35, 0.4], [0.35, 0.62], [0.35, 0.85]],
        &[[0.35, 0.5], [0.48, 0.38], [0.62, 0.42], [0.68, 0.48]],
    ]),
    ('s', &[
        &[[0.62, 0.42], [0.48, 0.35], [0.35, 0.42], [0.32, 0.52], [0.45, 0.6], [0.58, 0.68], [0.62, 0.78], [0.5, 0.85], [0.35, 0.8]],
    ]),
    ('t', &[
        &[[0.48, 0.2], [0.48, 0.5], [0.48, 0.75], [0.55, 0.83], [0.65, 0.82]],
        &[[0.3, 0.42], [0.48, 0.42], [0.65, 0.42]],
    ]),
    ('u', &[
        &[[0.28, 0.4], [0.28, 0.6], [0.32, 0.78], [0.48, 0.85], [0.62, 0.78], [0.68, 0.6]],
        &[[0.68, 0.4], [0.68, 0.62], [0.68, 0.85]],
    ]),
    ('v', &[
        &[[0.25, 0.4], [0.38, 0.62], [0.5, 0.85]],
        &[[0.5, 0.85], [0.62, 0.62], [0.75, 0.4]],
    ]),
    ('w', &[
        &[[0.12, 0.4], [0.2, 0.62], [0.28, 0.85]],
        &[[0.28, 0.85], [0.38, 0.58], [0.45, 0.48]],
        &[[0.45, 0.48], [0.55, 0.68], [0.62, 0.85]],
        &[[0.62, 0.85], [0.75, 0.62], [0.85, 0.4]],
    ]),
    ('x', &[
        &[[0.25, 0.4], [0.5, 0.62], [0.75, 0.85]],
        &[[0.75, 0.4], [0.5, 0.62], [0.25, 0.85]],
    ]),
    ('y', &[
        &[[0.28, 0.4], [0.4, 0.6], [0.5, 0.75]],
        &[[0.72, 0.4], [0.58, 0.65], [0.45, 0.88], [0.35, 0.98], [0.25, 0.95]],
    ]),
    ('z', &[
        &[[0.28, 0.4], [0.5, 0.4], [0.72, 0.4]],
        &[[0.72, 0.4], [0.5, 0.62], [0.28, 0.85]],
        &[[0.28, 0.85], [0.5, 0.85], [0.72, 0.85]],
    ]),
    // --- Digits --------------------------------------------------------------
    ('0', &[
        &[[0.5, 0.15], [0.35, 0.22], [0.25, 0.4], [0.25, 0.6], [0.35, 0.78], [0.5, 0.85], [0.65, 0.78], [0.75, 0.6], [0.75, 0.4], [0.65, 0.22], [0.5, 0.15]],
    ]),
    ('1', &[
        &[[0.38, 0.28], [0.5, 0.15]],
        &[[0.5, 0.15], [0.5, 0.5], [0.5, 0.85]],
        &[[0.35, 0.85], [0.5, 0.85], [0.65, 0.85]],
    ]),
    ('2', &[
        &[[0.28, 0.28], [0.4, 0.15], [0.55, 0.15], [0.7, 0.22], [0.72, 0.35], [0.62, 0.5], [0.4, 0.7], [0.25, 0.85], [0.5, 0.85], [0.75, 0.85]],
    ]),
    ('3', &[
        &[[0.28, 0.22], [0.45, 0.15], [0.6, 0.18], [0.7, 0.28], [0.68, 0.4], [0.55, 0.48], [0.45, 0.5]],
        &[[0.55, 0.52], [0.7, 0.6], [0.72, 0.72], [0.6, 0.83], [0.45, 0.85], [0.28, 0.8]],
    ]),
    ('4', &[
        &[[0.55, 0.12], [0.4, 0.35], [0.28, 0.55], [0.5, 0.55], [0.68, 0.55]],
        &[[0.55, 0.12], [0.55, 0.5], [0.55, 0.88]],
    ]),
    ('5', &[
        &[[0.65, 0.12], [0.45, 0.12], [0.3, 0.12]],
        &[[0.3, 0.12], [0.3, 0.32], [0.3, 0.45]],
        &[[0.3, 0.45], [0.45, 0.42], [0.58, 0.52], [0.62, 0.68], [0.52, 0.82], [0.4, 0.88], [0.28, 0.8]],
    ]),
    ('6', &[
        &[[0.62, 0.2], [0.48, 0.15], [0.35, 0.2], [0.25, 0.35], [0.25, 0.55], [0.3, 0.72], [0.45, 0.85], [0.6, 0.82], [0.7, 0.68], [0.68, 0.52], [0.52, 0.45], [0.35, 0.5], [0.25, 0.55]],
    ]),
    ('7', &[
        &[[0.25, 0.15], [0.5, 0.15], [0.75, 0.15]],
        &[[0.75, 0.15], [0.58, 0.42], [0.45, 0.65], [0.38, 0.85]],
    ]),
    ('8', &[
        &[[0.5, 0.12], [0.38, 0.18], [0.32, 0.3], [0.38, 0.42], [0.5, 0.48]],
        &[[0.5, 0.48], [0.65, 0.55], [0.7, 0.7], [0.6, 0.85], [0.5, 0.88], [0.4, 0.85], [0.3, 0.7], [0.35, 0.55], [0.5, 0.48], [0.62, 0.42], [0.68, 0.28], [0.62, 0.15], [0.5, 0.12]],
    ]),
    ('9', &[
        &[[0.65, 0.5], [0.68, 0.35], [0.58, 0.2], [0.45, 0.15], [0.32, 0.2], [0.28, 0.35], [0.35, 0.48], [0.5, 0.52], [0.65, 0.5]],
        &[[0.65, 0.5], [0.6, 0.68], [0.48, 0.85], [0.35, 0.85]],
    ]),
];
