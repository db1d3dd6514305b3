use std::collections::HashMap;
use serde::{Deserialize, Serialize};

use crate::api::error::TraceError;
use crate::catalog::{Section, Stroke};

/// Catalog manifest describing an alphabet and its content lists.
/// Loaded from a JSON file at runtime to swap in or extend the built-in catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogManifest {
    /// Glyph → list of strokes. Each stroke is a list of normalized [x, y] waypoints.
    #[serde(default)]
    pub glyphs: HashMap<String, Vec<Vec<[f32; 2]>>>,
    /// Items for the letters section, in display order.
    #[serde(default)]
    pub letters: Vec<String>,
    /// Items for the numbers section.
    #[serde(default)]
    pub numbers: Vec<String>,
    /// Items for the words section. Each word is composed from its glyphs.
    #[serde(default)]
    pub words: Vec<String>,
}

impl CatalogManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn items(&self, section: Section) -> &[String] {
        match section {
            Section::Letters => &self.letters,
            Section::Numbers => &self.numbers,
            Section::Words => &self.words,
        }
    }

    /// Convert the glyph table, rejecting keys that are not a single character
    /// and strokes without waypoints.
    pub(crate) fn validated_glyphs(&self) -> Result<Vec<(char, Vec<Stroke>)>, TraceError> {
        let mut out = Vec::with_capacity(self.glyphs.len());
        for (key, strokes) in &self.glyphs {
            let mut chars = key.chars();
            let ch = match (chars.next(), chars.next()) {
                (Some(ch), None) => ch,
                _ => {
                    return Err(TraceError::InvalidManifest(format!(
                        "glyph key `{key}` must be exactly one character"
                    )))
                }
            };
            if let Some(pos) = strokes.iter().position(|s| s.is_empty()) {
                return Err(TraceError::InvalidManifest(format!(
                    "glyph `{key}` stroke {} has no waypoints",
                    pos + 1
                )));
            }
            out.push((ch, strokes.iter().map(|s| Stroke::from_pairs(s)).collect()));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_manifest() {
        let json = r#"{
            "glyphs": { "L": [[[0.3, 0.15], [0.3, 0.85]], [[0.3, 0.85], [0.7, 0.85]]] },
            "letters": ["L"]
        }"#;
        let manifest = CatalogManifest::from_json(json).unwrap();
        assert_eq!(manifest.glyphs["L"].len(), 2);
        assert_eq!(manifest.letters, vec!["L".to_string()]);
        assert!(manifest.words.is_empty());
    }

    #[test]
    fn rejects_multi_char_glyph_key() {
        let json = r#"{ "glyphs": { "AB": [[[0.1, 0.1]]] } }"#;
        let manifest = CatalogManifest::from_json(json).unwrap();
        assert!(matches!(
            manifest.validated_glyphs(),
            Err(TraceError::InvalidManifest(_))
        ));
    }

    #[test]
    fn rejects_empty_stroke() {
        let json = r#"{ "glyphs": { "A": [[[0.1, 0.1]], []] } }"#;
        let manifest = CatalogManifest::from_json(json).unwrap();
        let err = manifest.validated_glyphs().unwrap_err();
        assert!(err.to_string().contains("stroke 2"), "{err}");
    }
}
