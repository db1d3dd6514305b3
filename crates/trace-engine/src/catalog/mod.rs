//! Path catalog: the static mapping from content items to ordered strokes.

mod builtin;
pub mod compose;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::api::error::TraceError;
use crate::assets::manifest::CatalogManifest;
use compose::{compose_word, WordLayout};

/// One of the three content categories. Each tracks completion independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Letters,
    Numbers,
    Words,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Letters, Section::Numbers, Section::Words];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Letters => "letters",
            Section::Numbers => "numbers",
            Section::Words => "words",
        }
    }

    /// Dense index for per-section storage.
    pub(crate) fn slot(self) -> usize {
        match self {
            Section::Letters => 0,
            Section::Numbers => 1,
            Section::Words => 2,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = TraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "letters" => Ok(Section::Letters),
            "numbers" => Ok(Section::Numbers),
            "words" => Ok(Section::Words),
            _ => Err(TraceError::UnknownSection(s.to_string())),
        }
    }
}

/// One continuous pen movement: waypoints in the order they must be visited.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub points: Vec<Vec2>,
}

impl Stroke {
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    pub fn from_pairs(pairs: &[[f32; 2]]) -> Self {
        Self::new(pairs.iter().map(|&p| Vec2::from_array(p)).collect())
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Waypoint at `index`, if the stroke has one there.
    pub fn waypoint(&self, index: usize) -> Option<Vec2> {
        self.points.get(index).copied()
    }
}

/// A traceable unit: a letter, a digit or a word, addressed by (section, index).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentItem {
    pub section: Section,
    pub index: usize,
    pub glyphs: String,
}

impl ContentItem {
    pub fn glyph_count(&self) -> usize {
        self.glyphs.chars().count()
    }

    /// Words (and any multi-glyph item) are composed and drawn on a wider area.
    pub fn is_word(&self) -> bool {
        self.section == Section::Words || self.glyph_count() > 1
    }
}

/// Immutable table from glyphs to strokes, plus the ordered content lists.
///
/// The table is data only; nothing in here knows about tracing progress, so a
/// different alphabet can be swapped in through a [`CatalogManifest`].
#[derive(Debug, Clone)]
pub struct Catalog {
    glyphs: HashMap<char, Vec<Stroke>>,
    sections: [Vec<String>; 3],
    word_layout: WordLayout,
}

impl Catalog {
    /// An empty catalog: no glyphs, no content.
    pub fn empty() -> Self {
        Self {
            glyphs: HashMap::new(),
            sections: [Vec::new(), Vec::new(), Vec::new()],
            word_layout: WordLayout::default(),
        }
    }

    /// The compiled-in Latin letters, digits and starter words.
    pub fn builtin() -> Self {
        let glyphs: HashMap<char, Vec<Stroke>> = builtin::GLYPHS
            .iter()
            .map(|(ch, strokes)| {
                (*ch, strokes.iter().map(|s| Stroke::from_pairs(s)).collect::<Vec<_>>())
            })
            .collect();
        Self {
            glyphs,
            sections: [
                builtin::LETTERS.chars().map(String::from).collect(),
                builtin::NUMBERS.chars().map(String::from).collect(),
                builtin::WORDS.iter().map(|w| w.to_string()).collect(),
            ],
            word_layout: WordLayout::default(),
        }
    }

    /// Build a standalone catalog from a manifest.
    pub fn from_manifest(manifest: &CatalogManifest) -> Result<Self, TraceError> {
        let mut catalog = Self::empty();
        catalog.extend(manifest)?;
        Ok(catalog)
    }

    /// Parse a manifest from JSON and build a catalog from it.
    pub fn from_json(json: &str) -> Result<Self, TraceError> {
        let manifest = CatalogManifest::from_json(json)?;
        Self::from_manifest(&manifest)
    }

    /// Merge a manifest into this catalog. Glyphs with the same key are replaced;
    /// content items are appended to their sections. Nothing changes on error.
    pub fn extend(&mut self, manifest: &CatalogManifest) -> Result<(), TraceError> {
        let glyphs = manifest.validated_glyphs()?;
        let added = glyphs.len();
        self.glyphs.extend(glyphs);
        for section in Section::ALL {
            self.sections[section.slot()].extend(manifest.items(section).iter().cloned());
        }
        log::info!(
            "catalog: merged {} glyphs, {} letters, {} numbers, {} words",
            added,
            manifest.letters.len(),
            manifest.numbers.len(),
            manifest.words.len()
        );
        Ok(())
    }

    pub fn set_word_layout(&mut self, layout: WordLayout) {
        self.word_layout = layout;
    }

    /// Strokes for a single glyph. Empty when the glyph is not in the table.
    pub fn glyph(&self, ch: char) -> &[Stroke] {
        self.glyphs.get(&ch).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Display strings of a section, in order.
    pub fn items(&self, section: Section) -> &[String] {
        &self.sections[section.slot()]
    }

    pub fn len(&self, section: Section) -> usize {
        self.sections[section.slot()].len()
    }

    pub fn item(&self, section: Section, index: usize) -> Option<ContentItem> {
        self.sections[section.slot()].get(index).map(|glyphs| ContentItem {
            section,
            index,
            glyphs: glyphs.clone(),
        })
    }

    /// Ordered strokes for a content item. Unknown items and glyphs yield an empty
    /// list rather than an error.
    pub fn strokes_for(&self, section: Section, index: usize) -> Vec<Stroke> {
        match self.item(section, index) {
            Some(item) => self.strokes_for_item(&item),
            None => Vec::new(),
        }
    }

    pub fn strokes_for_item(&self, item: &ContentItem) -> Vec<Stroke> {
        if item.is_word() {
            return self.compose_word(&item.glyphs);
        }
        match item.glyphs.chars().next() {
            Some(ch) => self.glyph(ch).to_vec(),
            None => Vec::new(),
        }
    }

    /// Compose a word from this catalog's glyphs using its word layout.
    pub fn compose_word(&self, word: &str) -> Vec<Stroke> {
        compose_word(word, |ch| self.glyph(ch), &self.word_layout)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
