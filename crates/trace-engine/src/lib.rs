pub mod api;
pub mod assets;
pub mod catalog;
pub mod core;
pub mod input;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::config::SessionConfig;
pub use api::error::TraceError;
pub use api::types::{Prompt, SoundCue, TraceEvent};
pub use assets::manifest::CatalogManifest;
pub use catalog::compose::{compose_word, WordLayout};
pub use catalog::{Catalog, ContentItem, Section, Stroke};
pub use crate::core::completion::CompletionSet;
pub use crate::core::layout::DrawingArea;
pub use crate::core::session::{PickerEntry, Session};
pub use crate::core::time::{Scheduler, TimedAction};
pub use input::adapter::ClientRect;
pub use input::event::InputEvent;
pub use systems::matcher::{match_point, MatchResult};
pub use systems::progress::{ProgressStep, TracePhase, TraceProgress, WaypointHit};
pub use systems::render::{
    build_frame, GuideStroke, Marker, MarkerLabel, MarkerState, RenderFrame, StrokeStatus,
};
