use glam::Vec2;
use serde::Serialize;

use crate::api::config::SessionConfig;
use crate::api::error::TraceError;
use crate::api::types::{Prompt, SoundCue, TraceEvent};
use crate::assets::manifest::CatalogManifest;
use crate::catalog::compose::WordLayout;
use crate::catalog::{Catalog, ContentItem, Section, Stroke};
use crate::core::completion::CompletionSet;
use crate::core::layout::DrawingArea;
use crate::core::time::{Scheduler, TimedAction};
use crate::input::event::InputEvent;
use crate::systems::matcher::{match_point, MatchResult};
use crate::systems::progress::{ProgressStep, TracePhase, TraceProgress};
use crate::systems::render::{build_frame, FrameInput, RenderFrame};

/// One row of the item picker for the active section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickerEntry {
    pub index: usize,
    pub label: String,
    pub active: bool,
    pub completed: bool,
}

/// The single tracing session: the active item, its progress, per-section
/// completion, pending timers and the transient prompt.
///
/// All transitions run synchronously inside the call that triggers them.
/// Timers only fire from [`tick`](Self::tick). Events and sound cues pile up
/// until the host drains them.
pub struct Session {
    catalog: Catalog,
    config: SessionConfig,
    section: Section,
    index: usize,
    item: Option<ContentItem>,
    strokes: Vec<Stroke>,
    progress: TraceProgress,
    completions: CompletionSet,
    surface: Vec2,
    scheduler: Scheduler,
    prompt: Option<Prompt>,
    celebrating: bool,
    /// Item completion already ran for this activation.
    completion_handled: bool,
    /// Seconds since the session started.
    elapsed: f64,
    events: Vec<TraceEvent>,
    sounds: Vec<SoundCue>,
}

impl Session {
    pub fn new(mut catalog: Catalog, config: SessionConfig) -> Self {
        catalog.set_word_layout(WordLayout {
            slot_slack: config.word_slot_slack,
            letter_scale: config.word_letter_scale,
        });

        let mut session = Self {
            catalog,
            config,
            section: Section::Letters,
            index: 0,
            item: None,
            strokes: Vec::new(),
            progress: TraceProgress::default(),
            completions: CompletionSet::new(),
            surface: Vec2::ZERO,
            scheduler: Scheduler::new(),
            prompt: None,
            celebrating: false,
            completion_handled: false,
            elapsed: 0.0,
            events: Vec::with_capacity(32),
            sounds: Vec::with_capacity(32),
        };
        session.activate(Section::Letters, 0);
        session
            .scheduler
            .schedule(session.config.welcome_delay, TimedAction::ShowPrompt(Prompt::Welcome));
        session
    }

    // -- Selection --

    /// Switch to the first item of `section`.
    pub fn select_section(&mut self, section: Section) -> Result<(), TraceError> {
        if self.catalog.len(section) == 0 {
            return Err(TraceError::EmptySection(section));
        }
        self.activate(section, 0);
        self.sounds.push(SoundCue::Click);
        Ok(())
    }

    /// Jump to an item of the active section.
    pub fn select_item(&mut self, index: usize) -> Result<(), TraceError> {
        let len = self.catalog.len(self.section);
        if index >= len {
            return Err(TraceError::ItemOutOfRange {
                section: self.section,
                index,
                len,
            });
        }
        self.activate(self.section, index);
        self.sounds.push(SoundCue::Click);
        Ok(())
    }

    /// Next item, wrapping to the first.
    pub fn next(&mut self) {
        self.step_item(1);
    }

    /// Previous item, wrapping to the last.
    pub fn previous(&mut self) {
        self.step_item(-1);
    }

    fn step_item(&mut self, delta: isize) {
        let len = self.catalog.len(self.section);
        if len == 0 {
            return;
        }
        let index = (self.index as isize + delta).rem_euclid(len as isize) as usize;
        self.activate(self.section, index);
        self.sounds.push(SoundCue::Click);
    }

    /// Make (section, index) the active item and reset its trace state.
    fn activate(&mut self, section: Section, index: usize) {
        self.section = section;
        self.index = index;
        self.item = self.catalog.item(section, index);
        self.strokes = match &self.item {
            Some(item) => self.catalog.strokes_for_item(item),
            None => Vec::new(),
        };
        self.progress.reset(self.strokes.len());
        self.completion_handled = false;
        self.scheduler.cancel(&TimedAction::ClearTrail);

        log::info!(
            "session: {} #{} `{}` ({} strokes)",
            section,
            index,
            self.item.as_ref().map_or("", |i| i.glyphs.as_str()),
            self.strokes.len()
        );
        self.events.push(TraceEvent::ItemSelected { section, index });

        let prompt = match self.strokes.len() {
            0 => Prompt::LetsTrace,
            n => Prompt::TraceFromStart { strokes: n },
        };
        self.show_prompt(prompt);
    }

    /// Merge extra glyphs and content into the catalog, then re-activate the
    /// current item so replaced glyphs take effect.
    pub fn extend_catalog(&mut self, manifest: &CatalogManifest) -> Result<(), TraceError> {
        self.catalog.extend(manifest)?;
        self.activate(self.section, self.index);
        Ok(())
    }

    // -- Actions --

    /// Reset the active item to its first stroke.
    pub fn clear(&mut self) {
        self.progress.reset(self.strokes.len());
        self.completion_handled = false;
        self.scheduler.cancel(&TimedAction::ClearTrail);
        self.scheduler.cancel(&TimedAction::AdvanceItem {
            section: self.section,
            index: self.index,
        });
        self.events.push(TraceEvent::Cleared);
        self.sounds.push(SoundCue::Click);
        self.show_prompt(Prompt::TryAgain);
    }

    /// Manual verification. Succeeds iff every stroke is complete, running the
    /// same completion path as tracing the last waypoint.
    pub fn check(&mut self) -> bool {
        if self.evaluate_completion() {
            return true;
        }
        let completed = self.progress.stroke_completed().iter().filter(|&&d| d).count();
        self.events.push(TraceEvent::CheckFailed {
            completed,
            total: self.strokes.len(),
        });
        self.show_prompt(Prompt::KeepTracing);
        false
    }

    /// Point the user at the waypoint they need next. No state change.
    pub fn hint(&mut self) {
        self.sounds.push(SoundCue::Click);
        let Some((stroke, waypoint, target)) = self.progress.target(&self.strokes) else {
            return;
        };
        let pos = self.area().to_surface(target);
        self.events.push(TraceEvent::HintRequested {
            stroke,
            waypoint,
            x: pos.x,
            y: pos.y,
        });
        self.show_prompt(Prompt::Hint { point: waypoint + 1 });
    }

    /// Shared completion transition for the automatic and manual triggers.
    /// Returns whether the item counts as complete.
    fn evaluate_completion(&mut self) -> bool {
        if self.item.is_none() || !self.progress.all_strokes_completed(self.strokes.len()) {
            return false;
        }
        if self.completion_handled {
            return true;
        }
        self.completion_handled = true;

        let (section, index) = (self.section, self.index);
        let first_time = self.completions.insert(section, index);
        log::info!("session: completed {} #{} (first time: {})", section, index, first_time);

        self.events.push(TraceEvent::ItemCompleted {
            section,
            index,
            first_time,
        });
        self.sounds.push(SoundCue::Success);
        self.celebrating = true;
        self.scheduler
            .reschedule(self.config.celebration_duration, TimedAction::HideCelebration);
        self.scheduler.reschedule(
            self.config.advance_delay,
            TimedAction::AdvanceItem { section, index },
        );
        self.show_prompt(Prompt::Amazing);
        true
    }

    // -- Input --

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.handle_input(InputEvent::Begin { x, y });
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.handle_input(InputEvent::Move { x, y });
    }

    pub fn pointer_up(&mut self, x: f32, y: f32) {
        self.handle_input(InputEvent::End { x, y });
    }

    /// Feed one surface-space input phase through the matcher and state machine.
    pub fn handle_input(&mut self, event: InputEvent) {
        let point = self.area().to_normalized(event.position());
        let step = match event {
            InputEvent::Begin { .. } => {
                let step = self
                    .progress
                    .begin(&self.strokes, point, self.config.start_threshold);
                if let ProgressStep::Hit(hit) = step {
                    self.scheduler.cancel(&TimedAction::ClearTrail);
                    self.events.push(TraceEvent::StrokeStarted { stroke: hit.stroke });
                }
                // Landing on the start point is silent.
                self.apply_step(step, false);
                return;
            }
            InputEvent::Move { .. } => {
                self.progress
                    .advance(&self.strokes, point, self.config.waypoint_threshold)
            }
            InputEvent::End { .. } => self.progress.end(),
        };
        self.apply_step(step, true);
    }

    /// Test a surface point against the current target without changing state.
    /// The start threshold applies unless a stroke is being traced.
    pub fn match_input(&self, x: f32, y: f32) -> Option<MatchResult> {
        let (_, _, target) = self.progress.target(&self.strokes)?;
        let threshold = if self.progress.is_drawing() {
            self.config.waypoint_threshold
        } else {
            self.config.start_threshold
        };
        Some(match_point(&self.area(), Vec2::new(x, y), target, threshold))
    }

    fn apply_step(&mut self, step: ProgressStep, point_cue: bool) {
        match step {
            ProgressStep::Ignored | ProgressStep::Missed { .. } => {}
            ProgressStep::StartMissed { stroke, distance } => {
                log::debug!("session: start of stroke {} missed by {:.3}", stroke, distance);
                self.events.push(TraceEvent::StartMissed { stroke, distance });
                self.show_prompt(Prompt::StartAtFirstPoint);
            }
            ProgressStep::Hit(hit) => {
                log::debug!("session: stroke {} waypoint {} hit", hit.stroke, hit.waypoint);
                self.events.push(TraceEvent::WaypointHit {
                    stroke: hit.stroke,
                    waypoint: hit.waypoint,
                });
                if point_cue {
                    self.sounds.push(SoundCue::Point {
                        step: (hit.waypoint + 1) as u32,
                    });
                }
                if !hit.stroke_done {
                    return;
                }

                log::info!("session: stroke {} complete", hit.stroke);
                self.events.push(TraceEvent::StrokeCompleted { stroke: hit.stroke });
                self.sounds.push(SoundCue::Stroke);
                if hit.item_done {
                    self.evaluate_completion();
                } else {
                    self.show_prompt(Prompt::NextStroke { number: hit.stroke + 2 });
                    self.scheduler
                        .reschedule(self.config.stroke_clear_delay, TimedAction::ClearTrail);
                }
            }
            ProgressStep::Abandoned { stroke, reached } => {
                log::debug!("session: stroke {} abandoned after {} waypoints", stroke, reached);
                self.events.push(TraceEvent::StrokeFailed { stroke, reached });
                self.show_prompt(Prompt::KeepGoing);
            }
        }
    }

    // -- Time & layout --

    /// Advance session time by `dt` seconds and run any timers that came due.
    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt as f64;
        self.scheduler.advance(dt);
        // One at a time: a handler may cancel actions that are also due.
        while let Some(action) = self.scheduler.pop_due() {
            match action {
                TimedAction::ClearTrail => self.progress.clear_trail(),
                TimedAction::HideCelebration => self.celebrating = false,
                TimedAction::AdvanceItem { section, index } => {
                    if self.completion_handled && section == self.section && index == self.index {
                        self.next();
                    }
                }
                TimedAction::HidePrompt => self.prompt = None,
                TimedAction::ShowPrompt(prompt) => self.show_prompt(prompt),
            }
        }
    }

    /// The surface was resized. Trace progress is untouched; the drawing area
    /// follows on the next query.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.surface = Vec2::new(width.max(0.0), height.max(0.0));
        log::debug!("session: surface {}x{}", self.surface.x, self.surface.y);
    }

    /// Drawing area for the current surface size and item. Never cached.
    pub fn area(&self) -> DrawingArea {
        let aspect = match &self.item {
            Some(item) => self.config.aspect_for(item.glyph_count(), item.is_word()),
            None => self.config.glyph_aspect,
        };
        DrawingArea::compute(self.surface.x, self.surface.y, aspect, self.config.padding)
    }

    /// Last-message-wins: replaces the visible prompt and its hide timer.
    fn show_prompt(&mut self, prompt: Prompt) {
        self.prompt = Some(prompt);
        self.scheduler.reschedule(prompt.duration(), TimedAction::HidePrompt);
    }

    /// Everything the renderer needs for this tick.
    pub fn frame(&self) -> RenderFrame {
        build_frame(
            &FrameInput {
                area: self.area(),
                strokes: &self.strokes,
                progress: &self.progress,
                elapsed_ms: self.elapsed * 1000.0,
                celebrating: self.celebrating,
                prompt: self.prompt,
            },
            &self.config,
        )
    }

    // -- Queries --

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current_item(&self) -> Option<&ContentItem> {
        self.item.as_ref()
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn progress(&self) -> &TraceProgress {
        &self.progress
    }

    /// `Completed` once the item has been accepted, including a vacuous check
    /// of an item without strokes.
    pub fn phase(&self) -> TracePhase {
        if self.completion_handled {
            TracePhase::Completed
        } else {
            self.progress.phase()
        }
    }

    pub fn completions(&self) -> &CompletionSet {
        &self.completions
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn prompt(&self) -> Option<Prompt> {
        self.prompt
    }

    pub fn is_celebrating(&self) -> bool {
        self.celebrating
    }

    pub fn surface_size(&self) -> Vec2 {
        self.surface
    }

    /// Completed fraction of a section, 0 when it has no items.
    pub fn section_progress(&self, section: Section) -> f32 {
        let total = self.catalog.len(section);
        if total == 0 {
            return 0.0;
        }
        self.completions.count(section) as f32 / total as f32
    }

    pub fn picker(&self) -> Vec<PickerEntry> {
        self.catalog
            .items(self.section)
            .iter()
            .enumerate()
            .map(|(index, label)| PickerEntry {
                index,
                label: label.clone(),
                active: index == self.index,
                completed: self.completions.contains(self.section, index),
            })
            .collect()
    }

    /// Take the events emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<TraceEvent> {
        std::mem::take(&mut self.events)
    }

    /// Take the sound cues emitted since the last drain.
    pub fn take_sounds(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.sounds)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Catalog::builtin(), SessionConfig::default())
    }
}
