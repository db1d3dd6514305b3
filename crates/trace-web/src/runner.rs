use glam::Vec2;
use serde::Serialize;
use trace_engine::{
    Catalog, CatalogManifest, ClientRect, InputEvent, Section, Session, SessionConfig, SoundCue,
    TraceError, TraceEvent,
};

/// Owns the tracing session and the JSON buffers handed to JavaScript.
///
/// `lib.rs` keeps one runner in a `thread_local!` and exports free functions
/// that forward here. No browser types in here.
pub struct TracerRunner {
    session: Session,
    /// Surface element box in client pixels. Without it input is taken as
    /// surface pixels already.
    client_rect: Option<ClientRect>,
    /// Events and sounds collected since the last tick.
    events: Vec<TraceEvent>,
    sounds: Vec<SoundCue>,
    frame_json: String,
    events_json: String,
    sounds_json: String,
}

impl TracerRunner {
    pub fn new(config: SessionConfig) -> Self {
        Self::with_catalog(Catalog::builtin(), config)
    }

    pub fn with_catalog(catalog: Catalog, config: SessionConfig) -> Self {
        Self {
            session: Session::new(catalog, config),
            client_rect: None,
            events: Vec::with_capacity(32),
            sounds: Vec::with_capacity(32),
            frame_json: String::from("null"),
            events_json: String::from("[]"),
            sounds_json: String::from("[]"),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run one frame: advance timers, then rebuild the frame and the event and
    /// sound buffers for this tick.
    pub fn tick(&mut self, dt: f32) {
        self.events.clear();
        self.sounds.clear();

        self.session.tick(dt);

        self.events.extend(self.session.drain_events());
        self.sounds.extend(self.session.take_sounds());
        self.events_json = to_json(&self.events, "[]");
        self.sounds_json = to_json(&self.sounds, "[]");
        self.frame_json = to_json(&self.session.frame(), "null");
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.session.resize(width, height);
    }

    pub fn set_client_rect(&mut self, left: f32, top: f32, width: f32, height: f32) {
        self.client_rect = Some(ClientRect::new(left, top, width, height));
    }

    fn to_surface(&self, x: f32, y: f32) -> Vec2 {
        let p = Vec2::new(x, y);
        match &self.client_rect {
            Some(rect) => rect.to_surface(p, self.session.surface_size()),
            None => p,
        }
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        let p = self.to_surface(x, y);
        self.session.handle_input(InputEvent::Begin { x: p.x, y: p.y });
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        let p = self.to_surface(x, y);
        self.session.handle_input(InputEvent::Move { x: p.x, y: p.y });
    }

    pub fn pointer_up(&mut self, x: f32, y: f32) {
        let p = self.to_surface(x, y);
        self.session.handle_input(InputEvent::End { x: p.x, y: p.y });
    }

    pub fn select_section(&mut self, name: &str) -> Result<(), TraceError> {
        let section: Section = name.parse()?;
        self.session.select_section(section)
    }

    pub fn select_item(&mut self, index: usize) -> Result<(), TraceError> {
        self.session.select_item(index)
    }

    pub fn next(&mut self) {
        self.session.next();
    }

    pub fn previous(&mut self) {
        self.session.previous();
    }

    pub fn clear(&mut self) {
        self.session.clear();
    }

    pub fn check(&mut self) -> bool {
        self.session.check()
    }

    pub fn hint(&mut self) {
        self.session.hint();
    }

    /// Merge a catalog manifest (JSON) into the session's catalog.
    pub fn load_catalog(&mut self, json: &str) -> Result<(), TraceError> {
        let manifest = CatalogManifest::from_json(json)?;
        self.session.extend_catalog(&manifest)
    }

    pub fn section_progress(&self) -> f32 {
        self.session.section_progress(self.session.section())
    }

    pub fn picker_json(&self) -> String {
        to_json(&self.session.picker(), "[]")
    }

    pub fn frame_json(&self) -> &str {
        &self.frame_json
    }

    pub fn events_json(&self) -> &str {
        &self.events_json
    }

    pub fn sounds_json(&self) -> &str {
        &self.sounds_json
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T, fallback: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        log::warn!("trace-web: failed to serialize frame data: {}", e);
        fallback.to_string()
    })
}
