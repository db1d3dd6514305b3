use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use trace_engine::SessionConfig;

pub mod runner;

pub use runner::TracerRunner;

thread_local! {
    static RUNNER: RefCell<Option<TracerRunner>> = RefCell::new(None);
}

/// Run `f` against the runner. Calls made before `tracer_init` do nothing.
fn with_runner<R>(f: impl FnOnce(&mut TracerRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| cell.borrow_mut().as_mut().map(f))
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Create the session. `config_json` may override any subset of the defaults.
#[wasm_bindgen]
pub fn tracer_init(config_json: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = match config_json.as_deref() {
        Some(json) => SessionConfig::from_json(json).map_err(to_js)?,
        None => SessionConfig::default(),
    };
    let runner = TracerRunner::new(config);

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("trace-web: initialized");
    Ok(())
}

#[wasm_bindgen]
pub fn tracer_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

#[wasm_bindgen]
pub fn tracer_resize(width: f32, height: f32) {
    with_runner(|r| r.resize(width, height));
}

/// Client box of the drawing surface, so pointer input can be given in client pixels.
#[wasm_bindgen]
pub fn tracer_set_client_rect(left: f32, top: f32, width: f32, height: f32) {
    with_runner(|r| r.set_client_rect(left, top, width, height));
}

// ---- Input ----

#[wasm_bindgen]
pub fn tracer_pointer_down(x: f32, y: f32) {
    with_runner(|r| r.pointer_down(x, y));
}

#[wasm_bindgen]
pub fn tracer_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.pointer_move(x, y));
}

#[wasm_bindgen]
pub fn tracer_pointer_up(x: f32, y: f32) {
    with_runner(|r| r.pointer_up(x, y));
}

// ---- Selection & actions ----

#[wasm_bindgen]
pub fn tracer_select_section(name: &str) -> Result<(), JsValue> {
    match with_runner(|r| r.select_section(name)) {
        Some(Err(e)) => {
            log::warn!("trace-web: select_section({}) rejected: {}", name, e);
            Err(to_js(e))
        }
        _ => Ok(()),
    }
}

#[wasm_bindgen]
pub fn tracer_select_item(index: usize) -> Result<(), JsValue> {
    match with_runner(|r| r.select_item(index)) {
        Some(Err(e)) => {
            log::warn!("trace-web: select_item({}) rejected: {}", index, e);
            Err(to_js(e))
        }
        _ => Ok(()),
    }
}

#[wasm_bindgen]
pub fn tracer_next() {
    with_runner(|r| r.next());
}

#[wasm_bindgen]
pub fn tracer_previous() {
    with_runner(|r| r.previous());
}

#[wasm_bindgen]
pub fn tracer_clear() {
    with_runner(|r| r.clear());
}

#[wasm_bindgen]
pub fn tracer_check() -> bool {
    with_runner(|r| r.check()).unwrap_or(false)
}

#[wasm_bindgen]
pub fn tracer_hint() {
    with_runner(|r| r.hint());
}

#[wasm_bindgen]
pub fn tracer_load_catalog(json: &str) -> Result<(), JsValue> {
    match with_runner(|r| r.load_catalog(json)) {
        Some(Err(e)) => {
            log::warn!("trace-web: catalog rejected: {}", e);
            Err(to_js(e))
        }
        _ => Ok(()),
    }
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn tracer_frame_json() -> String {
    with_runner(|r| r.frame_json().to_string()).unwrap_or_else(|| "null".to_string())
}

#[wasm_bindgen]
pub fn tracer_events_json() -> String {
    with_runner(|r| r.events_json().to_string()).unwrap_or_else(|| "[]".to_string())
}

#[wasm_bindgen]
pub fn tracer_sounds_json() -> String {
    with_runner(|r| r.sounds_json().to_string()).unwrap_or_else(|| "[]".to_string())
}

#[wasm_bindgen]
pub fn tracer_picker_json() -> String {
    with_runner(|r| r.picker_json()).unwrap_or_else(|| "[]".to_string())
}

#[wasm_bindgen]
pub fn tracer_section_progress() -> f32 {
    with_runner(|r| r.section_progress()).unwrap_or(0.0)
}
