//! Browser bindings
//!
//! A thin wasm-bindgen wrapper so a JS renderer can drive a `Session`
//! from its animation frame callback and read back JSON snapshots.

use glam::Vec3;
use wasm_bindgen::prelude::*;

use crate::session::Session;

#[wasm_bindgen]
pub struct WebSession {
    session: Session,
}

#[wasm_bindgen]
impl WebSession {
    /// Default island, seeded from the wall clock
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebSession {
        let seed = js_sys::Date::now() as u64;
        log::info!("Session created with seed: {}", seed);
        WebSession {
            session: Session::new(seed),
        }
    }

    /// Explicit seed plus optional JSON tuning and setup overrides
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(
        seed: f64,
        tuning: Option<String>,
        setup: Option<String>,
    ) -> Result<WebSession, JsValue> {
        let session = Session::from_json(seed as u64, tuning.as_deref(), setup.as_deref())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WebSession { session })
    }

    pub fn start(&mut self) {
        self.session.start();
    }

    pub fn restart(&mut self) {
        self.session.restart();
    }

    /// Advance by a frame delta in milliseconds; returns ticks run
    pub fn frame(&mut self, dt_ms: f64) -> u32 {
        self.session.advance((dt_ms / 1000.0) as f32)
    }

    #[wasm_bindgen(js_name = keyDown)]
    pub fn key_down(&mut self, code: &str) -> bool {
        super::key_down(self.session.input_mut(), code)
    }

    #[wasm_bindgen(js_name = keyUp)]
    pub fn key_up(&mut self, code: &str) -> bool {
        super::key_up(self.session.input_mut(), code)
    }

    #[wasm_bindgen(js_name = mouseButton)]
    pub fn mouse_button(&mut self, button: i16, pressed: bool) {
        super::mouse_button(self.session.input_mut(), button, pressed);
    }

    /// Camera forward vector from the host
    #[wasm_bindgen(js_name = setAim)]
    pub fn set_aim(&mut self, x: f32, y: f32, z: f32) -> bool {
        super::set_aim(self.session.input_mut(), Vec3::new(x, y, z))
    }

    /// Window blur or tab hidden
    #[wasm_bindgen(js_name = releaseAll)]
    pub fn release_all(&mut self) {
        super::release_all(self.session.input_mut());
    }

    #[wasm_bindgen(js_name = snapshot)]
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        self.session
            .snapshot_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for WebSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Module start hook: panic messages and `log` output go to the browser console
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_ok() {
        log::info!("Island Royale core loaded");
    }
}
