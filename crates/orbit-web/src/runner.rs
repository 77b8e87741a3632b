use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use orbit_engine::{EngineConfig, OrbitEngine, ResizeDebounce};

use crate::clock::{DomTimers, RafClock};
use crate::dom::{DomGeometry, DomSink, MarkerSet};

pub type WebEngine = OrbitEngine<DomGeometry, DomSink, RafClock>;

/// Owns the engine plus the window listeners that drive it.
///
/// Lives in a `thread_local!` in `lib.rs`, because the animation-frame and
/// timer callbacks need to reach it from JS.
pub struct OrbitRunner {
    window: Window,
    engine: WebEngine,
    debounce: ResizeDebounce,
    timers: DomTimers,
    on_resize: Closure<dyn FnMut()>,
}

impl OrbitRunner {
    /// Build a runner bound to the elements matched by the config selectors.
    /// `on_frame`, `on_resize` and `on_resize_timeout` are the JS-facing
    /// entry points the runner registers with the window.
    pub fn new(
        window: Window,
        mut config: EngineConfig,
        on_frame: impl FnMut(f64) + 'static,
        on_resize: impl FnMut() + 'static,
        on_resize_timeout: impl FnMut() + 'static,
    ) -> Self {
        if config.seed.is_none() {
            config.seed = Some((js_sys::Math::random() * u32::MAX as f64) as u64 + 1);
        }

        let set = match window.document() {
            Some(document) => MarkerSet::query(&document, &config.container_selector, &config.marker_selector),
            None => MarkerSet { container: None, markers: Vec::new() },
        };
        log::debug!("orbit: found {} markers", set.markers.len());

        let debounce = ResizeDebounce::new(config.resize_debounce_ms);
        let geometry = DomGeometry::new(window.clone(), set.clone());
        let sink = DomSink::new(&set);
        let clock = RafClock::new(window.clone(), on_frame);
        let timers = DomTimers::new(window.clone(), on_resize_timeout);

        Self {
            window,
            engine: OrbitEngine::new(config, geometry, sink, clock),
            debounce,
            timers,
            on_resize: Closure::new(on_resize),
        }
    }

    /// Register the window resize listener.
    pub fn attach(&self) {
        let result = self
            .window
            .add_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
        if result.is_err() {
            log::warn!("orbit: could not listen for resize");
        }
    }

    /// Remove the window resize listener, cancel any pending resize timer
    /// and halt the engine. Must run before the runner is dropped, so no
    /// queued callback outlives its closure.
    pub fn detach(&mut self) {
        self.engine.stop();
        self.debounce.disarm(&mut self.timers);
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
    }

    pub fn engine(&self) -> &WebEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut WebEngine {
        &mut self.engine
    }

    /// A window `resize` event arrived: push the deadline back and replace
    /// the pending timer.
    pub fn notify_resize(&mut self) {
        self.debounce.arm(js_sys::Date::now(), &mut self.timers);
    }

    /// The resize timer fired. Handles the resize only after a quiet period.
    pub fn poll_resize(&mut self) {
        if self.debounce.timer_fired(js_sys::Date::now(), &mut self.timers) {
            self.engine.handle_resize();
        }
    }
}
