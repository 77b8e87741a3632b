use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use orbit_engine::{FrameClock, FrameHandle, TimerHandle, TimerQueue};

/// `requestAnimationFrame`-backed frame clock.
///
/// Holds one long-lived callback; every request schedules that same closure.
pub struct RafClock {
    window: Window,
    callback: Closure<dyn FnMut(f64)>,
}

impl RafClock {
    pub fn new(window: Window, on_frame: impl FnMut(f64) + 'static) -> Self {
        Self {
            window,
            callback: Closure::new(on_frame),
        }
    }
}

impl FrameClock for RafClock {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        self.window
            .request_animation_frame(self.callback.as_ref().unchecked_ref())
            .ok()
            .map(FrameHandle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let _ = self.window.cancel_animation_frame(handle.0);
    }
}

/// `setTimeout`-backed timer queue. Every timer runs the same callback.
pub struct DomTimers {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl DomTimers {
    pub fn new(window: Window, on_timeout: impl FnMut() + 'static) -> Self {
        Self {
            window,
            callback: Closure::new(on_timeout),
        }
    }
}

impl TimerQueue for DomTimers {
    fn set_timeout(&mut self, delay_ms: f64) -> Option<TimerHandle> {
        self.window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                self.callback.as_ref().unchecked_ref(),
                delay_ms.ceil() as i32,
            )
            .ok()
            .map(TimerHandle)
    }

    fn clear_timeout(&mut self, handle: TimerHandle) {
        self.window.clear_timeout_with_handle(handle.0);
    }
}
