pub mod clock;
pub mod dom;
pub mod runner;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use orbit_engine::EngineConfig;
pub use runner::OrbitRunner;

thread_local! {
    static RUNNER: RefCell<Option<OrbitRunner>> = RefCell::new(None);
}

/// Run `f` against the runner. Returns `None` if `orbit_init()` has not run
/// or the runner is already borrowed further up the stack.
fn with_runner<R>(f: impl FnOnce(&mut OrbitRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| {
        let mut borrow = cell.try_borrow_mut().ok()?;
        borrow.as_mut().map(f)
    })
}

/// Set up logging, bind to the page's orbit markers and start the animation.
///
/// `config_json` may be empty or any subset of `EngineConfig` fields; a
/// malformed value is logged and replaced by the defaults. Calling this again
/// tears down the previous runner first.
#[wasm_bindgen]
pub fn orbit_init(config_json: &str) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = if config_json.trim().is_empty() {
        EngineConfig::default()
    } else {
        EngineConfig::from_json(config_json).unwrap_or_else(|err| {
            log::warn!("orbit: bad config ({}), using defaults", err);
            EngineConfig::default()
        })
    };

    let Some(window) = web_sys::window() else {
        log::warn!("orbit: no window, animation disabled");
        return;
    };

    if let Some(mut previous) = RUNNER.with(|cell| cell.borrow_mut().take()) {
        previous.detach();
    }

    let runner = OrbitRunner::new(
        window,
        config,
        |_timestamp| {
            with_runner(|r| r.engine_mut().frame());
        },
        || {
            with_runner(|r| r.notify_resize());
        },
        || {
            with_runner(|r| r.poll_resize());
        },
    );
    runner.attach();

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });

    let running = with_runner(|r| r.engine_mut().start()).unwrap_or(false);
    log::info!("orbit: initialized (running: {})", running);
}

#[wasm_bindgen]
pub fn orbit_start() -> bool {
    with_runner(|r| r.engine_mut().start()).unwrap_or(false)
}

#[wasm_bindgen]
pub fn orbit_stop() {
    with_runner(|r| r.engine_mut().stop());
}

/// Handle a resize immediately, bypassing the debounce.
#[wasm_bindgen]
pub fn orbit_handle_resize() {
    with_runner(|r| r.engine_mut().handle_resize());
}

#[wasm_bindgen]
pub fn orbit_is_running() -> bool {
    with_runner(|r| r.engine().is_running()).unwrap_or(false)
}

#[wasm_bindgen]
pub fn orbit_particle_count() -> u32 {
    with_runner(|r| r.engine().particles().len() as u32).unwrap_or(0)
}
