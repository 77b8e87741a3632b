//! Environment contracts the engine is driven through.
//!
//! The engine never touches a rendering environment directly. A host (the
//! `orbit-web` bridge, or a test) supplies layout reads, offset writes and a
//! frame scheduler through these traits.

use glam::Vec2;

use super::types::MarkerId;

/// Width and height of the bounding container, in layout units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContainerSize {
    pub width: f32,
    pub height: f32,
}

impl ContainerSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Declared edge offsets of a marker. `None` means `auto` or unreadable.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    pub top: Option<f32>,
    pub right: Option<f32>,
    pub bottom: Option<f32>,
    pub left: Option<f32>,
}

impl Insets {
    pub fn top_left(top: f32, left: f32) -> Self {
        Self {
            top: Some(top),
            left: Some(left),
            ..Self::default()
        }
    }

    pub fn bottom_right(bottom: f32, right: f32) -> Self {
        Self {
            bottom: Some(bottom),
            right: Some(right),
            ..Self::default()
        }
    }
}

/// Everything the engine reads about one marker at start.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerGeometry {
    /// Rendered width (`None` when unreadable).
    pub width: Option<f32>,
    /// Rendered height (`None` when unreadable).
    pub height: Option<f32>,
    /// Individually declared edge offsets.
    pub insets: Insets,
    /// Raw `inset` shorthand value, if any.
    pub inset_shorthand: Option<String>,
    /// Current on-screen offset relative to the container's on-screen origin.
    pub screen_offset: Vec2,
}

/// Supplies container and marker geometry.
pub trait GeometryProvider {
    /// Current container size, or `None` if the container is absent.
    fn container(&self) -> Option<ContainerSize>;

    /// Geometry of every marker, in encounter order.
    fn markers(&self) -> Vec<MarkerGeometry>;
}

/// Receives marker positions.
pub trait MarkerSink {
    /// Switch the marker to offset-based positioning. Called once per start.
    fn prepare(&mut self, _marker: MarkerId) {}

    /// Place the marker at `(x, y)` from the container's top-left corner.
    fn set_offset(&mut self, marker: MarkerId, x: f32, y: f32);
}

/// Opaque handle to a scheduled frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHandle(pub i32);

/// The per-refresh callback scheduler.
///
/// `request_frame` arranges for the host to call `OrbitEngine::frame` once,
/// on a later turn of the event loop.
pub trait FrameClock {
    /// Schedule one callback. Returns `None` if scheduling failed.
    fn request_frame(&mut self) -> Option<FrameHandle>;

    /// Cancel a callback that has not fired yet.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Opaque handle to a scheduled one-shot timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerHandle(pub i32);

/// One-shot timer scheduler (`setTimeout` / `clearTimeout` in the browser).
///
/// Every timer calls back into the same host entry point, which forwards to
/// `ResizeDebounce::timer_fired`.
pub trait TimerQueue {
    /// Schedule a callback after `delay_ms`. Returns `None` if scheduling failed.
    fn set_timeout(&mut self, delay_ms: f64) -> Option<TimerHandle>;

    /// Cancel a timer that has not fired yet.
    fn clear_timeout(&mut self, handle: TimerHandle);
}
