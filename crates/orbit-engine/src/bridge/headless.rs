//! Environment adapters for hosts without a DOM: fixed geometry, and a
//! frame clock and timer queue that only record what was asked of them.

use crate::api::env::{
    ContainerSize, FrameClock, FrameHandle, GeometryProvider, MarkerGeometry, TimerHandle, TimerQueue,
};

/// Geometry provider backed by plain values the host can edit between frames.
#[derive(Debug, Clone, Default)]
pub struct StaticGeometry {
    pub container: Option<ContainerSize>,
    pub markers: Vec<MarkerGeometry>,
}

impl StaticGeometry {
    pub fn new(container: ContainerSize) -> Self {
        Self {
            container: Some(container),
            markers: Vec::new(),
        }
    }

    pub fn with_marker(mut self, marker: MarkerGeometry) -> Self {
        self.markers.push(marker);
        self
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.container = Some(ContainerSize::new(width, height));
    }
}

impl GeometryProvider for StaticGeometry {
    fn container(&self) -> Option<ContainerSize> {
        self.container
    }

    fn markers(&self) -> Vec<MarkerGeometry> {
        self.markers.clone()
    }
}

/// Frame clock for hosts that call `frame()` themselves.
/// Hands out sequential handles and remembers which are still outstanding.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    next_handle: i32,
    /// Handles requested and neither fired nor cancelled.
    pending: Vec<FrameHandle>,
    /// Handles cancelled by the engine, in order.
    cancelled: Vec<FrameHandle>,
    /// Total `request_frame` calls.
    requests: u32,
    /// When set, `request_frame` refuses to schedule.
    pub refuse: bool,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the oldest outstanding handle, as if its callback fired.
    pub fn fire(&mut self) -> Option<FrameHandle> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0))
        }
    }

    pub fn pending(&self) -> &[FrameHandle] {
        &self.pending
    }

    pub fn cancelled(&self) -> &[FrameHandle] {
        &self.cancelled
    }

    pub fn requests(&self) -> u32 {
        self.requests
    }
}

impl FrameClock for ManualClock {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        self.requests += 1;
        if self.refuse {
            return None;
        }
        self.next_handle += 1;
        let handle = FrameHandle(self.next_handle);
        self.pending.push(handle);
        Some(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.retain(|h| *h != handle);
        self.cancelled.push(handle);
    }
}

/// Timer queue for hosts that fire timers themselves.
/// Remembers each outstanding timer with the delay it was armed for.
#[derive(Debug, Clone, Default)]
pub struct ManualTimers {
    next_handle: i32,
    pending: Vec<(TimerHandle, f64)>,
    cleared: Vec<TimerHandle>,
}

impl ManualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the oldest outstanding timer, as if it fired.
    pub fn fire(&mut self) -> Option<TimerHandle> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0).0)
        }
    }

    pub fn pending(&self) -> &[(TimerHandle, f64)] {
        &self.pending
    }

    pub fn cleared(&self) -> &[TimerHandle] {
        &self.cleared
    }
}

impl TimerQueue for ManualTimers {
    fn set_timeout(&mut self, delay_ms: f64) -> Option<TimerHandle> {
        self.next_handle += 1;
        let handle = TimerHandle(self.next_handle);
        self.pending.push((handle, delay_ms));
        Some(handle)
    }

    fn clear_timeout(&mut self, handle: TimerHandle) {
        self.pending.retain(|(h, _)| *h != handle);
        self.cleared.push(handle);
    }
}
