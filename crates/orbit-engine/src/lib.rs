pub mod api;
pub mod core;
pub mod layout;
pub mod bridge;

// Re-export key types at crate root for convenience
pub use api::config::EngineConfig;
pub use api::env::{
    ContainerSize, Insets, MarkerGeometry,
    GeometryProvider, MarkerSink, FrameClock, FrameHandle,
    TimerQueue, TimerHandle,
};
pub use api::types::{MarkerId, MarkerOffset, FrameReport};
pub use crate::core::engine::OrbitEngine;
pub use crate::core::particle::Particle;
pub use crate::core::time::ResizeDebounce;
pub use bridge::{OffsetBuffer, StaticGeometry, ManualClock, ManualTimers};
pub use layout::{parse_length, parse_inset_shorthand};
