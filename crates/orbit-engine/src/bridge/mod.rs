pub mod headless;
pub mod offsets;

pub use headless::{StaticGeometry, ManualClock, ManualTimers};
pub use offsets::OffsetBuffer;
