pub mod length;
pub mod placement;

pub use length::{parse_length, parse_inset_shorthand};
pub use placement::{marker_size, initial_position, clamp_to_container};
