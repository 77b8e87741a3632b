pub mod collision;
pub mod engine;
pub mod particle;
pub mod rng;
pub mod time;
