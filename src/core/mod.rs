pub mod color;
pub mod constants;
pub mod counter;
pub mod scene;
pub mod scroll;
pub mod slider;

pub use scene::{Particle, Scene};
