pub mod camera;
pub mod config;
pub mod constants;
pub mod ease;
pub mod hero_gate;
pub mod particles;
pub mod reveal;
pub mod tilt;

pub use camera::*;
pub use config::*;
pub use constants::*;
pub use hero_gate::*;
pub use particles::*;
pub use reveal::*;
pub use tilt::*;

// Shaders bundled as string constants
pub static PARTICLES_WGSL: &str = include_str!("../../shaders/particles.wgsl");
