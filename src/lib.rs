//! Bounce Box - particles drifting in a bounded surface
//!
//! Core modules:
//! - `sim`: Deterministic simulation (particle state, physics step, frame loop)
//! - `renderer`: Canvas capability and its WebGPU implementation
//! - `config`: Surface/render configuration
//! - `error`: Crate error type

pub mod config;
pub mod error;
pub mod renderer;
pub mod sim;

pub use config::{RenderStyle, SimConfig};
pub use error::{Error, Result};

/// Demo configuration constants
pub mod consts {
    /// Default surface dimensions (pixels)
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 600.0;

    /// Default particle count
    pub const PARTICLE_COUNT: usize = 10;
    /// Radius of a rendered particle
    pub const PARTICLE_RADIUS: f32 = 5.0;
    /// Seeded velocity components are uniform in [-PARTICLE_MAX_SPEED, PARTICLE_MAX_SPEED)
    pub const PARTICLE_MAX_SPEED: f32 = 1.0;

    /// Triangle-fan resolution for rendered circles
    pub const CIRCLE_SEGMENTS: u32 = 32;
}
