//! Deterministic simulation module
//!
//! All temporal/state behavior lives here. This module must stay pure and
//! deterministic:
//! - Unit timestep only
//! - Seeded RNG only
//! - No GPU or platform dependencies (drawing goes through the abstract
//!   canvas capability, scheduling through the `FrameScheduler` trait)

pub mod frame;
pub mod state;
pub mod step;

pub use frame::{FrameLoop, FrameScheduler, Phase};
pub use state::{Particle, RngState, SimulationState};
pub use step::step;
