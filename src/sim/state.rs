//! Particle state and seeding
//!
//! Everything the frame loop advances lives here.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::SimConfig;
use crate::consts::PARTICLE_MAX_SPEED;
use crate::error::Result;

/// A point particle: position and per-step displacement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    /// Bumped on every reseed so each reset yields a fresh layout while the
    /// whole run stays replayable from `seed`
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::new(self.seed, self.stream)
    }
}

/// Complete simulation state (deterministic, serializable)
///
/// Surface bounds are fixed at construction; the particle collection is
/// recreated wholesale by [`reseed`](Self::reseed), never resized piecemeal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationState {
    /// Particle collection; order is stable but carries no meaning
    pub particles: Vec<Particle>,
    /// True only while a frame callback chain is active
    pub running: bool,
    /// RNG state
    pub rng_state: RngState,
    width: f32,
    height: f32,
    particle_count: usize,
}

impl SimulationState {
    /// Create a seeded state for the configured surface.
    ///
    /// Errors with [`crate::Error::InvalidSurfaceBounds`] when the config's
    /// bounds are zero, negative, or non-finite.
    pub fn new(config: &SimConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        let mut state = Self {
            particles: Vec::with_capacity(config.particle_count),
            running: false,
            rng_state: RngState::new(seed),
            width: config.width,
            height: config.height,
            particle_count: config.particle_count,
        };
        state.seed_particles();
        Ok(state)
    }

    /// Surface width (immutable after construction)
    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Surface height (immutable after construction)
    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Configured particle count
    #[inline]
    pub fn particle_count(&self) -> usize {
        self.particle_count
    }

    /// Populate the collection from the current RNG state: positions uniform
    /// over [0, width) x [0, height), velocity components uniform over
    /// [-PARTICLE_MAX_SPEED, PARTICLE_MAX_SPEED).
    fn seed_particles(&mut self) {
        let mut rng = self.rng_state.to_rng();
        self.particles = (0..self.particle_count)
            .map(|_| Particle {
                pos: Vec2::new(
                    rng.random::<f32>() * self.width,
                    rng.random::<f32>() * self.height,
                ),
                vel: Vec2::new(
                    rng.random_range(-PARTICLE_MAX_SPEED..PARTICLE_MAX_SPEED),
                    rng.random_range(-PARTICLE_MAX_SPEED..PARTICLE_MAX_SPEED),
                ),
            })
            .collect();
    }

    /// Discard the collection and re-seed it, advancing the RNG stream.
    ///
    /// Shared by reset and construction: construction is stream 0, the k-th
    /// reset is stream k.
    pub fn reseed(&mut self) {
        self.rng_state.stream = self.rng_state.stream.wrapping_add(1);
        self.seed_particles();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PARTICLE_COUNT;

    fn in_bounds(state: &SimulationState) -> bool {
        state.particles.iter().all(|p| {
            (0.0..state.width()).contains(&p.pos.x) && (0.0..state.height()).contains(&p.pos.y)
        })
    }

    #[test]
    fn seeds_configured_count_within_bounds() {
        let state = SimulationState::new(&SimConfig::default(), 12345).unwrap();
        assert_eq!(state.particles.len(), PARTICLE_COUNT);
        assert!(!state.running);
        assert!(in_bounds(&state));
    }

    #[test]
    fn seeded_velocities_stay_in_range() {
        let state = SimulationState::new(&SimConfig::default(), 777).unwrap();
        for p in &state.particles {
            assert!((-PARTICLE_MAX_SPEED..PARTICLE_MAX_SPEED).contains(&p.vel.x));
            assert!((-PARTICLE_MAX_SPEED..PARTICLE_MAX_SPEED).contains(&p.vel.y));
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let a = SimulationState::new(&SimConfig::default(), 99999).unwrap();
        let b = SimulationState::new(&SimConfig::default(), 99999).unwrap();
        assert_eq!(a.particles, b.particles);
    }

    #[test]
    fn reseed_changes_layout_but_stays_in_bounds() {
        let mut state = SimulationState::new(&SimConfig::default(), 4242).unwrap();
        let before = state.particles.clone();

        state.reseed();
        assert_eq!(state.particles.len(), before.len());
        assert_ne!(state.particles, before);
        assert!(in_bounds(&state));
        assert_eq!(state.rng_state.stream, 1);
    }

    #[test]
    fn reseed_is_reproducible_per_stream() {
        let mut a = SimulationState::new(&SimConfig::default(), 31337).unwrap();
        let mut b = SimulationState::new(&SimConfig::default(), 31337).unwrap();
        a.reseed();
        b.reseed();
        assert_eq!(a.particles, b.particles);
    }

    #[test]
    fn construction_rejects_bad_bounds() {
        assert!(SimulationState::new(&SimConfig::with_bounds(0.0, 600.0), 1).is_err());
        assert!(SimulationState::new(&SimConfig::with_bounds(800.0, f32::NAN), 1).is_err());
    }
}
