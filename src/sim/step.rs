//! Per-frame physics step
//!
//! Euler integration with elastic axis-aligned boundary reflection.

use super::state::SimulationState;

/// Advance every particle by one unit timestep.
///
/// Positions update first; reflection is then evaluated independently per
/// axis by negating the velocity component. The out-of-range position is
/// left uncorrected - the flipped velocity brings the particle back inside
/// on the next step, so it may render outside the surface for one frame.
/// A zero velocity component never reflects on its axis.
pub fn step(state: &mut SimulationState) {
    let width = state.width();
    let height = state.height();

    for p in &mut state.particles {
        p.pos += p.vel;

        // Bounce
        if p.pos.x < 0.0 || p.pos.x > width {
            p.vel.x = -p.vel.x;
        }
        if p.pos.y < 0.0 || p.pos.y > height {
            p.vel.y = -p.vel.y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::sim::state::{Particle, SimulationState};
    use glam::Vec2;
    use proptest::prelude::*;

    fn single_particle_state(pos: Vec2, vel: Vec2) -> SimulationState {
        let mut config = SimConfig::with_bounds(100.0, 100.0);
        config.particle_count = 1;
        let mut state = SimulationState::new(&config, 7).unwrap();
        state.particles[0] = Particle { pos, vel };
        state
    }

    #[test]
    fn reflects_off_right_edge_without_clamping() {
        let mut state = single_particle_state(Vec2::new(99.0, 50.0), Vec2::new(2.0, 0.0));

        step(&mut state);
        let p = state.particles[0];
        assert_eq!(p.pos, Vec2::new(101.0, 50.0)); // outside for one frame
        assert_eq!(p.vel, Vec2::new(-2.0, 0.0));

        step(&mut state);
        let p = state.particles[0];
        assert_eq!(p.pos, Vec2::new(99.0, 50.0));
        assert_eq!(p.vel, Vec2::new(-2.0, 0.0)); // back in range, no second flip
    }

    #[test]
    fn axes_reflect_independently() {
        let mut state = single_particle_state(Vec2::new(99.0, 0.5), Vec2::new(2.0, -1.0));

        step(&mut state);
        let p = state.particles[0];
        assert_eq!(p.pos, Vec2::new(101.0, -0.5));
        assert_eq!(p.vel, Vec2::new(-2.0, 1.0)); // both axes crossed, both flip
    }

    #[test]
    fn reflects_off_left_edge() {
        let mut state = single_particle_state(Vec2::new(0.5, 50.0), Vec2::new(-1.0, 0.25));

        step(&mut state);
        let p = state.particles[0];
        assert_eq!(p.pos, Vec2::new(-0.5, 50.25));
        assert_eq!(p.vel, Vec2::new(1.0, 0.25));
    }

    #[test]
    fn zero_velocity_component_never_reflects() {
        // Parked past the bottom edge with vy == 0: stays out on that axis
        let mut state = single_particle_state(Vec2::new(50.0, 120.0), Vec2::new(1.0, 0.0));

        for _ in 0..3 {
            step(&mut state);
        }
        let p = state.particles[0];
        assert_eq!(p.pos.y, 120.0);
        assert_eq!(p.vel.y, 0.0);
        assert_eq!(p.pos.x, 53.0);
    }

    #[test]
    fn step_is_deterministic_from_a_snapshot() {
        let state = SimulationState::new(&SimConfig::default(), 2024).unwrap();
        let mut a = state.clone();
        let mut b = state.clone();

        for _ in 0..100 {
            step(&mut a);
            step(&mut b);
        }
        assert_eq!(a.particles, b.particles);
    }

    proptest! {
        #[test]
        fn reflection_matches_post_update_position(
            x in 0.0f32..100.0,
            y in 0.0f32..100.0,
            vx in -5.0f32..5.0,
            vy in -5.0f32..5.0,
        ) {
            let mut state = single_particle_state(Vec2::new(x, y), Vec2::new(vx, vy));
            step(&mut state);

            let p = state.particles[0];
            let moved = Vec2::new(x + vx, y + vy);
            prop_assert_eq!(p.pos, moved);

            let want_vx = if moved.x < 0.0 || moved.x > 100.0 { -vx } else { vx };
            let want_vy = if moved.y < 0.0 || moved.y > 100.0 { -vy } else { vy };
            prop_assert_eq!(p.vel, Vec2::new(want_vx, want_vy));
        }
    }
}
