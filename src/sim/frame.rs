//! Frame loop state machine
//!
//! Ties the physics step and the render adapter to the host's
//! frame-scheduling primitive. The loop never talks to a concrete
//! scheduler: the host hands in a [`FrameScheduler`] and fires
//! [`FrameLoop::frame`] once per granted callback, which makes the
//! stop-while-a-callback-is-queued race explicit and testable.

use crate::config::RenderStyle;
use crate::renderer::canvas::{Canvas, draw_scene};

use super::state::SimulationState;
use super::step::step;

/// Loop phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No callback scheduled; the initial and terminal state
    Idle,
    /// Exactly one frame callback scheduled or executing
    Running,
}

/// Host frame-scheduling hook.
///
/// On web this is `requestAnimationFrame`; tests supply a recording double.
/// The loop issues exactly one request per live iteration and none from a
/// no-op tick.
pub trait FrameScheduler {
    /// Ask the host to fire [`FrameLoop::frame`] once, after the current
    /// callback returns.
    fn request_frame(&mut self);
}

/// Owns the simulation state for its lifetime and drives the
/// step -> render -> re-arm sequence.
pub struct FrameLoop {
    state: SimulationState,
    style: RenderStyle,
}

impl FrameLoop {
    pub fn new(state: SimulationState, style: RenderStyle) -> Self {
        Self { state, style }
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    pub fn phase(&self) -> Phase {
        if self.state.running {
            Phase::Running
        } else {
            Phase::Idle
        }
    }

    /// Idle -> Running: run one immediate iteration and arm the scheduler.
    ///
    /// A no-op while already Running, so a second trigger cannot spawn a
    /// second callback chain.
    pub fn start(&mut self, canvas: &mut dyn Canvas, scheduler: &mut dyn FrameScheduler) {
        if self.state.running {
            return;
        }
        self.state.running = true;
        log::info!("frame loop started");
        self.frame(canvas, scheduler);
    }

    /// The scheduled callback body.
    ///
    /// The running flag is checked at entry, not at transition time: a
    /// callback that was already queued when `stop` or `reset` landed fires
    /// once more, does no physics or render work, and does not re-arm.
    pub fn frame(&mut self, canvas: &mut dyn Canvas, scheduler: &mut dyn FrameScheduler) {
        if !self.state.running {
            return;
        }
        step(&mut self.state);
        draw_scene(canvas, &self.state, &self.style);
        scheduler.request_frame();
    }

    /// Running -> Idle (idempotent). The next queued callback no-ops.
    pub fn stop(&mut self) {
        self.state.running = false;
    }

    /// Stop, re-seed the particle collection, and render the fresh state
    /// once. Does not resume - a subsequent `start` is required.
    pub fn reset(&mut self, canvas: &mut dyn Canvas) {
        self.stop();
        self.state.reseed();
        draw_scene(canvas, &self.state, &self.style);
        log::info!("simulation reset ({} particles)", self.state.particles.len());
    }
}
