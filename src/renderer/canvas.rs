//! Abstract 2D drawing capability
//!
//! The frame loop draws through this trait and never sees a GPU type. The
//! web build backs it with [`super::pipeline::RenderState`]; tests and the
//! native headless demo use recording doubles.

use glam::Vec2;

use crate::config::RenderStyle;
use crate::sim::state::SimulationState;

/// Axis-aligned rectangle in surface coordinates (origin top-left, y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Region {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// The full surface of a simulation state
    pub fn surface(state: &SimulationState) -> Self {
        Self::new(0.0, 0.0, state.width(), state.height())
    }
}

/// The draw commands the demo needs from its host surface
pub trait Canvas {
    /// Discard previously drawn content in `region`
    fn clear(&mut self, region: Region);
    /// Fill an axis-aligned rectangle
    fn fill_rect(&mut self, region: Region, color: [f32; 4]);
    /// Fill a circle centered at `center` (surface coordinates)
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]);
}

/// Draw one frame of the scene: clear the surface, fill the background,
/// then one circle per particle at its current position.
pub fn draw_scene(canvas: &mut dyn Canvas, state: &SimulationState, style: &RenderStyle) {
    let surface = Region::surface(state);
    canvas.clear(surface);
    canvas.fill_rect(surface, style.background);

    for p in &state.particles {
        canvas.fill_circle(p.pos, style.particle_radius, style.particle);
    }
}
