//! Rendering module
//!
//! `canvas` defines the abstract 2D capability the loop draws through; the
//! rest is the WebGPU implementation behind it.

pub mod canvas;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use canvas::{Canvas, Region, draw_scene};
pub use pipeline::RenderState;
