//! Optional debug drawing.  Has no effect on navigation decisions.

use nav_core::WorldPos;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Color {
    /// Fresh path.
    Orange,
    /// Incomplete path.
    Red,
    /// Fatigued agent.
    Aqua,
    /// Stuck agent.
    Magenta,
}

pub trait Visualizer {
    fn circle(&mut self, pos: WorldPos, color: Color, opacity: f32);
    fn line(&mut self, from: WorldPos, to: WorldPos, color: Color);
}

/// Draws nothing.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopVisualizer;

impl Visualizer for NoopVisualizer {
    #[inline]
    fn circle(&mut self, _pos: WorldPos, _color: Color, _opacity: f32) {}
    #[inline]
    fn line(&mut self, _from: WorldPos, _to: WorldPos, _color: Color) {}
}
