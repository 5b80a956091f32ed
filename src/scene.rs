use std::time::{Duration, Instant};

use crate::geometry::{Orientation, Placement};

pub type Colour = [f32; 4];

/// How the fragment shader colours a pass.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Fill {
    Flat(Colour),
    /// Red and green follow the screen position.
    Gradient,
}

/// Batch of triangles sharing projection and fill.
#[derive(Debug, Clone)]
pub struct Pass {
    pub orientation: Orientation,
    pub fill: Fill,
    pub placements: Vec<Placement>,
}

/// Keys the demos care about, decoupled from the windowing crate.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Key {
    Escape,
    Up,
    Down,
    Other,
}

#[derive(Debug, Clone, Copy)]
pub struct FrameInfo {
    /// Time since the first frame.
    pub elapsed: Duration,
    /// Zero based index of the frame being drawn.
    pub frame: u64,
    /// Framebuffer width / height.
    pub aspect: f32,
}

pub struct FrameClock {
    started: Option<Instant>,
    frames: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            started: None,
            frames: 0,
        }
    }

    /// Starts counting on the first call.
    pub fn tick(&mut self, aspect: f32) -> FrameInfo {
        let started = *self.started.get_or_insert_with(Instant::now);

        let info = FrameInfo {
            elapsed: started.elapsed(),
            frame: self.frames,
            aspect,
        };
        self.frames += 1;

        info
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// One demo: owns all of its state and describes each frame as passes.
pub trait Scene {
    fn clear_colour(&self) -> Colour;

    /// Returns true when the key changed what gets drawn.
    fn handle_key(&mut self, key: Key) -> bool;

    /// Passes are drawn in order against a shared depth buffer.
    fn passes(&mut self, frame: &FrameInfo) -> Vec<Pass>;
}
