//! Builder style settings of both demos.
//!
//! Everything has a sensible `Default`, individual values are swapped with
//! the `with_*` methods:
//!
//! ```ignore
//! let config = ChaosConfig::default()
//!     .with_seed(7)
//!     .with_budget(PointBudget::PerFrame(20));
//! ```

use crate::geometry::{Point, Triangle, REFERENCE_TRIANGLE};
use crate::scene::Colour;

#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: String::from("Sierpinski"),
            width: 1280,
            height: 720,
            vsync: true,
        }
    }
}

impl WindowConfig {
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_owned();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }
}

/// How many chaos game points a frame shows.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum PointBudget {
    /// Grows with wall clock time, `rate` points per second.
    PerSecond(f64),
    /// Grows with the frame counter, `count` points per frame.
    PerFrame(u64),
}

impl PointBudget {
    /// Number of points for a frame, never above `max_points`.
    pub fn points(&self, elapsed_secs: f64, frame: u64, max_points: usize) -> usize {
        let wanted = match *self {
            // saturating cast, NaN and negatives become 0
            PointBudget::PerSecond(rate) => (elapsed_secs * rate).floor() as u64,
            PointBudget::PerFrame(count) => frame.saturating_mul(count),
        };

        wanted.min(max_points as u64) as usize
    }
}

/// What happens to the generator between frames.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SeedPolicy {
    /// Reseed every frame and regenerate from the start point. Every frame
    /// redraws the same prefix of one fixed sequence.
    ReplayEachFrame,
    /// Keep the generator alive and only compute points not seen yet.
    Accumulate,
}

#[derive(Debug, Clone)]
pub struct ChaosConfig {
    pub seed: u64,
    pub start: Point,
    pub attractors: Triangle,
    /// Scale of the marker triangle drawn at each point.
    pub point_scale: f32,
    /// Vertical shift applied to every marker.
    pub y_offset: f32,
    pub budget: PointBudget,
    pub max_points: usize,
    pub policy: SeedPolicy,
    pub colour: Colour,
    pub background: Colour,
}

impl Default for ChaosConfig {
    fn default() -> Self {
        ChaosConfig {
            seed: 42,
            start: Point::new(0.5, 0.0),
            attractors: REFERENCE_TRIANGLE,
            point_scale: 0.005,
            y_offset: -0.433,
            budget: PointBudget::PerSecond(100.0),
            max_points: 50_000,
            policy: SeedPolicy::ReplayEachFrame,
            colour: [0.5, 0.0, 0.0, 1.0],
            background: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

impl ChaosConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_start(mut self, start: Point) -> Self {
        self.start = start;
        self
    }

    pub fn with_attractors(mut self, attractors: Triangle) -> Self {
        self.attractors = attractors;
        self
    }

    pub fn with_budget(mut self, budget: PointBudget) -> Self {
        self.budget = budget;
        self
    }

    pub fn with_max_points(mut self, max_points: usize) -> Self {
        self.max_points = max_points;
        self
    }

    pub fn with_policy(mut self, policy: SeedPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_colours(mut self, colour: Colour, background: Colour) -> Self {
        self.colour = colour;
        self.background = background;
        self
    }
}

#[derive(Debug, Clone)]
pub struct SubdivisionConfig {
    /// Anchor of the outermost mask triangle, y down.
    pub anchor: Point,
    pub scale: f32,
    pub initial_depth: u32,
    /// Each level triples the draw calls, the depth keys stop here.
    pub max_depth: u32,
    /// Painted where the fractal has holes, same as the background.
    pub mask_colour: Colour,
    pub background: Colour,
}

impl Default for SubdivisionConfig {
    fn default() -> Self {
        SubdivisionConfig {
            anchor: Point::new(-0.5, 0.0),
            scale: 1.0,
            initial_depth: 0,
            max_depth: 10,
            mask_colour: [0.1, 0.1, 0.11, 1.0],
            background: [0.1, 0.1, 0.11, 0.0],
        }
    }
}

impl SubdivisionConfig {
    pub fn with_initial_depth(mut self, depth: u32) -> Self {
        self.initial_depth = depth;
        self
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_colours(mut self, mask: Colour, background: Colour) -> Self {
        self.mask_colour = mask;
        self.background = background;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_second_follows_elapsed_time() {
        let budget = PointBudget::PerSecond(100.0);

        assert_eq!(budget.points(0.0, 0, 1000), 0);
        assert_eq!(budget.points(2.5, 7, 1000), 250);
        assert_eq!(budget.points(0.019, 1, 1000), 1);
    }

    #[test]
    fn per_frame_follows_frame_counter() {
        let budget = PointBudget::PerFrame(20);

        assert_eq!(budget.points(100.0, 0, 1000), 0);
        assert_eq!(budget.points(100.0, 3, 1000), 60);
    }

    #[test]
    fn budget_is_capped() {
        assert_eq!(PointBudget::PerSecond(100.0).points(1e6, 0, 500), 500);
        assert_eq!(PointBudget::PerFrame(u64::MAX).points(0.0, 2, 500), 500);
        assert_eq!(PointBudget::PerSecond(f64::INFINITY).points(1.0, 0, 500), 500);
        assert_eq!(PointBudget::PerSecond(-5.0).points(1.0, 0, 500), 0);
    }

    #[test]
    fn using_builder_pattern() {
        let config = ChaosConfig::default()
            .with_seed(7)
            .with_policy(SeedPolicy::Accumulate)
            .with_max_points(10);

        assert_eq!(config.seed, 7);
        assert_eq!(config.policy, SeedPolicy::Accumulate);
        assert_eq!(config.max_points, 10);
        assert_eq!(config.attractors, REFERENCE_TRIANGLE);

        let window = WindowConfig::default().with_size(640, 480);
        assert_eq!(window.title, "Sierpinski");
        assert_eq!((window.width, window.height), (640, 480));
    }
}
