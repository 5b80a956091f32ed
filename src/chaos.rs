//! Chaos game: a point jumps halfway toward a randomly picked vertex of the
//! reference triangle, over and over. The visited points settle on the
//! Sierpinski triangle.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::config::{ChaosConfig, SeedPolicy};
use crate::geometry::{Orientation, Placement, Point, Triangle};
use crate::scene::{Colour, Fill, FrameInfo, Key, Pass, Scene};

/// Moves `current` halfway toward one of the three attractors, picked uniformly.
pub fn next_point<R: Rng + ?Sized>(current: Point, attractors: &Triangle, rng: &mut R) -> Point {
    let dest = rng.gen_range(0..3);
    attractors.vertices[dest].midpoint(current)
}

/// Endless sequence of chaos game points. The start point comes first.
pub struct ChaosGame<R = StdRng> {
    current: Point,
    attractors: Triangle,
    rng: R,
}

impl ChaosGame<StdRng> {
    /// Same seed, same sequence.
    pub fn seeded(seed: u64, start: Point, attractors: Triangle) -> Self {
        Self::new(StdRng::seed_from_u64(seed), start, attractors)
    }
}

impl<R: Rng> ChaosGame<R> {
    pub fn new(rng: R, start: Point, attractors: Triangle) -> Self {
        ChaosGame {
            current: start,
            attractors,
            rng,
        }
    }

    /// Point the next call to `next` returns.
    pub fn current(&self) -> Point {
        self.current
    }
}

impl<R: Rng> Iterator for ChaosGame<R> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let point = self.current;
        self.current = next_point(point, &self.attractors, &mut self.rng);
        Some(point)
    }
}

pub struct ChaosScene {
    config: ChaosConfig,
    game: ChaosGame,
    history: Vec<Point>,
    capped: bool,
}

impl ChaosScene {
    pub fn new(config: ChaosConfig) -> Self {
        let game = ChaosGame::seeded(config.seed, config.start, config.attractors);

        ChaosScene {
            config,
            game,
            history: Vec::new(),
            capped: false,
        }
    }

    pub fn config(&self) -> &ChaosConfig {
        &self.config
    }

    /// First `count` points of the seeded sequence.
    ///
    /// `ReplayEachFrame` regenerates them from scratch on every call,
    /// `Accumulate` only computes the ones missing from previous calls.
    pub fn points(&mut self, count: usize) -> &[Point] {
        match self.config.policy {
            SeedPolicy::ReplayEachFrame => {
                self.game =
                    ChaosGame::seeded(self.config.seed, self.config.start, self.config.attractors);
                self.history.clear();
                self.history.extend(self.game.by_ref().take(count));
            }
            SeedPolicy::Accumulate => {
                if self.history.len() < count {
                    let missing = count - self.history.len();
                    self.history.extend(self.game.by_ref().take(missing));
                }
            }
        }

        &self.history[..count]
    }
}

impl Scene for ChaosScene {
    fn clear_colour(&self) -> Colour {
        self.config.background
    }

    fn handle_key(&mut self, _key: Key) -> bool {
        false
    }

    fn passes(&mut self, frame: &FrameInfo) -> Vec<Pass> {
        let count = self.config.budget.points(
            frame.elapsed.as_secs_f64(),
            frame.frame,
            self.config.max_points,
        );

        if count == self.config.max_points && !self.capped {
            self.capped = true;
            log::debug!("point budget capped at {}", count);
        }

        let scale = self.config.point_scale;
        let y_offset = self.config.y_offset;

        let placements = self
            .points(count)
            .iter()
            .map(|p| Placement::new(p.x, p.y + y_offset, scale))
            .collect();

        vec![Pass {
            orientation: Orientation::YUp,
            fill: Fill::Flat(self.config.colour),
            placements,
        }]
    }
}
