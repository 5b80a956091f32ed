//! Exact Sierpinski triangle by subdivision.
//!
//! The outer triangle is drawn once in colour. On top of it, in a y down
//! frame, the removed centre triangles are painted with the background
//! colour: the centre of the whole triangle, then the centres of its three
//! corner triangles, and so on. The mask pass goes first so the depth test
//! keeps the colour pass from covering it.

use crate::config::SubdivisionConfig;
use crate::geometry::{Orientation, Placement, Point, TriangleSink, SIN_60};
use crate::scene::{Colour, Fill, FrameInfo, Key, Pass, Scene};

/// Triangles drawn for `depth`: `count(0) = 1`, `count(d) = 1 + 3 * count(d - 1)`.
pub fn triangle_count(depth: u32) -> u64 {
    (0..depth).fold(1u64, |count, _| count.saturating_mul(3).saturating_add(1))
}

/// One triangle plus, while depth remains, three half scale children.
#[derive(Debug, Clone, Copy)]
pub struct Subdivision {
    pub anchor: Point,
    pub scale: f32,
    pub depth: u32,
}

impl Subdivision {
    pub fn new(anchor: Point, scale: f32, depth: u32) -> Self {
        Subdivision {
            anchor,
            scale,
            depth,
        }
    }

    /// Pre-order walk, children visited left, top, right.
    ///
    /// Uses an explicit stack, which never holds more than `2 * depth + 1`
    /// entries, so deep levels cost heap instead of call stack.
    pub fn visit<S: TriangleSink + ?Sized>(&self, sink: &mut S) {
        let mut stack = Vec::with_capacity(2 * self.depth as usize + 1);
        stack.push((self.anchor, self.scale, self.depth));

        while let Some((p, scale, level)) = stack.pop() {
            sink.triangle(Placement {
                position: p,
                scale,
            });

            if level == 0 {
                continue;
            }

            let s = scale / 2.0;
            let left = Point::new(p.x - s / 2.0, p.y + s * SIN_60);
            let top = Point::new(p.x + s / 2.0, p.y - s * SIN_60);
            let right = Point::new(p.x + s / 2.0 + s, p.y + s * SIN_60);

            // reversed, the stack pops left first
            stack.push((right, s, level - 1));
            stack.push((top, s, level - 1));
            stack.push((left, s, level - 1));
        }
    }

    pub fn placements(&self) -> Vec<Placement> {
        let mut placements = Vec::with_capacity(triangle_count(self.depth).min(1 << 20) as usize);
        self.visit(&mut placements);
        placements
    }
}

/// Live adjustable depth, floored at zero and capped at `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthControl {
    depth: u32,
    max: u32,
}

impl DepthControl {
    pub fn new(depth: u32, max: u32) -> Self {
        DepthControl {
            depth: depth.min(max),
            max,
        }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Returns false when already at the cap.
    pub fn raise(&mut self) -> bool {
        if self.depth >= self.max {
            return false;
        }
        self.depth += 1;
        true
    }

    /// Returns false when already at zero.
    pub fn lower(&mut self) -> bool {
        if self.depth == 0 {
            return false;
        }
        self.depth -= 1;
        true
    }
}

pub struct SubdivisionScene {
    config: SubdivisionConfig,
    depth: DepthControl,
}

impl SubdivisionScene {
    pub fn new(config: SubdivisionConfig) -> Self {
        let depth = DepthControl::new(config.initial_depth, config.max_depth);

        SubdivisionScene { config, depth }
    }

    pub fn depth(&self) -> u32 {
        self.depth.depth()
    }

    /// Coloured triangle the mask is cut out of, in the y up frame.
    fn outline(&self) -> Placement {
        let anchor = self.config.anchor;
        let scale = self.config.scale;

        Placement::new(
            anchor.x - scale / 2.0,
            -anchor.y - scale * SIN_60,
            scale * 2.0,
        )
    }
}

impl Scene for SubdivisionScene {
    fn clear_colour(&self) -> Colour {
        self.config.background
    }

    fn handle_key(&mut self, key: Key) -> bool {
        let changed = match key {
            Key::Up => self.depth.raise(),
            Key::Down => self.depth.lower(),
            _ => false,
        };

        if changed {
            log::debug!(
                "depth {} ({} triangles)",
                self.depth.depth(),
                triangle_count(self.depth.depth())
            );
        } else if key == Key::Up {
            log::debug!("depth already at maximum {}", self.depth.max());
        }

        changed
    }

    fn passes(&mut self, _frame: &FrameInfo) -> Vec<Pass> {
        let mask = Subdivision::new(self.config.anchor, self.config.scale, self.depth.depth());

        vec![
            Pass {
                orientation: Orientation::YDown,
                fill: Fill::Flat(self.config.mask_colour),
                placements: mask.placements(),
            },
            Pass {
                orientation: Orientation::YUp,
                fill: Fill::Gradient,
                placements: vec![self.outline()],
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::time::Duration;

    fn recurse(p: Point, scale: f32, level: u32, out: &mut Vec<Placement>) {
        out.push(Placement { position: p, scale });
        if level == 0 {
            return;
        }
        let s = scale / 2.0;
        recurse(Point::new(p.x - s / 2.0, p.y + s * SIN_60), s, level - 1, out);
        recurse(Point::new(p.x + s / 2.0, p.y - s * SIN_60), s, level - 1, out);
        recurse(Point::new(p.x + s / 2.0 + s, p.y + s * SIN_60), s, level - 1, out);
    }

    fn frame() -> FrameInfo {
        FrameInfo {
            elapsed: Duration::from_secs(1),
            frame: 60,
            aspect: 1.0,
        }
    }

    #[test]
    fn count_recurrence() {
        assert_eq!(triangle_count(0), 1);
        assert_eq!(triangle_count(1), 4);
        assert_eq!(triangle_count(2), 13);
        assert_eq!(triangle_count(10), 88_573);
        assert_eq!(triangle_count(200), u64::MAX);

        for d in 0..8 {
            let drawn = Subdivision::new(Point::new(0.0, 0.0), 1.0, d).placements();
            assert_eq!(drawn.len() as u64, triangle_count(d));
        }
    }

    #[test]
    fn depth_zero_draws_anchor_only() {
        let drawn = Subdivision::new(Point::new(-0.5, 0.0), 1.0, 0).placements();
        assert_eq!(drawn, vec![Placement::new(-0.5, 0.0, 1.0)]);
    }

    #[test]
    fn depth_two_halves_scale_per_level() {
        let drawn = Subdivision::new(Point::new(-0.5, 0.0), 1.0, 2).placements();
        assert_eq!(drawn.len(), 13);

        let at = |scale: f32| drawn.iter().filter(|p| p.scale == scale).count();
        assert_eq!(at(1.0), 1);
        assert_eq!(at(0.5), 3);
        assert_eq!(at(0.25), 9);

        // first child: left of the root
        assert_abs_diff_eq!(drawn[1].position.x, -0.75, epsilon = 1e-6);
        assert_abs_diff_eq!(drawn[1].position.y, 0.5 * SIN_60, epsilon = 1e-6);
    }

    #[test]
    fn order_matches_recursive_definition() {
        let anchor = Point::new(-0.5, 0.0);
        let mut expected = Vec::new();
        recurse(anchor, 1.0, 5, &mut expected);

        assert_eq!(Subdivision::new(anchor, 1.0, 5).placements(), expected);
    }

    #[test]
    fn depth_floors_at_zero() {
        let mut depth = DepthControl::new(0, 4);
        assert!(!depth.lower());
        assert_eq!(depth.depth(), 0);

        assert!(depth.raise());
        assert!(depth.lower());
        assert!(!depth.lower());
        assert_eq!(depth.depth(), 0);
    }

    #[test]
    fn depth_stops_at_max() {
        let mut depth = DepthControl::new(9, 3);
        assert_eq!(depth.depth(), 3);
        assert!(!depth.raise());
        assert_eq!(depth.depth(), 3);
    }

    #[test]
    fn keys_drive_scene_depth() {
        let mut scene = SubdivisionScene::new(SubdivisionConfig::default().with_max_depth(2));

        assert!(!scene.handle_key(Key::Down));
        assert!(scene.handle_key(Key::Up));
        assert!(scene.handle_key(Key::Up));
        assert!(!scene.handle_key(Key::Up));
        assert!(!scene.handle_key(Key::Other));
        assert_eq!(scene.depth(), 2);

        let passes = scene.passes(&frame());
        assert_eq!(passes[0].placements.len(), 13);
    }

    #[test]
    fn mask_pass_precedes_outline() {
        let mut scene = SubdivisionScene::new(SubdivisionConfig::default().with_initial_depth(1));
        let passes = scene.passes(&frame());

        assert_eq!(passes.len(), 2);

        assert_eq!(passes[0].orientation, Orientation::YDown);
        assert_eq!(passes[0].fill, Fill::Flat([0.1, 0.1, 0.11, 1.0]));
        assert_eq!(passes[0].placements.len(), 4);
        assert_eq!(passes[0].placements[0], Placement::new(-0.5, 0.0, 1.0));

        assert_eq!(passes[1].orientation, Orientation::YUp);
        assert_eq!(passes[1].fill, Fill::Gradient);
        assert_eq!(passes[1].placements.len(), 1);

        let outline = passes[1].placements[0];
        assert_abs_diff_eq!(outline.position.x, -1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(outline.position.y, -SIN_60, epsilon = 1e-6);
        assert_abs_diff_eq!(outline.scale, 2.0, epsilon = 1e-6);
    }
}
