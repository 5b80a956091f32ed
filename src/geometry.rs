use cgmath::{vec3, Matrix4};

/// sin(60°), height of an equilateral triangle with unit side.
pub const SIN_60: f32 = 0.866;

/// Mesh uploaded once and instanced by every draw call.
pub const UNIT_TRIANGLE: [[f32; 3]; 3] = [[0.0, 0.0, 0.0], [0.5, SIN_60, 0.0], [1.0, 0.0, 0.0]];

/// Attractors of the chaos game.
pub const REFERENCE_TRIANGLE: Triangle = Triangle::new(
    Point::new(-0.5, 0.0),
    Point::new(0.0, SIN_60),
    Point::new(0.5, 0.0),
);

const EPSILON: f32 = 1e-6;

/// Position in normalized device space.
#[derive(Debug, Default, PartialEq, Clone, Copy)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn midpoint(self, other: Point) -> Point {
        Point::new((other.x + self.x) / 2.0, (other.y + self.y) / 2.0)
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Triangle {
    pub vertices: [Point; 3],
}

impl Triangle {
    pub const fn new(a: Point, b: Point, c: Point) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Inclusive test, points on an edge count as inside.
    pub fn contains(&self, p: Point) -> bool {
        let [a, b, c] = self.vertices;

        // z component of (q - o) x (p - o)
        let side = |o: Point, q: Point| (q.x - o.x) * (p.y - o.y) - (q.y - o.y) * (p.x - o.x);

        let d1 = side(a, b);
        let d2 = side(b, c);
        let d3 = side(c, a);

        let has_neg = d1 < -EPSILON || d2 < -EPSILON || d3 < -EPSILON;
        let has_pos = d1 > EPSILON || d2 > EPSILON || d3 > EPSILON;

        !(has_neg && has_pos)
    }
}

/// Where one copy of the unit triangle goes: translation plus uniform scale.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Placement {
    pub position: Point,
    pub scale: f32,
}

impl Placement {
    pub fn new(x: f32, y: f32, scale: f32) -> Self {
        Self {
            position: Point::new(x, y),
            scale,
        }
    }
}

/// Receives every triangle a generator wants drawn.
pub trait TriangleSink {
    fn triangle(&mut self, placement: Placement);
}

impl TriangleSink for Vec<Placement> {
    fn triangle(&mut self, placement: Placement) {
        self.push(placement);
    }
}

/// Direction of the y axis after projection.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Orientation {
    YUp,
    YDown,
}

/// Orthographic projection keeping the aspect ratio, x spans [-aspect, aspect].
pub fn projection(aspect: f32, orientation: Orientation) -> Matrix4<f32> {
    let (bottom, top) = match orientation {
        Orientation::YUp => (-1.0, 1.0),
        Orientation::YDown => (1.0, -1.0),
    };

    cgmath::ortho(-aspect, aspect, bottom, top, 1.0, -1.0)
}

/// Column major MVP ready to be sent as a `mat4` uniform.
pub fn mvp(projection: &Matrix4<f32>, placement: Placement) -> [[f32; 4]; 4] {
    let model = Matrix4::from_translation(vec3(placement.position.x, placement.position.y, 0.0))
        * Matrix4::from_scale(placement.scale);

    (*projection * model).into()
}
