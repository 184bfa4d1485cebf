use crate::coords::PixelScale;
use crate::scene::shapes::{Circle, Point, Triangle};

use super::Primitive;

/// A stamped shape.
///
/// A closed set: the renderer matches on the primitive this tessellates
/// into, so extending the scene means
/// - a new shape module under `scene::shapes::*`
/// - a new variant here
/// - a tessellation arm below
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Point(Point),
    Triangle(Triangle),
    Circle(Circle),
}

impl Shape {
    /// Flattens the shape into renderer-ready geometry.
    ///
    /// `scale` converts the shape's pixel `size` into NDC extents; positions
    /// are stored in NDC already.
    pub fn tessellate(&self, scale: PixelScale) -> Primitive {
        match self {
            Shape::Point(p) => p.tessellate(),
            Shape::Triangle(t) => t.tessellate(scale),
            Shape::Circle(c) => c.tessellate(scale),
        }
    }
}
