use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::shapes::{Circle, Point, Triangle};
use crate::scene::Shape;

/// Which shape the next stamp produces.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShapeKind {
    Point,
    Triangle,
    Circle,
}

/// The current UI selection: shape kind, color, size, and the fan count for
/// circles.
///
/// Owned by the application and passed in at stamp time. [`stamp`] snapshots
/// every field by value into the new shape, so changing the brush later
/// never retroactively alters shapes already on the canvas.
///
/// [`stamp`]: Brush::stamp
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Brush {
    pub kind: ShapeKind,
    pub color: Color,
    pub size: f32,
    pub circle_segments: u32,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            kind: ShapeKind::Point,
            color: Color::white(),
            size: 5.0,
            circle_segments: 5,
        }
    }
}

impl Brush {
    /// Creates a shape of the selected kind at `position` (NDC), carrying
    /// copies of the brush's color, size, and (for circles) segment count.
    pub fn stamp(&self, position: Vec2) -> Shape {
        match self.kind {
            ShapeKind::Point => Shape::Point(Point::new(position, self.color, self.size)),
            ShapeKind::Triangle => {
                Shape::Triangle(Triangle::around(position, self.color, self.size))
            }
            ShapeKind::Circle => Shape::Circle(Circle::new(
                position,
                self.color,
                self.size,
                self.circle_segments,
            )),
        }
    }
}
