use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{Primitive, Scene, Shape};

/// Point draw payload: a square dot of `size` logical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point {
    pub position: Vec2,
    pub color: Color,
    pub size: f32,
}

impl Point {
    #[inline]
    pub const fn new(position: Vec2, color: Color, size: f32) -> Self {
        Self { position, color, size }
    }

    /// A point is already a primitive; no geometry to derive.
    #[inline]
    pub(crate) fn tessellate(&self) -> Primitive {
        Primitive::Points {
            center: self.position,
            size: self.size,
            color: self.color,
        }
    }
}

impl Scene {
    /// Stamps a point shape.
    #[inline]
    pub fn push_point(&mut self, position: Vec2, color: Color, size: f32) {
        self.push(Shape::Point(Point::new(position, color, size)));
    }
}
