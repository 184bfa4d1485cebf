use core::f32::consts::TAU;

use crate::coords::{PixelScale, Vec2};
use crate::paint::Color;
use crate::scene::{Primitive, Scene, Shape};

/// A stamped circle.
///
/// Tessellated as a triangle fan: `segments` triangles, each spanning an
/// angular slice of `2π / segments` and each carrying its own copy of the
/// center vertex. Radius is `size` logical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle {
    pub position: Vec2,
    pub color: Color,
    pub size: f32,
    pub segments: u32,
}

impl Circle {
    /// Creates a circle. `segments < 3` is a caller contract violation: the
    /// fan still tessellates without crashing, but the slices have no area.
    pub fn new(position: Vec2, color: Color, size: f32, segments: u32) -> Self {
        if segments < 3 {
            log::debug!("circle with {segments} segment(s) tessellates degenerate (minimum 3)");
        }
        Self { position, color, size, segments }
    }

    pub(crate) fn tessellate(&self, scale: PixelScale) -> Primitive {
        let Vec2 { x, y } = self.position;
        let (rx, ry) = (self.size * scale.x, self.size * scale.y);
        let step = TAU / self.segments as f32;

        let mut vertices = Vec::with_capacity(self.segments as usize * 3);
        for i in 0..self.segments {
            let a0 = step * i as f32;
            let a1 = step * (i + 1) as f32;
            vertices.push(self.position);
            vertices.push(Vec2::new(x + a0.cos() * rx, y + a0.sin() * ry));
            vertices.push(Vec2::new(x + a1.cos() * rx, y + a1.sin() * ry));
        }

        Primitive::Triangles { vertices, color: self.color }
    }
}

impl Scene {
    /// Stamps a circle shape.
    #[inline]
    pub fn push_circle(&mut self, position: Vec2, color: Color, size: f32, segments: u32) {
        self.push(Shape::Circle(Circle::new(position, color, size, segments)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn fan(segments: u32) -> Vec<Vec2> {
        let c = Circle::new(Vec2::new(0.25, -0.5), Color::white(), 20.0, segments);
        let scale = PixelScale { x: 2.0 / 400.0, y: 2.0 / 400.0 };
        match c.tessellate(scale) {
            Primitive::Triangles { vertices, .. } => vertices,
            other => panic!("circle must tessellate to a triangle list, got {other:?}"),
        }
    }

    #[test]
    fn fan_has_one_triangle_per_segment() {
        for segments in [3, 5, 12, 60] {
            let vertices = fan(segments);
            assert_eq!(vertices.len(), segments as usize * 3);
        }
    }

    #[test]
    fn every_triangle_contains_the_center() {
        let center = Vec2::new(0.25, -0.5);
        let vertices = fan(7);
        for tri in vertices.chunks_exact(3) {
            assert_eq!(tri[0], center);
        }
    }

    #[test]
    fn perimeter_vertices_lie_on_the_scaled_radius() {
        let center = Vec2::new(0.25, -0.5);
        // 20 px on a 400 px surface is 0.1 NDC units.
        let r = 0.1;
        let vertices = fan(9);
        for tri in vertices.chunks_exact(3) {
            for p in &tri[1..] {
                let d = *p - center;
                assert!((d.x.hypot(d.y) - r).abs() < EPS, "off-radius vertex {p:?}");
            }
        }
    }

    #[test]
    fn angular_spans_sum_to_full_turn() {
        let center = Vec2::new(0.25, -0.5);
        let vertices = fan(11);
        let mut total = 0.0f32;
        for tri in vertices.chunks_exact(3) {
            let a = tri[1] - center;
            let b = tri[2] - center;
            let dot = a.x * b.x + a.y * b.y;
            let cross = a.x * b.y - a.y * b.x;
            total += cross.atan2(dot);
        }
        assert!((total - TAU).abs() < EPS, "spans sum to {total}, want 2π");
    }

    #[test]
    fn fan_closes_on_itself() {
        let vertices = fan(8);
        // Each slice's trailing perimeter vertex is the next slice's leading one.
        for pair in vertices.chunks_exact(3).collect::<Vec<_>>().windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            assert!((prev[2].x - next[1].x).abs() < EPS);
            assert!((prev[2].y - next[1].y).abs() < EPS);
        }
    }

    #[test]
    fn degenerate_segment_counts_do_not_crash() {
        // Below the contract minimum the fan has no area, but it must still
        // produce finite geometry (or none at all for zero segments).
        assert!(fan(0).is_empty());
        for segments in [1, 2] {
            let vertices = fan(segments);
            assert_eq!(vertices.len(), segments as usize * 3);
            assert!(vertices.iter().all(|v| v.is_finite()));
        }
    }
}
