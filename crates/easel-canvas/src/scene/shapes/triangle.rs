use crate::coords::{PixelScale, Vec2};
use crate::paint::Color;
use crate::scene::{Primitive, Scene, Shape};

/// Triangle draw payload.
///
/// Two construction modes:
/// - [`around`](Triangle::around): geometry derived from `position` and
///   `size` at tessellation time (user stamps).
/// - [`from_vertices`](Triangle::from_vertices): explicit NDC corners that
///   override the derived geometry (the fixed picture). `position` and
///   `size` are unused in this mode and stay at their defaults.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle {
    pub position: Vec2,
    pub color: Color,
    pub size: f32,
    pub vertices: Option<[Vec2; 3]>,
}

impl Triangle {
    /// A triangle derived from its center: base `2·size` px wide, apex
    /// `size` px above the center.
    #[inline]
    pub const fn around(position: Vec2, color: Color, size: f32) -> Self {
        Self { position, color, size, vertices: None }
    }

    /// A triangle with explicit NDC corners.
    #[inline]
    pub const fn from_vertices(vertices: [Vec2; 3], color: Color) -> Self {
        Self {
            position: Vec2::zero(),
            color,
            size: 0.0,
            vertices: Some(vertices),
        }
    }

    pub(crate) fn tessellate(&self, scale: PixelScale) -> Primitive {
        let vertices = match self.vertices {
            Some(corners) => corners.to_vec(),
            None => {
                let Vec2 { x, y } = self.position;
                let (dx, dy) = (self.size * scale.x, self.size * scale.y);
                vec![
                    Vec2::new(x - dx, y - dy),
                    Vec2::new(x + dx, y - dy),
                    Vec2::new(x, y + dy),
                ]
            }
        };

        Primitive::Triangles { vertices, color: self.color }
    }
}

impl Scene {
    /// Stamps a center-derived triangle shape.
    #[inline]
    pub fn push_triangle(&mut self, position: Vec2, color: Color, size: f32) {
        self.push(Shape::Triangle(Triangle::around(position, color, size)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    fn scale_400() -> PixelScale {
        // 400×400 surface: 1 px = 1/200 NDC units.
        PixelScale { x: 2.0 / 400.0, y: 2.0 / 400.0 }
    }

    #[test]
    fn derived_geometry_brackets_the_position() {
        let t = Triangle::around(Vec2::new(0.5, -0.25), Color::red(), 10.0);
        let Primitive::Triangles { vertices, color } = t.tessellate(scale_400()) else {
            panic!("triangle must tessellate to a triangle list");
        };

        assert_eq!(color, Color::red());
        assert_eq!(vertices.len(), 3);

        // 10 px on a 400 px surface is 0.05 NDC units.
        let d = 0.05;
        assert!((vertices[0].x - (0.5 - d)).abs() < EPS);
        assert!((vertices[0].y - (-0.25 - d)).abs() < EPS);
        assert!((vertices[1].x - (0.5 + d)).abs() < EPS);
        assert!((vertices[2].x - 0.5).abs() < EPS);
        assert!((vertices[2].y - (-0.25 + d)).abs() < EPS);
    }

    #[test]
    fn derived_geometry_scales_per_axis() {
        let t = Triangle::around(Vec2::zero(), Color::white(), 10.0);
        let wide = PixelScale { x: 2.0 / 800.0, y: 2.0 / 400.0 };
        let Primitive::Triangles { vertices, .. } = t.tessellate(wide) else {
            panic!("triangle must tessellate to a triangle list");
        };

        // Same pixel size, half the NDC extent on the wider axis.
        assert!((vertices[0].x + 0.025).abs() < EPS);
        assert!((vertices[0].y + 0.05).abs() < EPS);
    }

    #[test]
    fn explicit_vertices_override_derived_geometry() {
        let corners = [
            Vec2::new(-1.0, -1.0),
            Vec2::new(1.0, -1.0),
            Vec2::new(0.0, 1.0),
        ];
        let t = Triangle::from_vertices(corners, Color::green());
        let Primitive::Triangles { vertices, .. } = t.tessellate(scale_400()) else {
            panic!("triangle must tessellate to a triangle list");
        };

        // Explicit corners pass through untouched by the pixel scale.
        assert_eq!(vertices, corners.to_vec());
    }
}
