use crate::coords::Vec2;
use crate::paint::Color;

/// Renderer-facing output of shape tessellation.
///
/// Every shape flattens into exactly one primitive, and the renderer issues
/// exactly one draw call per primitive, so append order stays draw order.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// A single square point sprite, `size` logical pixels across.
    Points {
        center: Vec2,
        size: f32,
        color: Color,
    },

    /// A flat-colored triangle list. Positions are already NDC;
    /// `vertices.len()` is a multiple of 3.
    Triangles {
        vertices: Vec<Vec2>,
        color: Color,
    },
}
