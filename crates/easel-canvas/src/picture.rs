//! The fixed stamp composition: a stylized crab-like figure built from 40
//! triangles authored on a 22×12 cell grid.
//!
//! This is pure data. Each table row is one triangle as three grid-space
//! corners `[x0, y0, x1, y1, x2, y2]` (cell origin bottom-left, +Y up);
//! [`generate`] maps every corner through [`grid_to_ndc`] and returns the
//! shapes ready to append to a [`Scene`](crate::scene::Scene).
//!
//! Section order is paint order and matters for occlusion: the eyes and the
//! legs must land on top of the body triangles they overlap.

use crate::coords::{grid_to_ndc, GridSize, Vec2};
use crate::paint::Color;
use crate::scene::shapes::Triangle;
use crate::scene::Shape;

/// Total triangles in the composition.
pub const TRIANGLE_COUNT: usize = 40;

const GRID: GridSize = GridSize::new(22.0, 12.0);

const BODY_COLOR: Color = Color::new(1.0, 0.0, 0.0, 1.0);
/// Grey, not black, so the eyes stand apart from the canvas background.
const EYE_COLOR: Color = Color::new(0.32, 0.32, 0.32, 1.0);

const LEFT_ARM: [[f32; 6]; 9] = [
    [0.0, 9.0, 1.0, 12.0, 2.0, 8.0],
    [1.0, 12.0, 3.0, 10.0, 2.0, 8.0],
    [2.0, 8.0, 3.0, 10.0, 4.0, 8.0],
    [3.0, 10.0, 5.0, 12.0, 4.0, 8.0],
    [4.0, 8.0, 5.0, 12.0, 6.0, 9.0],
    [2.0, 7.0, 2.0, 8.0, 4.0, 7.0],
    [2.0, 8.0, 4.0, 8.0, 4.0, 7.0],
    [4.0, 7.0, 4.0, 8.0, 6.0, 7.0],
    [2.0, 7.0, 6.0, 7.0, 6.0, 5.0],
];

const RIGHT_ARM: [[f32; 6]; 9] = [
    [16.0, 9.0, 17.0, 12.0, 18.0, 8.0],
    [17.0, 12.0, 19.0, 10.0, 18.0, 8.0],
    [18.0, 8.0, 19.0, 10.0, 20.0, 8.0],
    [19.0, 10.0, 21.0, 12.0, 20.0, 8.0],
    [20.0, 8.0, 21.0, 12.0, 22.0, 9.0],
    [16.0, 7.0, 18.0, 8.0, 18.0, 7.0],
    [18.0, 7.0, 18.0, 8.0, 20.0, 8.0],
    [18.0, 7.0, 20.0, 8.0, 20.0, 7.0],
    [16.0, 5.0, 16.0, 7.0, 20.0, 7.0],
];

const BODY: [[f32; 6]; 2] = [
    [6.0, 2.0, 6.0, 8.0, 16.0, 2.0],
    [6.0, 8.0, 16.0, 8.0, 16.0, 2.0],
];

const EYES: [[f32; 6]; 4] = [
    [8.0, 8.0, 8.0, 10.0, 9.0, 8.0],
    [8.0, 10.0, 9.0, 10.0, 9.0, 8.0],
    [13.0, 8.0, 13.0, 10.0, 14.0, 8.0],
    [13.0, 10.0, 14.0, 10.0, 14.0, 8.0],
];

const LEFT_UPPER_LEG: [[f32; 6]; 4] = [
    [2.0, 0.0, 2.0, 2.0, 4.0, 4.0],
    [2.0, 0.0, 4.0, 4.0, 4.0, 2.0],
    [4.0, 2.0, 4.0, 4.0, 6.0, 5.0],
    [4.0, 2.0, 6.0, 5.0, 6.0, 3.0],
];

const LEFT_LOWER_LEG: [[f32; 6]; 4] = [
    [3.0, 0.0, 4.0, 1.0, 6.0, 1.0],
    [3.0, 0.0, 6.0, 1.0, 5.0, 0.0],
    [4.0, 1.0, 6.0, 2.0, 6.0, 1.0],
    [6.0, 1.0, 6.0, 2.0, 8.0, 2.0],
];

const RIGHT_UPPER_LEG: [[f32; 6]; 4] = [
    [16.0, 3.0, 16.0, 5.0, 18.0, 2.0],
    [16.0, 5.0, 18.0, 4.0, 18.0, 2.0],
    [18.0, 2.0, 18.0, 4.0, 20.0, 0.0],
    [18.0, 4.0, 20.0, 2.0, 20.0, 0.0],
];

const RIGHT_LOWER_LEG: [[f32; 6]; 4] = [
    [14.0, 2.0, 16.0, 2.0, 16.0, 1.0],
    [16.0, 1.0, 16.0, 2.0, 18.0, 1.0],
    [16.0, 1.0, 19.0, 0.0, 17.0, 0.0],
    [16.0, 1.0, 18.0, 1.0, 19.0, 0.0],
];

/// Builds the composition as a fresh, independently owned shape sequence.
///
/// Every shape is an explicit-vertex [`Triangle`]; callers append the whole
/// sequence to their scene in the returned order.
pub fn generate() -> Vec<Shape> {
    let sections: [(&[[f32; 6]], Color); 8] = [
        (&LEFT_ARM, BODY_COLOR),
        (&RIGHT_ARM, BODY_COLOR),
        (&BODY, BODY_COLOR),
        (&EYES, EYE_COLOR),
        (&LEFT_UPPER_LEG, BODY_COLOR),
        (&LEFT_LOWER_LEG, BODY_COLOR),
        (&RIGHT_UPPER_LEG, BODY_COLOR),
        (&RIGHT_LOWER_LEG, BODY_COLOR),
    ];

    let mut shapes = Vec::with_capacity(TRIANGLE_COUNT);
    for (corners, color) in sections {
        for tri in corners {
            shapes.push(Shape::Triangle(Triangle::from_vertices(
                corners_to_ndc(*tri),
                color,
            )));
        }
    }
    shapes
}

fn corners_to_ndc(tri: [f32; 6]) -> [Vec2; 3] {
    [
        grid_to_ndc(tri[0], tri[1], GRID),
        grid_to_ndc(tri[2], tri[3], GRID),
        grid_to_ndc(tri[4], tri[5], GRID),
    ]
}
