//! One module per shape: each defines its payload struct, its tessellation,
//! and a `Scene::push_*` convenience.

mod circle;
mod point;
mod triangle;

pub use circle::Circle;
pub use point::Point;
pub use triangle::Triangle;
