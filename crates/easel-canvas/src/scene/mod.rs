//! Scene (shape list) types.
//!
//! Responsibilities:
//! - store the stamped shapes in paint order, plus the transient preview
//! - flatten each shape into a renderer-facing [`Primitive`]
//! - keep shape-specific payloads isolated per shape file under
//!   `scene::shapes`

mod list;
mod primitive;
mod shape;

pub mod shapes;

pub use list::Scene;
pub use primitive::Primitive;
pub use shape::Shape;
