//! Coordinate spaces and the mapping between them.
//!
//! Canonical model space:
//! - Normalized device coordinates (NDC)
//! - [-1, 1] on both axes
//! - Origin at surface center, +X right, +Y **up**
//!
//! Input arrives in window pixel space (top-left origin, +Y down); the
//! mapper converts it. The fixed picture is authored on an integer grid and
//! has its own mapping that preserves the grid's aspect ratio.

mod mapper;
mod vec2;

pub use mapper::{GridSize, PixelScale, SurfaceBounds, grid_to_ndc};
pub use vec2::Vec2;
