//! GPU rendering subsystem.
//!
//! The scene renderer consumes an `easel_canvas::scene::Scene` and issues
//! wgpu commands: point sprites through an instanced-quad pipeline, triangle
//! lists through a vertex-colored pipeline, interleaved in one render pass
//! so append order stays paint order.
//!
//! Convention:
//! - shape positions arrive in NDC; only point sprite *sizes* are in logical
//!   pixels and converted in the vertex shader via a viewport uniform.

mod ctx;
mod primitives;
mod scene;

pub use ctx::{RenderCtx, RenderTarget};
pub use scene::SceneRenderer;
