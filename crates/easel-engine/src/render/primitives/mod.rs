//! Primitive pipelines.
//!
//! One module per primitive kind, each owning its GPU resources (pipeline,
//! buffers, bindings). Unlike standalone renderers these never begin their
//! own render pass; `SceneRenderer` prepares both, opens a single pass, and
//! binds whichever pipeline the next draw span needs.

mod common;

pub(super) mod point;
pub(super) mod triangle;
