//! The app-facing contract.
//!
//! `App` is what the studio implements; `FrameCtx` is what each frame hands
//! it. Runtime internals stay behind these two types.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
