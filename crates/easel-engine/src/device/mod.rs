//! wgpu bring-up and surface ownership.
//!
//! One `Gpu` per window: it finds an adapter, creates the device and queue,
//! keeps the surface configured to the drawable size, and hands out frames
//! as texture + view + encoder bundles.

mod gpu;

pub use gpu::{Gpu, GpuFrame, GpuInit, SurfaceErrorAction};
