//! Easel engine crate.
//!
//! Owns the platform + GPU runtime: wgpu device/surface lifecycle, the winit
//! event loop, the platform-agnostic input subsystem, frame timing, logging
//! bootstrap, and the scene renderer. The drawing model itself lives in
//! `easel-canvas`; this crate turns it into pixels.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod render;
