//! Core model for the **Easel** drawing canvas.
//!
//! This crate is the renderer-agnostic half of the application: it knows
//! what a drawing *is* (shapes, colors, paint order) and how each shape
//! turns into GPU-ready geometry, but it never touches a device, a window,
//! or a shader. Everything here is a pure value transformation, which keeps
//! the whole drawing model testable headless.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`coords`] | `Vec2`, `SurfaceBounds`, `PixelScale`, grid mapping |
//! | [`paint`] | `Color` (straight RGBA) |
//! | [`brush`] | `Brush`, `ShapeKind`: the current UI selection |
//! | [`scene`] | `Scene`, `Shape`, `Primitive`, tessellation |
//! | [`picture`] | the fixed 40-triangle stamp composition |
//!
//! # Quick start
//!
//! ```rust
//! use easel_canvas::brush::Brush;
//! use easel_canvas::coords::SurfaceBounds;
//! use easel_canvas::scene::Scene;
//!
//! let bounds = SurfaceBounds::from_size(400.0, 400.0);
//! let brush = Brush::default();
//!
//! let mut scene = Scene::new();
//! scene.push(brush.stamp(bounds.to_ndc(200.0, 200.0)));
//! assert_eq!(scene.len(), 1);
//! ```

pub mod brush;
pub mod coords;
pub mod paint;
pub mod picture;
pub mod scene;
