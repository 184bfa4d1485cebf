//! Time subsystem.
//!
//! Stable, testable frame timing without coupling to the runtime. One
//! `FrameClock` per window; `tick()` once per presented frame produces the
//! `FrameTime` handed to the app.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
