use winit::event::WindowEvent;
use winit::window::WindowId;

use super::ctx::FrameCtx;

/// Whether the runtime should keep going after a callback.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// The application half of the runtime contract.
///
/// The runtime owns the window and GPU; the app supplies per-frame
/// behavior. Most apps only need `on_frame` and read translated input from
/// the frame context instead of overriding the raw event hook.
pub trait App {
    /// Runs once per redraw with that frame's context.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;

    /// Raw winit event hook. The default ignores everything; translated
    /// input reaches `on_frame` regardless.
    fn on_window_event(&mut self, _window_id: WindowId, _event: &WindowEvent) -> AppControl {
        AppControl::Continue
    }
}
