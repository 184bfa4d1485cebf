use winit::window::{Window, WindowId};

use easel_canvas::coords::SurfaceBounds;
use easel_canvas::paint::Color;

use crate::device::{Gpu, SurfaceErrorAction};
use crate::input::{InputFrame, InputState};
use crate::render::{RenderCtx, RenderTarget};
use crate::time::FrameTime;

use super::app::AppControl;

/// Identity and handle of the window being drawn.
pub struct WindowCtx<'a> {
    pub id:     WindowId,
    pub window: &'a Window,
}

impl<'a> WindowCtx<'a> {
    /// Current inner size in logical pixels.
    pub fn logical_size(&self) -> (f32, f32) {
        let size: winit::dpi::LogicalSize<f32> =
            self.window.inner_size().to_logical(self.window.scale_factor());
        (size.width, size.height)
    }
}

/// Everything `App::on_frame` gets to see for one frame.
///
/// `'a` lives for the callback; `'w` is the window borrow inside `Gpu<'w>`.
pub struct FrameCtx<'a, 'w> {
    pub window:       WindowCtx<'a>,
    pub gpu:          &'a mut Gpu<'w>,
    pub input:        &'a InputState,
    pub input_frame:  &'a InputFrame,
    pub time:         FrameTime,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Acquires a frame, clears it to `clear`, hands `draw` a [`RenderCtx`]
    /// and [`RenderTarget`], and presents the result.
    ///
    /// A lost or outdated surface drops the frame and recovers on a later
    /// one; only surface memory exhaustion asks the runtime to exit.
    pub fn render<F>(&mut self, clear: Color, draw: F) -> AppControl
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        let (w, h) = self.window.logical_size();

        let mut frame = match self.gpu.begin_frame() {
            Ok(frame) => frame,
            Err(err) => return self.recover_surface(err),
        };

        clear_pass(&mut frame.encoder, &frame.view, clear);

        let rctx = RenderCtx::new(
            self.gpu.device(),
            self.gpu.queue(),
            self.gpu.surface_format(),
            SurfaceBounds::from_size(w.max(1.0), h.max(1.0)),
        );

        // The target borrows frame.encoder; it must end before submit().
        {
            let mut target = RenderTarget {
                encoder:    &mut frame.encoder,
                color_view: &frame.view,
            };
            draw(&rctx, &mut target);
        }

        self.window.window.pre_present_notify();
        self.gpu.submit(frame);

        AppControl::Continue
    }

    fn recover_surface(&mut self, err: wgpu::SurfaceError) -> AppControl {
        let action = self.gpu.handle_surface_error(err.clone());
        if action == SurfaceErrorAction::Fatal {
            log::error!("surface out of memory, exiting");
            return AppControl::Exit;
        }
        log::warn!("surface frame dropped ({err}), action {action:?}");
        AppControl::Continue
    }
}

/// Standalone clear pass so the scene pass can load existing contents.
fn clear_pass(encoder: &mut wgpu::CommandEncoder, view: &wgpu::TextureView, color: Color) {
    let _pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some("easel clear"),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(wgpu::Color {
                    r: color.r as f64,
                    g: color.g as f64,
                    b: color.b as f64,
                    a: color.a as f64,
                }),
                store: wgpu::StoreOp::Store,
            },
            depth_slice: None,
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
        multiview_mask: None,
    });
}
