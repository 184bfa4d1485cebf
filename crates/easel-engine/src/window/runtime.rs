use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::core::{App as CoreApp, AppControl, FrameCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::{
    InputEvent, InputFrame, InputState, Key, KeyState, Modifiers, MouseButton, MouseButtonState,
    PointerButtonEvent, PointerMoveEvent,
};
use crate::time::FrameClock;

/// Initial window parameters for a runtime session.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "easel".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
        }
    }
}

/// Owns the event loop and the one canvas window.
///
/// The window appears on `resumed`, keeps its GPU surface for the whole
/// session, and takes the process down with it when it closes.
pub struct Runtime;

impl Runtime {
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut handler = Handler::new(config, gpu_init, app);

        event_loop
            .run_app(&mut handler)
            .context("winit event loop terminated with error")?;

        Ok(())
    }
}

// The surface inside Gpu borrows the window, so both live in one
// self-referencing cell, with the per-window input and timing beside them.
#[self_referencing]
struct CanvasWindow {
    input: InputState,
    deltas: InputFrame,
    clock: FrameClock,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct Handler<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    canvas: Option<CanvasWindow>,
    exit_requested: bool,
}

impl<A> Handler<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            canvas: None,
            exit_requested: false,
        }
    }

    fn open_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);
        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();

        // try_build surfaces a GPU bring-up failure as a Result instead of
        // a panic inside the builder closure.
        let canvas = CanvasWindowTryBuilder {
            input: InputState::default(),
            deltas: InputFrame::default(),
            clock: FrameClock::default(),
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .context("GPU initialization failed")?;

        canvas.with_window(|w| w.request_redraw());
        self.canvas = Some(canvas);
        Ok(())
    }

    fn resize_surface(&mut self, new_size: PhysicalSize<u32>) {
        if let Some(canvas) = self.canvas.as_mut() {
            canvas.with_gpu_mut(|gpu| gpu.resize(new_size));
            canvas.with_window(|w| w.request_redraw());
        }
    }

    /// Runs one frame. Returns true when the session should end.
    fn drive_frame(&mut self, window_id: WindowId) -> bool {
        let mut control = AppControl::Continue;

        let (app, canvas) = (&mut self.app, &mut self.canvas);
        if let Some(canvas) = canvas.as_mut() {
            canvas.with_mut(|fields| {
                let time = fields.clock.tick();

                // ctx ends here so the frame deltas can be cleared below.
                {
                    let mut ctx = FrameCtx {
                        window: WindowCtx {
                            id: window_id,
                            window: fields.window,
                        },
                        gpu: fields.gpu,
                        input: fields.input,
                        input_frame: fields.deltas,
                        time,
                    };

                    control = app.on_frame(&mut ctx);
                }

                fields.deltas.clear();
            });
        }

        control == AppControl::Exit
    }
}

impl<A> ApplicationHandler for Handler<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.canvas.is_some() {
            return;
        }

        if let Err(e) = self.open_window(event_loop) {
            log::error!("could not open the canvas window: {e:#}");
            self.exit_requested = true;
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Redraw every pass through the loop; FIFO presentation paces it.
        if let Some(canvas) = &self.canvas {
            canvas.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        // Borrows split up front; ouroboros closures must not capture self.
        let (app, canvas) = (&mut self.app, &mut self.canvas);
        let Some(canvas) = canvas.as_mut() else {
            return;
        };
        if canvas.with_window(|w| w.id()) != window_id {
            return;
        }

        let mut app_wants_exit = false;
        canvas.with_mut(|fields| {
            if let Some(ev) = to_input_event(fields.window, fields.input, &event) {
                fields.input.apply_event(fields.deltas, ev);
            }

            if app.on_window_event(window_id, &event) == AppControl::Exit {
                app_wants_exit = true;
            }
        });
        if app_wants_exit {
            self.exit_requested = true;
            event_loop.exit();
            return;
        }

        match &event {
            WindowEvent::CloseRequested => {
                self.canvas = None;
                self.exit_requested = true;
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => self.resize_surface(*new_size),

            // Reapply the current physical size under the new scale factor.
            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = self
                    .canvas
                    .as_ref()
                    .map(|c| c.with_window(|w| w.inner_size()));
                if let Some(new_size) = new_size {
                    self.resize_surface(new_size);
                }
            }

            WindowEvent::RedrawRequested => {
                if self.drive_frame(window_id) {
                    self.exit_requested = true;
                    event_loop.exit();
                }
            }

            _ => {}
        }

        if self.exit_requested {
            event_loop.exit();
        }
    }
}

fn to_input_event(window: &Window, input: &InputState, event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::ModifiersChanged(m) => {
            let state = m.state();
            Some(InputEvent::ModifiersChanged(Modifiers {
                shift: state.shift_key(),
                ctrl: state.control_key(),
                alt: state.alt_key(),
                meta: state.super_key(),
            }))
        }

        WindowEvent::Focused(focused) => Some(InputEvent::Focused(*focused)),

        WindowEvent::CursorLeft { .. } => Some(InputEvent::PointerLeft),

        WindowEvent::CursorMoved { position, .. } => {
            let pos: winit::dpi::LogicalPosition<f32> =
                position.to_logical(window.scale_factor());
            Some(InputEvent::PointerMoved(PointerMoveEvent { x: pos.x, y: pos.y }))
        }

        WindowEvent::MouseInput { state, button, .. } => {
            // Button events carry no position; attach the last known one.
            let (x, y) = input.pointer_pos.unwrap_or_default();

            Some(InputEvent::PointerButton(PointerButtonEvent {
                button: map_button(*button),
                state: match state {
                    ElementState::Pressed => MouseButtonState::Pressed,
                    ElementState::Released => MouseButtonState::Released,
                },
                x,
                y,
                modifiers: input.modifiers,
            }))
        }

        WindowEvent::KeyboardInput { event: key_event, .. } => {
            let (key, code) = match key_event.physical_key {
                PhysicalKey::Code(code) => (map_key(code), code as u32),
                // Unidentified native codes have no stable numeric form here.
                PhysicalKey::Unidentified(_) => (Key::Unknown(0), 0),
            };

            Some(InputEvent::Key {
                key,
                state: match key_event.state {
                    ElementState::Pressed => KeyState::Pressed,
                    ElementState::Released => KeyState::Released,
                },
                modifiers: input.modifiers,
                code,
                repeat: key_event.repeat,
            })
        }

        _ => None,
    }
}

fn map_button(button: WinitMouseButton) -> MouseButton {
    match button {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Back,
        WinitMouseButton::Forward => MouseButton::Forward,
        WinitMouseButton::Other(v) => MouseButton::Other(v),
    }
}

fn map_key(code: KeyCode) -> Key {
    match code {
        KeyCode::Escape => Key::Escape,
        KeyCode::Enter => Key::Enter,
        KeyCode::Tab => Key::Tab,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Space => Key::Space,

        KeyCode::ArrowUp => Key::ArrowUp,
        KeyCode::ArrowDown => Key::ArrowDown,
        KeyCode::ArrowLeft => Key::ArrowLeft,
        KeyCode::ArrowRight => Key::ArrowRight,

        KeyCode::ShiftLeft | KeyCode::ShiftRight => Key::Shift,
        KeyCode::ControlLeft | KeyCode::ControlRight => Key::Control,
        KeyCode::AltLeft | KeyCode::AltRight => Key::Alt,
        KeyCode::SuperLeft | KeyCode::SuperRight => Key::Meta,

        KeyCode::KeyA => Key::A,
        KeyCode::KeyB => Key::B,
        KeyCode::KeyC => Key::C,
        KeyCode::KeyD => Key::D,
        KeyCode::KeyE => Key::E,
        KeyCode::KeyF => Key::F,
        KeyCode::KeyG => Key::G,
        KeyCode::KeyH => Key::H,
        KeyCode::KeyI => Key::I,
        KeyCode::KeyJ => Key::J,
        KeyCode::KeyK => Key::K,
        KeyCode::KeyL => Key::L,
        KeyCode::KeyM => Key::M,
        KeyCode::KeyN => Key::N,
        KeyCode::KeyO => Key::O,
        KeyCode::KeyP => Key::P,
        KeyCode::KeyQ => Key::Q,
        KeyCode::KeyR => Key::R,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyT => Key::T,
        KeyCode::KeyU => Key::U,
        KeyCode::KeyV => Key::V,
        KeyCode::KeyW => Key::W,
        KeyCode::KeyX => Key::X,
        KeyCode::KeyY => Key::Y,
        KeyCode::KeyZ => Key::Z,

        KeyCode::Digit0 => Key::Digit0,
        KeyCode::Digit1 => Key::Digit1,
        KeyCode::Digit2 => Key::Digit2,
        KeyCode::Digit3 => Key::Digit3,
        KeyCode::Digit4 => Key::Digit4,
        KeyCode::Digit5 => Key::Digit5,
        KeyCode::Digit6 => Key::Digit6,
        KeyCode::Digit7 => Key::Digit7,
        KeyCode::Digit8 => Key::Digit8,
        KeyCode::Digit9 => Key::Digit9,

        KeyCode::Minus => Key::Minus,
        KeyCode::Equal => Key::Equals,
        KeyCode::BracketLeft => Key::BracketLeft,
        KeyCode::BracketRight => Key::BracketRight,

        other => Key::Unknown(other as u32),
    }
}
