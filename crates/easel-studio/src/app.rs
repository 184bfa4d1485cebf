//! The interactive canvas application.
//!
//! Owns the brush, the scene, and the renderer, and turns runtime input
//! events into canvas edits. All editing logic lives here, behind
//! [`Studio::handle_event`], so it is testable without opening a window.

use easel_canvas::brush::{Brush, ShapeKind};
use easel_canvas::coords::SurfaceBounds;
use easel_canvas::paint::Color;
use easel_canvas::picture;
use easel_canvas::scene::Scene;

use easel_engine::core::{App, AppControl, FrameCtx};
use easel_engine::input::{InputEvent, Key, KeyState, MouseButton, MouseButtonState};
use easel_engine::render::SceneRenderer;

// Stepper bounds. Sizes are logical pixels.
const SIZE_MIN: f32 = 1.0;
const SIZE_MAX: f32 = 100.0;
const SEGMENTS_MIN: u32 = 3;
const SEGMENTS_MAX: u32 = 64;

// ── Actions ───────────────────────────────────────────────────────────────

/// One-shot keyboard command.
#[derive(Debug, Copy, Clone, PartialEq)]
enum Action {
    SelectKind(ShapeKind),
    SetColor(Color),
    AdjustSize(f32),
    AdjustSegments(i32),
    Undo,
    Clear,
    StampPicture,
    Exit,
}

fn action_for(key: Key) -> Option<Action> {
    match key {
        Key::Digit1 => Some(Action::SelectKind(ShapeKind::Point)),
        Key::Digit2 => Some(Action::SelectKind(ShapeKind::Triangle)),
        Key::Digit3 => Some(Action::SelectKind(ShapeKind::Circle)),

        Key::R => Some(Action::SetColor(Color::red())),
        Key::G => Some(Action::SetColor(Color::green())),
        Key::W => Some(Action::SetColor(Color::white())),

        Key::Minus => Some(Action::AdjustSize(-1.0)),
        Key::Equals => Some(Action::AdjustSize(1.0)),

        Key::BracketLeft => Some(Action::AdjustSegments(-1)),
        Key::BracketRight => Some(Action::AdjustSegments(1)),

        Key::Z => Some(Action::Undo),
        Key::C => Some(Action::Clear),
        Key::Space => Some(Action::StampPicture),
        Key::Escape => Some(Action::Exit),

        _ => None,
    }
}

// ── Studio ────────────────────────────────────────────────────────────────

/// Application state driving the canvas window.
pub struct Studio {
    brush:    Brush,
    scene:    Scene,
    renderer: SceneRenderer,

    /// Preview modifier currently held. Tracked from `ModifiersChanged` so
    /// the falling edge can discard the preview.
    shift: bool,
    /// Left button held; pointer moves paint while true.
    left_down: bool,
}

impl Studio {
    pub fn new() -> Self {
        Self {
            brush:     Brush::default(),
            scene:     Scene::new(),
            renderer:  SceneRenderer::new(),
            shift:     false,
            left_down: false,
        }
    }

    /// Applies one input event to the canvas state.
    ///
    /// Events arrive in order within a frame, so modifier changes seen here
    /// are already in effect for the pointer events that follow them.
    fn handle_event(&mut self, bounds: SurfaceBounds, event: &InputEvent) -> AppControl {
        match event {
            InputEvent::Key {
                key,
                state: KeyState::Pressed,
                repeat: false,
                ..
            } => {
                if let Some(action) = action_for(*key) {
                    return self.apply(action);
                }
            }

            InputEvent::ModifiersChanged(m) => {
                // Releasing the preview modifier discards the preview.
                if self.shift && !m.shift {
                    self.scene.clear_preview();
                }
                self.shift = m.shift;
            }

            InputEvent::PointerButton(ev) if ev.button == MouseButton::Left => match ev.state {
                MouseButtonState::Pressed => {
                    self.left_down = true;
                    self.paint_at(bounds, ev.x, ev.y);
                }
                MouseButtonState::Released => self.left_down = false,
            },

            InputEvent::PointerMoved(ev) => {
                if self.left_down {
                    self.paint_at(bounds, ev.x, ev.y);
                }
            }

            InputEvent::Focused(false) => {
                // Release events stop arriving once focus is gone; end the
                // stroke and drop any preview.
                self.left_down = false;
                self.shift = false;
                self.scene.clear_preview();
            }

            _ => {}
        }

        AppControl::Continue
    }

    /// Stamps (or, with the preview modifier held, previews) the brush at a
    /// pointer position in logical pixels.
    fn paint_at(&mut self, bounds: SurfaceBounds, x: f32, y: f32) {
        let shape = self.brush.stamp(bounds.to_ndc(x, y));
        if self.shift {
            self.scene.set_preview(shape);
        } else {
            self.scene.push(shape);
        }
    }

    fn apply(&mut self, action: Action) -> AppControl {
        match action {
            Action::SelectKind(kind) => {
                self.brush.kind = kind;
                log::info!("brush shape: {kind:?}");
            }

            Action::SetColor(color) => {
                self.brush.color = color;
                log::info!(
                    "brush color: ({:.1}, {:.1}, {:.1})",
                    color.r,
                    color.g,
                    color.b
                );
            }

            Action::AdjustSize(delta) => {
                self.brush.size = (self.brush.size + delta).clamp(SIZE_MIN, SIZE_MAX);
                log::info!("brush size: {} px", self.brush.size);
            }

            Action::AdjustSegments(delta) => {
                self.brush.circle_segments = self
                    .brush
                    .circle_segments
                    .saturating_add_signed(delta)
                    .clamp(SEGMENTS_MIN, SEGMENTS_MAX);
                log::info!("circle segments: {}", self.brush.circle_segments);
            }

            Action::Undo => match self.scene.pop() {
                Some(_) => log::info!("undo ({} shapes left)", self.scene.len()),
                None => log::info!("undo: canvas already empty"),
            },

            Action::Clear => {
                self.scene.clear();
                log::info!("canvas cleared");
            }

            Action::StampPicture => {
                self.scene.extend(picture::generate());
                log::info!("picture stamped ({} triangles)", picture::TRIANGLE_COUNT);
            }

            Action::Exit => return AppControl::Exit,
        }

        AppControl::Continue
    }
}

impl Default for Studio {
    fn default() -> Self {
        Self::new()
    }
}

impl App for Studio {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let (w, h) = ctx.window.logical_size();
        let bounds = SurfaceBounds::from_size(w.max(1.0), h.max(1.0));

        for event in &ctx.input_frame.events {
            if self.handle_event(bounds, event) == AppControl::Exit {
                return AppControl::Exit;
            }
        }

        let renderer = &mut self.renderer;
        let scene = &self.scene;
        ctx.render(Color::black(), |rctx, target| {
            renderer.render(rctx, target, scene);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_canvas::coords::Vec2;
    use easel_canvas::scene::Shape;
    use easel_engine::input::{Modifiers, PointerButtonEvent, PointerMoveEvent};

    const BOUNDS: SurfaceBounds = SurfaceBounds::from_size(400.0, 400.0);

    fn feed(studio: &mut Studio, event: InputEvent) -> AppControl {
        studio.handle_event(BOUNDS, &event)
    }

    fn press(key: Key) -> InputEvent {
        InputEvent::Key {
            key,
            state: KeyState::Pressed,
            modifiers: Modifiers::default(),
            code: 0,
            repeat: false,
        }
    }

    fn repeat(key: Key) -> InputEvent {
        InputEvent::Key {
            key,
            state: KeyState::Pressed,
            modifiers: Modifiers::default(),
            code: 0,
            repeat: true,
        }
    }

    fn left(state: MouseButtonState, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state,
            x,
            y,
            modifiers: Modifiers::default(),
        })
    }

    fn moved(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerMoved(PointerMoveEvent { x, y })
    }

    fn shift(held: bool) -> InputEvent {
        InputEvent::ModifiersChanged(Modifiers {
            shift: held,
            ..Modifiers::default()
        })
    }

    fn point_pos(shape: &Shape) -> Vec2 {
        match shape {
            Shape::Point(p) => p.position,
            other => panic!("expected a point, got {other:?}"),
        }
    }

    // ── keyboard commands ─────────────────────────────────────────────────

    #[test]
    fn number_keys_select_the_brush_kind() {
        let mut studio = Studio::new();

        feed(&mut studio, press(Key::Digit2));
        assert_eq!(studio.brush.kind, ShapeKind::Triangle);

        feed(&mut studio, press(Key::Digit3));
        assert_eq!(studio.brush.kind, ShapeKind::Circle);

        feed(&mut studio, press(Key::Digit1));
        assert_eq!(studio.brush.kind, ShapeKind::Point);
    }

    #[test]
    fn color_keys_set_the_brush_color() {
        let mut studio = Studio::new();

        feed(&mut studio, press(Key::R));
        assert_eq!(studio.brush.color, Color::red());
        feed(&mut studio, press(Key::G));
        assert_eq!(studio.brush.color, Color::green());
        feed(&mut studio, press(Key::W));
        assert_eq!(studio.brush.color, Color::white());
    }

    #[test]
    fn size_stepper_clamps_at_both_ends() {
        let mut studio = Studio::new();

        for _ in 0..10 {
            feed(&mut studio, press(Key::Minus));
        }
        assert_eq!(studio.brush.size, SIZE_MIN);

        studio.brush.size = 99.0;
        feed(&mut studio, press(Key::Equals));
        feed(&mut studio, press(Key::Equals));
        assert_eq!(studio.brush.size, SIZE_MAX);
    }

    #[test]
    fn segment_stepper_clamps_at_both_ends() {
        let mut studio = Studio::new();

        for _ in 0..5 {
            feed(&mut studio, press(Key::BracketLeft));
        }
        assert_eq!(studio.brush.circle_segments, SEGMENTS_MIN);

        studio.brush.circle_segments = 63;
        feed(&mut studio, press(Key::BracketRight));
        feed(&mut studio, press(Key::BracketRight));
        assert_eq!(studio.brush.circle_segments, SEGMENTS_MAX);
    }

    #[test]
    fn undo_removes_only_the_newest_shape() {
        let mut studio = Studio::new();
        feed(&mut studio, left(MouseButtonState::Pressed, 100.0, 100.0));
        feed(&mut studio, left(MouseButtonState::Released, 100.0, 100.0));
        feed(&mut studio, left(MouseButtonState::Pressed, 300.0, 300.0));
        feed(&mut studio, left(MouseButtonState::Released, 300.0, 300.0));

        feed(&mut studio, press(Key::Z));
        assert_eq!(studio.scene.len(), 1);
        assert_eq!(
            point_pos(&studio.scene.shapes()[0]),
            BOUNDS.to_ndc(100.0, 100.0)
        );

        feed(&mut studio, press(Key::Z));
        assert!(studio.scene.is_empty());

        // Undo on an empty canvas is a no-op.
        assert_eq!(feed(&mut studio, press(Key::Z)), AppControl::Continue);
        assert!(studio.scene.is_empty());
    }

    #[test]
    fn clear_empties_the_canvas() {
        let mut studio = Studio::new();
        for x in [50.0, 150.0, 250.0] {
            feed(&mut studio, left(MouseButtonState::Pressed, x, 200.0));
            feed(&mut studio, left(MouseButtonState::Released, x, 200.0));
        }

        feed(&mut studio, press(Key::C));
        assert!(studio.scene.is_empty());
    }

    #[test]
    fn space_appends_the_picture_after_existing_shapes() {
        let mut studio = Studio::new();
        feed(&mut studio, left(MouseButtonState::Pressed, 200.0, 200.0));
        feed(&mut studio, left(MouseButtonState::Released, 200.0, 200.0));

        feed(&mut studio, press(Key::Space));
        assert_eq!(studio.scene.len(), 1 + picture::TRIANGLE_COUNT);

        // The click is still the oldest shape.
        assert!(matches!(studio.scene.shapes()[0], Shape::Point(_)));
        assert!(matches!(studio.scene.shapes()[1], Shape::Triangle(_)));
    }

    #[test]
    fn escape_requests_exit() {
        let mut studio = Studio::new();
        assert_eq!(feed(&mut studio, press(Key::Escape)), AppControl::Exit);
    }

    #[test]
    fn key_repeats_do_not_rerun_commands() {
        let mut studio = Studio::new();
        feed(&mut studio, press(Key::Space));
        feed(&mut studio, repeat(Key::Space));
        assert_eq!(studio.scene.len(), picture::TRIANGLE_COUNT);
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let mut studio = Studio::new();
        let before = studio.brush;
        assert_eq!(feed(&mut studio, press(Key::Q)), AppControl::Continue);
        assert_eq!(studio.brush, before);
        assert!(studio.scene.is_empty());
    }

    // ── pointer painting ──────────────────────────────────────────────────

    #[test]
    fn click_stamps_at_the_pointer_position() {
        let mut studio = Studio::new();
        feed(&mut studio, left(MouseButtonState::Pressed, 200.0, 200.0));

        assert_eq!(studio.scene.len(), 1);
        assert_eq!(point_pos(&studio.scene.shapes()[0]), Vec2::zero());
    }

    #[test]
    fn dragging_stamps_on_every_move() {
        let mut studio = Studio::new();
        feed(&mut studio, left(MouseButtonState::Pressed, 10.0, 10.0));
        feed(&mut studio, moved(20.0, 10.0));
        feed(&mut studio, moved(30.0, 10.0));
        feed(&mut studio, moved(40.0, 10.0));
        assert_eq!(studio.scene.len(), 4);

        feed(&mut studio, left(MouseButtonState::Released, 40.0, 10.0));
        feed(&mut studio, moved(50.0, 10.0));
        assert_eq!(studio.scene.len(), 4);
    }

    #[test]
    fn shift_previews_instead_of_stamping() {
        let mut studio = Studio::new();
        feed(&mut studio, shift(true));
        feed(&mut studio, left(MouseButtonState::Pressed, 100.0, 100.0));

        assert!(studio.scene.is_empty());
        let first = studio.scene.preview().cloned();
        assert!(first.is_some());

        // Moves replace the single preview slot.
        feed(&mut studio, moved(300.0, 300.0));
        assert!(studio.scene.is_empty());
        assert_ne!(studio.scene.preview().cloned(), first);

        // Releasing the modifier discards it.
        feed(&mut studio, shift(false));
        assert!(studio.scene.preview().is_none());
        assert!(studio.scene.is_empty());
    }

    #[test]
    fn releasing_shift_mid_drag_resumes_stamping() {
        let mut studio = Studio::new();
        feed(&mut studio, shift(true));
        feed(&mut studio, left(MouseButtonState::Pressed, 100.0, 100.0));
        feed(&mut studio, shift(false));

        feed(&mut studio, moved(120.0, 100.0));
        assert_eq!(studio.scene.len(), 1);
        assert!(studio.scene.preview().is_none());
    }

    #[test]
    fn focus_loss_cancels_the_stroke_and_preview() {
        let mut studio = Studio::new();
        feed(&mut studio, shift(true));
        feed(&mut studio, left(MouseButtonState::Pressed, 100.0, 100.0));
        assert!(studio.scene.preview().is_some());

        feed(&mut studio, InputEvent::Focused(false));
        assert!(studio.scene.preview().is_none());

        // The stroke ended with the focus; moves no longer paint.
        feed(&mut studio, moved(200.0, 200.0));
        assert!(studio.scene.is_empty());
    }

    #[test]
    fn right_button_does_not_paint() {
        let mut studio = Studio::new();
        feed(
            &mut studio,
            InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Right,
                state: MouseButtonState::Pressed,
                x: 200.0,
                y: 200.0,
                modifiers: Modifiers::default(),
            }),
        );
        assert!(studio.scene.is_empty());
    }
}
