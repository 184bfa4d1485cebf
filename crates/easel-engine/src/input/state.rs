use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{
    InputEvent,
    Key,
    KeyState,
    Modifiers,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};

/// Live input state for the canvas window.
///
/// Answers "what is held right now": the modifier set, focus, the pointer
/// position, and the key/button down-sets. Transitions go to the per-frame
/// `InputFrame`; this type keeps only the current picture.
#[derive(Debug, Default)]
pub struct InputState {
    /// Modifier keys currently held.
    pub modifiers: Modifiers,

    /// True while the window has keyboard focus.
    pub focused: bool,

    /// Last reported pointer position in logical pixels, `None` once the
    /// pointer leaves the window.
    pub pointer_pos: Option<(f32, f32)>,

    /// Keys currently held down.
    pub keys_down: HashSet<Key>,

    /// Buttons currently held down.
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Folds one translated event into the live state and records it, with
    /// its transitions, into `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((*x, *y));
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::PointerButton(PointerButtonEvent { button, state, x, y, modifiers }) => {
                self.pointer_pos = Some((*x, *y));
                self.modifiers = *modifiers;

                match state {
                    MouseButtonState::Pressed => {
                        if self.buttons_down.insert(*button) {
                            frame.buttons_pressed.insert(*button);
                        }
                    }
                    MouseButtonState::Released => {
                        if self.buttons_down.remove(button) {
                            frame.buttons_released.insert(*button);
                        }
                    }
                }
            }

            InputEvent::Key { key, state, modifiers, .. } => {
                self.modifiers = *modifiers;

                match state {
                    KeyState::Pressed => {
                        if self.keys_down.insert(*key) {
                            frame.keys_pressed.insert(*key);
                        }
                    }
                    KeyState::Released => {
                        if self.keys_down.remove(key) {
                            frame.keys_released.insert(*key);
                        }
                    }
                }
            }

            InputEvent::ModifiersChanged(m) => {
                self.modifiers = *m;
            }

            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Releases stop being delivered while unfocused, so the
                    // down-sets would otherwise hold phantom keys and buttons.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
            }
        }

        frame.record(ev);
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, state: KeyState, repeat: bool) -> InputEvent {
        InputEvent::Key {
            key,
            state,
            modifiers: Modifiers::default(),
            code: 0,
            repeat,
        }
    }

    fn button(button: MouseButton, state: MouseButtonState) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button,
            state,
            x: 10.0,
            y: 20.0,
            modifiers: Modifiers::default(),
        })
    }

    #[test]
    fn press_release_pairs_maintain_the_held_sets() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::Z, KeyState::Pressed, false));
        state.apply_event(&mut frame, button(MouseButton::Left, MouseButtonState::Pressed));
        assert!(state.key_down(Key::Z));
        assert!(state.button_down(MouseButton::Left));
        assert!(frame.keys_pressed.contains(&Key::Z));
        assert!(frame.buttons_pressed.contains(&MouseButton::Left));

        state.apply_event(&mut frame, key(Key::Z, KeyState::Released, false));
        state.apply_event(&mut frame, button(MouseButton::Left, MouseButtonState::Released));
        assert!(!state.key_down(Key::Z));
        assert!(!state.button_down(MouseButton::Left));
        assert!(frame.keys_released.contains(&Key::Z));
        assert!(frame.buttons_released.contains(&MouseButton::Left));
    }

    #[test]
    fn key_repeats_do_not_retrigger_pressed() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::Equals, KeyState::Pressed, false));
        frame.clear();

        // Held key delivers repeat presses; they must not count as new.
        state.apply_event(&mut frame, key(Key::Equals, KeyState::Pressed, true));
        assert!(state.key_down(Key::Equals));
        assert!(!frame.keys_pressed.contains(&Key::Equals));
    }

    #[test]
    fn focus_loss_clears_both_held_sets() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::Shift, KeyState::Pressed, false));
        state.apply_event(&mut frame, button(MouseButton::Left, MouseButtonState::Pressed));

        state.apply_event(&mut frame, InputEvent::Focused(false));
        assert!(!state.focused);
        assert!(state.keys_down.is_empty());
        assert!(state.buttons_down.is_empty());

        // A release arriving after the clear stays a no-op.
        state.apply_event(&mut frame, key(Key::Shift, KeyState::Released, false));
        assert!(state.keys_down.is_empty());
    }

    #[test]
    fn pointer_position_tracks_moves_and_leaves() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(
            &mut frame,
            InputEvent::PointerMoved(PointerMoveEvent { x: 3.0, y: 4.0 }),
        );
        assert_eq!(state.pointer_pos, Some((3.0, 4.0)));

        state.apply_event(&mut frame, InputEvent::PointerLeft);
        assert_eq!(state.pointer_pos, None);
    }

    #[test]
    fn events_keep_arrival_order() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, button(MouseButton::Left, MouseButtonState::Pressed));
        state.apply_event(
            &mut frame,
            InputEvent::PointerMoved(PointerMoveEvent { x: 1.0, y: 1.0 }),
        );
        state.apply_event(&mut frame, button(MouseButton::Left, MouseButtonState::Released));

        assert_eq!(frame.events.len(), 3);
        assert!(matches!(frame.events[0], InputEvent::PointerButton(_)));
        assert!(matches!(frame.events[1], InputEvent::PointerMoved(_)));
        assert!(matches!(frame.events[2], InputEvent::PointerButton(_)));
    }
}
