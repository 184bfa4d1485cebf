/// Window-system input, reduced to what the canvas runtime forwards.
///
/// The runtime translates winit events into these before they reach
/// application code, so nothing above the window layer names a platform
/// type. Each frame's events arrive in delivery order inside an
/// `InputFrame`.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// The held modifier set changed.
    ModifiersChanged(Modifiers),

    /// A keyboard key went down or came up.
    Key {
        key: Key,
        state: KeyState,
        modifiers: Modifiers,
        /// Hardware keycode when the platform reports one.
        code: u32,
        /// Set on auto-repeat presses of a held key.
        repeat: bool,
    },

    /// The pointer moved inside the window.
    PointerMoved(PointerMoveEvent),

    /// A pointer button went down or came up.
    PointerButton(PointerButtonEvent),

    /// The pointer left the window.
    PointerLeft,

    /// The window gained or lost keyboard focus.
    Focused(bool),
}

/// Physical key identity, independent of layout and platform.
///
/// Covers the bindings a brush-and-keyboard app needs plus enough spare
/// keys that a new binding does not have to touch the event layer. Keys
/// outside this set come through as `Unknown` with the raw keycode.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Backspace,
    Space,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Modifier keys also arrive as ordinary key transitions.
    Shift,
    Control,
    Alt,
    Meta,

    A, B, C, D, E, F, G, H, I,
    J, K, L, M, N, O, P, Q, R,
    S, T, U, V, W, X, Y, Z,

    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    // Number-row and bracket keys used by the stepper bindings.
    Minus,
    Equals,
    BracketLeft,
    BracketRight,

    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Pointer button identity.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MouseButtonState {
    Pressed,
    Released,
}

/// Snapshot of the held modifier keys.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// Pointer position in logical pixels, origin at the window's top-left.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerMoveEvent {
    pub x: f32,
    pub y: f32,
}

/// Button transition with the pointer position and modifiers at that moment.
///
/// Carrying position and modifiers on the event itself lets a consumer
/// replay a frame's events without consulting live state that has since
/// moved on.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerButtonEvent {
    pub button: MouseButton,
    pub state: MouseButtonState,
    pub x: f32,
    pub y: f32,
    pub modifiers: Modifiers,
}
