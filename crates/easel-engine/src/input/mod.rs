//! Input translated away from the window system.
//!
//! The runtime converts winit events into `InputEvent`s; everything above
//! the window layer consumes only these types. `InputState` tracks what is
//! held, `InputFrame` carries one frame's worth of events and transitions.

mod frame;
mod state;
mod types;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{
    InputEvent,
    Key,
    KeyState,
    Modifiers,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};
