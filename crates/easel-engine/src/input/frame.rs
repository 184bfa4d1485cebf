use std::collections::HashSet;

use super::types::{InputEvent, Key, MouseButton};

/// Input activity collected over one frame.
///
/// The runtime feeds events in as they arrive and the app reads them from
/// `on_frame`; `clear` runs after each frame so nothing is seen twice. The
/// ordered `events` list is the primary surface. The transition sets exist
/// for "did this happen at all" checks that do not care about ordering.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Every translated event, in delivery order.
    pub events: Vec<InputEvent>,

    /// Keys that went down this frame. Auto-repeats are excluded.
    pub keys_pressed: HashSet<Key>,
    /// Keys that came up this frame.
    pub keys_released: HashSet<Key>,

    /// Buttons that went down this frame.
    pub buttons_pressed: HashSet<MouseButton>,
    /// Buttons that came up this frame.
    pub buttons_released: HashSet<MouseButton>,
}

impl InputFrame {
    /// Appends an event to the ordered list.
    pub fn record(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }

    /// Drops everything collected for the finished frame.
    pub fn clear(&mut self) {
        self.events.clear();
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.buttons_pressed.clear();
        self.buttons_released.clear();
    }
}
