//! Terminal-independent input events and key-hold tracking.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// How long a movement key stays "held" after its last press/repeat on
/// terminals that never report key releases. The OS key-repeat rate is
/// well above 7 Hz, so a held key refreshes before it expires.
pub const HOLD_WINDOW: Duration = Duration::from_millis(150);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Fire,
    Start,
    Quit,
}

impl Key {
    pub fn is_movement(self) -> bool {
        matches!(self, Key::Left | Key::Right | Key::Up | Key::Down)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    /// Pointer click, already mapped to world coordinates.
    Click { x: f64, y: f64 },
    Quit,
}

/// Turns raw press/repeat/release notifications into clean key-down and
/// key-up events.
///
/// With `hold_window == None` the terminal reports releases and keys stay
/// down until released. Otherwise a movement key that goes quiet for longer
/// than the window gets a synthesized key-up from [`KeyHold::expire`].
#[derive(Debug)]
pub struct KeyHold {
    held: HashMap<Key, Instant>,
    hold_window: Option<Duration>,
}

impl KeyHold {
    pub fn new(hold_window: Option<Duration>) -> Self {
        KeyHold {
            held: HashMap::new(),
            hold_window,
        }
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains_key(&key)
    }

    /// A press or repeat. Movement keys emit key-down only on the first
    /// press; action keys emit on every press.
    pub fn press(&mut self, key: Key, now: Instant) -> Option<InputEvent> {
        if !key.is_movement() {
            return Some(InputEvent::KeyDown(key));
        }
        match self.held.insert(key, now) {
            None => Some(InputEvent::KeyDown(key)),
            Some(_) => None,
        }
    }

    /// Refresh a held key without emitting anything.
    pub fn repeat(&mut self, key: Key, now: Instant) {
        if let Some(last) = self.held.get_mut(&key) {
            *last = now;
        }
    }

    pub fn release(&mut self, key: Key) -> Option<InputEvent> {
        self.held.remove(&key).map(|_| InputEvent::KeyUp(key))
    }

    /// Key-ups for every movement key that has gone quiet.
    pub fn expire(&mut self, now: Instant) -> Vec<InputEvent> {
        let Some(window) = self.hold_window else {
            return Vec::new();
        };
        let mut stale: Vec<Key> = self
            .held
            .iter()
            .filter(|(_, last)| now.saturating_duration_since(**last) > window)
            .map(|(&key, _)| key)
            .collect();
        // HashMap order is arbitrary; keep the output stable.
        stale.sort_by_key(|key| *key as u8);
        stale
            .into_iter()
            .filter_map(|key| self.release(key))
            .collect()
    }
}
