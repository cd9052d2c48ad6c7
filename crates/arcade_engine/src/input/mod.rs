//! Input management
//!
//! Backends poll the platform once per frame and hand the game an
//! [`InputState`] snapshot. Games only ask "is this key held right now";
//! there is no event queue.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Input snapshot for one frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    held: HashSet<KeyCode>,
    close_requested: bool,
}

impl InputState {
    /// Create an empty snapshot (nothing held, no close request)
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot with the given keys held
    pub fn with_keys(keys: impl IntoIterator<Item = KeyCode>) -> Self {
        Self {
            held: keys.into_iter().collect(),
            close_requested: false,
        }
    }

    /// Record a key as held or released
    pub fn set_key(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            self.held.insert(key);
        } else {
            self.held.remove(&key);
        }
    }

    /// Whether `key` is held
    pub fn is_down(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Whether any of `keys` is held
    pub fn any_down(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|key| self.is_down(*key))
    }

    /// Flag that the window asked to close
    pub fn request_close(&mut self) {
        self.close_requested = true;
    }

    /// Whether the window asked to close this frame
    pub fn close_requested(&self) -> bool {
        self.close_requested
    }
}

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    /// A key
    A,
    /// D key
    D,
    /// S key
    S,
    /// W key
    W,
    /// Space key
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
}

impl KeyCode {
    /// Every key the engine tracks
    pub const ALL: [KeyCode; 11] = [
        KeyCode::A,
        KeyCode::D,
        KeyCode::S,
        KeyCode::W,
        KeyCode::Space,
        KeyCode::Enter,
        KeyCode::Escape,
        KeyCode::Up,
        KeyCode::Down,
        KeyCode::Left,
        KeyCode::Right,
    ];
}
