//! Input snapshot
//!
//! Keyboard and mouse are polled once per frame from macroquad and reduced
//! to the two actions scenes care about. Scenes only ever see the snapshot,
//! so they can be driven by hand in tests.

use macroquad::prelude::{is_key_pressed, is_mouse_button_pressed, KeyCode, MouseButton};

/// Actions pressed this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    /// Enter, Space or left click
    pub confirm: bool,
    /// Escape
    pub back: bool,
}

impl InputState {
    /// Read this frame's presses from macroquad
    pub fn poll() -> Self {
        Self {
            confirm: is_key_pressed(KeyCode::Enter)
                || is_key_pressed(KeyCode::KpEnter)
                || is_key_pressed(KeyCode::Space)
                || is_mouse_button_pressed(MouseButton::Left),
            back: is_key_pressed(KeyCode::Escape),
        }
    }

    /// Presses from either snapshot
    pub fn merge(self, other: Self) -> Self {
        Self {
            confirm: self.confirm || other.confirm,
            back: self.back || other.back,
        }
    }

    /// Snapshot with confirm pressed
    pub fn confirm() -> Self {
        Self { confirm: true, ..Self::default() }
    }

    /// Snapshot with back pressed
    pub fn back() -> Self {
        Self { back: true, ..Self::default() }
    }
}
