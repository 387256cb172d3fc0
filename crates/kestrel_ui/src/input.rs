//! Input vocabulary of the window layer.
//!
//! The host forwards raw window callbacks in these terms; the manager turns
//! them into queued [`Event`](crate::Event)s.

use crate::event::EventAction;

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button.
    Left,
    /// Right mouse button.
    Right,
    /// Middle mouse button (scroll wheel click).
    Middle,
}

impl MouseButton {
    /// Translates a GLFW button code. Codes past the middle button are not
    /// part of the vocabulary.
    #[must_use]
    pub const fn from_glfw(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Left),
            1 => Some(Self::Right),
            2 => Some(Self::Middle),
            _ => None,
        }
    }
}

/// Mouse button transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonAction {
    /// Button went down.
    Press,
    /// Button came up.
    Release,
}

impl ButtonAction {
    /// Translates a GLFW action code.
    #[must_use]
    pub const fn from_glfw(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Release),
            1 => Some(Self::Press),
            _ => None,
        }
    }
}

/// Keyboard transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Key went down.
    Press,
    /// Key came up.
    Release,
    /// Key is held and the platform repeats it.
    Repeat,
}

impl KeyAction {
    /// Translates a GLFW action code.
    #[must_use]
    pub const fn from_glfw(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Release),
            1 => Some(Self::Press),
            2 => Some(Self::Repeat),
            _ => None,
        }
    }

    /// Event action for this transition. Repeats count as presses.
    #[must_use]
    pub const fn event_action(self) -> EventAction {
        match self {
            Self::Press | Self::Repeat => EventAction::KeyPress,
            Self::Release => EventAction::KeyRelease,
        }
    }
}

/// Event action for a mouse button transition.
///
/// The middle button has no action of its own.
#[must_use]
pub const fn mouse_action(button: MouseButton, action: ButtonAction) -> EventAction {
    match (button, action) {
        (MouseButton::Left, ButtonAction::Press) => EventAction::LButtonDown,
        (MouseButton::Left, ButtonAction::Release) => EventAction::LButtonRelease,
        (MouseButton::Right, ButtonAction::Press) => EventAction::RButtonDown,
        (MouseButton::Right, ButtonAction::Release) => EventAction::RButtonRelease,
        (MouseButton::Middle, _) => EventAction::Unknown,
    }
}
