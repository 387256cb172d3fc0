//! Typed input events.
//!
//! An [`Event`] is one discrete input occurrence. The variant fixes the
//! kind, and the payload can only be filled together with the action by
//! crate-internal constructors, so a record never carries the wrong
//! payload for its kind.

/// Coarse classification of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EventKind {
    /// Pointer input.
    Mouse,
    /// Keyboard input.
    Keyboard,
    /// Broadcast system notification.
    System,
    /// Not yet classified.
    #[default]
    Unknown,
}

/// What happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EventAction {
    /// Left mouse button pressed.
    LButtonDown,
    /// Left mouse button released.
    LButtonRelease,
    /// Left mouse button double click.
    LButtonDoubleClick,
    /// Right mouse button pressed.
    RButtonDown,
    /// Right mouse button released.
    RButtonRelease,
    /// Right mouse button double click.
    RButtonDoubleClick,
    /// Cursor moved.
    CursorMove,
    /// Cursor came to rest over a widget.
    CursorDock,
    /// Cursor left a widget.
    CursorLeave,
    /// Key pressed.
    KeyPress,
    /// Key released.
    KeyRelease,
    /// Surface size changed.
    WindowResize,
    /// Unrecognized input.
    #[default]
    Unknown,
}

impl EventAction {
    /// Returns true for mouse button transitions.
    #[must_use]
    pub const fn is_mouse_button(self) -> bool {
        matches!(
            self,
            Self::LButtonDown
                | Self::LButtonRelease
                | Self::LButtonDoubleClick
                | Self::RButtonDown
                | Self::RButtonRelease
                | Self::RButtonDoubleClick
        )
    }

    /// Returns true for key transitions.
    #[must_use]
    pub const fn is_key(self) -> bool {
        matches!(self, Self::KeyPress | Self::KeyRelease)
    }
}

/// Pointer event payload.
///
/// Coordinates are in the engine's bottom-up convention: `y == 0` is the
/// bottom edge of the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MouseEvent {
    action: EventAction,
    x: i32,
    y: i32,
    /// Reserved for the scroll wheel.
    z: i32,
}

impl MouseEvent {
    /// Creates an empty mouse event at the origin with an unknown action.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            action: EventAction::Unknown,
            x: 0,
            y: 0,
            z: 0,
        }
    }

    pub(crate) const fn with_action(action: EventAction, x: i32, y: i32) -> Self {
        Self { action, x, y, z: 0 }
    }

    /// Returns the action.
    #[inline]
    #[must_use]
    pub const fn action(&self) -> EventAction {
        self.action
    }

    /// Returns the cursor X position.
    #[inline]
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Returns the cursor Y position (bottom-up).
    #[inline]
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Returns the wheel position.
    #[inline]
    #[must_use]
    pub const fn z(&self) -> i32 {
        self.z
    }
}

/// Keyboard event payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyEvent {
    action: EventAction,
    key_code: u32,
}

impl KeyEvent {
    /// Creates an empty key event with an unknown action.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            action: EventAction::Unknown,
            key_code: 0,
        }
    }

    pub(crate) const fn with_action(action: EventAction, key_code: u32) -> Self {
        Self { action, key_code }
    }

    /// Returns the action.
    #[inline]
    #[must_use]
    pub const fn action(&self) -> EventAction {
        self.action
    }

    /// Returns the host key code.
    #[inline]
    #[must_use]
    pub const fn key_code(&self) -> u32 {
        self.key_code
    }
}

/// Broadcast system event. Carries no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SystemEvent {
    action: EventAction,
}

impl SystemEvent {
    /// Creates an empty system event with an unknown action.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            action: EventAction::Unknown,
        }
    }

    // No producer emits system events yet; tests build them directly
    #[cfg(test)]
    pub(crate) const fn with_action(action: EventAction) -> Self {
        Self { action }
    }

    /// Returns the action.
    #[inline]
    #[must_use]
    pub const fn action(&self) -> EventAction {
        self.action
    }
}

/// One input occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Pointer input.
    Mouse(MouseEvent),
    /// Keyboard input.
    Keyboard(KeyEvent),
    /// System broadcast.
    System(SystemEvent),
}

impl Event {
    /// Returns the kind, fixed by the variant.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Mouse(_) => EventKind::Mouse,
            Self::Keyboard(_) => EventKind::Keyboard,
            Self::System(_) => EventKind::System,
        }
    }

    /// Returns the action.
    #[inline]
    #[must_use]
    pub const fn action(&self) -> EventAction {
        match self {
            Self::Mouse(mouse) => mouse.action(),
            Self::Keyboard(key) => key.action(),
            Self::System(system) => system.action(),
        }
    }
}

impl From<MouseEvent> for Event {
    fn from(event: MouseEvent) -> Self {
        Self::Mouse(event)
    }
}

impl From<KeyEvent> for Event {
    fn from(event: KeyEvent) -> Self {
        Self::Keyboard(event)
    }
}

impl From<SystemEvent> for Event {
    fn from(event: SystemEvent) -> Self {
        Self::System(event)
    }
}
