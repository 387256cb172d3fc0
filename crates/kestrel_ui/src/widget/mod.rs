//! Widget system for UI components.
//!
//! Widgets are created by the [`ControlsManager`](crate::ControlsManager)
//! and shared with the render registry.

mod button;
mod core;
mod static_text;

pub use self::button::{Button, ButtonStyle};
pub use self::core::{
    ActionHandler, ActionHandlers, ControlRegisters, FrameContext, Widget, WidgetId, WidgetState,
    WidgetStatus,
};
pub use self::static_text::{StaticText, TextStyle};

use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to a widget, as returned by the manager's factories.
pub type Shared<W> = Rc<RefCell<W>>;
