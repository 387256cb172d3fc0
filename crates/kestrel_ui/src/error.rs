//! # UI Error Types
//!
//! All recoverable errors of the widget core. Contract violations, such as
//! reading the front of an empty queue, panic instead.

use thiserror::Error;

use crate::event::EventAction;
use crate::widget::WidgetId;

/// Error returned by a user-supplied action handler.
pub type HandlerError = Box<dyn std::error::Error + 'static>;

/// Errors that can occur in the widget core.
#[derive(Error, Debug)]
pub enum UiError {
    /// A widget failed to initialize and was not registered.
    #[error("widget {widget:?} failed to initialize: {reason}")]
    InitFailed {
        /// The widget that failed.
        widget: WidgetId,
        /// Why it failed.
        reason: String,
    },

    /// The text metrics backend has no glyph for a character.
    #[error("no glyph available for {0:?}")]
    GlyphUnavailable(char),

    /// A button rectangle is empty or non-finite.
    #[error("invalid widget geometry: {width}x{height}")]
    InvalidGeometry {
        /// Requested width.
        width: f32,
        /// Requested height.
        height: f32,
    },

    /// Invalid configuration file.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// An action handler failed. Dispatch for the frame stops here.
    #[error("action handler for {action:?} failed: {source}")]
    Handler {
        /// The action being handled.
        action: EventAction,
        /// The handler's error.
        #[source]
        source: HandlerError,
    },
}

/// Result type for widget core operations.
pub type UiResult<T> = Result<T, UiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_error_keeps_source() {
        let err = UiError::Handler {
            action: EventAction::LButtonDown,
            source: "boom".into(),
        };

        assert_eq!(err.to_string(), "action handler for LButtonDown failed: boom");
        assert!(std::error::Error::source(&err).is_some());
    }
}
