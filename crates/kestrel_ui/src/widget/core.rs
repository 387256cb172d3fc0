//! Core widget types and traits.

use crate::error::{HandlerError, UiError, UiResult};
use crate::event::{Event, EventAction};
use crate::render::RenderTarget;
use crate::surface::Surface;

/// Unique identifier for a widget.
///
/// Ids are handed out in creation order, so the raw value doubles as the
/// widget's depth: a larger id sits on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WidgetId(pub u64);

impl WidgetId {
    /// Creates a new widget ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Transient interaction flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WidgetStatus {
    /// The cursor is over this widget and this widget owns the pointer.
    pub cursor_docked: bool,
    /// The left button went down on this widget and has not been released.
    pub mouse_left_down: bool,
    /// The right button went down on this widget and has not been released.
    pub mouse_right_down: bool,
}

/// Common widget state.
#[derive(Debug, Clone)]
pub struct WidgetState {
    /// Widget identifier.
    id: WidgetId,
    /// Interaction flags.
    status: WidgetStatus,
}

impl WidgetState {
    /// Only the controls manager mints widget states.
    pub(crate) const fn new(id: WidgetId) -> Self {
        Self {
            id,
            status: WidgetStatus {
                cursor_docked: false,
                mouse_left_down: false,
                mouse_right_down: false,
            },
        }
    }

    /// Returns the widget id.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> WidgetId {
        self.id
    }

    /// Returns the creation-order depth.
    #[inline]
    #[must_use]
    pub const fn depth(&self) -> u64 {
        self.id.raw()
    }

    /// Returns the interaction flags.
    #[inline]
    #[must_use]
    pub const fn status(&self) -> WidgetStatus {
        self.status
    }

    /// Returns mutable access to the interaction flags.
    #[inline]
    pub fn status_mut(&mut self) -> &mut WidgetStatus {
        &mut self.status
    }
}

/// Callback run when a widget claims an event with a given action.
///
/// The handler receives the widget that claimed the event, so it can act on
/// it directly without going back through the shared handle.
pub type ActionHandler<W> = Box<dyn FnMut(&mut W, &Event) -> Result<(), HandlerError>>;

/// Per-widget action handler table. At most one handler per action.
pub struct ActionHandlers<W> {
    entries: Vec<(EventAction, ActionHandler<W>)>,
}

impl<W> Default for ActionHandlers<W> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<W> ActionHandlers<W> {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a handler, replacing any previous one for the same action.
    pub fn set(&mut self, action: EventAction, handler: ActionHandler<W>) {
        if let Some(entry) = self.entries.iter_mut().find(|(a, _)| *a == action) {
            entry.1 = handler;
        } else {
            self.entries.push((action, handler));
        }
    }

    /// Returns the number of installed handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no handler is installed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Runs the handler for `action` on `widget`, if any.
    ///
    /// Returns `Ok(true)` if a handler ran.
    ///
    /// # Errors
    ///
    /// Wraps a handler failure in [`UiError::Handler`].
    pub fn invoke(&mut self, action: EventAction, widget: &mut W, event: &Event) -> UiResult<bool> {
        let Some((_, handler)) = self.entries.iter_mut().find(|(a, _)| *a == action) else {
            return Ok(false);
        };
        handler(widget, event).map_err(|source| UiError::Handler { action, source })?;
        Ok(true)
    }

    /// Runs the handler for `action` on the widget that owns this table.
    ///
    /// `table` selects the owner's handler field. The table is taken out of
    /// the owner for the duration of the call, and handlers the callback
    /// installs on the owner meanwhile replace the old ones afterwards.
    ///
    /// # Errors
    ///
    /// Wraps a handler failure in [`UiError::Handler`].
    pub fn fire(
        owner: &mut W,
        table: fn(&mut W) -> &mut Self,
        action: EventAction,
        event: &Event,
    ) -> UiResult<bool> {
        let mut handlers = std::mem::take(table(owner));
        let outcome = handlers.invoke(action, owner, event);
        let installed = std::mem::replace(table(owner), handlers);
        for (rearmed, handler) in installed.entries {
            table(owner).set(rearmed, handler);
        }
        outcome
    }
}

impl<W> std::fmt::Debug for ActionHandlers<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.entries.iter().map(|(a, _)| a)).finish()
    }
}

/// Manager-level pointer and keyboard ownership.
///
/// Both are last-writer-wins registers; either may be empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlRegisters {
    docked: Option<WidgetId>,
    focused: Option<WidgetId>,
}

impl ControlRegisters {
    /// Returns the widget that owns the pointer.
    #[inline]
    #[must_use]
    pub const fn docked(&self) -> Option<WidgetId> {
        self.docked
    }

    /// Returns the widget that owns keyboard focus.
    #[inline]
    #[must_use]
    pub const fn focused(&self) -> Option<WidgetId> {
        self.focused
    }

    /// Records the widget that owns the pointer.
    pub fn set_docked(&mut self, id: Option<WidgetId>) {
        if self.docked != id {
            tracing::debug!(from = ?self.docked, to = ?id, "cursor dock changed");
        }
        self.docked = id;
    }

    /// Records the widget that owns keyboard focus.
    pub fn set_focused(&mut self, id: Option<WidgetId>) {
        if self.focused != id {
            tracing::debug!(from = ?self.focused, to = ?id, "focus changed");
        }
        self.focused = id;
    }

    /// Empties any register that points at `id`.
    pub(crate) fn forget(&mut self, id: WidgetId) {
        if self.docked == Some(id) {
            self.docked = None;
        }
        if self.focused == Some(id) {
            self.focused = None;
        }
    }
}

/// What a widget may consult while advancing a frame.
pub struct FrameContext<'a> {
    /// Pointer and focus ownership after this frame's dispatch.
    pub registers: &'a ControlRegisters,
    /// The surface the widget lives on.
    pub surface: &'a dyn Surface,
}

/// Base trait for all widgets.
///
/// Widgets see the manager's registers but never the widget collection,
/// so no widget can add or remove widgets during dispatch.
pub trait Widget: RenderTarget {
    /// Returns the widget's state.
    fn state(&self) -> &WidgetState;

    /// One-time setup, run by the manager before registration.
    ///
    /// # Errors
    ///
    /// A failed widget is discarded by the manager and never registered.
    fn init(&mut self) -> UiResult<()>;

    /// Advances state and animation. Called every frame after dispatch.
    fn update(&mut self, dt: f32, frame: &FrameContext<'_>);

    /// Offers an event to the widget. Returns `Ok(true)` if it claimed it.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Handler`] if an action handler failed.
    fn confirm(&mut self, event: &Event, registers: &mut ControlRegisters) -> UiResult<bool>;

    /// Installs the handler for an action, replacing any previous one.
    fn set_action_handler(&mut self, action: EventAction, handler: ActionHandler<Self>)
    where
        Self: Sized;

    /// Returns the widget id.
    fn id(&self) -> WidgetId {
        self.state().id()
    }

    /// Installs a closure as the handler for an action.
    fn on<F>(&mut self, action: EventAction, handler: F)
    where
        Self: Sized,
        F: FnMut(&mut Self, &Event) -> Result<(), HandlerError> + 'static,
    {
        self.set_action_handler(action, Box::new(handler));
    }
}
