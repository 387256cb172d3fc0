//! # Controls Manager
//!
//! Owns the event queue and every widget it created.
//!
//! ```text
//!   window callbacks ──▶ on_key / on_mouse_button / on_cursor_move
//!                                    │
//!                                    ▼
//!                              EventQueue (FIFO)
//!                                    │  update(dt)
//!              ┌─────────────────────┴─────────────────────┐
//!              ▼                                           ▼
//!   1. dispatch: topmost widget first,          2. advance: every widget,
//!      one front event offered per widget,         creation order,
//!      claimed events popped, one leftover         update(dt)
//!      dropped
//! ```
//!
//! Z-order is creation order: the last widget created is tested first.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::UiConfig;
use crate::error::UiResult;
use crate::event::{Event, EventAction, KeyEvent, MouseEvent};
use crate::input::{mouse_action, ButtonAction, KeyAction, MouseButton};
use crate::layout::Rect;
use crate::queue::EventQueue;
use crate::render::{RenderRegistry, SharedTarget};
use crate::surface::Surface;
use crate::text::TextMetrics;
use crate::widget::{
    Button, ButtonStyle, ControlRegisters, FrameContext, Shared, StaticText, TextStyle, Widget,
    WidgetId, WidgetState,
};

/// Shared handle to a widget of any type.
pub type SharedWidget = Rc<RefCell<dyn Widget>>;

/// Creates widgets, routes input to them and advances them once per frame.
pub struct ControlsManager {
    surface: Rc<dyn Surface>,
    metrics: Rc<dyn TextMetrics>,
    registry: Rc<RefCell<dyn RenderRegistry>>,
    config: UiConfig,
    queue: EventQueue,
    /// Widgets in creation order.
    widgets: Vec<SharedWidget>,
    registers: ControlRegisters,
    next_id: u64,
}

impl ControlsManager {
    /// Creates a manager with the stock configuration.
    #[must_use]
    pub fn new(
        surface: Rc<dyn Surface>,
        metrics: Rc<dyn TextMetrics>,
        registry: Rc<RefCell<dyn RenderRegistry>>,
    ) -> Self {
        Self::with_config(surface, metrics, registry, UiConfig::default())
    }

    /// Creates a manager with an explicit configuration.
    #[must_use]
    pub fn with_config(
        surface: Rc<dyn Surface>,
        metrics: Rc<dyn TextMetrics>,
        registry: Rc<RefCell<dyn RenderRegistry>>,
        config: UiConfig,
    ) -> Self {
        Self {
            surface,
            metrics,
            registry,
            queue: EventQueue::with_capacity(config.queue_capacity),
            config,
            widgets: Vec::with_capacity(64),
            registers: ControlRegisters::default(),
            next_id: 0,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &UiConfig {
        &self.config
    }

    // =========================================================================
    // Factories
    // =========================================================================

    /// Creates a label at `(x, y)`. The label starts unanchored.
    ///
    /// # Errors
    ///
    /// Returns the initialization error; the label is not registered.
    pub fn create_static_text(
        &mut self,
        title: impl Into<String>,
        x: f32,
        y: f32,
        style: TextStyle,
    ) -> UiResult<Shared<StaticText>> {
        let state = self.mint_state();
        let text = StaticText::new(
            state,
            title,
            x,
            y,
            style,
            Rc::clone(&self.metrics),
            &self.config.text,
        );
        self.adopt(text)
    }

    /// Creates a button whose bottom-left corner is `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::InvalidGeometry`](crate::UiError::InvalidGeometry)
    /// for an empty rectangle, or
    /// [`UiError::InitFailed`](crate::UiError::InitFailed) if the title cannot
    /// be laid out. Nothing is registered in either case.
    pub fn create_button(
        &mut self,
        title: impl Into<String>,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        style: ButtonStyle,
    ) -> UiResult<Shared<Button>> {
        let state = self.mint_state();
        let button = Button::new(
            state,
            title,
            Rect::new(x, y, width, height),
            style,
            Rc::clone(&self.metrics),
            &self.config,
        );
        self.adopt(button)
    }

    /// Creates a widget of a type defined outside this crate.
    ///
    /// `build` receives the widget's freshly minted state.
    ///
    /// # Errors
    ///
    /// Returns the widget's initialization error; it is not registered.
    pub fn create_with<W, F>(&mut self, build: F) -> UiResult<Shared<W>>
    where
        W: Widget + 'static,
        F: FnOnce(WidgetState) -> W,
    {
        let state = self.mint_state();
        self.adopt(build(state))
    }

    /// Ids are consumed even if the widget later fails to initialize.
    fn mint_state(&mut self) -> WidgetState {
        let id = WidgetId::new(self.next_id);
        self.next_id += 1;
        WidgetState::new(id)
    }

    fn adopt<W: Widget + 'static>(&mut self, mut widget: W) -> UiResult<Shared<W>> {
        let id = widget.id();
        if let Err(err) = widget.init() {
            tracing::warn!(id = id.raw(), %err, "widget failed to initialize; discarded");
            return Err(err);
        }

        let shared = Rc::new(RefCell::new(widget));
        let target: SharedTarget = shared.clone();
        self.registry.borrow_mut().register(target);
        let entry: SharedWidget = shared.clone();
        self.widgets.push(entry);
        self.registers.set_focused(Some(id));

        tracing::debug!(
            id = id.raw(),
            kind = std::any::type_name::<W>(),
            "widget created"
        );
        Ok(shared)
    }

    /// Removes a widget and unregisters it from the renderer.
    ///
    /// Pointer and focus ownership held by the widget are released.
    /// Returns false if no widget has this id.
    pub fn remove(&mut self, id: WidgetId) -> bool {
        let Some(index) = self.widgets.iter().position(|w| w.borrow().id() == id) else {
            return false;
        };
        self.widgets.remove(index);
        self.registry.borrow_mut().unregister(id);
        self.registers.forget(id);
        tracing::debug!(id = id.raw(), "widget removed");
        true
    }

    // =========================================================================
    // Registers
    // =========================================================================

    /// Records the widget that owns the pointer.
    pub fn set_cursor_docked_control(&mut self, id: Option<WidgetId>) {
        self.registers.set_docked(id);
    }

    /// Returns the widget that owns the pointer.
    #[must_use]
    pub const fn cursor_docked_control(&self) -> Option<WidgetId> {
        self.registers.docked()
    }

    /// Records the widget that owns keyboard focus.
    pub fn set_focus(&mut self, id: Option<WidgetId>) {
        self.registers.set_focused(id);
    }

    /// Returns the widget that owns keyboard focus.
    #[must_use]
    pub const fn focus(&self) -> Option<WidgetId> {
        self.registers.focused()
    }

    // =========================================================================
    // Input ingestion
    // =========================================================================

    /// Queues a key transition.
    pub fn on_key(&mut self, action: KeyAction, key_code: u32) {
        let event = KeyEvent::with_action(action.event_action(), key_code);
        tracing::trace!(?action, key_code, "key input");
        self.queue.push(Event::Keyboard(event));
    }

    /// Queues a mouse button transition at window coordinates `(x, y)`.
    ///
    /// Window Y grows downward; the queued event uses the bottom-up
    /// convention of the widgets.
    pub fn on_mouse_button(&mut self, button: MouseButton, action: ButtonAction, x: f64, y: f64) {
        self.push_mouse(mouse_action(button, action), x, y);
    }

    /// Queues a cursor move at window coordinates `(x, y)`.
    pub fn on_cursor_move(&mut self, x: f64, y: f64) {
        self.push_mouse(EventAction::CursorMove, x, y);
    }

    /// Queues a key transition from raw GLFW codes. Unknown codes are ignored.
    pub fn on_glfw_key(&mut self, key: i32, action: i32) {
        match (u32::try_from(key), KeyAction::from_glfw(action)) {
            (Ok(key_code), Some(action)) => self.on_key(action, key_code),
            _ => tracing::trace!(key, action, "ignored unmapped key input"),
        }
    }

    /// Queues a mouse button transition from raw GLFW codes. Unknown codes
    /// are ignored.
    pub fn on_glfw_mouse_button(&mut self, button: i32, action: i32, x: f64, y: f64) {
        match (MouseButton::from_glfw(button), ButtonAction::from_glfw(action)) {
            (Some(button), Some(action)) => self.on_mouse_button(button, action, x, y),
            _ => tracing::trace!(button, action, "ignored unmapped mouse input"),
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn push_mouse(&mut self, action: EventAction, x: f64, y: f64) {
        let flipped = f64::from(self.surface.height()) - y;
        let event = MouseEvent::with_action(action, x as i32, flipped as i32);
        tracing::trace!(?action, x = event.x(), y = event.y(), "mouse input");
        self.queue.push(Event::Mouse(event));
    }

    // =========================================================================
    // Frame
    // =========================================================================

    /// Runs one frame: dispatches queued events, then advances every widget.
    ///
    /// # Errors
    ///
    /// Returns the first action handler failure. The event that triggered it
    /// is consumed and the advance phase is skipped for this frame.
    pub fn update(&mut self, dt: f32) -> UiResult<()> {
        self.dispatch()?;
        self.advance(dt);
        Ok(())
    }

    /// Offers the front event to each widget once, topmost first.
    fn dispatch(&mut self) -> UiResult<()> {
        for widget in self.widgets.iter().rev() {
            let Some(event) = self.queue.peek_front() else {
                break;
            };

            let claimed = widget.borrow_mut().confirm(&event, &mut self.registers);
            match claimed {
                Ok(true) => {
                    self.queue.pop();
                    tracing::trace!(action = ?event.action(), "event claimed");
                }
                Ok(false) => {}
                Err(err) => {
                    self.queue.pop();
                    tracing::warn!(%err, "action handler failed; dispatch aborted");
                    return Err(err);
                }
            }
        }

        if let Some(event) = self.queue.pop() {
            tracing::trace!(action = ?event.action(), "unclaimed event dropped");
        }
        Ok(())
    }

    fn advance(&mut self, dt: f32) {
        let frame = FrameContext {
            registers: &self.registers,
            surface: &*self.surface,
        };
        for widget in &self.widgets {
            widget.borrow_mut().update(dt, &frame);
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns the number of queued events.
    #[must_use]
    pub fn pending_events(&self) -> usize {
        self.queue.count()
    }

    /// Returns the event queue.
    #[must_use]
    pub const fn queue(&self) -> &EventQueue {
        &self.queue
    }

    /// Returns the number of live widgets.
    #[must_use]
    pub fn widget_count(&self) -> usize {
        self.widgets.len()
    }

    /// Returns the ids of live widgets in creation order.
    #[must_use]
    pub fn widget_ids(&self) -> Vec<WidgetId> {
        self.widgets.iter().map(|w| w.borrow().id()).collect()
    }

    /// Returns a live widget.
    #[must_use]
    pub fn widget(&self, id: WidgetId) -> Option<SharedWidget> {
        self.widgets.iter().find(|w| w.borrow().id() == id).cloned()
    }
}

impl Drop for ControlsManager {
    fn drop(&mut self) {
        let Ok(mut registry) = self.registry.try_borrow_mut() else {
            tracing::warn!("render registry busy; widgets stay registered");
            return;
        };
        for widget in &self.widgets {
            if let Ok(widget) = widget.try_borrow() {
                registry.unregister(widget.id());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::UIRenderer;
    use crate::surface::FixedSurface;
    use crate::text::MonospaceMetrics;

    fn manager() -> (ControlsManager, Rc<RefCell<UIRenderer>>) {
        let renderer = Rc::new(RefCell::new(UIRenderer::new()));
        let registry: Rc<RefCell<dyn RenderRegistry>> = renderer.clone();
        let manager = ControlsManager::new(
            Rc::new(FixedSurface::new(1280.0, 720.0)),
            Rc::new(MonospaceMetrics::DEFAULT),
            registry,
        );
        (manager, renderer)
    }

    #[test]
    fn test_mouse_y_is_flipped() {
        let (mut manager, _renderer) = manager();
        manager.on_mouse_button(MouseButton::Left, ButtonAction::Press, 30.0, 700.0);

        let Some(Event::Mouse(mouse)) = manager.queue().peek_front() else {
            panic!("expected a mouse event");
        };
        assert_eq!(mouse.action(), EventAction::LButtonDown);
        assert_eq!((mouse.x(), mouse.y()), (30, 20));
    }

    #[test]
    fn test_middle_button_is_unknown() {
        let (mut manager, _renderer) = manager();
        manager.on_glfw_mouse_button(2, 1, 0.0, 0.0);
        assert_eq!(
            manager.queue().peek_front().map(|e| e.action()),
            Some(EventAction::Unknown)
        );
    }

    #[test]
    fn test_unmapped_glfw_codes_are_ignored() {
        let (mut manager, _renderer) = manager();
        manager.on_glfw_mouse_button(7, 1, 0.0, 0.0);
        manager.on_glfw_key(-1, 1);
        manager.on_glfw_key(65, 9);
        assert_eq!(manager.pending_events(), 0);

        manager.on_glfw_key(65, 0);
        assert_eq!(
            manager.queue().peek_front().map(|e| e.action()),
            Some(EventAction::KeyRelease)
        );
    }

    #[test]
    fn test_factory_registers_and_focuses() {
        let (mut manager, renderer) = manager();
        let text = manager
            .create_static_text("fps", 0.0, 0.0, TextStyle::Normal)
            .unwrap();
        let id = text.borrow().id();

        assert_eq!(manager.widget_ids(), vec![id]);
        assert_eq!(manager.focus(), Some(id));
        assert!(renderer.borrow().is_registered(id));
    }

    #[test]
    fn test_drop_unregisters_widgets() {
        let (mut manager, renderer) = manager();
        manager
            .create_button("OK", 0.0, 0.0, 100.0, 40.0, ButtonStyle::Curve)
            .unwrap();
        assert_eq!(renderer.borrow().target_count(), 1);

        drop(manager);
        assert_eq!(renderer.borrow().target_count(), 0);
    }
}
