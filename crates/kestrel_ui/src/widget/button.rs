//! # Push Button
//!
//! A rectangular hit region with a centred label.
//!
//! ```text
//!            pointer inside, left up      pointer inside, left down
//!   ┌─────────┐  ───────────────▶  ┌────────┐  ──────────▶  ┌─────────┐
//!   │ default │                    │ docked │               │ clicked │
//!   └─────────┘  ◀───────────────  └────────┘  ◀──────────   └─────────┘
//!                  pointer leaves          left release (eases back)
//! ```
//!
//! The fill snaps to `default` and `clicked` and eases toward `docked` by at
//! most `ease_step` per channel per update.

use std::rc::Rc;

use crate::config::UiConfig;
use crate::error::{UiError, UiResult};
use crate::event::{Event, EventAction, MouseEvent};
use crate::layout::Rect;
use crate::render::{RenderCommand, RenderList, RenderTarget};
use crate::style::{ButtonPalette, Color};
use crate::text::TextMetrics;

use super::core::{
    ActionHandler, ActionHandlers, ControlRegisters, FrameContext, Widget, WidgetId, WidgetState,
    WidgetStatus,
};
use super::static_text::{StaticText, TextStyle};

/// Outline of the button fill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonStyle {
    /// Rounded corners.
    Curve,
    /// Square corners.
    #[default]
    Rectangle,
}

/// A clickable button.
pub struct Button {
    state: WidgetState,
    handlers: ActionHandlers<Button>,
    rect: Rect,
    style: ButtonStyle,
    label: StaticText,
    palette: ButtonPalette,
    current_color: Color,
    ease_step: f32,
    corner_ratio: f32,
    label_scale: f32,
    gap_ratio: f32,
}

impl Button {
    pub(crate) fn new(
        state: WidgetState,
        title: impl Into<String>,
        rect: Rect,
        style: ButtonStyle,
        metrics: Rc<dyn TextMetrics>,
        config: &UiConfig,
    ) -> Self {
        let label = StaticText::new(
            WidgetState::new(state.id()),
            title,
            rect.x,
            rect.y,
            TextStyle::Normal,
            metrics,
            &config.text,
        );
        Self {
            state,
            handlers: ActionHandlers::new(),
            rect,
            style,
            label,
            palette: config.button,
            current_color: config.button.default,
            ease_step: config.ease_step,
            corner_ratio: config.corner_ratio,
            label_scale: config.text.scale,
            gap_ratio: config.text.gap_ratio,
        }
    }

    /// Returns the hit region.
    #[must_use]
    pub const fn rect(&self) -> Rect {
        self.rect
    }

    /// Returns the outline style.
    #[must_use]
    pub const fn style(&self) -> ButtonStyle {
        self.style
    }

    /// Returns the fill color of the last update.
    #[must_use]
    pub const fn current_color(&self) -> Color {
        self.current_color
    }

    /// Returns the interaction flags.
    #[must_use]
    pub const fn status(&self) -> WidgetStatus {
        self.state.status()
    }

    /// Returns true while the pointer rests on this button.
    #[must_use]
    pub const fn is_hovered(&self) -> bool {
        self.state.status().cursor_docked
    }

    /// Returns true while the left button is held on this button.
    #[must_use]
    pub const fn is_pressed(&self) -> bool {
        self.state.status().mouse_left_down
    }

    /// Returns the label.
    #[must_use]
    pub const fn label(&self) -> &StaticText {
        &self.label
    }

    /// Replaces the title and re-centres the label.
    ///
    /// # Errors
    ///
    /// Returns the metrics error if the new title cannot be measured.
    pub fn set_title(&mut self, title: impl Into<String>) -> UiResult<()> {
        self.label.set_title(title);
        self.layout_label()
    }

    /// Moves the button and re-centres the label.
    ///
    /// # Errors
    ///
    /// Returns the metrics error if the title cannot be measured.
    pub fn set_position(&mut self, x: f32, y: f32) -> UiResult<()> {
        self.rect = self.rect.with_origin(x, y);
        self.layout_label()
    }

    /// Fits the label into the rectangle and centres it.
    ///
    /// A label taller than the button is shrunk so its width plus a gap on
    /// each side spans the button.
    fn layout_label(&mut self) -> UiResult<()> {
        let natural = self.label.measure_at(self.label_scale)?;
        let gap = natural.width * self.gap_ratio;

        let mut scale = self.label_scale;
        if natural.height() > self.rect.height {
            scale *= self.rect.width / (natural.width + 2.0 * gap);
        }
        self.label.set_scale(scale);

        let extent = self.label.remeasure()?;
        let x = self.rect.x + (self.rect.width - extent.width) * 0.5;
        let y = self.rect.y + (self.rect.height - extent.height()) * 0.5 + extent.descent;
        self.label.set_position(x, y);
        Ok(())
    }

    fn fire(&mut self, action: EventAction, event: &Event) -> UiResult<bool> {
        ActionHandlers::fire(self, button_handlers, action, event)
    }

    fn corner_radius(&self) -> f32 {
        match self.style {
            ButtonStyle::Curve => self.rect.height * self.corner_ratio,
            ButtonStyle::Rectangle => 0.0,
        }
    }
}

fn button_handlers(button: &mut Button) -> &mut ActionHandlers<Button> {
    &mut button.handlers
}

#[allow(clippy::cast_precision_loss)]
fn pointer(mouse: &MouseEvent) -> (f32, f32) {
    (mouse.x() as f32, mouse.y() as f32)
}

impl RenderTarget for Button {
    fn target_id(&self) -> WidgetId {
        self.state.id()
    }

    fn render(&mut self, dt: f32, out: &mut RenderList) {
        out.push(RenderCommand::Rect {
            bounds: self.rect,
            color: self.current_color,
            corner_radius: self.corner_radius(),
        });
        self.label.render(dt, out);
    }
}

impl Widget for Button {
    fn state(&self) -> &WidgetState {
        &self.state
    }

    fn init(&mut self) -> UiResult<()> {
        if !self.rect.is_valid() {
            return Err(UiError::InvalidGeometry {
                width: self.rect.width,
                height: self.rect.height,
            });
        }
        self.layout_label().map_err(|err| UiError::InitFailed {
            widget: self.state.id(),
            reason: err.to_string(),
        })
    }

    fn update(&mut self, _dt: f32, frame: &FrameContext<'_>) {
        if frame.registers.docked() != Some(self.state.id()) {
            self.state.status_mut().cursor_docked = false;
        }

        let status = self.state.status();
        self.current_color = match (status.cursor_docked, status.mouse_left_down) {
            (true, true) => self.palette.clicked,
            (true, false) => self.current_color.step_toward(self.palette.docked, self.ease_step),
            (false, _) => self.palette.default,
        };
    }

    fn confirm(&mut self, event: &Event, registers: &mut ControlRegisters) -> UiResult<bool> {
        match event {
            Event::Mouse(mouse) => {
                let (x, y) = pointer(mouse);
                if !self.rect.contains(x, y) {
                    self.state.status_mut().cursor_docked = false;
                    return Ok(false);
                }

                registers.set_docked(Some(self.state.id()));
                let status = self.state.status_mut();
                status.cursor_docked = true;
                match mouse.action() {
                    EventAction::LButtonDown => status.mouse_left_down = true,
                    EventAction::LButtonRelease => status.mouse_left_down = false,
                    EventAction::RButtonDown => status.mouse_right_down = true,
                    EventAction::RButtonRelease => status.mouse_right_down = false,
                    _ => {}
                }

                self.fire(mouse.action(), event)?;
                Ok(true)
            }
            Event::Keyboard(key) => {
                registers.set_focused(Some(self.state.id()));
                self.fire(key.action(), event)?;
                Ok(true)
            }
            Event::System(_) => Ok(false),
        }
    }

    fn set_action_handler(&mut self, action: EventAction, handler: ActionHandler<Self>) {
        self.handlers.set(action, handler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::KeyEvent;
    use crate::surface::FixedSurface;
    use crate::text::MonospaceMetrics;
    use std::cell::Cell;

    const EPS: f32 = 1e-5;

    fn button(rect: Rect) -> Button {
        let mut button = Button::new(
            WidgetState::new(WidgetId::new(4)),
            "OK",
            rect,
            ButtonStyle::Curve,
            Rc::new(MonospaceMetrics::new(25.0, 16.0, 4.0)),
            &UiConfig::default(),
        );
        button.init().unwrap();
        button
    }

    fn mouse(action: EventAction, x: i32, y: i32) -> Event {
        Event::Mouse(MouseEvent::with_action(action, x, y))
    }

    fn advance(button: &mut Button, registers: &ControlRegisters) {
        let surface = FixedSurface::new(1280.0, 720.0);
        let frame = FrameContext {
            registers,
            surface: &surface,
        };
        button.update(0.016, &frame);
    }

    #[test]
    fn test_label_is_centred() {
        let b = button(Rect::new(100.0, 100.0, 100.0, 40.0));
        let (x, y) = b.label().position();
        assert!((x - 125.0).abs() < EPS);
        assert!((y - 114.0).abs() < EPS);
        assert!((b.label().scale() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_tall_label_is_shrunk() {
        let b = button(Rect::new(0.0, 0.0, 110.0, 10.0));
        // "OK" is 50 wide with a 2.5 gap per side.
        assert!((b.label().scale() - 2.0).abs() < EPS);

        let b = button(Rect::new(0.0, 0.0, 44.0, 10.0));
        assert!((b.label().scale() - 0.8).abs() < EPS);
    }

    #[test]
    fn test_init_rejects_empty_rect() {
        let mut b = Button::new(
            WidgetState::new(WidgetId::new(1)),
            "OK",
            Rect::new(0.0, 0.0, 0.0, 10.0),
            ButtonStyle::Rectangle,
            Rc::new(MonospaceMetrics::DEFAULT),
            &UiConfig::default(),
        );
        assert!(matches!(b.init(), Err(UiError::InvalidGeometry { .. })));
    }

    #[test]
    fn test_init_rejects_unmeasurable_title() {
        let mut b = Button::new(
            WidgetState::new(WidgetId::new(1)),
            "a\tb",
            Rect::new(0.0, 0.0, 100.0, 40.0),
            ButtonStyle::Rectangle,
            Rc::new(MonospaceMetrics::DEFAULT),
            &UiConfig::default(),
        );
        assert!(matches!(b.init(), Err(UiError::InitFailed { .. })));
    }

    #[test]
    fn test_hover_press_release_colors() {
        let palette = ButtonPalette::SLATE;
        let mut b = button(Rect::new(0.0, 0.0, 100.0, 40.0));
        let mut registers = ControlRegisters::default();

        assert!(b.confirm(&mouse(EventAction::CursorMove, 50, 20), &mut registers).unwrap());
        advance(&mut b, &registers);
        assert!(b.is_hovered());
        assert!((b.current_color().b - 0.51).abs() < EPS);
        assert!((b.current_color().r - palette.default.r).abs() < EPS);

        assert!(b.confirm(&mouse(EventAction::LButtonDown, 50, 20), &mut registers).unwrap());
        advance(&mut b, &registers);
        assert!(b.is_pressed());
        assert_eq!(b.current_color(), palette.clicked);

        assert!(b.confirm(&mouse(EventAction::LButtonRelease, 50, 20), &mut registers).unwrap());
        advance(&mut b, &registers);
        assert!(!b.is_pressed());
        assert!((b.current_color().b - 0.99).abs() < EPS);

        for _ in 0..100 {
            advance(&mut b, &registers);
        }
        assert!(b.current_color().approx_eq(palette.docked, EPS));
    }

    #[test]
    fn test_miss_does_not_claim() {
        let mut b = button(Rect::new(0.0, 0.0, 100.0, 40.0));
        let mut registers = ControlRegisters::default();
        assert!(!b.confirm(&mouse(EventAction::LButtonDown, 150, 20), &mut registers).unwrap());
        assert_eq!(registers.docked(), None);
        assert!(!b.is_pressed());
    }

    #[test]
    fn test_losing_dock_restores_default() {
        let mut b = button(Rect::new(0.0, 0.0, 100.0, 40.0));
        let mut registers = ControlRegisters::default();
        b.confirm(&mouse(EventAction::CursorMove, 10, 10), &mut registers)
            .unwrap();
        advance(&mut b, &registers);

        registers.set_docked(Some(WidgetId::new(99)));
        advance(&mut b, &registers);
        assert!(!b.is_hovered());
        assert_eq!(b.current_color(), ButtonPalette::SLATE.default);
    }

    #[test]
    fn test_right_button_is_tracked() {
        let mut b = button(Rect::new(0.0, 0.0, 100.0, 40.0));
        let mut registers = ControlRegisters::default();
        b.confirm(&mouse(EventAction::RButtonDown, 10, 10), &mut registers)
            .unwrap();
        assert!(b.status().mouse_right_down);
        b.confirm(&mouse(EventAction::RButtonRelease, 10, 10), &mut registers)
            .unwrap();
        assert!(!b.status().mouse_right_down);
    }

    #[test]
    fn test_keyboard_claims_and_focuses() {
        let mut b = button(Rect::new(0.0, 0.0, 100.0, 40.0));
        let presses = Rc::new(Cell::new(0_u32));
        let seen = Rc::clone(&presses);
        b.on(EventAction::KeyPress, move |_, event| {
            assert!(matches!(event, Event::Keyboard(k) if k.key_code() == 32));
            seen.set(seen.get() + 1);
            Ok(())
        });

        let mut registers = ControlRegisters::default();
        let key = Event::Keyboard(KeyEvent::with_action(EventAction::KeyPress, 32));
        assert!(b.confirm(&key, &mut registers).unwrap());
        assert_eq!(presses.get(), 1);
        assert_eq!(registers.focused(), Some(b.id()));
        assert_eq!(registers.docked(), None);
    }

    #[test]
    fn test_handler_sees_updated_status() {
        let mut b = button(Rect::new(0.0, 0.0, 100.0, 40.0));
        let pressed = Rc::new(Cell::new(false));
        let seen = Rc::clone(&pressed);
        b.on(EventAction::LButtonDown, move |button, _| {
            seen.set(button.is_pressed());
            Ok(())
        });

        let mut registers = ControlRegisters::default();
        b.confirm(&mouse(EventAction::LButtonDown, 1, 1), &mut registers)
            .unwrap();
        assert!(pressed.get());
    }

    #[test]
    fn test_handler_retitles_its_button() {
        let mut b = button(Rect::new(100.0, 100.0, 100.0, 40.0));
        b.on(EventAction::LButtonRelease, |button, _| {
            button.set_title("Pause").map_err(Into::into)
        });

        let mut registers = ControlRegisters::default();
        // Release's handler must still be installed after it ran.
        for _ in 0..2 {
            assert!(b
                .confirm(&mouse(EventAction::LButtonRelease, 150, 120), &mut registers)
                .unwrap());
        }
        assert_eq!(b.label().title(), "Pause");
        // "Pause" is 125 wide, centred in 100.
        let (x, _) = b.label().position();
        assert!((x - 87.5).abs() < EPS);
    }

    #[test]
    fn test_render_rect_then_label() {
        let mut b = button(Rect::new(0.0, 0.0, 100.0, 40.0));
        let mut out = RenderList::new();
        b.render(0.0, &mut out);

        assert_eq!(out.len(), 2);
        assert!(matches!(
            out.commands()[0],
            RenderCommand::Rect { corner_radius, .. } if (corner_radius - 8.0).abs() < EPS
        ));
        assert!(matches!(&out.commands()[1], RenderCommand::Text { .. }));
    }

    #[test]
    fn test_set_position_recentres_label() {
        let mut b = button(Rect::new(0.0, 0.0, 100.0, 40.0));
        b.set_position(200.0, 300.0).unwrap();
        let (x, y) = b.label().position();
        assert!((x - 225.0).abs() < EPS);
        assert!((y - 314.0).abs() < EPS);
    }
}
