//! Single-line text label.

use std::rc::Rc;

use crate::config::TextConfig;
use crate::error::UiResult;
use crate::event::{Event, EventAction};
use crate::layout::Anchor;
use crate::render::{RenderCommand, RenderList, RenderTarget};
use crate::style::Color;
use crate::text::{TextExtent, TextMetrics};

use super::core::{ActionHandler, ControlRegisters, FrameContext, Widget, WidgetId, WidgetState};

/// Typeface treatment of a label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextStyle {
    /// Regular weight.
    #[default]
    Normal,
}

/// A label that never claims input.
///
/// Each update re-measures the title and re-applies the anchor against the
/// current surface size, so anchored labels follow window resizes.
pub struct StaticText {
    state: WidgetState,
    title: String,
    position: (f32, f32),
    color: Color,
    scale: f32,
    style: TextStyle,
    anchor: Anchor,
    extent: TextExtent,
    metrics: Rc<dyn TextMetrics>,
}

impl StaticText {
    pub(crate) fn new(
        state: WidgetState,
        title: impl Into<String>,
        x: f32,
        y: f32,
        style: TextStyle,
        metrics: Rc<dyn TextMetrics>,
        config: &TextConfig,
    ) -> Self {
        Self {
            state,
            title: title.into(),
            position: (x, y),
            color: config.color,
            scale: config.scale,
            style,
            anchor: Anchor::ManualAdjust,
            extent: TextExtent::default(),
            metrics,
        }
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replaces the title. The extent is refreshed on the next update.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Returns the text color.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Sets the text color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Returns the glyph scale.
    #[must_use]
    pub const fn scale(&self) -> f32 {
        self.scale
    }

    /// Sets the glyph scale.
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    /// Returns the typeface treatment.
    #[must_use]
    pub const fn style(&self) -> TextStyle {
        self.style
    }

    /// Returns the left end of the baseline.
    #[must_use]
    pub const fn position(&self) -> (f32, f32) {
        self.position
    }

    /// Places the label by hand. Disables anchoring.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = (x, y);
        self.anchor = Anchor::ManualAdjust;
    }

    /// Returns the anchor.
    #[must_use]
    pub const fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Pins the label to a surface edge or corner.
    pub fn set_anchor(&mut self, anchor: Anchor) {
        self.anchor = anchor;
    }

    /// Returns the extent measured at the last update.
    #[must_use]
    pub const fn extent(&self) -> TextExtent {
        self.extent
    }

    /// Measures the title at `scale` without touching the stored extent.
    pub(crate) fn measure_at(&self, scale: f32) -> UiResult<TextExtent> {
        self.metrics.measure(&self.title, scale)
    }

    /// Measures the title at the current scale and stores the result.
    pub(crate) fn remeasure(&mut self) -> UiResult<TextExtent> {
        self.extent = self.metrics.measure(&self.title, self.scale)?;
        Ok(self.extent)
    }
}

impl RenderTarget for StaticText {
    fn target_id(&self) -> WidgetId {
        self.state.id()
    }

    fn render(&mut self, _dt: f32, out: &mut RenderList) {
        if self.title.is_empty() {
            return;
        }
        out.push(RenderCommand::Text {
            text: self.title.clone(),
            x: self.position.0,
            y: self.position.1,
            color: self.color,
            scale: self.scale,
        });
    }
}

impl Widget for StaticText {
    fn state(&self) -> &WidgetState {
        &self.state
    }

    fn init(&mut self) -> UiResult<()> {
        self.remeasure()?;
        Ok(())
    }

    fn update(&mut self, _dt: f32, frame: &FrameContext<'_>) {
        if let Err(err) = self.remeasure() {
            tracing::warn!(id = ?self.state.id(), %err, "label measure failed; keeping last extent");
        }
        let surface = (frame.surface.width(), frame.surface.height());
        self.position = self.anchor.resolve(self.position, surface, self.extent);
    }

    fn confirm(&mut self, event: &Event, _registers: &mut ControlRegisters) -> UiResult<bool> {
        if let Event::System(system) = event {
            if system.action() == EventAction::WindowResize {
                tracing::trace!(id = ?self.state.id(), "label saw resize; anchor applies next update");
            }
        }
        Ok(false)
    }

    /// Labels never claim an event, so the handler is dropped.
    fn set_action_handler(&mut self, action: EventAction, _handler: ActionHandler<Self>) {
        tracing::debug!(id = ?self.state.id(), ?action, "label ignores action handlers");
    }
}
