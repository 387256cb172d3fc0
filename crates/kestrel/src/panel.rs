//! Demo overlay showing the frame rate.

use kestrel_ui::{Anchor, Color, ControlsManager, Shared, StaticText, TextStyle, UiResult};

/// Color of the FPS readout.
pub const FPS_COLOR: Color = Color::rgba(1.0, 0.5, 0.2, 1.0);

/// A label pinned to the top-right corner that shows the FPS.
pub struct FpsPanel {
    label: Shared<StaticText>,
}

impl FpsPanel {
    /// Creates the label through `manager`.
    ///
    /// # Errors
    ///
    /// Returns the label's initialization error.
    pub fn create(manager: &mut ControlsManager) -> UiResult<Self> {
        let label = manager.create_static_text("fps", 0.0, 0.0, TextStyle::Normal)?;
        {
            let mut text = label.borrow_mut();
            text.set_anchor(Anchor::RightTop);
            text.set_color(FPS_COLOR);
        }
        Ok(Self { label })
    }

    /// Shows a new FPS sample. The label re-anchors on the next update.
    pub fn refresh(&self, fps: f32) {
        self.label.borrow_mut().set_title(format!("FPS:{fps:.0}"));
    }

    /// Returns the label.
    #[must_use]
    pub fn label(&self) -> &Shared<StaticText> {
        &self.label
    }
}
