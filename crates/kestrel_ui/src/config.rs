//! # UI Configuration
//!
//! Tunables for the widget core, loaded once at startup from TOML.
//!
//! ```toml
//! ease_step = 0.01
//! corner_ratio = 0.2
//!
//! [button]
//! default = [0.4, 0.5, 0.5, 0.8]
//! docked  = [0.4, 0.5, 0.8, 0.8]
//! clicked = [0.4, 0.5, 1.0, 0.8]
//!
//! [text]
//! color = [0.0, 0.0, 0.0, 1.0]
//! scale = 1.0
//! gap_ratio = 0.05
//! ```
//!
//! Every key is optional; missing keys take the stock values.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{UiError, UiResult};
use crate::queue::EventQueue;
use crate::style::{ButtonPalette, Color};

/// Label defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextConfig {
    /// Color of new labels.
    pub color: Color,
    /// Scale of new labels.
    pub scale: f32,
    /// Horizontal gap kept between a button label and the button edge, as a
    /// fraction of the label width.
    pub gap_ratio: f32,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            scale: 1.0,
            gap_ratio: 0.05,
        }
    }
}

/// Configuration for the controls manager and the widgets it creates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    /// Button fill colors.
    pub button: ButtonPalette,
    /// Per-update color step while a button eases toward its docked color.
    pub ease_step: f32,
    /// Label defaults.
    pub text: TextConfig,
    /// Button corner radius as a fraction of its height.
    pub corner_ratio: f32,
    /// Slots pre-allocated per payload shape in the event queue.
    pub queue_capacity: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            button: ButtonPalette::default(),
            ease_step: 0.01,
            text: TextConfig::default(),
            corner_ratio: 0.2,
            queue_capacity: EventQueue::DEFAULT_CAPACITY,
        }
    }
}

impl UiConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::InvalidConfig`] if the document does not parse or
    /// fails [`Self::validate`].
    pub fn from_toml_str(source: &str) -> UiResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| UiError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Io`] if the file cannot be read, otherwise the
    /// errors of [`Self::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> UiResult<Self> {
        let source = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.as_ref().display(), "loaded UI configuration");
        Ok(config)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::InvalidConfig`] naming the first offending key.
    pub fn validate(&self) -> UiResult<()> {
        if !(self.ease_step > 0.0 && self.ease_step <= 1.0) {
            return Err(UiError::InvalidConfig(format!(
                "ease_step must be in (0, 1], got {}",
                self.ease_step
            )));
        }
        if !(self.text.scale > 0.0 && self.text.scale.is_finite()) {
            return Err(UiError::InvalidConfig(format!(
                "text.scale must be positive, got {}",
                self.text.scale
            )));
        }
        if !(0.0..0.5).contains(&self.text.gap_ratio) {
            return Err(UiError::InvalidConfig(format!(
                "text.gap_ratio must be in [0, 0.5), got {}",
                self.text.gap_ratio
            )));
        }
        if !(0.0..=0.5).contains(&self.corner_ratio) {
            return Err(UiError::InvalidConfig(format!(
                "corner_ratio must be in [0, 0.5], got {}",
                self.corner_ratio
            )));
        }
        if !self.button.is_normalized() || !self.text.color.is_normalized() {
            return Err(UiError::InvalidConfig(
                "color channels must be in [0, 1]".to_owned(),
            ));
        }
        Ok(())
    }
}
