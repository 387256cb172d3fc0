//! Colors and widget palettes.

use serde::{Deserialize, Serialize};

/// RGBA color.
///
/// Serialized as a `[r, g, b, a]` array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    pub a: f32,
}

impl Color {
    /// Solid black.
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    /// Solid white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Moves every channel toward `target` by at most `step`.
    ///
    /// Channels already within `step` of the target land on it exactly, so
    /// repeated calls reach `target` in a bounded number of steps.
    #[must_use]
    pub fn step_toward(self, target: Self, step: f32) -> Self {
        fn channel(from: f32, to: f32, step: f32) -> f32 {
            let delta = to - from;
            if delta.abs() <= step {
                to
            } else {
                from + step.copysign(delta)
            }
        }

        Self::rgba(
            channel(self.r, target.r, step),
            channel(self.g, target.g, step),
            channel(self.b, target.b, step),
            channel(self.a, target.a, step),
        )
    }

    /// Returns true if every channel is within `epsilon` of `other`.
    #[must_use]
    pub fn approx_eq(self, other: Self, epsilon: f32) -> bool {
        (self.r - other.r).abs() <= epsilon
            && (self.g - other.g).abs() <= epsilon
            && (self.b - other.b).abs() <= epsilon
            && (self.a - other.a).abs() <= epsilon
    }

    /// Returns true if every channel lies in `[0, 1]`.
    #[must_use]
    pub fn is_normalized(self) -> bool {
        self.to_array().iter().all(|c| (0.0..=1.0).contains(c))
    }

    /// Converts to array format.
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<[f32; 4]> for Color {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self::rgba(r, g, b, a)
    }
}

impl From<Color> for [f32; 4] {
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

/// The three colors a button moves between.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonPalette {
    /// Idle fill.
    pub default: Color,
    /// Fill approached while the cursor is docked.
    pub docked: Color,
    /// Fill while the left button is held.
    pub clicked: Color,
}

impl ButtonPalette {
    /// The stock slate-blue palette.
    pub const SLATE: Self = Self {
        default: Color::rgba(0.4, 0.5, 0.5, 0.8),
        docked: Color::rgba(0.4, 0.5, 0.8, 0.8),
        clicked: Color::rgba(0.4, 0.5, 1.0, 0.8),
    };

    /// Returns true if every color is normalized.
    #[must_use]
    pub fn is_normalized(&self) -> bool {
        self.default.is_normalized() && self.docked.is_normalized() && self.clicked.is_normalized()
    }
}

impl Default for ButtonPalette {
    fn default() -> Self {
        Self::SLATE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_toward_is_bounded() {
        let from = ButtonPalette::SLATE.default;
        let to = ButtonPalette::SLATE.docked;

        let once = from.step_toward(to, 0.01);
        assert!((once.b - 0.51).abs() < 1e-6);
        assert!((once.r - from.r).abs() < f32::EPSILON);

        let mut color = from;
        for _ in 0..100 {
            color = color.step_toward(to, 0.01);
        }
        assert_eq!(color, to);
    }

    #[test]
    fn test_step_toward_descends() {
        let from = ButtonPalette::SLATE.clicked;
        let to = ButtonPalette::SLATE.docked;
        let once = from.step_toward(to, 0.01);
        assert!((once.b - 0.99).abs() < 1e-6);
    }

    #[test]
    fn test_color_serializes_as_array() {
        #[derive(Serialize, Deserialize)]
        struct Holder {
            color: Color,
        }

        let parsed: Holder = toml::from_str("color = [0.1, 0.2, 0.3, 0.4]").unwrap();
        assert_eq!(parsed.color, Color::rgba(0.1, 0.2, 0.3, 0.4));
    }

    #[test]
    fn test_normalized() {
        assert!(Color::WHITE.is_normalized());
        assert!(!Color::rgba(1.2, 0.0, 0.0, 1.0).is_normalized());
    }
}
