//! Layout primitives: hit regions and surface anchors.
//!
//! All coordinates use the render convention: the origin is the
//! bottom-left corner of the surface and Y grows upward.

use crate::text::TextExtent;

/// An axis-aligned rectangle in surface coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// X position (left edge).
    pub x: f32,
    /// Y position (bottom edge).
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// A zero-sized rect at the origin.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new rectangle from its bottom-left corner and size.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Returns the right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Returns the top edge.
    #[must_use]
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Returns true if the point is inside the rectangle. Edges count as inside.
    #[must_use]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.top()
    }

    /// Returns the same size moved to a new bottom-left corner.
    #[must_use]
    pub const fn with_origin(self, x: f32, y: f32) -> Self {
        Self::new(x, y, self.width, self.height)
    }

    /// Returns true if both dimensions are finite and positive.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }
}

/// Named placement rule for a label relative to the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Anchor {
    /// Flush with the right edge.
    Right,
    /// Flush with the left edge.
    Left,
    /// Flush with the top edge.
    Top,
    /// Flush with the bottom edge.
    Bottom,
    /// Bottom-left corner.
    LeftBottom,
    /// Bottom-right corner.
    RightBottom,
    /// Top-left corner.
    LeftTop,
    /// Top-right corner.
    RightTop,
    /// Position was set explicitly and is never recomputed.
    #[default]
    ManualAdjust,
}

impl Anchor {
    /// Computes the anchored position.
    ///
    /// `current` is the position before anchoring; axes the anchor does not
    /// constrain are returned unchanged.
    #[must_use]
    pub fn resolve(
        self,
        current: (f32, f32),
        surface: (f32, f32),
        extent: TextExtent,
    ) -> (f32, f32) {
        let (x, y) = current;
        let (width, height) = surface;
        let right = width - extent.width;
        let top = height - extent.height();

        match self {
            Self::Right => (right, y),
            Self::Left => (0.0, y),
            Self::Top => (x, top),
            Self::Bottom => (x, 0.0),
            Self::LeftBottom => (0.0, 0.0),
            Self::RightBottom => (right, 0.0),
            Self::LeftTop => (0.0, top),
            Self::RightTop => (right, top),
            Self::ManualAdjust => current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SURFACE: (f32, f32) = (1280.0, 720.0);
    const EXTENT: TextExtent = TextExtent {
        width: 100.0,
        ascent: 16.0,
        descent: 4.0,
    };

    #[test]
    fn test_rect_contains_edges() {
        let rect = Rect::new(0.0, 0.0, 100.0, 40.0);
        assert!(rect.contains(50.0, 20.0));
        assert!(rect.contains(0.0, 0.0));
        assert!(rect.contains(100.0, 40.0));
        assert!(!rect.contains(100.5, 20.0));
        assert!(!rect.contains(50.0, -1.0));
    }

    #[test]
    fn test_rect_validity() {
        assert!(Rect::new(0.0, 0.0, 1.0, 1.0).is_valid());
        assert!(!Rect::new(0.0, 0.0, 0.0, 1.0).is_valid());
        assert!(!Rect::new(0.0, 0.0, f32::NAN, 1.0).is_valid());
    }

    #[test]
    fn test_right_top_anchor() {
        let (x, y) = Anchor::RightTop.resolve((5.0, 5.0), SURFACE, EXTENT);
        assert!((x - 1180.0).abs() < f32::EPSILON);
        assert!((y - 700.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_single_axis_anchors_keep_other_axis() {
        assert_eq!(Anchor::Right.resolve((5.0, 9.0), SURFACE, EXTENT), (1180.0, 9.0));
        assert_eq!(Anchor::Left.resolve((5.0, 9.0), SURFACE, EXTENT), (0.0, 9.0));
        assert_eq!(Anchor::Top.resolve((5.0, 9.0), SURFACE, EXTENT), (5.0, 700.0));
        assert_eq!(Anchor::Bottom.resolve((5.0, 9.0), SURFACE, EXTENT), (5.0, 0.0));
    }

    #[test]
    fn test_corner_anchors() {
        assert_eq!(Anchor::LeftBottom.resolve((5.0, 9.0), SURFACE, EXTENT), (0.0, 0.0));
        assert_eq!(Anchor::RightBottom.resolve((5.0, 9.0), SURFACE, EXTENT), (1180.0, 0.0));
        assert_eq!(Anchor::LeftTop.resolve((5.0, 9.0), SURFACE, EXTENT), (0.0, 700.0));
    }

    #[test]
    fn test_manual_adjust_is_untouched() {
        assert_eq!(Anchor::ManualAdjust.resolve((5.0, 9.0), SURFACE, EXTENT), (5.0, 9.0));
    }
}
