//! Host surface seam.

use std::cell::Cell;

/// The drawable area the widgets live on.
///
/// Implemented by the host window layer; queried by anchored labels and by
/// mouse ingestion to flip Y into the bottom-up convention.
pub trait Surface {
    /// Current width in pixels.
    fn width(&self) -> f32;
    /// Current height in pixels.
    fn height(&self) -> f32;
}

/// A surface with a host-controlled size, for headless hosts and tests.
#[derive(Debug)]
pub struct FixedSurface {
    width: Cell<f32>,
    height: Cell<f32>,
}

impl FixedSurface {
    /// Creates a surface of the given size.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: Cell::new(width),
            height: Cell::new(height),
        }
    }

    /// Changes the size, as a window resize would.
    pub fn resize(&self, width: f32, height: f32) {
        self.width.set(width);
        self.height.set(height);
    }
}

impl Surface for FixedSurface {
    fn width(&self) -> f32 {
        self.width.get()
    }

    fn height(&self) -> f32 {
        self.height.get()
    }
}
