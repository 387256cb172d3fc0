//! # KESTREL Frame Loop
//!
//! ```text
//! Frame N:
//! ┌──────────────────────────────────────────────────────────────┐
//! │ 1. CLOCK TICK        dt, fps                                 │
//! │ 2. UI UPDATE         dispatch queued input, advance widgets  │
//! │ 3. PANEL REFRESH     fps readout                             │
//! │ 4. RENDER            collect the render list                 │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Input is queued on the manager by the window layer before the frame.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use kestrel_ui::{ControlsManager, RenderList, UIRenderer, UiResult};

use crate::clock::{FrameClock, TARGET_FRAME_TIME};
use crate::panel::FpsPanel;

/// Outcome of one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameStats {
    /// Frame number, starting at zero.
    pub frame: u64,
    /// Delta handed to the widgets.
    pub dt: f32,
    /// Render commands produced.
    pub commands: usize,
}

/// Drives the controls manager and the renderer once per frame.
pub struct FrameLoop {
    manager: ControlsManager,
    renderer: Rc<RefCell<UIRenderer>>,
    clock: FrameClock,
    fps_panel: Option<FpsPanel>,
    frame_count: u64,
}

impl FrameLoop {
    /// Creates a loop over `manager`, which must register its widgets with
    /// `renderer`.
    #[must_use]
    pub fn new(manager: ControlsManager, renderer: Rc<RefCell<UIRenderer>>) -> Self {
        Self {
            manager,
            renderer,
            clock: FrameClock::new(),
            fps_panel: None,
            frame_count: 0,
        }
    }

    /// Adds the FPS readout.
    ///
    /// # Errors
    ///
    /// Returns the label's initialization error.
    pub fn with_fps_panel(mut self) -> UiResult<Self> {
        self.fps_panel = Some(FpsPanel::create(&mut self.manager)?);
        Ok(self)
    }

    /// Runs one frame at `now`.
    ///
    /// # Errors
    ///
    /// Returns an action handler failure from the UI update. The frame is
    /// still counted but nothing is rendered.
    pub fn frame(&mut self, now: Instant) -> UiResult<FrameStats> {
        let dt = self.clock.tick(now);
        let frame = self.frame_count;
        self.frame_count += 1;

        self.manager.update(dt)?;

        if let Some(panel) = &self.fps_panel {
            panel.refresh(self.clock.fps());
        }

        let commands = self.renderer.borrow_mut().render_all(dt).len();

        if self.clock.frame_time() > TARGET_FRAME_TIME.as_secs_f32() * 2.0 {
            tracing::warn!(
                "Frame {} exceeded budget: {:.2}ms",
                frame,
                self.clock.frame_time() * 1000.0
            );
        }

        Ok(FrameStats { frame, dt, commands })
    }

    /// Returns the controls manager, for input ingestion and widget creation.
    pub fn manager_mut(&mut self) -> &mut ControlsManager {
        &mut self.manager
    }

    /// Returns the controls manager.
    #[must_use]
    pub fn manager(&self) -> &ControlsManager {
        &self.manager
    }

    /// Returns the clock.
    #[must_use]
    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Returns the FPS readout, if added.
    #[must_use]
    pub fn fps_panel(&self) -> Option<&FpsPanel> {
        self.fps_panel.as_ref()
    }

    /// Runs `read` over the commands of the last rendered frame.
    pub fn with_last_frame<R>(&self, read: impl FnOnce(&RenderList) -> R) -> R {
        read(self.renderer.borrow().last_frame())
    }

    /// Returns the number of frames run.
    #[inline]
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
