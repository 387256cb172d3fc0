//! # KESTREL
//!
//! Host side of the KESTREL UI: frame timing, the per-frame orchestration
//! of [`kestrel_ui::ControlsManager`] and [`kestrel_ui::UIRenderer`], and
//! the demo FPS panel.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod clock;
pub mod frame_loop;
pub mod panel;

pub use clock::{FrameClock, MAX_FRAME_TIME, TARGET_FRAME_TIME};
pub use frame_loop::{FrameLoop, FrameStats};
pub use panel::{FpsPanel, FPS_COLOR};
