//! # KESTREL UI Core
//!
//! Input events, widgets and the controls manager that connects them.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                        UI PIPELINE                          │
//! ├────────────────────────────────────────────────────────────┤
//! │  Window Callbacks → EventQueue → Hit Dispatch → Update     │
//! │         ↓               ↓             ↓            ↓       │
//! │     Y-Flip         Slot Pools     Topmost First   Easing   │
//! │                                                            │
//! │  UIRenderer::render_all → RenderList → host GPU backend    │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rules
//!
//! - Widgets exist only through [`ControlsManager`] factories
//! - The last widget created is drawn on top and tested first
//! - An event no widget claims is dropped, never requeued
//! - One thread, one frame loop: `Rc<RefCell<_>>` sharing, no locks

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod event;
pub mod input;
pub mod layout;
pub mod manager;
pub mod queue;
pub mod render;
pub mod style;
pub mod surface;
pub mod text;
pub mod widget;

pub use config::{TextConfig, UiConfig};
pub use error::{HandlerError, UiError, UiResult};
pub use event::{Event, EventAction, EventKind, KeyEvent, MouseEvent, SystemEvent};
pub use input::{ButtonAction, KeyAction, MouseButton};
pub use layout::{Anchor, Rect};
pub use manager::{ControlsManager, SharedWidget};
pub use queue::{EventQueue, RecycleStats};
pub use render::{RenderCommand, RenderList, RenderRegistry, RenderTarget, UIRenderer, UIVertex};
pub use style::{ButtonPalette, Color};
pub use surface::{FixedSurface, Surface};
pub use text::{MonospaceMetrics, TextExtent, TextMetrics};
pub use widget::{
    Button, ButtonStyle, ControlRegisters, FrameContext, Shared, StaticText, TextStyle, Widget,
    WidgetId, WidgetState, WidgetStatus,
};
