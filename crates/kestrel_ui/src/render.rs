//! UI rendering system.
//!
//! Widgets do not talk to the GPU. Each frame the host asks the
//! [`UIRenderer`] to render every registered target; targets append
//! [`RenderCommand`]s to a shared [`RenderList`] that the host backend
//! turns into draw calls.

use std::cell::RefCell;
use std::rc::Rc;

use crate::layout::Rect;
use crate::style::Color;
use crate::widget::WidgetId;

/// A render command for the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Filled rectangle.
    Rect {
        /// Bounds.
        bounds: Rect,
        /// Fill color.
        color: Color,
        /// Corner radius.
        corner_radius: f32,
    },
    /// Text run. `(x, y)` is the left end of the baseline.
    Text {
        /// Text content.
        text: String,
        /// X position.
        x: f32,
        /// Y position.
        y: f32,
        /// Text color.
        color: Color,
        /// Glyph scale.
        scale: f32,
    },
}

/// Reusable per-frame command buffer.
#[derive(Debug, Default)]
pub struct RenderList {
    commands: Vec<RenderCommand>,
}

impl RenderList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(256),
        }
    }

    /// Appends a command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Removes all commands, keeping the allocation.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Returns the recorded commands in submission order.
    #[must_use]
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Returns the command count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Anything the host draws once per frame.
pub trait RenderTarget {
    /// Identity used for registration bookkeeping.
    fn target_id(&self) -> WidgetId;

    /// Appends this frame's draw commands.
    fn render(&mut self, dt: f32, out: &mut RenderList);
}

/// Shared handle to a render target.
pub type SharedTarget = Rc<RefCell<dyn RenderTarget>>;

/// Where widgets register to be drawn.
pub trait RenderRegistry {
    /// Adds a target to the draw order.
    fn register(&mut self, target: SharedTarget);

    /// Removes a target. Returns true if it was registered.
    fn unregister(&mut self, id: WidgetId) -> bool;
}

/// Collects draw commands from every registered target.
#[derive(Default)]
pub struct UIRenderer {
    /// Registered targets in draw order.
    targets: Vec<SharedTarget>,
    /// Commands from the last frame.
    list: RenderList,
}

impl UIRenderer {
    /// Creates a renderer with no targets.
    #[must_use]
    pub fn new() -> Self {
        Self {
            targets: Vec::with_capacity(64),
            list: RenderList::new(),
        }
    }

    /// Renders every registered target in registration order.
    ///
    /// # Panics
    ///
    /// Panics if a target is mutably borrowed elsewhere while rendering.
    pub fn render_all(&mut self, dt: f32) -> &RenderList {
        self.list.clear();
        for target in &self.targets {
            target.borrow_mut().render(dt, &mut self.list);
        }
        &self.list
    }

    /// Returns the commands of the last frame.
    #[must_use]
    pub fn last_frame(&self) -> &RenderList {
        &self.list
    }

    /// Returns the number of registered targets.
    #[must_use]
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    /// Returns true if a target with this id is registered.
    #[must_use]
    pub fn is_registered(&self, id: WidgetId) -> bool {
        self.targets.iter().any(|t| t.borrow().target_id() == id)
    }
}

impl RenderRegistry for UIRenderer {
    fn register(&mut self, target: SharedTarget) {
        let id = target.borrow().target_id();
        if self.is_registered(id) {
            tracing::warn!(?id, "render target registered twice; ignoring");
            return;
        }
        self.targets.push(target);
    }

    fn unregister(&mut self, id: WidgetId) -> bool {
        let before = self.targets.len();
        self.targets.retain(|t| t.borrow().target_id() != id);
        before != self.targets.len()
    }
}

/// Vertex for UI rendering.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct UIVertex {
    /// Position (x, y).
    pub position: [f32; 2],
    /// UV coordinates.
    pub uv: [f32; 2],
    /// Color (RGBA).
    pub color: [f32; 4],
}

impl UIVertex {
    /// Creates a new vertex.
    #[must_use]
    pub const fn new(x: f32, y: f32, u: f32, v: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            uv: [u, v],
            color,
        }
    }
}

/// Expands a rectangle into two triangles for upload.
///
/// UV `(0, 0)` is the top-left corner.
#[must_use]
pub fn quad_vertices(bounds: Rect, color: Color) -> [UIVertex; 6] {
    let (left, right) = (bounds.x, bounds.right());
    let (bottom, top) = (bounds.y, bounds.top());
    let c = color.to_array();

    [
        UIVertex::new(left, top, 0.0, 0.0, c),
        UIVertex::new(left, bottom, 0.0, 1.0, c),
        UIVertex::new(right, bottom, 1.0, 1.0, c),
        UIVertex::new(right, bottom, 1.0, 1.0, c),
        UIVertex::new(right, top, 1.0, 0.0, c),
        UIVertex::new(left, top, 0.0, 0.0, c),
    ]
}
