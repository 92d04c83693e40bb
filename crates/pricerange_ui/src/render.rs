//! Render output for the slider.
//!
//! Widgets emit [`RenderCommand`]s; the [`UIRenderer`] collects them per
//! frame and can tessellate filled rects into GPU-ready [`UIVertex`] data.

use crate::layout::Rect;
use crate::style::Color;

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
    /// Rectangle outline.
    RectOutline {
        /// Bounds.
        bounds: Rect,
        /// Stroke color.
        color: Color,
        /// Line width.
        width: f32,
        /// Corner radius.
        corner_radius: f32,
    },
    /// Text.
    Text {
        /// Text content.
        text: String,
        /// X position.
        x: f32,
        /// Y position.
        y: f32,
        /// Text color.
        color: Color,
        /// Font size.
        font_size: f32,
    },
}

/// A batch of render commands with the same state.
#[derive(Debug, Clone, Default)]
pub struct UIBatch {
    /// Commands in this batch.
    pub commands: Vec<RenderCommand>,
}

impl UIBatch {
    /// Tessellates every filled rect into two triangles.
    ///
    /// Outlines and text are left to the text/stroke pass.
    #[must_use]
    pub fn vertices(&self) -> Vec<UIVertex> {
        let mut vertices = Vec::with_capacity(self.commands.len() * 6);
        for command in &self.commands {
            if let RenderCommand::Rect { bounds, color, .. } = command {
                let c = color.to_array();
                let (l, t, r, b) = (bounds.x, bounds.y, bounds.right(), bounds.bottom());
                vertices.extend_from_slice(&[
                    UIVertex::new(l, t, 0.0, 0.0, c),
                    UIVertex::new(r, t, 1.0, 0.0, c),
                    UIVertex::new(r, b, 1.0, 1.0, c),
                    UIVertex::new(l, t, 0.0, 0.0, c),
                    UIVertex::new(r, b, 1.0, 1.0, c),
                    UIVertex::new(l, b, 0.0, 1.0, c),
                ]);
            }
        }
        vertices
    }
}

/// UI renderer that collects and batches commands.
#[derive(Debug, Default)]
pub struct UIRenderer {
    /// All commands from the frame.
    commands: Vec<RenderCommand>,
    /// Final batches for rendering.
    batches: Vec<UIBatch>,
}

impl UIRenderer {
    /// Creates a new UI renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(64),
            batches: Vec::with_capacity(4),
        }
    }

    /// Begins a new frame.
    pub fn begin_frame(&mut self) {
        self.commands.clear();
        self.batches.clear();
    }

    /// Adds a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Adds multiple render commands.
    pub fn extend(&mut self, commands: impl IntoIterator<Item = RenderCommand>) {
        self.commands.extend(commands);
    }

    /// Ends the frame and returns batches for rendering.
    pub fn end_frame(&mut self) -> &[UIBatch] {
        let batch = UIBatch {
            commands: std::mem::take(&mut self.commands),
        };

        self.batches.clear();
        self.batches.push(batch);

        &self.batches
    }

    /// Returns the number of commands collected so far this frame.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
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
