// Recording render surface: turns draw calls into plain data a host can replay
// onto a canvas (or a test can inspect).

use crate::domain::{RenderSurface, Rgba};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Clear {
        width: f32,
        height: f32,
    },
    FillCircle {
        x: f32,
        y: f32,
        radius: f32,
        color: Rgba,
    },
    StrokeCircle {
        x: f32,
        y: f32,
        radius: f32,
        line_width: f32,
        color: Rgba,
    },
    Line {
        from: (f32, f32),
        to: (f32, f32),
        line_width: f32,
        color: Rgba,
    },
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Hands the recorded frame over and leaves the surface empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl RenderSurface for RecordingSurface {
    fn clear(&mut self, width: f32, height: f32) {
        // A clear starts a new frame; anything before it is invisible anyway.
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::FillCircle {
            x,
            y,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, x: f32, y: f32, radius: f32, line_width: f32, color: Rgba) {
        self.commands.push(DrawCommand::StrokeCircle {
            x,
            y,
            radius,
            line_width,
            color,
        });
    }

    fn line(&mut self, from: (f32, f32), to: (f32, f32), line_width: f32, color: Rgba) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            line_width,
            color,
        });
    }
}
