use crate::{
    foundation::core::{Canvas, Point, Rect, Rgba8},
    foundation::error::{VizError, VizResult},
    render::commands::{DrawCommand, DrawList, LineStroke},
};

/// External 2D drawing target.
///
/// Implementations own the pixels; callers only decide where primitives go and in which
/// order. A surface is borrowed mutably for a whole render call.
pub trait DrawSurface {
    fn canvas(&self) -> Canvas;

    fn clear_rect(&mut self, rect: Rect) -> VizResult<()>;

    fn fill_rect(&mut self, rect: Rect, color: Rgba8) -> VizResult<()>;

    fn stroke_line(&mut self, from: Point, to: Point, stroke: &LineStroke) -> VizResult<()>;
}

/// Issue every command of `list` in order.
pub fn execute_draw_list<S: DrawSurface + ?Sized>(
    surface: &mut S,
    list: &DrawList,
) -> VizResult<()> {
    if surface.canvas() != list.canvas {
        return Err(VizError::render(format!(
            "draw list compiled for {}x{} but surface is {}x{}",
            list.canvas.width,
            list.canvas.height,
            surface.canvas().width,
            surface.canvas().height
        )));
    }

    for cmd in &list.commands {
        match cmd {
            DrawCommand::Clear { rect } => surface.clear_rect(*rect)?,
            DrawCommand::FillRect { rect, color } => surface.fill_rect(*rect, *color)?,
            DrawCommand::StrokeLine { from, to, stroke } => {
                surface.stroke_line(*from, *to, stroke)?
            }
        }
    }
    Ok(())
}

/// Surface that keeps a log of the primitives it received.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    canvas: Canvas,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            commands: Vec::new(),
        }
    }
}

impl DrawSurface for RecordingSurface {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn clear_rect(&mut self, rect: Rect) -> VizResult<()> {
        self.commands.push(DrawCommand::Clear { rect });
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba8) -> VizResult<()> {
        self.commands.push(DrawCommand::FillRect { rect, color });
        Ok(())
    }

    fn stroke_line(&mut self, from: Point, to: Point, stroke: &LineStroke) -> VizResult<()> {
        self.commands.push(DrawCommand::StrokeLine {
            from,
            to,
            stroke: *stroke,
        });
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
