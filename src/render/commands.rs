use crate::{
    foundation::core::{Canvas, Point, Rect, Rgba8},
    foundation::error::VizResult,
    graph::model::GraphSnapshot,
    layout::{
        edges::resolve_connections,
        nodes::{Placement, layout_nodes},
        timeline::map_timeline,
    },
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Stroke style for connection lines.
pub struct LineStroke {
    pub color: Rgba8,
    pub width: f64,
}

impl Default for LineStroke {
    fn default() -> Self {
        Self {
            color: Rgba8::BLACK,
            width: 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
/// Primitive issued against a [`crate::DrawSurface`].
pub enum DrawCommand {
    Clear { rect: Rect },
    FillRect { rect: Rect, color: Rgba8 },
    StrokeLine { from: Point, to: Point, stroke: LineStroke },
}

#[derive(Clone, Debug, serde::Serialize)]
/// Ordered draw commands for one frame.
///
/// Every list starts with a full-canvas [`DrawCommand::Clear`]; views are always redrawn from
/// scratch.
pub struct DrawList {
    pub canvas: Canvas,
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            commands: vec![DrawCommand::Clear {
                rect: canvas.bounds(),
            }],
        }
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Rgba8) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    pub fn stroke_line(&mut self, from: Point, to: Point, stroke: LineStroke) {
        self.commands.push(DrawCommand::StrokeLine { from, to, stroke });
    }

    pub fn fill_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillRect { .. }))
            .count()
    }

    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokeLine { .. }))
            .count()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Graph view options.
pub struct GraphViewOpts {
    pub placement: Placement,
    pub edge_stroke: LineStroke,
}

/// Build the node-link diagram: clear, every connection stroke, then every node fill.
pub fn compile_graph_view(
    canvas: Canvas,
    snapshot: &GraphSnapshot,
    opts: &GraphViewOpts,
) -> VizResult<DrawList> {
    let nodes = layout_nodes(canvas, snapshot, opts.placement)?;
    let edges = resolve_connections(&nodes, &snapshot.connections);

    let mut list = DrawList::new(canvas);
    for e in &edges {
        list.stroke_line(e.from, e.to, opts.edge_stroke);
    }
    for n in &nodes {
        list.fill_rect(n.rect(), n.color);
    }
    tracing::debug!(nodes = nodes.len(), edges = edges.len(), "compiled graph view");
    Ok(list)
}

/// Build the timeline: clear, transition overlays, source tracks, then the playhead.
pub fn compile_timeline_view(
    canvas: Canvas,
    snapshot: &GraphSnapshot,
    current_time: Option<f64>,
) -> VizResult<DrawList> {
    let frame = map_timeline(canvas, snapshot, current_time)?;

    let mut list = DrawList::new(canvas);
    for r in frame.rects() {
        list.fill_rect(r.rect(), r.color);
    }
    tracing::debug!(
        overlays = frame.overlays.len(),
        tracks = frame.tracks.len(),
        playhead = frame.playhead.is_some(),
        "compiled timeline view"
    );
    Ok(list)
}

#[cfg(test)]
#[path = "../../tests/unit/render/commands.rs"]
mod tests;
