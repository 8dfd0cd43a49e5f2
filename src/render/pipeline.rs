use crate::{
    foundation::error::VizResult,
    graph::model::GraphSnapshot,
    render::{
        commands::{GraphViewOpts, compile_graph_view, compile_timeline_view},
        surface::{DrawSurface, execute_draw_list},
    },
};

/// Lay out + draw the node-link diagram of `snapshot` onto `surface`.
///
/// Pipeline:
/// 1. [`compile_graph_view`](crate::compile_graph_view) against the surface canvas
/// 2. [`execute_draw_list`](crate::execute_draw_list)
///
/// Fails with [`VizError::Config`](crate::VizError::Config) when the snapshot has no source
/// nodes; in that case the surface receives no primitive at all.
#[tracing::instrument(skip(snapshot, surface), fields(sources = snapshot.sources.len()))]
pub fn render_graph_view<S: DrawSurface + ?Sized>(
    snapshot: &GraphSnapshot,
    surface: &mut S,
    opts: &GraphViewOpts,
) -> VizResult<()> {
    let list = compile_graph_view(surface.canvas(), snapshot, opts)?;
    execute_draw_list(surface, &list)
}

/// Map + draw the timeline of `snapshot` onto `surface`, with a playhead at `current_time`
/// when one is given.
///
/// Fails with [`VizError::Config`](crate::VizError::Config) when the snapshot has no source
/// nodes or a non-positive duration; in that case the surface receives no primitive at all.
#[tracing::instrument(skip(snapshot, surface), fields(sources = snapshot.sources.len()))]
pub fn render_timeline_view<S: DrawSurface + ?Sized>(
    snapshot: &GraphSnapshot,
    surface: &mut S,
    current_time: Option<f64>,
) -> VizResult<()> {
    let list = compile_timeline_view(surface.canvas(), snapshot, current_time)?;
    execute_draw_list(surface, &list)
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
