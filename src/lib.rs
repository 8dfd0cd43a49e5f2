//! graphview draws debugging views of a media-processing dataflow graph.
//!
//! Two views are available, both built from a [`GraphSnapshot`]:
//!
//! - a node-link diagram of source, processing and destination nodes ([`render_graph_view`])
//! - a timeline of source tracks, transition spans and a playhead ([`render_timeline_view`])
//!
//! Layout is pure: each view compiles into a [`DrawList`] that is then replayed against any
//! [`DrawSurface`]. [`RecordingSurface`] keeps the command log, [`CpuSurface`] rasterizes it.
#![forbid(unsafe_code)]

mod foundation;

/// Snapshot model of the graph being inspected.
pub mod graph;
/// Property inspector forms.
pub mod inspector;
/// Screen-space layout of nodes, edges and timeline rectangles.
pub mod layout;
/// Draw commands, surfaces and the view entry points.
pub mod render;

pub use crate::foundation::core::{Canvas, Point, Rect, Rgba8, Size};
pub use crate::foundation::error::{VizError, VizResult};

pub use crate::graph::model::{
    Connection, DestinationNode, GraphSnapshot, MediaKind, NodeId, ProcessingKind,
    ProcessingNode, Properties, PropertyValue, SourceNode, TransitionInterval,
};
pub use crate::inspector::form::{
    ControlForm, PropertySection, Slider, SliderBinding, build_control_form,
};
pub use crate::layout::edges::{EdgeSegment, resolve_connections};
pub use crate::layout::nodes::{NodeRole, Placement, RenderNode, layout_nodes};
pub use crate::layout::timeline::{TimeScale, TimelineFrame, TimelineRect, map_timeline};
pub use crate::render::commands::{
    DrawCommand, DrawList, GraphViewOpts, LineStroke, compile_graph_view, compile_timeline_view,
};
pub use crate::render::cpu::{CpuSurface, FrameRGBA, RenderSettings};
pub use crate::render::pipeline::{render_graph_view, render_timeline_view};
pub use crate::render::surface::{DrawSurface, RecordingSurface, execute_draw_list};

#[cfg(test)]
#[path = "../tests/unit/fixtures.rs"]
pub(crate) mod test_fixtures;
