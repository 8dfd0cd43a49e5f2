use crate::{
    foundation::core::{Canvas, Point, Rect, Rgba8},
    foundation::error::{VizError, VizResult},
    foundation::rng::Rng64,
    graph::model::{GraphSnapshot, NodeId, ProcessingKind},
};

/// Node rectangle aspect (width / height).
pub const NODE_ASPECT: f64 = 1.618;

pub const DESTINATION_COLOR: Rgba8 = Rgba8::rgb(0x7D, 0x9F, 0x35);
pub const SOURCE_COLOR: Rgba8 = Rgba8::rgb(0x57, 0x2A, 0x72);
pub const PROCESSING_COLOR: Rgba8 = Rgba8::rgb(0xAA, 0x96, 0x39);
pub const COMPOSITING_COLOR: Rgba8 = Rgba8::rgb(0x00, 0x00, 0x00);

/// Environment variable read by [`Placement::from_env`].
pub const LAYOUT_SEED_ENV: &str = "GRAPHVIEW_LAYOUT_SEED";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// How processing nodes are scattered inside their placement bounds.
pub enum Placement {
    /// Fresh randomness on every call; positions jitter between redraws.
    #[default]
    Jitter,
    /// Reproducible positions for a given seed and snapshot order.
    Seeded(u64),
}

impl Placement {
    /// `Seeded` when `GRAPHVIEW_LAYOUT_SEED` holds a `u64`, `Jitter` otherwise.
    pub fn from_env() -> Self {
        Self::from_seed_var(std::env::var(LAYOUT_SEED_ENV).ok().as_deref())
    }

    fn from_seed_var(value: Option<&str>) -> Self {
        value
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map_or(Self::Jitter, Self::Seeded)
    }

    fn rng(self) -> Rng64 {
        match self {
            Self::Jitter => Rng64::from_entropy(),
            Self::Seeded(seed) => Rng64::new(seed),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeRole {
    Destination,
    Source,
    Processing,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Screen-space projection of one graph node for a single render call.
pub struct RenderNode {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub color: Rgba8,
    pub node: NodeId,
    pub role: NodeRole,
}

impl RenderNode {
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size((self.x, self.y), (self.w, self.h))
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Node size shared by every rectangle of a graph view.
pub struct NodeMetrics {
    pub node_width: f64,
    pub node_height: f64,
}

impl NodeMetrics {
    /// Half a source row tall, golden-ratio wide.
    pub fn for_canvas(canvas: Canvas, source_count: usize) -> VizResult<Self> {
        if source_count == 0 {
            return Err(VizError::config(
                "graph view requires at least one source node",
            ));
        }
        let node_height = canvas.height_f64() / (2.0 * source_count as f64);
        Ok(Self {
            node_width: node_height * NODE_ASPECT,
            node_height,
        })
    }
}

/// Lay out every node of `snapshot`: destination first, then sources, then processing nodes.
///
/// Sources are stacked on the left edge by index, the destination is centered on the right
/// edge, and processing nodes are scattered inside
/// `[2·node_width, w − 4·node_width] × [node_height, h − node_height]`. Rectangles may overlap.
#[tracing::instrument(
    skip(snapshot),
    fields(sources = snapshot.sources.len(), processing = snapshot.processing.len())
)]
pub fn layout_nodes(
    canvas: Canvas,
    snapshot: &GraphSnapshot,
    placement: Placement,
) -> VizResult<Vec<RenderNode>> {
    let n = snapshot.sources.len();
    let NodeMetrics {
        node_width,
        node_height,
    } = NodeMetrics::for_canvas(canvas, n)?;
    let (w, h) = (canvas.width_f64(), canvas.height_f64());

    let mut out = Vec::with_capacity(1 + n + snapshot.processing.len());

    out.push(RenderNode {
        x: w - node_width,
        y: h / 2.0 - node_height / 2.0,
        w: node_width,
        h: node_height,
        color: DESTINATION_COLOR,
        node: snapshot.destination.id,
        role: NodeRole::Destination,
    });

    let row_height = h / n as f64;
    for (i, source) in snapshot.sources.iter().enumerate() {
        out.push(RenderNode {
            x: 0.0,
            y: i as f64 * row_height,
            w: node_width,
            h: node_height,
            color: SOURCE_COLOR,
            node: source.id,
            role: NodeRole::Source,
        });
    }

    let mut rng = placement.rng();
    for p in &snapshot.processing {
        let color = match p.kind {
            ProcessingKind::Compositing => COMPOSITING_COLOR,
            ProcessingKind::Effect | ProcessingKind::Transition { .. } => PROCESSING_COLOR,
        };
        let x = rng.range_f64(2.0 * node_width, w - 4.0 * node_width);
        let y = rng.range_f64(node_height, h - node_height);
        out.push(RenderNode {
            x,
            y,
            w: node_width,
            h: node_height,
            color,
            node: p.id,
            role: NodeRole::Processing,
        });
    }

    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/nodes.rs"]
mod tests;
