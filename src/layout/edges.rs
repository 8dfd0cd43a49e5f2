use std::collections::HashMap;

use crate::{
    foundation::core::Point,
    graph::model::{Connection, NodeId},
    layout::nodes::RenderNode,
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// A connection resolved to a straight segment between two node centers.
pub struct EdgeSegment {
    pub source: NodeId,
    pub destination: NodeId,
    pub from: Point,
    pub to: Point,
}

/// Map each connection onto the centers of its endpoint rectangles.
///
/// Connections with an endpoint outside `nodes` are dropped silently. Duplicate and parallel
/// edges each produce their own segment. When several render nodes share an id, the first one
/// wins.
pub fn resolve_connections(nodes: &[RenderNode], connections: &[Connection]) -> Vec<EdgeSegment> {
    let mut by_id = HashMap::<NodeId, &RenderNode>::with_capacity(nodes.len());
    for node in nodes {
        by_id.entry(node.node).or_insert(node);
    }

    let mut out = Vec::with_capacity(connections.len());
    for conn in connections {
        let (Some(src), Some(dst)) = (by_id.get(&conn.source), by_id.get(&conn.destination))
        else {
            continue;
        };
        out.push(EdgeSegment {
            source: conn.source,
            destination: conn.destination,
            from: src.center(),
            to: dst.center(),
        });
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/layout/edges.rs"]
mod tests;
