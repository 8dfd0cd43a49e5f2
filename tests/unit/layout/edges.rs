use super::*;
use crate::{
    foundation::core::Canvas,
    layout::nodes::{NodeRole, Placement, SOURCE_COLOR, layout_nodes},
    test_fixtures::{connect, effect, snapshot},
};

fn node(id: u64, x: f64, y: f64) -> RenderNode {
    RenderNode {
        x,
        y,
        w: 10.0,
        h: 4.0,
        color: SOURCE_COLOR,
        node: NodeId(id),
        role: NodeRole::Source,
    }
}

#[test]
fn segment_joins_rectangle_centers() {
    let nodes = [node(1, 0.0, 0.0), node(2, 100.0, 50.0)];
    let segs = resolve_connections(&nodes, &[connect(1, 2)]);
    assert_eq!(segs.len(), 1);
    assert_eq!(segs[0].from, Point::new(5.0, 2.0));
    assert_eq!(segs[0].to, Point::new(105.0, 52.0));
    assert_eq!(segs[0].source, NodeId(1));
    assert_eq!(segs[0].destination, NodeId(2));
}

#[test]
fn unresolved_endpoints_are_skipped() {
    let nodes = [node(1, 0.0, 0.0), node(2, 100.0, 50.0)];
    let conns = [connect(1, 2), connect(1, 99), connect(98, 2), connect(97, 96)];
    let segs = resolve_connections(&nodes, &conns);
    assert_eq!(segs.len(), 1);
}

#[test]
fn duplicate_and_parallel_edges_are_kept() {
    let nodes = [node(1, 0.0, 0.0), node(2, 100.0, 50.0)];
    let conns = [connect(1, 2), connect(1, 2), connect(2, 1)];
    let segs = resolve_connections(&nodes, &conns);
    assert_eq!(segs.len(), 3);
    assert_eq!(segs[2].from, segs[0].to);
}

#[test]
fn first_render_node_wins_for_shared_ids() {
    let nodes = [node(1, 0.0, 0.0), node(1, 500.0, 500.0), node(2, 100.0, 50.0)];
    let segs = resolve_connections(&nodes, &[connect(1, 2)]);
    assert_eq!(segs[0].from, Point::new(5.0, 2.0));
}

#[test]
fn stroke_count_matches_resolvable_connections_for_laid_out_graph() {
    let mut snap = snapshot(3);
    snap.processing = vec![effect(10), effect(11)];
    snap.connections = vec![
        connect(1, 10),
        connect(2, 10),
        connect(3, 11),
        connect(10, 0),
        connect(11, 0),
        connect(42, 0),
    ];
    let nodes = layout_nodes(Canvas::new(800, 600), &snap, Placement::Seeded(5)).unwrap();
    let segs = resolve_connections(&nodes, &snap.connections);
    assert_eq!(segs.len(), 5);
    for seg in &segs {
        let src = nodes.iter().find(|n| n.node == seg.source).unwrap();
        assert_eq!(seg.from, src.center());
    }
}

#[derive(Clone, Default)]
struct EventCounter(std::sync::Arc<std::sync::atomic::AtomicUsize>);

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for EventCounter {
    fn on_event(
        &self,
        _event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        self.0.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    }
}

#[test]
fn unresolved_endpoints_are_skipped_without_log_records() {
    use tracing_subscriber::layer::SubscriberExt as _;

    let counter = EventCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    let nodes = [node(1, 0.0, 0.0)];
    let conns = [connect(1, 99), connect(98, 1)];

    let segs = tracing::subscriber::with_default(subscriber, || {
        resolve_connections(&nodes, &conns)
    });
    assert!(segs.is_empty());
    assert_eq!(counter.0.load(std::sync::atomic::Ordering::SeqCst), 0);
}
