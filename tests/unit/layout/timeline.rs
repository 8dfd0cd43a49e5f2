use super::*;
use crate::test_fixtures::{compositing, effect, snapshot, source, transition};

#[test]
fn pps_and_source_rect_for_reference_case() {
    let mut snap = snapshot(1);
    snap.duration = 10.0;
    snap.sources[0] = source(1, MediaKind::Video, 2.0, 5.0);
    let frame = map_timeline(Canvas::new(1000, 100), &snap, None).unwrap();
    assert_eq!(frame.scale.pixels_per_second, 100.0);
    let t = frame.tracks[0];
    assert_eq!(t.x, 200.0);
    assert_eq!(t.w, 300.0);
    assert_eq!(t.y, 0.0);
    assert_eq!(t.h, 100.0);
}

#[test]
fn lanes_follow_source_order() {
    let snap = snapshot(4);
    let frame = map_timeline(Canvas::new(400, 200), &snap, None).unwrap();
    assert_eq!(frame.scale.track_height, 50.0);
    for (i, t) in frame.tracks.iter().enumerate() {
        assert_eq!(t.y, i as f64 * 50.0);
        assert_eq!(
            t.item,
            TimelineItem::Track {
                node: snap.sources[i].id,
                lane: i
            }
        );
    }
}

#[test]
fn track_palette_is_keyed_by_media_and_cycles_by_lane() {
    let mut snap = snapshot(0);
    snap.sources = vec![
        source(1, MediaKind::Video, 0.0, 1.0),
        source(2, MediaKind::Video, 0.0, 1.0),
        source(3, MediaKind::Video, 0.0, 1.0),
        source(4, MediaKind::Image, 0.0, 1.0),
        source(5, MediaKind::Canvas, 0.0, 1.0),
    ];
    let frame = map_timeline(Canvas::new(100, 100), &snap, None).unwrap();
    let colors = frame.tracks.iter().map(|t| t.color).collect::<Vec<_>>();
    assert_eq!(colors[0], Rgba8::rgb(0x57, 0x2A, 0x72));
    assert_eq!(colors[1], Rgba8::rgb(0x3C, 0x12, 0x55));
    assert_eq!(colors[2], Rgba8::rgb(0x57, 0x2A, 0x72));
    assert_eq!(colors[3], Rgba8::rgb(0x57, 0x77, 0x14));
    assert_eq!(colors[4], Rgba8::rgb(0xAA, 0x96, 0x39));
}

#[test]
fn overlay_count_equals_total_interval_count() {
    let mut snap = snapshot(2);
    snap.processing = vec![
        transition(10, &[("mix", &[(1.0, 2.0), (1.5, 3.0)]), ("gain", &[(4.0, 6.0)])]),
        effect(11),
        compositing(12),
        transition(13, &[("mix", &[(0.0, 10.0)])]),
    ];
    let frame = map_timeline(Canvas::new(1000, 100), &snap, None).unwrap();
    assert_eq!(frame.overlays.len(), snap.transition_interval_count());
    assert_eq!(frame.overlays.len(), 4);
    for o in &frame.overlays {
        assert_eq!(o.y, 0.0);
        assert_eq!(o.h, 100.0);
        assert_eq!(o.color, TRANSITION_OVERLAY_COLOR);
    }
}

#[test]
fn overlay_spans_interval_in_pixels() {
    let mut snap = snapshot(1);
    snap.processing = vec![transition(10, &[("mix", &[(1.0, 2.5)])])];
    let frame = map_timeline(Canvas::new(1000, 80), &snap, None).unwrap();
    let o = frame.overlays[0];
    assert_eq!(o.x, 100.0);
    assert_eq!(o.w, 150.0);
    assert_eq!(
        o.item,
        TimelineItem::Transition {
            node: NodeId(10),
            property_index: 0
        }
    );
}

#[test]
fn playhead_present_iff_current_time_supplied() {
    let snap = snapshot(2);
    let canvas = Canvas::new(1000, 100);

    let frame = map_timeline(canvas, &snap, None).unwrap();
    assert!(frame.playhead.is_none());

    let frame = map_timeline(canvas, &snap, Some(3.25)).unwrap();
    let p = frame.playhead.unwrap();
    assert_eq!(p.x, 3.25 * frame.scale.pixels_per_second);
    assert_eq!(p.x, 325.0);
    assert_eq!(p.w, 1.0);
    assert_eq!(p.h, 100.0);
    assert_eq!(p.color, PLAYHEAD_COLOR);
}

#[test]
fn rects_iterate_in_paint_order() {
    let mut snap = snapshot(2);
    snap.processing = vec![transition(10, &[("mix", &[(1.0, 2.0)])])];
    let frame = map_timeline(Canvas::new(100, 100), &snap, Some(1.0)).unwrap();
    let items = frame.rects().map(|r| r.item).collect::<Vec<_>>();
    assert!(matches!(items[0], TimelineItem::Transition { .. }));
    assert!(matches!(items[1], TimelineItem::Track { lane: 0, .. }));
    assert!(matches!(items[2], TimelineItem::Track { lane: 1, .. }));
    assert_eq!(items[3], TimelineItem::Playhead);
    assert_eq!(items.len(), 4);
}

#[test]
fn non_positive_or_nan_duration_is_a_config_error() {
    for d in [0.0, -1.0, f64::NAN] {
        let mut snap = snapshot(2);
        snap.duration = d;
        let err = map_timeline(Canvas::new(100, 100), &snap, Some(0.0)).unwrap_err();
        assert!(err.is_config());
    }
}

#[test]
fn zero_sources_is_a_config_error() {
    let err = map_timeline(Canvas::new(100, 100), &snapshot(0), None).unwrap_err();
    assert!(err.is_config());
}

#[test]
fn scale_maps_time_and_lanes() {
    let scale = TimeScale::new(Canvas::new(1000, 100), 10.0, 2).unwrap();
    assert_eq!(scale.time_to_x(4.0), 400.0);
    assert_eq!(scale.lane_y(1), 50.0);
}
