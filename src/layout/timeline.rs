use crate::{
    foundation::core::{Canvas, Rect, Rgba8},
    foundation::error::{VizError, VizResult},
    graph::model::{GraphSnapshot, MediaKind, NodeId},
};

/// Translucent black drawn over every transition interval.
pub const TRANSITION_OVERLAY_COLOR: Rgba8 = Rgba8::rgba(0, 0, 0, 77);
pub const PLAYHEAD_COLOR: Rgba8 = Rgba8::BLACK;
pub const PLAYHEAD_WIDTH_PX: f64 = 1.0;

const VIDEO_PALETTE: [Rgba8; 2] = [Rgba8::rgb(0x57, 0x2A, 0x72), Rgba8::rgb(0x3C, 0x12, 0x55)];
const IMAGE_PALETTE: [Rgba8; 2] = [Rgba8::rgb(0x7D, 0x9F, 0x35), Rgba8::rgb(0x57, 0x77, 0x14)];
const CANVAS_PALETTE: [Rgba8; 2] = [Rgba8::rgb(0xAA, 0x96, 0x39), Rgba8::rgb(0x80, 0x6D, 0x15)];

/// Track colors for a media kind. Never empty.
pub fn media_palette(media: MediaKind) -> &'static [Rgba8] {
    match media {
        MediaKind::Video => &VIDEO_PALETTE,
        MediaKind::Image => &IMAGE_PALETTE,
        MediaKind::Canvas => &CANVAS_PALETTE,
    }
}

/// Color of the track in `lane`, cycling through the media palette.
pub fn track_color(media: MediaKind, lane: usize) -> Rgba8 {
    let palette = media_palette(media);
    palette[lane % palette.len()]
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Seconds-to-pixels mapping for one timeline frame.
pub struct TimeScale {
    pub pixels_per_second: f64,
    pub track_height: f64,
}

impl TimeScale {
    pub fn new(canvas: Canvas, duration: f64, track_count: usize) -> VizResult<Self> {
        // Negated to also reject NaN.
        if !(duration > 0.0) {
            return Err(VizError::config(format!(
                "timeline duration must be > 0 seconds (got {duration})"
            )));
        }
        if track_count == 0 {
            return Err(VizError::config(
                "timeline view requires at least one source node",
            ));
        }
        Ok(Self {
            pixels_per_second: canvas.width_f64() / duration,
            track_height: canvas.height_f64() / track_count as f64,
        })
    }

    pub fn time_to_x(&self, seconds: f64) -> f64 {
        seconds * self.pixels_per_second
    }

    pub fn lane_y(&self, lane: usize) -> f64 {
        lane as f64 * self.track_height
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// What a timeline rectangle depicts.
pub enum TimelineItem {
    /// One interval of one animated property of a transition node.
    Transition { node: NodeId, property_index: usize },
    /// The active span of a source node.
    Track { node: NodeId, lane: usize },
    Playhead,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TimelineRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub color: Rgba8,
    pub item: TimelineItem,
}

impl TimelineRect {
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size((self.x, self.y), (self.w, self.h))
    }
}

#[derive(Clone, Debug, serde::Serialize)]
/// Every fill rectangle of one timeline frame, grouped by paint layer.
pub struct TimelineFrame {
    pub scale: TimeScale,
    pub overlays: Vec<TimelineRect>,
    pub tracks: Vec<TimelineRect>,
    pub playhead: Option<TimelineRect>,
}

impl TimelineFrame {
    /// Paint order: overlays, tracks, playhead.
    pub fn rects(&self) -> impl Iterator<Item = &TimelineRect> + '_ {
        self.overlays
            .iter()
            .chain(self.tracks.iter())
            .chain(self.playhead.iter())
    }
}

/// Map the snapshot's time domain onto `canvas`.
///
/// `current_time`, when supplied, adds a one-pixel playhead. Overlapping transition
/// intervals are kept as separate overlays.
#[tracing::instrument(skip(snapshot), fields(sources = snapshot.sources.len()))]
pub fn map_timeline(
    canvas: Canvas,
    snapshot: &GraphSnapshot,
    current_time: Option<f64>,
) -> VizResult<TimelineFrame> {
    let scale = TimeScale::new(canvas, snapshot.duration, snapshot.sources.len())?;
    let h = canvas.height_f64();

    let mut overlays = Vec::with_capacity(snapshot.transition_interval_count());
    for (node, transitions) in snapshot.transition_nodes() {
        for (property_index, intervals) in transitions.values().enumerate() {
            for iv in intervals {
                overlays.push(TimelineRect {
                    x: scale.time_to_x(iv.start),
                    y: 0.0,
                    w: (iv.end - iv.start) * scale.pixels_per_second,
                    h,
                    color: TRANSITION_OVERLAY_COLOR,
                    item: TimelineItem::Transition {
                        node,
                        property_index,
                    },
                });
            }
        }
    }

    let tracks = snapshot
        .sources
        .iter()
        .enumerate()
        .map(|(lane, s)| TimelineRect {
            x: scale.time_to_x(s.start_time),
            y: scale.lane_y(lane),
            w: (s.stop_time - s.start_time) * scale.pixels_per_second,
            h: scale.track_height,
            color: track_color(s.media, lane),
            item: TimelineItem::Track { node: s.id, lane },
        })
        .collect();

    let playhead = current_time.map(|t| TimelineRect {
        x: scale.time_to_x(t),
        y: 0.0,
        w: PLAYHEAD_WIDTH_PX,
        h,
        color: PLAYHEAD_COLOR,
        item: TimelineItem::Playhead,
    });

    Ok(TimelineFrame {
        scale,
        overlays,
        tracks,
        playhead,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/layout/timeline.rs"]
mod tests;
