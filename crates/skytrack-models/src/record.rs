//! Flat per-frame track rows for downstream logging.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::track::{Track, TrackId};

/// One row per track per frame, in the column order of the track log:
/// `frame_idx, track_id, cls_id, conf, x1, y1, x2, y2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TrackRecord {
    pub frame_idx: u64,
    pub track_id: TrackId,
    pub cls_id: u32,
    pub conf: f32,
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl TrackRecord {
    /// Flatten a track as seen in the given frame.
    pub fn from_track(frame_idx: u64, track: &Track) -> Self {
        Self {
            frame_idx,
            track_id: track.id,
            cls_id: track.class_id,
            conf: track.confidence,
            x1: track.bbox.x1,
            y1: track.bbox.y1,
            x2: track.bbox.x2,
            y2: track.bbox.y2,
        }
    }
}
