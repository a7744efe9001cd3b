//! Identity-tagged tracks owned by the tracker.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::bbox::BoundingBox;
use crate::detection::Detection;

/// Track identifier. Positive, assigned in increasing order, never reused.
pub type TrackId = u32;

/// A persistent identity linking detections across frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Track {
    /// Track ID
    pub id: TrackId,
    /// Last known bounding box
    pub bbox: BoundingBox,
    /// Class of the most recent matching detection
    pub class_id: u32,
    /// Confidence of the most recent matching detection
    pub confidence: f32,
    /// Consecutive frames since the last successful match
    pub lost: u32,
}

impl Track {
    /// Start a new track from an unmatched detection.
    pub fn from_detection(id: TrackId, detection: &Detection) -> Self {
        Self {
            id,
            bbox: detection.bbox,
            class_id: detection.class_id,
            confidence: detection.confidence,
            lost: 0,
        }
    }

    /// Refresh the track from a matching detection.
    pub fn absorb(&mut self, detection: &Detection) {
        self.bbox = detection.bbox;
        self.class_id = detection.class_id;
        self.confidence = detection.confidence;
        self.lost = 0;
    }

    /// Whether the track was created or matched in the latest update.
    #[inline]
    pub fn is_matched(&self) -> bool {
        self.lost == 0
    }
}
