//! Per-frame detector output.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::bbox::BoundingBox;

/// One object observation in a single frame.
///
/// Produced fresh for every frame by the upstream detector and consumed by
/// the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Detection {
    /// Semantic object category (COCO class ID for stock weights)
    pub class_id: u32,
    /// Detection confidence [0, 1]
    pub confidence: f32,
    /// Bounding box in pixel coordinates
    pub bbox: BoundingBox,
}

impl Detection {
    /// Create a new detection.
    pub fn new(class_id: u32, confidence: f32, bbox: impl Into<BoundingBox>) -> Self {
        Self {
            class_id,
            confidence,
            bbox: bbox.into(),
        }
    }
}
