//! Configuration for the tracker and detection post-filter.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use skytrack_models::{Detection, COCO_CAR};

use crate::error::{TrackingError, TrackingResult};

/// Tracker configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Minimum IoU required to continue a track, in (0, 1] (default: 0.3)
    pub iou_threshold: f64,

    /// Consecutive unmatched frames tolerated before a track is dropped (default: 30)
    pub max_lost: u32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            iou_threshold: 0.3,
            max_lost: 30,
        }
    }
}

impl TrackerConfig {
    /// Create a configuration. Not validated until handed to a tracker.
    pub fn new(iou_threshold: f64, max_lost: u32) -> Self {
        Self {
            iou_threshold,
            max_lost,
        }
    }

    /// Create config from environment variables.
    ///
    /// Reads `SKYTRACK_IOU_THRESHOLD` and `SKYTRACK_MAX_LOST`; absent or
    /// unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            iou_threshold: var("SKYTRACK_IOU_THRESHOLD")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.iou_threshold),
            max_lost: var("SKYTRACK_MAX_LOST")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.max_lost),
        }
    }

    /// Keeps identities through occlusions and jittery boxes.
    pub fn sticky() -> Self {
        Self {
            iou_threshold: 0.2,
            max_lost: 60,
        }
    }

    /// Demands tight overlap and forgets quickly.
    pub fn strict() -> Self {
        Self {
            iou_threshold: 0.5,
            max_lost: 10,
        }
    }

    /// Check that the threshold lies in (0, 1] and `max_lost` is positive.
    pub fn validate(&self) -> TrackingResult<()> {
        if !(self.iou_threshold > 0.0 && self.iou_threshold <= 1.0) {
            return Err(TrackingError::invalid_config(format!(
                "iou_threshold must be in (0, 1], got {}",
                self.iou_threshold
            )));
        }
        if self.max_lost == 0 {
            return Err(TrackingError::invalid_config("max_lost must be positive"));
        }
        Ok(())
    }
}

/// Post-filter applied to raw detector output before tracking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionFilter {
    /// Detections below this confidence are dropped (default: 0.25)
    pub min_confidence: f32,

    /// Allowed class IDs; `None` keeps every class (default: cars only)
    pub classes: Option<BTreeSet<u32>>,
}

impl Default for DetectionFilter {
    fn default() -> Self {
        Self::cars_only(0.25)
    }
}

impl DetectionFilter {
    /// Keep every class at or above `min_confidence`.
    pub fn any_class(min_confidence: f32) -> Self {
        Self {
            min_confidence,
            classes: None,
        }
    }

    /// Keep only COCO cars at or above `min_confidence`.
    pub fn cars_only(min_confidence: f32) -> Self {
        Self {
            min_confidence,
            classes: Some(BTreeSet::from([COCO_CAR])),
        }
    }

    /// Create filter from environment variables.
    ///
    /// Reads `SKYTRACK_MIN_CONFIDENCE` and `SKYTRACK_ONLY_CARS`.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let min_confidence = var("SKYTRACK_MIN_CONFIDENCE")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0.25);
        let only_cars = var("SKYTRACK_ONLY_CARS")
            .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
            .unwrap_or(true);

        if only_cars {
            Self::cars_only(min_confidence)
        } else {
            Self::any_class(min_confidence)
        }
    }

    /// Whether a single detection passes the filter.
    pub fn accepts(&self, detection: &Detection) -> bool {
        detection.confidence >= self.min_confidence
            && self
                .classes
                .as_ref()
                .map_or(true, |classes| classes.contains(&detection.class_id))
    }

    /// Drop detections that fail the filter, preserving order.
    pub fn apply(&self, mut detections: Vec<Detection>) -> Vec<Detection> {
        detections.retain(|d| self.accepts(d));
        detections
    }
}
