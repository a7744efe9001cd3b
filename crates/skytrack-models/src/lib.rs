//! Shared data models for the skytrack pipeline.
//!
//! This crate provides Serde-serializable types for:
//! - Pixel bounding boxes and IoU
//! - Per-frame detections from an object detector
//! - Identity-tagged tracks and their per-frame log records
//! - COCO class names for labelling

pub mod bbox;
pub mod classes;
pub mod detection;
pub mod record;
pub mod track;

// Re-export common types
pub use bbox::{BoundingBox, IOU_EPSILON};
pub use classes::{coco_class_id, coco_class_name, COCO_CAR, COCO_CLASSES};
pub use detection::Detection;
pub use record::TrackRecord;
pub use track::{Track, TrackId};
