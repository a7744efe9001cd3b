#![deny(unreachable_patterns)]
//! Multi-object tracking by greedy IoU association.
//!
//! This crate provides:
//! - A deterministic IoU tracker with track creation, update and expiry
//! - Validated tracker configuration with environment overrides
//! - The upstream detector seam and detection post-filtering
//! - A per-stream session driving detector and tracker frame by frame
//!
//! # Data Flow
//!
//! ```text
//! Frame
//!   │
//!   ▼
//! ┌─────────────────┐
//! │ ObjectDetector  │ ← infer(frame) -> detections
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ DetectionFilter │ ← confidence / class allow-list
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   IouTracker    │ ← age, greedy match, spawn
//! └────────┬────────┘
//!          │
//!          ▼
//!    TrackId -> Track
//! ```

pub mod config;
pub mod detector;
pub mod error;
pub mod metrics;
pub mod session;
pub mod tracker;

pub use config::{DetectionFilter, TrackerConfig};
pub use detector::ObjectDetector;
pub use error::{TrackingError, TrackingResult};
pub use session::{FrameTracks, TrackingSession};
pub use tracker::{IouTracker, UpdateSummary};

// Shared models
pub use skytrack_models::{BoundingBox, Detection, Track, TrackId, TrackRecord};
