//! Tracking metrics emitted through the `metrics` facade.
//!
//! Nothing is recorded unless the host process installs a recorder.

use metrics::{counter, gauge};

/// Metric names as constants for consistency.
pub mod names {
    pub const TRACKS_CREATED_TOTAL: &str = "skytrack_tracks_created_total";
    pub const TRACKS_MATCHED_TOTAL: &str = "skytrack_tracks_matched_total";
    pub const TRACKS_EXPIRED_TOTAL: &str = "skytrack_tracks_expired_total";
    pub const ACTIVE_TRACKS: &str = "skytrack_active_tracks";
    pub const FRAMES_PROCESSED_TOTAL: &str = "skytrack_frames_processed_total";
}

/// Record the outcome of one tracker update.
pub fn record_update(matched: usize, created: usize, expired: usize, active: usize) {
    counter!(names::TRACKS_MATCHED_TOTAL).increment(matched as u64);
    counter!(names::TRACKS_CREATED_TOTAL).increment(created as u64);
    counter!(names::TRACKS_EXPIRED_TOTAL).increment(expired as u64);
    gauge!(names::ACTIVE_TRACKS).set(active as f64);
}

/// Record a frame processed by a session.
pub fn record_frame(detector: &'static str) {
    counter!(names::FRAMES_PROCESSED_TOTAL, "detector" => detector).increment(1);
}
