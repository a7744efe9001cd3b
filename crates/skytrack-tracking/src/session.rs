//! Per-stream tracking session.
//!
//! Couples one detector, one detection filter and one tracker, and counts
//! frames. Independent video streams each get their own session.

use std::collections::BTreeMap;

use skytrack_models::{coco_class_name, Detection, Track, TrackId, TrackRecord};
use tracing::{debug, warn};

use crate::config::DetectionFilter;
use crate::detector::ObjectDetector;
use crate::error::TrackingResult;
use crate::metrics;
use crate::tracker::IouTracker;

/// Tracks visible after processing one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameTracks {
    /// 1-based index of the frame within the stream
    pub frame_index: u64,
    /// Active tracks keyed by ID
    pub tracks: BTreeMap<TrackId, Track>,
}

impl FrameTracks {
    /// One log row per active track, in ascending ID order.
    pub fn records(&self) -> Vec<TrackRecord> {
        self.tracks
            .values()
            .map(|track| TrackRecord::from_track(self.frame_index, track))
            .collect()
    }

    /// Tracks refreshed by a detection in this frame.
    pub fn visible(&self) -> impl Iterator<Item = &Track> {
        self.tracks.values().filter(|t| t.is_matched())
    }

    /// Display label for a track: COCO class name, or the numeric class ID.
    pub fn label(&self, id: TrackId) -> Option<String> {
        self.tracks.get(&id).map(|track| {
            coco_class_name(track.class_id)
                .map(str::to_string)
                .unwrap_or_else(|| track.class_id.to_string())
        })
    }
}

/// Drives detector and tracker for a single video stream.
pub struct TrackingSession<D: ObjectDetector> {
    detector: D,
    filter: DetectionFilter,
    tracker: IouTracker,
    frame_index: u64,
}

impl<D: ObjectDetector> TrackingSession<D> {
    /// Create a new session.
    pub fn new(detector: D, filter: DetectionFilter, tracker: IouTracker) -> Self {
        Self {
            detector,
            filter,
            tracker,
            frame_index: 0,
        }
    }

    /// Detect, filter and track one frame.
    ///
    /// A detector error leaves the tracker and the frame counter untouched.
    pub fn process_frame(&mut self, frame: &D::Frame) -> TrackingResult<FrameTracks> {
        let raw = match self.detector.infer(frame) {
            Ok(detections) => detections,
            Err(e) => {
                warn!(
                    detector = self.detector.name(),
                    frame_index = self.frame_index + 1,
                    error = %e,
                    "Detection failed"
                );
                return Err(e);
            }
        };

        let raw_count = raw.len();
        let detections = self.filter.apply(raw);
        debug!(
            detector = self.detector.name(),
            raw = raw_count,
            kept = detections.len(),
            "Detections filtered"
        );

        metrics::record_frame(self.detector.name());
        Ok(self.observe(detections))
    }

    /// Track detections the caller already has, bypassing detector and filter.
    pub fn observe(&mut self, detections: Vec<Detection>) -> FrameTracks {
        self.frame_index += 1;
        let tracks = self.tracker.update(&detections);

        FrameTracks {
            frame_index: self.frame_index,
            tracks,
        }
    }

    /// Number of frames tracked so far.
    pub fn frames_processed(&self) -> u64 {
        self.frame_index
    }

    /// Read access to the tracker.
    pub fn tracker(&self) -> &IouTracker {
        &self.tracker
    }

    /// Tracker access for configuration changes between frames.
    pub fn tracker_mut(&mut self) -> &mut IouTracker {
        &mut self.tracker
    }

    /// Current detection filter.
    pub fn filter(&self) -> &DetectionFilter {
        &self.filter
    }

    /// Replace the detection filter. Takes effect on the next frame.
    pub fn set_filter(&mut self, filter: DetectionFilter) {
        self.filter = filter;
    }

    /// The wrapped detector.
    pub fn detector(&self) -> &D {
        &self.detector
    }
}
