//! IoU-based tracker for maintaining object identity across frames.
//!
//! Uses greedy matching by Intersection over Union to associate each
//! frame's detections with the tracks of previous frames.
//!
//! Every call to [`IouTracker::update`] runs three phases in order:
//! 1. Age every track and drop those past `max_lost`
//! 2. Greedily match surviving tracks (ascending ID) to their best free detection
//! 3. Spawn a new track for every detection left unmatched

use std::collections::BTreeMap;

use skytrack_models::{Detection, Track, TrackId};
use tracing::{debug, info, trace, warn};

use crate::config::TrackerConfig;
use crate::error::TrackingResult;
use crate::metrics;

/// Outcome counts of a single update call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateSummary {
    /// Existing tracks refreshed from a detection
    pub matched: usize,
    /// Tracks spawned from unmatched detections
    pub created: usize,
    /// Tracks dropped for exceeding `max_lost`
    pub expired: usize,
}

/// Greedy IoU tracker for maintaining identity across frames.
///
/// Owns the active track set and the ID counter. One instance per video
/// stream; calls must be serialized by the caller.
#[derive(Debug)]
pub struct IouTracker {
    config: TrackerConfig,
    /// Active tracks, iterated in ascending ID order during matching
    tracks: BTreeMap<TrackId, Track>,
    /// Next track ID to assign
    next_track_id: TrackId,
    last_summary: UpdateSummary,
}

impl Default for IouTracker {
    fn default() -> Self {
        Self {
            config: TrackerConfig::default(),
            tracks: BTreeMap::new(),
            next_track_id: 1,
            last_summary: UpdateSummary::default(),
        }
    }
}

impl IouTracker {
    /// Create a new tracker.
    ///
    /// Returns error if the configuration is out of range.
    pub fn new(config: TrackerConfig) -> TrackingResult<Self> {
        if let Err(e) = config.validate() {
            warn!(error = %e, "Rejected tracker configuration");
            return Err(e);
        }

        info!(
            iou_threshold = config.iou_threshold,
            max_lost = config.max_lost,
            "IoU tracker initialized"
        );

        Ok(Self {
            config,
            ..Default::default()
        })
    }

    /// Update tracks with one frame's detections.
    ///
    /// Never fails: empty or malformed boxes only age, match nothing, or
    /// spawn tracks with zero area.
    ///
    /// # Returns
    /// A copy of the active tracks keyed by ID.
    pub fn update(&mut self, detections: &[Detection]) -> BTreeMap<TrackId, Track> {
        let max_lost = self.config.max_lost;
        let iou_threshold = self.config.iou_threshold;
        let mut summary = UpdateSummary::default();

        // Age all tracks; expired ones cannot be matched this frame
        self.tracks.retain(|id, track| {
            track.lost += 1;
            if track.lost > max_lost {
                debug!(track_id = id, lost = track.lost, "Track expired");
                summary.expired += 1;
                false
            } else {
                true
            }
        });

        // Greedy matching by IoU
        let mut consumed = vec![false; detections.len()];

        for track in self.tracks.values_mut() {
            let mut best: Option<(usize, f64)> = None;

            for (det_idx, detection) in detections.iter().enumerate() {
                if consumed[det_idx] {
                    continue;
                }
                let iou = track.bbox.iou(&detection.bbox);
                // Strict comparison keeps the first of equal candidates
                if iou > best.map_or(0.0, |(_, best_iou)| best_iou) {
                    best = Some((det_idx, iou));
                }
            }

            if let Some((det_idx, iou)) = best.filter(|&(_, iou)| iou >= iou_threshold) {
                trace!(track_id = track.id, det_idx, iou, "Track matched");
                track.absorb(&detections[det_idx]);
                consumed[det_idx] = true;
                summary.matched += 1;
            }
        }

        // Create new tracks for unmatched detections
        for (det_idx, detection) in detections.iter().enumerate() {
            if consumed[det_idx] {
                continue;
            }
            let track_id = self.next_track_id;
            self.next_track_id += 1;

            trace!(track_id, class_id = detection.class_id, "Track created");
            self.tracks
                .insert(track_id, Track::from_detection(track_id, detection));
            summary.created += 1;
        }

        debug!(
            detections = detections.len(),
            matched = summary.matched,
            created = summary.created,
            expired = summary.expired,
            active = self.tracks.len(),
            "Tracker updated"
        );
        metrics::record_update(
            summary.matched,
            summary.created,
            summary.expired,
            self.tracks.len(),
        );
        self.last_summary = summary;

        self.tracks.clone()
    }

    /// Current configuration.
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Replace the configuration. Takes effect on the next update.
    pub fn set_config(&mut self, config: TrackerConfig) -> TrackingResult<()> {
        config.validate()?;
        if config != self.config {
            info!(
                iou_threshold = config.iou_threshold,
                max_lost = config.max_lost,
                "Tracker configuration changed"
            );
        }
        self.config = config;
        Ok(())
    }

    /// Change the match threshold. Takes effect on the next update.
    pub fn set_iou_threshold(&mut self, iou_threshold: f64) -> TrackingResult<()> {
        self.set_config(TrackerConfig {
            iou_threshold,
            ..self.config
        })
    }

    /// Change the expiry limit. Takes effect on the next update.
    pub fn set_max_lost(&mut self, max_lost: u32) -> TrackingResult<()> {
        self.set_config(TrackerConfig {
            max_lost,
            ..self.config
        })
    }

    /// Active tracks in ascending ID order.
    pub fn tracks(&self) -> impl Iterator<Item = &Track> {
        self.tracks.values()
    }

    /// Look up an active track.
    pub fn get(&self, id: TrackId) -> Option<&Track> {
        self.tracks.get(&id)
    }

    /// Get the number of active tracks.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether no track is active.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// ID the next spawned track will receive.
    pub fn next_id(&self) -> TrackId {
        self.next_track_id
    }

    /// Outcome of the most recent update.
    pub fn last_summary(&self) -> UpdateSummary {
        self.last_summary
    }

    /// Drop all active tracks.
    ///
    /// The ID counter keeps running so earlier IDs are never handed out again.
    pub fn reset(&mut self) {
        debug!(dropped = self.tracks.len(), "Tracker reset");
        self.tracks.clear();
        self.last_summary = UpdateSummary::default();
    }
}
