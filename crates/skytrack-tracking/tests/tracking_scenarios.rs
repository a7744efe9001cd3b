//! End-to-end tracking scenarios across multiple frames.

use std::collections::BTreeSet;

use skytrack_tracking::{
    BoundingBox, Detection, DetectionFilter, IouTracker, ObjectDetector, TrackId, TrackerConfig,
    TrackingError, TrackingResult, TrackingSession,
};

/// A car driving right by `speed` pixels per frame.
fn moving_car(frame: i32, start_x: i32, speed: i32) -> Detection {
    let x = start_x + frame * speed;
    Detection::new(2, 0.9, (x, 100, x + 40, 130))
}

/// Detector replaying a fixed detection list per frame index.
struct Replay(Vec<Vec<Detection>>);

impl ObjectDetector for Replay {
    type Frame = usize;

    fn infer(&self, frame: &usize) -> TrackingResult<Vec<Detection>> {
        self.0
            .get(*frame)
            .cloned()
            .ok_or_else(|| TrackingError::detection_failed(self.name(), "no such frame"))
    }

    fn name(&self) -> &'static str {
        "replay"
    }
}

#[test]
fn test_two_cars_keep_their_ids() {
    let mut tracker = IouTracker::new(TrackerConfig::default()).unwrap();

    for frame in 0..20 {
        let tracks = tracker.update(&[moving_car(frame, 0, 3), moving_car(frame, 400, -3)]);
        let ids: Vec<TrackId> = tracks.keys().copied().collect();
        assert_eq!(ids, vec![1, 2], "frame {frame}");
        assert!(tracks.values().all(|t| t.lost == 0));
    }
    assert_eq!(tracker.next_id(), 3);
}

#[test]
fn test_occlusion_within_max_lost_keeps_identity() {
    let mut tracker = IouTracker::new(TrackerConfig::new(0.3, 5)).unwrap();

    tracker.update(&[moving_car(0, 0, 0)]);
    // Aging runs before matching, so the car must reappear by the fifth call
    for expected_lost in 1..=4 {
        let tracks = tracker.update(&[]);
        assert_eq!(tracks[&1].lost, expected_lost);
    }

    let tracks = tracker.update(&[moving_car(0, 2, 0)]);
    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[&1].lost, 0);
    assert_eq!(tracks[&1].bbox, BoundingBox::new(2, 100, 42, 130));
}

#[test]
fn test_expiry_at_max_lost_plus_one() {
    let max_lost = 4;
    let mut tracker = IouTracker::new(TrackerConfig::new(0.3, max_lost)).unwrap();
    tracker.update(&[moving_car(0, 0, 0)]);

    for call in 1..=max_lost + 1 {
        let tracks = tracker.update(&[]);
        if call <= max_lost {
            assert_eq!(tracks[&1].lost, call);
        } else {
            assert!(tracks.is_empty());
        }
    }

    // The same box returns under a fresh identity
    let tracks = tracker.update(&[moving_car(0, 0, 0)]);
    assert_eq!(tracks.keys().copied().collect::<Vec<_>>(), vec![2]);
}

#[test]
fn test_matching_is_one_to_one() {
    let mut tracker = IouTracker::new(TrackerConfig::new(0.1, 10)).unwrap();

    // Three overlapping cars in a queue
    tracker.update(&[
        Detection::new(2, 0.9, (0, 0, 40, 30)),
        Detection::new(2, 0.9, (20, 0, 60, 30)),
        Detection::new(2, 0.9, (40, 0, 80, 30)),
    ]);

    // Shifted slightly; each track must claim a distinct detection
    let detections = [
        Detection::new(2, 0.8, (2, 0, 42, 30)),
        Detection::new(2, 0.8, (22, 0, 62, 30)),
        Detection::new(2, 0.8, (42, 0, 82, 30)),
    ];
    let tracks = tracker.update(&detections);

    assert_eq!(tracks.len(), 3);
    let boxes: BTreeSet<(i32, i32, i32, i32)> =
        tracks.values().map(|t| t.bbox.into()).collect();
    assert_eq!(boxes.len(), 3);
    assert!(tracks.values().all(|t| t.lost == 0));
}

#[test]
fn test_session_replays_stream() {
    let frames = vec![
        vec![moving_car(0, 0, 5)],
        vec![moving_car(1, 0, 5), Detection::new(0, 0.9, (300, 300, 310, 330))],
        vec![],
        vec![moving_car(3, 0, 5), moving_car(3, 600, 0)],
    ];
    let mut session = TrackingSession::new(
        Replay(frames),
        DetectionFilter::cars_only(0.35),
        IouTracker::new(TrackerConfig::default()).unwrap(),
    );

    let mut rows = Vec::new();
    for frame in 0..4 {
        let result = session.process_frame(&frame).unwrap();
        rows.extend(result.records());
    }

    // The person never becomes a track; the car is continuous despite the gap
    let ids: BTreeSet<TrackId> = rows.iter().map(|r| r.track_id).collect();
    assert_eq!(ids, BTreeSet::from([1, 2]));
    assert_eq!(rows.iter().filter(|r| r.track_id == 1).count(), 4);
    assert_eq!(rows.last().map(|r| (r.frame_idx, r.track_id)), Some((4, 2)));

    assert!(session.process_frame(&10).is_err());
    assert_eq!(session.frames_processed(), 4);
}

#[test]
fn test_streams_are_independent() {
    let mut a = IouTracker::default();
    let mut b = IouTracker::default();

    a.update(&[moving_car(0, 0, 0), moving_car(0, 200, 0)]);
    let tracks = b.update(&[moving_car(0, 0, 0)]);

    assert_eq!(tracks.keys().copied().collect::<Vec<_>>(), vec![1]);
    assert_eq!(a.len(), 2);
}
