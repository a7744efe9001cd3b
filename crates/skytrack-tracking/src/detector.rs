//! Upstream object detector seam.
//!
//! The tracker is agnostic to how detections are produced. Implementations
//! wrap a model (YOLOv8 or otherwise) and own frame decoding, color order and
//! inference; only their output crosses this boundary.

use skytrack_models::Detection;

use crate::error::TrackingResult;

/// Object detection provider.
pub trait ObjectDetector {
    /// Decoded image type the detector consumes.
    type Frame: ?Sized;

    /// Detect objects in a frame.
    ///
    /// # Returns
    /// Detections with pixel bounding boxes, in detector output order.
    fn infer(&self, frame: &Self::Frame) -> TrackingResult<Vec<Detection>>;

    /// Provider name for logging.
    fn name(&self) -> &'static str;
}

impl<D: ObjectDetector + ?Sized> ObjectDetector for Box<D> {
    type Frame = D::Frame;

    fn infer(&self, frame: &Self::Frame) -> TrackingResult<Vec<Detection>> {
        (**self).infer(frame)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
