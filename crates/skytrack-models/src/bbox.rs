//! Axis-aligned bounding boxes in pixel coordinates.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Added to the IoU union so two empty boxes never divide by zero.
pub const IOU_EPSILON: f64 = 1e-6;

/// Bounding box in integer pixel coordinates, corner form.
///
/// Boxes are expected to satisfy `x1 <= x2` and `y1 <= y2`. Inverted boxes
/// are accepted as-is and treated as empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct BoundingBox {
    /// Left edge x-coordinate
    pub x1: i32,
    /// Top edge y-coordinate
    pub y1: i32,
    /// Right edge x-coordinate
    pub x2: i32,
    /// Bottom edge y-coordinate
    pub y2: i32,
}

impl BoundingBox {
    /// Create a new bounding box from its corners.
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Box width, zero for inverted boxes.
    #[inline]
    pub fn width(&self) -> i64 {
        (i64::from(self.x2) - i64::from(self.x1)).max(0)
    }

    /// Box height, zero for inverted boxes.
    #[inline]
    pub fn height(&self) -> i64 {
        (i64::from(self.y2) - i64::from(self.y1)).max(0)
    }

    /// Box area in pixels. Never negative.
    #[inline]
    pub fn area(&self) -> i64 {
        self.width() * self.height()
    }

    /// Whether the box covers no pixels.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.area() == 0
    }

    /// Area shared with another box.
    pub fn intersection_area(&self, other: &BoundingBox) -> i64 {
        let w = (i64::from(self.x2.min(other.x2)) - i64::from(self.x1.max(other.x1))).max(0);
        let h = (i64::from(self.y2.min(other.y2)) - i64::from(self.y1.max(other.y1))).max(0);
        w * h
    }

    /// Compute Intersection over Union with another box.
    ///
    /// The union carries [`IOU_EPSILON`], so identical boxes score just
    /// under 1.0 and two empty boxes score 0.0.
    pub fn iou(&self, other: &BoundingBox) -> f64 {
        let intersection = self.intersection_area(other);
        let union = (self.area() + other.area() - intersection) as f64 + IOU_EPSILON;
        intersection as f64 / union
    }
}

impl From<(i32, i32, i32, i32)> for BoundingBox {
    fn from((x1, y1, x2, y2): (i32, i32, i32, i32)) -> Self {
        Self::new(x1, y1, x2, y2)
    }
}

impl From<BoundingBox> for (i32, i32, i32, i32) {
    fn from(b: BoundingBox) -> Self {
        (b.x1, b.y1, b.x2, b.y2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iou_partial_overlap() {
        let a = BoundingBox::new(0, 0, 10, 10);
        let b = BoundingBox::new(5, 5, 15, 15);
        assert!((a.iou(&b) - 25.0 / 175.0).abs() < 1e-6);
    }

    #[test]
    fn test_iou_identical() {
        let a = BoundingBox::new(0, 0, 10, 10);
        assert!((a.iou(&a) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_iou_disjoint() {
        let a = BoundingBox::new(0, 0, 10, 10);
        let b = BoundingBox::new(20, 20, 30, 30);
        assert_eq!(a.iou(&b), 0.0);
    }

    #[test]
    fn test_iou_touching_edges() {
        let a = BoundingBox::new(0, 0, 10, 10);
        let b = BoundingBox::new(10, 0, 20, 10);
        assert_eq!(a.intersection_area(&b), 0);
        assert_eq!(a.iou(&b), 0.0);
    }

    #[test]
    fn test_iou_is_symmetric() {
        let a = BoundingBox::new(0, 0, 10, 10);
        let b = BoundingBox::new(1, 1, 11, 11);
        assert_eq!(a.iou(&b), b.iou(&a));
        assert!((a.iou(&b) - 81.0 / 119.0).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_boxes_have_zero_area() {
        let inverted = BoundingBox::new(10, 10, 0, 0);
        assert_eq!(inverted.width(), 0);
        assert_eq!(inverted.height(), 0);
        assert_eq!(inverted.area(), 0);
        assert!(inverted.is_degenerate());

        let line = BoundingBox::new(0, 0, 10, 0);
        assert_eq!(line.area(), 0);
    }

    #[test]
    fn test_iou_degenerate_never_nan() {
        let empty = BoundingBox::new(5, 5, 5, 5);
        let iou = empty.iou(&empty);
        assert!(iou.is_finite());
        assert_eq!(iou, 0.0);

        let inverted = BoundingBox::new(10, 10, 0, 0);
        let normal = BoundingBox::new(0, 0, 10, 10);
        assert_eq!(inverted.iou(&normal), 0.0);
    }

    #[test]
    fn test_large_boxes_do_not_overflow() {
        let a = BoundingBox::new(0, 0, 1_000_000, 1_000_000);
        assert_eq!(a.area(), 1_000_000_000_000);
        assert!((a.iou(&a) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_tuple_conversion() {
        let b: BoundingBox = (1, 2, 3, 4).into();
        assert_eq!(b, BoundingBox::new(1, 2, 3, 4));
        let t: (i32, i32, i32, i32) = b.into();
        assert_eq!(t, (1, 2, 3, 4));
    }
}
