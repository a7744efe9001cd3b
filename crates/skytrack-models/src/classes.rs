//! COCO class names used by the stock YOLOv8 detector weights.

/// COCO class names (80 classes).
pub const COCO_CLASSES: &[&str] = &[
    "person", "bicycle", "car", "motorcycle", "airplane", "bus", "train", "truck",
    "boat", "traffic light", "fire hydrant", "stop sign", "parking meter", "bench",
    "bird", "cat", "dog", "horse", "sheep", "cow", "elephant", "bear", "zebra",
    "giraffe", "backpack", "umbrella", "handbag", "tie", "suitcase", "frisbee",
    "skis", "snowboard", "sports ball", "kite", "baseball bat", "baseball glove",
    "skateboard", "surfboard", "tennis racket", "bottle", "wine glass", "cup",
    "fork", "knife", "spoon", "bowl", "banana", "apple", "sandwich", "orange",
    "broccoli", "carrot", "hot dog", "pizza", "donut", "cake", "chair", "couch",
    "potted plant", "bed", "dining table", "toilet", "tv", "laptop", "mouse",
    "remote", "keyboard", "cell phone", "microwave", "oven", "toaster", "sink",
    "refrigerator", "book", "clock", "vase", "scissors", "teddy bear", "hair drier",
    "toothbrush",
];

/// COCO class ID for "car".
pub const COCO_CAR: u32 = 2;

/// Look up the COCO name for a class ID.
pub fn coco_class_name(class_id: u32) -> Option<&'static str> {
    COCO_CLASSES.get(class_id as usize).copied()
}

/// Look up the COCO class ID for a name, ignoring case.
pub fn coco_class_id(name: &str) -> Option<u32> {
    let name = name.trim();
    COCO_CLASSES
        .iter()
        .position(|n| n.eq_ignore_ascii_case(name))
        .map(|idx| idx as u32)
}
