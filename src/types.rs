//! Core data types for detections and frames.

use serde::{Deserialize, Serialize};

/// Represents a bounding box in (x, y, width, height) format.
///
/// Coordinates are in LTWH (Left-Top-Width-Height) format where:
/// - x: Left coordinate
/// - y: Top coordinate
/// - width: Box width
/// - height: Box height
///
/// A zero-area box is legal input and has IoU 0 with every box, including
/// itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    /// Create a new bounding box.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Get the area of the bounding box.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Get the right coordinate (x + width).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Get the bottom coordinate (y + height).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Check if the bounding box has positive dimensions.
    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// A single detected object: bounding box, class label, confidence score.
///
/// The score is typically in [0, 1] but is not required to be bounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub bbox: BoundingBox,
    /// Discrete class label. Detections of different classes never suppress
    /// each other.
    pub class_id: i64,
    /// Confidence score used for suppression ordering.
    pub score: f64,
}

impl Detection {
    /// Create a new detection.
    pub fn new(bbox: BoundingBox, class_id: i64, score: f64) -> Self {
        Self { bbox, class_id, score }
    }
}

/// One independent batch of detections.
///
/// Frames are processed independently of each other; no state crosses frame
/// boundaries.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Frame {
    pub detections: Vec<Detection>,
}

impl Frame {
    /// Create a frame from a list of detections.
    pub fn new(detections: Vec<Detection>) -> Self {
        Self { detections }
    }

    /// Number of detections in the frame.
    pub fn len(&self) -> usize {
        self.detections.len()
    }

    /// Whether the frame contains no detections.
    pub fn is_empty(&self) -> bool {
        self.detections.is_empty()
    }
}

/// A batch of frames, as loaded from JSON.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FrameSet {
    pub frames: Vec<Frame>,
}
