//! # frame-nms
//!
//! A Rust library for class-aware greedy Non-Maximum Suppression (NMS) over
//! per-frame sets of 2D bounding boxes.
//!
//! NMS is a post-processing filter applied after object detection to remove
//! redundant, heavily-overlapping detections of the same class, keeping the
//! highest-confidence representative of each cluster. This library provides:
//!
//! - **Class-aware suppression**: detections of different classes never
//!   suppress each other, regardless of overlap
//! - **Stable ordering**: equal-score detections are processed in input
//!   order, so results are deterministic
//! - **Strict threshold semantics**: an IoU exactly equal to the threshold
//!   does not suppress
//! - **Batch processing**: frames are independent and can be filtered
//!   sequentially or in parallel
//! - **IoU utilities**: pairwise and matrix IoU over axis-aligned boxes
//! - **JSON loading**: parse frame sets from files or strings
//!
//! ## Quick Start
//!
//! ```rust
//! use frame_nms::suppressor::suppress;
//! use frame_nms::types::{BoundingBox, Detection};
//!
//! let detections = vec![
//!     Detection::new(BoundingBox::new(0.0, 0.0, 100.0, 100.0), 1, 0.9),
//!     Detection::new(BoundingBox::new(10.0, 10.0, 100.0, 100.0), 1, 0.8),
//!     Detection::new(BoundingBox::new(200.0, 200.0, 50.0, 50.0), 1, 0.95),
//! ];
//!
//! // The two near-identical boxes collapse to the higher-scoring one; the
//! // distant box survives. Output is in descending-score order.
//! let kept = suppress(&detections, 0.1);
//! assert_eq!(kept.len(), 2);
//! assert_eq!(kept[0].score, 0.95);
//! assert_eq!(kept[1].score, 0.9);
//! ```
//!
//! ## JSON Format
//!
//! The loader expects frame sets in this shape:
//!
//! ```json
//! {
//!   "frames": [
//!     {
//!       "detections": [
//!         {
//!           "bbox": {"x": 0.0, "y": 0.0, "width": 100.0, "height": 100.0},
//!           "class_id": 1,
//!           "score": 0.95
//!         }
//!       ]
//!     }
//!   ]
//! }
//! ```

pub mod batch;
pub mod error;
pub mod iou;
pub mod loader;
pub mod suppressor;
pub mod types;

// Re-export commonly used types and functions
pub use batch::{suppress_frames, suppress_frames_parallel};
pub use error::{Result, SuppressionError};
pub use iou::{calculate_iou, calculate_iou_matrix};
pub use loader::{load_from_file, load_from_string};
pub use suppressor::{suppress, suppress_columns};
pub use types::{BoundingBox, Detection, Frame, FrameSet};
