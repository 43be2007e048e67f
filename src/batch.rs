//! Multi-frame suppression.
//!
//! Frames are independent, so suppressing a batch is a plain map over the
//! frames. A rayon-parallel variant is provided as a pure optimization; the
//! output is identical to the sequential one.

use rayon::prelude::*;

use crate::suppressor::suppress;
use crate::types::Frame;

/// Suppress every frame in a batch sequentially.
///
/// Each frame is filtered independently with the shared threshold; no state
/// crosses frame boundaries.
///
/// # Example
///
/// ```
/// use frame_nms::batch::suppress_frames;
/// use frame_nms::types::{BoundingBox, Detection, Frame};
///
/// let frames = vec![Frame::new(vec![
///     Detection::new(BoundingBox::new(0.0, 0.0, 100.0, 100.0), 1, 0.9),
///     Detection::new(BoundingBox::new(10.0, 10.0, 100.0, 100.0), 1, 0.8),
/// ])];
///
/// let filtered = suppress_frames(&frames, 0.5);
/// assert_eq!(filtered[0].len(), 1);
/// ```
#[must_use]
pub fn suppress_frames(frames: &[Frame], iou_threshold: f64) -> Vec<Frame> {
    frames
        .iter()
        .map(|frame| Frame::new(suppress(&frame.detections, iou_threshold)))
        .collect()
}

/// Suppress every frame in a batch, processing frames in parallel.
///
/// Produces exactly the same output as [`suppress_frames`]; within one
/// frame the greedy loop stays sequential (later decisions depend on
/// earlier-kept detections).
#[must_use]
pub fn suppress_frames_parallel(frames: &[Frame], iou_threshold: f64) -> Vec<Frame> {
    frames
        .par_iter()
        .map(|frame| Frame::new(suppress(&frame.detections, iou_threshold)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BoundingBox, Detection};

    fn overlapping_frame(n: usize) -> Frame {
        Frame::new(
            (0..n)
                .map(|i| {
                    let offset = i as f64;
                    Detection::new(
                        BoundingBox::new(10.0 + offset, 10.0 + offset, 60.0, 60.0),
                        (i % 3) as i64,
                        0.9 - offset * 0.005,
                    )
                })
                .collect(),
        )
    }

    #[test]
    fn test_empty_batch() {
        assert!(suppress_frames(&[], 0.5).is_empty());
    }

    #[test]
    fn test_frames_are_independent() {
        // The same overlapping pair in two frames: both frames keep exactly
        // one detection, neither affects the other.
        let frame = Frame::new(vec![
            Detection::new(BoundingBox::new(0.0, 0.0, 100.0, 100.0), 1, 0.9),
            Detection::new(BoundingBox::new(5.0, 5.0, 100.0, 100.0), 1, 0.8),
        ]);
        let filtered = suppress_frames(&[frame.clone(), frame], 0.5);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].len(), 1);
        assert_eq!(filtered[1], filtered[0]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let frames: Vec<Frame> = (0..8).map(|i| overlapping_frame(20 + i)).collect();
        let sequential = suppress_frames(&frames, 0.5);
        let parallel = suppress_frames_parallel(&frames, 0.5);
        assert_eq!(sequential, parallel);
    }
}
