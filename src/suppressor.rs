//! Class-aware greedy non-maximum suppression.
//!
//! Detections are visited in descending-score order (stable on ties) and a
//! candidate is rejected as soon as it overlaps an already-kept detection of
//! the same class with IoU strictly greater than the threshold. Detections
//! of different classes never suppress each other.

use crate::error::{Result, SuppressionError};
use crate::iou::calculate_iou;
use crate::types::{BoundingBox, Detection};

/// Apply class-aware greedy NMS to one frame's detections.
///
/// The comparison against the threshold is strict `>`: an IoU exactly equal
/// to the threshold does not suppress. A threshold of 0.0 therefore rejects
/// any positive same-class overlap, while a threshold >= 1.0 keeps
/// everything since IoU never exceeds 1. Negative thresholds are accepted
/// and behave mechanically (any same-class IoU, including zero, suppresses).
///
/// Scores are ordered with [`f64::total_cmp`], so NaN scores never panic:
/// a positive NaN sorts ahead of every finite score, a negative NaN after,
/// and input order is preserved among equal scores.
///
/// # Arguments
///
/// * `detections` - One frame's detections (may be empty)
/// * `iou_threshold` - Maximum allowed IoU between two kept detections of
///   the same class
///
/// # Returns
///
/// Surviving detections, each an exact copy of an input detection, in
/// descending-score order (ties keep original input order).
///
/// # Example
///
/// ```
/// use frame_nms::suppressor::suppress;
/// use frame_nms::types::{BoundingBox, Detection};
///
/// let detections = vec![
///     Detection::new(BoundingBox::new(0.0, 0.0, 100.0, 100.0), 1, 0.9),
///     Detection::new(BoundingBox::new(10.0, 10.0, 100.0, 100.0), 1, 0.8),
///     Detection::new(BoundingBox::new(200.0, 200.0, 50.0, 50.0), 1, 0.95),
/// ];
///
/// let kept = suppress(&detections, 0.1);
/// assert_eq!(kept.len(), 2);
/// assert_eq!(kept[0].score, 0.95);
/// assert_eq!(kept[1].score, 0.9);
/// ```
#[must_use]
pub fn suppress(detections: &[Detection], iou_threshold: f64) -> Vec<Detection> {
    if detections.is_empty() {
        return Vec::new();
    }

    // Sort indices by score descending under IEEE 754 total ordering, which
    // stays transitive when NaN scores are present: positive NaN sorts ahead
    // of every finite score, negative NaN after. sort_by is stable, so equal
    // scores keep their input order.
    let mut indices: Vec<usize> = (0..detections.len()).collect();
    indices.sort_by(|&a, &b| detections[b].score.total_cmp(&detections[a].score));

    let mut kept: Vec<Detection> = Vec::new();
    for &idx in &indices {
        let candidate = &detections[idx];

        let survives = kept
            .iter()
            .filter(|k| k.class_id == candidate.class_id)
            .all(|k| calculate_iou(&candidate.bbox, &k.bbox) <= iou_threshold);

        if survives {
            kept.push(candidate.clone());
        }
    }

    kept
}

/// Apply class-aware greedy NMS to one frame given as three parallel
/// sequences.
///
/// This is the column-oriented boundary for callers that keep boxes, class
/// ids and scores in separate, index-aligned collections. The sequences
/// must have equal lengths.
///
/// # Arguments
///
/// * `boxes` - Bounding boxes
/// * `class_ids` - Class identifier per box
/// * `scores` - Confidence score per box
/// * `iou_threshold` - Maximum allowed IoU between two kept detections of
///   the same class
///
/// # Returns
///
/// The surviving (boxes, class_ids, scores) triple in descending-score
/// order.
///
/// # Errors
///
/// Returns `SuppressionError::LengthMismatch` if the three sequences do not
/// have equal lengths.
///
/// # Example
///
/// ```
/// use frame_nms::suppressor::suppress_columns;
/// use frame_nms::types::BoundingBox;
///
/// let boxes = vec![
///     BoundingBox::new(0.0, 0.0, 100.0, 100.0),
///     BoundingBox::new(10.0, 10.0, 100.0, 100.0),
/// ];
/// let (kept_boxes, kept_classes, kept_scores) =
///     suppress_columns(&boxes, &[1, 1], &[0.9, 0.8], 0.5).unwrap();
/// assert_eq!(kept_boxes.len(), 1);
/// assert_eq!(kept_classes, vec![1]);
/// assert_eq!(kept_scores, vec![0.9]);
/// ```
pub fn suppress_columns(
    boxes: &[BoundingBox],
    class_ids: &[i64],
    scores: &[f64],
    iou_threshold: f64,
) -> Result<(Vec<BoundingBox>, Vec<i64>, Vec<f64>)> {
    if boxes.len() != class_ids.len() || boxes.len() != scores.len() {
        return Err(SuppressionError::LengthMismatch(format!(
            "boxes ({}), class_ids ({}) and scores ({}) must have equal lengths",
            boxes.len(),
            class_ids.len(),
            scores.len()
        )));
    }

    let detections: Vec<Detection> = boxes
        .iter()
        .zip(class_ids)
        .zip(scores)
        .map(|((bbox, &class_id), &score)| Detection::new(bbox.clone(), class_id, score))
        .collect();

    let kept = suppress(&detections, iou_threshold);

    let mut out_boxes = Vec::with_capacity(kept.len());
    let mut out_classes = Vec::with_capacity(kept.len());
    let mut out_scores = Vec::with_capacity(kept.len());
    for det in kept {
        out_boxes.push(det.bbox);
        out_classes.push(det.class_id);
        out_scores.push(det.score);
    }

    Ok((out_boxes, out_classes, out_scores))
}
