//! Intersection over Union (IoU) calculation.

use crate::types::BoundingBox;

/// Calculate the overlap length of two 1D intervals.
///
/// Returns 0.0 when the intervals are disjoint. One interval fully
/// containing the other is handled correctly.
///
/// # Example
///
/// ```
/// use frame_nms::iou::overlap_1d;
///
/// assert_eq!(overlap_1d(0.0, 10.0, 5.0, 15.0), 5.0);
/// assert_eq!(overlap_1d(0.0, 10.0, 20.0, 30.0), 0.0);
/// assert_eq!(overlap_1d(0.0, 10.0, 2.0, 4.0), 2.0);
/// ```
pub fn overlap_1d(a_min: f64, a_max: f64, b_min: f64, b_max: f64) -> f64 {
    // Normalize so the interval starting first is on the left.
    let (left_max, right_min, right_max) = if a_min > b_min {
        (b_max, a_min, a_max)
    } else {
        (a_max, b_min, b_max)
    };

    if left_max < right_min {
        0.0
    } else {
        left_max.min(right_max) - right_min
    }
}

/// Calculate the Intersection over Union (IoU) between two bounding boxes.
///
/// IoU is defined as the area of intersection divided by the area of union.
/// When the union area is zero (both boxes degenerate) the IoU is defined
/// as 0.0 rather than dividing by zero.
///
/// # Arguments
///
/// * `bbox1` - First bounding box
/// * `bbox2` - Second bounding box
///
/// # Returns
///
/// Returns a value between 0.0 (no overlap) and 1.0 (identical boxes).
///
/// # Example
///
/// ```
/// use frame_nms::iou::calculate_iou;
/// use frame_nms::types::BoundingBox;
///
/// let bbox1 = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
/// let bbox2 = BoundingBox::new(5.0, 5.0, 10.0, 10.0);
/// let iou = calculate_iou(&bbox1, &bbox2);
/// assert!(iou > 0.0 && iou < 1.0);
/// ```
pub fn calculate_iou(bbox1: &BoundingBox, bbox2: &BoundingBox) -> f64 {
    let overlap_x = overlap_1d(bbox1.x, bbox1.right(), bbox2.x, bbox2.right());
    let overlap_y = overlap_1d(bbox1.y, bbox1.bottom(), bbox2.y, bbox2.bottom());
    let intersection_area = overlap_x * overlap_y;

    let union_area = bbox1.area() + bbox2.area() - intersection_area;

    // Avoid division by zero
    if union_area == 0.0 {
        return 0.0;
    }

    intersection_area / union_area
}

/// Calculate IoU matrix between two sets of bounding boxes.
///
/// Returns a 2D vector where `result[i][j]` is the IoU between `bboxes1[i]`
/// and `bboxes2[j]`.
///
/// # Example
///
/// ```
/// use frame_nms::iou::calculate_iou_matrix;
/// use frame_nms::types::BoundingBox;
///
/// let bboxes1 = vec![BoundingBox::new(0.0, 0.0, 10.0, 10.0)];
/// let bboxes2 = vec![BoundingBox::new(5.0, 5.0, 10.0, 10.0)];
/// let iou_matrix = calculate_iou_matrix(&bboxes1, &bboxes2);
/// assert_eq!(iou_matrix.len(), 1);
/// assert_eq!(iou_matrix[0].len(), 1);
/// ```
pub fn calculate_iou_matrix(bboxes1: &[BoundingBox], bboxes2: &[BoundingBox]) -> Vec<Vec<f64>> {
    bboxes1
        .iter()
        .map(|bbox1| {
            bboxes2
                .iter()
                .map(|bbox2| calculate_iou(bbox1, bbox2))
                .collect()
        })
        .collect()
}
