//! Property-based tests using proptest
//!
//! These tests verify invariants of the suppression algorithm that should
//! always hold regardless of the input values.

use frame_nms::iou::calculate_iou;
use frame_nms::suppressor::suppress;
use frame_nms::types::{BoundingBox, Detection};
use proptest::prelude::*;

fn arb_detection() -> impl Strategy<Value = Detection> {
    (
        0.0f64..200.0,
        0.0f64..200.0,
        0.0f64..80.0,
        0.0f64..80.0,
        0i64..4,
        0.0f64..=1.0,
    )
        .prop_map(|(x, y, w, h, class_id, score)| {
            Detection::new(BoundingBox::new(x, y, w, h), class_id, score)
        })
}

fn arb_frame() -> impl Strategy<Value = Vec<Detection>> {
    prop::collection::vec(arb_detection(), 0..24)
}

// Property: IoU is symmetric
proptest! {
    #[test]
    fn prop_iou_symmetric(
        x1 in 0.0f64..100.0,
        y1 in 0.0f64..100.0,
        w1 in 0.0f64..50.0,
        h1 in 0.0f64..50.0,
        x2 in 0.0f64..100.0,
        y2 in 0.0f64..100.0,
        w2 in 0.0f64..50.0,
        h2 in 0.0f64..50.0,
    ) {
        let bbox1 = BoundingBox::new(x1, y1, w1, h1);
        let bbox2 = BoundingBox::new(x2, y2, w2, h2);

        let iou1 = calculate_iou(&bbox1, &bbox2);
        let iou2 = calculate_iou(&bbox2, &bbox1);

        assert!((iou1 - iou2).abs() < 1e-10,
                "IoU should be symmetric: {} vs {}", iou1, iou2);
    }
}

// Property: IoU is always between 0 and 1 for non-negative dimensions
proptest! {
    #[test]
    fn prop_iou_range(
        x1 in 0.0f64..100.0,
        y1 in 0.0f64..100.0,
        w1 in 0.0f64..50.0,
        h1 in 0.0f64..50.0,
        x2 in 0.0f64..100.0,
        y2 in 0.0f64..100.0,
        w2 in 0.0f64..50.0,
        h2 in 0.0f64..50.0,
    ) {
        let bbox1 = BoundingBox::new(x1, y1, w1, h1);
        let bbox2 = BoundingBox::new(x2, y2, w2, h2);

        let iou = calculate_iou(&bbox1, &bbox2);

        assert!(iou >= 0.0 && iou <= 1.0,
                "IoU should be in [0,1], got {}", iou);
    }
}

// Property: Identical positive-area boxes have IoU = 1.0
proptest! {
    #[test]
    fn prop_iou_identical(
        x in 0.0f64..100.0,
        y in 0.0f64..100.0,
        w in 1.0f64..50.0,
        h in 1.0f64..50.0,
    ) {
        let bbox = BoundingBox::new(x, y, w, h);
        let iou = calculate_iou(&bbox, &bbox);

        assert!((iou - 1.0).abs() < 1e-10,
                "Identical boxes should have IoU=1.0, got {}", iou);
    }
}

// Property: output is a subset of the input
proptest! {
    #[test]
    fn prop_output_subset_of_input(
        detections in arb_frame(),
        threshold in 0.0f64..=1.0,
    ) {
        let kept = suppress(&detections, threshold);

        assert!(kept.len() <= detections.len());
        for det in &kept {
            assert!(detections.contains(det),
                    "every survivor must be an exact copy of an input detection");
        }
    }
}

// Property: suppression is idempotent
proptest! {
    #[test]
    fn prop_idempotent(
        detections in arb_frame(),
        threshold in 0.0f64..=1.0,
    ) {
        let once = suppress(&detections, threshold);
        let twice = suppress(&once, threshold);

        assert_eq!(once, twice,
                   "suppressing an already-suppressed frame must be a no-op");
    }
}

// Property: the single highest-score detection always survives
proptest! {
    #[test]
    fn prop_highest_score_survives(
        detections in arb_frame(),
        threshold in 0.0f64..=1.0,
    ) {
        prop_assume!(!detections.is_empty());

        let kept = suppress(&detections, threshold);
        let max_score = detections
            .iter()
            .map(|d| d.score)
            .fold(f64::NEG_INFINITY, f64::max);

        assert!(!kept.is_empty());
        assert_eq!(kept[0].score, max_score,
                   "first survivor must carry the frame's top score");
    }
}

// Property: a larger threshold is weakly more permissive. For a pair of
// detections the kept count depends only on whether their IoU exceeds the
// threshold, so monotonicity holds exactly.
proptest! {
    #[test]
    fn prop_threshold_monotonicity_pairs(
        a in arb_detection(),
        b in arb_detection(),
        t1 in 0.0f64..=1.0,
        t2 in 0.0f64..=1.0,
    ) {
        let (low, high) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
        let detections = vec![a, b];

        let kept_low = suppress(&detections, low);
        let kept_high = suppress(&detections, high);

        assert!(kept_high.len() >= kept_low.len(),
                "threshold {} kept {}, threshold {} kept {}",
                low, kept_low.len(), high, kept_high.len());
    }
}

// Property: detections of different classes never suppress each other
proptest! {
    #[test]
    fn prop_class_isolation(
        x in 0.0f64..100.0,
        y in 0.0f64..100.0,
        w in 1.0f64..50.0,
        h in 1.0f64..50.0,
        score1 in 0.0f64..=1.0,
        score2 in 0.0f64..=1.0,
        threshold in 0.0f64..=1.0,
    ) {
        // Identical geometry, different classes: both always survive.
        let detections = vec![
            Detection::new(BoundingBox::new(x, y, w, h), 1, score1),
            Detection::new(BoundingBox::new(x, y, w, h), 2, score2),
        ];

        let kept = suppress(&detections, threshold);
        assert_eq!(kept.len(), 2,
                   "different classes must never suppress each other");
    }
}

// Property: output scores are in descending order
proptest! {
    #[test]
    fn prop_output_sorted_by_score(
        detections in arb_frame(),
        threshold in 0.0f64..=1.0,
    ) {
        let kept = suppress(&detections, threshold);

        for pair in kept.windows(2) {
            assert!(pair[0].score >= pair[1].score,
                    "output must be in descending-score order: {} before {}",
                    pair[0].score, pair[1].score);
        }
    }
}

// Property: every surviving same-class pair respects the threshold
proptest! {
    #[test]
    fn prop_survivors_respect_threshold(
        detections in arb_frame(),
        threshold in 0.0f64..=1.0,
    ) {
        let kept = suppress(&detections, threshold);

        for i in 0..kept.len() {
            for j in (i + 1)..kept.len() {
                if kept[i].class_id == kept[j].class_id {
                    let iou = calculate_iou(&kept[i].bbox, &kept[j].bbox);
                    assert!(iou <= threshold,
                            "same-class survivors with IoU {} > threshold {}",
                            iou, threshold);
                }
            }
        }
    }
}
