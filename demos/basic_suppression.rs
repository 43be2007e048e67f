//! Basic suppression example: build a few synthetic frames of staggered,
//! heavily-overlapping detections and run class-aware NMS over them.
//!
//! Run with: `cargo run --example basic_suppression`

use frame_nms::batch::suppress_frames;
use frame_nms::types::{BoundingBox, Detection, Frame};

fn print_frames(frames: &[Frame]) {
    for (frame_idx, frame) in frames.iter().enumerate() {
        println!("Frame {}:", frame_idx);
        for (i, det) in frame.detections.iter().enumerate() {
            println!(
                "  Object {}: ({}, {}), width: {}, height: {}, class: {}, score: {:.2}",
                i, det.bbox.x, det.bbox.y, det.bbox.width, det.bbox.height, det.class_id, det.score
            );
        }
    }
}

fn main() {
    // Five frames of five staggered 100x100 boxes each; neighbours overlap
    // heavily, so same-class runs collapse to their best-scoring member.
    let frames: Vec<Frame> = (0..5)
        .map(|frame_idx| {
            Frame::new(
                (0..5)
                    .map(|i| {
                        let offset = (i * 10) as f64;
                        Detection::new(
                            BoundingBox::new(offset, offset, 100.0, 100.0),
                            ((frame_idx + i) % 3) as i64 + 1,
                            0.5 + (i as f64) * 0.1,
                        )
                    })
                    .collect(),
            )
        })
        .collect();

    println!("**** Original frames");
    print_frames(&frames);

    let iou_threshold = 0.1;
    println!("** IoU threshold: {}", iou_threshold);

    let filtered = suppress_frames(&frames, iou_threshold);

    println!("**** After NMS");
    print_frames(&filtered);
}
