//! JSON loading utilities for frame sets.

use crate::error::Result;
use crate::types::FrameSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load a frame set from a JSON file.
///
/// # Arguments
///
/// * `path` - Path to the JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
///
/// ```no_run
/// use frame_nms::loader::load_from_file;
///
/// let frame_set = load_from_file("detections.json").unwrap();
/// println!("Loaded {} frames", frame_set.frames.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<FrameSet> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let frame_set: FrameSet = serde_json::from_reader(reader)?;
    Ok(frame_set)
}

/// Load a frame set from a JSON string.
///
/// # Errors
///
/// Returns an error if the JSON cannot be parsed.
///
/// # Example
///
/// ```
/// use frame_nms::loader::load_from_string;
///
/// let json = r#"{
///     "frames": [
///         {
///             "detections": [
///                 {
///                     "bbox": {"x": 0.0, "y": 0.0, "width": 100.0, "height": 100.0},
///                     "class_id": 1,
///                     "score": 0.9
///                 }
///             ]
///         }
///     ]
/// }"#;
/// let frame_set = load_from_string(json).unwrap();
/// assert_eq!(frame_set.frames.len(), 1);
/// ```
pub fn load_from_string(json_str: &str) -> Result<FrameSet> {
    let frame_set: FrameSet = serde_json::from_str(json_str)?;
    Ok(frame_set)
}
