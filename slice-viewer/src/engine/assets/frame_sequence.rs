use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::layout::config::SliceLayoutConfig;

/// One binary matrix, the source data of one slice.
///
/// The JSON value is kept as deserialized. Shape and cell values are checked by
/// the matrix mapper, so a malformed frame (`null`, booleans, ragged rows) only
/// fails its own slice instead of the whole sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Frame {
    raw: serde_json::Value,
}

impl Frame {
    pub fn new(rows: Vec<Vec<i64>>) -> Self {
        Self {
            raw: serde_json::Value::from(rows),
        }
    }

    pub fn raw(&self) -> &serde_json::Value {
        &self.raw
    }

    /// Number of cells equal to 1, regardless of shape.
    pub fn filled_cells(&self) -> usize {
        self.raw
            .as_array()
            .into_iter()
            .flatten()
            .filter_map(serde_json::Value::as_array)
            .flatten()
            .filter(|cell| cell.as_f64() == Some(1.0))
            .count()
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl From<Vec<Vec<i64>>> for Frame {
    fn from(rows: Vec<Vec<i64>>) -> Self {
        Self::new(rows)
    }
}

/// Ordered frames loaded from JSON. Frame position is the slice index and
/// therefore the angular order around the cylinder.
#[derive(Asset, TypePath, Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSequence {
    pub frames: Vec<Frame>,
    /// Optional layout override shipped with the data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<SliceLayoutConfig>,
}

impl FrameSequence {
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_frames_without_layout() {
        let json = r#"{ "frames": [[[1, 0], [0, 1]], [[1]]] }"#;
        let sequence: FrameSequence = serde_json::from_str(json).unwrap();

        assert_eq!(sequence.len(), 2);
        assert_eq!(sequence.frames[0], Frame::new(vec![vec![1, 0], vec![0, 1]]));
        assert!(sequence.layout.is_none());
    }

    #[test]
    fn keeps_ragged_rows_for_later_validation() {
        let json = r#"{ "frames": [[[1, 1], [1]]] }"#;
        let sequence: FrameSequence = serde_json::from_str(json).unwrap();

        assert_eq!(sequence.frames[0].filled_cells(), 3);
    }

    #[test]
    fn odd_cells_do_not_fail_the_whole_sequence() {
        let json = r#"{ "frames": [[[1, 0]], [[true, 0]], null, [[1.0, 0]], [[1]]] }"#;
        let sequence: FrameSequence = serde_json::from_str(json).unwrap();

        assert_eq!(sequence.len(), 5);
        assert!(sequence.frames[2].raw().is_null());
        assert_eq!(sequence.frames[3].filled_cells(), 1);
    }

    #[test]
    fn partial_layout_falls_back_to_defaults() {
        let json = r#"{ "frames": [], "layout": { "total_slices": 12 } }"#;
        let sequence: FrameSequence = serde_json::from_str(json).unwrap();
        let layout = sequence.layout.unwrap();

        assert_eq!(layout.total_slices, 12);
        assert_eq!(
            layout.cylinder_radius,
            SliceLayoutConfig::default().cylinder_radius
        );
    }
}
