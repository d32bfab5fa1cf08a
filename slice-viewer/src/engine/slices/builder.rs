use bevy::prelude::*;

use super::error::{SliceError, SliceResult};
use crate::engine::assets::frame_sequence::Frame;
use crate::engine::layout::config::SliceLayoutConfig;
use crate::engine::layout::mapper::matrix_to_points;
use crate::engine::layout::placement::{SliceTransform, place_slice};

/// Placement and points of one slice, ready to be spawned.
#[derive(Debug, Clone, PartialEq)]
pub struct SliceBlueprint {
    pub index: usize,
    pub transform: SliceTransform,
    pub points: Vec<Vec3>,
}

/// Outcome of building a whole frame sequence.
#[derive(Debug, Default)]
pub struct SliceBuildReport {
    pub blueprints: Vec<SliceBlueprint>,
    pub failures: Vec<(usize, SliceError)>,
}

pub fn build_slice(
    index: usize,
    frame: &Frame,
    config: &SliceLayoutConfig,
) -> SliceResult<SliceBlueprint> {
    if config.total_slices == 0 {
        return Err(SliceError::InvalidSliceCount(config.total_slices));
    }
    if index >= config.total_slices {
        return Err(SliceError::SliceOutOfRange {
            index,
            total: config.total_slices,
        });
    }

    let points = matrix_to_points(frame, config.point_spacing)?;
    Ok(SliceBlueprint {
        index,
        transform: place_slice(index, config.total_slices, config.cylinder_radius),
        points,
    })
}

/// Builds one blueprint per frame. A malformed frame is recorded as a failure
/// and the remaining frames are still built.
pub fn build_slices(frames: &[Frame], config: &SliceLayoutConfig) -> SliceBuildReport {
    let mut report = SliceBuildReport::default();
    for (index, frame) in frames.iter().enumerate() {
        match build_slice(index, frame, config) {
            Ok(blueprint) => report.blueprints.push(blueprint),
            Err(error) => report.failures.push((index, error)),
        }
    }
    report
}
