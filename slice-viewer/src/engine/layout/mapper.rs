use bevy::prelude::*;
use serde_json::Value;

use crate::engine::assets::frame_sequence::Frame;
use crate::engine::slices::error::{SliceError, SliceResult};

/// Decodes `frame` into a non-empty rectangular matrix of set/unset cells.
///
/// Numeric cells equal to 0 or 1 are accepted whatever their JSON number form,
/// so `1.0` counts as set. Anything else is a `NonBinaryCell`.
pub fn decode_frame(frame: &Frame) -> SliceResult<Vec<Vec<bool>>> {
    let rows = frame.raw().as_array().ok_or_else(|| {
        SliceError::NotAMatrix(format!("expected an array of rows, found {}", frame.raw()))
    })?;

    let mut matrix = Vec::with_capacity(rows.len());
    let mut width = None;
    for (row, cells) in rows.iter().enumerate() {
        let cells = cells
            .as_array()
            .ok_or_else(|| SliceError::NotAMatrix(format!("row {row} is {cells}, not an array")))?;

        let expected = *width.get_or_insert(cells.len());
        if expected == 0 {
            return Err(SliceError::EmptyFrame);
        }
        if cells.len() != expected {
            return Err(SliceError::NonRectangular {
                row,
                expected,
                found: cells.len(),
            });
        }

        let decoded = cells
            .iter()
            .enumerate()
            .map(|(col, value)| decode_cell(row, col, value))
            .collect::<SliceResult<Vec<bool>>>()?;
        matrix.push(decoded);
    }

    if matrix.is_empty() {
        return Err(SliceError::EmptyFrame);
    }
    Ok(matrix)
}

fn decode_cell(row: usize, col: usize, value: &Value) -> SliceResult<bool> {
    match value.as_f64() {
        Some(v) if v == 0.0 => Ok(false),
        Some(v) if v == 1.0 => Ok(true),
        _ => Err(SliceError::NonBinaryCell {
            row,
            col,
            value: value.to_string(),
        }),
    }
}

/// Checks that `frame` is a non-empty rectangular binary matrix and returns
/// its `(rows, cols)`.
pub fn frame_dimensions(frame: &Frame) -> SliceResult<(usize, usize)> {
    let matrix = decode_frame(frame)?;
    Ok((matrix.len(), matrix[0].len()))
}

/// Maps every 1-cell of `frame` to a slice-local position on the `z = 0`
/// plane, centred on the local origin and scaled by `spacing`.
///
/// The whole matrix is validated before any point is produced. Callers must
/// not rely on the order of the returned points.
pub fn matrix_to_points(frame: &Frame, spacing: f32) -> SliceResult<Vec<Vec3>> {
    let matrix = decode_frame(frame)?;
    let center_row = (matrix.len() - 1) as f32 / 2.0;
    let center_col = (matrix[0].len() - 1) as f32 / 2.0;

    let points = matrix
        .iter()
        .enumerate()
        .flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, set)| **set)
                .map(move |(col, _)| {
                    Vec3::new(
                        (col as f32 - center_col) * spacing,
                        -(row as f32 - center_row) * spacing,
                        0.0,
                    )
                })
        })
        .collect();

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(rows: &[&[i64]]) -> Frame {
        Frame::new(rows.iter().map(|row| row.to_vec()).collect())
    }

    #[test]
    fn diagonal_matrix_yields_two_mirrored_points() {
        let spacing = 0.5;
        let points = matrix_to_points(&frame(&[&[1, 0], &[0, 1]]), spacing).unwrap();

        assert_eq!(points.len(), 2);
        assert!(points.contains(&Vec3::new(-0.5 * spacing, 0.5 * spacing, 0.0)));
        assert!(points.contains(&Vec3::new(0.5 * spacing, -0.5 * spacing, 0.0)));
    }

    #[test]
    fn point_count_matches_filled_cells() {
        let matrix = frame(&[&[1, 1, 0, 1], &[0, 0, 0, 0], &[1, 0, 1, 1]]);
        let points = matrix_to_points(&matrix, 1.0).unwrap();

        assert_eq!(points.len(), matrix.filled_cells());
        assert!(points.iter().all(|p| p.z == 0.0));
    }

    #[test]
    fn odd_full_matrix_is_symmetric_about_origin() {
        let matrix = frame(&[&[1, 1, 1], &[1, 1, 1], &[1, 1, 1]]);
        let points = matrix_to_points(&matrix, 2.0).unwrap();

        assert!(points.contains(&Vec3::ZERO));
        for p in &points {
            assert!(points.contains(&-*p));
        }
    }

    #[test]
    fn repeated_mapping_is_stable() {
        let matrix = frame(&[&[0, 1], &[1, 1]]);
        let first = matrix_to_points(&matrix, 0.25).unwrap();
        let second = matrix_to_points(&matrix, 0.25).unwrap();

        assert_eq!(first, second);
        for (i, a) in first.iter().enumerate() {
            assert!(first.iter().skip(i + 1).all(|b| a != b));
        }
    }

    #[test]
    fn ragged_matrix_is_rejected() {
        let result = matrix_to_points(&frame(&[&[1, 1], &[1]]), 1.0);
        assert_eq!(
            result,
            Err(SliceError::NonRectangular {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn empty_matrices_are_rejected() {
        assert_eq!(
            matrix_to_points(&Frame::default(), 1.0),
            Err(SliceError::EmptyFrame)
        );
        assert_eq!(
            matrix_to_points(&frame(&[&[], &[]]), 1.0),
            Err(SliceError::EmptyFrame)
        );
    }

    #[test]
    fn non_binary_cell_is_rejected() {
        assert_eq!(
            frame_dimensions(&frame(&[&[0, 1], &[2, 0]])),
            Err(SliceError::NonBinaryCell {
                row: 1,
                col: 0,
                value: "2".to_string()
            })
        );
    }

    fn json_frame(json: &str) -> Frame {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn float_ones_and_zeros_are_binary() {
        let points = matrix_to_points(&json_frame("[[1.0, 0.0], [0, 1]]"), 1.0).unwrap();
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn boolean_cell_is_rejected() {
        assert_eq!(
            frame_dimensions(&json_frame("[[0, true]]")),
            Err(SliceError::NonBinaryCell {
                row: 0,
                col: 1,
                value: "true".to_string()
            })
        );
    }

    #[test]
    fn non_array_frames_and_rows_are_rejected() {
        assert!(matches!(
            frame_dimensions(&json_frame("null")),
            Err(SliceError::NotAMatrix(_))
        ));
        assert!(matches!(
            frame_dimensions(&json_frame("[[1, 0], 7]")),
            Err(SliceError::NotAMatrix(_))
        ));
    }

    #[test]
    fn all_zero_matrix_maps_to_no_points() {
        let points = matrix_to_points(&frame(&[&[0, 0], &[0, 0]]), 1.0).unwrap();
        assert!(points.is_empty());
    }
}
