/// Number of angular slices in a full turn of the cylinder.
pub const TOTAL_SLICES: usize = 24;

/// Radius of the invisible cylinder the slices sit on (world units).
pub const CYLINDER_RADIUS: f32 = 5.0;

/// Distance between neighbouring matrix cells inside a slice (world units).
pub const POINT_SPACING: f32 = 0.5;

/// Edge length of the square pick target co-located with each slice.
pub const PICK_TARGET_SIZE: f32 = 8.0;

/// Half-width of the guide ring drawn on the cylinder footprint.
pub const GUIDE_RING_HALF_WIDTH: f32 = 0.1;

/// Length of the axis helper lines, drawn in both directions.
pub const AXIS_LENGTH: f32 = 5.0;
