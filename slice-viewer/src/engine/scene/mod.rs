//! Scene composition for the slice cylinder.
//!
//! Spawns slice entities from blueprints and the static helpers drawn around
//! them.

/// Guide ring on the cylinder footprint and axis gizmos.
pub mod guide;

/// Slice entity spawning, registration and teardown.
pub mod slice_spawner;
