//! Pure geometry of the slice cylinder.
//!
//! Nothing here touches the ECS: placement and mapping are plain functions of
//! their inputs so they can be reasoned about and tested in isolation.

/// Layout configuration resource with validation.
pub mod config;

/// Matrix cell to slice-local point mapping.
pub mod mapper;

/// Slice index to cylinder transform.
pub mod placement;
