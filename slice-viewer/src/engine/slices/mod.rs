//! Slice construction and ownership.

/// Frame to blueprint pipeline combining placement and point mapping.
pub mod builder;

/// Error taxonomy shared by construction and registry operations.
pub mod error;

/// Registry owning every slice with its visibility and highlight flags.
pub mod registry;
