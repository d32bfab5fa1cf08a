//! Frame loading and slice creation.
//!
//! Loads the frames JSON asset, builds one slice per frame once it arrives,
//! and rebuilds everything when the asset is modified on disk.

/// Frames asset handle and load-state monitoring.
pub mod frame_loader;

/// Loading progress tracking resource for state transitions.
pub mod progress;

/// Slice construction from loaded frames, plus teardown on reload.
pub mod slice_creator;
