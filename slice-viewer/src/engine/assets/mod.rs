//! Loadable data assets.

/// Frame and frame sequence types deserialized from the frames JSON file.
pub mod frame_sequence;
