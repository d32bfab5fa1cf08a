//! Interactive tools layered on the slice scene.
//!
//! Picking resolves the pointer to a slice and publishes `SliceHoverEvent`s.
//! The tooltip (native) and the RPC layer (WASM) consume those events, and
//! visibility requests from either source flow through one event type.
//!
//! ```text
//! CursorMoved ─> picking ─> SliceHoverEvent ─┬─> tooltip (native)
//!                                            └─> slice_hover RPC (wasm)
//! H/R keys, set_slice_visibility RPC
//!   └─> SliceVisibilityRequest ─> registry ─> root Visibility
//! ```

/// Pointer picking, highlight state and hover events.
pub mod picking;

/// Cursor-following label naming the hovered slice.
pub mod tooltip;

/// Hide/show requests and their mirroring onto slice entities.
pub mod visibility;
