use bevy::prelude::*;
use std::collections::BTreeMap;

use super::builder::SliceBlueprint;
use super::error::{SliceError, SliceResult};
use crate::engine::layout::placement::SliceTransform;

/// Marks the root entity of a spawned slice.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceRoot {
    pub index: usize,
}

/// Role of a child entity under a slice root.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceChildKind {
    Point,
    PickTarget,
}

/// Square pick surface on the slice-local `z = 0` plane, centred on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickTarget {
    pub size: f32,
}

impl PickTarget {
    pub fn half_extent(&self) -> f32 {
        self.size * 0.5
    }
}

/// Render-side resources owned by one slice.
#[derive(Debug, Clone)]
pub struct SliceHandles {
    pub root: Entity,
    pub pick_target: Entity,
    pub target_material: Handle<StandardMaterial>,
    /// One material per point so a slice can be recoloured on its own.
    pub point_materials: Vec<Handle<StandardMaterial>>,
}

#[derive(Debug, Clone)]
pub struct Slice {
    pub index: usize,
    pub transform: SliceTransform,
    pub points: Vec<Vec3>,
    pub pick_target: PickTarget,
    pub handles: Option<SliceHandles>,
    visible: bool,
    highlighted: bool,
}

impl Slice {
    pub fn new(blueprint: SliceBlueprint, pick_target: PickTarget) -> Self {
        Self {
            index: blueprint.index,
            transform: blueprint.transform,
            points: blueprint.points,
            pick_target,
            handles: None,
            visible: true,
            highlighted: false,
        }
    }

    pub fn with_handles(mut self, handles: SliceHandles) -> Self {
        self.handles = Some(handles);
        self
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }
}

/// Sole owner of every constructed slice, keyed by slice index.
#[derive(Debug, Default)]
pub struct SliceRegistry {
    slices: BTreeMap<usize, Slice>,
}

impl SliceRegistry {
    /// Inserts `slice` under `index`. An occupied index is an error; the
    /// existing slice is never replaced.
    pub fn register(&mut self, index: usize, slice: Slice) -> SliceResult<()> {
        debug_assert_eq!(index, slice.index, "slice registered under a foreign index");
        if self.slices.contains_key(&index) {
            return Err(SliceError::DuplicateSlice(index));
        }
        self.slices.insert(index, slice);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&Slice> {
        self.slices.get(&index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Slice> {
        self.slices.get_mut(&index)
    }

    /// Visible slices in ascending index order.
    pub fn visible_slices(&self) -> Vec<&Slice> {
        self.slices.values().filter(|slice| slice.visible).collect()
    }

    pub fn visible_slices_mut(&mut self) -> impl Iterator<Item = &mut Slice> {
        self.slices.values_mut().filter(|slice| slice.visible)
    }

    /// Shows or hides a slice without touching its points or handles.
    pub fn set_visibility(&mut self, index: usize, visible: bool) -> SliceResult<()> {
        let slice = self
            .slices
            .get_mut(&index)
            .ok_or(SliceError::UnknownSlice(index))?;
        slice.visible = visible;
        Ok(())
    }

    pub fn show_all(&mut self) {
        for slice in self.slices.values_mut() {
            slice.visible = true;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slice> {
        self.slices.values()
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Removes every slice, handing ownership to the caller for disposal.
    pub fn drain(&mut self) -> Vec<Slice> {
        std::mem::take(&mut self.slices).into_values().collect()
    }
}
