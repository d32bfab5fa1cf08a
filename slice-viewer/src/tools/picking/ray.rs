use bevy::prelude::*;

use crate::engine::layout::placement::SliceTransform;
use crate::engine::slices::registry::{PickTarget, Slice, SliceRegistry};

/// Nearest slice along a ray and the hit distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    pub index: usize,
    pub distance: f32,
}

/// Distance along the ray to a slice's pick target, if hit from either side.
pub fn ray_hits_pick_target(
    origin: Vec3,
    dir: Vec3,
    xf: &SliceTransform,
    target: &PickTarget,
) -> Option<f32> {
    let inv = xf.to_transform().compute_matrix().inverse();
    let o_local = inv.transform_point3(origin);
    let d_local = inv.transform_vector3(dir);
    ray_square_hit_t(o_local, d_local, target.half_extent())
}

// Ray against the square |x|,|y| <= half_extent on the z = 0 plane, returns Some(t) or None
pub fn ray_square_hit_t(ray_origin: Vec3, ray_direction: Vec3, half_extent: f32) -> Option<f32> {
    if ray_direction.z.abs() <= f32::EPSILON {
        return None;
    }

    let t = -ray_origin.z / ray_direction.z;
    if t < 0.0 {
        return None;
    }

    let hit = ray_origin + ray_direction * t;
    if hit.x.abs() > half_extent || hit.y.abs() > half_extent {
        return None;
    }
    Some(t)
}

/// Casts `ray` against the pick targets of `candidates` and keeps the nearest
/// hit. Equal distances resolve to the lowest slice index.
pub fn nearest_hit<'a>(
    ray: &Ray3d,
    candidates: impl IntoIterator<Item = &'a Slice>,
) -> Option<PickHit> {
    let origin = ray.origin;
    let dir = ray.direction.as_vec3();

    let mut best: Option<PickHit> = None;
    for slice in candidates {
        let Some(distance) = ray_hits_pick_target(origin, dir, &slice.transform, &slice.pick_target)
        else {
            continue;
        };
        let closer = match best {
            None => true,
            Some(current) => {
                distance < current.distance
                    || (distance == current.distance && slice.index < current.index)
            }
        };
        if closer {
            best = Some(PickHit {
                index: slice.index,
                distance,
            });
        }
    }
    best
}

/// Nearest visible slice under `ray`.
pub fn pick_visible(registry: &SliceRegistry, ray: &Ray3d) -> Option<PickHit> {
    nearest_hit(ray, registry.visible_slices())
}
