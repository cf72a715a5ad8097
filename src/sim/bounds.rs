//! Axis-aligned and oriented bounding volumes
//!
//! Every entity in the lake carries the same fixed-size OBB. Orientations
//! are identity in production (boat yaw is tracked separately and never
//! applied to the box), but the corner expansion below handles arbitrary
//! rotations so the volumes stay correct if that changes.

use glam::{Mat3, Vec3};
use serde::{Deserialize, Serialize};

use crate::consts::ENTITY_HALF_SIZE;

/// Oriented bounding box: center, half extents and a rotation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Obb {
    pub center: Vec3,
    pub half_size: Vec3,
    pub orientation: Mat3,
}

impl Obb {
    /// Unrotated box with the shared entity extents at the given center
    pub fn at(center: Vec3) -> Self {
        Self {
            center,
            half_size: Vec3::from_array(ENTITY_HALF_SIZE),
            orientation: Mat3::IDENTITY,
        }
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Tight axis-aligned box around an OBB's eight corners.
    ///
    /// With an identity orientation this reduces to `center - half_size` /
    /// `center + half_size` exactly.
    pub fn from_obb(obb: &Obb) -> Self {
        let axes = [
            obb.orientation.x_axis * obb.half_size.x,
            obb.orientation.y_axis * obb.half_size.y,
            obb.orientation.z_axis * obb.half_size.z,
        ];

        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        for corner_bits in 0..8u32 {
            let sx = if corner_bits & 1 == 0 { 1.0 } else { -1.0 };
            let sy = if corner_bits & 2 == 0 { 1.0 } else { -1.0 };
            let sz = if corner_bits & 4 == 0 { 1.0 } else { -1.0 };
            let corner = obb.center + axes[0] * sx + axes[1] * sy + axes[2] * sz;
            min = min.min(corner);
            max = max.max(corner);
        }
        Self { min, max }
    }

    /// Inclusive interval overlap on all three axes
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn identity_obb_expands_to_center_plus_minus_half() {
        let center = Vec3::new(3.0, -1.0, 7.5);
        let aabb = Aabb::from_obb(&Obb::at(center));
        assert_eq!(aabb.min, center - Vec3::from_array(ENTITY_HALF_SIZE));
        assert_eq!(aabb.max, center + Vec3::from_array(ENTITY_HALF_SIZE));
    }

    #[test]
    fn quarter_turn_about_y_swaps_x_and_z_extents() {
        let obb = Obb {
            center: Vec3::ZERO,
            half_size: Vec3::new(0.5, 0.25, 0.15),
            orientation: Mat3::from_rotation_y(FRAC_PI_2),
        };
        let aabb = Aabb::from_obb(&obb);
        assert!((aabb.max.x - 0.15).abs() < 1e-5);
        assert!((aabb.max.y - 0.25).abs() < 1e-5);
        assert!((aabb.max.z - 0.5).abs() < 1e-5);
    }

    #[test]
    fn touching_boxes_overlap_inclusively() {
        let a = Aabb {
            min: Vec3::ZERO,
            max: Vec3::ONE,
        };
        let b = Aabb {
            min: Vec3::new(1.0, 0.0, 0.0),
            max: Vec3::new(2.0, 1.0, 1.0),
        };
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn separated_boxes_do_not_overlap() {
        let a = Aabb {
            min: Vec3::ZERO,
            max: Vec3::ONE,
        };
        let b = Aabb {
            min: Vec3::new(1.01, 0.0, 0.0),
            max: Vec3::new(2.0, 1.0, 1.0),
        };
        assert!(!a.overlaps(&b));
    }

    fn arb_aabb() -> impl Strategy<Value = Aabb> {
        (
            -50.0f32..50.0,
            -50.0f32..50.0,
            -50.0f32..50.0,
            0.0f32..10.0,
            0.0f32..10.0,
            0.0f32..10.0,
        )
            .prop_map(|(x, y, z, ex, ey, ez)| Aabb {
                min: Vec3::new(x, y, z),
                max: Vec3::new(x + ex, y + ey, z + ez),
            })
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(a in arb_aabb(), b in arb_aabb()) {
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn identity_expansion_is_exact(
            x in -100.0f32..100.0,
            y in -100.0f32..100.0,
            z in -100.0f32..100.0,
        ) {
            let center = Vec3::new(x, y, z);
            let half = Vec3::from_array(ENTITY_HALF_SIZE);
            let aabb = Aabb::from_obb(&Obb::at(center));
            prop_assert_eq!(aabb.min, center - half);
            prop_assert_eq!(aabb.max, center + half);
        }

        #[test]
        fn rotated_expansion_preserves_min_max_invariant(
            x in -100.0f32..100.0,
            z in -100.0f32..100.0,
            yaw in 0.0f32..std::f32::consts::TAU,
        ) {
            let obb = Obb {
                center: Vec3::new(x, 0.0, z),
                half_size: Vec3::from_array(ENTITY_HALF_SIZE),
                orientation: Mat3::from_rotation_y(yaw),
            };
            let aabb = Aabb::from_obb(&obb);
            prop_assert!(aabb.min.x <= aabb.max.x);
            prop_assert!(aabb.min.y <= aabb.max.y);
            prop_assert!(aabb.min.z <= aabb.max.z);
        }
    }
}
