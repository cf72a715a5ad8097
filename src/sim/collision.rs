//! Collision policy against the stationary lake furniture
//!
//! The island and the six buoys never move, so they live here as plain
//! constants rather than entities. A hit is an inclusive rectangle test in
//! the XZ plane; the response (applied by the tick) is a hard stop with no
//! bounce and no position correction, so the hull may still visually
//! interpenetrate.

use super::bounds::Aabb;
use crate::consts::{BUOY_MARGIN, BUOY_POSITIONS, ISLAND_MAX, ISLAND_MIN};

/// True if `aabb` overlaps the island footprint in the XZ plane
pub fn hits_island(aabb: &Aabb) -> bool {
    aabb.min.x <= ISLAND_MAX[0]
        && aabb.max.x >= ISLAND_MIN[0]
        && aabb.min.z <= ISLAND_MAX[1]
        && aabb.max.z >= ISLAND_MIN[1]
}

/// Index of the first buoy `aabb` overlaps, if any.
/// Buoy anchors are points padded by [`BUOY_MARGIN`] on both planar axes.
pub fn hits_buoy(aabb: &Aabb) -> Option<usize> {
    BUOY_POSITIONS.iter().position(|&[bx, bz]| {
        aabb.min.x <= bx + BUOY_MARGIN
            && aabb.max.x >= bx - BUOY_MARGIN
            && aabb.min.z <= bz + BUOY_MARGIN
            && aabb.max.z >= bz - BUOY_MARGIN
    })
}

/// Static-obstacle check: island first, then each buoy in declaration order
pub fn hits_static_obstacle(aabb: &Aabb) -> bool {
    hits_island(aabb) || hits_buoy(aabb).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::bounds::Obb;
    use glam::Vec3;

    fn boat_aabb_at(x: f32, z: f32) -> Aabb {
        Aabb::from_obb(&Obb::at(Vec3::new(x, 0.0, z)))
    }

    #[test]
    fn open_water_is_clear() {
        assert!(!hits_static_obstacle(&boat_aabb_at(5.0, 0.0)));
        assert!(!hits_static_obstacle(&boat_aabb_at(0.0, 10.0)));
    }

    #[test]
    fn island_interior_hits() {
        // Dead center of the footprint.
        assert!(hits_island(&boat_aabb_at(-10.0, 0.0)));
        assert!(hits_static_obstacle(&boat_aabb_at(-10.0, 0.0)));
    }

    #[test]
    fn island_edge_is_inclusive() {
        // Boat half-width is 0.5, so a center at x = -4.5 puts the hull's
        // min.x exactly on the island's east edge.
        assert!(hits_island(&boat_aabb_at(-4.5, 0.0)));
        assert!(!hits_island(&boat_aabb_at(-4.49, 0.0)));
    }

    #[test]
    fn each_buoy_position_hits() {
        use crate::consts::BUOY_POSITIONS;
        for &[bx, bz] in &BUOY_POSITIONS {
            let aabb = boat_aabb_at(bx, bz);
            assert!(hits_buoy(&aabb).is_some(), "buoy at ({bx}, {bz}) missed");
        }
    }

    #[test]
    fn buoy_margin_extends_the_hit_zone() {
        // First buoy at (10, 7). Boat half-depth is 0.15, margin 0.15, so
        // the hull clips the padded buoy up to 0.3 away on z.
        assert!(hits_buoy(&boat_aabb_at(10.0, 7.25)).is_some());
        assert!(hits_buoy(&boat_aabb_at(10.0, 7.35)).is_none());
    }

    #[test]
    fn reports_first_matching_buoy() {
        assert_eq!(hits_buoy(&boat_aabb_at(10.0, 7.0)), Some(0));
        assert_eq!(hits_buoy(&boat_aabb_at(0.0, -17.0)), Some(3));
    }
}
