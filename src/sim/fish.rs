//! The fish population: a capped pool of wandering NPCs
//!
//! Spawning, despawning and movement all key off the boat's position. The
//! pool refills to capacity every tick, so a fish lost to distance is
//! replaced the same tick; a fish lost to a collision stays gone until the
//! next one.

use glam::{Vec2, Vec3};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bounds::{Aabb, Obb};
use crate::planar_distance;
use crate::settings::Tuning;

/// A single fish
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fish {
    pub position: Vec3,
    /// Planar swim direction: `x` drives world X, `y` drives world Z.
    /// Fish never move vertically, so the pair stays two-wide instead of
    /// hauling a dead third component around.
    pub planar_dir: Vec2,
    pub speed: f32,
    /// Recomputed from `position` every step
    pub obb: Obb,
}

impl Fish {
    /// One movement step; the bounding box follows the position
    pub fn advance(&mut self) {
        self.position.x += self.planar_dir.x * self.speed;
        self.position.z += self.planar_dir.y * self.speed;
        self.obb.center = self.position;
    }
}

/// Bounded fish pool with its own RNG stream
#[derive(Debug, Clone)]
pub struct FishPopulation {
    fish: Vec<Fish>,
    rng: Pcg32,
}

impl FishPopulation {
    pub fn new(seed: u64) -> Self {
        Self {
            fish: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Fish> {
        self.fish.iter()
    }

    pub fn len(&self) -> usize {
        self.fish.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fish.is_empty()
    }

    /// Spawn one fish on the ring at `fish_max_distance` around the boat
    fn spawn_one(&mut self, boat_position: Vec3, tuning: &Tuning) {
        let theta = self.rng.random_range(0.0_f32..360.0).to_radians();
        let position =
            boat_position + tuning.fish_max_distance * Vec3::new(theta.cos(), 0.0, theta.sin());

        // Uniform components, then normalize. The angular distribution is
        // biased toward the diagonals; swapping in an angle-uniform sampler
        // would change spawn behavior under a fixed seed.
        let dir = Vec2::new(
            self.rng.random_range(-1.0_f32..1.0),
            self.rng.random_range(-1.0_f32..1.0),
        )
        .normalize_or_zero();

        let speed = self
            .rng
            .random_range(tuning.fish_min_speed..tuning.fish_max_speed);

        self.fish.push(Fish {
            position,
            planar_dir: dir,
            speed,
            obb: Obb::at(position),
        });
    }

    /// Remove every fish beyond the despawn radius (planar distance, y ignored)
    pub fn despawn_far(&mut self, boat_position: Vec3, tuning: &Tuning) {
        let before = self.fish.len();
        let max = tuning.fish_max_distance;
        self.fish
            .retain(|f| planar_distance(f.position, boat_position) <= max);
        let culled = before - self.fish.len();
        if culled > 0 {
            log::debug!("despawned {culled} fish beyond {max}");
        }
    }

    /// Top the pool back up to capacity
    pub fn refill(&mut self, boat_position: Vec3, tuning: &Tuning) {
        while self.fish.len() < tuning.max_fish {
            self.spawn_one(boat_position, tuning);
        }
    }

    /// Advance every fish by one step
    pub fn advance_all(&mut self) {
        for fish in &mut self.fish {
            fish.advance();
        }
    }

    /// Remove every fish whose box overlaps the boat's; returns how many
    pub fn collide_with_boat(&mut self, boat_aabb: &Aabb) -> usize {
        let before = self.fish.len();
        self.fish
            .retain(|f| !Aabb::from_obb(&f.obb).overlaps(boat_aabb));
        before - self.fish.len()
    }

    /// Direct pool access for scenario tests
    #[cfg(test)]
    pub(crate) fn fish_mut(&mut self) -> &mut Vec<Fish> {
        &mut self.fish
    }

    /// Escalation trigger: every living fish doubles its speed
    pub fn escalate(&mut self) {
        for fish in &mut self.fish {
            fish.speed *= 2.0;
        }
        log::info!("fish escalation: {} fish sped up", self.fish.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refill_reaches_capacity_on_spawn_ring() {
        let tuning = Tuning::default();
        let boat = Vec3::new(5.0, 0.0, -3.0);
        let mut pop = FishPopulation::new(42);

        pop.refill(boat, &tuning);

        assert_eq!(pop.len(), tuning.max_fish);
        for fish in pop.iter() {
            let d = planar_distance(fish.position, boat);
            assert!(
                (d - tuning.fish_max_distance).abs() < 1e-4,
                "spawned at {d}, expected ring radius {}",
                tuning.fish_max_distance
            );
            assert_eq!(fish.position.y, 0.0);
            assert!((fish.planar_dir.length() - 1.0).abs() < 1e-5);
            assert!(fish.speed >= tuning.fish_min_speed);
            assert!(fish.speed < tuning.fish_max_speed);
        }
    }

    #[test]
    fn same_seed_same_population() {
        let tuning = Tuning::default();
        let mut a = FishPopulation::new(7);
        let mut b = FishPopulation::new(7);
        a.refill(Vec3::ZERO, &tuning);
        b.refill(Vec3::ZERO, &tuning);

        for (fa, fb) in a.iter().zip(b.iter()) {
            assert_eq!(fa.position, fb.position);
            assert_eq!(fa.planar_dir, fb.planar_dir);
            assert_eq!(fa.speed, fb.speed);
        }
    }

    #[test]
    fn fish_just_past_radius_is_despawned() {
        let tuning = Tuning::default();
        let mut pop = FishPopulation::new(1);
        pop.refill(Vec3::ZERO, &tuning);

        // Nudge the boat so every ring fish sits past the radius by epsilon.
        let boat = Vec3::new(-0.001, 0.0, 0.0);
        let far = pop
            .iter()
            .filter(|f| planar_distance(f.position, boat) > tuning.fish_max_distance)
            .count();
        assert!(far > 0);

        pop.despawn_far(boat, &tuning);
        assert_eq!(pop.len(), tuning.max_fish - far);

        pop.refill(boat, &tuning);
        assert_eq!(pop.len(), tuning.max_fish);
    }

    #[test]
    fn advance_moves_in_the_planar_direction() {
        let mut fish = Fish {
            position: Vec3::new(1.0, 0.0, 2.0),
            planar_dir: Vec2::new(0.6, -0.8),
            speed: 0.05,
            obb: Obb::at(Vec3::new(1.0, 0.0, 2.0)),
        };

        fish.advance();

        assert!((fish.position.x - 1.03).abs() < 1e-6);
        assert!((fish.position.z - 1.96).abs() < 1e-6);
        assert_eq!(fish.position.y, 0.0);
        assert_eq!(fish.obb.center, fish.position);
    }

    #[test]
    fn collide_with_boat_removes_overlapping_fish() {
        let tuning = Tuning::default();
        let mut pop = FishPopulation::new(3);
        pop.refill(Vec3::ZERO, &tuning);

        // Drop two fish right on top of the boat.
        let boat_aabb = Aabb::from_obb(&Obb::at(Vec3::ZERO));
        pop.fish[0].position = Vec3::ZERO;
        pop.fish[0].obb.center = Vec3::ZERO;
        pop.fish[1].position = Vec3::new(0.4, 0.0, 0.1);
        pop.fish[1].obb.center = pop.fish[1].position;

        let removed = pop.collide_with_boat(&boat_aabb);
        assert_eq!(removed, 2);
        assert_eq!(pop.len(), tuning.max_fish - 2);
    }

    #[test]
    fn escalate_doubles_every_speed() {
        let tuning = Tuning::default();
        let mut pop = FishPopulation::new(9);
        pop.refill(Vec3::ZERO, &tuning);
        let before: Vec<f32> = pop.iter().map(|f| f.speed).collect();

        pop.escalate();

        for (old, fish) in before.iter().zip(pop.iter()) {
            assert_eq!(fish.speed, old * 2.0);
        }
    }
}
