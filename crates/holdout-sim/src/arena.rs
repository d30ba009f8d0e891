//! Reference collaborators: a flat arena with box obstacles and a simple
//! player. Used by tests and the soak tool in place of the real level and
//! player controller.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::{Rng, RngCore};

use holdout_core::collaborators::{Environment, Player};
use holdout_core::constants::{ARENA_MIN_SPAWN_DISTANCE, PLAYER_EYE_HEIGHT, PLAYER_MAX_HEALTH};
use holdout_core::types::{horizontal_distance, Aabb, Ray};

#[derive(Debug, Clone)]
pub struct Arena {
    pub spawn_points: Vec<Vec3>,
    pub obstacles: Vec<Aabb>,
    /// Spawn points closer than this to the player are never used.
    pub min_spawn_distance: f32,
}

impl Arena {
    pub fn new(spawn_points: Vec<Vec3>) -> Self {
        Self {
            spawn_points,
            obstacles: Vec::new(),
            min_spawn_distance: ARENA_MIN_SPAWN_DISTANCE,
        }
    }

    /// `count` spawn points evenly spaced on a ground circle of `radius`.
    pub fn open_field(radius: f32, count: usize) -> Self {
        let spawn_points = (0..count)
            .map(|i| {
                let angle = TAU * i as f32 / count as f32;
                Vec3::new(radius * angle.sin(), 0.0, radius * angle.cos())
            })
            .collect();
        Self::new(spawn_points)
    }

    pub fn with_obstacle(mut self, obstacle: Aabb) -> Self {
        self.obstacles.push(obstacle);
        self
    }
}

impl Environment for Arena {
    /// Random pick among the farther half of the spawn points that respect
    /// the minimum distance.
    fn spawn_anchor(
        &self,
        _wave_number: u32,
        player_position: Option<Vec3>,
        rng: &mut dyn RngCore,
    ) -> Option<Vec3> {
        let mut candidates: Vec<(Vec3, f32)> = self
            .spawn_points
            .iter()
            .map(|&p| {
                let distance = player_position.map_or(f32::MAX, |player| horizontal_distance(p, player));
                (p, distance)
            })
            .filter(|(_, distance)| *distance >= self.min_spawn_distance)
            .collect();

        if candidates.is_empty() {
            return None;
        }

        candidates.sort_by(|a, b| b.1.total_cmp(&a.1));
        let farther_half = candidates.len().div_ceil(2);
        Some(candidates[rng.gen_range(0..farther_half)].0)
    }

    fn raycast(&self, ray: &Ray, max_distance: f32) -> Option<f32> {
        self.obstacles
            .iter()
            .filter_map(|o| o.ray_intersection(ray, max_distance))
            .min_by(f32::total_cmp)
    }
}

#[derive(Debug, Clone)]
pub struct ArenaPlayer {
    /// Feet position.
    pub position: Vec3,
    pub aim_direction: Vec3,
    pub health: f32,
    pub max_health: f32,
    pub eye_height: f32,
    /// When false the player cannot be resolved and `position()` is `None`.
    pub present: bool,
}

impl ArenaPlayer {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            aim_direction: Vec3::Z,
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
            eye_height: PLAYER_EYE_HEIGHT,
            present: true,
        }
    }

    pub fn eye(&self) -> Vec3 {
        self.position + Vec3::Y * self.eye_height
    }

    /// Point the weapon at `target`.
    pub fn aim_at(&mut self, target: Vec3) {
        if let Some(direction) = (target - self.eye()).try_normalize() {
            self.aim_direction = direction;
        }
    }
}

impl Player for ArenaPlayer {
    fn position(&self) -> Option<Vec3> {
        self.present.then_some(self.position)
    }

    fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    fn take_damage(&mut self, amount: f32) {
        self.health = (self.health - amount).max(0.0);
    }

    fn aim_ray(&self) -> Ray {
        Ray::new(self.eye(), self.aim_direction)
    }

    fn health(&self) -> (f32, f32) {
        (self.health, self.max_health)
    }

    fn respawn(&mut self) {
        self.health = self.max_health;
    }
}
