//! Interfaces the simulation consumes from the rest of the game.
//!
//! The world generator and the player controller live outside this
//! workspace; the simulation only sees them through these traits.

use glam::Vec3;
use rand::RngCore;

use crate::types::Ray;

/// Static level data: spawn locations and collision geometry (read-only).
pub trait Environment {
    /// Pick a spawn location for an enemy of `wave_number`, biased away from
    /// the player. `None` means no valid anchor exists right now.
    fn spawn_anchor(
        &self,
        wave_number: u32,
        player_position: Option<Vec3>,
        rng: &mut dyn RngCore,
    ) -> Option<Vec3>;

    /// Distance to the nearest static surface along `ray`, if one is closer
    /// than `max_distance`.
    fn raycast(&self, ray: &Ray, max_distance: f32) -> Option<f32>;

    /// Whether static geometry stops a body of half-width `clearance` moving
    /// in a straight line from `from` to `to`.
    fn blocks_movement(&self, from: Vec3, to: Vec3, clearance: f32) -> bool {
        let delta = to - from;
        let distance = delta.length();
        if distance <= f32::EPSILON {
            return false;
        }
        self.raycast(&Ray::new(from, delta), distance + clearance)
            .is_some()
    }
}

/// The player the enemies hunt and whose weapon the combat resolver fires.
pub trait Player {
    /// Feet position, or `None` while the player cannot be resolved.
    fn position(&self) -> Option<Vec3>;

    fn is_alive(&self) -> bool;

    fn take_damage(&mut self, amount: f32);

    /// Current aim, from the muzzle along the view direction.
    fn aim_ray(&self) -> Ray;

    /// `(current, max)` health.
    fn health(&self) -> (f32, f32);

    /// Restore the player for a fresh match.
    fn respawn(&mut self) {}
}
