//! Combat resolver: turns a trigger pull into a hit test and damage.
//!
//! One shot is one ray. Static geometry limits how far the ray travels;
//! the nearest live agent collider in front of that limit takes the hit.

use glam::Vec3;
use rand::Rng;
use tracing::debug;

use holdout_core::collaborators::Environment;
use holdout_core::config::WeaponConfig;
use holdout_core::constants::HEADSHOT_DAMAGE_MULTIPLIER;
use holdout_core::events::FeedbackEvent;
use holdout_core::pool::Handle;
use holdout_core::state::AccuracyView;
use holdout_core::types::Ray;

use crate::agent::DamageOutcome;
use crate::director::WaveDirector;

/// Everything that happened during one accepted shot.
#[derive(Debug, Clone, PartialEq)]
pub struct ShotRecord {
    pub origin: Vec3,
    /// Direction after spread.
    pub direction: Vec3,
    /// Length of the spread offset applied to the aim direction.
    pub accuracy_roll: f32,
    pub hit_agent: Option<Handle>,
    pub hit_point: Option<Vec3>,
    pub is_headshot: bool,
    pub damage: f32,
    pub outcome: Option<DamageOutcome>,
    /// Points awarded by the rolling accuracy bonus on this shot.
    pub accuracy_bonus: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct CombatResolver {
    config: WeaponConfig,
    next_fire_time: f32,
    shots_fired: u32,
    shots_hit: u32,
}

impl CombatResolver {
    pub fn new(config: &WeaponConfig) -> Self {
        Self {
            config: config.clone(),
            next_fire_time: 0.0,
            shots_fired: 0,
            shots_hit: 0,
        }
    }

    /// Fire along `aim` at match time `now`. Returns `None` while the weapon
    /// is still cycling.
    pub fn try_fire<E: Environment>(
        &mut self,
        now: f32,
        aim: Ray,
        environment: &E,
        director: &mut WaveDirector,
        rng: &mut impl Rng,
    ) -> Option<ShotRecord> {
        if now < self.next_fire_time {
            return None;
        }
        self.next_fire_time = now + self.config.fire_rate_secs;
        self.shots_fired += 1;

        let (ray, accuracy_roll) = self.apply_spread(aim, rng);
        let range = self.config.range;

        let static_hit = environment.raycast(&ray, range);
        let limit = static_hit.unwrap_or(range);

        let nearest = director
            .agents()
            .iter()
            .filter_map(|(handle, agent)| {
                let collider = agent.collider()?;
                let t = collider.ray_intersection(&ray, limit)?;
                (t < limit).then_some((handle, t, agent.is_headshot(ray.at(t))))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1));

        let mut record = ShotRecord {
            origin: ray.origin,
            direction: ray.direction,
            accuracy_roll,
            hit_agent: None,
            hit_point: None,
            is_headshot: false,
            damage: 0.0,
            outcome: None,
            accuracy_bonus: None,
        };

        let end = match nearest {
            Some((handle, t, is_headshot)) => {
                let hit_point = ray.at(t);
                let damage = if is_headshot {
                    self.config.base_damage * HEADSHOT_DAMAGE_MULTIPLIER
                } else {
                    self.config.base_damage
                };
                let outcome = director.damage_agent(handle, damage, is_headshot);
                self.shots_hit += 1;
                debug!(%handle, damage, is_headshot, ?outcome, "shot hit");

                record.hit_agent = Some(handle);
                record.hit_point = Some(hit_point);
                record.is_headshot = is_headshot;
                record.damage = damage;
                record.outcome = Some(outcome);
                hit_point
            }
            None => ray.at(limit),
        };

        let events = director.events_mut();
        events.feedback(FeedbackEvent::MuzzleFlash { origin: ray.origin });
        events.feedback(FeedbackEvent::Tracer {
            origin: ray.origin,
            end,
        });

        if self.accuracy_bonus_due() {
            let points = self.config.bonus_points;
            director.add_score(points);
            record.accuracy_bonus = Some(points);
            debug!(
                shots = self.shots_fired,
                ratio = self.accuracy().ratio(),
                "accuracy bonus"
            );
        }

        Some(record)
    }

    /// Perturb the aim by a random offset inside a sphere of radius
    /// `(1 - accuracy) * spread_scale`.
    fn apply_spread(&self, aim: Ray, rng: &mut impl Rng) -> (Ray, f32) {
        let spread = (1.0 - self.config.accuracy) * self.config.spread_scale;
        if spread <= 0.0 {
            return (aim, 0.0);
        }

        let offset = loop {
            let v = Vec3::new(
                rng.gen_range(-1.0..=1.0),
                rng.gen_range(-1.0..=1.0),
                rng.gen_range(-1.0..=1.0),
            );
            if v.length_squared() <= 1.0 {
                break v * spread;
            }
        };

        let direction = (aim.direction + offset).try_normalize().unwrap_or(aim.direction);
        (Ray::new(aim.origin, direction), offset.length())
    }

    fn accuracy_bonus_due(&self) -> bool {
        let interval = self.config.bonus_interval.max(1);
        self.shots_fired > self.config.bonus_min_shots
            && self.shots_fired % interval == 0
            && self.accuracy().ratio() > self.config.bonus_threshold
    }

    pub fn accuracy(&self) -> AccuracyView {
        AccuracyView {
            shots_fired: self.shots_fired,
            shots_hit: self.shots_hit,
        }
    }

    pub fn next_fire_time(&self) -> f32 {
        self.next_fire_time
    }

    /// Forget all shot history.
    pub fn reset(&mut self) {
        self.next_fire_time = 0.0;
        self.shots_fired = 0;
        self.shots_hit = 0;
    }
}
