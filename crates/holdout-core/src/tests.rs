#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::config::CombatConfig;
    use crate::enums::*;
    use crate::error::ConfigError;
    use crate::events::{EventQueue, FeedbackEvent, UiEvent};
    use crate::pool::{EntityPool, Handle};
    use crate::types::{horizontal_distance, yaw_to_direction, yaw_towards, Aabb, Ray};

    // ---- EntityPool ----

    #[test]
    fn test_pool_grows_by_one_when_empty() {
        let mut pool: EntityPool<u32> = EntityPool::new();
        assert_eq!(pool.total_count(), 0);

        let a = pool.acquire();
        assert_eq!(pool.total_count(), 1);
        let b = pool.acquire();
        assert_eq!(pool.total_count(), 2);
        assert_ne!(a, b);
        assert_eq!(pool.active_count(), 2);
        assert_eq!(pool.free_count(), 0);
    }

    #[test]
    fn test_pool_recycles_before_growing() {
        let mut pool: EntityPool<u32> = EntityPool::with_capacity(2);
        assert_eq!(pool.free_count(), 2);

        let a = pool.acquire();
        assert_eq!(a.index, 0, "Lowest prewarmed entry should be used first");
        let _b = pool.acquire();
        assert!(pool.release(a));

        let c = pool.acquire();
        assert_eq!(c.index, a.index, "Released entry should be reused");
        assert_ne!(c.generation, a.generation, "Reuse must bump generation");
        assert_eq!(pool.total_count(), 2, "Pool should not grow while entries are free");
    }

    #[test]
    fn test_pool_release_is_idempotent() {
        let mut pool: EntityPool<u32> = EntityPool::new();
        let a = pool.acquire();

        assert!(pool.release(a));
        assert!(!pool.release(a), "Double release should be ignored");
        assert!(!pool.release(Handle::new(99, 0)), "Unknown handle should be ignored");
        assert_eq!(pool.free_count(), 1);
        assert_eq!(pool.active_count(), 0);
    }

    #[test]
    fn test_pool_stale_handle_cannot_touch_new_occupant() {
        let mut pool: EntityPool<u32> = EntityPool::new();
        let a = pool.acquire();
        *pool.get_mut(a).unwrap() = 7;
        pool.release(a);

        let b = pool.acquire();
        assert!(pool.get(a).is_none());
        assert!(!pool.release(a), "Stale handle must not release the new occupant");
        assert!(pool.is_active(b));
    }

    #[test]
    fn test_pool_counts_identity_under_churn() {
        let mut pool: EntityPool<u32> = EntityPool::with_capacity(3);
        let mut live = Vec::new();
        for round in 0..40 {
            if round % 3 == 2 {
                if let Some(h) = live.pop() {
                    pool.release(h);
                }
            } else {
                let h = pool.acquire();
                assert!(!live.contains(&h), "Pool handed out an in-use handle");
                live.push(h);
            }
            assert_eq!(
                pool.active_count() + pool.free_count(),
                pool.total_count(),
                "active + free must equal entries ever created"
            );
            assert_eq!(pool.active_count(), live.len());
        }
    }

    #[test]
    fn test_pool_release_all() {
        let mut pool: EntityPool<u32> = EntityPool::new();
        for _ in 0..5 {
            pool.acquire();
        }
        pool.release_all();
        assert_eq!(pool.active_count(), 0);
        assert_eq!(pool.free_count(), 5);
        assert!(pool.iter().next().is_none());
    }

    // ---- Geometry ----

    #[test]
    fn test_ray_hits_box_front_face() {
        let aabb = Aabb::new(Vec3::new(-1.0, 0.0, 9.0), Vec3::new(1.0, 2.0, 11.0));
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::Z);
        let t = aabb.ray_intersection(&ray, 100.0).unwrap();
        assert!((t - 9.0).abs() < 1e-5, "Expected entry at 9.0, got {t}");
    }

    #[test]
    fn test_ray_misses_box_beyond_range_or_aside() {
        let aabb = Aabb::new(Vec3::new(-1.0, 0.0, 9.0), Vec3::new(1.0, 2.0, 11.0));
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::Z);
        assert!(aabb.ray_intersection(&ray, 5.0).is_none());

        let above = Ray::new(Vec3::new(0.0, 3.0, 0.0), Vec3::Z);
        assert!(aabb.ray_intersection(&above, 100.0).is_none());

        let behind = Ray::new(Vec3::new(0.0, 1.0, 20.0), Vec3::Z);
        assert!(aabb.ray_intersection(&behind, 100.0).is_none());
    }

    #[test]
    fn test_standing_box_extents() {
        let aabb = Aabb::standing(Vec3::new(3.0, 1.0, -2.0), 0.5, 2.0);
        assert!(aabb.contains(Vec3::new(3.0, 2.9, -2.0)));
        assert!(!aabb.contains(Vec3::new(3.0, 3.1, -2.0)));
        assert!(!aabb.contains(Vec3::new(3.6, 2.0, -2.0)));
    }

    #[test]
    fn test_yaw_helpers_agree() {
        let from = Vec3::new(1.0, 0.0, 1.0);
        let to = Vec3::new(4.0, 5.0, 5.0);
        let dir = yaw_to_direction(yaw_towards(from, to));
        let expected = Vec3::new(3.0, 0.0, 4.0).normalize();
        assert!((dir - expected).length() < 1e-5);
        assert!((horizontal_distance(from, to) - 5.0).abs() < 1e-5);
    }

    // ---- Config ----

    #[test]
    fn test_default_config_is_valid() {
        CombatConfig::default().validate().unwrap();
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = CombatConfig::from_json_str(
            r#"{ "waves": { "base_enemy_count": 8.0 }, "weapon": { "base_damage": 40.0 } }"#,
        )
        .unwrap();
        assert_eq!(config.waves.base_enemy_count, 8.0);
        assert_eq!(config.weapon.base_damage, 40.0);
        assert_eq!(config.enemy, crate::config::EnemyConfig::default());
    }

    #[test]
    fn test_config_rejects_inverted_ranges() {
        let err = CombatConfig::from_json_str(
            r#"{ "enemy": { "attack_range": 60.0, "detection_range": 50.0 } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::RangeOrder { .. }), "got {err}");
    }

    #[test]
    fn test_config_rejects_accuracy_out_of_range() {
        let err = CombatConfig::from_json_str(r#"{ "weapon": { "accuracy": 1.5 } }"#).unwrap_err();
        assert!(
            matches!(err, ConfigError::OutOfRange { field: "weapon.accuracy", .. }),
            "got {err}"
        );
    }

    #[test]
    fn test_config_rejects_death_stage_past_total() {
        let err = CombatConfig::from_json_str(
            r#"{ "death": { "fade_start_secs": 4.0, "total_duration_secs": 3.0 } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::DeathTimeline { .. }), "got {err}");
    }

    #[test]
    fn test_config_rejects_fade_at_moment_of_death() {
        let err = CombatConfig::from_json_str(r#"{ "death": { "fade_start_secs": 0.0 } }"#)
            .unwrap_err();
        assert!(
            matches!(
                err,
                ConfigError::NotPositive {
                    field: "death.fade_start_secs",
                    ..
                }
            ),
            "got {err}"
        );
    }

    #[test]
    fn test_config_reports_parse_errors() {
        let err = CombatConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    // ---- Events ----

    #[test]
    fn test_event_queue_drain_empties() {
        let mut queue = EventQueue::default();
        queue.ui(UiEvent::WaveChanged { wave: 2 });
        queue.feedback(FeedbackEvent::DeathStage {
            agent: Handle::new(0, 0),
            stage: DeathStage::Fall,
        });

        let drained = queue.drain();
        assert_eq!(drained.ui.len(), 1);
        assert_eq!(drained.feedback.len(), 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_ui_event_is_tagged() {
        let json = serde_json::to_string(&UiEvent::ScoreChanged { score: 150 }).unwrap();
        assert_eq!(json, r#"{"type":"ScoreChanged","score":150}"#);
    }

    #[test]
    fn test_only_dying_is_terminal() {
        assert!(AgentState::Dying.is_terminal());
        assert!(!AgentState::Attacking.is_terminal());
        assert_eq!(MatchState::default(), MatchState::Initializing);
    }
}
