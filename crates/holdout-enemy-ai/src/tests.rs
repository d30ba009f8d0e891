#[cfg(test)]
mod tests {
    use glam::Vec3;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use holdout_core::config::{DeathConfig, EnemyConfig};
    use holdout_core::enums::{AgentState, DeathStage};

    use crate::fsm::{evaluate, rotate_towards, select_state, wrap_angle, AgentContext, Evasion};
    use crate::profiles::{scaled_profile, EnemyProfile};
    use crate::timeline::{death_visual, is_complete, stages_crossed};

    fn no_evasion_profile() -> EnemyProfile {
        EnemyProfile {
            evade_chance: 0.0,
            ..EnemyProfile::default()
        }
    }

    /// Agent at the origin facing +z, target straight ahead at `distance`.
    fn make_context(state: AgentState, distance: f32) -> AgentContext {
        AgentContext {
            state,
            position: Vec3::ZERO,
            facing: 0.0,
            target: Some(Vec3::new(0.0, 0.0, distance)),
            target_alive: true,
            now: 10.0,
            dt: 1.0 / 60.0,
            attack_ready_at: 0.0,
            evasion: Evasion::default(),
        }
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    // ---- State selection ----

    #[test]
    fn test_attack_range_boundary_is_inclusive() {
        assert_eq!(select_state(2.5, 2.5, 50.0), AgentState::Attacking);
        assert_eq!(select_state(2.5001, 2.5, 50.0), AgentState::Chasing);
    }

    #[test]
    fn test_detection_range_boundary() {
        assert_eq!(select_state(50.0, 2.5, 50.0), AgentState::Chasing);
        assert_eq!(select_state(50.1, 2.5, 50.0), AgentState::Seeking);
    }

    #[test]
    fn test_agent_at_attack_range_attacks() {
        let profile = no_evasion_profile();
        let ctx = make_context(AgentState::Chasing, 2.5);
        let update = evaluate(&ctx, &profile, &mut rng());
        assert_eq!(update.new_state, AgentState::Attacking);
        assert!(update.state_changed);
    }

    // ---- Chasing ----

    #[test]
    fn test_chasing_advances_along_facing() {
        let profile = no_evasion_profile();
        let ctx = make_context(AgentState::Chasing, 20.0);
        let update = evaluate(&ctx, &profile, &mut rng());

        let expected = profile.speed * ctx.dt;
        assert_eq!(update.new_state, AgentState::Chasing);
        assert!(!update.state_changed);
        assert!((update.position.z - expected).abs() < 1e-5);
        assert!(update.position.x.abs() < 1e-6);
    }

    #[test]
    fn test_chasing_moves_along_facing_not_target() {
        // Target directly to the side: the agent turns by at most one step
        // and moves along its new facing, not straight at the target.
        let profile = no_evasion_profile();
        let mut ctx = make_context(AgentState::Chasing, 20.0);
        ctx.target = Some(Vec3::new(20.0, 0.0, 0.0));

        let update = evaluate(&ctx, &profile, &mut rng());
        let max_turn = profile.rotation_speed * ctx.dt;
        assert!((update.facing - max_turn).abs() < 1e-5, "facing {}", update.facing);
        assert!(
            update.position.z > update.position.x,
            "Should still be heading mostly +z after one tick: {:?}",
            update.position
        );
    }

    #[test]
    fn test_seeking_pursues_like_chasing() {
        let profile = no_evasion_profile();
        let ctx = make_context(AgentState::Seeking, 80.0);
        let update = evaluate(&ctx, &profile, &mut rng());
        assert_eq!(update.new_state, AgentState::Seeking);
        assert!(update.position.z > 0.0, "Seeking agent should advance");
    }

    #[test]
    fn test_evasion_strafes_perpendicular() {
        let profile = EnemyProfile {
            evade_chance: f32::MAX,
            ..EnemyProfile::default()
        };
        let ctx = make_context(AgentState::Chasing, 10.0);
        let update = evaluate(&ctx, &profile, &mut rng());

        assert!(update.evasion.active, "Guaranteed roll inside trigger distance should evade");
        assert!(update.evasion.direction.z.abs() < 1e-6, "Strafe must be perpendicular to target");
        assert!((update.evasion.direction.x.abs() - 1.0).abs() < 1e-6);
        let expected = profile.speed * profile.evade_speed_factor * ctx.dt;
        assert!((update.position.x.abs() - expected).abs() < 1e-5);
        assert!(update.position.z.abs() < 1e-6, "Evading agent should not advance");
    }

    #[test]
    fn test_no_evasion_outside_trigger_distance() {
        let profile = EnemyProfile {
            evade_chance: f32::MAX,
            ..EnemyProfile::default()
        };
        let ctx = make_context(AgentState::Chasing, profile.evasion_trigger_distance + 1.0);
        let update = evaluate(&ctx, &profile, &mut rng());
        assert!(!update.evasion.active);
    }

    #[test]
    fn test_evasion_expires_on_timer_only() {
        let profile = no_evasion_profile();
        let mut ctx = make_context(AgentState::Chasing, 10.0);
        ctx.evasion = Evasion {
            active: true,
            timer: 0.05,
            direction: Vec3::X,
        };

        let update = evaluate(&ctx, &profile, &mut rng());
        assert!(update.evasion.active, "Still time left after one tick");

        ctx.evasion = update.evasion;
        ctx.position = update.position;
        // Move the target far away; evasion must not care.
        ctx.target = Some(Vec3::new(0.0, 0.0, 45.0));
        let mut evasion = ctx.evasion;
        for _ in 0..10 {
            ctx.evasion = evasion;
            evasion = evaluate(&ctx, &profile, &mut rng()).evasion;
        }
        assert!(!evasion.active, "Evasion should end once its timer runs out");
    }

    // ---- Attacking ----

    #[test]
    fn test_attack_respects_cooldown() {
        let profile = no_evasion_profile();
        let mut ctx = make_context(AgentState::Attacking, 1.0);

        let first = evaluate(&ctx, &profile, &mut rng());
        assert_eq!(first.attack, Some(profile.attack_damage));
        assert!((first.attack_ready_at - (ctx.now + profile.attack_cooldown_secs)).abs() < 1e-6);
        assert_eq!(first.position, ctx.position, "Attacking agent must not move");

        ctx.attack_ready_at = first.attack_ready_at;
        ctx.now += profile.attack_cooldown_secs * 0.5;
        let second = evaluate(&ctx, &profile, &mut rng());
        assert_eq!(second.attack, None, "Attack must wait for cooldown");

        ctx.now = first.attack_ready_at;
        let third = evaluate(&ctx, &profile, &mut rng());
        assert!(third.attack.is_some(), "Attack ready exactly at cooldown expiry");
    }

    #[test]
    fn test_no_attack_on_dead_target() {
        let profile = no_evasion_profile();
        let mut ctx = make_context(AgentState::Attacking, 1.0);
        ctx.target_alive = false;
        let update = evaluate(&ctx, &profile, &mut rng());
        assert_eq!(update.attack, None);
        assert_eq!(update.attack_ready_at, ctx.attack_ready_at);
    }

    // ---- Guards ----

    #[test]
    fn test_dying_never_transitions() {
        let profile = no_evasion_profile();
        let ctx = make_context(AgentState::Dying, 1.0);
        let update = evaluate(&ctx, &profile, &mut rng());
        assert_eq!(update.new_state, AgentState::Dying);
        assert!(!update.state_changed);
        assert_eq!(update.attack, None);
    }

    #[test]
    fn test_missing_target_idles() {
        let profile = no_evasion_profile();
        let mut ctx = make_context(AgentState::Chasing, 10.0);
        ctx.target = None;
        let update = evaluate(&ctx, &profile, &mut rng());
        assert_eq!(update.position, ctx.position);
        assert_eq!(update.new_state, AgentState::Chasing);
    }

    // ---- Angles ----

    #[test]
    fn test_rotate_towards_takes_short_way_round() {
        let from = 3.0;
        let to = -3.0;
        let step = rotate_towards(from, to, 0.1);
        assert!(
            wrap_angle(step - from) > 0.0,
            "Turning from 3.0 to -3.0 should cross PI, got {step}"
        );
        assert!((rotate_towards(0.0, 0.05, 0.1) - 0.05).abs() < 1e-6);
    }

    // ---- Profiles ----

    #[test]
    fn test_difficulty_scaling_wave_three() {
        let config = EnemyConfig::default();
        let factor = 1.15_f32.powi(2);
        let profile = scaled_profile(&config, factor);
        assert!((profile.max_health - config.max_health * 1.3225).abs() < 1e-3);
        assert!((profile.attack_damage - config.attack_damage * 1.3225).abs() < 1e-3);
        assert_eq!(profile.attack_range, config.attack_range);
    }

    #[test]
    fn test_scaled_speed_is_capped() {
        let config = EnemyConfig::default();
        let profile = scaled_profile(&config, 100.0);
        assert_eq!(profile.speed, config.max_speed);
    }

    // ---- Death timeline ----

    #[test]
    fn test_death_visual_progression() {
        let config = DeathConfig::default();

        let start = death_visual(0.0, &config);
        assert_eq!(start.topple, 0.0);
        assert_eq!(start.opacity, 1.0);

        let mid = death_visual(0.4, &config);
        assert!((mid.topple - 0.5).abs() < 1e-5);
        assert!((mid.desaturation - 0.8).abs() < 1e-5);

        let fading = death_visual(2.5, &config);
        assert_eq!(fading.topple, 1.0);
        assert_eq!(fading.desaturation, 1.0);
        assert!((fading.opacity - 0.5).abs() < 1e-5);

        assert_eq!(death_visual(3.0, &config).opacity, 0.0);
    }

    #[test]
    fn test_death_stages_crossed_once() {
        let config = DeathConfig::default();
        assert!(stages_crossed(0.0, 1.9, &config).is_empty());
        assert_eq!(stages_crossed(1.9, 2.0, &config), vec![DeathStage::Fade]);
        assert!(stages_crossed(2.0, 2.5, &config).is_empty());
        assert_eq!(
            stages_crossed(1.5, 3.5, &config),
            vec![DeathStage::Fade, DeathStage::Removed]
        );
        assert!(!is_complete(2.99, &config));
        assert!(is_complete(3.0, &config));
    }
}
