use sim::{Action, ClimbConfig, Platform, RewardConfig, TowerClimbEnv, Vec2};

fn settled_env(seed: u64) -> TowerClimbEnv {
    let mut env = TowerClimbEnv::new(ClimbConfig::default(), RewardConfig::default()).unwrap();
    let _ = env.reset(Some(seed)).unwrap();
    for _ in 0..32 {
        env.step(Action::Jump).unwrap();
        if env.world.agent.on_platform {
            break;
        }
    }
    assert_eq!(env.world.agent.current_platform, Some(0));
    env
}

/// Park the airborne agent just above the given platform so the next step
/// lands on it.
fn drop_onto(env: &mut TowerClimbEnv, index: usize) {
    let target = env.world.platforms.get(index).unwrap();
    env.world.agent.position = Vec2::new(target.center().x, target.y + 3.0);
    env.world.agent.velocity_y = 0.0;
    env.world.agent.on_platform = false;
}

#[test]
fn climbing_one_floor_scrolls_the_world_down_by_the_climb() {
    let mut env = settled_env(13);
    let before: Vec<Platform> = env.world.platforms.platforms().to_vec();
    let count_before = before.len();
    let target_y = before[1].y;

    drop_onto(&mut env, 1);
    let result = env.step(Action::Jump).unwrap();
    assert!(!result.terminated);

    // landed on the higher platform, then scrolled back to the watermark
    assert_eq!(env.world.agent.current_platform, Some(1));
    assert!(env.world.agent.on_platform);
    assert_eq!(env.world.agent.position.y, env.world.last_platform_y);
    assert_eq!(env.world.last_platform_y, env.config.start_height);

    // every pre-existing platform moved down by exactly the climbed distance
    let dy = target_y - env.config.start_height;
    for (index, old) in before.iter().enumerate() {
        let new = env.world.platforms.get(index).unwrap();
        assert_eq!(new.y, old.y - dy);
        assert_eq!(new.x_start, old.x_start);
        assert_eq!(new.x_end, old.x_end);
    }

    // the ladder was extended by exactly one platform
    assert_eq!(env.world.platforms.count(), count_before + 1);
}

#[test]
fn scrolling_preserves_height_above_the_current_platform() {
    let mut env = settled_env(29);

    drop_onto(&mut env, 2);
    env.step(Action::Jump).unwrap();

    assert_eq!(env.world.agent.current_platform, Some(2));
    let platform = env.world.platforms.get(2).unwrap();
    assert_eq!(env.world.agent.position.y, platform.y);
}

#[test]
fn advance_reward_is_paid_on_the_scrolling_step() {
    let mut env = settled_env(31);
    let advance_bonus = env.reward_config.advance_bonus;

    drop_onto(&mut env, 1);
    let result = env.step(Action::Jump).unwrap();

    assert!(result.reward > advance_bonus);
    assert_eq!(result.info.platform_index, Some(1));
}

#[test]
fn falling_back_down_does_not_scroll() {
    let mut env = settled_env(37);
    drop_onto(&mut env, 1);
    env.step(Action::Jump).unwrap();
    let count_after_climb = env.world.platforms.count();

    // shove the agent off the platform and let it fall back to the ground
    env.world.agent.position.y += 40.0;
    env.world.agent.on_platform = false;
    let mut landed = false;
    for _ in 0..64 {
        env.step(Action::Jump).unwrap();
        if env.world.agent.on_platform {
            landed = true;
            break;
        }
    }

    assert!(landed);
    assert_eq!(env.world.platforms.count(), count_after_climb);
}
