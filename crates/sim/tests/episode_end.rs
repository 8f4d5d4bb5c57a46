use sim::{
    Action, ClimbConfig, ClimbError, EpisodeStatus, GroundSpan, RewardConfig, TowerClimbEnv, Vec2,
};

fn ready_env(config: ClimbConfig, seed: u64) -> TowerClimbEnv {
    let mut env = TowerClimbEnv::new(config, RewardConfig::default()).unwrap();
    let _ = env.reset(Some(seed)).unwrap();
    env
}

fn settle(env: &mut TowerClimbEnv) {
    for _ in 0..32 {
        env.step(Action::Jump).unwrap();
        if env.world.agent.on_platform {
            return;
        }
    }
    panic!("agent never settled");
}

/// A narrow centered ground lets the spawned agent walk off into the void:
/// drifting left while falling misses the ground span entirely.
fn centered_ground_config() -> ClimbConfig {
    ClimbConfig {
        map_width: 100.0,
        ground: GroundSpan::Centered,
        ..ClimbConfig::default()
    }
}

#[test]
fn missing_every_platform_terminates_with_a_fall() {
    let mut env = ready_env(centered_ground_config(), 19);

    let mut terminal = None;
    for _ in 0..32 {
        let result = env.step(Action::Left).unwrap();
        if result.terminated {
            terminal = Some(result);
            break;
        }
    }

    let result = terminal.expect("agent drifting off the ground should fall out");
    assert_eq!(env.world.status, EpisodeStatus::TerminatedFall);
    assert_eq!(env.world.agent.position.y, 0.0);
    assert!(!env.world.agent.on_platform);
    // the fall penalty dominates every shaping term on the terminal step
    assert!(result.reward < -80.0);
}

#[test]
fn stepping_a_terminated_episode_is_rejected_until_reset() {
    let mut env = ready_env(centered_ground_config(), 19);
    while !env.step(Action::Left).unwrap().terminated {}

    assert_eq!(env.step(Action::Left), Err(ClimbError::InvalidState));
    assert_eq!(env.step(Action::Jump), Err(ClimbError::InvalidState));

    let _ = env.reset(Some(23)).unwrap();
    assert!(env.step(Action::Jump).is_ok());
}

#[test]
fn landing_on_the_top_of_the_initial_ladder_wins() {
    let mut env = ready_env(ClimbConfig::default(), 21);
    settle(&mut env);

    let goal_index = env.config.num_platforms;
    let top = env.world.platforms.get(goal_index).unwrap();
    env.world.agent.position = Vec2::new(top.center().x, top.y + 3.0);
    env.world.agent.velocity_y = 0.0;
    env.world.agent.on_platform = false;

    let result = env.step(Action::Jump).unwrap();

    assert!(result.terminated);
    assert!(!result.truncated);
    assert_eq!(env.world.status, EpisodeStatus::TerminatedGoal);
    assert_eq!(result.info.platform_index, Some(goal_index));
    // goal bonus plus the advance bonus dwarf the shaping terms
    assert!(result.reward > 400.0);
}

#[test]
fn the_win_still_scrolls_and_extends_the_ladder() {
    let mut env = ready_env(ClimbConfig::default(), 25);
    settle(&mut env);
    let count_before = env.world.platforms.count();

    let goal_index = env.config.num_platforms;
    let top = env.world.platforms.get(goal_index).unwrap();
    env.world.agent.position = Vec2::new(top.center().x, top.y + 3.0);
    env.world.agent.velocity_y = 0.0;
    env.world.agent.on_platform = false;
    env.step(Action::Jump).unwrap();

    assert_eq!(env.world.platforms.count(), count_before + 1);
    assert_eq!(env.world.agent.position.y, env.config.start_height);
}
