#![deny(clippy::all, clippy::pedantic)]
//! # Tower Climb Runtime
//!
//! Headless driver for the tower-climb environment: runs a seeded random
//! rollout across episodes, logging per-episode summaries and optionally
//! printing text frames of the world.

mod render;

use anyhow::Result;
use clap::Parser;
use sim::{Action, ClimbConfig, RewardConfig, TowerClimbEnv};

#[derive(Parser, Debug)]
#[command(name = "climb", about = "Run random rollouts of the tower-climb environment")]
struct Args {
    /// Seed for the episode map and the rollout policy.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Total number of steps to simulate across episodes.
    #[arg(long, default_value_t = 512)]
    steps: u64,

    /// Print a text frame every N steps (0 disables rendering).
    #[arg(long, default_value_t = 0)]
    render_every: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let mut env = TowerClimbEnv::new(ClimbConfig::default(), RewardConfig::default())?;
    let _ = env.reset(Some(args.seed))?;
    let policy = fastrand::Rng::with_seed(args.seed ^ 0x9e37_79b9_7f4a_7c15);

    tracing::info!(seed = args.seed, steps = args.steps, "starting rollout");

    let mut episode = 0u64;
    let mut episode_reward = 0.0f32;
    let mut episode_steps = 0u64;
    let mut best_platform: Option<usize> = None;

    for step in 0..args.steps {
        let action = Action::from_index(policy.usize(..Action::COUNT))?;
        let result = env.step(action)?;

        episode_reward += result.reward;
        episode_steps += 1;
        if let Some(index) = result.info.platform_index {
            best_platform = Some(best_platform.map_or(index, |best| best.max(index)));
        }

        if args.render_every > 0 && step % args.render_every == 0 {
            render::draw(&env.snapshot());
        }

        if result.terminated {
            tracing::info!(
                episode,
                steps = episode_steps,
                reward = episode_reward,
                best_platform = ?best_platform,
                status = ?env.snapshot().status,
                "episode finished"
            );
            let _ = env.reset(None)?;
            episode += 1;
            episode_reward = 0.0;
            episode_steps = 0;
            best_platform = None;
        }
    }

    tracing::info!(
        episodes_completed = episode,
        last_episode_steps = episode_steps,
        "rollout finished"
    );
    Ok(())
}
