//! Reward shaping.
//!
//! The per-step reward is a sum of independently motivated terms: platform
//! advancement, stagnation, proximity to the next platform's center,
//! a directional nudge, a height bonus and a ground penalty. All magnitudes
//! live in [`RewardConfig`] so experiments can retune them without touching
//! the shaping logic.

use crate::action::Action;
use crate::buffer::PlatformBuffer;
use crate::config::ClimbConfig;
use crate::types::{platform_rank, AgentState, Platform};

/// Reward tuning knobs.
#[derive(Clone, Debug)]
pub struct RewardConfig {
    /// Granted when the platform index increases this step.
    pub advance_bonus: f32,
    /// Applied when the platform index decreases this step.
    pub regression_penalty: f32,
    /// Consecutive unchanged-index steps tolerated before stagnation kicks in.
    pub stagnation_threshold: u32,
    /// Applied once per step beyond the stagnation threshold.
    pub stagnation_penalty: f32,
    /// Scale of the proximity term: `scale * (1 - distance / diagonal)`.
    pub proximity_scale: f32,
    /// Nudge when the action moved the agent toward the next platform center.
    pub nudge_toward: f32,
    /// Nudge otherwise.
    pub nudge_away: f32,
    /// Scale of the height term: `scale * (y / map_height)`.
    pub height_scale: f32,
    /// Applied while the agent sits below `low_threshold`.
    pub ground_penalty: f32,
    /// Height below which the ground penalty applies.
    pub low_threshold: f32,
    /// Added on the step that terminates with a fall.
    pub fall_penalty: f32,
    /// Added on the step that reaches the top of the initial ladder.
    pub goal_bonus: f32,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            advance_bonus: 100.0,
            regression_penalty: -50.0,
            stagnation_threshold: 15,
            stagnation_penalty: -1.0,
            proximity_scale: 10.0,
            nudge_toward: 0.5,
            nudge_away: 0.1,
            height_scale: 1.0,
            ground_penalty: -0.5,
            low_threshold: 40.0,
            fall_penalty: -100.0,
            goal_bonus: 500.0,
        }
    }
}

/// The platform the agent should be heading for: one above the current
/// index, clamped to the last stored platform. An unset index targets the
/// ground platform.
pub(crate) fn next_platform(index: Option<usize>, buffer: &PlatformBuffer) -> Platform {
    let last = buffer.count().saturating_sub(1);
    let next = index.map_or(0, |i| i + 1).min(last);
    buffer.platforms()[next]
}

/// Shape the reward for one completed step. `stagnation_steps` is the
/// episode's consecutive unchanged-index counter, reset here on any change.
pub fn shape_reward(
    agent: &AgentState,
    buffer: &PlatformBuffer,
    index_before: Option<usize>,
    action: Action,
    stagnation_steps: &mut u32,
    config: &ClimbConfig,
    rc: &RewardConfig,
) -> f32 {
    let before = platform_rank(index_before);
    let after = platform_rank(agent.current_platform);

    let mut reward = 0.0;
    if after > before {
        reward += rc.advance_bonus;
    } else if after < before {
        reward += rc.regression_penalty;
    }

    if after == before {
        *stagnation_steps += 1;
        if *stagnation_steps > rc.stagnation_threshold {
            reward += rc.stagnation_penalty;
        }
    } else {
        *stagnation_steps = 0;
    }

    let center = next_platform(agent.current_platform, buffer).center();
    let distance = (agent.position - center).length();
    let normalized = (distance / config.diagonal()).min(1.0);
    reward += rc.proximity_scale * (1.0 - normalized);

    let toward = match action {
        Action::Left => center.x < agent.position.x,
        Action::Right => center.x > agent.position.x,
        Action::Jump => false,
    };
    reward += if toward { rc.nudge_toward } else { rc.nudge_away };

    reward += rc.height_scale * (agent.position.y / config.map_height);

    if agent.position.y < rc.low_threshold {
        reward += rc.ground_penalty;
    }

    reward
}
