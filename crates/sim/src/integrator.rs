//! Per-step agent integration.
//!
//! Horizontal input moves the agent at a fixed speed inside the map bounds.
//! Gravity accelerates the agent only while airborne; a jump converts a
//! grounded agent into an airborne one with `jump_force` of upward velocity.
//! Landing detection is not handled here; the collision resolver runs
//! immediately after integration within the same step.

use crate::action::Action;
use crate::config::ClimbConfig;
use crate::types::AgentState;

/// Apply the action's direct effect: horizontal displacement clamped to
/// `[0, map_width]`, or a jump if the agent is on a platform.
pub fn apply_action(agent: &mut AgentState, action: Action, config: &ClimbConfig) {
    match action {
        Action::Left => {
            agent.position.x = (agent.position.x - config.horizontal_speed).max(0.0);
        }
        Action::Right => {
            agent.position.x = (agent.position.x + config.horizontal_speed).min(config.map_width);
        }
        Action::Jump => {
            if agent.on_platform {
                agent.velocity_y = config.jump_force;
                agent.on_platform = false;
            }
        }
    }
}

/// Advance vertical velocity and position by one step. `y` never goes
/// negative; the episode controller decides what reaching the bottom means.
pub fn integrate(agent: &mut AgentState, config: &ClimbConfig) {
    if !agent.on_platform {
        agent.velocity_y += config.gravity;
    }
    agent.position.y = (agent.position.y + agent.velocity_y).max(0.0);
}
