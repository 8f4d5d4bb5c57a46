//! Episode termination rules.
//!
//! Evaluated once per step after collision and scrolling have settled. Both
//! terminal states are absorbing; the environment rejects further steps with
//! `InvalidState` instead of silently continuing.

use crate::types::AgentState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpisodeStatus {
    Running,
    /// The agent reached the bottom of the world without resting on any
    /// platform.
    TerminatedFall,
    /// The agent climbed the whole initial ladder.
    TerminatedGoal,
}

impl EpisodeStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Running)
    }
}

/// Decide the episode status for a settled step. `goal_index` is the buffer
/// index of the highest initially generated platform; indices are stable
/// across scrolling, so reaching it means the initial ladder was climbed.
#[must_use]
pub fn evaluate(agent: &AgentState, goal_index: usize) -> EpisodeStatus {
    if agent.on_platform && agent.current_platform.is_some_and(|i| i >= goal_index) {
        return EpisodeStatus::TerminatedGoal;
    }
    if agent.position.y <= 0.0 && !agent.on_platform {
        return EpisodeStatus::TerminatedFall;
    }
    EpisodeStatus::Running
}
