//! Landing resolution.
//!
//! Scans every stored platform in buffer order and lands the agent on the
//! first one it overlaps horizontally while descending within the landing
//! tolerance. Generation order therefore decides ties; this ordering is part
//! of the reproducibility contract and must not be replaced by a
//! nearest-by-height search.

use crate::buffer::PlatformBuffer;
use crate::types::AgentState;

/// Resolve whether the agent is resting on a platform, updating the agent in
/// place. Returns `true` on a landing.
///
/// On a miss the platform index is retained so rewards and observations keep
/// their last known reference, but `on_platform` is cleared.
pub fn resolve_landing(agent: &mut AgentState, buffer: &PlatformBuffer, tolerance: f32) -> bool {
    for (index, platform) in buffer.platforms().iter().enumerate() {
        let overlap = platform.contains_x(agent.position.x);
        let descending = agent.velocity_y <= 0.0;
        let close = (agent.position.y - platform.y).abs() < tolerance;
        if overlap && descending && close {
            agent.position.y = platform.y;
            agent.velocity_y = 0.0;
            agent.on_platform = true;
            agent.current_platform = Some(index);
            tracing::trace!(platform = index, y = platform.y, "agent landed");
            return true;
        }
    }
    agent.on_platform = false;
    false
}
