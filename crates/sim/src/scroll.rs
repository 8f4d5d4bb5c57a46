//! World scrolling.
//!
//! When the agent advances to a strictly higher platform above the watermark,
//! every vertical coordinate in the world shifts down by the climbed distance
//! and one platform is generated above the ladder. This bounds coordinate
//! magnitude and buffer fill rate (one append per floor climbed, not per
//! step) while the climb itself is unbounded.

use crate::buffer::PlatformBuffer;
use crate::config::ClimbConfig;
use crate::error::ClimbError;
use crate::mapgen;
use crate::types::{platform_rank, AgentState};

/// Scroll the world if the agent advanced past the watermark this step.
/// Returns the scrolled distance, or `None` when no scroll was triggered.
///
/// `index_before` is the agent's platform index before this step's collision
/// check; the trigger compares against it so only genuine advances scroll.
pub fn apply_scroll(
    agent: &mut AgentState,
    buffer: &mut PlatformBuffer,
    last_platform_y: &mut f32,
    index_before: Option<usize>,
    config: &ClimbConfig,
    rng: &mut fastrand::Rng,
) -> Result<Option<f32>, ClimbError> {
    let advanced = platform_rank(agent.current_platform) > platform_rank(index_before);
    if !advanced || agent.position.y <= *last_platform_y {
        return Ok(None);
    }

    let dy = agent.position.y - *last_platform_y;
    buffer.shift_down(dy);
    agent.position.y -= dy;
    *last_platform_y = agent.position.y;
    mapgen::generate_next(buffer, config, rng)?;

    tracing::debug!(
        dy,
        platform = ?agent.current_platform,
        ladder = buffer.count(),
        "world scrolled"
    );
    Ok(Some(dy))
}
