//! Procedural platform generation.
//!
//! The initial ladder places the ground platform at `y = 0` and
//! `num_platforms` platforms above it at fixed vertical spacing, each with a
//! random width and horizontal offset. During an episode the ladder is
//! extended one platform at a time as the agent climbs. All randomness comes
//! from the injected generator so seeded episodes replay exactly.

use crate::buffer::PlatformBuffer;
use crate::config::{ClimbConfig, GroundSpan};
use crate::error::ClimbError;
use crate::types::Platform;

/// Build the initial ladder: ground platform plus `num_platforms` random
/// platforms at `platform_spacing` intervals.
pub fn initialize(
    config: &ClimbConfig,
    rng: &mut fastrand::Rng,
) -> Result<PlatformBuffer, ClimbError> {
    let mut buffer = PlatformBuffer::with_capacity(config.buffer_capacity);

    let ground = match config.ground {
        GroundSpan::FullWidth => Platform::new(0.0, config.map_width, 0.0),
        GroundSpan::Centered => {
            let width = config.map_width / 3.0;
            let x_start = (config.map_width - width) / 2.0;
            Platform::new(x_start, x_start + width, 0.0)
        }
    };
    buffer.append(ground)?;

    let spacing = config.platform_spacing();
    for i in 1..=config.num_platforms {
        #[allow(clippy::cast_precision_loss)]
        let y = i as f32 * spacing;
        buffer.append(random_platform(config, y, rng))?;
    }
    Ok(buffer)
}

/// Append one platform `platform_spacing` above the current highest one.
pub fn generate_next(
    buffer: &mut PlatformBuffer,
    config: &ClimbConfig,
    rng: &mut fastrand::Rng,
) -> Result<usize, ClimbError> {
    let highest = buffer.highest_y().unwrap_or(0.0);
    let y = highest + config.platform_spacing();
    buffer.append(random_platform(config, y, rng))
}

/// Draw a platform at height `y` with width uniform in
/// `[map_width / 8, map_width / 3]` and an offset that keeps it inside
/// `[0, map_width]`.
fn random_platform(config: &ClimbConfig, y: f32, rng: &mut fastrand::Rng) -> Platform {
    let min_width = config.map_width / 8.0;
    let max_width = config.map_width / 3.0;
    let width = min_width + (max_width - min_width) * rng.f32();
    let x_start = (config.map_width - width) * rng.f32();
    Platform::new(x_start, x_start + width, y)
}
