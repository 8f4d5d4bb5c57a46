use crate::types::Vec2;

/// Horizontal extent of the ground platform at `y = 0`.
///
/// Both variants exist in the wild; full width is the default, centered
/// spans one third of the map width centered on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundSpan {
    FullWidth,
    Centered,
}

/// Construction-time constants of the simulation.
#[derive(Clone, Debug)]
pub struct ClimbConfig {
    /// Map width in world units; the agent's `x` is clamped to `[0, map_width]`.
    pub map_width: f32,
    /// Nominal map height used for platform spacing and reward normalization.
    pub map_height: f32,
    /// Number of platforms in the initial ladder above the ground.
    pub num_platforms: usize,
    /// Per-step vertical acceleration while airborne. Negative.
    pub gravity: f32,
    /// Per-step horizontal displacement of a `Left`/`Right` action.
    pub horizontal_speed: f32,
    /// Vertical velocity granted by a jump from a platform.
    pub jump_force: f32,
    /// Landing proximity threshold in world units.
    pub landing_tolerance: f32,
    /// Fixed capacity of the platform buffer. Sized generously for the
    /// expected climb length; the buffer is never resized mid-episode.
    pub buffer_capacity: usize,
    /// Agent spawn height above the ground.
    pub start_height: f32,
    /// Ground platform variant.
    pub ground: GroundSpan,
    /// Size of the fixed platform window exposed to renderers.
    pub visible_platforms: usize,
}

impl Default for ClimbConfig {
    fn default() -> Self {
        Self {
            map_width: 900.0,
            map_height: 900.0,
            num_platforms: 5,
            gravity: -2.0,
            horizontal_speed: 10.0,
            jump_force: 30.0,
            landing_tolerance: 5.0,
            buffer_capacity: 1000,
            start_height: 50.0,
            ground: GroundSpan::FullWidth,
            visible_platforms: 3,
        }
    }
}

impl ClimbConfig {
    /// Vertical distance between consecutive ladder platforms.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn platform_spacing(&self) -> f32 {
        self.map_height / (self.num_platforms as f32 + 1.0)
    }

    /// Map diagonal, the normalizer for proximity shaping.
    #[must_use]
    pub fn diagonal(&self) -> f32 {
        self.map_width.hypot(self.map_height)
    }

    /// Agent spawn position: horizontally centered, `start_height` up.
    #[must_use]
    pub fn start_position(&self) -> Vec2 {
        Vec2::new(self.map_width / 2.0, self.start_height)
    }
}
