//! The gym-style environment facade.
//!
//! [`TowerClimbEnv`] owns one [`WorldState`] at a time and exposes exactly
//! two operations to its driver: `reset` and `step`. A step runs the fixed
//! pipeline integrate → collide → scroll → reward → episode and returns a
//! fixed-shape observation, a scalar reward and the termination signal.
//! Renderers consume [`WorldSnapshot`], a read-only copy that never touches
//! simulation state.

use crate::action::Action;
use crate::buffer::PlatformBuffer;
use crate::collision;
use crate::config::ClimbConfig;
use crate::episode::{self, EpisodeStatus};
use crate::error::ClimbError;
use crate::integrator;
use crate::mapgen;
use crate::reward::{self, RewardConfig};
use crate::scroll;
use crate::types::{AgentState, Platform, PlatformSpan, Vec2};

/// Number of floats in a flattened [`Observation`].
pub const OBS_DIM: usize = 11;

/// Fixed-shape observation returned by every `reset` and `step`.
///
/// The current platform slot is all zeros while the agent has not landed
/// yet; the next platform is one above the current index, clamped to the
/// last stored platform.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Observation {
    pub agent_position: Vec2,
    pub current_platform: PlatformSpan,
    pub next_platform: PlatformSpan,
    pub velocity_y: f32,
}

impl Observation {
    /// Flatten into the fixed `[f32; OBS_DIM]` layout consumed by encoders.
    #[must_use]
    pub fn as_array(&self) -> [f32; OBS_DIM] {
        bytemuck::cast(*self)
    }
}

/// Diagnostics carried alongside every observation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepInfo {
    pub platform_index: Option<usize>,
    pub step: u64,
}

/// Everything one `step` call produces. `truncated` is always `false` here;
/// step budgets are the driver's concern, not the core's.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepResult {
    pub observation: Observation,
    pub reward: f32,
    pub terminated: bool,
    pub truncated: bool,
    pub info: StepInfo,
}

/// Read-only view of the world for renderers and diagnostics.
#[derive(Debug, Clone)]
pub struct WorldSnapshot {
    pub agent_position: Vec2,
    pub velocity_y: f32,
    pub platforms: Vec<Platform>,
    /// Fixed-size window of platforms at or above the agent, ascending.
    pub upcoming: Vec<Platform>,
    pub status: EpisodeStatus,
    pub step: u64,
}

/// The complete per-episode state. Created fresh at every reset, owned by
/// exactly one environment, discarded at the next reset.
pub struct WorldState {
    pub platforms: PlatformBuffer,
    pub agent: AgentState,
    pub step: u64,
    /// Height of the last platform the agent advanced to; scroll distances
    /// are measured against it.
    pub last_platform_y: f32,
    pub stagnation_steps: u32,
    pub status: EpisodeStatus,
    pub rng: fastrand::Rng,
}

impl WorldState {
    /// Generate a fresh world: new ladder, agent at the spawn position,
    /// counters zeroed.
    pub fn generate(config: &ClimbConfig, mut rng: fastrand::Rng) -> Result<Self, ClimbError> {
        let platforms = mapgen::initialize(config, &mut rng)?;
        let agent = AgentState {
            position: config.start_position(),
            velocity_y: 0.0,
            current_platform: None,
            on_platform: false,
        };
        Ok(Self {
            platforms,
            agent,
            step: 0,
            last_platform_y: config.start_height,
            stagnation_steps: 0,
            status: EpisodeStatus::Running,
            rng,
        })
    }
}

pub struct TowerClimbEnv {
    pub config: ClimbConfig,
    pub reward_config: RewardConfig,
    pub world: WorldState,
}

impl TowerClimbEnv {
    /// Build an environment with a ready world seeded from entropy. Call
    /// [`reset`](Self::reset) with a seed for reproducible episodes.
    pub fn new(config: ClimbConfig, reward_config: RewardConfig) -> Result<Self, ClimbError> {
        let world = WorldState::generate(&config, fastrand::Rng::new())?;
        Ok(Self {
            config,
            reward_config,
            world,
        })
    }

    /// Discard the current world and start a fresh episode.
    ///
    /// `Some(seed)` reseeds the random stream for exact reproducibility;
    /// `None` continues the previous stream.
    pub fn reset(&mut self, seed: Option<u64>) -> Result<(Observation, StepInfo), ClimbError> {
        let rng = match seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::with_seed(self.world.rng.u64(..)),
        };
        self.world = WorldState::generate(&self.config, rng)?;
        Ok((self.observe(), self.info()))
    }

    /// Advance the simulation by one action.
    ///
    /// Fails with [`ClimbError::InvalidState`] once the episode has
    /// terminated, until the next reset.
    pub fn step(&mut self, action: Action) -> Result<StepResult, ClimbError> {
        if self.world.status.is_terminal() {
            return Err(ClimbError::InvalidState);
        }

        let world = &mut self.world;
        let index_before = world.agent.current_platform;

        integrator::apply_action(&mut world.agent, action, &self.config);
        integrator::integrate(&mut world.agent, &self.config);
        collision::resolve_landing(
            &mut world.agent,
            &world.platforms,
            self.config.landing_tolerance,
        );
        scroll::apply_scroll(
            &mut world.agent,
            &mut world.platforms,
            &mut world.last_platform_y,
            index_before,
            &self.config,
            &mut world.rng,
        )?;

        let mut reward = reward::shape_reward(
            &world.agent,
            &world.platforms,
            index_before,
            action,
            &mut world.stagnation_steps,
            &self.config,
            &self.reward_config,
        );

        world.status = episode::evaluate(&world.agent, self.config.num_platforms);
        match world.status {
            EpisodeStatus::TerminatedFall => reward += self.reward_config.fall_penalty,
            EpisodeStatus::TerminatedGoal => reward += self.reward_config.goal_bonus,
            EpisodeStatus::Running => {}
        }
        world.step += 1;

        if world.status.is_terminal() {
            tracing::debug!(status = ?world.status, step = world.step, "episode terminated");
        }

        Ok(StepResult {
            observation: self.observe(),
            reward,
            terminated: self.world.status.is_terminal(),
            truncated: false,
            info: self.info(),
        })
    }

    /// Encode the current world into the fixed observation shape.
    #[must_use]
    pub fn observe(&self) -> Observation {
        let agent = &self.world.agent;
        let platforms = self.world.platforms.platforms();
        let current = agent
            .current_platform
            .and_then(|i| platforms.get(i))
            .map_or_else(PlatformSpan::default, |p| p.span());
        let next = reward::next_platform(agent.current_platform, &self.world.platforms).span();

        Observation {
            agent_position: agent.position,
            current_platform: current,
            next_platform: next,
            velocity_y: agent.velocity_y,
        }
    }

    #[must_use]
    pub fn info(&self) -> StepInfo {
        StepInfo {
            platform_index: self.world.agent.current_platform,
            step: self.world.step,
        }
    }

    /// Read-only copy of the world for renderers; never aliases simulation
    /// state.
    #[must_use]
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            agent_position: self.world.agent.position,
            velocity_y: self.world.agent.velocity_y,
            platforms: self.world.platforms.platforms().to_vec(),
            upcoming: self
                .world
                .platforms
                .windowed_view(self.world.agent.position.y, self.config.visible_platforms),
            status: self.world.status,
            step: self.world.step,
        }
    }
}
