#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc, clippy::float_cmp)]
//! # Tower Climb Simulation Core
//!
//! A deterministic, fixed-timestep simulation of an endless vertical-climbing
//! environment, exposed through a gym-style `reset`/`step` interface.
//!
//! The world is a ladder of flat platforms generated procedurally above a
//! ground platform. The agent moves left/right at a fixed speed and jumps
//! from platforms under arcade gravity. Whenever the agent advances to a
//! strictly higher platform the whole world is scrolled downward by the
//! climbed distance, so coordinates stay bounded while the climb is not, and
//! one fresh platform is generated above the ladder to keep its visible
//! length constant.
//!
//! ## Key Components
//!
//! -   **State:** [`WorldState`] aggregates the [`PlatformBuffer`], the
//!     [`AgentState`], the step counter and the seeded random source. It is
//!     created fresh at every reset and owned by exactly one caller.
//! -   **Stepping:** [`TowerClimbEnv::step`] runs the fixed pipeline
//!     integrate → collide → scroll → reward → episode and returns a
//!     fixed-shape [`Observation`] plus a scalar reward.
//! -   **Determinism:** all randomness flows through an injectable
//!     [`fastrand::Rng`]; equal seeds and equal action sequences replay
//!     bit-for-bit.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sim::{Action, ClimbConfig, RewardConfig, TowerClimbEnv};
//!
//! let mut env = TowerClimbEnv::new(ClimbConfig::default(), RewardConfig::default())?;
//! let (obs, _info) = env.reset(Some(42))?;
//! let result = env.step(Action::Jump)?;
//! ```

pub mod action;
pub mod buffer;
pub mod collision;
pub mod config;
pub mod env;
pub mod episode;
pub mod error;
pub mod integrator;
pub mod mapgen;
pub mod reward;
pub mod scroll;
pub mod types;

pub use action::Action;
pub use buffer::PlatformBuffer;
pub use config::{ClimbConfig, GroundSpan};
pub use env::{
    Observation, StepInfo, StepResult, TowerClimbEnv, WorldSnapshot, WorldState, OBS_DIM,
};
pub use episode::EpisodeStatus;
pub use error::ClimbError;
pub use reward::RewardConfig;
pub use types::{AgentState, Platform, PlatformSpan, Vec2};
