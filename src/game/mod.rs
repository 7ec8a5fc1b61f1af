//! The dodge game: a player rectangle avoiding obstacles that scroll in from the right
//!
//! [`EpisodeController`] is the entry point. A front-end calls
//! [`EpisodeController::step`] once per frame and renders the returned [`FrameResult`].

pub mod action;
pub mod collision;
pub mod controller;
pub mod discretize;
pub mod entity;
pub mod field;
pub mod input;
pub mod reward;
pub mod spawner;

pub use action::Action;
pub use controller::{
    DodgeAgent, EpisodeController, EpisodeEnd, EpisodeMeta, FrameResult, GameConfig, Mode, Phase,
    Telemetry,
};
pub use discretize::StateKey;
pub use entity::{Bounds, Obstacle, Player, Rect};
pub use field::{FieldConfig, SimulationState};
pub use input::{Key, KeyState};
pub use reward::RewardConfig;
