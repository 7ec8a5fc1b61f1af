use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};
use strum::Display;

use crate::{
    algo::tabular::q_table::{QTableAgent, QTableAgentConfig},
    decay,
    env::Environment,
    error::{Error, Result},
};

use super::{
    entity::{Obstacle, Player},
    field::{FieldConfig, SimulationState},
    input::KeyState,
    reward::RewardConfig,
};

/// The dodge agent with its default epsilon schedule
pub type DodgeAgent = QTableAgent<SimulationState, decay::Geometric>;

/// Configuration for the [`EpisodeController`]
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    pub field: FieldConfig,
    pub rewards: RewardConfig,
    pub agent: QTableAgentConfig<decay::Geometric>,
}

impl GameConfig {
    pub fn validate(&self) -> Result<()> {
        self.field.validate()?;
        self.agent.validate()
    }
}

/// Who drives the player
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum Mode {
    Manual,
    Ai,
}

/// Lifecycle of the controller
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    #[strum(to_string = "idle")]
    Idle,
    #[strum(to_string = "playing")]
    RunningManual,
    #[strum(to_string = "training")]
    RunningAi,
    #[strum(to_string = "game over")]
    Over,
}

impl Phase {
    /// The mode of a running phase
    pub fn mode(self) -> Option<Mode> {
        match self {
            Self::RunningManual => Some(Mode::Manual),
            Self::RunningAi => Some(Mode::Ai),
            Self::Idle | Self::Over => None,
        }
    }
}

/// An episode that terminated during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpisodeEnd {
    pub mode: Mode,
    /// Generation the episode belonged to, `None` for manual games
    pub generation: Option<u32>,
    pub score: u32,
}

/// Read-only counters exposed to the front-end
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Telemetry {
    pub phase: Phase,
    pub score: u32,
    pub high_score: u32,
    pub best_ai_score: u32,
    pub generation: u32,
    pub epsilon: f32,
    pub q_table_size: usize,
}

/// Telemetry plus what happened during the tick
#[derive(Debug, Clone, PartialEq)]
pub struct EpisodeMeta {
    pub telemetry: Telemetry,
    pub collided: bool,
    pub ended: Option<EpisodeEnd>,
}

/// Everything the front-end needs to render one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameResult {
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    pub meta: EpisodeMeta,
}

/// Drives the game one tick at a time
///
/// The controller never schedules itself: a front-end timer or a test calls
/// [`step`](Self::step) once per frame. All randomness is drawn from the injected `R`.
pub struct EpisodeController<R: Rng = StdRng> {
    phase: Phase,
    field: SimulationState,
    agent: DodgeAgent,
    rng: R,
    high_score: u32,
    best_ai_score: u32,
    generation: u32,
}

impl EpisodeController<StdRng> {
    /// Controller with a seeded [`StdRng`], for reproducible runs
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> EpisodeController<R> {
    /// **Errors** if the configuration is invalid
    pub fn new(config: GameConfig, rng: R) -> Result<Self> {
        config.validate()?;
        let GameConfig {
            field,
            rewards,
            agent,
        } = config;
        Ok(Self {
            phase: Phase::Idle,
            field: SimulationState::new(field, rewards)?,
            agent: QTableAgent::new(agent)?,
            rng,
            high_score: 0,
            best_ai_score: 0,
            generation: 1,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn field(&self) -> &SimulationState {
        &self.field
    }

    pub fn agent(&self) -> &DodgeAgent {
        &self.agent
    }

    pub fn telemetry(&self) -> Telemetry {
        Telemetry {
            phase: self.phase,
            score: self.field.score(),
            high_score: self.high_score,
            best_ai_score: self.best_ai_score,
            generation: self.generation,
            epsilon: self.agent.epsilon(),
            q_table_size: self.agent.table_size(),
        }
    }

    fn invalid(&self, command: &'static str) -> Error {
        Error::InvalidTransition {
            phase: self.phase,
            command,
        }
    }

    /// Begin a manual game or a training session from `Idle`
    pub fn start_episode(&mut self, mode: Mode) -> Result<()> {
        if self.phase != Phase::Idle {
            return Err(self.invalid("start an episode"));
        }
        self.field.restart();
        self.phase = match mode {
            Mode::Manual => Phase::RunningManual,
            Mode::Ai => {
                self.agent.begin_episode();
                Phase::RunningAi
            }
        };
        debug!("started {mode} episode");
        Ok(())
    }

    /// Leave a training session; learned values are kept
    pub fn stop_training(&mut self) -> Result<()> {
        if self.phase != Phase::RunningAi {
            return Err(self.invalid("stop training"));
        }
        self.phase = Phase::Idle;
        debug!(
            "training stopped at generation {} with {} q-table entries",
            self.generation,
            self.agent.table_size()
        );
        Ok(())
    }

    /// Dismiss the game over screen
    pub fn acknowledge(&mut self) -> Result<()> {
        if self.phase != Phase::Over {
            return Err(self.invalid("acknowledge"));
        }
        self.phase = Phase::Idle;
        Ok(())
    }

    /// Forget the Q-table, restart the epsilon schedule, and reset the AI counters
    pub fn reset_learning(&mut self) {
        self.agent.reset();
        self.generation = 1;
        self.best_ai_score = 0;
        info!("learning reset");
    }

    /// Advance the simulation by one tick
    ///
    /// `input` is only consulted in manual mode. Outside a running phase nothing
    /// moves and the current frame is returned as is.
    pub fn step(&mut self, input: &KeyState) -> FrameResult {
        let (collided, ended) = match self.phase.mode() {
            Some(mode) => {
                self.field.advance(&mut self.rng);
                match mode {
                    Mode::Manual => self.tick_manual(input),
                    Mode::Ai => self.tick_ai(),
                }
            }
            None => (false, None),
        };
        self.frame(collided, ended)
    }

    fn tick_manual(&mut self, input: &KeyState) -> (bool, Option<EpisodeEnd>) {
        for action in input.actions() {
            self.field.apply(action);
        }

        if !self.field.collided() {
            self.field.tick_score();
            return (false, None);
        }

        let score = self.field.score();
        if score > self.high_score {
            info!("new high score {score} (previous {})", self.high_score);
            self.high_score = score;
        }
        self.phase = Phase::Over;
        info!("game over with score {score}");

        (
            true,
            Some(EpisodeEnd {
                mode: Mode::Manual,
                generation: None,
                score,
            }),
        )
    }

    fn tick_ai(&mut self) -> (bool, Option<EpisodeEnd>) {
        let state = self.field.state();
        let action = self.agent.act(&self.field, state, &mut self.rng);
        let reward = self.field.step(action);
        self.agent.reinforce(&self.field, state, action, reward);

        if self.field.is_active() {
            self.field.tick_score();
            return (false, None);
        }

        let terminal = self.field.state();
        self.agent.on_collision(&self.field, terminal);

        let score = self.field.score();
        let generation = self.generation;
        if score > self.best_ai_score {
            info!(
                "generation {generation} set a new best score {score} (previous {})",
                self.best_ai_score
            );
            self.best_ai_score = score;
        }
        info!(
            "generation {generation} ended with score {score}, epsilon now {:.3}",
            self.agent.epsilon()
        );

        self.generation += 1;
        self.field.reset();

        (
            true,
            Some(EpisodeEnd {
                mode: Mode::Ai,
                generation: Some(generation),
                score,
            }),
        )
    }

    fn frame(&self, collided: bool, ended: Option<EpisodeEnd>) -> FrameResult {
        FrameResult {
            player: *self.field.player(),
            obstacles: self.field.obstacles().to_vec(),
            score: self.field.score(),
            meta: EpisodeMeta {
                telemetry: self.telemetry(),
                collided,
                ended,
            },
        }
    }
}
