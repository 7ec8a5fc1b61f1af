use rand::Rng;
use strum::VariantArray;

use crate::{
    env::{DiscreteActionSpace, Environment},
    error::{check_interval, check_positive, Result},
};

use super::{
    action::{apply_action, Action},
    collision::any_collision,
    discretize::{discretize, StateKey},
    entity::{Bounds, Obstacle, Player, Rect},
    reward::{reward, RewardConfig},
    spawner::{self, Spawner},
};

/// Geometry and pacing of the playing field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldConfig {
    pub width: f32,
    pub height: f32,
    pub player_x: f32,
    pub player_start_y: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub player_speed: f32,
    pub obstacle_width: f32,
    pub obstacle_min_height: f32,
    /// Spawned heights are drawn from `[obstacle_min_height, obstacle_min_height + obstacle_height_range)`
    pub obstacle_height_range: f32,
    /// Ticks between spawns; an obstacle appears once the counter exceeds this
    pub spawn_interval: u32,
    pub base_speed: f32,
    /// Speed added per point of score at each escalation
    pub speed_gain: f32,
    pub max_speed: f32,
    /// Survived ticks between speed escalations
    pub escalation_period: u32,
    /// Edge length in pixels of a discretization cell
    pub bucket: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
            player_x: 50.0,
            player_start_y: 200.0,
            player_width: 30.0,
            player_height: 30.0,
            player_speed: 5.0,
            obstacle_width: 30.0,
            obstacle_min_height: 30.0,
            obstacle_height_range: 50.0,
            spawn_interval: 60,
            base_speed: 3.0,
            speed_gain: 0.05,
            max_speed: 8.0,
            escalation_period: 10,
            bucket: 50.0,
        }
    }
}

impl FieldConfig {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("width", self.width),
            ("height", self.height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("player_speed", self.player_speed),
            ("obstacle_width", self.obstacle_width),
            ("obstacle_min_height", self.obstacle_min_height),
            ("obstacle_height_range", self.obstacle_height_range),
            ("base_speed", self.base_speed),
            ("max_speed", self.max_speed),
            ("escalation_period", self.escalation_period as f32),
            ("bucket", self.bucket),
        ] {
            check_positive(name, value)?;
        }
        check_interval(
            "player_start_y",
            self.player_start_y,
            0.0,
            self.height - self.player_height,
        )?;
        check_interval("player_x", self.player_x, 0.0, self.width - self.player_width)?;
        check_interval(
            "obstacle_min_height + obstacle_height_range",
            self.obstacle_min_height + self.obstacle_height_range,
            0.0,
            self.height,
        )?;
        check_interval("speed_gain", self.speed_gain, 0.0, f32::MAX)?;
        check_interval("base_speed", self.base_speed, 0.0, self.max_speed)
    }

    /// Vertical range of the player's top edge
    pub fn player_bounds(&self) -> Bounds {
        Bounds::for_height(self.height, self.player_height)
    }

    fn spawn_player(&self) -> Player {
        Player {
            rect: Rect::new(
                self.player_x,
                self.player_start_y,
                self.player_width,
                self.player_height,
            ),
            speed: self.player_speed,
        }
    }
}

/// Everything that changes from tick to tick during an episode
///
/// Owned by the [`EpisodeController`](super::EpisodeController); advancing it is
/// deterministic given the random source passed in.
#[derive(Debug, Clone)]
pub struct SimulationState {
    config: FieldConfig,
    rewards: RewardConfig,
    player: Player,
    obstacles: Vec<Obstacle>,
    spawner: Spawner,
    obstacle_speed: f32,
    score: u32,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new(FieldConfig::default(), RewardConfig::default())
            .expect("default field config is valid")
    }
}

impl SimulationState {
    /// **Errors** if `config` is invalid
    pub fn new(config: FieldConfig, rewards: RewardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            player: config.spawn_player(),
            obstacles: Vec::new(),
            spawner: Spawner::new(&config),
            obstacle_speed: config.base_speed,
            score: 0,
            config,
            rewards,
        })
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn obstacle_speed(&self) -> f32 {
        self.obstacle_speed
    }

    /// Ticks survived in the current episode
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn spawner(&self) -> &Spawner {
        &self.spawner
    }

    /// Obstacle half of a tick: scroll, spawn, then escalate the speed
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        spawner::advance(&mut self.obstacles, self.obstacle_speed);
        if let Some(obstacle) =
            self.spawner
                .maybe_spawn(self.config.width, self.config.height, rng)
        {
            self.obstacles.push(obstacle);
        }
        self.obstacle_speed = spawner::escalate(self.obstacle_speed, self.score, &self.config);
    }

    /// Move the player without computing a reward
    pub fn apply(&mut self, action: Action) {
        apply_action(action, &mut self.player, self.config.player_bounds());
    }

    pub fn collided(&self) -> bool {
        any_collision(&self.player, &self.obstacles)
    }

    /// Count the current tick as survived
    pub fn tick_score(&mut self) {
        self.score += 1;
    }

    /// Start a fresh episode, also restarting the spawn counter
    pub fn restart(&mut self) {
        self.reset();
        self.spawner.reset();
    }

    #[cfg(test)]
    pub(crate) fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    #[cfg(test)]
    pub(crate) fn obstacles_mut(&mut self) -> &mut Vec<Obstacle> {
        &mut self.obstacles
    }
}

impl Environment for SimulationState {
    type State = StateKey;
    type Action = Action;

    fn state(&self) -> Self::State {
        discretize(&self.player, &self.obstacles, self.config.bucket)
    }

    fn is_active(&self) -> bool {
        !self.collided()
    }

    fn step(&mut self, action: Self::Action) -> f32 {
        self.apply(action);
        reward(self.player.rect.y, &self.rewards)
    }

    /// Player back to its start height, obstacles cleared, speed and score reset
    ///
    /// The spawn counter keeps running across episodes.
    fn reset(&mut self) -> Self::State {
        self.player = self.config.spawn_player();
        self.obstacles.clear();
        self.obstacle_speed = self.config.base_speed;
        self.score = 0;
        self.state()
    }
}

impl DiscreteActionSpace for SimulationState {
    fn actions(&self) -> Vec<Self::Action> {
        Action::VARIANTS.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::error::Error;

    #[test]
    fn default_config_is_valid() {
        assert!(FieldConfig::default().validate().is_ok());
    }

    #[test]
    fn invalid_configs_rejected() {
        let config = FieldConfig {
            bucket: 0.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(Error::NonPositive {
                name: "bucket",
                value: 0.0
            })
        );

        let config = FieldConfig {
            player_start_y: 390.0,
            ..Default::default()
        };
        assert!(config.validate().is_err(), "Player must start on the canvas");

        let config = FieldConfig {
            obstacle_height_range: 500.0,
            ..Default::default()
        };
        assert!(config.validate().is_err(), "Obstacles must fit the canvas");

        let config = FieldConfig {
            speed_gain: -0.5,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(Error::InvalidInterval {
                name: "speed_gain",
                value: -0.5,
                low: 0.0,
                high: f32::MAX
            }),
            "Speed must never decrease"
        );

        let config = FieldConfig {
            base_speed: 0.0,
            speed_gain: 0.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(Error::NonPositive {
                name: "base_speed",
                value: 0.0
            }),
            "Obstacles must scroll off the canvas"
        );
    }

    #[test]
    fn invalid_config_is_an_error_not_a_panic() {
        for config in [
            FieldConfig {
                obstacle_height_range: 0.0,
                ..Default::default()
            },
            FieldConfig {
                escalation_period: 0,
                ..Default::default()
            },
        ] {
            assert!(SimulationState::new(config, RewardConfig::default()).is_err());
        }
    }

    #[test]
    fn spawn_then_scroll() {
        let mut field = SimulationState::default();
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..60 {
            field.advance(&mut rng);
        }
        assert!(field.obstacles().is_empty(), "Nothing before the 61st tick");

        field.advance(&mut rng);
        assert_eq!(field.obstacles().len(), 1, "Exactly one obstacle");
        assert_eq!(field.obstacles()[0].rect.x, 600.0, "Appended at the right edge");

        for tick in 1..=3 {
            field.advance(&mut rng);
            assert_eq!(field.obstacles().len(), 1, "No further spawns");
            assert_eq!(field.obstacles()[0].rect.x, 600.0 - 3.0 * tick as f32);
        }
    }

    #[test]
    fn obstacle_removed_past_left_edge() {
        let mut field = SimulationState::default();
        let mut rng = StdRng::seed_from_u64(5);
        field.obstacles_mut().push(Obstacle {
            rect: Rect::new(-27.0, 0.0, 30.0, 30.0),
        });
        field.advance(&mut rng);
        assert_eq!(field.obstacles().len(), 1, "Right edge at zero is kept");
        field.advance(&mut rng);
        assert!(field.obstacles().is_empty(), "Removed once x < -width");
    }

    #[test]
    fn speed_escalates_with_score() {
        let mut field = SimulationState::default();
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..20 {
            field.tick_score();
        }
        field.advance(&mut rng);
        assert!((field.obstacle_speed() - 4.0).abs() < 1e-6);

        field.reset();
        assert_eq!(field.obstacle_speed(), 3.0, "Speed reset with the episode");
    }

    #[test]
    fn step_rewards_post_action_position() {
        let mut field = SimulationState::default();
        assert_eq!(field.step(Action::Stay), 1.5, "Centre band at y=200");
        field.player_mut().rect.y = 50.0;
        assert_eq!(field.step(Action::Up), 0.5, "Moved to y=45 near the top");
        assert_eq!(field.player().rect.y, 45.0);
    }

    #[test]
    fn reset_keeps_spawn_counter() {
        let mut field = SimulationState::default();
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..30 {
            field.advance(&mut rng);
        }
        field.player_mut().rect.y = 10.0;
        assert_eq!(field.reset(), StateKey::Safe);
        assert_eq!(field.player().rect.y, 200.0);
        assert_eq!(field.spawner().timer(), 30, "Counter survives a reset");

        field.restart();
        assert_eq!(field.spawner().timer(), 0, "Counter cleared on restart");
    }

    #[test]
    fn actions_in_priority_order() {
        let field = SimulationState::default();
        assert_eq!(field.actions(), [Action::Up, Action::Down, Action::Stay]);
    }
}
