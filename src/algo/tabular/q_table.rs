use std::collections::HashMap;

use log::debug;
use rand::{seq::SliceRandom, Rng};

use crate::{
    decay::{self, Decay},
    env::{DiscreteActionSpace, Environment, Exp},
    error::{check_interval, Result},
    exploration::{Choice, EpsilonGreedy},
};

use super::Hashable;

/// Configuration for the [`QTableAgent`]
#[derive(Debug, Clone)]
pub struct QTableAgentConfig<D: Decay> {
    pub exploration: EpsilonGreedy<D>,
    /// Learning rate
    pub alpha: f32,
    /// Discount factor
    pub gamma: f32,
    /// Reward credited to the last state action pair when an episode ends in a collision
    pub terminal_penalty: f32,
}

impl Default for QTableAgentConfig<decay::Geometric> {
    fn default() -> Self {
        Self {
            exploration: EpsilonGreedy::new(
                decay::Geometric::new(0.995, 0.3, 0.05).expect("default schedule is valid"),
            ),
            alpha: 0.1,
            gamma: 0.9,
            terminal_penalty: -100.0,
        }
    }
}

impl<D: Decay> QTableAgentConfig<D> {
    /// **Errors** if `alpha` or `gamma` is not in the interval `[0,1]`
    pub fn validate(&self) -> Result<()> {
        check_interval("alpha", self.alpha, 0.0, 1.0)?;
        check_interval("gamma", self.gamma, 0.0, 1.0)?;
        check_interval("epsilon", self.exploration.epsilon(0), 0.0, 1.0)
    }
}

/// An online Q-learning agent that utilizes a Q-table to learn its environment
///
/// The agent is driven one tick at a time: it remembers the state action pair it chose
/// last, and credits that pair with the reward observed on the following tick.
///
/// ### Generics
/// - `E` - The [`Environment`] in which the agent will learn
///     - The environment's state and action spaces must both be discrete because a Q value will be recorded for each state action pair
///     - For the same reason, the state and action types must be [`Hashable`] to be used as keys in a [`HashMap`]
/// - `D` - The epsilon schedule, evaluated at the number of finished episodes
pub struct QTableAgent<E, D>
where
    E: Environment + DiscreteActionSpace,
    E::State: Hashable,
    E::Action: Hashable,
    D: Decay,
{
    q_table: HashMap<(E::State, E::Action), f32>,
    exploration: EpsilonGreedy<D>,
    alpha: f32,
    gamma: f32,
    terminal_penalty: f32,
    episode: u32,
    last: Option<(E::State, E::Action)>,
}

impl<E, D> QTableAgent<E, D>
where
    E: Environment + DiscreteActionSpace,
    E::State: Hashable,
    E::Action: Hashable,
    D: Decay,
{
    /// Initialize a new `QTableAgent`
    ///
    /// **Errors** if `alpha` or `gamma` is not in the interval `[0,1]`
    pub fn new(config: QTableAgentConfig<D>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            q_table: HashMap::new(),
            exploration: config.exploration,
            alpha: config.alpha,
            gamma: config.gamma,
            terminal_penalty: config.terminal_penalty,
            episode: 0,
            last: None,
        })
    }

    pub fn get_q_table(&self) -> &HashMap<(E::State, E::Action), f32> {
        &self.q_table
    }

    /// Number of state action pairs with a recorded estimate
    pub fn table_size(&self) -> usize {
        self.q_table.len()
    }

    /// Current exploration probability
    pub fn epsilon(&self) -> f32 {
        self.exploration.epsilon(self.episode)
    }

    /// Number of episodes ended by a collision since the last reset
    pub fn episode(&self) -> u32 {
        self.episode
    }

    /// The state action pair chosen on the previous tick, if any
    pub fn last_transition(&self) -> Option<(E::State, E::Action)> {
        self.last
    }

    /// Estimated value of taking `action` in `state`, `0` for unseen pairs
    pub fn q_value(&self, state: E::State, action: E::Action) -> f32 {
        self.q_table.get(&(state, action)).copied().unwrap_or(0.0)
    }

    /// Highest estimate over all `actions` in `state`
    fn max_q_value(&self, state: E::State, actions: &[E::Action]) -> f32 {
        actions
            .iter()
            .map(|&a| self.q_value(state, a))
            .reduce(f32::max)
            .unwrap_or(0.0)
    }

    /// Choose an action based on the current state and exploration policy
    ///
    /// Exploitation breaks ties in favour of the action listed first by the environment.
    pub fn act<R: Rng + ?Sized>(&self, env: &E, state: E::State, rng: &mut R) -> E::Action {
        let actions = env.actions();
        match self.exploration.choose(self.episode, rng) {
            Choice::Explore => *actions
                .choose(rng)
                .expect("There is always at least one action available"),
            Choice::Exploit => actions
                .iter()
                .copied()
                .fold(None, |best: Option<(E::Action, f32)>, a| {
                    let value = self.q_value(state, a);
                    match best {
                        Some((_, best_value)) if best_value >= value => best,
                        _ => Some((a, value)),
                    }
                })
                .map(|(a, _)| a)
                .expect("There is always at least one action available"),
        }
    }

    /// One-step Q-learning update for a single experience
    ///
    /// A terminal experience (`next_state` of `None`) bootstraps from `0`.
    pub fn learn(&mut self, env: &E, experience: Exp<E>) {
        let Exp {
            state,
            action,
            next_state,
            reward,
        } = experience;

        let q_value = self.q_value(state, action);
        let max_next_q = next_state
            .map(|s| self.max_q_value(s, &env.actions()))
            .unwrap_or(0.0);
        let updated = q_value + self.alpha * (reward + self.gamma * max_next_q - q_value);

        self.q_table.insert((state, action), updated);
    }

    /// Credit the previously chosen pair with `reward`, bootstrapping from `state`,
    /// then remember `(state, action)` for the next tick
    ///
    /// Nothing is learned on the first tick of an episode.
    pub fn reinforce(&mut self, env: &E, state: E::State, action: E::Action, reward: f32) {
        if let Some((last_state, last_action)) = self.last.take() {
            self.learn(
                env,
                Exp {
                    state: last_state,
                    action: last_action,
                    next_state: Some(state),
                    reward,
                },
            );
        }
        self.last = Some((state, action));
    }

    /// Apply the terminal penalty to the remembered pair, advance the epsilon
    /// schedule, and forget the pair
    pub fn on_collision(&mut self, env: &E, state: E::State) {
        if let Some((last_state, last_action)) = self.last.take() {
            self.learn(
                env,
                Exp {
                    state: last_state,
                    action: last_action,
                    next_state: Some(state),
                    reward: self.terminal_penalty,
                },
            );
        }
        self.episode += 1;
    }

    /// Forget the remembered pair so the next tick performs no update
    pub fn begin_episode(&mut self) {
        self.last = None;
    }

    /// Discard everything learned and restart the epsilon schedule
    pub fn reset(&mut self) {
        debug!(
            "discarding {} q-table entries after {} episodes",
            self.q_table.len(),
            self.episode
        );
        self.q_table.clear();
        self.episode = 0;
        self.last = None;
    }
}
