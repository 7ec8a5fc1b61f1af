/// Represents a Markov decision process, defining the dynamics of an environment
/// in which an agent can operate.
///
/// Unlike a batch RL environment, the dodge field is advanced tick by tick by an
/// external driver, so observing, acting, and checking for termination are
/// separate calls.
pub trait Environment {
    /// A representation of the state of the environment to be passed to an agent
    type State;

    /// A representation of an action that an agent can take to affect the environment
    type Action;

    /// Observe the current state
    fn state(&self) -> Self::State;

    /// Determine if the state is active or terminal
    fn is_active(&self) -> bool;

    /// Update the environment in response to an action taken by an agent
    ///
    /// **Returns** the reward associated with the resulting position
    fn step(&mut self, action: Self::Action) -> f32;

    /// Reset the environment to an initial state
    ///
    /// **Returns** the state
    fn reset(&mut self) -> Self::State;
}

/// An environment with a finite set of actions
pub trait DiscreteActionSpace: Environment {
    /// Get the available actions for the current state, in priority order
    ///
    /// The returned vector should never be empty, instead specify an action that represents doing nothing if necessary.
    fn actions(&self) -> Vec<Self::Action>;
}

/// Represents a single experience or transition in the environment
pub struct Exp<E: Environment> {
    /// The state of the environment before taking the action
    pub state: E::State,
    /// The action taken in the given state
    pub action: E::Action,
    /// The state the value estimate bootstraps from, or if `None`, nothing
    pub next_state: Option<E::State>,
    /// The reward received after taking the action
    pub reward: f32,
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A two-state chain used to exercise agents without the dodge field
    pub struct MockEnv {
        pub pos: u8,
    }

    impl Environment for MockEnv {
        type State = u8;
        type Action = u8;

        fn state(&self) -> Self::State {
            self.pos
        }

        fn is_active(&self) -> bool {
            self.pos < 2
        }

        fn step(&mut self, action: Self::Action) -> f32 {
            self.pos += action;
            if self.is_active() {
                1.0
            } else {
                0.0
            }
        }

        fn reset(&mut self) -> Self::State {
            self.pos = 0;
            self.pos
        }
    }

    impl DiscreteActionSpace for MockEnv {
        fn actions(&self) -> Vec<Self::Action> {
            vec![0, 1]
        }
    }

    #[test]
    fn mock_env_terminates() {
        let mut env = MockEnv { pos: 0 };
        assert_eq!(env.step(1), 1.0);
        assert_eq!(env.step(1), 0.0);
        assert!(!env.is_active(), "Env is terminal");
        assert_eq!(env.reset(), 0, "Reset returns initial state");
    }
}
