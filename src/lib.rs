/// Implemented RL algorithms
pub mod algo;

/// Implementations of strategies for time-decaying hyperparameters
pub mod decay;

/// Environment
pub mod env;

/// Error types
pub mod error;

/// Exploration policies
pub mod exploration;

/// The dodge game and its episode controller
pub mod game;

/// Terminal front-end
#[cfg(feature = "viz")]
pub mod viz;

pub use error::{Error, Result};
