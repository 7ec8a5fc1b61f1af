//! Terminal front-end for the dodge game
//!
//! The front-end owns the frame clock: it calls
//! [`EpisodeController::step`](crate::game::EpisodeController::step) once per frame,
//! records held arrow keys into a [`KeyState`](crate::game::KeyState) between frames,
//! and renders the returned [`FrameResult`](crate::game::FrameResult).
//!
//! Install a [`tui_logger`] backend before calling [`run`] to see log records in the
//! Logs tab.

use std::io;

use rand::Rng;

use crate::game::EpisodeController;

mod app;
mod components;
mod tui;
mod util;

pub use app::App;

/// Run the interactive game until the user quits
///
/// Restores the terminal on exit
pub fn run<R: Rng>(controller: EpisodeController<R>) -> io::Result<()> {
    App::new(controller).run()
}
