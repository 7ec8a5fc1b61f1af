use std::error::Error;

use dodge_rl::{
    game::{EpisodeController, GameConfig},
    viz,
};
use log::LevelFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tui_logger::init_logger(LevelFilter::Debug)?;
    tui_logger::set_default_level(LevelFilter::Debug);

    let controller = EpisodeController::new(GameConfig::default(), rand::thread_rng())?;
    viz::run(controller)?;

    Ok(())
}
