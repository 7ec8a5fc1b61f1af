use std::{error::Error, fs, path::Path};

use dodge_rl::game::{EpisodeController, EpisodeEnd, GameConfig, KeyState, Mode};

const NUM_TICKS: u32 = 500_000;
const SEED: u64 = 42;

fn main() -> Result<(), Box<dyn Error>> {
    let path = Path::new("demos/train_headless");

    let mut game = EpisodeController::with_seed(GameConfig::default(), SEED)?;
    game.start_episode(Mode::Ai)?;

    fs::create_dir_all(path.join("out"))?;

    let mut wtr = csv::Writer::from_path(path.join("out/data.csv"))?;
    wtr.write_record(["generation", "score", "epsilon", "q_table_size"])?;

    // No keyboard in AI mode; the loop itself is the frame clock
    let keys = KeyState::new();
    for _ in 0..NUM_TICKS {
        let frame = game.step(&keys);
        if let Some(EpisodeEnd {
            generation: Some(generation),
            score,
            ..
        }) = frame.meta.ended
        {
            let t = frame.meta.telemetry;
            wtr.write_record(&[
                generation.to_string(),
                score.to_string(),
                t.epsilon.to_string(),
                t.q_table_size.to_string(),
            ])?;
        }
    }

    wtr.flush()?;
    game.stop_training()?;

    let t = game.telemetry();
    println!(
        "{} generations, best score {}, epsilon {:.3}, {} q-table entries",
        t.generation - 1,
        t.best_ai_score,
        t.epsilon,
        t.q_table_size
    );

    Ok(())
}
