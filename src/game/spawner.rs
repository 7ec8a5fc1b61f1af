use log::trace;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

use super::{
    entity::{Obstacle, Rect},
    field::FieldConfig,
};

/// Emits a new obstacle at the right edge once every `spawn_interval + 1` ticks
#[derive(Debug, Clone)]
pub struct Spawner {
    timer: u32,
    interval: u32,
    obstacle_width: f32,
    heights: Uniform<f32>,
}

impl Spawner {
    /// Expects a validated config with a positive height range
    pub(crate) fn new(config: &FieldConfig) -> Self {
        let low = config.obstacle_min_height;
        Self {
            timer: 0,
            interval: config.spawn_interval,
            obstacle_width: config.obstacle_width,
            heights: Uniform::new(low, low + config.obstacle_height_range),
        }
    }

    /// Ticks counted since the last spawn
    pub fn timer(&self) -> u32 {
        self.timer
    }

    pub fn reset(&mut self) {
        self.timer = 0;
    }

    /// Count one tick and emit an obstacle when the counter exceeds the interval
    pub fn maybe_spawn<R: Rng + ?Sized>(
        &mut self,
        canvas_width: f32,
        canvas_height: f32,
        rng: &mut R,
    ) -> Option<Obstacle> {
        self.timer += 1;
        if self.timer <= self.interval {
            return None;
        }
        self.timer = 0;

        let height = self.heights.sample(rng);
        let y = rng.gen::<f32>() * (canvas_height - height);
        trace!("spawned obstacle at y={y:.1} with height {height:.1}");

        Some(Obstacle {
            rect: Rect::new(canvas_width, y, self.obstacle_width, height),
        })
    }
}

/// Shift every obstacle left by `speed` and drop those whose right edge went negative
pub fn advance(obstacles: &mut Vec<Obstacle>, speed: f32) {
    obstacles.retain_mut(|obs| {
        obs.rect.x -= speed;
        !obs.is_off_screen()
    });
}

/// Obstacle speed after a tick at `score`
///
/// Every `escalation_period` survived ticks the speed becomes
/// `min(base_speed + score * speed_gain, max_speed)`; otherwise it is left as is.
/// A zero period never escalates.
pub fn escalate(current: f32, score: u32, config: &FieldConfig) -> f32 {
    if score == 0 || score.checked_rem(config.escalation_period) != Some(0) {
        return current;
    }
    (config.base_speed + score as f32 * config.speed_gain).min(config.max_speed)
}
