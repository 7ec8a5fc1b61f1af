/// Shaping rewards for a surviving tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RewardConfig {
    /// Base reward for every tick survived
    pub survival: f32,
    /// Subtracted when the player's top edge is above `top_edge` or below `bottom_edge`
    pub edge_penalty: f32,
    pub top_edge: f32,
    pub bottom_edge: f32,
    /// Added when the player's top edge lies strictly inside `center_band`
    pub center_bonus: f32,
    pub center_band: (f32, f32),
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            survival: 1.0,
            edge_penalty: 0.5,
            top_edge: 50.0,
            bottom_edge: 350.0,
            center_bonus: 0.5,
            center_band: (150.0, 250.0),
        }
    }
}

/// Reward for the player's post-action height `y`; all comparisons are strict
pub fn reward(y: f32, config: &RewardConfig) -> f32 {
    let mut reward = config.survival;
    if y < config.top_edge || y > config.bottom_edge {
        reward -= config.edge_penalty;
    }
    let (low, high) = config.center_band;
    if y > low && y < high {
        reward += config.center_bonus;
    }
    reward
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(y: f32) -> f32 {
        reward(y, &RewardConfig::default())
    }

    #[test]
    fn bands() {
        assert_eq!(r(200.0), 1.5, "Central band");
        assert_eq!(r(30.0), 0.5, "Near the top edge");
        assert_eq!(r(360.0), 0.5, "Near the bottom edge");
        assert_eq!(r(100.0), 1.0, "Neither band");
    }

    #[test]
    fn boundaries_are_strict() {
        assert_eq!(r(50.0), 1.0, "y=50 is not near the edge");
        assert_eq!(r(350.0), 1.0, "y=350 is not near the edge");
        assert_eq!(r(150.0), 1.0, "y=150 is outside the band");
        assert_eq!(r(250.0), 1.0, "y=250 is outside the band");
    }

    #[test]
    fn no_double_counting() {
        for y in (-5..=375).map(|y| y as f32) {
            let value = r(y);
            assert!(
                value == 0.5 || value == 1.0 || value == 1.5,
                "Unexpected reward {value} at y={y}"
            );
            if value == 1.5 {
                assert!(y > 50.0 && y < 350.0, "Bonus never paired with penalty");
            }
        }
    }
}
