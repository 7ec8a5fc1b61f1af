use std::fmt;

use super::entity::{Obstacle, Player};

/// Finite symbolic state handed to the agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKey {
    /// No obstacle on the field
    Safe,
    /// Bucketed offsets to the nearest obstacle and the player's own bucketed height
    Threat {
        dist_x: i32,
        dist_y: i32,
        player_y: i32,
    },
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Safe => write!(f, "safe"),
            Self::Threat {
                dist_x,
                dist_y,
                player_y,
            } => write!(f, "{dist_x}_{dist_y}_{player_y}"),
        }
    }
}

/// The obstacle with the smallest `x`, first one wins on ties
pub fn nearest(obstacles: &[Obstacle]) -> Option<&Obstacle> {
    obstacles
        .iter()
        .min_by(|a, b| a.rect.x.total_cmp(&b.rect.x))
}

/// Map player and obstacle positions onto a [`StateKey`] using `bucket`-pixel cells
pub fn discretize(player: &Player, obstacles: &[Obstacle], bucket: f32) -> StateKey {
    let Some(obs) = nearest(obstacles) else {
        return StateKey::Safe;
    };
    let cell = |v: f32| (v / bucket).floor() as i32;

    StateKey::Threat {
        dist_x: cell(obs.rect.x - player.rect.x),
        dist_y: cell(obs.rect.y - player.rect.y),
        player_y: cell(player.rect.y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::entity::Rect;

    fn player_at(y: f32) -> Player {
        Player {
            rect: Rect::new(50.0, y, 30.0, 30.0),
            speed: 5.0,
        }
    }

    fn obstacle_at(x: f32, y: f32) -> Obstacle {
        Obstacle {
            rect: Rect::new(x, y, 30.0, 50.0),
        }
    }

    #[test]
    fn empty_field_is_safe() {
        assert_eq!(discretize(&player_at(200.0), &[], 50.0), StateKey::Safe);
        assert_eq!(StateKey::Safe.to_string(), "safe");
    }

    #[test]
    fn uses_nearest_obstacle() {
        let player = player_at(200.0);
        let obstacles = [obstacle_at(100.0, 0.0), obstacle_at(50.0, 300.0)];
        assert_eq!(
            discretize(&player, &obstacles, 50.0),
            StateKey::Threat {
                dist_x: 0,
                dist_y: 2,
                player_y: 4
            },
            "Obstacle at x=50 selected"
        );
    }

    #[test]
    fn ties_go_to_first_obstacle() {
        let obstacles = [obstacle_at(300.0, 10.0), obstacle_at(300.0, 90.0)];
        assert_eq!(nearest(&obstacles).unwrap().rect.y, 10.0);
    }

    #[test]
    fn negative_offsets_floor_down() {
        let player = player_at(120.0);
        let obstacles = [obstacle_at(20.0, 100.0)];
        let key = discretize(&player, &obstacles, 50.0);
        assert_eq!(
            key,
            StateKey::Threat {
                dist_x: -1,
                dist_y: -1,
                player_y: 2
            }
        );
        assert_eq!(key.to_string(), "-1_-1_2");
    }

    #[test]
    fn deterministic() {
        let player = player_at(173.0);
        let obstacles = [obstacle_at(412.5, 33.3), obstacle_at(260.1, 301.7)];
        let first = discretize(&player, &obstacles, 50.0);
        for _ in 0..100 {
            assert_eq!(discretize(&player, &obstacles, 50.0), first);
        }
    }
}
