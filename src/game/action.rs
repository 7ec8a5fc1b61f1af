use strum::{Display, VariantArray};

use super::entity::{Bounds, Player};

/// Vertical moves available to the player
///
/// Variants are declared in exploitation priority order.
#[derive(VariantArray, Display, Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Action {
    Up,
    Down,
    Stay,
}

/// Move the player by one step of its speed
///
/// A move is skipped when the player already sits on the boundary it heads towards;
/// the position is never clamped afterwards.
pub fn apply_action(action: Action, player: &mut Player, bounds: Bounds) {
    let rect = &mut player.rect;
    match action {
        Action::Up if rect.y > bounds.min_y => rect.y -= player.speed,
        Action::Down if rect.y < bounds.max_y => rect.y += player.speed,
        _ => {}
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

    const BOUNDS: Bounds = Bounds {
        min_y: 0.0,
        max_y: 370.0,
    };

    #[test]
    fn priority_order() {
        assert_eq!(Action::VARIANTS, [Action::Up, Action::Down, Action::Stay]);
        assert_eq!(Action::Up.to_string(), "up");
    }

    #[test]
    fn moves_by_speed() {
        let mut player = player_at(200.0);
        apply_action(Action::Up, &mut player, BOUNDS);
        assert_eq!(player.rect.y, 195.0);
        apply_action(Action::Down, &mut player, BOUNDS);
        apply_action(Action::Down, &mut player, BOUNDS);
        assert_eq!(player.rect.y, 205.0);
        apply_action(Action::Stay, &mut player, BOUNDS);
        assert_eq!(player.rect.y, 205.0);
    }

    #[test]
    fn suppressed_at_bounds() {
        let mut top = player_at(0.0);
        apply_action(Action::Up, &mut top, BOUNDS);
        assert_eq!(top.rect.y, 0.0, "Cannot leave through the top");

        let mut bottom = player_at(370.0);
        apply_action(Action::Down, &mut bottom, BOUNDS);
        assert_eq!(bottom.rect.y, 370.0, "Cannot leave through the bottom");
    }

    #[test]
    fn not_clamped_when_step_overshoots() {
        let mut player = player_at(2.0);
        apply_action(Action::Up, &mut player, BOUNDS);
        assert_eq!(player.rect.y, -3.0);
    }
}
