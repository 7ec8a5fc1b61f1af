use super::entity::{Obstacle, Player, Rect};

/// Strict AABB overlap; rectangles sharing only an edge do not collide
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}

pub fn collides(player: &Player, obstacle: &Obstacle) -> bool {
    overlaps(&player.rect, &obstacle.rect)
}

/// True iff the player overlaps at least one obstacle
pub fn any_collision(player: &Player, obstacles: &[Obstacle]) -> bool {
    obstacles.iter().any(|obs| collides(player, obs))
}
