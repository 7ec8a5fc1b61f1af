/// An axis-aligned rectangle in canvas pixels, `y` growing downwards
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// The dodging rectangle, moved vertically by keys or by the agent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub rect: Rect,
    /// Pixels moved per tick
    pub speed: f32,
}

/// A rectangle scrolling in from the right edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub rect: Rect,
}

impl Obstacle {
    /// Whether the obstacle has fully left the canvas on the left side
    pub fn is_off_screen(&self) -> bool {
        self.rect.right() < 0.0
    }
}

/// Vertical range the player's top edge may occupy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_y: f32,
    pub max_y: f32,
}

impl Bounds {
    /// Bounds for a body of `height` inside a canvas of `canvas_height`
    pub fn for_height(canvas_height: f32, height: f32) -> Self {
        Self {
            min_y: 0.0,
            max_y: canvas_height - height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn off_screen_needs_negative_right_edge() {
        let at = |x| Obstacle {
            rect: Rect::new(x, 0.0, 30.0, 40.0),
        };
        assert!(!at(0.0).is_off_screen());
        assert!(!at(-30.0).is_off_screen(), "Right edge exactly at zero");
        assert!(at(-30.5).is_off_screen());
    }

    #[test]
    fn player_bounds() {
        let bounds = Bounds::for_height(400.0, 30.0);
        assert_eq!(bounds.min_y, 0.0);
        assert_eq!(bounds.max_y, 370.0);
    }
}
