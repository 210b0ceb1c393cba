/// Direction the player can steer the snake in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns true for Up and Down
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Returns the unit delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Movement per tick, in tiles.
///
/// Exactly one axis is non-zero while the snake is moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Velocity {
    pub vx: i32,
    pub vy: i32,
}

impl Velocity {
    pub fn new(vx: i32, vy: i32) -> Self {
        Self { vx, vy }
    }

    /// Velocity of `speed` tiles per tick towards `direction`
    pub fn towards(direction: Direction, speed: i32) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(dx * speed, dy * speed)
    }

    /// Applies a steering intent under the axis-lock rule.
    ///
    /// Up/Down only take effect while `vy == 0`, Left/Right only while
    /// `vx == 0`. Returns true if the velocity changed.
    pub fn steer(&mut self, direction: Direction, speed: i32) -> bool {
        let axis_at_rest = if direction.is_vertical() {
            self.vy == 0
        } else {
            self.vx == 0
        };

        if !axis_at_rest {
            return false;
        }

        let next = Self::towards(direction, speed);
        let changed = next != *self;
        *self = next;
        changed
    }
}
