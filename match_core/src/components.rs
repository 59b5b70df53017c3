use glam::Vec2;

use crate::{Config, GameRng};

/// Which side of the board a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Paddle component - `y` is the top edge, clamped to the board
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32,
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }

    /// Vertical center of the paddle face
    pub fn center(&self, paddle_height: f32) -> f32 {
        self.y + paddle_height / 2.0
    }
}

/// Ball component - `pos` is the top-left corner of the ball square
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Recenter the ball and roll a fresh serve velocity: horizontal
    /// component at serve speed with a random sign, vertical component
    /// uniform across the serve range.
    pub fn reset(&mut self, config: &Config, rng: &mut GameRng) {
        use rand::Rng;

        self.pos = Vec2::new(config.board_width / 2.0, config.board_height / 2.0);

        let toward_right = rng.0.gen_bool(0.5);
        let vx = if toward_right {
            config.ball_speed
        } else {
            -config.ball_speed
        };
        let vy = rng.0.gen_range(-config.ball_speed..config.ball_speed);

        self.vel = Vec2::new(vx, vy);
    }
}

/// Movement decision for a paddle this tick
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = hold, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}
