use crate::{Ball, Config, Events, Paddle, Side};
use hecs::World;

/// Reflect the ball off the top and bottom walls.
///
/// The reflection is instantaneous: only the velocity flips, the position
/// stays where the tick put it and straightens out on the next advance.
pub fn bounce_walls(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y <= 0.0 || ball.pos.y >= config.board_height - config.ball_size {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }
    }
}

/// Bounce the ball off a paddle face.
///
/// Horizontal velocity reverses and speeds up, capped at the rally maximum.
/// Vertical velocity is recomputed from the strike position: zero at the
/// paddle center, the spin extremes at its edges.
pub fn bounce_paddles(world: &mut World, config: &Config, events: &mut Events) {
    let paddles: Vec<(Side, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.y))
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for &(side, paddle_y) in &paddles {
            if !overlaps(ball, side, paddle_y, config) {
                continue;
            }

            // Only a ball moving into the face bounces
            let toward = match side {
                Side::Left => ball.vel.x < 0.0,
                Side::Right => ball.vel.x > 0.0,
            };
            if !toward {
                continue;
            }

            let new_speed =
                (ball.vel.x.abs() * config.ball_speed_increase).min(config.ball_speed_max);
            ball.vel.x = match side {
                Side::Left => new_speed,
                Side::Right => -new_speed,
            };

            let strike = ((ball.pos.y - paddle_y) / config.paddle_height).clamp(0.0, 1.0);
            ball.vel.y = (strike - 0.5) * config.spin_scale;

            events.ball_hit_paddle = true;
        }
    }
}

fn overlaps(ball: &Ball, side: Side, paddle_y: f32, config: &Config) -> bool {
    let in_span = match side {
        Side::Left => ball.pos.x >= 0.0 && ball.pos.x <= config.paddle_width,
        Side::Right => {
            ball.pos.x >= config.right_impact_x() && ball.pos.x <= config.board_width
        }
    };
    in_span
        && ball.pos.y + config.ball_size >= paddle_y
        && ball.pos.y <= paddle_y + config.paddle_height
}
