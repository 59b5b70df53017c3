use crate::{Ball, Config, GameRng, Opponent, Paddle, PaddleIntent, Side};
use hecs::World;
use rand::Rng;

/// Drive the right paddle when the bot is the opponent.
///
/// Projects where the ball's center will cross the paddle plane and chases
/// that point with a dead zone. A fraction of ticks skips the decision to
/// model reaction time. A ball with no horizontal velocity cannot be
/// projected, so the paddle holds.
pub fn drive_bot(world: &mut World, config: &Config, rng: &mut GameRng) {
    if config.opponent != Opponent::Bot {
        return;
    }

    let ball = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| *ball);
    let paddle_center = world
        .query::<&Paddle>()
        .iter()
        .find(|(_e, p)| p.side == Side::Right)
        .map(|(_e, p)| p.center(config.paddle_height));

    let (ball, paddle_center) = match (ball, paddle_center) {
        (Some(ball), Some(center)) => (ball, center),
        _ => return,
    };

    let mut dir: i8 = 0;
    if !rng.0.gen_bool(config.bot.reaction_skip) && ball.vel.x != 0.0 {
        if ball.vel.x > 0.0 {
            // Incoming: chase the projected impact point
            let time_to_reach = ((config.right_impact_x() - ball.pos.x) / ball.vel.x).max(0.0);
            let projected =
                ball.pos.y + config.ball_size / 2.0 + ball.vel.y * time_to_reach;

            let diff = projected - paddle_center;
            if diff.abs() > config.bot.dead_zone {
                dir = if diff > 0.0 { 1 } else { -1 };
            }
        } else {
            // Outgoing: drift back to the board center
            let diff = config.board_height / 2.0 - paddle_center;
            if diff.abs() > config.bot.dead_zone {
                dir = if diff > 0.0 { 1 } else { -1 };
            }
        }
    }

    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if paddle.side == Side::Right {
            intent.dir = dir;
        }
    }
}
