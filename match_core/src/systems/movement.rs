use crate::{Ball, Config, Paddle, PaddleIntent};
use hecs::World;

/// Advance the ball by its per-tick velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}

/// Apply paddle intents, clamped to the board
pub fn move_paddles(world: &mut World, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.dir != 0 {
            let delta = intent.dir as f32 * config.paddle_step;
            paddle.y = config.clamp_paddle_y(paddle.y + delta);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Side};
    use glam::Vec2;

    #[test]
    fn test_ball_advances_by_velocity() {
        let mut world = World::new();
        create_ball(&mut world, Vec2::new(100.0, 100.0), Vec2::new(5.0, -3.0));

        move_ball(&mut world);

        for (_entity, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, Vec2::new(105.0, 97.0));
        }
    }

    #[test]
    fn test_paddle_clamped_at_top() {
        let mut world = World::new();
        let config = Config::new();
        let entity = create_paddle(&mut world, Side::Left, 0.0);
        world.get::<&mut PaddleIntent>(entity).unwrap().dir = -1;

        move_paddles(&mut world, &config);

        let paddle = world.get::<&Paddle>(entity).unwrap();
        assert_eq!(paddle.y, 0.0, "Paddle stays clamped at the top edge");
    }

    #[test]
    fn test_paddle_clamped_at_bottom() {
        let mut world = World::new();
        let config = Config::new();
        let max_y = config.board_height - config.paddle_height;
        let entity = create_paddle(&mut world, Side::Right, max_y);
        world.get::<&mut PaddleIntent>(entity).unwrap().dir = 1;

        move_paddles(&mut world, &config);

        let paddle = world.get::<&Paddle>(entity).unwrap();
        assert_eq!(paddle.y, max_y);
    }

    #[test]
    fn test_paddle_holds_without_intent() {
        let mut world = World::new();
        let config = Config::new();
        let entity = create_paddle(&mut world, Side::Left, 200.0);

        move_paddles(&mut world, &config);

        let paddle = world.get::<&Paddle>(entity).unwrap();
        assert_eq!(paddle.y, 200.0);
    }
}
