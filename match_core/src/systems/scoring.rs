use crate::{Ball, Config, Events, GameRng, Phase, Score};
use hecs::World;

/// Check whether the ball left the board through either goal line.
///
/// On a goal the opposite side scores, the ball resets to a fresh serve,
/// and the phase falls back to `NotStarted` unless the config auto-restarts
/// the rally. Returns true when a goal was scored; the caller ends the tick
/// there, so paddles never move on a scoring tick.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    phase: &mut Phase,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) -> bool {
    let mut scored = false;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x < 0.0 {
            score.increment_right();
            events.right_scored = true;
            ball.reset(config, rng);
            scored = true;
        } else if ball.pos.x > config.board_width {
            score.increment_left();
            events.left_scored = true;
            ball.reset(config, rng);
            scored = true;
        }
    }

    if scored && !config.auto_restart_on_score {
        *phase = Phase::NotStarted;
    }

    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::Vec2;

    fn setup() -> (World, Config, Phase, Score, Events, GameRng) {
        (
            World::new(),
            Config::new(),
            Phase::Running,
            Score::new(),
            Events::new(),
            GameRng::new(12345),
        )
    }

    #[test]
    fn test_right_scores_when_ball_exits_left() {
        let (mut world, config, mut phase, mut score, mut events, mut rng) = setup();
        create_ball(&mut world, Vec2::new(-5.0, 250.0), Vec2::new(-5.0, 0.0));

        let scored = check_scoring(&mut world, &config, &mut phase, &mut score, &mut events, &mut rng);

        assert!(scored);
        assert_eq!(score.right, 1);
        assert_eq!(score.left, 0);
        assert!(events.right_scored);
        assert_eq!(phase, Phase::NotStarted, "Goal ends the rally");
    }

    #[test]
    fn test_left_scores_when_ball_exits_right() {
        let (mut world, config, mut phase, mut score, mut events, mut rng) = setup();
        create_ball(
            &mut world,
            Vec2::new(config.board_width + 1.0, 250.0),
            Vec2::new(5.0, 0.0),
        );

        check_scoring(&mut world, &config, &mut phase, &mut score, &mut events, &mut rng);

        assert_eq!(score.left, 1);
        assert_eq!(score.right, 0);
        assert!(events.left_scored);
    }

    #[test]
    fn test_ball_resets_to_fresh_serve() {
        let (mut world, config, mut phase, mut score, mut events, mut rng) = setup();
        create_ball(&mut world, Vec2::new(-5.0, 250.0), Vec2::new(-5.0, 0.0));

        check_scoring(&mut world, &config, &mut phase, &mut score, &mut events, &mut rng);

        for (_entity, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos.x, config.board_width / 2.0);
            assert_eq!(ball.pos.y, config.board_height / 2.0);
            assert_eq!(ball.vel.x.abs(), config.ball_speed);
        }
    }

    #[test]
    fn test_auto_restart_keeps_rally_running() {
        let (mut world, mut config, mut phase, mut score, mut events, mut rng) = setup();
        config.auto_restart_on_score = true;
        create_ball(&mut world, Vec2::new(-5.0, 250.0), Vec2::new(-5.0, 0.0));

        check_scoring(&mut world, &config, &mut phase, &mut score, &mut events, &mut rng);

        assert_eq!(phase, Phase::Running);
        assert_eq!(score.right, 1);
    }

    #[test]
    fn test_no_score_in_bounds() {
        let (mut world, config, mut phase, mut score, mut events, mut rng) = setup();
        create_ball(&mut world, Vec2::new(400.0, 250.0), Vec2::new(5.0, 2.0));

        let scored = check_scoring(&mut world, &config, &mut phase, &mut score, &mut events, &mut rng);

        assert!(!scored);
        assert_eq!(score.left, 0);
        assert_eq!(score.right, 0);
        assert_eq!(phase, Phase::Running);
    }

    #[test]
    fn test_scores_accumulate() {
        let (mut world, config, mut phase, mut score, mut events, mut rng) = setup();
        let entity = create_ball(&mut world, Vec2::new(-5.0, 250.0), Vec2::new(-5.0, 0.0));

        check_scoring(&mut world, &config, &mut phase, &mut score, &mut events, &mut rng);
        world.get::<&mut Ball>(entity).unwrap().pos.x = -1.0;
        check_scoring(&mut world, &config, &mut phase, &mut score, &mut events, &mut rng);

        assert_eq!(score.right, 2);
    }
}
