pub mod components;
pub mod config;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Advance the match by one tick.
///
/// The order is fixed: ball advance, wall bounce, paddle bounce, scoring,
/// then paddle movement. A scoring tick ends early, so paddles never move
/// in the tick a goal lands. Outside `Running` the step is a no-op.
pub fn step(
    world: &mut World,
    config: &Config,
    phase: &mut Phase,
    held: &HeldInputs,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    events.clear();

    if *phase != Phase::Running {
        return;
    }

    // 1. Move ball
    move_ball(world);

    // 2. Walls and paddles
    bounce_walls(world, config, events);
    bounce_paddles(world, config, events);

    // 3. Scoring (terminal for the tick)
    if check_scoring(world, config, phase, score, events, rng) {
        return;
    }

    // 4. Paddle intents and movement
    apply_held_inputs(world, held, config);
    drive_bot(world, config, rng);
    move_paddles(world, config);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y), PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
