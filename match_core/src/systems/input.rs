use crate::{Config, HeldInputs, Opponent, Paddle, PaddleIntent, Side};
use hecs::World;

/// Derive paddle intents from the held directions.
///
/// "Up" is checked before "down", so holding both moves the paddle up.
/// The right paddle is skipped when the bot drives it.
pub fn apply_held_inputs(world: &mut World, held: &HeldInputs, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        intent.dir = match paddle.side {
            Side::Left => held_dir(held.left_up, held.left_down),
            Side::Right => {
                if config.opponent == Opponent::Bot {
                    continue;
                }
                held_dir(held.right_up, held.right_down)
            }
        };
    }
}

fn held_dir(up: bool, down: bool) -> i8 {
    if up {
        -1
    } else if down {
        1
    } else {
        0
    }
}
