use hecs::World;

use crate::components::{Paddle, PaddleInput, PlayerId};
use crate::config::ArenaConfig;

/// Apply one discrete input event to the paddle owned by `player`.
/// Unknown or unbound players are ignored. Movement is an immediate
/// displacement; no velocity is involved.
pub fn apply_paddle_input(
    world: &mut World,
    config: &ArenaConfig,
    player: PlayerId,
    input: PaddleInput,
) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.owner != Some(player) {
            continue;
        }
        match input {
            PaddleInput::Up => {
                // Guard is checked before the move, so one step may land
                // past zero
                if paddle.y > 0.0 {
                    paddle.y -= config.paddle_step;
                }
            }
            PaddleInput::Down => {
                if paddle.y < config.paddle_max_y() {
                    paddle.y += config.paddle_step;
                }
            }
        }
        break;
    }
}
