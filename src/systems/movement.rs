use hecs::World;

use crate::components::Ball;

/// Apply ball velocity for one tick. Velocity is in units per tick, so
/// the step is unscaled. Hosts with their own integrator skip this and
/// call `Arena::on_tick` directly.
pub fn integrate_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}
