use glam::Vec2;
use hecs::{Entity, World};

use crate::components::{Ball, Paddle, Side};
use crate::config::ArenaConfig;
use crate::resources::{Clock, Events, GameRng, Scheduler};
use crate::systems::respawn::{reset_ball, reset_watchdog};

/// Per-tick edge rules: left paddle/wall, right paddle/wall, then the
/// vertical bounds. Order matters, and each block re-reads ball state so
/// a respawn triggered on one edge is seen by the later checks in the
/// same pass. Reflect-then-clamp keeps the ball from tunneling out and
/// guarantees the next tick's velocity already points inward.
pub fn check_edges(
    world: &mut World,
    config: &ArenaConfig,
    clock: &Clock,
    scheduler: &mut Scheduler,
    rng: &mut GameRng,
    events: &mut Events,
) {
    // Skip until the arena is fully populated (startup window)
    let ball_entity = {
        let mut query = world.query::<&Ball>();
        query.iter().next().map(|(e, _b)| e)
    };
    let ball_entity = match ball_entity {
        Some(e) => e,
        None => return,
    };

    let paddles: Vec<(Entity, Side, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(e, p)| (e, p.side, p.y))
        .collect();
    let left = paddles.iter().find(|(_, s, _)| *s == Side::Left).copied();
    let right = paddles.iter().find(|(_, s, _)| *s == Side::Right).copied();
    let ((left_entity, _, left_y), (right_entity, _, right_y)) = match (left, right) {
        (Some(l), Some(r)) => (l, r),
        _ => return,
    };

    // Left edge: paddle face first, wall second
    if let Some((mut pos, mut vel)) = read_ball(world, ball_entity) {
        if pos.x <= config.paddle_face_x(Side::Left)
            && pos.y >= left_y
            && pos.y <= left_y + config.paddle_height
            && vel.x < 0.0
        {
            vel.x *= -config.bounce_acceleration;
            pos.x = config.paddle_face_x(Side::Left) + 1.0;
            write_ball(world, ball_entity, pos, vel);
            reset_watchdog(world, config, clock, scheduler, ball_entity);
            events.left_paddle_bounce = true;
        } else if pos.x <= 0.0 {
            // Missed the paddle; no velocity-sign condition on the wall
            vel.x *= -config.bounce_acceleration;
            pos.x = 0.0;
            write_ball(world, ball_entity, pos, vel);
            damage_paddle(world, left_entity);
            events.scored_on_left = true;
            log::debug!("ball got past the left paddle");
            reset_ball(world, config, clock, scheduler, rng, events, ball_entity);
        }
    }

    // Right edge: same shape, but the bounce keeps its speed (only the
    // left side accelerates)
    if let Some((mut pos, mut vel)) = read_ball(world, ball_entity) {
        if pos.x >= config.paddle_face_x(Side::Right)
            && pos.y >= right_y
            && pos.y <= right_y + config.paddle_height
            && vel.x > 0.0
        {
            vel.x *= -1.0;
            pos.x = config.paddle_face_x(Side::Right) - 1.0;
            write_ball(world, ball_entity, pos, vel);
            reset_watchdog(world, config, clock, scheduler, ball_entity);
            events.right_paddle_bounce = true;
        } else if pos.x >= config.width {
            vel.x *= -1.0;
            pos.x = config.width - 1.0;
            write_ball(world, ball_entity, pos, vel);
            damage_paddle(world, right_entity);
            events.scored_on_right = true;
            log::debug!("ball got past the right paddle");
            reset_ball(world, config, clock, scheduler, rng, events, ball_entity);
        }
    }

    // Vertical bounds, every tick
    if let Some((mut pos, mut vel)) = read_ball(world, ball_entity) {
        if pos.y <= 0.0 {
            pos.y = 1.0;
            vel.y *= -1.0;
            write_ball(world, ball_entity, pos, vel);
            events.wall_bounce = true;
        } else if pos.y >= config.height {
            pos.y = config.height - 1.0;
            vel.y *= -1.0;
            write_ball(world, ball_entity, pos, vel);
            events.wall_bounce = true;
        }
    }
}

fn read_ball(world: &World, ball: Entity) -> Option<(Vec2, Vec2)> {
    world.get::<&Ball>(ball).ok().map(|b| (b.pos, b.vel))
}

fn write_ball(world: &mut World, ball: Entity, pos: Vec2, vel: Vec2) {
    for (e, b) in world.query_mut::<&mut Ball>() {
        if e == ball {
            b.pos = pos;
            b.vel = vel;
            break;
        }
    }
}

fn damage_paddle(world: &mut World, paddle: Entity) {
    for (e, p) in world.query_mut::<&mut Paddle>() {
        if e == paddle {
            p.health -= 1;
            break;
        }
    }
}
