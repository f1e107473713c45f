use glam::Vec2;
use hecs::{Entity, World};

use crate::components::{Ball, IdleWatchdog};
use crate::config::ArenaConfig;
use crate::resources::{Clock, Events, GameRng, Scheduler, TimerTask};

/// Arm the idle watchdog for a ball, cancelling the previous one if it is
/// still pending. At most one watchdog is live per ball at any instant.
pub fn reset_watchdog(
    world: &mut World,
    config: &ArenaConfig,
    clock: &Clock,
    scheduler: &mut Scheduler,
    ball: Entity,
) {
    let mut watchdog = match world.get::<&mut IdleWatchdog>(ball) {
        Ok(w) => w,
        Err(_) => return,
    };
    if let Some(old) = watchdog.handle.take() {
        scheduler.cancel(old);
    }
    let handle = scheduler.schedule(
        clock.now_ms,
        config.reset_timeout_ms,
        TimerTask::ResetBall { ball },
    );
    watchdog.handle = Some(handle);
}

/// Freeze and re-center the ball, then schedule its launch. Runs on both
/// scoring events and watchdog expiry. The launch velocity is fixed here,
/// from the re-centered y; a later reset does not cancel a pending launch,
/// so each one applies the velocity chosen at its own re-center.
pub fn reset_ball(
    world: &mut World,
    config: &ArenaConfig,
    clock: &Clock,
    scheduler: &mut Scheduler,
    rng: &mut GameRng,
    events: &mut Events,
    ball: Entity,
) {
    if world.get::<&Ball>(ball).is_err() {
        return;
    }
    log::debug!("resetting ball");
    reset_watchdog(world, config, clock, scheduler, ball);

    use rand::Rng;
    let y = rng.0.gen_range(0.0..config.height);
    let vel = launch_velocity(y, config.launch_speed);

    for (e, b) in world.query_mut::<&mut Ball>() {
        if e == ball {
            b.vel = Vec2::ZERO;
            b.pos = Vec2::new(config.width / 2.0, y);
            break;
        }
    }

    scheduler.schedule(
        clock.now_ms,
        config.respawn_delay_ms,
        TimerTask::LaunchBall { ball, vel },
    );
    events.ball_respawned = true;
}

/// Apply a scheduled launch to the ball. Fire-once; a ball that was
/// despawned in the meantime is ignored.
pub fn launch_ball(world: &mut World, events: &mut Events, ball: Entity, vel: Vec2) {
    for (e, b) in world.query_mut::<&mut Ball>() {
        if e == ball {
            b.vel = vel;
            events.ball_launched = true;
            log::debug!("launching ball at {:?}", vel);
            break;
        }
    }
}

/// Launch direction for a re-centered ball: the quadrant table keyed by
/// `floor(y) mod 4` gives a pseudo-random but reproducible-given-y launch.
pub fn launch_velocity(y: f32, speed: f32) -> Vec2 {
    match (y.floor() as i64).rem_euclid(4) {
        0 => Vec2::new(speed, speed),
        1 => Vec2::new(speed, -speed),
        2 => Vec2::new(-speed, speed),
        _ => Vec2::new(-speed, -speed),
    }
}
