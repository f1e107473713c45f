pub mod components;
pub mod config;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use resources::*;

use glam::Vec2;
use hecs::{Entity, World};
use systems::*;

/// Authoritative arena state: the entity world plus the resources the
/// per-tick rules need. The host drives it with `on_tick` (or `step`) and
/// the input/lifecycle entry points; everything else is internal.
pub struct Arena {
    pub world: World,
    pub config: ArenaConfig,
    pub clock: Clock,
    pub scheduler: Scheduler,
    pub rng: GameRng,
    pub events: Events,
}

impl Arena {
    pub fn new(config: ArenaConfig, seed: u64) -> Self {
        Self {
            world: World::new(),
            config,
            clock: Clock::new(),
            scheduler: Scheduler::new(),
            rng: GameRng::new(seed),
            events: Events::new(),
        }
    }

    /// Create both paddles at their anchors and the ball at center, and
    /// arm the initial idle watchdog. Idempotent: once populated the
    /// arena holds exactly two paddles and one ball for its lifetime.
    pub fn spawn_objects(&mut self) {
        let populated = {
            let mut query = self.world.query::<&Ball>();
            query.iter().next().is_some()
        };
        if populated {
            return;
        }

        create_paddle(&mut self.world, Side::Left, 0.0, &self.config);
        create_paddle(&mut self.world, Side::Right, 0.0, &self.config);
        let launch = Vec2::new(self.config.launch_speed, self.config.launch_speed);
        let ball = create_ball(&mut self.world, self.config.center(), launch);
        reset_watchdog(
            &mut self.world,
            &self.config,
            &self.clock,
            &mut self.scheduler,
            ball,
        );
    }

    /// Run one authoritative step. The host has already applied
    /// `position += velocity` to the ball for this tick; `dt_ms` is the
    /// tick's length in simulated milliseconds.
    pub fn on_tick(&mut self, dt_ms: u64) {
        self.clock.advance(dt_ms);
        self.events.clear();

        // 1. Fire due timers (idle watchdog, pending launches)
        while let Some(task) = self.scheduler.pop_due(self.clock.now_ms) {
            match task {
                TimerTask::ResetBall { ball } => reset_ball(
                    &mut self.world,
                    &self.config,
                    &self.clock,
                    &mut self.scheduler,
                    &mut self.rng,
                    &mut self.events,
                    ball,
                ),
                TimerTask::LaunchBall { ball, vel } => {
                    launch_ball(&mut self.world, &mut self.events, ball, vel)
                }
            }
        }

        // 2. Edge rules: left, right, then the vertical bounds
        check_edges(
            &mut self.world,
            &self.config,
            &self.clock,
            &mut self.scheduler,
            &mut self.rng,
            &mut self.events,
        );
    }

    /// Convenience driver for hosts without their own integrator: one
    /// velocity application, then the rules pass.
    pub fn step(&mut self, dt_ms: u64) {
        integrate_ball(&mut self.world);
        self.on_tick(dt_ms);
    }

    /// Apply one discrete input event to the paddle owned by `player`.
    /// Events from unbound players are dropped.
    pub fn apply_input(&mut self, player: PlayerId, input: PaddleInput) {
        apply_paddle_input(&mut self.world, &self.config, player, input);
    }

    /// Bind a joining player to a free paddle, left slot first. Returns
    /// the side they now control, or None if the join was dropped.
    pub fn on_player_joined(&mut self, player: PlayerId) -> Option<Side> {
        bind_player(&mut self.world, player)
    }

    /// Free the paddle owned by a departing player. Returns whether a
    /// paddle was released.
    pub fn on_player_left(&mut self, player: PlayerId) -> bool {
        release_player(&mut self.world, player)
    }

    /// Capture the authoritative state for broadcast or rendering
    pub fn snapshot(&self) -> ArenaSnapshot {
        let ball = {
            let mut query = self.world.query::<&Ball>();
            query.iter().next().map(|(_e, b)| BallSnapshot {
                pos: b.pos,
                vel: b.vel,
            })
        };

        let mut left_paddle = None;
        let mut right_paddle = None;
        for (_e, paddle) in self.world.query::<&Paddle>().iter() {
            let view = PaddleSnapshot {
                side: paddle.side,
                x: self.config.paddle_anchor_x(paddle.side),
                y: paddle.y,
                health: paddle.health,
                owner: paddle.owner,
            };
            match paddle.side {
                Side::Left => left_paddle = Some(view),
                Side::Right => right_paddle = Some(view),
            }
        }

        ArenaSnapshot {
            tick: self.clock.tick,
            ball,
            left_paddle,
            right_paddle,
        }
    }
}

/// Per-paddle view for broadcast or rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleSnapshot {
    pub side: Side,
    pub x: f32,
    pub y: f32,
    pub health: i16,
    pub owner: Option<PlayerId>,
}

/// Ball view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallSnapshot {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// Authoritative state view, captured once per tick. Fields only; wire
/// encoding belongs to the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArenaSnapshot {
    pub tick: u64,
    pub ball: Option<BallSnapshot>,
    pub left_paddle: Option<PaddleSnapshot>,
    pub right_paddle: Option<PaddleSnapshot>,
}

/// Helper to create a paddle entity at its side's anchor
pub fn create_paddle(world: &mut World, side: Side, y: f32, config: &ArenaConfig) -> Entity {
    world.spawn((Paddle::new(side, y, config.initial_health),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: Vec2, vel: Vec2) -> Entity {
    world.spawn((Ball::new(pos, vel), IdleWatchdog::default()))
}
