use glam::Vec2;

use crate::resources::TimerHandle;

/// Stable per-connection player identifier assigned by the host
pub type PlayerId = u32;

/// Which side of the arena a paddle defends. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Paddle component. X is derived from the side (see
/// `ArenaConfig::paddle_anchor_x`); only y moves, in discrete input steps.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32,
    /// Decremented when the ball gets past this paddle; never incremented.
    pub health: i16,
    /// Controlling player, or None while the slot is free
    pub owner: Option<PlayerId>,
}

impl Paddle {
    pub fn new(side: Side, y: f32, health: i16) -> Self {
        Self {
            side,
            y,
            health,
            owner: None,
        }
    }
}

/// Ball component. Velocity is in units per tick: the host integrator
/// applies it once per step, unscaled.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }
}

/// Per-ball idle watchdog bookkeeping. Holds the handle of the armed
/// timer so re-arming can cancel-and-replace it; at most one watchdog is
/// live per ball.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdleWatchdog {
    pub handle: Option<TimerHandle>,
}

/// Discrete input event kind, delivered once per event rather than per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleInput {
    Up,
    Down,
}
