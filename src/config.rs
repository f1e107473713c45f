use glam::Vec2;

use crate::components::Side;

/// Arena tuning parameters
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const WIDTH: f32 = 400.0;
    pub const HEIGHT: f32 = 400.0;
    pub const PADDING: f32 = 20.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 75.0;
    pub const PADDLE_STEP: f32 = 10.0; // displacement per input event
    pub const INITIAL_HEALTH: i16 = 15;

    // Ball
    pub const LAUNCH_SPEED: f32 = 3.0; // units per tick
    pub const BOUNCE_ACCELERATION: f32 = 1.2; // left-side bounces only

    // Timers (simulated milliseconds)
    pub const RESET_TIMEOUT_MS: u64 = 10_000; // idle-ball watchdog
    pub const RESPAWN_DELAY_MS: u64 = 5_000; // frozen pause before re-launch

    // Nominal tick length for hosts that drive the arena themselves
    pub const TICK_INTERVAL_MS: u64 = 16;
}

/// Arena configuration
#[derive(Debug, Clone)]
pub struct ArenaConfig {
    pub width: f32,
    pub height: f32,
    pub padding: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_step: f32,
    pub initial_health: i16,
    pub launch_speed: f32,
    pub bounce_acceleration: f32,
    pub reset_timeout_ms: u64,
    pub respawn_delay_ms: u64,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: Params::WIDTH,
            height: Params::HEIGHT,
            padding: Params::PADDING,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_step: Params::PADDLE_STEP,
            initial_health: Params::INITIAL_HEALTH,
            launch_speed: Params::LAUNCH_SPEED,
            bounce_acceleration: Params::BOUNCE_ACCELERATION,
            reset_timeout_ms: Params::RESET_TIMEOUT_MS,
            respawn_delay_ms: Params::RESPAWN_DELAY_MS,
        }
    }
}

impl ArenaConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// X anchor a paddle sits at, based on its side
    pub fn paddle_anchor_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.padding,
            Side::Right => self.width - self.padding,
        }
    }

    /// X threshold of the paddle face the ball can bounce off
    pub fn paddle_face_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.padding + self.paddle_width,
            Side::Right => self.width - self.padding - self.paddle_width,
        }
    }

    /// Center of the arena (ball spawn and respawn point)
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Threshold for the down-input guard: a paddle only steps down
    /// while its top edge is above this
    pub fn paddle_max_y(&self) -> f32 {
        self.height - self.paddle_height
    }
}
