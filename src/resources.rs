use glam::Vec2;
use hecs::Entity;

/// Simulated clock: total elapsed milliseconds and the tick counter
#[derive(Debug, Clone, Copy, Default)]
pub struct Clock {
    pub now_ms: u64,
    pub tick: u64,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, dt_ms: u64) {
        self.now_ms += dt_ms;
        self.tick += 1;
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events raised during the current tick
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub left_paddle_bounce: bool,
    pub right_paddle_bounce: bool,
    /// Point scored against the left paddle (ball got past it)
    pub scored_on_left: bool,
    /// Point scored against the right paddle
    pub scored_on_right: bool,
    pub wall_bounce: bool,
    pub ball_respawned: bool,
    pub ball_launched: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_paddle_bounce = false;
        self.right_paddle_bounce = false;
        self.scored_on_left = false;
        self.scored_on_right = false;
        self.wall_bounce = false;
        self.ball_respawned = false;
        self.ball_launched = false;
    }
}

/// Handle to a scheduled fire-once task. Cancelling a handle that already
/// fired or was cancelled is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(u64);

/// Task a scheduled timer runs when it fires
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimerTask {
    /// Idle watchdog expired: pull the ball back to center
    ResetBall { ball: Entity },
    /// Apply the launch velocity chosen when the ball was re-centered
    LaunchBall { ball: Entity, vel: Vec2 },
}

#[derive(Debug, Clone, Copy)]
struct ScheduledTask {
    deadline_ms: u64,
    handle: TimerHandle,
    task: TimerTask,
}

/// Fire-once timer queue driven by the simulated clock. Tasks become due
/// once the clock reaches their deadline and are drained at tick
/// boundaries, so they never run concurrently with the rules pass.
#[derive(Debug, Default)]
pub struct Scheduler {
    next_handle: u64,
    tasks: Vec<ScheduledTask>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a task to fire `delay_ms` after `now_ms`
    pub fn schedule(&mut self, now_ms: u64, delay_ms: u64, task: TimerTask) -> TimerHandle {
        self.next_handle += 1;
        let handle = TimerHandle(self.next_handle);
        self.tasks.push(ScheduledTask {
            deadline_ms: now_ms + delay_ms,
            handle,
            task,
        });
        handle
    }

    /// Remove a pending task. Returns whether anything was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.handle != handle);
        self.tasks.len() != before
    }

    pub fn is_scheduled(&self, handle: TimerHandle) -> bool {
        self.tasks.iter().any(|t| t.handle == handle)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Pop the next due task. Earliest deadline fires first; handle order
    /// breaks ties, so draining is deterministic.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<TimerTask> {
        let idx = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.deadline_ms <= now_ms)
            .min_by_key(|(_, t)| (t.deadline_ms, t.handle))
            .map(|(i, _)| i)?;
        Some(self.tasks.remove(idx).task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker;

    fn ball_entity() -> Entity {
        let mut world = hecs::World::new();
        world.spawn((Marker,))
    }

    #[test]
    fn test_clock_advance() {
        let mut clock = Clock::new();
        assert_eq!(clock.now_ms, 0);
        assert_eq!(clock.tick, 0);

        clock.advance(16);
        clock.advance(16);

        assert_eq!(clock.now_ms, 32, "Elapsed time accumulates");
        assert_eq!(clock.tick, 2, "Each advance is one tick");
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.left_paddle_bounce = true;
        events.right_paddle_bounce = true;
        events.scored_on_left = true;
        events.scored_on_right = true;
        events.wall_bounce = true;
        events.ball_respawned = true;
        events.ball_launched = true;

        events.clear();

        assert!(!events.left_paddle_bounce);
        assert!(!events.right_paddle_bounce);
        assert!(!events.scored_on_left);
        assert!(!events.scored_on_right);
        assert!(!events.wall_bounce);
        assert!(!events.ball_respawned);
        assert!(!events.ball_launched);
    }

    #[test]
    fn test_scheduler_fires_after_deadline() {
        let mut scheduler = Scheduler::new();
        let ball = ball_entity();
        scheduler.schedule(0, 100, TimerTask::ResetBall { ball });

        assert_eq!(scheduler.pop_due(99), None, "Not due before the deadline");
        assert_eq!(
            scheduler.pop_due(100),
            Some(TimerTask::ResetBall { ball }),
            "Due exactly at the deadline"
        );
        assert_eq!(scheduler.pop_due(100), None, "Fire-once: popped tasks are gone");
    }

    #[test]
    fn test_scheduler_fires_in_deadline_order() {
        let mut scheduler = Scheduler::new();
        let ball = ball_entity();
        scheduler.schedule(0, 200, TimerTask::ResetBall { ball });
        scheduler.schedule(
            0,
            100,
            TimerTask::LaunchBall {
                ball,
                vel: Vec2::new(3.0, 3.0),
            },
        );

        assert_eq!(
            scheduler.pop_due(500),
            Some(TimerTask::LaunchBall {
                ball,
                vel: Vec2::new(3.0, 3.0),
            }),
            "Earlier deadline fires first regardless of insertion order"
        );
        assert_eq!(
            scheduler.pop_due(500),
            Some(TimerTask::ResetBall { ball })
        );
    }

    #[test]
    fn test_scheduler_tie_breaks_by_schedule_order() {
        let mut scheduler = Scheduler::new();
        let ball = ball_entity();
        scheduler.schedule(
            0,
            100,
            TimerTask::LaunchBall {
                ball,
                vel: Vec2::new(3.0, 3.0),
            },
        );
        scheduler.schedule(
            0,
            100,
            TimerTask::LaunchBall {
                ball,
                vel: Vec2::new(-3.0, -3.0),
            },
        );

        assert_eq!(
            scheduler.pop_due(100),
            Some(TimerTask::LaunchBall {
                ball,
                vel: Vec2::new(3.0, 3.0),
            }),
            "Equal deadlines fire in schedule order"
        );
        assert_eq!(
            scheduler.pop_due(100),
            Some(TimerTask::LaunchBall {
                ball,
                vel: Vec2::new(-3.0, -3.0),
            })
        );
    }

    #[test]
    fn test_scheduler_cancel() {
        let mut scheduler = Scheduler::new();
        let ball = ball_entity();
        let handle = scheduler.schedule(0, 100, TimerTask::ResetBall { ball });

        assert!(scheduler.is_scheduled(handle));
        assert!(scheduler.cancel(handle), "First cancel removes the task");
        assert!(!scheduler.is_scheduled(handle));
        assert!(!scheduler.cancel(handle), "Stale handle cancel is a no-op");
        assert_eq!(scheduler.pop_due(1000), None);
    }

    #[test]
    fn test_scheduler_handles_are_unique() {
        let mut scheduler = Scheduler::new();
        let ball = ball_entity();
        let a = scheduler.schedule(0, 100, TimerTask::ResetBall { ball });
        let b = scheduler.schedule(0, 100, TimerTask::ResetBall { ball });

        assert_ne!(a, b);
        assert!(scheduler.cancel(a));
        assert!(
            scheduler.is_scheduled(b),
            "Cancelling one handle leaves the other scheduled"
        );
    }
}
