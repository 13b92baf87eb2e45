//! Frame-rate gated scheduler
//!
//! The host calls in once per rendered frame. A tick runs only when at least
//! the minimum interval has passed since the last accepted frame; shorter
//! frames are skipped wholesale and time is never banked for catch-up.

use std::time::{Duration, Instant};

use crate::sim::{GameState, TickInput, tick};
use crate::snapshot::RenderSnapshot;

/// Monotonic time source
pub trait Clock {
    /// Time since an arbitrary fixed origin; never decreases
    fn now(&self) -> Duration;
}

/// Wall clock backed by [`Instant`]
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Hand-driven clock for tests and replays
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualClock {
    now: Duration,
}

impl ManualClock {
    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now
    }
}

#[derive(Debug, Clone)]
pub struct FrameScheduler {
    min_interval: Duration,
    /// Time since the last accepted frame
    elapsed: Duration,
    /// Clock reading at the last `poll`
    last_poll: Option<Duration>,
    frames_run: u64,
    frames_skipped: u64,
}

impl FrameScheduler {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            elapsed: Duration::ZERO,
            last_poll: None,
            frames_run: 0,
            frames_skipped: 0,
        }
    }

    /// Scheduler capped at the session's configured frame rate
    pub fn for_state(state: &GameState) -> Self {
        Self::new(state.config.frame_interval())
    }

    /// Feed `delta` of host time; ticks once and returns a snapshot if the
    /// frame is due, otherwise `None`
    pub fn advance(
        &mut self,
        state: &mut GameState,
        delta: Duration,
        input: &TickInput,
    ) -> Option<RenderSnapshot> {
        self.elapsed += delta;
        if self.elapsed < self.min_interval {
            self.frames_skipped += 1;
            return None;
        }
        self.elapsed = Duration::ZERO;
        self.frames_run += 1;
        tick(state, input);
        Some(RenderSnapshot::capture(state))
    }

    /// Like [`advance`](Self::advance), reading the delta from `clock`
    ///
    /// The first poll only starts the clock, so it never ticks.
    pub fn poll(
        &mut self,
        state: &mut GameState,
        clock: &impl Clock,
        input: &TickInput,
    ) -> Option<RenderSnapshot> {
        let now = clock.now();
        let delta = match self.last_poll.replace(now) {
            Some(prev) => now.saturating_sub(prev),
            None => return None,
        };
        self.advance(state, delta, input)
    }

    /// Measured rate of accepted frames over `wall_time`
    pub fn fps(&self, wall_time: Duration) -> f64 {
        if wall_time.is_zero() {
            return 0.0;
        }
        self.frames_run as f64 / wall_time.as_secs_f64()
    }

    pub fn frames_run(&self) -> u64 {
        self.frames_run
    }

    pub fn frames_skipped(&self) -> u64 {
        self.frames_skipped
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::GamePhase;

    const FRAME: Duration = Duration::from_millis(17);

    fn setup() -> (GameState, FrameScheduler) {
        let state = GameState::new(GameConfig::default(), 7).unwrap();
        let scheduler = FrameScheduler::for_state(&state);
        (state, scheduler)
    }

    fn start() -> TickInput {
        TickInput {
            start: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_interval_from_config() {
        let (_, scheduler) = setup();
        assert_eq!(scheduler.min_interval(), Duration::from_secs_f64(1.0 / 60.0));
    }

    #[test]
    fn test_short_frames_are_skipped() {
        let (mut state, mut scheduler) = setup();
        assert!(
            scheduler
                .advance(&mut state, Duration::from_millis(5), &start())
                .is_none()
        );
        assert_eq!(state.phase, GamePhase::Loading);

        // 5 + 12 ms crosses the interval
        let snapshot = scheduler
            .advance(&mut state, Duration::from_millis(12), &start())
            .unwrap();
        assert_eq!(snapshot.phase, GamePhase::Playing);
        assert_eq!(scheduler.frames_run(), 1);
        assert_eq!(scheduler.frames_skipped(), 1);
    }

    #[test]
    fn test_no_catch_up_after_long_frame() {
        let (mut state, mut scheduler) = setup();
        scheduler.advance(&mut state, FRAME, &start()).unwrap();

        // A 200ms stall still yields a single tick
        let snapshot = scheduler
            .advance(&mut state, Duration::from_millis(200), &TickInput::default())
            .unwrap();
        assert_eq!(snapshot.rects[0].position, [320.0, 204.0]);
        assert!(
            scheduler
                .advance(&mut state, Duration::from_millis(1), &TickInput::default())
                .is_none()
        );
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_poll_with_manual_clock() {
        let (mut state, mut scheduler) = setup();
        let mut clock = ManualClock::default();

        assert!(scheduler.poll(&mut state, &clock, &start()).is_none());
        clock.advance(Duration::from_millis(10));
        assert!(scheduler.poll(&mut state, &clock, &start()).is_none());
        clock.advance(Duration::from_millis(10));
        assert!(scheduler.poll(&mut state, &clock, &start()).is_some());
        assert_eq!(state.phase, GamePhase::Playing);

        for _ in 0..3 {
            clock.advance(FRAME);
            scheduler.poll(&mut state, &clock, &TickInput::default());
        }
        assert_eq!(state.time_ticks, 3);
        assert!((scheduler.fps(Duration::from_secs(1)) - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_monotonic_clock_never_goes_back() {
        let clock = MonotonicClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
