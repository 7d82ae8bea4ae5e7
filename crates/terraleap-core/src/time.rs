use std::time::{Duration, Instant};

/// Frame pacing for the loop driver.
pub trait FrameClock {
    /// Block until the next tick boundary for `tick_rate` Hz.
    fn wait_for_tick(&mut self, tick_rate: u32);

    /// Block for a fixed duration (used for on-screen pauses).
    fn sleep(&mut self, duration: Duration);
}

/// Wall-clock pacing. Sleeps away whatever is left of the tick interval
/// since the previous call; a late frame is not made up.
pub struct SystemClock {
    last_tick: Option<Instant>,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { last_tick: None }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Interval between ticks at `tick_rate` Hz. A zero rate means unpaced.
pub fn tick_interval(tick_rate: u32) -> Duration {
    if tick_rate == 0 {
        return Duration::ZERO;
    }
    Duration::from_secs_f64(1.0 / f64::from(tick_rate))
}

impl FrameClock for SystemClock {
    fn wait_for_tick(&mut self, tick_rate: u32) {
        let interval = tick_interval(tick_rate);
        if let Some(last) = self.last_tick {
            let elapsed = last.elapsed();
            if elapsed < interval {
                std::thread::sleep(interval - elapsed);
            }
        }
        self.last_tick = Some(Instant::now());
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
        // The pause should not count against the next tick's budget.
        self.last_tick = Some(Instant::now());
    }
}

/// Never blocks. For headless runs that should go as fast as possible.
pub struct UnpacedClock;

impl FrameClock for UnpacedClock {
    fn wait_for_tick(&mut self, _tick_rate: u32) {}

    fn sleep(&mut self, _duration: Duration) {}
}
