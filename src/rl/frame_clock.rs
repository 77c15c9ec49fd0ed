use std::time::{Duration, Instant};

/// Caps the step rate by sleeping until the next tick boundary
#[derive(Debug)]
pub struct FrameClock {
    period: Option<Duration>,
    last_tick: Option<Instant>,
}

impl FrameClock {
    pub fn new(period: Option<Duration>) -> Self {
        Self {
            period,
            last_tick: None,
        }
    }

    /// A clock that never sleeps
    pub fn unpaced() -> Self {
        Self::new(None)
    }

    /// Block until at least one period has passed since the previous tick.
    /// Returns how long the call slept.
    pub fn tick(&mut self) -> Duration {
        let mut slept = Duration::ZERO;

        if let (Some(period), Some(last)) = (self.period, self.last_tick) {
            let elapsed = last.elapsed();
            if elapsed < period {
                slept = period - elapsed;
                std::thread::sleep(slept);
            }
        }

        self.last_tick = Some(Instant::now());
        slept
    }
}
