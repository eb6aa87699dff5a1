use std::thread;
use std::time::{Duration, Instant};

/// Caps the main loop at a fixed frame rate and measures real frame time.
#[derive(Debug)]
pub struct FrameLimiter {
    frame_budget: Duration,
    last_frame: Instant,
}

impl FrameLimiter {
    #[must_use]
    pub fn new(frames_per_second: u32) -> Self {
        Self {
            frame_budget: frame_budget(frames_per_second),
            last_frame: Instant::now(),
        }
    }

    #[must_use]
    pub fn frame_budget(&self) -> Duration {
        self.frame_budget
    }

    /// Sleeps out the rest of the current frame and returns the time elapsed
    /// since the previous call.
    pub fn wait(&mut self) -> Duration {
        let idle = remaining(self.frame_budget, self.last_frame.elapsed());
        if !idle.is_zero() {
            thread::sleep(idle);
        }

        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        elapsed
    }
}

/// Time one frame may take at `frames_per_second`.
#[must_use]
pub fn frame_budget(frames_per_second: u32) -> Duration {
    Duration::from_secs(1) / frames_per_second.max(1)
}

/// Time left in the frame after `spent`; zero once the budget is used up.
#[must_use]
pub fn remaining(budget: Duration, spent: Duration) -> Duration {
    budget.saturating_sub(spent)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{FrameLimiter, frame_budget, remaining};

    #[test]
    fn sixty_fps_budget() {
        assert_eq!(frame_budget(60), Duration::from_nanos(16_666_666));
        assert_eq!(frame_budget(0), Duration::from_secs(1));
    }

    #[test]
    fn remaining_time_never_goes_negative() {
        let budget = frame_budget(60);

        assert_eq!(
            remaining(budget, Duration::from_millis(10)),
            Duration::from_nanos(6_666_666)
        );
        assert_eq!(remaining(budget, Duration::from_millis(40)), Duration::ZERO);
    }

    #[test]
    fn wait_reports_at_least_one_budget() {
        let mut limiter = FrameLimiter::new(200);

        let elapsed = limiter.wait();

        assert!(elapsed >= limiter.frame_budget());
    }
}
