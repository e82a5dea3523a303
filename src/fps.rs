use std::time::{Duration, Instant};

use log::debug;

/// Counts frames and reports the rate once per interval at debug level.
pub struct FpsCounter {
    last_time: Instant,
    frame_count: u32,
    interval: Duration,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::with_interval(Duration::from_secs(1))
    }

    pub fn with_interval(interval: Duration) -> Self {
        Self {
            last_time: Instant::now(),
            frame_count: 0,
            interval,
        }
    }

    /// Call once per frame. Returns the rate when an interval has elapsed.
    pub fn update(&mut self) -> Option<f32> {
        self.frame_count += 1;
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_time);

        if elapsed >= self.interval {
            let fps = self.frame_count as f32 / elapsed.as_secs_f32();
            debug!("FPS: {:.1}", fps);
            self.frame_count = 0;
            self.last_time = now;
            Some(fps)
        } else {
            None
        }
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_quiet_until_the_interval_elapses() {
        let mut counter = FpsCounter::new();
        for _ in 0..10 {
            assert!(counter.update().is_none());
        }
    }

    #[test]
    fn reports_and_resets_after_the_interval() {
        let mut counter = FpsCounter::with_interval(Duration::from_millis(10));
        for _ in 0..5 {
            counter.update();
        }
        std::thread::sleep(Duration::from_millis(15));
        let fps = counter.update().unwrap();
        assert!(fps > 0.0);
        // The window restarts after a report.
        assert!(counter.update().is_none());
    }
}
