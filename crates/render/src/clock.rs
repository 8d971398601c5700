use std::time::{Duration, Instant};

/// Monotonic loop clock: milliseconds since the render loop started.
///
/// Hosts sample it once per display refresh and pass the value to the loop.
#[derive(Debug, Clone, Copy)]
pub struct LoopClock {
    origin: Instant,
}

impl LoopClock {
    /// Start counting from now.
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.origin.elapsed()
    }

    /// Elapsed time as fractional milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed().as_secs_f64() * 1000.0
    }
}

/// Timestamps of a fixed-rate display, for headless runs.
pub fn synthetic_timestamps(fps: f64, frames: usize) -> impl Iterator<Item = f64> {
    let step = 1000.0 / fps;
    (0..frames).map(move |i| i as f64 * step)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_is_monotonic() {
        let clock = LoopClock::start();
        let a = clock.elapsed_ms();
        std::thread::sleep(Duration::from_millis(2));
        let b = clock.elapsed_ms();
        assert!(a >= 0.0);
        assert!(b > a);
    }

    #[test]
    fn synthetic_50fps() {
        let ts: Vec<f64> = synthetic_timestamps(50.0, 4).collect();
        assert_eq!(ts, vec![0.0, 20.0, 40.0, 60.0]);
    }
}
