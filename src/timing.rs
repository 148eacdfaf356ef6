use std::collections::VecDeque;
use std::time::Duration;

use anyhow::{Context, Result};

const FRAME_HISTORY_SIZE: usize = 120; // 2 seconds at 60fps

/// Turns elapsed wall-clock time into a phase along a looping animation.
#[derive(Debug, Clone, Copy)]
pub struct LoopClock {
    period: Duration,
}

impl LoopClock {
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    /// Fails for periods a `Duration` cannot hold: negative, NaN or too large.
    pub fn from_secs(period: f32) -> Result<Self> {
        let period = Duration::try_from_secs_f32(period)
            .with_context(|| format!("Invalid loop period: {} seconds", period))?;
        Ok(Self::new(period))
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Fraction of the current loop completed after `elapsed`, in `[0, 1)`.
    pub fn phase(&self, elapsed: Duration) -> f32 {
        let period = self.period.as_secs_f64();
        if period <= 0.0 {
            return 0.0;
        }
        // Reduce in f64 first so long sessions keep sub-frame precision
        let phase = (elapsed.as_secs_f64() / period).fract() as f32;
        if phase >= 1.0 {
            0.0
        } else {
            phase
        }
    }

    /// Number of completed loops after `elapsed`.
    pub fn loops_completed(&self, elapsed: Duration) -> u64 {
        let period = self.period.as_secs_f64();
        if period <= 0.0 {
            return 0;
        }
        (elapsed.as_secs_f64() / period).floor() as u64
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimingStats {
    pub average_frame_time_ms: f32,
    pub fps: f32,
    pub max_frame_time_ms: f32,
    pub min_frame_time_ms: f32,
    pub slow_frames: u32,
}

/// Rolling frame-interval statistics over the last couple of seconds.
pub struct FrameStats {
    frame_history: VecDeque<Duration>,
    frame_counter: u64,
    target_frame_time: Duration,
}

impl FrameStats {
    pub fn new(target_fps: u32) -> Self {
        Self {
            frame_history: VecDeque::with_capacity(FRAME_HISTORY_SIZE),
            frame_counter: 0,
            target_frame_time: Duration::from_secs_f32(1.0 / target_fps.max(1) as f32),
        }
    }

    pub fn record(&mut self, frame_time: Duration) {
        if self.frame_history.len() >= FRAME_HISTORY_SIZE {
            self.frame_history.pop_front();
        }
        self.frame_history.push_back(frame_time);
        self.frame_counter += 1;
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_counter
    }

    pub fn stats(&self) -> Option<TimingStats> {
        if self.frame_history.is_empty() {
            return None;
        }

        let total: Duration = self.frame_history.iter().sum();
        let max = self.frame_history.iter().max().copied().unwrap_or_default();
        let min = self.frame_history.iter().min().copied().unwrap_or_default();
        let average = total / self.frame_history.len() as u32;
        let slow_frames = self
            .frame_history
            .iter()
            .filter(|&&t| t > self.target_frame_time)
            .count() as u32;

        let average_secs = average.as_secs_f32();
        Some(TimingStats {
            average_frame_time_ms: average_secs * 1000.0,
            fps: if average_secs > 0.0 { 1.0 / average_secs } else { 0.0 },
            max_frame_time_ms: max.as_secs_f32() * 1000.0,
            min_frame_time_ms: min.as_secs_f32() * 1000.0,
            slow_frames,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_phase_wraps_each_period() {
        let clock = LoopClock::from_secs(10.0).unwrap();
        assert_eq!(clock.phase(Duration::ZERO), 0.0);
        assert_relative_eq!(clock.phase(Duration::from_secs_f32(2.5)), 0.25, epsilon = 1e-6);
        assert_relative_eq!(clock.phase(Duration::from_secs_f32(12.5)), 0.25, epsilon = 1e-6);
        assert_eq!(clock.phase(Duration::from_secs(30)), 0.0);
        assert_eq!(clock.loops_completed(Duration::from_secs_f32(12.5)), 1);
    }

    #[test]
    fn test_phase_precision_in_long_sessions() {
        let clock = LoopClock::from_secs(10.0).unwrap();
        // A day in, a quarter loop is still a quarter loop
        let elapsed = Duration::from_secs(86_400) + Duration::from_millis(2_500);
        assert_relative_eq!(clock.phase(elapsed), 0.25, epsilon = 1e-6);
        assert_eq!(clock.loops_completed(elapsed), 8_640);
    }

    #[test]
    fn test_unrepresentable_periods_are_errors() {
        for period in [-1.0f32, f32::NAN, f32::INFINITY, 1e30] {
            let err = LoopClock::from_secs(period).unwrap_err();
            assert!(err.to_string().contains("loop period"), "got: {}", err);
        }
    }

    #[test]
    fn test_zero_period() {
        let clock = LoopClock::new(Duration::ZERO);
        assert_eq!(clock.phase(Duration::from_secs(3)), 0.0);
        assert_eq!(clock.loops_completed(Duration::from_secs(3)), 0);
    }

    #[test]
    fn test_frame_stats() {
        let mut stats = FrameStats::new(60);
        assert!(stats.stats().is_none());

        for ms in [10u64, 20, 30] {
            stats.record(Duration::from_millis(ms));
        }
        let report = stats.stats().unwrap();
        assert_eq!(stats.frame_count(), 3);
        assert_relative_eq!(report.average_frame_time_ms, 20.0, epsilon = 0.01);
        assert_relative_eq!(report.fps, 50.0, epsilon = 0.1);
        assert_relative_eq!(report.max_frame_time_ms, 30.0, epsilon = 0.01);
        assert_relative_eq!(report.min_frame_time_ms, 10.0, epsilon = 0.01);
        // 20ms and 30ms both miss a 60fps budget
        assert_eq!(report.slow_frames, 2);
    }

    #[test]
    fn test_frame_history_is_bounded() {
        let mut stats = FrameStats::new(60);
        for _ in 0..FRAME_HISTORY_SIZE {
            stats.record(Duration::from_millis(100));
        }
        for _ in 0..FRAME_HISTORY_SIZE {
            stats.record(Duration::from_millis(10));
        }
        let report = stats.stats().unwrap();
        assert_eq!(stats.frame_count(), 2 * FRAME_HISTORY_SIZE as u64);
        assert_relative_eq!(report.max_frame_time_ms, 10.0, epsilon = 0.01);
    }
}
