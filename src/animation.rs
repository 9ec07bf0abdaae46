use std::f32::consts::PI;

/// Timing curve mapping unit time to unit progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Cosine ease: accelerates from rest and decelerates to rest,
    /// with zero slope at both ends.
    EaseInOut,
}

impl Easing {
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => (1.0 - (PI * t).cos()) * 0.5,
        }
    }
}

/// Playback direction within one sweep of the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Forward,
    Reverse,
}

/// Autoreversing, indefinitely repeating value generator for the twist
/// factor.
///
/// One sweep interpolates `from` to `to` over `duration` seconds with the
/// configured easing, then the same curve plays backward. The full cycle
/// repeats until the demo is torn down. There is no internal clock: state
/// advances only through `tick`, once per rendered frame, so the behavior
/// is deterministic and testable without a render loop.
#[derive(Debug, Clone)]
pub struct TwistTimeline {
    from: f32,
    to: f32,
    duration: f32,
    easing: Easing,
    phase: Phase,
    elapsed: f32,
}

impl TwistTimeline {
    pub fn new(from: f32, to: f32, duration: f32, easing: Easing) -> Self {
        assert!(duration > 0.0, "sweep duration must be positive");
        Self {
            from,
            to,
            duration,
            easing,
            phase: Phase::Forward,
            elapsed: 0.0,
        }
    }

    /// Length of one full forward-then-reverse cycle in seconds.
    pub fn period(&self) -> f32 {
        self.duration * 2.0
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Restart from the beginning of the forward sweep.
    pub fn reset(&mut self) {
        self.phase = Phase::Forward;
        self.elapsed = 0.0;
    }

    /// Advance the playback position by `delta` seconds and return the
    /// current value. Sweep boundaries flip the direction; a delta larger
    /// than a whole sweep wraps as many times as needed.
    pub fn tick(&mut self, delta: f32) -> f32 {
        self.elapsed += delta.max(0.0);
        while self.elapsed >= self.duration {
            self.elapsed -= self.duration;
            self.phase = match self.phase {
                Phase::Forward => Phase::Reverse,
                Phase::Reverse => Phase::Forward,
            };
        }
        self.current()
    }

    /// Value at the current playback position.
    pub fn current(&self) -> f32 {
        self.sample(self.phase, self.elapsed)
    }

    /// Sample the infinite periodic signal at absolute time `t`, without
    /// touching playback state.
    pub fn value_at(&self, t: f32) -> f32 {
        let cycle = t.rem_euclid(self.period());
        if cycle < self.duration {
            self.sample(Phase::Forward, cycle)
        } else {
            self.sample(Phase::Reverse, cycle - self.duration)
        }
    }

    fn sample(&self, phase: Phase, local: f32) -> f32 {
        let progress = self.easing.apply(local / self.duration);
        let (start, end) = match phase {
            Phase::Forward => (self.from, self.to),
            Phase::Reverse => (self.to, self.from),
        };
        start + (end - start) * progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-5;

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::Linear, Easing::EaseInOut] {
            assert!((easing.apply(0.0)).abs() < TOLERANCE);
            assert!((easing.apply(1.0) - 1.0).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_easing_midpoint() {
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < TOLERANCE);
    }

    #[test]
    fn test_easing_is_monotonic() {
        let mut previous = 0.0;
        for i in 1..=100 {
            let value = Easing::EaseInOut.apply(i as f32 / 100.0);
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn test_easing_clamps_out_of_range_input() {
        assert_eq!(Easing::EaseInOut.apply(-1.0), 0.0);
        assert_eq!(Easing::EaseInOut.apply(2.0), 1.0);
    }

    #[test]
    fn test_timeline_starts_at_from() {
        let timeline = TwistTimeline::new(5.0, 0.0, 2.0, Easing::EaseInOut);
        assert!((timeline.current() - 5.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_tick_flips_phase_at_sweep_end() {
        let mut timeline = TwistTimeline::new(5.0, 0.0, 2.0, Easing::EaseInOut);
        assert_eq!(timeline.phase(), Phase::Forward);

        timeline.tick(2.0);
        assert_eq!(timeline.phase(), Phase::Reverse);

        timeline.tick(2.0);
        assert_eq!(timeline.phase(), Phase::Forward);
    }

    #[test]
    fn test_tick_wraps_oversized_delta() {
        let mut timeline = TwistTimeline::new(5.0, 0.0, 2.0, Easing::EaseInOut);
        // Three and a half sweeps in one delta lands mid-reverse.
        timeline.tick(7.0);
        assert_eq!(timeline.phase(), Phase::Reverse);
        assert!((timeline.current() - timeline.value_at(7.0)).abs() < TOLERANCE);
    }

    #[test]
    fn test_negative_delta_is_ignored() {
        let mut timeline = TwistTimeline::new(5.0, 0.0, 2.0, Easing::EaseInOut);
        timeline.tick(0.5);
        let before = timeline.current();
        timeline.tick(-1.0);
        assert_eq!(timeline.current(), before);
    }

    #[test]
    fn test_reset_restarts_forward_sweep() {
        let mut timeline = TwistTimeline::new(5.0, 0.0, 2.0, Easing::EaseInOut);
        timeline.tick(3.1);
        timeline.reset();
        assert_eq!(timeline.phase(), Phase::Forward);
        assert!((timeline.current() - 5.0).abs() < TOLERANCE);
    }
}
