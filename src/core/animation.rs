use std::f64::consts::{FRAC_PI_2, TAU};

use serde::{Deserialize, Serialize};

/// Easing curve applied to normalized tween time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    /// Exponential decay towards the target (ease-out).
    #[default]
    ExpOut,
    /// Elastic ease-out with amplitude 1 and period 0.3.
    Elastic,
}

const ELASTIC_PERIOD: f64 = 0.3;

impl Easing {
    /// Eases `t` in `[0, 1]`. The endpoints map exactly to `0` and `1`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        if !t.is_finite() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Self::Linear => t,
            Self::ExpOut => 1.0 - exp_decay(t),
            Self::Elastic => {
                let p = ELASTIC_PERIOD / TAU;
                let s = FRAC_PI_2 * p;
                1.0 - exp_decay(t) * ((t + s) / p).sin()
            }
        }
    }
}

// 2^(-10t) rescaled so that it is exactly 1 at t=0 and 0 at t=1.
fn exp_decay(t: f64) -> f64 {
    const FLOOR: f64 = 0.000_976_562_5;
    ((-10.0 * t).exp2() - FLOOR) / (1.0 - FLOOR)
}

/// Timing of one tween.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TweenTiming {
    pub delay_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl TweenTiming {
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            delay_ms: 0.0,
            duration_ms: 0.0,
            easing: Easing::Linear,
        }
    }

    #[must_use]
    pub fn is_instant(self) -> bool {
        !(self.duration_ms.is_finite() && self.duration_ms > 0.0)
    }
}

/// Interpolation between two percentages driven by frame timestamps.
///
/// The clock starts on the first sampled frame so a tween scheduled between
/// frames never skips its opening.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub timing: TweenTiming,
    started_at_ms: Option<f64>,
}

/// One sampled tween frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSample {
    pub value: f64,
    /// Normalized elapsed time in `[0, 1]` before easing.
    pub elapsed: f64,
    pub finished: bool,
}

impl Tween {
    #[must_use]
    pub fn new(from: f64, to: f64, timing: TweenTiming) -> Self {
        Self {
            from,
            to,
            timing,
            started_at_ms: None,
        }
    }

    #[must_use]
    pub fn started_at_ms(&self) -> Option<f64> {
        self.started_at_ms
    }

    pub fn sample(&mut self, now_ms: f64) -> TweenSample {
        if self.timing.is_instant() {
            return self.finished_sample();
        }
        let started = *self.started_at_ms.get_or_insert(now_ms);
        let delay = if self.timing.delay_ms.is_finite() {
            self.timing.delay_ms.max(0.0)
        } else {
            0.0
        };
        let elapsed = ((now_ms - started - delay) / self.timing.duration_ms).clamp(0.0, 1.0);
        if !elapsed.is_finite() || elapsed >= 1.0 {
            return self.finished_sample();
        }

        let eased = self.timing.easing.apply(elapsed);
        TweenSample {
            value: self.from + (self.to - self.from) * eased,
            elapsed,
            finished: false,
        }
    }

    fn finished_sample(&self) -> TweenSample {
        TweenSample {
            value: self.to,
            elapsed: 1.0,
            finished: true,
        }
    }
}
