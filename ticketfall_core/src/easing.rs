use std::time::Duration;

use serde::{Deserialize, Serialize};

const EPSILON: f64 = 1e-7;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CubicBezier {
    // fast start, long settle
    pub const FALL: Self = Self::new(0.1, 0.9, 0.2, 1.0);

    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn sample(a1: f64, a2: f64, t: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * t * a1 + 3.0 * u * t * t * a2 + t * t * t
    }

    fn sample_slope(a1: f64, a2: f64, t: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * a1 + 6.0 * u * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
    }

    fn solve_t(&self, x: f64) -> f64 {
        // Newton first, it converges in a handful of steps for sane curves.
        let mut t = x;
        for _ in 0..8 {
            let err = Self::sample(self.x1, self.x2, t) - x;
            if err.abs() < EPSILON {
                return t;
            }
            let slope = Self::sample_slope(self.x1, self.x2, t);
            if slope.abs() < 1e-6 {
                break;
            }
            t -= err / slope;
            if !(0.0..=1.0).contains(&t) {
                break;
            }
        }

        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        for _ in 0..64 {
            let v = Self::sample(self.x1, self.x2, t);
            if (v - x).abs() < EPSILON {
                break;
            }
            if v < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        t
    }

    /// Eased value for linear progress in `[0,1]`.
    pub fn apply(&self, progress: f64) -> f64 {
        let x = progress.clamp(0.0, 1.0);
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        Self::sample(self.y1, self.y2, self.solve_t(x))
    }

    pub fn css(&self) -> String {
        format!(
            "cubic-bezier({}, {}, {}, {})",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}

impl Default for CubicBezier {
    fn default() -> Self {
        Self::FALL
    }
}

/// Timed transition of one reel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Motion {
    pub duration_ms: u64,
    pub easing: CubicBezier,
}

impl Motion {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn css_transition(&self) -> String {
        format!(
            "transform {}s {}",
            self.duration_ms as f64 / 1000.0,
            self.easing.css()
        )
    }

    /// Offset reached `elapsed` into a move from `from` to `to`.
    pub fn position(&self, from: f64, to: f64, elapsed: Duration) -> f64 {
        if self.duration_ms == 0 {
            return to;
        }
        let progress = elapsed.as_secs_f64() * 1000.0 / self.duration_ms as f64;
        from + (to - from) * self.easing.apply(progress)
    }
}
