//! Two-handle range selector used for the salary fields.

/// Default salary slider bounds.
pub const SALARY_MIN: u64 = 0;
/// Upper salary bound reachable with the slider.
pub const SALARY_MAX: u64 = 500_000;
/// Salary step.
pub const SALARY_STEP: u64 = 1_000;

/// A `[low, high]` range on `[min, max]` moving in multiples of `step`.
///
/// `low` never exceeds `high - step` and `high` never drops below
/// `low + step` once a handle has been moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DualRangeSlider {
    pub min: u64,
    pub max: u64,
    pub step: u64,
    pub low: u64,
    pub high: u64,
}

impl DualRangeSlider {
    /// Create a slider. `step` of zero is treated as one.
    pub fn new(min: u64, max: u64, step: u64, low: u64, high: u64) -> Self {
        let max = max.max(min);
        Self {
            min,
            max,
            step: step.max(1),
            low: low.clamp(min, max),
            high: high.clamp(min, max),
        }
    }

    /// Slider over the salary range.
    pub fn salary(low: u64, high: u64) -> Self {
        Self::new(SALARY_MIN, SALARY_MAX, SALARY_STEP, low, high)
    }

    fn snap(&self, value: u64) -> u64 {
        // round half up to the nearest step
        let rounded = value.saturating_add(self.step / 2) / self.step;
        rounded.saturating_mul(self.step)
    }

    /// Move the low handle; clamped to `[min, high - step]`.
    pub fn set_low(&mut self, value: u64) {
        let upper = self.high.saturating_sub(self.step).max(self.min);
        self.low = self.snap(value).clamp(self.min, upper);
    }

    /// Move the high handle; clamped to `[low + step, max]`.
    pub fn set_high(&mut self, value: u64) {
        let lower = self.low.saturating_add(self.step).min(self.max);
        self.high = self.snap(value).clamp(lower, self.max);
    }

    /// Move the low handle by `steps` (negative moves left).
    pub fn nudge_low(&mut self, steps: i64) {
        self.set_low(self.offset(self.low, steps));
    }

    /// Move the high handle by `steps` (negative moves left).
    pub fn nudge_high(&mut self, steps: i64) {
        self.set_high(self.offset(self.high, steps));
    }

    fn offset(&self, value: u64, steps: i64) -> u64 {
        let delta = self.step.saturating_mul(steps.unsigned_abs());
        if steps < 0 {
            value.saturating_sub(delta)
        } else {
            value.saturating_add(delta)
        }
    }

    /// Position of `value` on the track, 0.0 to 100.0.
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(&self, value: u64) -> f64 {
        if self.max == self.min {
            return 0.0;
        }
        let value = value.clamp(self.min, self.max);
        (value - self.min) as f64 / (self.max - self.min) as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_is_kept_below_high() {
        let mut s = DualRangeSlider::new(0, 10_000, 1_000, 2_000, 5_000);
        s.set_low(9_000);
        assert_eq!(s.low, 4_000);
    }

    #[test]
    fn high_is_kept_above_low() {
        let mut s = DualRangeSlider::new(0, 10_000, 1_000, 2_000, 5_000);
        s.set_high(500);
        assert_eq!(s.high, 3_000);
    }

    #[test]
    fn values_snap_to_step() {
        let mut s = DualRangeSlider::new(0, 10_000, 1_000, 0, 10_000);
        s.set_low(2_499);
        assert_eq!(s.low, 2_000);
        s.set_high(7_500);
        assert_eq!(s.high, 8_000);
    }

    #[test]
    fn handles_stay_within_bounds() {
        let mut s = DualRangeSlider::new(0, 10_000, 1_000, 0, 10_000);
        s.nudge_low(-3);
        assert_eq!(s.low, 0);
        s.nudge_high(50);
        assert_eq!(s.high, 10_000);
    }

    #[test]
    fn nudge_moves_by_step() {
        let mut s = DualRangeSlider::salary(40_000, 60_000);
        s.nudge_low(1);
        s.nudge_high(-1);
        assert_eq!((s.low, s.high), (41_000, 59_000));
    }

    #[test]
    fn percentage_of_track() {
        let s = DualRangeSlider::new(0, 200, 10, 50, 150);
        assert!((s.percentage(50) - 25.0).abs() < f64::EPSILON);
        assert!((s.percentage(500) - 100.0).abs() < f64::EPSILON);
        let flat = DualRangeSlider::new(5, 5, 1, 5, 5);
        assert!(flat.percentage(5).abs() < f64::EPSILON);
    }
}
