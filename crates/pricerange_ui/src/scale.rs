//! Mapping between track pixels and domain values.
//!
//! Every pointer-derived value, whether from a drag or a track click, goes
//! through [`ValueScale::value_at`]. Programmatic values go through
//! [`ValueScale::quantize`].

use crate::layout::Rect;

/// Largest number of decimals kept when snapping to a fractional step.
const MAX_DECIMALS: usize = 12;

/// Linear scale from a track onto `[min, max]`, quantized to `step`.
///
/// Constructed from a sanitized [`crate::SliderConfig`], so `min < max` and
/// `0 < step <= max - min` hold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    min: f64,
    max: f64,
    step: f64,
    /// Decimal places of `step` and `min`, used to strip float noise after
    /// snapping.
    decimals: i32,
}

impl ValueScale {
    /// Creates a scale over `[min, max]` with the given step.
    #[must_use]
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self {
            min,
            max,
            step,
            decimals: decimals_of(step).max(decimals_of(min)),
        }
    }

    /// Lower domain bound.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper domain bound.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Quantization step.
    #[must_use]
    pub const fn step(&self) -> f64 {
        self.step
    }

    /// Domain width.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Fraction of the track left of `client_x`, in `[0, 1]`.
    ///
    /// A track without positive width maps everything to 0.
    #[must_use]
    pub fn fraction_at(track: Rect, client_x: f32) -> f64 {
        let width = f64::from(track.width);
        if !(width > 0.0 && width.is_finite()) {
            return 0.0;
        }

        let fraction = (f64::from(client_x) - f64::from(track.x)) / width;
        if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Domain value under `client_x`, snapped to the step grid.
    #[must_use]
    pub fn value_at(&self, track: Rect, client_x: f32) -> f64 {
        let raw = self.min + Self::fraction_at(track, client_x) * self.span();
        self.quantize(raw).unwrap_or(self.min)
    }

    /// Snaps a value to the nearest step from `min` and clamps it into the
    /// domain.
    ///
    /// Values at or beyond a domain edge land on that edge, even when the
    /// step does not divide the span. Returns `None` for NaN or infinite
    /// input.
    #[must_use]
    pub fn quantize(&self, raw: f64) -> Option<f64> {
        if !raw.is_finite() {
            return None;
        }
        if raw >= self.max {
            return Some(self.max);
        }
        if raw <= self.min {
            return Some(self.min);
        }
        let steps = ((raw - self.min) / self.step).round();
        let snapped = round_to(self.min + steps * self.step, self.decimals);
        Some(snapped.clamp(self.min, self.max))
    }

    /// Position of `value` along the track in percent, in `[0, 100]`.
    #[must_use]
    pub fn percent_of(&self, value: f64) -> f64 {
        let span = self.span();
        if !(span > 0.0) {
            return 0.0;
        }
        let percent = (value - self.min) / span * 100.0;
        if percent.is_finite() {
            percent.clamp(0.0, 100.0)
        } else {
            0.0
        }
    }

    /// Client X of `value` on the given track.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn x_of(&self, track: Rect, value: f64) -> f32 {
        track.x + (self.percent_of(value) / 100.0) as f32 * track.width
    }
}

/// Counts the decimals of a number as written, e.g. `0.25` → 2.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn decimals_of(value: f64) -> i32 {
    let text = value.to_string();
    let decimals = text.split_once('.').map_or(0, |(_, frac)| frac.len());
    decimals.min(MAX_DECIMALS) as i32
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track() -> Rect {
        Rect::new(100.0, 0.0, 200.0, 20.0)
    }

    #[test]
    fn test_fraction_clamped() {
        assert_eq!(ValueScale::fraction_at(track(), 50.0), 0.0);
        assert_eq!(ValueScale::fraction_at(track(), 200.0), 0.5);
        assert_eq!(ValueScale::fraction_at(track(), 900.0), 1.0);
    }

    #[test]
    fn test_zero_width_track() {
        let empty = Rect::new(100.0, 0.0, 0.0, 20.0);
        assert_eq!(ValueScale::fraction_at(empty, 150.0), 0.0);

        let scale = ValueScale::new(0.0, 100.0, 1.0);
        assert_eq!(scale.value_at(empty, 150.0), 0.0);
    }

    #[test]
    fn test_value_at_rounds_to_step() {
        let scale = ValueScale::new(0.0, 10_000.0, 250.0);
        // 0.33 * 10000 = 3300 → nearest 250 is 3250
        let x = 100.0 + 0.33 * 200.0;
        assert_eq!(scale.value_at(track(), x), 3250.0);
    }

    #[test]
    fn test_quantize_anchored_at_min() {
        let scale = ValueScale::new(5.0, 105.0, 10.0);
        assert_eq!(scale.quantize(31.0), Some(35.0));
        assert_eq!(scale.quantize(29.0), Some(25.0));
    }

    #[test]
    fn test_quantize_clamps_to_domain() {
        let scale = ValueScale::new(0.0, 100.0, 30.0);
        // the edge is kept although 100 is off the 30-step grid
        assert_eq!(scale.quantize(100.0), Some(100.0));
        assert_eq!(scale.quantize(250.0), Some(100.0));
        // 96 is 3.2 steps: snaps back to 90
        assert_eq!(scale.quantize(96.0), Some(90.0));
        assert_eq!(scale.quantize(-40.0), Some(0.0));
        assert_eq!(scale.quantize(f64::NAN), None);
    }

    #[test]
    fn test_fractional_step_has_no_float_noise() {
        let scale = ValueScale::new(0.0, 1.0, 0.1);
        assert_eq!(scale.quantize(0.3), Some(0.3));
        assert_eq!(scale.quantize(0.74), Some(0.7));
    }

    #[test]
    fn test_fractional_min_stays_on_grid() {
        let scale = ValueScale::new(0.1, 1.1, 0.1);
        assert_eq!(scale.quantize(0.33), Some(0.3));
        assert_eq!(scale.quantize(1.04), Some(1.0));
    }

    #[test]
    fn test_percent_of() {
        let scale = ValueScale::new(0.0, 10_000.0, 1.0);
        assert_eq!(scale.percent_of(2_500.0), 25.0);
        assert_eq!(scale.percent_of(10_000.0), 100.0);
        assert_eq!(scale.x_of(track(), 5_000.0), 200.0);
    }
}
