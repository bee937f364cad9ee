//! Linear mapping from grid units to pixel space.
//!
//! One [`Scaler`] is built per axis per render pass, mapping the abstract
//! grid range onto the computed diagram rectangle. Axis inversion is
//! expressed by a descending output range rather than a flag; the map is
//! linear either way.

use crate::error::GraticuleError;

/// A pure linear map from an input range to an output range.
///
/// Immutable once constructed. Output values are rounded to a fixed number
/// of decimal places so pixel coordinates stay stable across platforms.
///
/// # Examples
///
/// ```
/// use graticule::scale::Scaler;
///
/// // Five columns across a 400px diagram.
/// let x = Scaler::new(0.0, 4.0, 0.0, 400.0, 1).unwrap();
/// assert_eq!(x.scale(0.0), 0.0);
/// assert_eq!(x.scale(2.0), 200.0);
/// assert_eq!(x.scale(4.0), 400.0);
///
/// // Inverted axis: descending output range.
/// let y = Scaler::new(0.0, 4.0, 400.0, 0.0, 1).unwrap();
/// assert_eq!(y.scale(0.0), 400.0);
/// assert_eq!(y.scale(4.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaler {
    in_min: f32,
    in_max: f32,
    out_min: f32,
    out_max: f32,
    precision: u32,
}

impl Scaler {
    /// Creates a scaler mapping `[in_min, in_max]` onto `[out_min, out_max]`.
    ///
    /// `precision` is the number of decimal places kept in scaled output.
    ///
    /// # Errors
    ///
    /// Returns [`GraticuleError::DegenerateRange`] when the input bounds are
    /// equal — the map would divide by zero. Callers with single-row or
    /// single-column grids must widen the span before constructing.
    pub fn new(
        in_min: f32,
        in_max: f32,
        out_min: f32,
        out_max: f32,
        precision: u32,
    ) -> Result<Self, GraticuleError> {
        if in_min == in_max {
            return Err(GraticuleError::DegenerateRange {
                min: in_min,
                max: in_max,
            });
        }

        Ok(Self {
            in_min,
            in_max,
            out_min,
            out_max,
            precision,
        })
    }

    /// Maps a value from the input range to the output range.
    ///
    /// Exact at both endpoints; monotonically increasing when the output
    /// range ascends and decreasing when it descends.
    pub fn scale(&self, value: f32) -> f32 {
        let scaled = self.out_min
            + (value - self.in_min) / (self.in_max - self.in_min) * (self.out_max - self.out_min);

        let factor = 10.0_f32.powi(self.precision as i32);
        (scaled * factor).round() / factor
    }

    /// Returns the low end of the output range.
    pub fn out_min(&self) -> f32 {
        self.out_min
    }

    /// Returns the high end of the output range.
    pub fn out_max(&self) -> f32 {
        self.out_max
    }

    /// Returns true when the output range descends as input ascends.
    pub fn is_inverted(&self) -> bool {
        self.out_max < self.out_min
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::error::GraticuleError;

    #[test]
    fn test_scaler_endpoints_exact() {
        let scaler = Scaler::new(0.0, 9.0, 0.0, 730.0, 1).unwrap();
        assert_eq!(scaler.scale(0.0), 0.0);
        assert_eq!(scaler.scale(9.0), 730.0);
    }

    #[test]
    fn test_scaler_midpoint() {
        let scaler = Scaler::new(0.0, 10.0, 0.0, 100.0, 1).unwrap();
        assert_approx_eq!(f32, scaler.scale(5.0), 50.0);
    }

    #[test]
    fn test_scaler_rounds_to_precision() {
        let scaler = Scaler::new(0.0, 3.0, 0.0, 100.0, 1).unwrap();
        // 100/3 = 33.333... rounds to one decimal place.
        assert_eq!(scaler.scale(1.0), 33.3);
    }

    #[test]
    fn test_scaler_inverted() {
        let scaler = Scaler::new(0.0, 4.0, 400.0, 0.0, 1).unwrap();
        assert!(scaler.is_inverted());
        assert_eq!(scaler.out_min(), 400.0);
        assert_eq!(scaler.out_max(), 0.0);
        assert_eq!(scaler.scale(0.0), scaler.out_min());
        assert_eq!(scaler.scale(1.0), 300.0);
        assert_eq!(scaler.scale(4.0), scaler.out_max());
    }

    #[test]
    fn test_scaler_degenerate_range_rejected() {
        let result = Scaler::new(3.0, 3.0, 0.0, 100.0, 1);
        assert!(matches!(
            result,
            Err(GraticuleError::DegenerateRange { min, max }) if min == 3.0 && max == 3.0
        ));
    }

    proptest! {
        #[test]
        fn prop_scale_monotonic_ascending(
            a in 0.0f32..100.0,
            b in 0.0f32..100.0,
            out_max in 1.0f32..2000.0,
        ) {
            let scaler = Scaler::new(0.0, 100.0, 0.0, out_max, 3).unwrap();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(scaler.scale(lo) <= scaler.scale(hi));
        }

        #[test]
        fn prop_scale_monotonic_descending(
            a in 0.0f32..100.0,
            b in 0.0f32..100.0,
            out_min in 1.0f32..2000.0,
        ) {
            let scaler = Scaler::new(0.0, 100.0, out_min, 0.0, 3).unwrap();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(scaler.scale(lo) >= scaler.scale(hi));
        }

        #[test]
        fn prop_scale_endpoints_exact(
            in_max in 1.0f32..64.0,
            out_max in 1.0f32..4000.0,
        ) {
            let scaler = Scaler::new(0.0, in_max, 0.0, out_max, 1).unwrap();
            prop_assert_eq!(scaler.scale(0.0), 0.0);
            // The high endpoint is exact up to the scaler's own rounding.
            let rounded_out_max = (out_max * 10.0).round() / 10.0;
            prop_assert_eq!(scaler.scale(in_max), rounded_out_max);
        }
    }
}
