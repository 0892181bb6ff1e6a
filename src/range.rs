use crate::error::ScrubberError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Default for Range {
    fn default() -> Self {
        Range { min: 0.0, max: 1.0 }
    }
}

impl Range {
    /// Accepts every value. Infinite bounds, so never use it for position mapping.
    pub fn unbounded() -> Self {
        Range {
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
        }
    }

    /// Builds a range, rejecting reversed or NaN bounds.
    pub fn new(min: f64, max: f64) -> Result<Self, ScrubberError> {
        if min.is_nan() || max.is_nan() || min > max {
            return Err(ScrubberError::InvalidRange { min, max });
        }

        Ok(Range { min, max })
    }

    pub fn distance(&self) -> f64 {
        self.max - self.min
    }

    pub fn is_degenerate(&self) -> bool {
        self.distance() == 0.0
    }

    /// Ceiling first, then floor. A `max` below a value always wins over `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        value.min(self.max).max(self.min)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn percent_from_value(&self, value: f64) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }

        ((value - self.min) / self.distance()).clamp(0.0, 1.0)
    }

    pub fn value_from_percent(&self, percent: f64) -> f64 {
        (self.distance() * percent) + self.min
    }

    /// `other` squeezed inside this range. Clamping into the result is the
    /// same as clamping into `other` and then into `self`, so the result never
    /// leaves `self`, even when the two ranges do not overlap.
    pub fn confine(&self, other: Range) -> Range {
        Range {
            min: self.clamp(other.min),
            max: self.clamp(other.max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn reversed_bounds_are_rejected() {
        assert_eq!(
            Range::new(2.0, 1.0),
            Err(ScrubberError::InvalidRange { min: 2.0, max: 1.0 })
        );
        assert!(Range::new(f64::NAN, 1.0).is_err());
        assert!(Range::new(1.0, 1.0).is_ok());
    }

    #[test]
    fn clamp_applies_ceiling_then_floor() {
        let range = Range::new(-1.0, 1.0).unwrap();

        assert_eq!(range.clamp(5.0), 1.0);
        assert_eq!(range.clamp(-5.0), -1.0);
        assert_eq!(range.clamp(0.25), 0.25);
    }

    #[test]
    fn percent_is_clamped_to_unit_interval() {
        let range = Range::new(10.0, 20.0).unwrap();

        assert_relative_eq!(range.percent_from_value(15.0), 0.5);
        assert_eq!(range.percent_from_value(25.0), 1.0);
        assert_eq!(range.percent_from_value(0.0), 0.0);
    }

    #[test]
    fn degenerate_range_maps_to_zero() {
        let range = Range::new(3.0, 3.0).unwrap();

        assert_eq!(range.percent_from_value(3.0), 0.0);
        assert_eq!(range.percent_from_value(100.0), 0.0);
    }

    #[test]
    fn percent_round_trips_inside_range() {
        let range = Range::new(-4.5, 12.25).unwrap();

        for value in [-4.5, -1.0, 0.0, 3.3, 7.77, 12.25] {
            let percent = range.percent_from_value(value);
            assert_relative_eq!(range.value_from_percent(percent), value, epsilon = 1e-9);
        }
    }

    #[test]
    fn confined_range_stays_inside() {
        let range = Range::new(0.0, 1.0).unwrap();

        let inner = range.confine(Range { min: 0.5, max: 0.9 });
        assert_eq!(inner, Range { min: 0.5, max: 0.9 });

        let above = range.confine(Range { min: 2.0, max: 3.0 });
        assert_eq!(above, Range { min: 1.0, max: 1.0 });

        let below = Range::new(-10.0, -5.0).unwrap().confine(Range::default());
        assert_eq!(below, Range { min: -5.0, max: -5.0 });
    }

    #[test]
    fn unbounded_confines_to_the_outer_range() {
        let range = Range::new(0.0, 600.0).unwrap();

        assert_eq!(range.confine(Range::unbounded()), range);
        assert_eq!(Range::unbounded().clamp(1e300), 1e300);
    }
}
