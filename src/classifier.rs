//! Package classification.
//!
//! Coerces the four inputs, validates them, and decides the handling
//! category from the bulky and heavy flags:
//!
//! - bulky and heavy: [`Category::Rejected`]
//! - exactly one of the two: [`Category::Special`]
//! - neither: [`Category::Standard`]
//!
//! A package is bulky when its volume reaches
//! [`BULKY_VOLUME_THRESHOLD_CM3`] or any single dimension reaches
//! [`BULKY_DIMENSION_THRESHOLD_CM`]. It is heavy when its mass reaches
//! [`HEAVY_MASS_THRESHOLD_KG`].

use tracing::{debug, trace};

use crate::category::Category;
use crate::error::{Field, SortError};
use crate::measure::Measure;
use crate::thresholds::{
    BULKY_DIMENSION_THRESHOLD_CM, BULKY_VOLUME_THRESHOLD_CM3, HEAVY_MASS_THRESHOLD_KG,
};

/// Classify a package by its dimensions (cm) and mass (kg).
///
/// Each argument may be a native number, a numeric string, or anything else
/// convertible into a [`Measure`]. All four inputs are coerced before a type
/// error is reported, so the error names every non-numeric field.
///
/// ```
/// use parcel_sort::{classify, Category, ErrorKind};
///
/// assert_eq!(classify(10, 10, 10, 1).unwrap(), Category::Standard);
/// assert_eq!(classify("150", "1", "1", "1").unwrap(), Category::Special);
/// assert_eq!(classify(0, 1, 1, 1).unwrap_err().kind(), ErrorKind::Value);
/// assert_eq!(classify("a", 10, 10, 1).unwrap_err().kind(), ErrorKind::Type);
/// ```
pub fn classify(
    width: impl Into<Measure>,
    height: impl Into<Measure>,
    length: impl Into<Measure>,
    mass: impl Into<Measure>,
) -> Result<Category, SortError> {
    let package = Package::from_measures([width.into(), height.into(), length.into(), mass.into()])?;
    Ok(package.category())
}

/// A package whose dimensions and mass passed validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Package {
    width: f64,
    height: f64,
    length: f64,
    mass: f64,
}

impl Package {
    /// Validate already-coerced values.
    ///
    /// Fails with [`SortError::NotPositive`] when any value is zero or
    /// negative, then with [`SortError::NotFinite`] when any value is NaN or
    /// infinite.
    pub fn new(width: f64, height: f64, length: f64, mass: f64) -> Result<Self, SortError> {
        let values = [width, height, length, mass];

        let not_positive = failing_fields(&values, |v| v <= 0.0);
        if !not_positive.is_empty() {
            debug!(fields = ?not_positive, "Rejecting non-positive input");
            return Err(SortError::NotPositive {
                fields: not_positive,
            });
        }

        // NaN slips through the `<= 0.0` check above
        let not_finite = failing_fields(&values, |v| !v.is_finite());
        if !not_finite.is_empty() {
            debug!(fields = ?not_finite, "Rejecting non-finite input");
            return Err(SortError::NotFinite { fields: not_finite });
        }

        Ok(Self {
            width,
            height,
            length,
            mass,
        })
    }

    /// Coerce raw inputs in argument order, then validate.
    pub fn from_measures(measures: [Measure; 4]) -> Result<Self, SortError> {
        let mut values = [0.0_f64; 4];
        let mut not_numeric = Vec::new();

        for ((field, measure), slot) in Field::ALL.iter().zip(&measures).zip(values.iter_mut()) {
            match measure.coerce() {
                Ok(value) => *slot = value,
                Err(err) => {
                    debug!(field = %field, error = %err, "Input is not numeric");
                    not_numeric.push(*field);
                }
            }
        }

        if !not_numeric.is_empty() {
            return Err(SortError::NotNumeric {
                fields: not_numeric,
            });
        }

        let [width, height, length, mass] = values;
        Self::new(width, height, length, mass)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// `width * height * length`
    pub fn volume(&self) -> f64 {
        self.width * self.height * self.length
    }

    pub fn largest_dimension(&self) -> f64 {
        self.width.max(self.height).max(self.length)
    }

    pub fn is_bulky(&self) -> bool {
        self.volume() >= BULKY_VOLUME_THRESHOLD_CM3
            || self.largest_dimension() >= BULKY_DIMENSION_THRESHOLD_CM
    }

    pub fn is_heavy(&self) -> bool {
        self.mass >= HEAVY_MASS_THRESHOLD_KG
    }

    pub fn category(&self) -> Category {
        let is_bulky = self.is_bulky();
        let is_heavy = self.is_heavy();
        trace!(
            volume = self.volume(),
            largest_dimension = self.largest_dimension(),
            "Derived package quantities"
        );

        let category = Category::from_flags(is_bulky, is_heavy);
        debug!(
            width = self.width,
            height = self.height,
            length = self.length,
            mass = self.mass,
            is_bulky,
            is_heavy,
            %category,
            "Classified package"
        );
        category
    }
}

fn failing_fields(values: &[f64; 4], fails: impl Fn(f64) -> bool) -> Vec<Field> {
    Field::ALL
        .iter()
        .zip(values)
        .filter(|(_, v)| fails(**v))
        .map(|(field, _)| *field)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_small() {
        assert_eq!(classify(10, 10, 10, 1).unwrap(), Category::Standard);
    }

    #[test]
    fn test_bulky_by_volume_exact_threshold() {
        // 100 * 100 * 100 = 1,000,000
        assert_eq!(classify(100, 100, 100, 10).unwrap(), Category::Special);
    }

    #[test]
    fn test_bulky_by_dimension_exact_threshold_any_position() {
        assert_eq!(classify(150, 1, 1, 1).unwrap(), Category::Special);
        assert_eq!(classify(1, 150, 1, 1).unwrap(), Category::Special);
        assert_eq!(classify(1, 1, 150, 1).unwrap(), Category::Special);
    }

    #[test]
    fn test_heavy_exact_threshold() {
        assert_eq!(classify(10, 10, 10, 20).unwrap(), Category::Special);
    }

    #[test]
    fn test_rejected_both_conditions() {
        assert_eq!(classify(150, 150, 1, 20).unwrap(), Category::Rejected);
    }

    #[test]
    fn test_just_below_thresholds() {
        assert_eq!(classify(100, 100, 99, 10).unwrap(), Category::Standard);
        assert_eq!(classify(149.9, 10, 10, 10).unwrap(), Category::Standard);
        assert_eq!(classify(10, 10, 10, 19.99).unwrap(), Category::Standard);
    }

    #[test]
    fn test_zero_in_each_position_is_value_error() {
        for err in [
            classify(0, 1, 1, 1).unwrap_err(),
            classify(1, 0, 1, 1).unwrap_err(),
            classify(1, 1, 0, 1).unwrap_err(),
            classify(1, 1, 1, 0).unwrap_err(),
        ] {
            assert!(err.is_value_error(), "expected value error, got {err}");
        }
    }

    #[test]
    fn test_negative_reports_every_failing_field() {
        let err = classify(-1, 10, -2, -0.5).unwrap_err();
        assert_eq!(
            err,
            SortError::NotPositive {
                fields: vec![Field::Width, Field::Length, Field::Mass]
            }
        );
    }

    #[test]
    fn test_type_error_precedes_value_error() {
        // mass is negative, but the non-numeric width wins
        let err = classify("a", 10, 10, -1).unwrap_err();
        assert_eq!(
            err,
            SortError::NotNumeric {
                fields: vec![Field::Width]
            }
        );
    }

    #[test]
    fn test_type_error_names_all_non_numeric_fields() {
        let err = classify("a", None::<f64>, 10, "x").unwrap_err();
        assert_eq!(err.fields(), &[Field::Width, Field::Height, Field::Mass]);
    }

    #[test]
    fn test_nan_and_infinity_are_value_errors() {
        let nan = classify("nan", 10, 10, 1).unwrap_err();
        assert_eq!(
            nan,
            SortError::NotFinite {
                fields: vec![Field::Width]
            }
        );

        let inf = classify(10, 10, 10, f64::INFINITY).unwrap_err();
        assert_eq!(
            inf,
            SortError::NotFinite {
                fields: vec![Field::Mass]
            }
        );

        let neg_inf = classify("-inf", 10, 10, 1).unwrap_err();
        assert!(matches!(neg_inf, SortError::NotPositive { .. }));
    }

    #[test]
    fn test_package_derived_quantities() {
        let package = Package::new(20.0, 30.0, 40.0, 5.0).unwrap();
        assert_eq!(package.volume(), 24_000.0);
        assert_eq!(package.largest_dimension(), 40.0);
        assert!(!package.is_bulky());
        assert!(!package.is_heavy());
        assert_eq!(package.category(), Category::Standard);
    }

    #[test]
    fn test_package_accessors() {
        let package = Package::new(1.0, 2.0, 3.0, 4.0).unwrap();
        assert_eq!(
            (package.width(), package.height(), package.length(), package.mass()),
            (1.0, 2.0, 3.0, 4.0)
        );
    }

    #[test]
    fn test_bulky_by_volume_only() {
        // volume 1,000,000 with no dimension at 150
        let package = Package::new(125.0, 100.0, 80.0, 1.0).unwrap();
        assert!(package.is_bulky());
        assert!(package.largest_dimension() < BULKY_DIMENSION_THRESHOLD_CM);
    }
}
