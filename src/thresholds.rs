//! Fixed handling thresholds.
//!
//! Dimensions are in centimeters and mass in kilograms. All comparisons
//! against these values are inclusive (`>=`).

/// Volume (cm³) at or above which a package is bulky.
pub const BULKY_VOLUME_THRESHOLD_CM3: f64 = 1_000_000.0;

/// Single dimension (cm) at or above which a package is bulky.
pub const BULKY_DIMENSION_THRESHOLD_CM: f64 = 150.0;

/// Mass (kg) at or above which a package is heavy.
pub const HEAVY_MASS_THRESHOLD_KG: f64 = 20.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_threshold_is_cube_of_100() {
        assert_eq!(BULKY_VOLUME_THRESHOLD_CM3, 100.0 * 100.0 * 100.0);
    }

    #[test]
    fn test_threshold_values() {
        assert_eq!(BULKY_DIMENSION_THRESHOLD_CM, 150.0);
        assert_eq!(HEAVY_MASS_THRESHOLD_KG, 20.0);
    }
}
