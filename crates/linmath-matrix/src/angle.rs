//! Angle unit conversions.

/// Convert degrees to radians.
#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * (std::f32::consts::PI / 180.0)
}

/// Convert radians to degrees.
#[inline]
pub fn radians_to_degrees(radians: f32) -> f32 {
    radians * (180.0 / std::f32::consts::PI)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_degrees_to_radians() {
        assert_eq!(degrees_to_radians(0.0), 0.0);
        assert_relative_eq!(degrees_to_radians(90.0), FRAC_PI_2);
        assert_relative_eq!(degrees_to_radians(180.0), PI);
        assert_relative_eq!(degrees_to_radians(-360.0), -2.0 * PI);
    }

    #[test]
    fn test_radians_to_degrees() {
        assert_relative_eq!(radians_to_degrees(PI), 180.0);
        assert_relative_eq!(radians_to_degrees(degrees_to_radians(37.5)), 37.5, epsilon = 1e-5);
    }
}
