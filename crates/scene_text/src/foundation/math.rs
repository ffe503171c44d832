//! Math utilities and types
//!
//! Provides the 2D math types used by scene nodes, plus the angle
//! conversions the rotation accessors rely on.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    #[must_use]
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    #[must_use]
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }
}

pub use utils::{deg_to_rad, rad_to_deg};

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_degree_radian_conversion() {
        assert_relative_eq!(deg_to_rad(180.0), constants::PI, epsilon = 1e-6);
        assert_relative_eq!(deg_to_rad(90.0), constants::HALF_PI, epsilon = 1e-6);
        assert_relative_eq!(rad_to_deg(constants::TAU), 360.0, epsilon = 1e-4);
    }

    #[test]
    fn test_conversion_roundtrip() {
        for degrees in [0.0_f32, 45.0, 90.0, 180.0, -90.0, 359.0] {
            assert_relative_eq!(rad_to_deg(deg_to_rad(degrees)), degrees, epsilon = 1e-4);
        }
    }
}
