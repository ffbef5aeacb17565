pub mod units;

pub use units::*;

// Re-export nalgebra
pub use nalgebra as na;

// Type alias for domain clarity (zero cost)
pub type Distance = Length;

/// Standard gravity used as the default for new inputs (m/s²)
pub const STANDARD_GRAVITY: f64 = 9.81;

/// Convert UOM Distance to internal coordinate (millimeters)
#[inline]
pub fn to_coord(distance: Distance) -> f64 {
    distance.get::<millimeter>()
}

/// Convert internal coordinate (millimeters) to UOM Distance
#[inline]
pub fn from_coord(value: f64) -> Distance {
    Distance::new::<millimeter>(value)
}

/// Create Point3 from UOM Distances
pub fn point_from_distances(x: Distance, y: Distance, z: Distance) -> na::Point3<f64> {
    na::Point3::new(to_coord(x), to_coord(y), to_coord(z))
}

/// Force in newtons, `+∞` included
#[inline]
pub fn newtons(value: f64) -> Force {
    Force::new::<newton>(value)
}

/// True when a force is a finite requirement (not the unsatisfiable sentinel)
#[inline]
pub fn is_finite_force(force: Force) -> bool {
    force.get::<newton>().is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_coord_round_trip_in_millimeters() {
        let d = Distance::new::<meter>(0.02);
        assert_relative_eq!(to_coord(d), 20.0, epsilon = 1e-9);
        assert_relative_eq!(from_coord(20.0).get::<meter>(), 0.02, epsilon = 1e-12);
    }

    #[test]
    fn test_infinite_force_is_not_finite() {
        assert!(is_finite_force(newtons(130.8)));
        assert!(!is_finite_force(newtons(f64::INFINITY)));
    }
}
