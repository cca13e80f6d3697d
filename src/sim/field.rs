// field.rs - Pointer repulsion
//
// Force falls off with the inverse squared distance and is only applied
// while the squared distance is below `radius`. Radius and squared
// distance are compared directly; the visual tuning depends on it.

/// Floor for the squared distance, so a particle sitting exactly on the
/// pointer gets a large finite kick instead of a division by zero.
pub const MIN_DISTANCE_SQ: f32 = 1e-2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Repulsion {
    /// Last known pointer position; None until the first pointer event.
    pub point: Option<(f32, f32)>,
    pub radius: f32,
}

impl Repulsion {
    pub fn new(radius: f32) -> Self {
        Self { point: None, radius }
    }

    /// Signed force magnitude at a given squared distance (negative = away)
    #[inline]
    pub fn force(&self, distance_sq: f32) -> f32 {
        -self.radius / distance_sq.max(MIN_DISTANCE_SQ)
    }

    /// Velocity change for a particle at (x, y) this tick.
    /// Zero when there is no pointer or the particle is out of reach.
    #[inline]
    pub fn impulse(&self, x: f32, y: f32) -> (f32, f32) {
        let Some((px, py)) = self.point else {
            return (0.0, 0.0);
        };

        let dx = px - x;
        let dy = py - y;
        let distance_sq = dx * dx + dy * dy;
        // A non-finite pointer gives a NaN distance; treat it as out of reach
        if distance_sq.is_nan() || distance_sq >= self.radius {
            return (0.0, 0.0);
        }

        let force = self.force(distance_sq);
        let angle = dy.atan2(dx);
        (force * angle.cos(), force * angle.sin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_pointer_no_impulse() {
        let field = Repulsion::new(5000.0);
        assert_eq!(field.impulse(10.0, 10.0), (0.0, 0.0));
    }

    #[test]
    fn pushes_away_from_pointer() {
        let mut field = Repulsion::new(5000.0);
        field.point = Some((10.0, 10.0));

        // Particle left of the pointer gets pushed further left
        let (ix, iy) = field.impulse(5.0, 10.0);
        assert!(ix < 0.0);
        assert!(iy.abs() < 1e-4);
        assert!((ix + 5000.0 / 25.0).abs() < 1e-3);

        // Particle below the pointer gets pushed down
        let (ix, iy) = field.impulse(10.0, 15.0);
        assert!(ix.abs() < 1e-3);
        assert!(iy > 0.0);
    }

    #[test]
    fn threshold_uses_squared_distance() {
        let mut field = Repulsion::new(100.0);
        field.point = Some((0.0, 0.0));

        // 9^2 = 81 < 100: inside
        assert_ne!(field.impulse(9.0, 0.0), (0.0, 0.0));
        // 10^2 = 100, not below radius: outside
        assert_eq!(field.impulse(10.0, 0.0), (0.0, 0.0));
        // 50 px is far past a 100 "radius"
        assert_eq!(field.impulse(50.0, 0.0), (0.0, 0.0));
    }

    #[test]
    fn coincident_pointer_is_large_and_finite() {
        let mut field = Repulsion::new(5000.0);
        field.point = Some((20.0, 20.0));

        for &(x, y) in &[(20.0, 20.0), (20.0 - 1e-3, 20.0), (20.0, 20.0 + 1e-6)] {
            let (ix, iy) = field.impulse(x, y);
            assert!(ix.is_finite() && iy.is_finite());
            assert!((ix * ix + iy * iy).sqrt() > 1e5);
        }
    }

    #[test]
    fn non_finite_pointer_no_impulse() {
        let mut field = Repulsion::new(5000.0);
        for &pt in &[(f32::NAN, f32::NAN), (f32::NAN, 3.0), (f32::INFINITY, 3.0)] {
            field.point = Some(pt);
            assert_eq!(field.impulse(3.0, 3.0), (0.0, 0.0));
        }
    }

    #[test]
    fn force_is_negative_and_grows_near_zero() {
        let field = Repulsion::new(5000.0);
        assert!(field.force(100.0) < 0.0);
        assert!(field.force(1.0).abs() > field.force(100.0).abs());
        assert!(field.force(0.0).is_finite());
    }
}
