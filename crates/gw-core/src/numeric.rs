use crate::{CoreError, CoreResult};

/// Scalar used for coordinates and force terms.
pub type Real = f64;

/// Absolute and relative slack for comparing coordinates.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        // Layout coordinates live in the hundreds.
        Self {
            abs: 1e-9,
            rel: 1e-12,
        }
    }
}

/// True when `a` and `b` agree within either tolerance.
pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    diff <= tol.abs || diff <= tol.rel * a.abs().max(b.abs())
}

/// Reject NaN and infinities in configuration values.
pub fn ensure_finite(v: Real, what: &'static str) -> CoreResult<Real> {
    if v.is_finite() {
        return Ok(v);
    }
    Err(CoreError::NonFinite { what, value: v })
}

/// A position (or displacement) in the drawing plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: Real,
    pub y: Real,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: Real, y: Real) -> Self {
        Self { x, y }
    }

    /// Vector from `self` to `other`.
    pub fn to(self, other: Point) -> Point {
        Point::new(other.x - self.x, other.y - self.y)
    }

    pub fn length(self) -> Real {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance(self, other: Point) -> Real {
        self.to(other).length()
    }

    pub fn scale(self, k: Real) -> Point {
        Point::new(self.x * k, self.y * k)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl core::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl core::ops::AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl core::ops::SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_at_layout_scale() {
        let tol = Tolerances::default();
        assert!(nearly_equal(250.0, 250.0 + 1e-10, tol));
        assert!(nearly_equal(0.0, 5e-10, tol));
        assert!(!nearly_equal(250.0, 250.001, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(a.to(b), Point::new(3.0, 4.0));
        assert_eq!(b.to(a).scale(2.0), Point::new(-6.0, -8.0));
    }

    #[test]
    fn point_accumulates() {
        let mut p = Point::ZERO;
        p += Point::new(1.0, 2.0);
        p -= Point::new(0.5, 0.5);
        assert_eq!(p, Point::new(0.5, 1.5));
        assert_eq!(p + p, Point::new(1.0, 3.0));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn distance_is_symmetric(ax in -1e3_f64..1e3, ay in -1e3_f64..1e3, bx in -1e3_f64..1e3, by in -1e3_f64..1e3) {
            let a = Point::new(ax, ay);
            let b = Point::new(bx, by);
            prop_assert!(nearly_equal(a.distance(b), b.distance(a), Tolerances::default()));
            prop_assert!(a.distance(b) >= 0.0);
        }
    }
}
