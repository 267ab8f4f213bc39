use crate::data::Point;
use crate::TOL;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
}
use Orientation::*;

impl Orientation {
  /// Winding implied by a signed area. An area of exactly zero has no
  /// orientation.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use ringmesh::Orientation;
  /// assert_eq!(Orientation::from_signed_area(2.0), Some(Orientation::CounterClockWise));
  /// assert_eq!(Orientation::from_signed_area(-0.5), Some(Orientation::ClockWise));
  /// assert_eq!(Orientation::from_signed_area(0.0), None);
  /// ```
  pub fn from_signed_area(area: f64) -> Option<Orientation> {
    if area > 0.0 {
      Some(CounterClockWise)
    } else if area < 0.0 {
      Some(ClockWise)
    } else {
      None
    }
  }

  pub fn is_ccw(self) -> bool {
    self == CounterClockWise
  }

  pub fn is_cw(self) -> bool {
    self == ClockWise
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      CounterClockWise => ClockWise,
      ClockWise => CounterClockWise,
    }
  }
}

/// Z-component of the cross product of the position vectors of `p1` and `p2`.
/// Positive when turning from `p1` to `p2` is counter-clockwise.
///
/// # Examples
///
/// ```rust
/// # use ringmesh::data::Point;
/// # use ringmesh::cross_product;
/// let p1 = Point::new(0.5, 0.5, 0);
/// let p2 = Point::new(-0.5, 0.5, 1);
/// assert_eq!(cross_product(&p1, &p2), 0.5);
/// assert_eq!(cross_product(&p2, &p1), -0.5);
/// ```
pub fn cross_product(p1: &Point, p2: &Point) -> f64 {
  p1.x() * p2.y() - p1.y() * p2.x()
}

/// Check whether three points lie on a common line, within [`TOL`].
pub fn are_collinear(p1: &Point, p2: &Point, p3: &Point) -> bool {
  let delta1 = p1 - p2;
  let delta2 = p1 - p3;
  cross_product(&delta1, &delta2).abs() < TOL
}
