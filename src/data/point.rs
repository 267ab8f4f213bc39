use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::fmt;

use crate::TOL;

/// Two-dimensional point tagged with an id, so a point can be traced back to
/// the figure it came from after meshing.
///
/// User-supplied points should carry non-negative ids. Points generated by
/// this crate (for example intersection points) carry negative ids.
///
/// Equality is tolerance based and ignores the id:
///
/// ```rust
/// # use ringmesh::data::Point;
/// let p1 = Point::new(6.5, -7.6, 1);
/// let p2 = Point::new(6.5, -7.6, 2);
/// assert_eq!(p1, p2);
/// assert_ne!(p1, Point::new(6.5, -7.7, 3));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Point {
  x: f64,
  y: f64,
  id: i64,
}

// Random sampling.
impl Distribution<Point> for Standard {
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
    Point::new(rng.gen(), rng.gen(), 0)
  }
}

impl Point {
  pub const fn new(x: f64, y: f64, id: i64) -> Point {
    Point { x, y, id }
  }

  pub fn x(&self) -> f64 {
    self.x
  }

  pub fn y(&self) -> f64 {
    self.y
  }

  pub fn id(&self) -> i64 {
    self.id
  }

  #[must_use]
  pub fn with_id(self, id: i64) -> Point {
    Point { id, ..self }
  }

  pub(crate) fn dot(&self, other: &Point) -> f64 {
    self.x * other.x + self.y * other.y
  }

  /// `self + (other - self) * t`. The result keeps the id of `self`.
  pub(crate) fn lerp(&self, other: &Point, t: f64) -> Point {
    Point {
      x: self.x + (other.x - self.x) * t,
      y: self.y + (other.y - self.y) * t,
      id: self.id,
    }
  }
}

impl PartialEq for Point {
  fn eq(&self, other: &Point) -> bool {
    (self.x - other.x).abs() < TOL && (self.y - other.y).abs() < TOL
  }
}

impl fmt::Display for Point {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Point(x={}, y={}, ID={})", self.x, self.y, self.id)
  }
}

impl From<(f64, f64, i64)> for Point {
  fn from((x, y, id): (f64, f64, i64)) -> Point {
    Point::new(x, y, id)
  }
}

mod add;
mod sub;
