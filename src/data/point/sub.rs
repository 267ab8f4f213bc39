use std::ops::Sub;

use super::Point;

// Subtraction also sums the ids.

// &point - &point = point
impl<'a, 'b> Sub<&'a Point> for &'b Point {
  type Output = Point;

  fn sub(self: &'b Point, other: &'a Point) -> Point {
    Point::new(self.x() - other.x(), self.y() - other.y(), self.id().wrapping_add(other.id()))
  }
}

// point - point = point
impl Sub<Point> for Point {
  type Output = Point;

  fn sub(self: Point, other: Point) -> Point {
    Sub::sub(&self, &other)
  }
}

// point - &point = point
impl Sub<&Point> for Point {
  type Output = Point;

  fn sub(self: Point, other: &Point) -> Point {
    Sub::sub(&self, other)
  }
}
