use std::ops::Add;

use super::Point;

// The id of a sum is the sum of the ids. There is no geometric meaning to
// this, it only keeps the result traceable to both operands.

// &point + &point = point
impl<'a, 'b> Add<&'a Point> for &'b Point {
  type Output = Point;

  fn add(self: &'b Point, other: &'a Point) -> Point {
    Point::new(self.x() + other.x(), self.y() + other.y(), self.id().wrapping_add(other.id()))
  }
}

// point + point = point
impl Add<Point> for Point {
  type Output = Point;

  fn add(self: Point, other: Point) -> Point {
    Add::add(&self, &other)
  }
}

// point + &point = point
impl Add<&Point> for Point {
  type Output = Point;

  fn add(self: Point, other: &Point) -> Point {
    Add::add(&self, other)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn add_componentwise() {
    let p1 = Point::new(3.2, -4.6, 47);
    let p2 = Point::new(-6.4, 2.5, 33);
    let sum = &p1 + &p2;
    assert_eq!(sum, Point::new(-3.2, -2.1, 0));
    assert_eq!(sum.id(), 80);
    assert_eq!(p1 + p2, sum);
    assert_eq!((p1 + &p2).id(), 80);
  }
}
