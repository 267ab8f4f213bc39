use super::Point;
use crate::{cross_product, TOL};

///////////////////////////////////////////////////////////////////////////////
// Touch / Contact

/// A point shared by two segments. `t` is the parameter along the first
/// segment and `u` along the second, both in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Touch {
  pub t: f64,
  pub u: f64,
  pub point: Point,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Contact {
  /// The segments meet in a single point. This includes touching endpoints.
  Crossing(Touch),
  /// The segments are collinear and share a stretch. The two touches are the
  /// ends of that stretch, ordered along the first segment.
  Overlap(Touch, Touch),
}

impl Contact {
  /// The touch closest to the start of the first segment.
  pub fn first(&self) -> &Touch {
    match self {
      Contact::Crossing(touch) => touch,
      Contact::Overlap(start, _) => start,
    }
  }

  pub fn touches(&self) -> Vec<Touch> {
    match *self {
      Contact::Crossing(touch) => vec![touch],
      Contact::Overlap(start, end) => vec![start, end],
    }
  }
}

///////////////////////////////////////////////////////////////////////////////
// Segment

#[derive(Debug, Clone, Copy)]
pub struct Segment<'a> {
  pub src: &'a Point,
  pub dst: &'a Point,
}

impl<'a> Segment<'a> {
  pub fn new(src: &'a Point, dst: &'a Point) -> Segment<'a> {
    Segment { src, dst }
  }

  pub fn direction(&self) -> Point {
    self.dst - self.src
  }

  pub fn is_degenerate(&self) -> bool {
    self.src == self.dst
  }

  /// Point at parameter `t`. The endpoints are returned as-is when `t` is
  /// within tolerance of 0 or 1.
  pub fn at(&self, t: f64) -> Point {
    if t <= TOL {
      *self.src
    } else if t >= 1.0 - TOL {
      *self.dst
    } else {
      self.src.lerp(self.dst, t)
    }
  }

  /// Where `self` and `other` meet, if anywhere. Parameters within [`TOL`] of
  /// `[0, 1]` count as on the segment, so touching endpoints are reported.
  /// Zero-length segments never meet anything.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use ringmesh::data::{Contact, Point, Segment};
  /// let (a, b) = (Point::new(0.0, 0.0, 0), Point::new(2.0, 2.0, 1));
  /// let (c, d) = (Point::new(0.0, 2.0, 2), Point::new(2.0, 0.0, 3));
  /// let contact = Segment::new(&a, &b).contact(&Segment::new(&c, &d)).unwrap();
  /// assert_eq!(contact.first().point, Point::new(1.0, 1.0, 0));
  /// ```
  pub fn contact(&self, other: &Segment<'_>) -> Option<Contact> {
    if self.is_degenerate() || other.is_degenerate() {
      return None;
    }
    let r = self.direction();
    let s = other.direction();
    let qp = other.src - self.src;
    let denom = cross_product(&r, &s);
    if denom.abs() < TOL {
      return self.collinear_contact(other, &r, &s, &qp);
    }
    let t = cross_product(&qp, &s) / denom;
    let u = cross_product(&qp, &r) / denom;
    if !on_unit(t) || !on_unit(u) {
      return None;
    }
    let (t, u) = (t.clamp(0.0, 1.0), u.clamp(0.0, 1.0));
    Some(Contact::Crossing(Touch {
      t,
      u,
      point: self.at(t),
    }))
  }

  // Parallel segments. They only meet if they lie on the same line.
  fn collinear_contact(
    &self,
    other: &Segment<'_>,
    r: &Point,
    s: &Point,
    qp: &Point,
  ) -> Option<Contact> {
    if cross_product(qp, r).abs() >= TOL {
      return None;
    }
    let rr = r.dot(r);
    let t0 = qp.dot(r) / rr;
    let t1 = (other.dst - self.src).dot(r) / rr;
    let lo = t0.min(t1).max(0.0);
    let hi = t0.max(t1).min(1.0);
    if lo > hi + TOL {
      return None;
    }
    let touch = |t: f64| {
      let point = self.at(t);
      let u = ((point - other.src).dot(s) / s.dot(s)).clamp(0.0, 1.0);
      Touch { t, u, point }
    };
    if hi - lo <= TOL {
      Some(Contact::Crossing(touch(lo)))
    } else {
      Some(Contact::Overlap(touch(lo), touch(hi)))
    }
  }
}

fn on_unit(t: f64) -> bool {
  (-TOL..=1.0 + TOL).contains(&t)
}

///////////////////////////////////////////////////////////////////////////////
// Tests
