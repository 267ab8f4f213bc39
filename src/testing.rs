// Strategies for:
//  * points
//  * rings
// A Strategy is a way to generate a shrinkable value.
use crate::data::{Point, Ring};

use core::ops::Range;
use proptest::arbitrary::*;
use proptest::collection::*;
use proptest::prelude::*;
use proptest::strategy::*;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

///////////////////////////////////////////////////////////////////////////////
// Arbitrary point

impl Arbitrary for Point {
  type Strategy = BoxedStrategy<Point>;
  type Parameters = ();
  fn arbitrary_with(_params: ()) -> Self::Strategy {
    any_point().boxed()
  }
}

pub fn any_point() -> impl Strategy<Value = Point> {
  (-1e6..1e6, -1e6..1e6, -1000i64..1000).prop_map(Point::from)
}

// Integer coordinates in `-r..=r`. Exact arithmetic on these keeps the
// tolerance out of the way.
pub fn grid_point(r: i8) -> impl Strategy<Value = Point> {
  (-r..=r, -r..=r, 0i64..1000)
    .prop_map(|(x, y, id)| Point::new(f64::from(x), f64::from(y), id))
}

///////////////////////////////////////////////////////////////////////////////
// Arbitrary rings

const GRID: i8 = 6;

// Pairwise distinct grid points in random order, ids matching positions.
fn distinct_grid_points(len: Range<usize>) -> impl Strategy<Value = Vec<Point>> {
  btree_set((-GRID..=GRID, -GRID..=GRID), len)
    .prop_map(|set| set.into_iter().collect::<Vec<_>>())
    .prop_shuffle()
    .prop_map(|coords| {
      coords
        .into_iter()
        .enumerate()
        .map(|(id, (x, y))| Point::new(f64::from(x), f64::from(y), id as i64))
        .collect()
    })
}

/// Open ring of pairwise distinct grid points.
pub fn any_ring(len: Range<usize>) -> impl Strategy<Value = Ring> {
  distinct_grid_points(len).prop_map(Ring::from)
}

/// Closed ring of pairwise distinct grid points. Lengths below three are
/// raised to three.
pub fn any_closed_ring(len: Range<usize>) -> impl Strategy<Value = Ring> {
  let len = len.start.max(3)..len.end.max(4);
  any_ring(len).prop_map(|mut ring| {
    ring.close();
    ring
  })
}

// Grid point scaled by a power of ten and nudged by less than the tolerance.
// Mixed scales make tolerance collinearity disagree with exact collinearity.
fn noisy_point() -> impl Strategy<Value = (f64, f64)> {
  (-GRID..=GRID, -GRID..=GRID, -3i32..=6, -1e-11..1e-11).prop_map(|(x, y, exp, nudge)| {
    let scale = 10f64.powi(exp);
    (f64::from(x) * scale + nudge, f64::from(y) * scale)
  })
}

/// Ring of mixed-scale points, open or closed. Points may repeat.
pub fn any_noisy_ring(len: Range<usize>) -> impl Strategy<Value = Ring> {
  (vec(noisy_point(), len), any::<bool>()).prop_map(|(coords, closed)| {
    let mut ring: Ring = coords
      .into_iter()
      .enumerate()
      .map(|(id, (x, y))| Point::new(x, y, id as i64))
      .collect();
    if closed {
      ring.close();
    }
    ring
  })
}

/// Closed, counter-clockwise, regular polygon with a random radius and
/// rotation.
pub fn any_convex_ring(len: Range<usize>) -> impl Strategy<Value = Ring> {
  (len, any::<u64>()).prop_map(|(n, seed)| {
    let rng = &mut rand::rngs::SmallRng::seed_from_u64(seed);
    let n = n.max(3);
    let radius: f64 = rng.gen_range(1.0..1000.0);
    let offset: f64 = rng.gen_range(0.0..TAU);
    let mut ring: Ring = (0..n)
      .map(|i| {
        let angle = offset + TAU * i as f64 / n as f64;
        Point::new(radius * angle.cos(), radius * angle.sin(), i as i64)
      })
      .collect();
    ring.close();
    ring
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::Orientation;

  use test_strategy::proptest;

  #[proptest]
  fn grid_points_are_integral(#[strategy(grid_point(3))] pt: Point) {
    assert_eq!(pt.x().fract(), 0.0);
    assert!(pt.x().abs() <= 3.0 && pt.y().abs() <= 3.0);
  }

  #[proptest]
  fn rings_have_distinct_points(#[strategy(any_ring(0..20))] ring: Ring) {
    for (nth, pt) in ring.iter().enumerate() {
      assert_eq!(ring.find_point(pt), Some(nth));
      assert_eq!(pt.id(), nth as i64);
    }
  }

  #[proptest]
  fn closed_rings_are_closed(#[strategy(any_closed_ring(0..20))] ring: Ring) {
    assert!(ring.is_closed());
    assert!(ring.validate().is_ok());
  }

  #[proptest]
  fn convex_rings_are_convex(#[strategy(any_convex_ring(3..40))] ring: Ring) {
    assert_eq!(ring.is_convex(), Some(true));
    assert_eq!(ring.orientation(), Some(Orientation::CounterClockWise));
  }

  #[proptest]
  fn arbitrary_points_are_finite(pt: Point) {
    assert!(pt.x().is_finite() && pt.y().is_finite());
  }
}
