use ordered_float::OrderedFloat;
use tracing::debug;

use crate::data::{Contact, Point, Ring, Segment};
use crate::Error;

/// Two non-adjacent edges of a ring that meet. Edge `i` runs from `ring[i]`
/// to `ring[i + 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelfIntersection {
  pub edges: (usize, usize),
  pub point: Point,
}

/// Find every pair of non-adjacent edges that meet, including pairs that only
/// touch at a shared vertex. An open ring is treated as a polyline without a
/// closing edge.
///
/// Each pair is reported once with `edges.0 < edges.1`. A collinear overlap is
/// reported at the end of the overlap closest to the start of `edges.0`. The
/// reported points are new points with ids `-1, -2, ...` in report order.
///
/// # Time complexity
/// $O(n^2)$
///
/// # Examples
///
/// ```rust
/// # use ringmesh::data::{Point, Ring};
/// let mut bowtie: Ring = vec![
///   Point::new(0.0, 0.0, 0),
///   Point::new(2.0, 2.0, 1),
///   Point::new(2.0, 0.0, 2),
///   Point::new(0.0, 2.0, 3),
/// ]
/// .into();
/// bowtie.close();
/// let found = bowtie.find_self_intersections();
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].edges, (0, 2));
/// assert_eq!(found[0].point, Point::new(1.0, 1.0, -1));
/// ```
pub fn self_intersections(ring: &Ring) -> Vec<SelfIntersection> {
  contacts(ring)
    .into_iter()
    .enumerate()
    .map(|(nth, (edges, contact))| SelfIntersection {
      edges,
      point: contact.first().point.with_id(generated_id(nth)),
    })
    .collect()
}

/// Split a closed ring at its self-intersections.
///
/// Every contact point is inserted into both edges it lies on, then the
/// refined boundary is walked once. Whenever the walk returns to a point it
/// has already visited, the loop since that visit is cut off as a piece. What
/// is left at the end is the last piece. Pieces with fewer than three points
/// are dropped and the rest are returned closed.
///
/// Every edge of the refined boundary ends up in exactly one piece, so the
/// signed areas of the pieces add up to the signed area of the ring.
///
/// # Time complexity
/// $O(n^2)$
pub fn split_ring(ring: &Ring) -> Result<Vec<Ring>, Error> {
  if !ring.is_closed() {
    return Err(Error::RingNotClosed);
  }
  let boundary = refine(ring);
  let mut pieces: Vec<Vec<Point>> = Vec::new();
  let mut stack: Vec<Point> = Vec::with_capacity(boundary.len());
  for point in boundary {
    match stack.iter().position(|seen| *seen == point) {
      Some(at) => {
        let mut piece = vec![stack[at]];
        piece.extend(stack.split_off(at + 1));
        pieces.push(piece);
      }
      None => stack.push(point),
    }
  }
  pieces.push(stack);

  let rings: Vec<Ring> = pieces
    .into_iter()
    .filter(|piece| piece.len() >= 3)
    .map(|piece| {
      let mut ring = Ring::from(piece);
      ring.close();
      ring
    })
    .collect();
  debug!(len = ring.len(), pieces = rings.len(), "split ring");
  Ok(rings)
}

fn generated_id(nth: usize) -> i64 {
  -(nth as i64) - 1
}

fn contacts(ring: &Ring) -> Vec<((usize, usize), Contact)> {
  let edges: Vec<Segment<'_>> = ring.edges().collect();
  non_adjacent_pairs(edges.len(), ring.is_closed())
    .filter_map(|(a, b)| Some(((a, b), edges[a].contact(&edges[b])?)))
    .collect()
}

fn non_adjacent_pairs(n: usize, closed: bool) -> impl Iterator<Item = (usize, usize)> {
  (0..n)
    .flat_map(move |a| (a + 2..n).map(move |b| (a, b)))
    .filter(move |&(a, b)| !(closed && a == 0 && b == n - 1))
}

// Ring points in order, with contact points inserted into the edges they lie
// on. Points already at an edge end, or repeated, are left out.
fn refine(ring: &Ring) -> Vec<Point> {
  let len = ring.len();
  let mut stops: Vec<Vec<(f64, Point)>> = vec![Vec::new(); len];
  let mut generated = 0;
  for ((a, b), contact) in contacts(ring) {
    for touch in contact.touches() {
      let point = touch.point.with_id(generated_id(generated));
      generated += 1;
      stops[a].push((touch.t, point));
      stops[b].push((touch.u, point));
    }
  }

  let mut boundary = Vec::with_capacity(len + generated);
  for (at, mut edge_stops) in stops.into_iter().enumerate() {
    let dst = ring[(at + 1) % len];
    boundary.push(ring[at]);
    edge_stops.sort_by_key(|(t, _)| OrderedFloat(*t));
    for (_, point) in edge_stops {
      if point == dst || boundary.last() == Some(&point) {
        continue;
      }
      boundary.push(point);
    }
  }
  boundary
}
