use claims::debug_assert_ok;
use std::fmt;
use std::ops::Index;
use tracing::{debug, trace};

use crate::algorithms::intersection::{self, SelfIntersection};
use crate::data::{Neighbor, Node, NodeId, Point};
use crate::{are_collinear, cross_product, Error, Orientation};

mod iter;
pub use iter::*;

/// Ordered sequence of points describing the boundary of a polygon.
///
/// A ring starts out open and grows with [`Ring::add_point`]. [`Ring::close`]
/// links every node to its neighbours; from then on area, orientation and
/// convexity are defined, and mutations keep the circular chain intact.
///
/// Nodes live in an arena (`nodes`, indexed by [`NodeId`]) and `order` gives
/// the boundary order. Position `i` in `order` is what `ring[i]` refers to.
#[derive(Debug, Clone, Default)]
pub struct Ring {
  pub(crate) nodes: Vec<Node>, // NodeId -> Node
  pub(crate) order: Vec<NodeId>,
}

impl Ring {
  pub fn new() -> Ring {
    Ring::default()
  }

  pub fn len(&self) -> usize {
    self.order.len()
  }

  pub fn is_empty(&self) -> bool {
    self.order.is_empty()
  }

  /// A ring is closed when it has more than two nodes and every node is linked
  /// on both sides.
  pub fn is_closed(&self) -> bool {
    self.len() > 2 && self.nodes.iter().all(Node::is_linked)
  }

  /// Append a point. Fails if the ring is closed.
  pub fn add_point(&mut self, point: Point) -> Result<(), Error> {
    if self.is_closed() {
      return Err(Error::RingClosed);
    }
    let id = self.push_node(point);
    self.order.push(id);
    Ok(())
  }

  /// Link every node to its neighbours in boundary order, wrapping around at
  /// the ends. Rings with fewer than three points are left alone. Closing a
  /// closed ring relinks it identically.
  pub fn close(&mut self) {
    let len = self.len();
    if len < 3 {
      return;
    }
    for node in self.nodes.iter_mut() {
      node.unlink();
    }
    for pos in 0..len {
      self.connect(self.order[pos], self.order[(pos + 1) % len]);
    }
    debug!(len, "closed ring");
    debug_assert_ok!(self.validate());
  }

  /// $O(n)$ Position of the first point equal to `point`, within tolerance.
  pub fn find_point(&self, point: &Point) -> Option<usize> {
    self.iter().position(|pt| pt == point)
  }

  pub fn contains(&self, point: &Point) -> bool {
    self.find_point(point).is_some()
  }

  pub fn get(&self, at: usize) -> Option<&Point> {
    self.node(at).map(Node::value)
  }

  pub fn point(&self, at: usize) -> Result<&Point, Error> {
    self.get(at).ok_or(Error::IndexOutOfRange {
      index: at,
      len: self.len(),
    })
  }

  pub fn node(&self, at: usize) -> Option<&Node> {
    let id = self.order.get(at)?;
    Some(&self.nodes[id.0])
  }

  /// Point linked on `side` of the node at position `at`.
  pub fn neighbor(&self, at: usize, side: Neighbor) -> Option<&Point> {
    let id = self.node(at)?.get(side)?;
    Some(self.nodes[id.0].value())
  }

  pub fn iter(&self) -> Iter<'_> {
    Iter {
      ring: self,
      iter: self.order.iter(),
    }
  }

  /// Edges in boundary order. An open ring is treated as a polyline and has
  /// no closing edge.
  pub fn edges(&self) -> Edges<'_> {
    let end = if self.is_closed() {
      self.len()
    } else {
      self.len().saturating_sub(1)
    };
    Edges {
      ring: self,
      at: 0,
      end,
    }
  }

  /// $O(n)$ Signed area from the shoelace formula. `None` unless closed.
  pub fn area(&self) -> Option<f64> {
    if !self.is_closed() {
      return None;
    }
    let twice: f64 = self
      .edges()
      .map(|edge| cross_product(edge.src, edge.dst))
      .sum();
    Some(0.5 * twice)
  }

  /// Counter-clockwise for positive area, clockwise for negative area. `None`
  /// when open or when the area is exactly zero.
  pub fn orientation(&self) -> Option<Orientation> {
    self.area().and_then(Orientation::from_signed_area)
  }

  /// $O(n)$ `None` unless closed.
  ///
  /// Every vertex turn is classified as counter-clockwise or not. A turn with
  /// a cross product of exactly zero counts as not counter-clockwise, so a
  /// counter-clockwise ring with a straight vertex is reported as not convex.
  pub fn is_convex(&self) -> Option<bool> {
    if !self.is_closed() {
      return None;
    }
    let len = self.len();
    let mut turns = (0..len).map(|i| {
      let p1 = &self[i];
      let p2 = &self[(i + 1) % len];
      let p3 = &self[(i + 2) % len];
      cross_product(&(p1 - p2), &(p1 - p3)) > 0.0
    });
    let first = turns.next()?;
    Some(turns.all(|ccw| ccw == first))
  }

  /// Insert a point at position `at`, shifting later points right. `at` may
  /// equal the length. In a closed ring the new node is spliced between its
  /// predecessor and successor.
  pub fn insert_point(&mut self, point: Point, at: usize) -> Result<(), Error> {
    let len = self.len();
    if at > len {
      return Err(Error::IndexOutOfRange { index: at, len });
    }
    let closed = self.is_closed();
    let id = self.push_node(point);
    if closed {
      let prev = self.order[(at + len - 1) % len];
      let next = self.order[at % len];
      self.order.insert(at, id);
      self.connect(prev, id);
      self.connect(id, next);
    } else {
      self.order.insert(at, id);
    }
    trace!(at, closed, "inserted point");
    debug_assert_ok!(self.validate());
    Ok(())
  }

  /// Remove and return the point at position `at`. In a closed ring the
  /// predecessor and successor are linked to each other first. A closed ring
  /// that drops to two points is unlinked, as it can no longer be closed.
  pub fn delete_point(&mut self, at: usize) -> Result<Point, Error> {
    let len = self.len();
    if at >= len {
      return Err(Error::IndexOutOfRange { index: at, len });
    }
    let closed = self.is_closed();
    if closed {
      let prev = self.order[(at + len - 1) % len];
      let next = self.order[(at + 1) % len];
      self.connect(prev, next);
    }
    let id = self.order.remove(at);
    let node = self.remove_node(id);
    if closed && self.len() < 3 {
      for node in self.nodes.iter_mut() {
        node.unlink();
      }
    }
    trace!(at, closed, "deleted point");
    debug_assert_ok!(self.validate());
    Ok(*node.value())
  }

  /// $O(n)$ Remove points that are collinear with their neighbours and return
  /// how many were removed.
  ///
  /// This is a single left-to-right pass: the triple starting at each original
  /// position is tested using the nearest points that are still in the ring,
  /// and its middle point is removed if the three are collinear. A removal
  /// changes the triples of both neighbours; a neighbour the pass has already
  /// visited is tested again on the spot. Removal stops when three points
  /// remain. A closed ring is relinked afterwards; an open ring stays open.
  ///
  /// Every surviving point has been tested against its final neighbours, so a
  /// second call removes nothing, even when the tolerance makes collinearity
  /// depend on scale.
  pub fn remove_collinear(&mut self) -> usize {
    let len = self.len();
    if len < 3 {
      return 0;
    }
    let closed = self.is_closed();
    let mut prev: Vec<usize> = (0..len).map(|i| (i + len - 1) % len).collect();
    let mut next: Vec<usize> = (0..len).map(|i| (i + 1) % len).collect();
    let mut visited = vec![false; len];
    let mut removed = vec![false; len];
    let mut remaining = len;
    for start in 0..len {
      let middle = (start + 1) % len;
      visited[middle] = true;
      let mut pending = vec![middle];
      while let Some(middle) = pending.pop() {
        if remaining <= 3 {
          break;
        }
        if removed[middle] {
          continue;
        }
        let (before, after) = (prev[middle], next[middle]);
        if are_collinear(&self[before], &self[middle], &self[after]) {
          next[before] = after;
          prev[after] = before;
          removed[middle] = true;
          remaining -= 1;
          // Predecessor first.
          pending.extend([after, before].into_iter().filter(|&i| visited[i]));
        }
      }
    }
    if remaining == len {
      return 0;
    }
    let kept: Vec<Node> = self
      .iter()
      .zip(removed.iter())
      .filter(|(_, gone)| !**gone)
      .map(|(pt, _)| Node::new(*pt))
      .collect();
    self.order = (0..kept.len()).map(NodeId).collect();
    self.nodes = kept;
    if closed {
      self.close();
    }
    debug!(removed = len - remaining, len = remaining, "removed collinear points");
    len - remaining
  }

  /// Reverse the boundary order and swap every node's left and right link.
  /// Does nothing unless the ring is closed.
  pub fn reverse_orientation(&mut self) {
    if !self.is_closed() {
      return;
    }
    self.order.reverse();
    for node in self.nodes.iter_mut() {
      node.swap_neighbors();
    }
    debug_assert_ok!(self.validate());
  }

  /// $O(n^2)$ Pairs of non-adjacent edges that meet. See
  /// [`intersection::self_intersections`].
  pub fn find_self_intersections(&self) -> Vec<SelfIntersection> {
    intersection::self_intersections(self)
  }

  /// $O(n^2)$ Split a closed ring into rings without self-intersections. See
  /// [`intersection::split_ring`].
  pub fn split_ring(&self) -> Result<Vec<Ring>, Error> {
    intersection::split_ring(self)
  }

  /// Check that the ring is either completely unlinked or that every node is
  /// linked to its neighbours in boundary order.
  pub fn validate(&self) -> Result<(), Error> {
    if self.nodes.iter().all(|node| !node.has_left() && !node.has_right()) {
      return Ok(());
    }
    let len = self.len();
    for (pos, id) in self.order.iter().enumerate() {
      let node = &self.nodes[id.0];
      let left = self.order[(pos + len - 1) % len];
      let right = self.order[(pos + 1) % len];
      if node.left() != Some(left) || node.right() != Some(right) {
        return Err(Error::BrokenLink { index: pos });
      }
    }
    Ok(())
  }

  fn push_node(&mut self, point: Point) -> NodeId {
    let id = NodeId(self.nodes.len());
    self.nodes.push(Node::new(point));
    id
  }

  // Drop a node from the arena. Links to it are cleared and ids past it shift
  // down by one. The caller removes it from `order` first.
  fn remove_node(&mut self, id: NodeId) -> Node {
    let node = self.nodes.remove(id.0);
    for other in self.nodes.iter_mut() {
      other.forget(id);
    }
    for other in self.order.iter_mut() {
      if other.0 > id.0 {
        other.0 -= 1;
      }
    }
    node
  }

  // a -> b
  fn connect(&mut self, a: NodeId, b: NodeId) {
    self.link(a, Neighbor::Right, b);
  }

  // `b` goes on `side` of `a`, and `a` on the opposite side of `b`.
  fn link(&mut self, a: NodeId, side: Neighbor, b: NodeId) {
    self.nodes[a.0].rebind(side, b);
    self.nodes[b.0].rebind(side.opposite(), a);
  }

  fn matches_at(&self, at: usize, other: &Ring, other_at: usize) -> bool {
    self[at] == other[other_at]
      && [Neighbor::Left, Neighbor::Right]
        .iter()
        .all(|&side| self.neighbor(at, side) == other.neighbor(other_at, side))
  }
}

impl Index<usize> for Ring {
  type Output = Point;

  /// # Panics
  ///
  /// Panics if `at` is out of range.
  fn index(&self, at: usize) -> &Point {
    self.nodes[self.order[at].0].value()
  }
}

/// Rings are equal if one is a rotation of the other: same points in the same
/// direction, with equal neighbours. A ring and its reverse are not equal
/// unless the point sequence is a palindrome.
impl PartialEq for Ring {
  fn eq(&self, other: &Ring) -> bool {
    if self.len() != other.len() {
      return false;
    }
    let len = self.len();
    if len == 0 {
      return true;
    }
    (0..len)
      .filter(|&offset| other[offset] == self[0])
      .any(|offset| (0..len).all(|k| self.matches_at(k, other, (offset + k) % len)))
  }
}

impl<'a> IntoIterator for &'a Ring {
  type Item = &'a Point;
  type IntoIter = Iter<'a>;

  fn into_iter(self) -> Iter<'a> {
    self.iter()
  }
}

impl FromIterator<Point> for Ring {
  fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Ring {
    let nodes: Vec<Node> = iter.into_iter().map(Node::new).collect();
    Ring {
      order: (0..nodes.len()).map(NodeId).collect(),
      nodes,
    }
  }
}

impl From<Vec<Point>> for Ring {
  fn from(points: Vec<Point>) -> Ring {
    points.into_iter().collect()
  }
}

impl fmt::Display for Ring {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fn describe(point: Option<&Point>) -> String {
      point.map_or_else(|| "None".to_string(), Point::to_string)
    }
    writeln!(f, "Ring(")?;
    writeln!(f, "\tnodes=[")?;
    for at in 0..self.len() {
      writeln!(
        f,
        "\t\tNode(value={}, left={}, right={}),",
        self[at],
        describe(self.neighbor(at, Neighbor::Left)),
        describe(self.neighbor(at, Neighbor::Right)),
      )?;
    }
    writeln!(f, "\t]")?;
    write!(f, ")")
  }
}
