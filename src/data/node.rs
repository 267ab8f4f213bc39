use std::fmt;

use super::Point;
use crate::Error;

/// Index of a node inside the arena of the ring that owns it. Links between
/// nodes are `NodeId`s and carry no ownership.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

/// Selects one of the two neighbour slots of a [`Node`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Neighbor {
  Left,
  Right,
}

impl Neighbor {
  #[must_use]
  pub fn opposite(self) -> Neighbor {
    match self {
      Neighbor::Left => Neighbor::Right,
      Neighbor::Right => Neighbor::Left,
    }
  }
}

impl fmt::Display for Neighbor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Neighbor::Left => write!(f, "left"),
      Neighbor::Right => write!(f, "right"),
    }
  }
}

/// A point admitted into a ring, plus links to its left and right neighbours.
///
/// A set link can't be overwritten. It has to be cleared first:
///
/// ```rust
/// # use ringmesh::data::{Node, NodeId, Point};
/// let mut node = Node::new(Point::new(0.0, 0.0, 0));
/// node.set_left(NodeId(1)).unwrap();
/// assert!(node.set_left(NodeId(2)).is_err());
/// node.clear_left();
/// node.set_left(NodeId(2)).unwrap();
/// assert_eq!(node.left(), Some(NodeId(2)));
/// ```
#[derive(Debug, Clone)]
pub struct Node {
  value: Point,
  left: Option<NodeId>,
  right: Option<NodeId>,
}

impl Node {
  pub fn new(value: Point) -> Node {
    Node {
      value,
      left: None,
      right: None,
    }
  }

  pub fn value(&self) -> &Point {
    &self.value
  }

  pub fn left(&self) -> Option<NodeId> {
    self.left
  }

  pub fn right(&self) -> Option<NodeId> {
    self.right
  }

  pub fn get(&self, side: Neighbor) -> Option<NodeId> {
    match side {
      Neighbor::Left => self.left,
      Neighbor::Right => self.right,
    }
  }

  pub fn set(&mut self, side: Neighbor, node: NodeId) -> Result<(), Error> {
    let slot = self.slot_mut(side);
    if slot.is_some() {
      return Err(Error::LinkAlreadySet(side));
    }
    *slot = Some(node);
    Ok(())
  }

  pub fn set_left(&mut self, node: NodeId) -> Result<(), Error> {
    self.set(Neighbor::Left, node)
  }

  pub fn set_right(&mut self, node: NodeId) -> Result<(), Error> {
    self.set(Neighbor::Right, node)
  }

  pub fn clear(&mut self, side: Neighbor) {
    *self.slot_mut(side) = None;
  }

  pub fn clear_left(&mut self) {
    self.clear(Neighbor::Left)
  }

  pub fn clear_right(&mut self) {
    self.clear(Neighbor::Right)
  }

  pub fn has(&self, side: Neighbor) -> bool {
    self.get(side).is_some()
  }

  pub fn has_left(&self) -> bool {
    self.left.is_some()
  }

  pub fn has_right(&self) -> bool {
    self.right.is_some()
  }

  pub fn is_linked(&self) -> bool {
    self.has_left() && self.has_right()
  }

  // Clear, then set. Only the owning ring rebinds links.
  pub(crate) fn rebind(&mut self, side: Neighbor, node: NodeId) {
    self.clear(side);
    *self.slot_mut(side) = Some(node);
  }

  pub(crate) fn unlink(&mut self) {
    self.left = None;
    self.right = None;
  }

  pub(crate) fn swap_neighbors(&mut self) {
    std::mem::swap(&mut self.left, &mut self.right);
  }

  // Used when the arena is compacted: links to `removed` are dropped and
  // links past it shift down by one.
  pub(crate) fn forget(&mut self, removed: NodeId) {
    for slot in [&mut self.left, &mut self.right] {
      *slot = match *slot {
        Some(id) if id == removed => None,
        Some(NodeId(idx)) if idx > removed.0 => Some(NodeId(idx - 1)),
        other => other,
      };
    }
  }

  fn slot_mut(&mut self, side: Neighbor) -> &mut Option<NodeId> {
    match side {
      Neighbor::Left => &mut self.left,
      Neighbor::Right => &mut self.right,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use claims::{assert_matches, assert_none, assert_ok, assert_some_eq};

  fn sample_nodes() -> Vec<Node> {
    vec![
      Node::new(Point::new(-0.02, 0.03, 0)),
      Node::new(Point::new(-0.04, 0.06, 1)),
      Node::new(Point::new(-0.06, 0.09, 2)),
    ]
  }

  #[test]
  fn new_node_is_unlinked() {
    for node in sample_nodes() {
      assert_none!(node.left());
      assert_none!(node.right());
      assert!(!node.has_left());
      assert!(!node.has_right());
      assert!(!node.is_linked());
    }
  }

  #[test]
  fn set_neighbors_cyclically() {
    let mut nodes = sample_nodes();
    let n = nodes.len();
    for (nth, node) in nodes.iter_mut().enumerate() {
      assert_ok!(node.set_left(NodeId((nth + n - 1) % n)));
      assert_ok!(node.set_right(NodeId((nth + 1) % n)));
    }
    assert_some_eq!(nodes[0].left(), NodeId(2));
    assert_some_eq!(nodes[0].right(), NodeId(1));
    assert_some_eq!(nodes[2].right(), NodeId(0));
    assert!(nodes.iter().all(Node::is_linked));
  }

  #[test]
  fn occupied_slot_is_rejected() {
    let mut node = Node::new(Point::new(0.0, 0.0, 0));
    assert_ok!(node.set_left(NodeId(1)));
    assert_ok!(node.set_right(NodeId(2)));
    let err = node.set_left(NodeId(3)).unwrap_err();
    assert_matches!(err, Error::LinkAlreadySet(Neighbor::Left));
    assert_eq!(err.to_string(), "The node to the left has already been set!");
    let err = node.set_right(NodeId(4)).unwrap_err();
    assert_eq!(err.to_string(), "The node to the right has already been set!");
    // Nothing was overwritten.
    assert_some_eq!(node.left(), NodeId(1));
    assert_some_eq!(node.right(), NodeId(2));
  }

  #[test]
  fn clear_is_idempotent() {
    let mut node = Node::new(Point::new(0.0, 0.0, 0));
    node.clear_left();
    node.clear_right();
    assert_ok!(node.set(Neighbor::Left, NodeId(5)));
    assert!(node.has(Neighbor::Left));
    node.clear(Neighbor::Left);
    node.clear(Neighbor::Left);
    assert!(!node.has(Neighbor::Left));
    assert_ok!(node.set(Neighbor::Left, NodeId(6)));
    assert_some_eq!(node.get(Neighbor::Left), NodeId(6));
  }

  #[test]
  fn forget_shifts_links() {
    let mut node = Node::new(Point::new(0.0, 0.0, 0));
    assert_ok!(node.set_left(NodeId(3)));
    assert_ok!(node.set_right(NodeId(1)));
    node.forget(NodeId(1));
    assert_some_eq!(node.left(), NodeId(2));
    assert_none!(node.right());
  }

  #[test]
  fn swap_neighbors() {
    let mut node = Node::new(Point::new(0.0, 0.0, 0));
    assert_ok!(node.set_left(NodeId(3)));
    node.swap_neighbors();
    assert_none!(node.left());
    assert_some_eq!(node.right(), NodeId(3));
    assert_eq!(Neighbor::Left.opposite(), Neighbor::Right);
  }
}
