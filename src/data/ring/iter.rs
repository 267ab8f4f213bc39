use super::Ring;
use crate::data::{NodeId, Segment};

/// Points of a ring in stored order. Links are not followed.
pub struct Iter<'a> {
  pub(crate) ring: &'a Ring,
  pub(crate) iter: std::slice::Iter<'a, NodeId>,
}

impl<'a> Iterator for Iter<'a> {
  type Item = &'a crate::data::Point;

  fn next(&mut self) -> Option<Self::Item> {
    let id = self.iter.next()?;
    Some(self.ring.nodes[id.0].value())
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    self.iter.size_hint()
  }
}

impl ExactSizeIterator for Iter<'_> {}

impl DoubleEndedIterator for Iter<'_> {
  fn next_back(&mut self) -> Option<Self::Item> {
    let id = self.iter.next_back()?;
    Some(self.ring.nodes[id.0].value())
  }
}

/// Edge `i` runs from `ring[i]` to `ring[i + 1]`. A closed ring also yields
/// the closing edge from the last point back to the first.
pub struct Edges<'a> {
  pub(crate) ring: &'a Ring,
  pub(crate) at: usize,
  pub(crate) end: usize,
}

impl<'a> Iterator for Edges<'a> {
  type Item = Segment<'a>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.at >= self.end {
      return None;
    }
    let len = self.ring.len();
    let edge = Segment::new(&self.ring[self.at], &self.ring[(self.at + 1) % len]);
    self.at += 1;
    Some(edge)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let len = self.end.saturating_sub(self.at);
    (len, Some(len))
  }
}

impl ExactSizeIterator for Edges<'_> {}
