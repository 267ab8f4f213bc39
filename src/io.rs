//! Plain-text storage for named rings.
//!
//! A ring file is a sequence of blocks. Each block is a line holding the ring
//! name, followed by one `x,y,id` line per point:
//!
//! ```text
//! foo
//! 0,0,0
//! 1,0,1
//! 1,1,2
//! ```
//!
//! Closure is not stored. Rings are read back open.
use std::path::Path;

use crate::data::Ring;
use crate::Error;

mod reader;
mod writer;

pub use reader::Reader;
pub use writer::Writer;

pub trait ReadRings {
  fn read(&self, path: &Path) -> Result<RingMap, Error>;
}

pub trait WriteRings {
  fn write(&self, path: &Path, rings: &RingMap) -> Result<(), Error>;
}

///////////////////////////////////////////////////////////////////////////////
// RingMap

/// Rings keyed by name, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RingMap {
  entries: Vec<(String, Ring)>,
}

impl RingMap {
  pub fn new() -> RingMap {
    RingMap::default()
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Insert a ring under `name`. An existing ring with that name is replaced
  /// in place and returned.
  pub fn insert(&mut self, name: impl Into<String>, ring: Ring) -> Option<Ring> {
    let name = name.into();
    match self.position(&name) {
      Some(at) => Some(std::mem::replace(&mut self.entries[at].1, ring)),
      None => {
        self.entries.push((name, ring));
        None
      }
    }
  }

  pub fn get(&self, name: &str) -> Option<&Ring> {
    let at = self.position(name)?;
    Some(&self.entries[at].1)
  }

  pub fn get_mut(&mut self, name: &str) -> Option<&mut Ring> {
    let at = self.position(name)?;
    Some(&mut self.entries[at].1)
  }

  pub fn contains(&self, name: &str) -> bool {
    self.position(name).is_some()
  }

  pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
    self.entries.iter().map(|(name, _)| name.as_str())
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &Ring)> + '_ {
    self.entries.iter().map(|(name, ring)| (name.as_str(), ring))
  }

  pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Ring)> + '_ {
    self
      .entries
      .iter_mut()
      .map(|(name, ring)| (name.as_str(), ring))
  }

  pub fn retain(&mut self, mut keep: impl FnMut(&str, &Ring) -> bool) {
    self.entries.retain(|(name, ring)| keep(name, ring));
  }

  fn position(&self, name: &str) -> Option<usize> {
    self.entries.iter().position(|(other, _)| other == name)
  }
}

impl<S: Into<String>> FromIterator<(S, Ring)> for RingMap {
  fn from_iter<I: IntoIterator<Item = (S, Ring)>>(iter: I) -> RingMap {
    let mut map = RingMap::new();
    for (name, ring) in iter {
      map.insert(name, ring);
    }
    map
  }
}

impl IntoIterator for RingMap {
  type Item = (String, Ring);
  type IntoIter = std::vec::IntoIter<(String, Ring)>;

  fn into_iter(self) -> Self::IntoIter {
    self.entries.into_iter()
  }
}
