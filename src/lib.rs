// #![deny(warnings)]
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Planar ring kernel for mesh preparation.
//!
//! A [`Ring`](data::Ring) is an ordered, optionally cyclic sequence of
//! [`Point`](data::Point)s. Once closed, every node is linked to its left and
//! right neighbour and all mutations keep that chain intact.
//!
//! ```rust
//! # use ringmesh::data::{Point, Ring};
//! # use ringmesh::Orientation;
//! let mut ring: Ring = vec![
//!   Point::new(0.0, 0.0, 0),
//!   Point::new(1.0, 0.0, 1),
//!   Point::new(1.0, 2.0, 2),
//!   Point::new(0.0, 2.0, 3),
//! ]
//! .into();
//! ring.close();
//! assert_eq!(ring.area(), Some(2.0));
//! assert_eq!(ring.orientation(), Some(Orientation::CounterClockWise));
//! assert_eq!(ring.is_convex(), Some(true));
//! ```
use std::path::PathBuf;

pub mod algorithms;
pub mod data;
pub mod io;
mod orientation;

pub use orientation::{are_collinear, cross_product, Orientation};

use data::Neighbor;

/// Two coordinates closer than this are considered equal.
pub const TOL: f64 = 1e-10;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("You cannot add anymore points! This ring is closed!")]
  RingClosed,
  #[error("Ring is not closed")]
  RingNotClosed,
  #[error("The node to the {0} has already been set!")]
  LinkAlreadySet(Neighbor),
  #[error("Index {index} out of range for ring of length {len}")]
  IndexOutOfRange { index: usize, len: usize },
  /// A node's links disagree with its neighbours in boundary order.
  #[error("Node at position {index} is linked inconsistently")]
  BrokenLink { index: usize },
  #[error("{} doesn't exist!", path.display())]
  NotFound { path: PathBuf },
  #[error("{} already exists!", path.display())]
  AlreadyExists { path: PathBuf },
  #[error("{}: {source}", path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
  #[error("{}:{line}: {reason}", path.display())]
  Parse {
    path: PathBuf,
    line: usize,
    reason: String,
  },
}

#[cfg(test)]
pub mod testing;
