mod node;
pub(crate) mod point;
pub mod ring;
mod segment;

pub use node::*;
pub use point::Point;
pub use segment::*;

#[doc(inline)]
pub use crate::data::ring::{Edges, Iter, Ring};
