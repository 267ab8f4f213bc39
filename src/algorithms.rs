pub mod intersection;

#[doc(inline)]
pub use intersection::{self_intersections, split_ring, SelfIntersection};
