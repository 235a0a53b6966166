pub mod intersection;
pub mod sampling;

#[doc(inline)]
pub use intersection::naive::{edge_crossings, first_legal_edge};

#[doc(inline)]
pub use sampling::sample_points;
