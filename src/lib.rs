//! 2D vectors: construction from endpoints or length and angle, the usual
//! pairwise products, and drawing with length, endpoint and angle labels.

pub mod vec_core;

pub use vec_core::error::{PlotError, VectorError, ViewerError};
pub use vec_core::ops::{determinant, difference, equals, length, scalar_product, EPSILON};
pub use vec_core::plot::{Plot, PlotConfig};
pub use vec_core::point::Point;
pub use vec_core::render::{render, wedge_span, DrawCall, DrawLog, Surface};
pub use vec_core::scene::{Item, Scene};
pub use vec_core::vector::{Vector, VectorParams};
