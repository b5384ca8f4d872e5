//! Two dimensional vector value type
//!
//! Length, distance, normalization and component-wise arithmetic,
//! every operation returns a new vector

#[macro_use]
pub mod vec_error;
pub mod vec_model;

pub use vec_error::{ErrorKind, VectorError};
pub use vec_model::{Vector2D, ZERO};
