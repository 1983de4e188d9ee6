#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use linmath_vector as vector;

#[doc(inline)]
pub use linmath_matrix as matrix;
