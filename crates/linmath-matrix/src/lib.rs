#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

pub mod angle;

/// Error types for the matrix module.
pub mod error;

pub mod kernel;

mod inverse;
mod mat4;
mod transforms;

pub use angle::{degrees_to_radians, radians_to_degrees};
pub use error::MatrixError;
pub use inverse::INVERTIBILITY_EPSILON;
pub use kernel::Kernel;
pub use mat4::Mat4F32;
pub use transforms::RotationConvention;

pub use linmath_vector::{Vec3F32, Vec4F32};
