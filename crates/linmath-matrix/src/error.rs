use thiserror::Error;

/// An error type for the 4x4 matrix operations.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MatrixError {
    /// Row or column index outside `[0, 4)`.
    #[error("Index ({row}, {col}) is out of range for a 4x4 matrix")]
    IndexOutOfRange {
        /// The requested row.
        row: usize,
        /// The requested column.
        col: usize,
    },

    /// The determinant magnitude is below the invertibility threshold.
    #[error("Matrix is not invertible (determinant {determinant:e})")]
    NotInvertible {
        /// The determinant computed by the adjugate path.
        determinant: f32,
    },
}
