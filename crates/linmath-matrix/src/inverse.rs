//! Determinant and adjugate-based inverse.

use crate::{error::MatrixError, Mat4F32};

/// Absolute determinant magnitude below which [`Mat4F32::inverse`] refuses to invert.
pub const INVERTIBILITY_EPSILON: f32 = 1e-8;

// Index of a column pair inside the array returned by `pair_minors`.
const P23: usize = 0;
const P13: usize = 1;
const P12: usize = 2;
const P03: usize = 3;
const P02: usize = 4;
const P01: usize = 5;

/// The six 2x2 determinants formed by two rows and every pair of columns.
#[inline]
fn pair_minors(upper: [f32; 4], lower: [f32; 4]) -> [f32; 6] {
    let det2 = |i: usize, j: usize| upper[i] * lower[j] - lower[i] * upper[j];
    [
        det2(2, 3),
        det2(1, 3),
        det2(1, 2),
        det2(0, 3),
        det2(0, 2),
        det2(0, 1),
    ]
}

/// 3x3 minor with column `col` struck out, expanded along `row` against the
/// 2x2 determinants of the two rows below it.
#[inline]
fn minor3(row: [f32; 4], minors: &[f32; 6], col: usize) -> f32 {
    let (entries, pairs) = match col {
        0 => ([row[1], row[2], row[3]], [P23, P13, P12]),
        1 => ([row[0], row[2], row[3]], [P23, P03, P02]),
        2 => ([row[0], row[1], row[3]], [P13, P03, P01]),
        _ => ([row[0], row[1], row[2]], [P12, P02, P01]),
    };
    entries[0] * minors[pairs[0]] - entries[1] * minors[pairs[1]] + entries[2] * minors[pairs[2]]
}

/// Adjugate of `m` together with the determinant expanded along its first row.
fn adjugate(m: &[[f32; 4]; 4]) -> ([[f32; 4]; 4], f32) {
    let lower23 = pair_minors(m[2], m[3]);
    let lower13 = pair_minors(m[1], m[3]);
    let lower12 = pair_minors(m[1], m[2]);

    // Striking source row j leaves the expansion row and the minors of the
    // remaining two rows.
    let struck = [
        (m[1], &lower23),
        (m[0], &lower23),
        (m[0], &lower13),
        (m[0], &lower12),
    ];

    // adj[i][j] = (-1)^(i+j) * minor(j, i)
    let mut adj = [[0.0f32; 4]; 4];
    for (j, (row, minors)) in struck.iter().enumerate() {
        for (i, adj_row) in adj.iter_mut().enumerate() {
            let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
            adj_row[j] = sign * minor3(*row, minors, i);
        }
    }

    let det = m[0][0] * adj[0][0] + m[0][1] * adj[1][0] + m[0][2] * adj[2][0]
        + m[0][3] * adj[3][0];
    (adj, det)
}

impl Mat4F32 {
    /// Determinant by cofactor expansion along the first row.
    ///
    /// Evaluated in double precision to limit cancellation in invertibility checks.
    pub fn determinant(&self) -> f64 {
        let m = self.to_rows_array().map(|row| row.map(f64::from));

        // 2x2 determinants of the bottom two rows
        let d23 = m[2][2] * m[3][3] - m[2][3] * m[3][2];
        let d13 = m[2][1] * m[3][3] - m[2][3] * m[3][1];
        let d12 = m[2][1] * m[3][2] - m[2][2] * m[3][1];
        let d03 = m[2][0] * m[3][3] - m[2][3] * m[3][0];
        let d02 = m[2][0] * m[3][2] - m[2][2] * m[3][0];
        let d01 = m[2][0] * m[3][1] - m[2][1] * m[3][0];

        m[0][0] * (m[1][1] * d23 - m[1][2] * d13 + m[1][3] * d12)
            - m[0][1] * (m[1][0] * d23 - m[1][2] * d03 + m[1][3] * d02)
            + m[0][2] * (m[1][0] * d13 - m[1][1] * d03 + m[1][3] * d01)
            - m[0][3] * (m[1][0] * d12 - m[1][1] * d02 + m[1][2] * d01)
    }

    /// Inverse by the adjugate method.
    ///
    /// The determinant is recomputed in single precision from the same cofactors
    /// that populate the adjugate, independently of [`Mat4F32::determinant`].
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotInvertible`] if `|det| < INVERTIBILITY_EPSILON`.
    pub fn inverse(&self) -> Result<Self, MatrixError> {
        let (adj, det) = adjugate(&self.to_rows_array());

        if det.abs() < INVERTIBILITY_EPSILON {
            log::debug!("refusing to invert matrix with determinant {det:e}");
            return Err(MatrixError::NotInvertible { determinant: det });
        }

        let inv_det = 1.0 / det;
        Ok(Mat4F32::new(adj.map(|row| row.map(|v| v * inv_det))))
    }

    /// Like [`Mat4F32::inverse`], discarding the error.
    #[inline]
    pub fn try_inverse(&self) -> Option<Self> {
        self.inverse().ok()
    }
}
