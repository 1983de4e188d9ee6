//! 4x4 matrix (single precision, row-major).

use std::fmt;

use linmath_vector::{Vec3F32, Vec4F32};

use crate::{
    error::MatrixError,
    kernel::{Kernel, Rows},
};

/// 4x4 matrix (single precision).
///
/// Storage is row-major: `m[row][col]`. Vectors are columns multiplied on the
/// right, so `a * b * v` applies `b` first. For affine transforms the upper-left
/// 3x3 block holds the linear part and `m[0..3][3]` holds the translation.
///
/// The 32-byte alignment lets the vector-lane kernel load two rows per lane.
#[derive(Clone, Copy, PartialEq)]
#[repr(C, align(32))]
pub struct Mat4F32 {
    m: Rows,
}

impl Mat4F32 {
    /// All zeros.
    pub const ZERO: Self = Self { m: [[0.0; 4]; 4] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Create a new matrix from its rows.
    #[inline]
    pub const fn new(rows: [[f32; 4]; 4]) -> Self {
        Self { m: rows }
    }

    /// Create a new matrix from row vectors.
    #[inline]
    pub const fn from_rows(r0: Vec4F32, r1: Vec4F32, r2: Vec4F32, r3: Vec4F32) -> Self {
        Self::new([r0.to_array(), r1.to_array(), r2.to_array(), r3.to_array()])
    }

    /// Create a new matrix from a row-major array.
    pub fn from_row_major_array(arr: &[f32; 16]) -> Self {
        let mut m = [[0.0; 4]; 4];
        for (row, chunk) in m.iter_mut().zip(arr.chunks_exact(4)) {
            row.copy_from_slice(chunk);
        }
        Self::new(m)
    }

    /// Flatten into a row-major array.
    pub fn to_row_major_array(&self) -> [f32; 16] {
        let mut arr = [0.0; 16];
        for (chunk, row) in arr.chunks_exact_mut(4).zip(self.m.iter()) {
            chunk.copy_from_slice(row);
        }
        arr
    }

    /// The rows as nested arrays.
    #[inline]
    pub const fn to_rows_array(&self) -> [[f32; 4]; 4] {
        self.m
    }

    /// Returns the row at `index`.
    pub fn row(&self, index: usize) -> Result<Vec4F32, MatrixError> {
        self.m
            .get(index)
            .map(|r| Vec4F32::from_array(*r))
            .ok_or(MatrixError::IndexOutOfRange {
                row: index,
                col: 0,
            })
    }

    /// Returns the column at `index`.
    pub fn col(&self, index: usize) -> Result<Vec4F32, MatrixError> {
        if index >= 4 {
            return Err(MatrixError::IndexOutOfRange {
                row: 0,
                col: index,
            });
        }
        Ok(Vec4F32::new(
            self.m[0][index],
            self.m[1][index],
            self.m[2][index],
            self.m[3][index],
        ))
    }

    /// Reads the element at (`row`, `col`).
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfRange`] if either index is not below 4.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> Result<f32, MatrixError> {
        self.m
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .ok_or(MatrixError::IndexOutOfRange { row, col })
    }

    /// Mutable reference to the element at (`row`, `col`).
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfRange`] if either index is not below 4.
    #[inline]
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut f32, MatrixError> {
        self.m
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(MatrixError::IndexOutOfRange { row, col })
    }

    /// Writes `value` at (`row`, `col`).
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) -> Result<(), MatrixError> {
        *self.at_mut(row, col)? = value;
        Ok(())
    }

    /// Swaps rows and columns.
    pub fn transpose(&self) -> Self {
        let mut out = [[0.0; 4]; 4];
        for (r, row) in self.m.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                out[c][r] = v;
            }
        }
        Self::new(out)
    }

    /// Sum of the diagonal entries.
    #[inline]
    pub fn trace(&self) -> f32 {
        self.m[0][0] + self.m[1][1] + self.m[2][2] + self.m[3][3]
    }

    /// Transforms a point (`w = 1`), dividing by the resulting `w` when it is
    /// neither 0 nor 1.
    pub fn transform_point(&self, p: Vec3F32) -> Vec3F32 {
        let v = *self * Vec4F32::from_vec3(p, 1.0);
        if v.w == 0.0 || v.w == 1.0 {
            v.to_vec3_orthographic()
        } else {
            v.to_vec3_perspective_unit()
        }
    }

    /// Transforms a direction (`w = 0`); translation does not apply.
    #[inline]
    pub fn transform_vector(&self, d: Vec3F32) -> Vec3F32 {
        (*self * Vec4F32::from_vec3(d, 0.0)).to_vec3_orthographic()
    }
}

impl Default for Mat4F32 {
    /// The zero matrix.
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl std::ops::Index<(usize, usize)> for Mat4F32 {
    type Output = f32;

    /// # Panics
    ///
    /// Panics if either index is not below 4.
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        match self.m.get(row).and_then(|r| r.get(col)) {
            Some(v) => v,
            None => panic!("index ({row}, {col}) is out of range for a 4x4 matrix"),
        }
    }
}

impl std::ops::IndexMut<(usize, usize)> for Mat4F32 {
    /// # Panics
    ///
    /// Panics if either index is not below 4.
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        match self.m.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(v) => v,
            None => panic!("index ({row}, {col}) is out of range for a 4x4 matrix"),
        }
    }
}

impl From<[[f32; 4]; 4]> for Mat4F32 {
    #[inline]
    fn from(rows: [[f32; 4]; 4]) -> Self {
        Self::new(rows)
    }
}

impl From<Mat4F32> for [[f32; 4]; 4] {
    #[inline]
    fn from(m: Mat4F32) -> Self {
        m.m
    }
}

// glam stores columns; transposing the nested array converts between the two.
impl From<glam::Mat4> for Mat4F32 {
    #[inline]
    fn from(m: glam::Mat4) -> Self {
        Self::new(m.transpose().to_cols_array_2d())
    }
}

impl From<Mat4F32> for glam::Mat4 {
    #[inline]
    fn from(m: Mat4F32) -> Self {
        glam::Mat4::from_cols_array_2d(&m.m).transpose()
    }
}

// Matrix-matrix arithmetic
impl std::ops::Add for Mat4F32 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(Kernel::active().add(&self.m, &rhs.m))
    }
}

impl std::ops::Sub for Mat4F32 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(Kernel::active().sub(&self.m, &rhs.m))
    }
}

impl std::ops::Mul for Mat4F32 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(Kernel::active().matmul(&self.m, &rhs.m))
    }
}

impl std::ops::AddAssign for Mat4F32 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::ops::SubAssign for Mat4F32 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl std::ops::MulAssign for Mat4F32 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

// Matrix-scalar arithmetic
impl std::ops::Add<f32> for Mat4F32 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: f32) -> Self::Output {
        Self::new(Kernel::active().add_scalar(&self.m, rhs))
    }
}

impl std::ops::Sub<f32> for Mat4F32 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: f32) -> Self::Output {
        Self::new(Kernel::active().sub_scalar(&self.m, rhs))
    }
}

impl std::ops::Mul<f32> for Mat4F32 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        Self::new(Kernel::active().mul_scalar(&self.m, rhs))
    }
}

impl std::ops::AddAssign<f32> for Mat4F32 {
    #[inline]
    fn add_assign(&mut self, rhs: f32) {
        *self = *self + rhs;
    }
}

impl std::ops::SubAssign<f32> for Mat4F32 {
    #[inline]
    fn sub_assign(&mut self, rhs: f32) {
        *self = *self - rhs;
    }
}

impl std::ops::MulAssign<f32> for Mat4F32 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

// Matrix-vector multiplication, the vector is a column.
impl std::ops::Mul<Vec4F32> for Mat4F32 {
    type Output = Vec4F32;

    #[inline]
    fn mul(self, rhs: Vec4F32) -> Self::Output {
        let v = rhs.to_array();
        let [x, y, z, w] = self
            .m
            .map(|row| row[0] * v[0] + row[1] * v[1] + row[2] * v[2] + row[3] * v[3]);
        Vec4F32::new(x, y, z, w)
    }
}

impl fmt::Debug for Mat4F32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mat4F32").field("rows", &self.m).finish()
    }
}

/// One bracketed row per line. A precision given to the formatter applies to
/// every entry.
impl fmt::Display for Mat4F32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for [a, b, c, d] in self.m {
            match f.precision() {
                Some(p) => writeln!(f, "[{a:.p$}, {b:.p$}, {c:.p$}, {d:.p$}]")?,
                None => writeln!(f, "[{a}, {b}, {c}, {d}]")?,
            }
        }
        Ok(())
    }
}

#[cfg(feature = "approx")]
impl approx::AbsDiffEq for Mat4F32 {
    type Epsilon = f32;

    #[inline]
    fn default_epsilon() -> Self::Epsilon {
        f32::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.to_row_major_array()
            .iter()
            .zip(other.to_row_major_array().iter())
            .all(|(a, b)| approx::AbsDiffEq::abs_diff_eq(a, b, epsilon))
    }
}

#[cfg(feature = "approx")]
impl approx::RelativeEq for Mat4F32 {
    #[inline]
    fn default_max_relative() -> Self::Epsilon {
        f32::EPSILON
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.to_row_major_array()
            .iter()
            .zip(other.to_row_major_array().iter())
            .all(|(a, b)| approx::RelativeEq::relative_eq(a, b, epsilon, max_relative))
    }
}

#[cfg(feature = "approx")]
impl approx::UlpsEq for Mat4F32 {
    #[inline]
    fn default_max_ulps() -> u32 {
        4
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.to_row_major_array()
            .iter()
            .zip(other.to_row_major_array().iter())
            .all(|(a, b)| approx::UlpsEq::ulps_eq(a, b, epsilon, max_ulps))
    }
}
