//! Factories for affine transforms.
//!
//! All rotations follow the right-hand rule: a positive angle turns
//! counter-clockwise when looking from the positive axis towards the origin.

use crate::Mat4F32;

/// How the per-axis rotations of a composite rotation are chained.
///
/// Both conventions consume the same `(x, y, z)` angles; they differ only in
/// multiplication order, which matters once two or more angles are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationConvention {
    /// `R = Rz · Ry · Rx`: a vector is turned about X, then Y, then Z of the
    /// fixed frame. Read right to left this is the z-y'-x'' sequence about the
    /// moving frame.
    Intrinsic,
    /// `R = Rx · Ry · Rz`: the reverse chain, a vector is turned about Z, then
    /// Y, then X of the fixed frame.
    Extrinsic,
}

impl Mat4F32 {
    /// The identity transform.
    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// The all-zero matrix.
    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Translation by `(tx, ty, tz)`, stored in the last column.
    pub const fn translation(tx: f32, ty: f32, tz: f32) -> Self {
        Self::new([
            [1.0, 0.0, 0.0, tx],
            [0.0, 1.0, 0.0, ty],
            [0.0, 0.0, 1.0, tz],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Axis-aligned scaling, `diag(sx, sy, sz, 1)`.
    pub const fn scaling(sx: f32, sy: f32, sz: f32) -> Self {
        Self::new([
            [sx, 0.0, 0.0, 0.0],
            [0.0, sy, 0.0, 0.0],
            [0.0, 0.0, sz, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Same scale factor on every axis.
    #[inline]
    pub const fn uniform_scaling(s: f32) -> Self {
        Self::scaling(s, s, s)
    }

    /// Rotation about the X axis by `angle` radians.
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, -s, 0.0],
            [0.0, s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation about the Y axis by `angle` radians.
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            [c, 0.0, s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation about the Z axis by `angle` radians.
    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            [c, -s, 0.0, 0.0],
            [s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Composite rotation from up to three per-axis angles (radians).
    ///
    /// An absent angle contributes no factor. With zero angles the result is the
    /// identity, with one angle it is exactly that axis' elementary rotation, for
    /// either convention.
    pub fn rotation_euler(
        x: Option<f32>,
        y: Option<f32>,
        z: Option<f32>,
        convention: RotationConvention,
    ) -> Self {
        let factors = [
            x.map(Self::rotation_x),
            y.map(Self::rotation_y),
            z.map(Self::rotation_z),
        ];
        let present = factors.into_iter().flatten();
        let product = match convention {
            RotationConvention::Intrinsic => present.rev().reduce(|acc, r| acc * r),
            RotationConvention::Extrinsic => present.reduce(|acc, r| acc * r),
        };
        product.unwrap_or(Self::IDENTITY)
    }

    /// Intrinsic composite rotation, `Rz · Ry · Rx`.
    ///
    /// See [`RotationConvention::Intrinsic`].
    #[inline]
    pub fn rotation_axis_angle_intrinsic(x: Option<f32>, y: Option<f32>, z: Option<f32>) -> Self {
        Self::rotation_euler(x, y, z, RotationConvention::Intrinsic)
    }

    /// Extrinsic composite rotation, `Rx · Ry · Rz`.
    ///
    /// See [`RotationConvention::Extrinsic`].
    #[inline]
    pub fn rotation_axis_angle_extrinsic(x: Option<f32>, y: Option<f32>, z: Option<f32>) -> Self {
        Self::rotation_euler(x, y, z, RotationConvention::Extrinsic)
    }

    /// Model matrix `translation · rotation · scaling`: scale first, then rotate,
    /// then translate.
    #[inline]
    pub fn make_model_matrix(translation: Self, rotation: Self, scaling: Self) -> Self {
        translation * rotation * scaling
    }
}
