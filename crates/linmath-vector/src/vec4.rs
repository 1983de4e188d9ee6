use crate::Vec3F32;

/// 4D homogeneous vector (single precision).
///
/// A point has `w = 1`, a direction has `w = 0`. Any other `w` is a general
/// homogeneous coordinate that can be brought back to Cartesian space with
/// [`Vec4F32::to_vec3_perspective`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vec4F32 {
    /// The x component.
    pub x: f32,
    /// The y component.
    pub y: f32,
    /// The z component.
    pub z: f32,
    /// The w (homogeneous) component.
    pub w: f32,
}

impl Vec4F32 {
    /// All zeros.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// All ones.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Basis vector along x.
    pub const X: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// Basis vector along y.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);

    /// Basis vector along z.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);

    /// Basis vector along w.
    pub const W: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Create a new Vec4 from x, y, z, and w components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Create a Vec4 from a 3D vector and an explicit `w`.
    #[inline]
    pub const fn from_vec3(v: Vec3F32, w: f32) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    /// Homogeneous point (`w = 1`).
    #[inline]
    pub const fn point(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, 1.0)
    }

    /// Homogeneous direction (`w = 0`).
    #[inline]
    pub const fn direction(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, 0.0)
    }

    /// Create a Vec4 from an array.
    #[inline]
    pub const fn from_array(arr: [f32; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Convert to array.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Returns the unit-length vector, or zero for the zero vector.
    pub fn normalized(self) -> Self {
        let len_sq = self.length_squared();
        if len_sq == 0.0 {
            return Self::ZERO;
        }
        self * len_sq.sqrt().recip()
    }

    /// In-place form of [`Self::normalized`].
    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Angle in radians between two vectors, 0 if either has zero length.
    pub fn angle_between(self, other: Self) -> f32 {
        let len_product = (self.length_squared() * other.length_squared()).sqrt();
        if len_product == 0.0 {
            return 0.0;
        }
        (self.dot(other) / len_product).acos()
    }

    /// Angle between the vector and the x basis axis.
    #[inline]
    pub fn axis_angle_x(self) -> f32 {
        (self.x / self.length()).acos()
    }

    /// Angle between the vector and the y basis axis.
    #[inline]
    pub fn axis_angle_y(self) -> f32 {
        (self.y / self.length()).acos()
    }

    /// Angle between the vector and the z basis axis.
    #[inline]
    pub fn axis_angle_z(self) -> f32 {
        (self.z / self.length()).acos()
    }

    /// Angle between the vector and the w basis axis.
    #[inline]
    pub fn axis_angle_w(self) -> f32 {
        (self.w / self.length()).acos()
    }

    /// Projection onto `other`, zero if `other` has zero length.
    pub fn project_onto(self, other: Self) -> Self {
        if other.length_squared() == 0.0 {
            return Self::ZERO;
        }
        let a: glam::Vec4 = self.into();
        let b: glam::Vec4 = other.into();
        Self::from(a.project_onto(b))
    }

    /// Reflection across the hyperplane orthogonal to `normal`.
    ///
    /// The normal is normalized first; a zero normal returns the vector unchanged.
    pub fn reflect(self, normal: Self) -> Self {
        if normal.length_squared() == 0.0 {
            return self;
        }
        let n = normal.normalized();
        self - n * (2.0 * self.dot(n))
    }

    /// Drops `w` without dividing.
    #[inline]
    pub fn to_vec3_orthographic(self) -> Vec3F32 {
        Vec3F32::new(self.x, self.y, self.z)
    }

    /// Perspective divide scaled by `focal_length`: `xyz * focal_length / w`.
    ///
    /// Returns the zero vector when `w == 0`, i.e. for directions.
    pub fn to_vec3_perspective(self, focal_length: f32) -> Vec3F32 {
        if self.w == 0.0 {
            return Vec3F32::ZERO;
        }
        self.to_vec3_orthographic() * (focal_length / self.w)
    }

    /// Perspective divide with a unit focal length.
    #[inline]
    pub fn to_vec3_perspective_unit(self) -> Vec3F32 {
        self.to_vec3_perspective(1.0)
    }

    /// 4D ternary cross product: a vector orthogonal to `a`, `b` and `c`.
    ///
    /// Each component is the signed 3x3 minor obtained by striking that column
    /// from the 3x4 matrix with rows `a`, `b`, `c`.
    pub fn cross3(a: Self, b: Self, c: Self) -> Self {
        // 2x2 minors of the rows b and c
        let zw = b.z * c.w - c.z * b.w;
        let yw = b.y * c.w - c.y * b.w;
        let yz = b.y * c.z - c.y * b.z;
        let xw = b.x * c.w - c.x * b.w;
        let xz = b.x * c.z - c.x * b.z;
        let xy = b.x * c.y - c.x * b.y;

        Self::new(
            a.y * zw - a.z * yw + a.w * yz,
            -(a.x * zw - a.z * xw + a.w * xz),
            a.x * yw - a.y * xw + a.w * xy,
            -(a.x * yz - a.y * xz + a.z * xy),
        )
    }
}

impl_glam_vector!(Vec4F32, glam::Vec4, [f32; 4], [x, y, z, w]);

#[cfg(feature = "approx")]
impl_approx_eq!(Vec4F32, [x, y, z, w]);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_vec4_basic() {
        let v = Vec4F32::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
        assert_eq!(v.w, 4.0);
        assert_eq!(Vec4F32::from_vec3(Vec3F32::new(1.0, 2.0, 3.0), 4.0), v);
        assert_eq!(Vec4F32::point(1.0, 2.0, 3.0).w, 1.0);
        assert_eq!(Vec4F32::direction(1.0, 2.0, 3.0).w, 0.0);
    }

    #[test]
    fn test_vec4_from_array() {
        let v = Vec4F32::from_array([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_vec4_arithmetic() {
        let a = Vec4F32::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4F32::ONE;
        assert_eq!(a + b, Vec4F32::new(2.0, 3.0, 4.0, 5.0));
        assert_eq!(a - b, Vec4F32::new(0.0, 1.0, 2.0, 3.0));
        assert_eq!(a * 2.0, Vec4F32::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(a / 2.0, Vec4F32::new(0.5, 1.0, 1.5, 2.0));

        let mut c = a;
        c += b;
        c -= b;
        c *= 3.0;
        c /= 3.0;
        assert_eq!(c, a);
    }

    #[test]
    fn test_vec4_divide_by_zero_propagates() {
        let v = Vec4F32::new(1.0, -1.0, 0.0, 2.0) / 0.0;
        assert_eq!(v.x, f32::INFINITY);
        assert_eq!(v.y, f32::NEG_INFINITY);
        assert!(v.z.is_nan());
    }

    #[cfg(feature = "approx")]
    #[test]
    fn test_vec4_normalize() {
        let v = Vec4F32::new(1.0, 1.0, 1.0, 1.0).normalized();
        assert_relative_eq!(v.length(), 1.0);
        assert_relative_eq!(v, Vec4F32::new(0.5, 0.5, 0.5, 0.5));
        assert_eq!(Vec4F32::ZERO.normalized(), Vec4F32::ZERO);

        let mut w = Vec4F32::new(0.0, 0.0, 0.0, 5.0);
        w.normalize();
        assert_eq!(w, Vec4F32::W);
    }

    #[test]
    fn test_vec4_angles() {
        assert_relative_eq!(
            Vec4F32::X.angle_between(Vec4F32::W),
            std::f32::consts::FRAC_PI_2
        );
        assert_eq!(Vec4F32::X.angle_between(Vec4F32::ZERO), 0.0);
        assert_relative_eq!(Vec4F32::Y.axis_angle_y(), 0.0);
        assert_relative_eq!(Vec4F32::Y.axis_angle_x(), std::f32::consts::FRAC_PI_2);
        assert!(Vec4F32::ZERO.axis_angle_z().is_nan());
    }

    #[test]
    fn test_vec4_project_reflect() {
        let v = Vec4F32::new(3.0, 4.0, 0.0, 1.0);
        assert_eq!(v.project_onto(Vec4F32::X * 2.0), Vec4F32::new(3.0, 0.0, 0.0, 0.0));
        assert_eq!(v.project_onto(Vec4F32::ZERO), Vec4F32::ZERO);
        assert_eq!(v.reflect(Vec4F32::X), Vec4F32::new(-3.0, 4.0, 0.0, 1.0));
        assert_eq!(v.reflect(Vec4F32::ZERO), v);
    }

    #[test]
    fn test_vec4_lerp_distance() {
        let a = Vec4F32::ZERO;
        let b = Vec4F32::new(2.0, 2.0, 2.0, 2.0);
        assert_eq!(a.lerp(b, 0.25), Vec4F32::new(0.5, 0.5, 0.5, 0.5));
        assert_relative_eq!(a.distance(b), 4.0);
        assert_eq!(0.5 * b, Vec4F32::ONE);
    }

    #[test]
    fn test_vec4_to_vec3() {
        let v = Vec4F32::new(2.0, 4.0, 6.0, 2.0);
        assert_eq!(v.to_vec3_orthographic(), Vec3F32::new(2.0, 4.0, 6.0));
        assert_eq!(v.to_vec3_perspective_unit(), Vec3F32::new(1.0, 2.0, 3.0));
        assert_eq!(v.to_vec3_perspective(2.0), Vec3F32::new(2.0, 4.0, 6.0));
        assert_eq!(
            Vec4F32::direction(1.0, 2.0, 3.0).to_vec3_perspective_unit(),
            Vec3F32::ZERO
        );
    }

    #[test]
    fn test_vec4_cross3_orthogonal() {
        let a = Vec4F32::new(1.0, 2.0, 0.5, -1.0);
        let b = Vec4F32::new(0.0, 1.0, 3.0, 2.0);
        let c = Vec4F32::new(-2.0, 0.5, 1.0, 1.0);
        let n = Vec4F32::cross3(a, b, c);
        assert_abs_diff_eq!(n.dot(a), 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(n.dot(b), 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(n.dot(c), 0.0, epsilon = 1e-5);

        // basis vectors map onto the remaining basis vector
        assert_eq!(
            Vec4F32::cross3(Vec4F32::X, Vec4F32::Y, Vec4F32::Z),
            Vec4F32::new(0.0, 0.0, 0.0, -1.0)
        );
    }

    #[test]
    fn test_vec4_conversion() {
        let v = Vec4F32::new(1.0, 2.0, 3.0, 4.0);
        let glam_v: glam::Vec4 = v.into();
        let back: Vec4F32 = glam_v.into();
        assert_eq!(v, back);
    }
}
