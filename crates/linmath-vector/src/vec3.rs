use crate::DEGENERACY_EPSILON;

/// 3D vector (single precision).
///
/// Produced by the perspective and orthographic divides of [`crate::Vec4F32`] and
/// used as the Cartesian form of points and directions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vec3F32 {
    /// The x component.
    pub x: f32,
    /// The y component.
    pub y: f32,
    /// The z component.
    pub z: f32,
}

impl Vec3F32 {
    /// All zeros.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// All ones.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Unit vector along the x axis.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector along the y axis.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector along the z axis.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Create a new Vec3 from x, y, and z components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Create a Vec3 from an array.
    #[inline]
    pub const fn from_array(arr: [f32; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Convert to array.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Cross product, following the right-hand rule.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        let a: glam::Vec3 = self.into();
        let b: glam::Vec3 = rhs.into();
        Self::from(a.cross(b))
    }

    /// Scalar triple product `a · (b × c)`, the signed volume spanned by the three vectors.
    #[inline]
    pub fn triple_product(a: Self, b: Self, c: Self) -> f32 {
        a.dot(b.cross(c))
    }

    /// Returns the unit vector with the same direction.
    ///
    /// Vectors whose squared length is below [`DEGENERACY_EPSILON`] map to zero.
    pub fn normalized(self) -> Self {
        let len_sq = self.length_squared();
        if len_sq < DEGENERACY_EPSILON {
            return Self::ZERO;
        }
        self * len_sq.sqrt().recip()
    }

    /// In-place form of [`Self::normalized`].
    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Reflects the vector across the plane with the given normal.
    ///
    /// The normal does not need to be unit length. A degenerate normal leaves the
    /// vector unchanged.
    pub fn reflect(self, normal: Self) -> Self {
        if normal.length_squared() < DEGENERACY_EPSILON {
            return self;
        }
        let n = normal.normalized();
        self - n * (2.0 * self.dot(n))
    }

    /// Angle in radians between two vectors, 0 if either is degenerate.
    pub fn angle_between(self, other: Self) -> f32 {
        let len_product = (self.length_squared() * other.length_squared()).sqrt();
        if len_product < DEGENERACY_EPSILON {
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

    /// Projection of the vector onto `other`, zero if `other` is degenerate.
    pub fn project_onto(self, other: Self) -> Self {
        if other.length_squared() < DEGENERACY_EPSILON {
            return Self::ZERO;
        }
        let a: glam::Vec3 = self.into();
        let b: glam::Vec3 = other.into();
        Self::from(a.project_onto(b))
    }

    /// Rotates the vector by `angle` radians around `axis` (Rodrigues' rotation formula).
    ///
    /// A degenerate axis leaves the vector unchanged.
    pub fn rotated_around_axis(self, axis: Self, angle: f32) -> Self {
        if axis.length_squared() < DEGENERACY_EPSILON {
            return self;
        }
        let k = axis.normalized();
        let (sin_a, cos_a) = angle.sin_cos();
        self * cos_a + k.cross(self) * sin_a + k * (k.dot(self) * (1.0 - cos_a))
    }

    /// In-place form of [`Self::rotated_around_axis`].
    #[inline]
    pub fn rotate_around_axis(&mut self, axis: Self, angle: f32) {
        *self = self.rotated_around_axis(axis, angle);
    }

    /// Whether the two vectors are perpendicular.
    #[inline]
    pub fn is_orthogonal(self, other: Self) -> bool {
        self.dot(other).abs() < DEGENERACY_EPSILON
    }

    /// Whether the two vectors are parallel (or anti-parallel).
    #[inline]
    pub fn is_parallel(self, other: Self) -> bool {
        self.cross(other).length_squared() < DEGENERACY_EPSILON
    }

    /// Whether the three vectors lie in a common plane.
    #[inline]
    pub fn is_coplanar(a: Self, b: Self, c: Self) -> bool {
        Self::triple_product(a, b, c).abs() < DEGENERACY_EPSILON
    }
}

impl_glam_vector!(Vec3F32, glam::Vec3, [f32; 3], [x, y, z]);

#[cfg(feature = "approx")]
impl_approx_eq!(Vec3F32, [x, y, z]);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vec3_basic() {
        let v = Vec3F32::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
        assert_eq!(Vec3F32::default(), Vec3F32::ZERO);
    }

    #[test]
    fn test_vec3_arithmetic() {
        let mut v = Vec3F32::new(1.0, 2.0, 3.0);
        v += Vec3F32::ONE;
        assert_eq!(v, Vec3F32::new(2.0, 3.0, 4.0));
        v *= 2.0;
        assert_eq!(v, Vec3F32::new(4.0, 6.0, 8.0));
        v /= 4.0;
        assert_eq!(v, Vec3F32::new(1.0, 1.5, 2.0));
        v -= Vec3F32::new(1.0, 1.5, 2.0);
        assert_eq!(v, Vec3F32::ZERO);
        assert_eq!(-Vec3F32::X, Vec3F32::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_vec3_cross_right_handed() {
        assert_eq!(Vec3F32::X.cross(Vec3F32::Y), Vec3F32::Z);
        assert_eq!(Vec3F32::Y.cross(Vec3F32::Z), Vec3F32::X);
        assert_eq!(Vec3F32::Z.cross(Vec3F32::X), Vec3F32::Y);
        assert_eq!(Vec3F32::triple_product(Vec3F32::X, Vec3F32::Y, Vec3F32::Z), 1.0);
    }

    #[cfg(feature = "approx")]
    #[test]
    fn test_vec3_normalize() {
        let v = Vec3F32::new(3.0, 0.0, 4.0);
        assert_relative_eq!(v.length(), 5.0);
        assert_relative_eq!(v.normalized(), Vec3F32::new(0.6, 0.0, 0.8));
        assert_eq!(Vec3F32::ZERO.normalized(), Vec3F32::ZERO);

        let mut w = Vec3F32::new(0.0, 0.0, -2.0);
        w.normalize();
        assert_eq!(w, -Vec3F32::Z);
    }

    #[cfg(feature = "approx")]
    #[test]
    fn test_vec3_reflect() {
        let v = Vec3F32::new(1.0, -1.0, 0.0);
        assert_relative_eq!(v.reflect(Vec3F32::new(0.0, 2.0, 0.0)), Vec3F32::new(1.0, 1.0, 0.0));
        assert_eq!(v.reflect(Vec3F32::ZERO), v);
    }

    #[cfg(feature = "approx")]
    #[test]
    fn test_vec3_angle_and_projection() {
        assert_relative_eq!(
            Vec3F32::X.angle_between(Vec3F32::Y),
            std::f32::consts::FRAC_PI_2
        );
        assert_eq!(Vec3F32::X.angle_between(Vec3F32::ZERO), 0.0);

        let p = Vec3F32::new(2.0, 3.0, 0.0).project_onto(Vec3F32::new(5.0, 0.0, 0.0));
        assert_relative_eq!(p, Vec3F32::new(2.0, 0.0, 0.0));
        assert_eq!(Vec3F32::ONE.project_onto(Vec3F32::ZERO), Vec3F32::ZERO);
    }

    #[cfg(feature = "approx")]
    #[test]
    fn test_vec3_rotated_around_axis() {
        let v = Vec3F32::X.rotated_around_axis(Vec3F32::new(0.0, 0.0, 3.0), std::f32::consts::FRAC_PI_2);
        assert_relative_eq!(v, Vec3F32::Y, epsilon = 1e-6);
        assert_eq!(Vec3F32::X.rotated_around_axis(Vec3F32::ZERO, 1.0), Vec3F32::X);
    }

    #[test]
    fn test_vec3_axis_angles() {
        let v = Vec3F32::new(1.0, 1.0, 0.0);
        assert_relative_eq!(v.axis_angle_x(), std::f32::consts::FRAC_PI_4, epsilon = 1e-6);
        assert_relative_eq!(v.axis_angle_y(), std::f32::consts::FRAC_PI_4, epsilon = 1e-6);
        assert_relative_eq!(v.axis_angle_z(), std::f32::consts::FRAC_PI_2, epsilon = 1e-6);
        assert_relative_eq!((-Vec3F32::Z).axis_angle_z(), std::f32::consts::PI, epsilon = 1e-6);
        assert!(Vec3F32::ZERO.axis_angle_x().is_nan());
    }

    #[test]
    fn test_vec3_scalar_on_the_left() {
        assert_eq!(2.0 * Vec3F32::new(1.0, 2.0, 3.0), Vec3F32::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn test_vec3_predicates() {
        assert!(Vec3F32::X.is_orthogonal(Vec3F32::Z));
        assert!(Vec3F32::new(1.0, 2.0, 3.0).is_parallel(Vec3F32::new(-2.0, -4.0, -6.0)));
        assert!(!Vec3F32::X.is_parallel(Vec3F32::Y));
        assert!(Vec3F32::is_coplanar(
            Vec3F32::X,
            Vec3F32::Y,
            Vec3F32::new(1.0, 1.0, 0.0)
        ));
    }

    #[test]
    fn test_vec3_lerp_distance() {
        let a = Vec3F32::ZERO;
        let b = Vec3F32::new(2.0, 4.0, 6.0);
        assert_eq!(a.lerp(b, 0.5), Vec3F32::new(1.0, 2.0, 3.0));
        assert_relative_eq!(a.distance(Vec3F32::new(0.0, 3.0, 4.0)), 5.0);
    }

    #[test]
    fn test_vec3_conversion() {
        let v = Vec3F32::new(1.0, 2.0, 3.0);
        let glam_v: glam::Vec3 = v.into();
        let back: Vec3F32 = glam_v.into();
        assert_eq!(v, back);
    }
}
