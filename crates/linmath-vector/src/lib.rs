#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Generates the glam-backed part of a plain vector struct: conversions, the
/// metric operations and the arithmetic operators.
///
/// Every operation converts into the matching glam type and back, so the
/// results follow glam exactly.
macro_rules! impl_glam_vector {
    ($name:ident, $glam_type:ty, $array:ty, [$($field:ident),+]) => {
        impl $name {
            /// Dot product.
            #[inline]
            pub fn dot(self, rhs: Self) -> f32 {
                let a: $glam_type = self.into();
                let b: $glam_type = rhs.into();
                a.dot(b)
            }

            /// Squared Euclidean length.
            #[inline]
            pub fn length_squared(self) -> f32 {
                let v: $glam_type = self.into();
                v.length_squared()
            }

            /// Euclidean length.
            #[inline]
            pub fn length(self) -> f32 {
                let v: $glam_type = self.into();
                v.length()
            }

            /// Euclidean distance to `other`.
            #[inline]
            pub fn distance(self, other: Self) -> f32 {
                let a: $glam_type = self.into();
                let b: $glam_type = other.into();
                a.distance(b)
            }

            /// Linear interpolation towards `other`; `t = 0` yields `self`, `t = 1` yields `other`.
            #[inline]
            pub fn lerp(self, other: Self, t: f32) -> Self {
                let a: $glam_type = self.into();
                let b: $glam_type = other.into();
                Self::from(a.lerp(b, t))
            }
        }

        // Conversions to and from the underlying glam type.
        impl From<$glam_type> for $name {
            #[inline]
            fn from(v: $glam_type) -> Self {
                Self {
                    $($field: v.$field),+
                }
            }
        }

        impl From<$name> for $glam_type {
            #[inline]
            fn from(v: $name) -> Self {
                <$glam_type>::new($(v.$field),+)
            }
        }

        // Conversions to and from arrays.
        impl From<$array> for $name {
            #[inline]
            fn from(arr: $array) -> Self {
                Self::from_array(arr)
            }
        }

        impl From<$name> for $array {
            #[inline]
            fn from(v: $name) -> Self {
                v.to_array()
            }
        }

        // Arithmetic operations implemented via glam.
        impl std::ops::Add for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self::Output {
                let a: $glam_type = self.into();
                let b: $glam_type = rhs.into();
                Self::from(a + b)
            }
        }

        impl std::ops::Sub for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self::Output {
                let a: $glam_type = self.into();
                let b: $glam_type = rhs.into();
                Self::from(a - b)
            }
        }

        impl std::ops::Mul<f32> for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: f32) -> Self::Output {
                let a: $glam_type = self.into();
                Self::from(a * rhs)
            }
        }

        impl std::ops::Mul<$name> for f32 {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: $name) -> Self::Output {
                let b: $glam_type = rhs.into();
                $name::from(self * b)
            }
        }

        impl std::ops::Div<f32> for $name {
            type Output = Self;

            #[inline]
            fn div(self, rhs: f32) -> Self::Output {
                let a: $glam_type = self.into();
                Self::from(a / rhs)
            }
        }

        impl std::ops::Neg for $name {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self::Output {
                let a: $glam_type = self.into();
                Self::from(-a)
            }
        }

        impl std::ops::AddAssign for $name {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl std::ops::SubAssign for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl std::ops::MulAssign<f32> for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: f32) {
                *self = *self * rhs;
            }
        }

        impl std::ops::DivAssign<f32> for $name {
            #[inline]
            fn div_assign(&mut self, rhs: f32) {
                *self = *self / rhs;
            }
        }
    };
}

/// Generates the `approx` trait impls for a plain vector struct.
///
/// The comparison is component-wise over the listed fields, mirroring how the
/// scalar `f32` impls from `approx` behave.
#[cfg(feature = "approx")]
macro_rules! impl_approx_eq {
    ($name:ident, [$($field:ident),+]) => {
        impl approx::AbsDiffEq for $name {
            type Epsilon = f32;

            #[inline]
            fn default_epsilon() -> Self::Epsilon {
                f32::EPSILON
            }

            #[inline]
            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                $(approx::AbsDiffEq::abs_diff_eq(&self.$field, &other.$field, epsilon))&&+
            }
        }

        impl approx::RelativeEq for $name {
            #[inline]
            fn default_max_relative() -> Self::Epsilon {
                f32::EPSILON
            }

            #[inline]
            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                $(approx::RelativeEq::relative_eq(
                    &self.$field,
                    &other.$field,
                    epsilon,
                    max_relative,
                ))&&+
            }
        }

        impl approx::UlpsEq for $name {
            #[inline]
            fn default_max_ulps() -> u32 {
                4
            }

            #[inline]
            fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
                $(approx::UlpsEq::ulps_eq(&self.$field, &other.$field, epsilon, max_ulps))&&+
            }
        }
    };
}

/// 3D vector (single precision).
pub mod vec3;

/// 4D homogeneous vector (single precision).
pub mod vec4;

pub use vec3::Vec3F32;
pub use vec4::Vec4F32;

/// Tolerance of the degeneracy checks of [`Vec3F32`].
///
/// Compared against squared lengths when normalizing, and against the products
/// evaluated by the geometric predicates.
pub const DEGENERACY_EPSILON: f32 = 1e-8;
