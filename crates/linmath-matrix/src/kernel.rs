//! Arithmetic kernels backing the [`crate::Mat4F32`] operators.
//!
//! Every kernel evaluates the same expressions in the same order, so the
//! selected strategy never changes a result. The vector-lane kernel keeps
//! multiplication and addition as separate instructions for that reason.

use std::sync::OnceLock;

/// Row-major storage of a 4x4 matrix.
pub type Rows = [[f32; 4]; 4];

/// Strategy used for the elementwise and product arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kernel {
    /// Plain scalar loops, available everywhere.
    Scalar,
    /// 256-bit and 128-bit vector lanes via AVX.
    #[cfg(all(feature = "simd", any(target_arch = "x86", target_arch = "x86_64")))]
    Avx,
}

static ACTIVE_KERNEL: OnceLock<Kernel> = OnceLock::new();

impl Kernel {
    /// The kernel selected for this process.
    ///
    /// The choice is made on first use from the cargo features and the CPU.
    pub fn active() -> Kernel {
        *ACTIVE_KERNEL.get_or_init(|| {
            let kernel = Self::detect();
            log::debug!("selected {kernel:?} kernel for 4x4 matrix arithmetic");
            kernel
        })
    }

    #[cfg(all(feature = "simd", any(target_arch = "x86", target_arch = "x86_64")))]
    fn detect() -> Kernel {
        if is_x86_feature_detected!("avx") {
            Kernel::Avx
        } else {
            Kernel::Scalar
        }
    }

    #[cfg(not(all(feature = "simd", any(target_arch = "x86", target_arch = "x86_64"))))]
    fn detect() -> Kernel {
        Kernel::Scalar
    }

    /// Elementwise `a + b`.
    #[inline]
    pub fn add(self, a: &Rows, b: &Rows) -> Rows {
        match self {
            Kernel::Scalar => scalar::zip(a, b, |x, y| x + y),
            #[cfg(all(feature = "simd", any(target_arch = "x86", target_arch = "x86_64")))]
            Kernel::Avx => {
                if is_x86_feature_detected!("avx") {
                    unsafe { avx::add(a, b) }
                } else {
                    Kernel::Scalar.add(a, b)
                }
            }
        }
    }

    /// Elementwise `a - b`.
    #[inline]
    pub fn sub(self, a: &Rows, b: &Rows) -> Rows {
        match self {
            Kernel::Scalar => scalar::zip(a, b, |x, y| x - y),
            #[cfg(all(feature = "simd", any(target_arch = "x86", target_arch = "x86_64")))]
            Kernel::Avx => {
                if is_x86_feature_detected!("avx") {
                    unsafe { avx::sub(a, b) }
                } else {
                    Kernel::Scalar.sub(a, b)
                }
            }
        }
    }

    /// `a + s` broadcast to all sixteen entries.
    #[inline]
    pub fn add_scalar(self, a: &Rows, s: f32) -> Rows {
        match self {
            Kernel::Scalar => scalar::map(a, |x| x + s),
            #[cfg(all(feature = "simd", any(target_arch = "x86", target_arch = "x86_64")))]
            Kernel::Avx => {
                if is_x86_feature_detected!("avx") {
                    unsafe { avx::add_scalar(a, s) }
                } else {
                    Kernel::Scalar.add_scalar(a, s)
                }
            }
        }
    }

    /// `a - s` broadcast to all sixteen entries.
    #[inline]
    pub fn sub_scalar(self, a: &Rows, s: f32) -> Rows {
        match self {
            Kernel::Scalar => scalar::map(a, |x| x - s),
            #[cfg(all(feature = "simd", any(target_arch = "x86", target_arch = "x86_64")))]
            Kernel::Avx => {
                if is_x86_feature_detected!("avx") {
                    unsafe { avx::sub_scalar(a, s) }
                } else {
                    Kernel::Scalar.sub_scalar(a, s)
                }
            }
        }
    }

    /// `a * s` broadcast to all sixteen entries.
    #[inline]
    pub fn mul_scalar(self, a: &Rows, s: f32) -> Rows {
        match self {
            Kernel::Scalar => scalar::map(a, |x| x * s),
            #[cfg(all(feature = "simd", any(target_arch = "x86", target_arch = "x86_64")))]
            Kernel::Avx => {
                if is_x86_feature_detected!("avx") {
                    unsafe { avx::mul_scalar(a, s) }
                } else {
                    Kernel::Scalar.mul_scalar(a, s)
                }
            }
        }
    }

    /// Matrix product `a * b` with `out[r][c] = Σ_k a[r][k] * b[k][c]`.
    #[inline]
    pub fn matmul(self, a: &Rows, b: &Rows) -> Rows {
        match self {
            Kernel::Scalar => scalar::matmul(a, b),
            #[cfg(all(feature = "simd", any(target_arch = "x86", target_arch = "x86_64")))]
            Kernel::Avx => {
                if is_x86_feature_detected!("avx") {
                    unsafe { avx::matmul(a, b) }
                } else {
                    Kernel::Scalar.matmul(a, b)
                }
            }
        }
    }
}

mod scalar {
    use super::Rows;

    #[inline]
    pub(super) fn zip(a: &Rows, b: &Rows, op: impl Fn(f32, f32) -> f32) -> Rows {
        let mut out = [[0.0; 4]; 4];
        for (out_row, (a_row, b_row)) in out.iter_mut().zip(a.iter().zip(b.iter())) {
            for (o, (&x, &y)) in out_row.iter_mut().zip(a_row.iter().zip(b_row.iter())) {
                *o = op(x, y);
            }
        }
        out
    }

    #[inline]
    pub(super) fn map(a: &Rows, op: impl Fn(f32) -> f32) -> Rows {
        let mut out = [[0.0; 4]; 4];
        for (out_row, a_row) in out.iter_mut().zip(a.iter()) {
            for (o, &x) in out_row.iter_mut().zip(a_row.iter()) {
                *o = op(x);
            }
        }
        out
    }

    #[inline]
    pub(super) fn matmul(a: &Rows, b: &Rows) -> Rows {
        let mut out = [[0.0; 4]; 4];
        for (out_row, a_row) in out.iter_mut().zip(a.iter()) {
            for (c, o) in out_row.iter_mut().enumerate() {
                // left-to-right accumulation, matched by the vector-lane kernel
                *o = a_row[0] * b[0][c] + a_row[1] * b[1][c] + a_row[2] * b[2][c]
                    + a_row[3] * b[3][c];
            }
        }
        out
    }
}

#[cfg(all(feature = "simd", any(target_arch = "x86", target_arch = "x86_64")))]
mod avx {
    use super::Rows;

    #[cfg(target_arch = "x86")]
    use std::arch::x86::*;
    #[cfg(target_arch = "x86_64")]
    use std::arch::x86_64::*;

    // The matrix splits into two 8-lane halves: rows 0-1 and rows 2-3.
    macro_rules! lanes8_binary {
        ($name:ident, $op:ident) => {
            #[target_feature(enable = "avx")]
            pub(super) unsafe fn $name(a: &Rows, b: &Rows) -> Rows {
                let mut out = [[0.0f32; 4]; 4];
                let pa = a.as_ptr() as *const f32;
                let pb = b.as_ptr() as *const f32;
                let po = out.as_mut_ptr() as *mut f32;
                for half in [0, 8] {
                    let va = _mm256_loadu_ps(pa.add(half));
                    let vb = _mm256_loadu_ps(pb.add(half));
                    _mm256_storeu_ps(po.add(half), $op(va, vb));
                }
                out
            }
        };
    }

    macro_rules! lanes8_scalar {
        ($name:ident, $op:ident) => {
            #[target_feature(enable = "avx")]
            pub(super) unsafe fn $name(a: &Rows, s: f32) -> Rows {
                let mut out = [[0.0f32; 4]; 4];
                let pa = a.as_ptr() as *const f32;
                let po = out.as_mut_ptr() as *mut f32;
                let vs = _mm256_set1_ps(s);
                for half in [0, 8] {
                    let va = _mm256_loadu_ps(pa.add(half));
                    _mm256_storeu_ps(po.add(half), $op(va, vs));
                }
                out
            }
        };
    }

    lanes8_binary!(add, _mm256_add_ps);
    lanes8_binary!(sub, _mm256_sub_ps);
    lanes8_scalar!(add_scalar, _mm256_add_ps);
    lanes8_scalar!(sub_scalar, _mm256_sub_ps);
    lanes8_scalar!(mul_scalar, _mm256_mul_ps);

    /// Row-shuffle-multiply-accumulate product: every output row is the sum of the
    /// rows of `b` weighted by the broadcast entries of the matching row of `a`.
    #[target_feature(enable = "avx")]
    pub(super) unsafe fn matmul(a: &Rows, b: &Rows) -> Rows {
        let mut out = [[0.0f32; 4]; 4];
        let b0 = _mm_loadu_ps(b[0].as_ptr());
        let b1 = _mm_loadu_ps(b[1].as_ptr());
        let b2 = _mm_loadu_ps(b[2].as_ptr());
        let b3 = _mm_loadu_ps(b[3].as_ptr());

        for (out_row, a_row) in out.iter_mut().zip(a.iter()) {
            let ra = _mm_loadu_ps(a_row.as_ptr());
            let ax = _mm_shuffle_ps::<0x00>(ra, ra);
            let ay = _mm_shuffle_ps::<0x55>(ra, ra);
            let az = _mm_shuffle_ps::<0xAA>(ra, ra);
            let aw = _mm_shuffle_ps::<0xFF>(ra, ra);

            let mut acc = _mm_mul_ps(ax, b0);
            acc = _mm_add_ps(acc, _mm_mul_ps(ay, b1));
            acc = _mm_add_ps(acc, _mm_mul_ps(az, b2));
            acc = _mm_add_ps(acc, _mm_mul_ps(aw, b3));
            _mm_storeu_ps(out_row.as_mut_ptr(), acc);
        }
        out
    }
}
