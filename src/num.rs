use core::fmt;

// Minimal float trait for the generic transforms (no_std, math through libm)
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + core::ops::Add<Output = Self>
    + core::ops::Sub<Output = Self>
    + core::ops::Mul<Output = Self>
    + core::ops::Div<Output = Self>
    + core::ops::Neg<Output = Self>
    + Send
    + Sync
    + 'static
{
    fn zero() -> Self;
    fn one() -> Self;
    fn from_i32(x: i32) -> Self;
    /// Attempt to convert a `usize` into the floating-point type.
    /// Returns `None` if the value cannot be represented exactly.
    fn from_usize(x: usize) -> Option<Self>;
    fn abs(self) -> Self;
    fn hypot(self, other: Self) -> Self;
    fn atan2(self, other: Self) -> Self;
    fn sin_cos(self) -> (Self, Self);
    fn pi() -> Self;
}

impl Float for f32 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn from_i32(x: i32) -> Self {
        x as f32
    }
    fn from_usize(x: usize) -> Option<Self> {
        const MAX_EXACT: u64 = 1 << 24;
        if (x as u64) < MAX_EXACT {
            Some(x as f32)
        } else {
            None
        }
    }
    fn abs(self) -> Self {
        libm::fabsf(self)
    }
    fn hypot(self, other: Self) -> Self {
        libm::hypotf(self, other)
    }
    fn atan2(self, other: Self) -> Self {
        libm::atan2f(self, other)
    }
    fn sin_cos(self) -> (Self, Self) {
        libm::sincosf(self)
    }
    fn pi() -> Self {
        core::f32::consts::PI
    }
}

impl Float for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn from_i32(x: i32) -> Self {
        x as f64
    }
    fn from_usize(x: usize) -> Option<Self> {
        const MAX_EXACT: u64 = 1 << 53;
        if (x as u64) < MAX_EXACT {
            Some(x as f64)
        } else {
            None
        }
    }
    fn abs(self) -> Self {
        libm::fabs(self)
    }
    fn hypot(self, other: Self) -> Self {
        libm::hypot(self, other)
    }
    fn atan2(self, other: Self) -> Self {
        libm::atan2(self, other)
    }
    fn sin_cos(self) -> (Self, Self) {
        libm::sincos(self)
    }
    fn pi() -> Self {
        core::f64::consts::PI
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Complex<T: Float> {
    pub re: T,
    pub im: T,
}

impl<T: Float> Complex<T> {
    pub fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
    pub fn zero() -> Self {
        Self {
            re: T::zero(),
            im: T::zero(),
        }
    }
    pub fn one() -> Self {
        Self {
            re: T::one(),
            im: T::zero(),
        }
    }
    /// `exp(i·theta)` as a unit complex number.
    #[inline(always)]
    pub fn expi(theta: T) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self { re: cos, im: sin }
    }
    #[inline(always)]
    pub fn conj(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }
    #[inline(always)]
    pub fn scale(self, k: T) -> Self {
        Self {
            re: self.re * k,
            im: self.im * k,
        }
    }
    /// Magnitude `sqrt(re² + im²)`, computed without intermediate overflow.
    pub fn norm(self) -> T {
        self.re.hypot(self.im)
    }
    /// Squared magnitude.
    pub fn norm_sqr(self) -> T {
        self.re * self.re + self.im * self.im
    }
    /// Argument `atan2(im, re)` in `[-π, π]`.
    pub fn arg(self) -> T {
        self.im.atan2(self.re)
    }
    /// Component-wise closeness check, used by tests and the reference comparisons.
    pub fn approx_eq(self, other: Self, tol: T) -> bool {
        (self.re - other.re).abs() <= tol && (self.im - other.im).abs() <= tol
    }
}

impl<T: Float> core::ops::Neg for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl<T: Float> core::ops::Add for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn add(self, other: Self) -> Self {
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }
}

impl<T: Float> core::ops::Sub for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn sub(self, other: Self) -> Self {
        Self {
            re: self.re - other.re,
            im: self.im - other.im,
        }
    }
}

impl<T: Float> core::ops::Mul for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn mul(self, other: Self) -> Self {
        Self {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }
}

impl<T: Float> core::ops::AddAssign for Complex<T> {
    #[inline(always)]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl<T: Float> core::ops::MulAssign for Complex<T> {
    #[inline(always)]
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl<T: Float> From<i32> for Complex<T> {
    fn from(x: i32) -> Self {
        Self::new(T::from_i32(x), T::zero())
    }
}

impl<T: Float> From<u8> for Complex<T> {
    fn from(x: u8) -> Self {
        Self::new(T::from_i32(i32::from(x)), T::zero())
    }
}

/// Formats as `(re, imi)`.
impl<T: Float> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "({:.*}, {:.*}i)", p, self.re, p, self.im),
            None => write!(f, "({}, {}i)", self.re, self.im),
        }
    }
}

pub type Complex32 = Complex<f32>;
pub type Complex64 = Complex<f64>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn test_complex_operations() {
        let a = Complex64::new(1.0, -2.0);
        let b = Complex64::new(3.0, 4.0);
        let c = a * b;
        assert!((c.re - (1.0 * 3.0 - (-2.0) * 4.0)).abs() < 1e-12);
        assert!((c.im - (1.0 * 4.0 + (-2.0) * 3.0)).abs() < 1e-12);
        let n = -a;
        assert_eq!(n.re, -1.0);
        assert_eq!(n.im, 2.0);
        assert_eq!(a.conj(), Complex64::new(1.0, 2.0));
    }

    #[test]
    fn expi_lands_on_unit_circle() {
        let e = Complex64::expi(<f64 as Float>::pi());
        assert!(e.approx_eq(Complex64::new(-1.0, 0.0), 1e-12));
        assert!((Complex64::expi(0.3).norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn norm_and_arg() {
        let z = Complex64::new(3.0, 4.0);
        assert!((z.norm() - 5.0).abs() < 1e-12);
        assert_eq!(z.norm_sqr(), 25.0);
        assert!((Complex64::new(0.0, 1.0).arg() - core::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn integers_convert_to_real_axis() {
        let z: Complex64 = (-3i32).into();
        assert_eq!(z, Complex64::new(-3.0, 0.0));
        let p: Complex32 = 1u8.into();
        assert_eq!(p, Complex32::new(1.0, 0.0));
    }

    #[test]
    fn display_matches_matrix_dump() {
        assert_eq!(format!("{}", Complex64::new(1.0, -2.5)), "(1, -2.5i)");
        assert_eq!(format!("{:.2}", Complex64::new(1.0, 0.0)), "(1.00, 0.00i)");
    }

    #[test]
    fn from_usize_rejects_inexact() {
        assert_eq!(<f32 as Float>::from_usize(1 << 24), None);
        assert_eq!(<f64 as Float>::from_usize(16), Some(16.0));
    }
}
