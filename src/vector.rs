use std::fmt::Debug;

/// Two-dimensional vectors of `f64` the simulation can operate on.
///
/// Every operation is pure and returns a new value. Non-finite components propagate following
/// IEEE semantics, no operation can fail.
///
/// # Example
///
/// ```
/// # use nbody::prelude::*;
/// # use glam::DVec2;
/// let a = DVec2::new(3.0, 0.0);
/// let b = DVec2::new(0.0, 4.0);
///
/// assert_eq!(Vector::add(a, b).magnitude(), 5.0);
/// assert_eq!(Vector::scale(a, 2.0), DVec2::new(6.0, 0.0));
/// assert_eq!(<DVec2 as Vector>::fill(1.5), DVec2::new(1.5, 1.5));
/// ```
pub trait Vector: Copy + PartialEq + Debug {
    /// The vector with both components set to zero.
    const ZERO: Self;

    /// Creates a vector from its components.
    fn new(x: f64, y: f64) -> Self;

    /// Creates a vector with both components set to `s`.
    fn fill(s: f64) -> Self;

    /// Component-wise sum.
    fn add(self, rhs: Self) -> Self;

    /// Component-wise difference.
    fn sub(self, rhs: Self) -> Self;

    /// Multiplies both components by `s`.
    fn scale(self, s: f64) -> Self;

    /// Euclidean norm, `sqrt(x² + y²)`.
    fn magnitude(self) -> f64;
}

macro_rules! impl_vector {
    ($v: ty, $zero: expr, $splat: path, $mag: ident) => {
        impl Vector for $v {
            const ZERO: Self = $zero;

            #[inline]
            fn new(x: f64, y: f64) -> Self {
                <$v>::new(x, y)
            }

            #[inline]
            fn fill(s: f64) -> Self {
                $splat(s)
            }

            #[inline]
            fn add(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                self - rhs
            }

            #[inline]
            fn scale(self, s: f64) -> Self {
                self * s
            }

            #[inline]
            fn magnitude(self) -> f64 {
                self.$mag()
            }
        }
    };
}

impl_vector!(glam::DVec2, glam::DVec2::ZERO, glam::DVec2::splat, length);

#[cfg(feature = "ultraviolet")]
impl_vector!(
    ultraviolet::DVec2,
    ultraviolet::DVec2 { x: 0.0, y: 0.0 },
    ultraviolet::DVec2::broadcast,
    mag
);
