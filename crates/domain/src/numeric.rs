//! Numeric extensions added to built-in types from the outside.

use std::ops::Mul;

/// Square a number.
///
/// ```
/// use solid_domain::numeric::Squared;
///
/// assert_eq!(2_i32.squared(), 4);
/// assert_eq!((-3_i64).squared(), 9);
/// ```
pub trait Squared: Copy + Mul<Output = Self> {
    /// Return `self * self`.
    #[must_use]
    fn squared(self) -> Self {
        self * self
    }
}

macro_rules! impl_squared {
    ($($ty:ty),* $(,)?) => {
        $(impl Squared for $ty {})*
    };
}

impl_squared!(i32, i64, u32, u64, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_square_integers() {
        assert_eq!(2_i32.squared(), 4);
        assert_eq!((-7_i32).squared(), 49);
        assert_eq!(12_u64.squared(), 144);
    }

    #[test]
    fn should_square_floats() {
        assert!((1.5_f64.squared() - 2.25).abs() < f64::EPSILON);
    }

    #[test]
    fn should_leave_existing_arithmetic_untouched() {
        let num = 2_i32;
        assert_eq!(num * num, num.squared());
        assert_eq!(num + 1, 3);
    }
}
