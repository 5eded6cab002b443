//! Macros generating the repetitive operator surface: by-value forwarding to
//! the borrowing impls, and mixed-operand arithmetic with host integers.

/// Forward the owned-operand combinations of a binary operator to the
/// `&BigUint ⊕ &BigUint` impl, which owns the actual kernel call.
macro_rules! forward_val_binop {
    (impl $imp:ident, $method:ident) => {
        impl $imp<BigUint> for BigUint {
            type Output = BigUint;

            fn $method(self, rhs: BigUint) -> BigUint {
                $imp::$method(&self, &rhs)
            }
        }

        impl $imp<&BigUint> for BigUint {
            type Output = BigUint;

            fn $method(self, rhs: &BigUint) -> BigUint {
                $imp::$method(&self, rhs)
            }
        }

        impl $imp<BigUint> for &BigUint {
            type Output = BigUint;

            fn $method(self, rhs: BigUint) -> BigUint {
                $imp::$method(self, &rhs)
            }
        }
    };
}

/// Assigning variants in terms of the by-value operator.
macro_rules! forward_assign_binop {
    (impl $imp:ident, $method:ident, $base:ident, $base_method:ident) => {
        impl $imp<BigUint> for BigUint {
            fn $method(&mut self, rhs: BigUint) {
                let lhs = std::mem::take(self);
                *self = $base::$base_method(lhs, rhs);
            }
        }

        impl $imp<&BigUint> for BigUint {
            fn $method(&mut self, rhs: &BigUint) {
                let lhs = std::mem::take(self);
                *self = $base::$base_method(lhs, rhs);
            }
        }
    };
}

/// `From` plus the full mixed-operand arithmetic for host unsigned integers,
/// in both directions.
macro_rules! impl_host_unsigned {
    ($($ty:ty),+) => {$(
        impl From<$ty> for BigUint {
            fn from(value: $ty) -> Self {
                BigUint::from_digits(vec![value as Digit])
            }
        }

        impl_host_math!($ty);
    )+};
}

/// `From` for host signed integers: the two's-complement bit pattern is
/// reinterpreted at digit width, so negative inputs become large values.
macro_rules! impl_host_signed {
    ($($ty:ty),+) => {$(
        impl From<$ty> for BigUint {
            fn from(value: $ty) -> Self {
                BigUint::from_digits(vec![value as i64 as u64])
            }
        }
    )+};
}

macro_rules! impl_host_math {
    ($ty:ty) => {
        impl Add<$ty> for BigUint {
            type Output = BigUint;

            fn add(self, rhs: $ty) -> BigUint {
                self + BigUint::from(rhs)
            }
        }

        impl Add<BigUint> for $ty {
            type Output = BigUint;

            fn add(self, rhs: BigUint) -> BigUint {
                BigUint::from(self) + rhs
            }
        }

        impl AddAssign<$ty> for BigUint {
            fn add_assign(&mut self, rhs: $ty) {
                *self += BigUint::from(rhs);
            }
        }

        impl Sub<$ty> for BigUint {
            type Output = BigUint;

            fn sub(self, rhs: $ty) -> BigUint {
                self - BigUint::from(rhs)
            }
        }

        impl Sub<BigUint> for $ty {
            type Output = BigUint;

            fn sub(self, rhs: BigUint) -> BigUint {
                BigUint::from(self) - rhs
            }
        }

        impl SubAssign<$ty> for BigUint {
            fn sub_assign(&mut self, rhs: $ty) {
                *self -= BigUint::from(rhs);
            }
        }

        impl Mul<$ty> for BigUint {
            type Output = BigUint;

            fn mul(self, rhs: $ty) -> BigUint {
                self * BigUint::from(rhs)
            }
        }

        impl Mul<BigUint> for $ty {
            type Output = BigUint;

            fn mul(self, rhs: BigUint) -> BigUint {
                BigUint::from(self) * rhs
            }
        }

        impl MulAssign<$ty> for BigUint {
            fn mul_assign(&mut self, rhs: $ty) {
                *self *= BigUint::from(rhs);
            }
        }

        impl Div<$ty> for BigUint {
            type Output = BigUint;

            fn div(self, rhs: $ty) -> BigUint {
                self / BigUint::from(rhs)
            }
        }

        impl Div<BigUint> for $ty {
            type Output = BigUint;

            fn div(self, rhs: BigUint) -> BigUint {
                BigUint::from(self) / rhs
            }
        }

        impl DivAssign<$ty> for BigUint {
            fn div_assign(&mut self, rhs: $ty) {
                *self = std::mem::take(self) / BigUint::from(rhs);
            }
        }

        impl Rem<$ty> for BigUint {
            type Output = BigUint;

            fn rem(self, rhs: $ty) -> BigUint {
                self % BigUint::from(rhs)
            }
        }

        impl Rem<BigUint> for $ty {
            type Output = BigUint;

            fn rem(self, rhs: BigUint) -> BigUint {
                BigUint::from(self) % rhs
            }
        }

        impl RemAssign<$ty> for BigUint {
            fn rem_assign(&mut self, rhs: $ty) {
                *self = std::mem::take(self) % BigUint::from(rhs);
            }
        }
    };
}

pub(crate) use {
    forward_assign_binop, forward_val_binop, impl_host_math, impl_host_signed, impl_host_unsigned,
};
