//! Successor/predecessor traits, the step-by-one surface of [`BigUint`].

use crate::BigUint;

/// The value directly after this one.
pub trait Succ {
    fn succ(self) -> Self;
}

/// The value directly before this one.
pub trait Pred {
    fn pred(self) -> Self;
}

impl Succ for BigUint {
    fn succ(self) -> Self {
        self + BigUint::one()
    }
}

impl Pred for BigUint {
    /// Panics on zero: an unsigned value has no predecessor there.
    fn pred(self) -> Self {
        if self.is_zero() {
            panic!("cannot get the predecessor of 0");
        }
        self - BigUint::one()
    }
}
