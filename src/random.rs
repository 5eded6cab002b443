//! Random generation of [`BigUint`] values, wired into `rand`'s uniform
//! sampling machinery. Mostly useful for property tests and benchmarks.

use rand::distributions::uniform::{SampleBorrow, SampleUniform, UniformSampler};
use rand::Rng;

use crate::primitives::{Digit, DIGIT_BITS};
use crate::BigUint;

impl BigUint {
    /// A uniformly random value in `[0, 2^bits)`.
    pub fn random_bits<R: Rng + ?Sized>(rng: &mut R, bits: usize) -> BigUint {
        if bits == 0 {
            return BigUint::ZERO;
        }

        let words = (bits + DIGIT_BITS - 1) / DIGIT_BITS;
        let mut digits: Vec<Digit> = (0..words).map(|_| rng.gen()).collect();
        let top = bits % DIGIT_BITS;
        if top != 0 {
            if let Some(last) = digits.last_mut() {
                *last &= (1 << top) - 1;
            }
        }

        BigUint::from_digits(digits)
    }
}

/// Uniform sampler for [`BigUint`] ranges. Draws `width.bits()` random bits
/// and rejects values outside the range width; each draw lands inside with
/// probability above one half, so the loop terminates quickly.
pub struct UniformBigUint {
    low: BigUint,
    width: BigUint,
}

impl UniformSampler for UniformBigUint {
    type X = BigUint;

    fn new<B1, B2>(low: B1, high: B2) -> Self
    where
        B1: SampleBorrow<Self::X> + Sized,
        B2: SampleBorrow<Self::X> + Sized,
    {
        let (low, high) = (low.borrow().clone(), high.borrow().clone());
        if low >= high {
            panic!("unable to create a sampler with low >= high");
        }

        let width = &high - &low;
        Self { low, width }
    }

    fn new_inclusive<B1, B2>(low: B1, high: B2) -> Self
    where
        B1: SampleBorrow<Self::X> + Sized,
        B2: SampleBorrow<Self::X> + Sized,
    {
        let (low, high) = (low.borrow().clone(), high.borrow().clone());
        if low > high {
            panic!("unable to create a sampler with low > high");
        }

        let width = &high - &low + BigUint::one();
        Self { low, width }
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::X {
        let bits = self.width.bits();
        loop {
            let candidate = BigUint::random_bits(rng, bits);
            if candidate < self.width {
                return &self.low + &candidate;
            }
        }
    }
}

impl SampleUniform for BigUint {
    type Sampler = UniformBigUint;
}
