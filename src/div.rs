//! Division: a per-word sweep for single-digit divisors and Knuth's
//! Algorithm D for the general case.

use crate::arith;
use crate::error::{BigBaseError, BigBaseResult};
use crate::primitives::{
    add_carry, bit_length, div2by1, mul_wide, muladd_wide, sub_borrow, Digit, DIGIT_BITS,
};
use crate::BigUint;

/// Divide by a single digit, most significant word first, carrying the
/// running remainder down through `div2by1`.
pub(crate) fn single_divmod(lhs: &[Digit], n: Digit) -> (Vec<Digit>, Digit) {
    debug_assert!(n != 0);

    let mut q = vec![0; lhs.len()];
    let mut r = 0;
    for i in (0..lhs.len()).rev() {
        let (qi, ri) = div2by1(r, lhs[i], n);
        q[i] = qi;
        r = ri;
    }

    arith::trim(&mut q);
    (q, r)
}

/// Shift left by less than one word, possibly growing by one word.
fn shl_small(digits: &[Digit], shift: u32) -> Vec<Digit> {
    debug_assert!((shift as usize) < DIGIT_BITS);
    if shift == 0 {
        return digits.to_vec();
    }

    let mut out = Vec::with_capacity(digits.len() + 1);
    let mut carry = 0;
    for &d in digits {
        out.push((d << shift) | carry);
        carry = d >> (DIGIT_BITS as u32 - shift);
    }
    if carry != 0 {
        out.push(carry);
    }
    out
}

/// Shift right by less than one word, in place, and trim.
fn shr_small(digits: &mut Vec<Digit>, shift: u32) {
    debug_assert!((shift as usize) < DIGIT_BITS);
    if shift != 0 {
        let mut carry = 0;
        for d in digits.iter_mut().rev() {
            let v = (*d >> shift) | carry;
            carry = *d << (DIGIT_BITS as u32 - shift);
            *d = v;
        }
    }
    arith::trim(digits);
}

/// Knuth's Algorithm D. Requires a divisor of at least two digits and a
/// dividend no shorter than the divisor; both must be canonical.
pub(crate) fn knuth_divmod(lhs: &[Digit], rhs: &[Digit]) -> (Vec<Digit>, Vec<Digit>) {
    let n = rhs.len();
    debug_assert!(n >= 2);
    debug_assert!(lhs.len() >= n);

    // D1. Normalize so the divisor's top bit is set; the dividend moves by
    // the same amount so the quotient is unchanged.
    let d = (DIGIT_BITS - bit_length(rhs[n - 1])) as u32;
    let mut v = shl_small(lhs, d);
    let w = shl_small(rhs, d);
    debug_assert_eq!(w.len(), n);

    if v[v.len() - 1] >= w[n - 1] {
        v.push(0);
    }
    let v_size = v.len();
    // guard word read by the first quotient estimate
    v.push(0);

    let k = v_size - n;
    let mut q = vec![0 as Digit; k + 1];

    let w1 = w[n - 1];
    let w2 = w[n - 2];

    for kk in (0..=k).rev() {
        // D3. Estimate the quotient digit from the top two dividend words,
        // then tighten it with the third word until q̂·w₂ no longer exceeds
        // r̂·2^64 + v[kk+n−2]. Once r̂ overflows a word the estimate is
        // certainly correct.
        let x_hi = v[kk + n];
        let x_lo = v[kk + n - 1];
        let (mut qhat, rhat, rhat_overflow) = if x_hi >= w1 {
            // only reachable with x_hi == w1: saturate the trial quotient
            let (r, o) = x_lo.overflowing_add(w1);
            (Digit::MAX, r, o)
        } else {
            let (q0, r0) = div2by1(x_hi, x_lo, w1);
            (q0, r0, false)
        };
        if !rhat_overflow {
            let mut rhat = rhat;
            let (mut p_hi, mut p_lo) = mul_wide(qhat, w2);
            let rlo = v[kk + n - 2];
            while p_hi > rhat || (p_hi == rhat && p_lo > rlo) {
                qhat -= 1;
                let (r, o) = rhat.overflowing_add(w1);
                rhat = r;
                if o {
                    break;
                }
                let p = mul_wide(qhat, w2);
                p_hi = p.0;
                p_lo = p.1;
            }
        }

        // D4. v[kk..=kk+n] -= q̂·w, interleaving the widening multiply with
        // the borrow chain.
        let mut mul_hi = 0;
        let mut borrow = false;
        for i in 0..n {
            let (hi, lo) = muladd_wide(w[i], qhat, 0, mul_hi);
            mul_hi = hi;
            let (diff, b) = sub_borrow(v[kk + i], lo, borrow);
            v[kk + i] = diff;
            borrow = b;
        }
        let (diff, b) = sub_borrow(v[kk + n], mul_hi, borrow);
        v[kk + n] = diff;
        borrow = b;

        if borrow {
            // D6. Estimate was one too large (rare); add the divisor back.
            qhat -= 1;
            let mut carry = false;
            for i in 0..n {
                let (sum, c) = add_carry(v[kk + i], w[i], carry);
                v[kk + i] = sum;
                carry = c;
            }
            let (sum, _) = add_carry(v[kk + n], 0, carry);
            v[kk + n] = sum;
        }

        q[kk] = qhat;
    }

    // D8. The remainder is the low n words, shifted back.
    v.truncate(n);
    shr_small(&mut v, d);
    arith::trim(&mut q);
    (q, v)
}

/// Quotient and remainder, with the fast paths checked in order before
/// falling through to Algorithm D.
pub(crate) fn divmod(lhs: &BigUint, rhs: &BigUint) -> BigBaseResult<(BigUint, BigUint)> {
    if rhs.is_zero() {
        return Err(BigBaseError::div_by_zero());
    }

    let ld = lhs.digits();
    let rd = rhs.digits();

    if ld.len() == 1 && rd.len() == 1 {
        return Ok((BigUint::from(ld[0] / rd[0]), BigUint::from(ld[0] % rd[0])));
    }
    if rd == [1] {
        return Ok((lhs.clone(), BigUint::ZERO));
    }
    match lhs.cmp(rhs) {
        std::cmp::Ordering::Equal => Ok((BigUint::one(), BigUint::ZERO)),
        std::cmp::Ordering::Less => Ok((BigUint::ZERO, lhs.clone())),
        std::cmp::Ordering::Greater => {
            if rd.len() == 1 {
                let (q, r) = single_divmod(ld, rd[0]);
                Ok((BigUint::from_digits(q), BigUint::from(r)))
            } else {
                let (q, r) = knuth_divmod(ld, rd);
                Ok((BigUint::from_digits(q), BigUint::from_digits(r)))
            }
        }
    }
}
