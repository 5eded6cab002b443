//! Multiplication kernels: single-digit, schoolbook, and Karatsuba with a
//! lopsided-input strategy.
//!
//! The kernels operate on borrowed digit slices and write into freshly owned
//! output buffers; Karatsuba splits are plain subslices, so no copying happens
//! on the way down the recursion.

use crate::arith;
use crate::primitives::{muladd_wide, Digit, DIGIT_BITS};

/// Operand size (in digits) below which schoolbook multiplication wins.
pub(crate) const KARATSUBA_CUTOFF: usize = 1024 / DIGIT_BITS;

/// Multiply a multi-digit operand by a single digit.
pub(crate) fn single_mult(lhs: &[Digit], n: Digit) -> Vec<Digit> {
    let mut out = Vec::with_capacity(lhs.len() + 1);
    let mut carry = 0;
    for &d in lhs {
        let (hi, lo) = muladd_wide(d, n, 0, carry);
        out.push(lo);
        carry = hi;
    }
    if carry != 0 {
        out.push(carry);
    }

    arith::trim(&mut out);
    out
}

/// Schoolbook multiplication. The shorter operand drives the outer loop and
/// zero digits in it are skipped outright.
pub(crate) fn long_mult(lhs: &[Digit], rhs: &[Digit]) -> Vec<Digit> {
    let (short, long) = if lhs.len() <= rhs.len() {
        (lhs, rhs)
    } else {
        (rhs, lhs)
    };

    if short.is_empty() {
        return Vec::new();
    }
    if short.len() == 1 {
        return single_mult(long, short[0]);
    }

    let mut out = vec![0; short.len() + long.len()];
    for (i, &x) in short.iter().enumerate() {
        if x == 0 {
            continue;
        }
        let mut carry = 0;
        for (j, &y) in long.iter().enumerate() {
            let (hi, lo) = muladd_wide(y, x, out[i + j], carry);
            out[i + j] = lo;
            carry = hi;
        }
        out[i + long.len()] = carry;
    }

    arith::trim(&mut out);
    out
}

/// When the long operand has at least twice the digits of the short one,
/// splitting at the midpoint degenerates. Instead view the long operand as a
/// run of short-sized windows and accumulate each window product at its
/// offset.
fn lopsided_mult(short: &[Digit], long: &[Digit], cutoff: usize) -> Vec<Digit> {
    debug_assert!(short.len() > cutoff);
    debug_assert!(2 * short.len() <= long.len());

    let mut out = Vec::with_capacity(short.len() + long.len());
    let mut shift = 0;
    let mut rest = long;
    while !rest.is_empty() {
        let n = short.len().min(rest.len());
        let (window, tail) = rest.split_at(n);
        let p = karatsuba_mult(short, window, cutoff);
        arith::add_at(&mut out, &p, shift);
        shift += n;
        rest = tail;
    }

    arith::trim(&mut out);
    out
}

/// Karatsuba multiplication. Splits the larger operand at the midpoint:
/// lhs = A·β + B, rhs = C·β + D, and AD + BC = (A+B)(C+D) − AC − BD, so three
/// recursive products replace four.
pub(crate) fn karatsuba_mult(lhs: &[Digit], rhs: &[Digit], cutoff: usize) -> Vec<Digit> {
    let (short, long) = if lhs.len() <= rhs.len() {
        (lhs, rhs)
    } else {
        (rhs, lhs)
    };

    if short.len() <= cutoff {
        return long_mult(short, long);
    }
    if 2 * short.len() <= long.len() {
        return lopsided_mult(short, long, cutoff);
    }

    let shift = long.len() >> 1;

    // low halves first: lhs = a·β + b, rhs = c·β + d
    let (b, a) = short.split_at(shift);
    let (d, c) = long.split_at(shift);

    let ac = karatsuba_mult(a, c, cutoff);
    let bd = karatsuba_mult(b, d, cutoff);

    let a_b = arith::add(a, b);
    let c_d = arith::add(c, d);
    let m = karatsuba_mult(&a_b, &c_d, cutoff);
    let (m, borrow) = arith::sub(&m, &ac);
    debug_assert!(!borrow);
    let (mid, borrow) = arith::sub(&m, &bd);
    debug_assert!(!borrow);

    // assemble AC·β² + mid·β + BD; AC and BD cannot overlap
    let mut out = bd;
    out.resize(shift * 2, 0);
    out.extend_from_slice(&ac);
    arith::add_at(&mut out, &mid, shift);

    arith::trim(&mut out);
    out
}

/// Top-level dispatch with the zero and one short-circuits.
pub(crate) fn mult(lhs: &[Digit], rhs: &[Digit]) -> Vec<Digit> {
    if lhs.is_empty() || rhs.is_empty() {
        return Vec::new();
    }
    if lhs == [1] {
        return rhs.to_vec();
    }
    if rhs == [1] {
        return lhs.to_vec();
    }

    karatsuba_mult(lhs, rhs, KARATSUBA_CUTOFF)
}
