//! Arbitrary-precision unsigned integers with a configurable base-N string
//! codec on top.
//!
//! [`BigUint`] is a little-endian vector of 64-bit digits in canonical form
//! (no high zero words; zero is the empty vector) with the full arithmetic,
//! bitwise, shift, comparison, and radix-conversion surface. [`BaseX`] turns
//! values or byte strings into text over an arbitrary alphabet — base58 in
//! its Bitcoin/Ripple/Flickr/GMP flavors, RFC 4648 base16/32/64, Crockford
//! base32, and friends — with optional case-insensitive decoding, ignored
//! characters, block padding, and an XOR checksum.
//!
//! # Examples
//! ```
//! use bigbase::{base58, BigUint};
//!
//! let n = BigUint::from_bytes(b"Hello world!");
//! let encoded = base58().encode(&n, false);
//! assert_eq!(encoded, "2NEpo7TZRhna7vSvL");
//!
//! let decoded = base58().decode(&encoded, false).unwrap();
//! assert_eq!(decoded.to_bytes(), b"Hello world!");
//! ```

use std::cmp::Ordering;
use std::fmt::{self, Binary, Display, Formatter, LowerHex, Octal};
use std::hash::{Hash, Hasher};
use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};
use std::str::FromStr;

mod arith;
pub mod basex;
mod consts;
mod div;
pub mod error;
mod macros;
mod mul;
mod primitives;
mod radix;
pub mod random;
pub mod traits;

pub use basex::{
    base11, base16, base16_rfc4648, base2, base32, base32_crockford, base32_hex, base32_rfc4648,
    base32_rfc4648_hex, base36, base58, base58_bitcoin, base58_flickr, base58_gmp, base58_ripple,
    base62, base62_inverted, base64, base64_rfc4648, base64_rfc4648_url, base64_url, base66,
    base8, BaseX, BLOCK_PADDING, IGNORE_CASE,
};
pub use error::{BigBaseError, BigBaseResult, BigBaseTestResult, ErrorKind};
pub use primitives::{Digit, HalfDigit};
pub use traits::{Pred, Succ};

use macros::{forward_assign_binop, forward_val_binop, impl_host_math, impl_host_signed,
    impl_host_unsigned};
use primitives::{bit_length, DIGIT_BITS};

/// An arbitrary-precision unsigned integer.
///
/// Stored as little-endian 64-bit digits with the most significant digit
/// non-zero (zero is the empty sequence); every operation returns a value in
/// that canonical form. Values are plain data: cloning deep-copies the digit
/// buffer, moves transfer it.
///
/// Subtraction wraps. `a - b` for `b > a` yields the two's-complement result
/// at the width of the longer operand and records the underflow, readable
/// through [`carry`](BigUint::carry) or explicitly via
/// [`sub_borrow`](BigUint::sub_borrow). The flag is a property of how the
/// value was produced: it is ignored by comparisons and cleared by the next
/// operation.
#[derive(Debug, Clone, Default)]
pub struct BigUint {
    digits: Vec<Digit>,
    carry: bool,
}

impl BigUint {
    pub const ZERO: Self = Self {
        digits: Vec::new(),
        carry: false,
    };

    pub fn one() -> Self {
        Self {
            digits: vec![1],
            carry: false,
        }
    }

    /// Build from little-endian digits, trimming to canonical form.
    pub fn from_digits(mut digits: Vec<Digit>) -> Self {
        arith::trim(&mut digits);
        Self {
            digits,
            carry: false,
        }
    }

    /// Parse big-endian bytes (the base-256 reading of the buffer). Leading
    /// zero bytes are accepted and not significant.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        radix::from_bytes(bytes)
    }

    /// Big-endian bytes with no leading zeros; zero is a single `0x00`.
    pub fn to_bytes(&self) -> Vec<u8> {
        radix::to_bytes(self)
    }

    /// Parse a numeric string in the given base, 2 through 36. Digits beyond
    /// 9 are the ASCII letters in either case. The empty string is zero.
    pub fn from_str_radix(s: &str, base: usize) -> BigBaseResult<Self> {
        radix::from_str_radix(s, base)
    }

    /// Render in the given base, 2 through 36, using `0-9a-z` digits.
    /// Base 256 output is [`to_bytes`](BigUint::to_bytes).
    pub fn to_str_radix(&self, base: usize) -> BigBaseResult<String> {
        radix::to_str_radix(self, base)
    }

    pub fn bin(&self) -> String {
        radix::format_radix(self, 2)
    }

    pub fn oct(&self) -> String {
        radix::format_radix(self, 8)
    }

    pub fn hex(&self) -> String {
        radix::format_radix(self, 16)
    }

    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Number of stored digits (zero for a zero value).
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// The little-endian digit sequence.
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    /// Digit at `idx`, implicitly zero beyond the stored length.
    pub fn digit(&self, idx: usize) -> Digit {
        self.digits.get(idx).copied().unwrap_or(0)
    }

    /// Bit at position `n`, implicitly zero beyond the bit-length.
    pub fn bit(&self, n: usize) -> bool {
        let (word, bit) = (n / DIGIT_BITS, n % DIGIT_BITS);
        word < self.digits.len() && (self.digits[word] >> bit) & 1 == 1
    }

    /// Bit-length: 0 for zero, otherwise the 1-indexed position of the most
    /// significant set bit.
    pub fn bits(&self) -> usize {
        match self.digits.last() {
            Some(&msw) => bit_length(msw) + (self.digits.len() - 1) * DIGIT_BITS,
            None => 0,
        }
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.digits.iter().map(|d| d.count_ones() as usize).sum()
    }

    /// Whether the most recent subtraction that produced this value
    /// underflowed. Read it before handing the value to another operation.
    pub fn carry(&self) -> bool {
        self.carry
    }

    /// Wrapping difference plus an explicit underflow flag. On underflow the
    /// value is the two's-complement result at the width of the longer
    /// operand.
    pub fn sub_borrow(&self, rhs: &BigUint) -> (BigUint, bool) {
        let (digits, borrow) = arith::sub(&self.digits, &rhs.digits);
        (
            BigUint {
                digits,
                carry: borrow,
            },
            borrow,
        )
    }

    /// Quotient and remainder. Fails with
    /// [`ErrorKind::DivByZero`] for a zero divisor; the `/` and `%` operators
    /// panic instead, like the built-in integer types.
    pub fn divmod(&self, rhs: &BigUint) -> BigBaseResult<(BigUint, BigUint)> {
        div::divmod(self, rhs)
    }

    /// The value as a `u64` if it fits.
    pub fn to_u64(&self) -> Option<u64> {
        match self.digits.len() {
            0 => Some(0),
            1 => Some(self.digits[0]),
            _ => None,
        }
    }
}

impl PartialEq for BigUint {
    fn eq(&self, other: &Self) -> bool {
        self.digits == other.digits
    }
}

impl Eq for BigUint {}

impl Hash for BigUint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.digits.hash(state);
    }
}

impl Ord for BigUint {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.digits.len().cmp(&other.digits.len()) {
            Ordering::Equal => {
                for (x, y) in self.digits.iter().rev().zip(other.digits.iter().rev()) {
                    match x.cmp(y) {
                        Ordering::Equal => continue,
                        ord => return ord,
                    }
                }
                Ordering::Equal
            }
            ord => ord,
        }
    }
}

impl PartialOrd for BigUint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add<&BigUint> for &BigUint {
    type Output = BigUint;

    fn add(self, rhs: &BigUint) -> BigUint {
        BigUint {
            digits: arith::add(&self.digits, &rhs.digits),
            carry: false,
        }
    }
}

impl Sub<&BigUint> for &BigUint {
    type Output = BigUint;

    fn sub(self, rhs: &BigUint) -> BigUint {
        self.sub_borrow(rhs).0
    }
}

impl Mul<&BigUint> for &BigUint {
    type Output = BigUint;

    fn mul(self, rhs: &BigUint) -> BigUint {
        BigUint {
            digits: mul::mult(&self.digits, &rhs.digits),
            carry: false,
        }
    }
}

impl Div<&BigUint> for &BigUint {
    type Output = BigUint;

    fn div(self, rhs: &BigUint) -> BigUint {
        match div::divmod(self, rhs) {
            Ok((quotient, _)) => quotient,
            Err(_) => panic!("attempt to divide BigUint by zero"),
        }
    }
}

impl Rem<&BigUint> for &BigUint {
    type Output = BigUint;

    fn rem(self, rhs: &BigUint) -> BigUint {
        match div::divmod(self, rhs) {
            Ok((_, remainder)) => remainder,
            Err(_) => panic!("attempt to take BigUint remainder by zero"),
        }
    }
}

impl BitAnd<&BigUint> for &BigUint {
    type Output = BigUint;

    fn bitand(self, rhs: &BigUint) -> BigUint {
        let mut digits: Vec<Digit> = self
            .digits
            .iter()
            .zip(rhs.digits.iter())
            .map(|(x, y)| x & y)
            .collect();
        arith::trim(&mut digits);
        BigUint {
            digits,
            carry: false,
        }
    }
}

impl BitOr<&BigUint> for &BigUint {
    type Output = BigUint;

    fn bitor(self, rhs: &BigUint) -> BigUint {
        let (long, short) = if self.digits.len() >= rhs.digits.len() {
            (&self.digits, &rhs.digits)
        } else {
            (&rhs.digits, &self.digits)
        };
        let mut digits: Vec<Digit> = long
            .iter()
            .enumerate()
            .map(|(i, &x)| if i < short.len() { x | short[i] } else { x })
            .collect();
        arith::trim(&mut digits);
        BigUint {
            digits,
            carry: false,
        }
    }
}

impl BitXor<&BigUint> for &BigUint {
    type Output = BigUint;

    fn bitxor(self, rhs: &BigUint) -> BigUint {
        let (long, short) = if self.digits.len() >= rhs.digits.len() {
            (&self.digits, &rhs.digits)
        } else {
            (&rhs.digits, &self.digits)
        };
        let mut digits: Vec<Digit> = long
            .iter()
            .enumerate()
            .map(|(i, &x)| if i < short.len() { x ^ short[i] } else { x })
            .collect();
        arith::trim(&mut digits);
        BigUint {
            digits,
            carry: false,
        }
    }
}

forward_val_binop!(impl Add, add);
forward_val_binop!(impl Sub, sub);
forward_val_binop!(impl Mul, mul);
forward_val_binop!(impl Div, div);
forward_val_binop!(impl Rem, rem);
forward_val_binop!(impl BitAnd, bitand);
forward_val_binop!(impl BitOr, bitor);
forward_val_binop!(impl BitXor, bitxor);

forward_assign_binop!(impl AddAssign, add_assign, Add, add);
forward_assign_binop!(impl SubAssign, sub_assign, Sub, sub);
forward_assign_binop!(impl MulAssign, mul_assign, Mul, mul);
forward_assign_binop!(impl DivAssign, div_assign, Div, div);
forward_assign_binop!(impl RemAssign, rem_assign, Rem, rem);
forward_assign_binop!(impl BitAndAssign, bitand_assign, BitAnd, bitand);
forward_assign_binop!(impl BitOrAssign, bitor_assign, BitOr, bitor);
forward_assign_binop!(impl BitXorAssign, bitxor_assign, BitXor, bitxor);

impl Not for &BigUint {
    type Output = BigUint;

    /// Inversion within the operand's own bit-length: every bit below
    /// `bits()` flips, nothing above it appears. `!0` is 0.
    fn not(self) -> BigUint {
        let b = self.bits();
        if b == 0 {
            return BigUint::ZERO;
        }
        let mut digits: Vec<Digit> = self.digits.iter().map(|d| !d).collect();
        arith::trim_masked(&mut digits, b);
        BigUint {
            digits,
            carry: false,
        }
    }
}

impl Not for BigUint {
    type Output = BigUint;

    fn not(self) -> BigUint {
        !&self
    }
}

impl Neg for &BigUint {
    type Output = BigUint;

    /// Two's complement at the current width: `0 - self`, wrapped.
    fn neg(self) -> BigUint {
        &BigUint::ZERO - self
    }
}

impl Neg for BigUint {
    type Output = BigUint;

    fn neg(self) -> BigUint {
        -&self
    }
}

impl Shl<usize> for &BigUint {
    type Output = BigUint;

    fn shl(self, n: usize) -> BigUint {
        if self.is_zero() || n == 0 {
            return self.clone();
        }

        let (words, bits) = (n / DIGIT_BITS, n % DIGIT_BITS);
        let mut digits: Vec<Digit> = Vec::with_capacity(self.digits.len() + words + 1);
        digits.resize(words, 0);

        if bits == 0 {
            digits.extend_from_slice(&self.digits);
        } else {
            let mut carry = 0;
            for &d in &self.digits {
                digits.push((d << bits) | carry);
                carry = d >> (DIGIT_BITS - bits);
            }
            if carry != 0 {
                digits.push(carry);
            }
        }

        BigUint {
            digits,
            carry: false,
        }
    }
}

impl Shr<usize> for &BigUint {
    type Output = BigUint;

    fn shr(self, n: usize) -> BigUint {
        if n == 0 {
            return self.clone();
        }
        if n >= self.bits() {
            return BigUint::ZERO;
        }

        let (words, bits) = (n / DIGIT_BITS, n % DIGIT_BITS);
        let mut digits = self.digits[words..].to_vec();
        if bits != 0 {
            let mut carry = 0;
            for d in digits.iter_mut().rev() {
                let v = (*d >> bits) | carry;
                carry = *d << (DIGIT_BITS - bits);
                *d = v;
            }
        }
        arith::trim(&mut digits);

        BigUint {
            digits,
            carry: false,
        }
    }
}

impl Shl<usize> for BigUint {
    type Output = BigUint;

    fn shl(self, n: usize) -> BigUint {
        &self << n
    }
}

impl Shr<usize> for BigUint {
    type Output = BigUint;

    fn shr(self, n: usize) -> BigUint {
        &self >> n
    }
}

impl ShlAssign<usize> for BigUint {
    fn shl_assign(&mut self, n: usize) {
        *self = std::mem::take(self) << n;
    }
}

impl ShrAssign<usize> for BigUint {
    fn shr_assign(&mut self, n: usize) {
        *self = std::mem::take(self) >> n;
    }
}

impl Sum for BigUint {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(BigUint::ZERO, |acc, x| acc + x)
    }
}

impl Product for BigUint {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(BigUint::one(), |acc, x| acc * x)
    }
}

impl_host_unsigned!(u8, u16, u32, u64, usize);
impl_host_signed!(i8, i16, i32, i64, isize);

impl From<u128> for BigUint {
    fn from(value: u128) -> Self {
        BigUint::from_digits(vec![value as Digit, (value >> DIGIT_BITS) as Digit])
    }
}

impl From<i128> for BigUint {
    fn from(value: i128) -> Self {
        BigUint::from(value as u128)
    }
}

impl Display for BigUint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "", &radix::format_radix(self, 10))
    }
}

impl LowerHex for BigUint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &radix::format_radix(self, 16))
    }
}

impl Octal for BigUint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0o", &radix::format_radix(self, 8))
    }
}

impl Binary for BigUint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0b", &radix::format_radix(self, 2))
    }
}

impl FromStr for BigUint {
    type Err = BigBaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigUint::from_str_radix(s, 10)
    }
}
