//! Configurable positional base-N codec over [`BigUint`].
//!
//! A [`BaseX`] is an immutable pair of lookup tables built from an alphabet,
//! a set of ignored characters, and flags. Power-of-two bases encode by bit
//! packing, everything else by repeated division; both share the digit-stream
//! kernels with the plain radix conversions. Instances are plain data and
//! freely shared across threads; the bundled codecs are lazily-initialized
//! statics.

use std::sync::LazyLock;

use crate::consts::{BASE_BITS, BASE_SIZE};
use crate::error::{BigBaseError, BigBaseResult};
use crate::primitives::Digit;
use crate::radix;
use crate::BigUint;

/// Fold ASCII alphabet letters to both cases for decoding.
pub const IGNORE_CASE: u32 = 1;
/// Align the encoded bit stream to whole bytes, RFC 4648 style. Only
/// meaningful for power-of-two bases.
pub const BLOCK_PADDING: u32 = 2;

const ORD_INVALID: u8 = 0xff;

/// A base-N encoder/decoder for a fixed alphabet.
#[derive(Debug, Clone)]
pub struct BaseX {
    /// digit value → character
    chr: [u8; 256],
    /// character → digit value, `ORD_INVALID` for characters outside the
    /// alphabet, `base` for ignored ones
    ord: [u8; 256],
    base: usize,
    base_bits: u32,
    block_size: u32,
    /// the `ord` value marking an ignored character, held out of `u8` range
    /// when no character is ignored
    skip: u16,
}

impl BaseX {
    /// Build a codec from an alphabet (one byte per digit, in value order),
    /// a string of characters decoders silently skip, and flags.
    ///
    /// Rejects alphabets outside 2..=256 characters, duplicate or
    /// case-ambiguous alphabet entries, and overlap between the alphabet and
    /// the ignored set.
    pub fn new(alphabet: &str, ignored: &str, flags: u32) -> BigBaseResult<Self> {
        let alphabet = alphabet.as_bytes();
        let ignored = ignored.as_bytes();

        let base = alphabet.len();
        if !(2..=256).contains(&base) {
            return Err(BigBaseError::base_out_of_range(base));
        }
        if !ignored.is_empty() && base >= 255 {
            // no spare table value left to mark skipped characters
            return Err(BigBaseError::base_out_of_range(base));
        }

        let mut chr = [0u8; 256];
        let mut ord = [ORD_INVALID; 256];
        let skip: u16 = if base < 255 { base as u16 } else { 0x100 };

        for &c in ignored {
            ord[c as usize] = base as u8;
        }

        for (i, &c) in alphabet.iter().enumerate() {
            if ord[c as usize] != ORD_INVALID {
                return Err(BigBaseError::invalid_alphabet(base));
            }
            chr[i] = c;
            ord[c as usize] = i as u8;

            if flags & IGNORE_CASE != 0 && c.is_ascii_alphabetic() {
                let folded = c ^ 0x20;
                let entry = &mut ord[folded as usize];
                if *entry != ORD_INVALID && *entry != i as u8 {
                    return Err(BigBaseError::invalid_alphabet(base));
                }
                *entry = i as u8;
            }
        }

        let base_bits = BASE_BITS[base];
        Ok(Self {
            chr,
            ord,
            base,
            base_bits,
            block_size: if flags & BLOCK_PADDING != 0 { base_bits } else { 0 },
            skip,
        })
    }

    pub fn base(&self) -> usize {
        self.base
    }

    /// `⌊log₂ base⌋` for power-of-two bases, 0 otherwise.
    pub fn base_bits(&self) -> u32 {
        self.base_bits
    }

    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    /// Encode a value. A zero value is the single zero-digit character.
    pub fn encode(&self, num: &BigUint, checksum: bool) -> String {
        let mut vals: Vec<u8>;
        if num.is_zero() {
            vals = vec![0];
        } else {
            let shifted;
            let n = if self.block_size > 0 {
                // pre-shift so the decoder lands back on a byte boundary
                let aligned = (num.bits() + 7) & !7;
                let rem = aligned % self.block_size as usize;
                let bp = if rem != 0 {
                    self.block_size as usize - rem
                } else {
                    0
                };
                shifted = num << bp;
                &shifted
            } else {
                num
            };

            vals = if self.base_bits > 0 {
                radix::digit_stream_pow2(n.digits(), self.base_bits)
            } else {
                radix::digit_stream_general(n, self.base as Digit)
            };
            vals.reverse();
        }

        let mut out = String::with_capacity(vals.len() + 1);
        for &d in &vals {
            out.push(self.chr[d as usize] as char);
        }
        if checksum {
            out.push(self.chr[self.checksum_digit(&vals) as usize] as char);
        }
        out
    }

    /// Encode a byte string (its base-256 reading; leading zero bytes are not
    /// preserved).
    pub fn encode_bytes(&self, bytes: &[u8], checksum: bool) -> String {
        self.encode(&BigUint::from_bytes(bytes), checksum)
    }

    /// Decode to a value. Ignored characters are skipped; anything else
    /// outside the alphabet fails with
    /// [`ErrorKind::InvalidChar`](crate::ErrorKind::InvalidChar).
    pub fn decode(&self, encoded: &str, checksum: bool) -> BigBaseResult<BigUint> {
        let mut vals = self.digit_values(encoded)?;
        let check = if checksum {
            match vals.pop() {
                Some(c) => Some(c),
                None => return Err(BigBaseError::bad_checksum()),
            }
        } else {
            None
        };

        let mut acc: Vec<Digit> =
            Vec::with_capacity(vals.len() / BASE_SIZE[self.base] as usize + 1);
        if self.base_bits > 0 {
            for &d in &vals {
                radix::push_digit_pow2(&mut acc, self.base_bits, d as Digit);
            }
        } else {
            for &d in &vals {
                radix::push_digit_general(&mut acc, self.base as Digit, d as Digit);
            }
        }
        let mut result = BigUint::from_digits(acc);

        if self.block_size > 0 {
            // undo the encoder's byte-alignment shift
            let bp = (vals.len() * self.block_size as usize) % 8;
            result = result >> bp;
        }

        if let Some(c) = check {
            if c != self.checksum_digit(&vals) {
                return Err(BigBaseError::bad_checksum());
            }
        }
        Ok(result)
    }

    /// Decode to the big-endian byte serialization of the value.
    pub fn decode_bytes(&self, encoded: &str, checksum: bool) -> BigBaseResult<Vec<u8>> {
        Ok(self.decode(encoded, checksum)?.to_bytes())
    }

    /// Classification and checksum check only, no accumulation.
    pub fn is_valid(&self, encoded: &str, checksum: bool) -> bool {
        match self.digit_values(encoded) {
            Ok(mut vals) => {
                if checksum {
                    match vals.pop() {
                        Some(c) => c == self.checksum_digit(&vals),
                        None => false,
                    }
                } else {
                    true
                }
            }
            Err(_) => false,
        }
    }

    fn digit_values(&self, encoded: &str) -> BigBaseResult<Vec<u8>> {
        let mut vals = Vec::with_capacity(encoded.len());
        for (offset, &b) in encoded.as_bytes().iter().enumerate() {
            let d = self.ord[b as usize];
            if d as u16 == self.skip {
                continue;
            }
            if d as usize >= self.base {
                return Err(BigBaseError::invalid_char(b as char, offset));
            }
            vals.push(d);
        }
        Ok(vals)
    }

    /// XOR of the payload digits and two length-derived terms, reduced into
    /// the alphabet. For power-of-two bases the reduction is the identity.
    fn checksum_digit(&self, payload: &[u8]) -> u8 {
        let mut sum = payload.iter().fold(0u8, |s, &d| s ^ d);
        let len = payload.len();
        sum ^= ((len / self.base) % self.base) as u8;
        sum ^= (len % self.base) as u8;
        (sum as usize % self.base) as u8
    }
}

macro_rules! bundled {
    ($(#[$meta:meta])* $name:ident, $alphabet:expr, $ignored:expr, $flags:expr) => {
        $(#[$meta])*
        pub fn $name() -> &'static BaseX {
            static CODEC: LazyLock<BaseX> = LazyLock::new(|| {
                BaseX::new($alphabet, $ignored, $flags).expect("bundled alphabet is valid")
            });
            &CODEC
        }
    };
}

bundled!(base2, "01", "", 0);
bundled!(base8, "01234567", "", 0);
bundled!(base11, "0123456789a", "", IGNORE_CASE);
bundled!(base16, "0123456789abcdef", "", IGNORE_CASE);
bundled!(
    /// RFC 4648 hex: uppercase alphabet, `=` padding and whitespace ignored.
    base16_rfc4648,
    "0123456789ABCDEF",
    "= \n\r\t",
    IGNORE_CASE
);
bundled!(base32, "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567", "", IGNORE_CASE);
bundled!(base32_hex, "0123456789ABCDEFGHIJKLMNOPQRSTUV", "", IGNORE_CASE);
bundled!(
    /// RFC 4648 base32: block-padded to byte alignment, `=` and whitespace
    /// ignored on input.
    base32_rfc4648,
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567",
    "= \n\r\t",
    IGNORE_CASE | BLOCK_PADDING
);
bundled!(
    base32_rfc4648_hex,
    "0123456789ABCDEFGHIJKLMNOPQRSTUV",
    "= \n\r\t",
    IGNORE_CASE | BLOCK_PADDING
);
bundled!(
    /// Crockford base32: no I, L, O or U.
    base32_crockford,
    "0123456789ABCDEFGHJKMNPQRSTVWXYZ",
    "",
    IGNORE_CASE
);
bundled!(base36, "0123456789abcdefghijklmnopqrstuvwxyz", "", IGNORE_CASE);
bundled!(
    /// GMP-style base58: `0-9A-Za-v`.
    base58_gmp,
    "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuv",
    "",
    0
);
bundled!(
    base58_bitcoin,
    "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz",
    "",
    0
);
bundled!(
    base58_ripple,
    "rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz",
    "",
    0
);
bundled!(
    base58_flickr,
    "123456789abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ",
    "",
    0
);

/// The Bitcoin base58 alphabet, the usual default.
pub fn base58() -> &'static BaseX {
    base58_bitcoin()
}

bundled!(
    base62,
    "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz",
    "",
    0
);
bundled!(
    base62_inverted,
    "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "",
    0
);
bundled!(
    base64,
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/",
    "",
    0
);
bundled!(
    base64_url,
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_",
    "",
    0
);
bundled!(
    /// RFC 4648 base64: block-padded, `=` and whitespace ignored on input.
    base64_rfc4648,
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/",
    "= \n\r\t",
    BLOCK_PADDING
);
bundled!(
    base64_rfc4648_url,
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_",
    "= \n\r\t",
    BLOCK_PADDING
);
bundled!(
    base66,
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_.!~",
    "",
    0
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::BigBaseTestResult;

    #[test]
    fn base58_encodes_bytes() {
        assert_eq!(base58().encode_bytes(b"Hello world!", false), "2NEpo7TZRhna7vSvL");
        assert_eq!(
            base58().decode_bytes("2NEpo7TZRhna7vSvL", false).unwrap(),
            b"Hello world!"
        );
        assert_eq!(base58_gmp().encode_bytes(b"Hello world!", false), "1LDlk6QWOejX6rPrJ");
    }

    #[test]
    fn base58_encodes_integers() -> BigBaseTestResult {
        let n = BigUint::from(987654321u64);
        assert_eq!(base58_gmp().encode(&n, false), "1TFvCj");
        assert_eq!(base58_gmp().decode("1TFvCj", false)?, n);

        assert_eq!(base58_bitcoin().encode(&n, false), "2WGzDn");
        assert_eq!(base58_ripple().encode(&n, false), "pWGzD8");
        assert_eq!(base58_flickr().encode(&n, false), "2vgZdM");

        assert_eq!(base58_bitcoin().decode("2WGzDn", false)?, n);
        assert_eq!(base58_ripple().decode("pWGzD8", false)?, n);
        assert_eq!(base58_flickr().decode("2vgZdM", false)?, n);
        Ok(())
    }

    #[test]
    fn base62_vectors() -> BigBaseTestResult {
        let n = BigUint::from(987654321u64);
        assert_eq!(base62().encode(&n, false), "14q60P");
        assert_eq!(base62().decode("14q60P", false)?, n);
        assert_eq!(base62().encode_bytes(b"Hello world!", false), "T8dgcjRGuYUueWht");
        assert_eq!(
            base62_inverted().encode_bytes(b"Hello world!", false),
            "t8DGCJrgUyuUEwHT"
        );
        Ok(())
    }

    #[test]
    fn uuid_vectors() {
        let uuid = [
            0xd8, 0x45, 0x60, 0xc8, 0x13, 0x4f, 0x11, 0xe6, 0xa1, 0xe2, 0x34, 0x36, 0x3b, 0xd2,
            0x6d, 0xae,
        ];
        assert_eq!(base58().encode_bytes(&uuid, false), "ThxCy1Ek2q6UhWQhj9CK1o");
        assert_eq!(base62().encode_bytes(&uuid, false), "6a630O1jrtMjCrQDyG3D3O");
        assert_eq!(base58().decode_bytes("ThxCy1Ek2q6UhWQhj9CK1o", false).unwrap(), uuid);
    }

    #[test]
    fn base58_hex_fixtures() -> BigBaseTestResult {
        let cases: &[(&str, &str)] = &[
            ("61", "2g"),
            ("626262", "a3gV"),
            ("636363", "aPEr"),
            ("73696d706c792061206c6f6e6720737472696e67", "2cFupjhnEsSn59qHXstmK2ffpLv2"),
            ("516b6fcd0f", "ABnLTmg"),
            ("bf4f89001e670274dd", "3SEo3LWLoPntC"),
            ("572e4794", "3EFU7m"),
            ("ecac89cad93923c02321", "EJDM8drfXA6uyA"),
            ("10c8511e", "Rt5zm"),
            ("ffffffffffffffffffff", "FPBt6CHo3fovdL"),
            ("ffffffffffffffffffffffffff", "NKioeUVktgzXLJ1B3t"),
            ("ffffffffffffffffffffffffffffffff", "YcVfxkQb6JRzqk5kF2tNLv"),
            ("ef41b9ce7e830af7", "h26E62FyLQN"),
            ("606cbc791036d2e9", "H8Sa62HVULG"),
            ("bdcb0ea69c2c8ec8", "YkESUPpnfoD"),
            ("1a2358ba67fb71d5", "5NaBN89ajtQ"),
            ("e6173f0f4d5fb5d7", "fVAoezT1ZkS"),
            ("91c81cbfdd58bbd2", "RPGNSU3bqTX"),
            ("329e0bf0e388dbfe", "9U41ZkwwysT"),
            ("30b10393210fa65b", "99NMW3WHjjY"),
            ("ab3bdd18e3623654", "VeBbqBb4rCT"),
            ("fe29d1751ec4af8a", "jWhmYLN9dUm"),
        ];
        for &(hex, expect) in cases {
            let n = BigUint::from_str_radix(hex, 16)?;
            assert_eq!(base58().encode(&n, false), expect, "encoding {}", hex);
            assert_eq!(base58().decode(expect, false)?, n, "decoding {}", expect);
        }
        Ok(())
    }

    #[test]
    fn leading_zeros_are_not_preserved() -> BigBaseTestResult {
        // the codec encodes values, not buffers: high zero bytes vanish
        let n = BigUint::from_str_radix("00eb15231dfceb60925886b67d065299925915aeb172c06647", 16)?;
        assert_eq!(base58().encode(&n, false), "NS17iag9jJgTHD1VXjvLCEnZuQ3rJDE9L");
        let n = BigUint::from_str_radix("00000000000000000000", 16)?;
        assert_eq!(base58().encode(&n, false), "1");
        Ok(())
    }

    #[test]
    fn zero_encodes_as_first_character() -> BigBaseTestResult {
        assert_eq!(base58().encode(&BigUint::ZERO, false), "1");
        assert_eq!(base62().encode(&BigUint::ZERO, false), "0");
        assert_eq!(base64().encode(&BigUint::ZERO, false), "A");
        assert!(base58().decode("1", false)?.is_zero());
        assert_eq!(base58().decode_bytes("1", false)?, vec![0]);
        Ok(())
    }

    #[test]
    fn power_of_two_bases_bit_pack() -> BigBaseTestResult {
        let n = BigUint::from_str_radix("000f", 16)?;
        assert_eq!(base2().encode(&n, false), "1111");
        let n = BigUint::from_str_radix("00ff", 16)?;
        assert_eq!(base2().encode(&n, false), "11111111");
        let n = BigUint::from_str_radix("0fff", 16)?;
        assert_eq!(base2().encode(&n, false), "111111111111");
        let n = BigUint::from_str_radix("ff00ff00", 16)?;
        assert_eq!(base2().encode(&n, false), "11111111000000001111111100000000");
        assert_eq!(base2().decode("11111111000000001111111100000000", false)?, n);

        assert_eq!(base16().encode(&BigUint::from_str_radix("0000000f", 16)?, false), "f");
        assert_eq!(base16().encode(&BigUint::from_str_radix("000fff", 16)?, false), "fff");
        assert_eq!(base16().encode(&BigUint::from_str_radix("ffff", 16)?, false), "ffff");
        assert_eq!(
            base16().encode(&BigUint::from_str_radix("ff00ff00", 16)?, false),
            "ff00ff00"
        );
        Ok(())
    }

    #[test]
    fn case_insensitive_decoding() -> BigBaseTestResult {
        let n = BigUint::from_str_radix("ff00ff00", 16)?;
        assert_eq!(base16().decode("FF00FF00", false)?, n);
        assert_eq!(base16().decode("Ff00fF00", false)?, n);

        let m = base32().decode("MZXW6", false)?;
        assert_eq!(base32().decode("mzxw6", false)?, m);
        Ok(())
    }

    #[test]
    fn ignored_characters_are_skipped() -> BigBaseTestResult {
        let spaced = BaseX::new(
            "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz",
            " \n\r\t",
            0,
        )?;
        let n = BigUint::from_str_radix("73696d706c792061206c6f6e6720737472696e67", 16)?;
        assert_eq!(
            spaced.decode("2cFu pjhn\nEsSn\t59qH Xstm K2ff pLv2\r\n", false)?,
            n
        );
        assert!(spaced.is_valid("2cFu pjhn\nEsSn", false));
        Ok(())
    }

    #[test]
    fn rfc4648_block_padding() -> BigBaseTestResult {
        // RFC 4648 test vectors, sans the padding the encoder does not emit
        assert_eq!(base32_rfc4648().encode_bytes(b"f", false), "MY");
        assert_eq!(base32_rfc4648().encode_bytes(b"fo", false), "MZXQ");
        assert_eq!(base32_rfc4648().encode_bytes(b"foo", false), "MZXW6");
        assert_eq!(base32_rfc4648().encode_bytes(b"foob", false), "MZXW6YQ");
        assert_eq!(base32_rfc4648().encode_bytes(b"fooba", false), "MZXW6YTB");
        assert_eq!(base32_rfc4648().encode_bytes(b"foobar", false), "MZXW6YTBOI");

        assert_eq!(base32_rfc4648().decode_bytes("MY======", false)?, b"f");
        assert_eq!(base32_rfc4648().decode_bytes("MZXW6===", false)?, b"foo");
        assert_eq!(base32_rfc4648().decode_bytes("mzxw6ytboi======", false)?, b"foobar");

        assert_eq!(base64_rfc4648().encode_bytes(b"foobar", false), "Zm9vYmFy");
        assert_eq!(base64_rfc4648().encode_bytes(b"foob", false), "Zm9vYg");
        assert_eq!(base64_rfc4648().decode_bytes("Zm9vYg==", false)?, b"foob");
        assert_eq!(base64_rfc4648().decode_bytes("Zm9v\nYmFy\n", false)?, b"foobar");
        Ok(())
    }

    #[test]
    fn byte_round_trip_all_bundled() -> BigBaseTestResult {
        let payload: Vec<u8> = (1u8..=96).collect(); // non-zero lead byte
        let codecs: &[&BaseX] = &[
            base2(),
            base8(),
            base11(),
            base16(),
            base16_rfc4648(),
            base32(),
            base32_hex(),
            base32_rfc4648(),
            base32_rfc4648_hex(),
            base32_crockford(),
            base36(),
            base58_gmp(),
            base58_bitcoin(),
            base58_ripple(),
            base58_flickr(),
            base62(),
            base62_inverted(),
            base64(),
            base64_url(),
            base64_rfc4648(),
            base64_rfc4648_url(),
            base66(),
        ];
        for codec in codecs {
            let encoded = codec.encode_bytes(&payload, false);
            assert_eq!(
                codec.decode_bytes(&encoded, false)?,
                payload,
                "round trip in base {}",
                codec.base()
            );
            assert!(codec.is_valid(&encoded, false));

            let encoded = codec.encode_bytes(&payload, true);
            assert_eq!(
                codec.decode_bytes(&encoded, true)?,
                payload,
                "checksum round trip in base {}",
                codec.base()
            );
            assert!(codec.is_valid(&encoded, true));
        }
        Ok(())
    }

    #[test]
    fn checksum_detects_single_character_tampering() {
        for codec in [base16(), base32(), base64()] {
            let encoded = codec.encode_bytes(b"checksummed payload", true);
            assert!(codec.is_valid(&encoded, true));

            // substitute every position with every other alphabet character:
            // a power-of-two checksum digit catches all of them
            let bytes = encoded.as_bytes();
            for pos in 0..bytes.len() {
                for i in 0..codec.base() {
                    let replacement = codec.encode(&BigUint::from(i as u64), false);
                    let replacement = replacement.as_bytes()[replacement.len() - 1];
                    if replacement == bytes[pos] {
                        continue;
                    }
                    let mut tampered = bytes.to_vec();
                    tampered[pos] = replacement;
                    let tampered = String::from_utf8(tampered).unwrap();
                    assert!(
                        !codec.is_valid(&tampered, true),
                        "undetected tamper at {} in base {}",
                        pos,
                        codec.base()
                    );
                }
            }
        }
    }

    #[test]
    fn checksum_failures_surface_as_errors() {
        let encoded = base58().encode_bytes(b"Hello world!", true);
        assert!(base58().decode_bytes(&encoded, true).is_ok());

        // swap the checksum character for a different alphabet character
        let mut tampered = encoded.into_bytes();
        let last = tampered.last_mut().unwrap();
        *last = if *last == b'1' { b'2' } else { b'1' };
        let tampered = String::from_utf8(tampered).unwrap();
        assert_eq!(
            base58().decode(&tampered, true).unwrap_err().kind(),
            ErrorKind::BadChecksum
        );
        assert!(!base58().is_valid(&tampered, true));

        // an empty stream cannot carry a checksum
        assert_eq!(
            base58().decode("", true).unwrap_err().kind(),
            ErrorKind::BadChecksum
        );
        assert!(!base58().is_valid("", true));
    }

    #[test]
    fn checksum_of_zero_is_consistent() -> BigBaseTestResult {
        for codec in [base16(), base58(), base62()] {
            let encoded = codec.encode(&BigUint::ZERO, true);
            assert_eq!(encoded.len(), 2);
            assert!(codec.is_valid(&encoded, true));
            assert!(codec.decode(&encoded, true)?.is_zero());
        }
        Ok(())
    }

    #[test]
    fn invalid_characters_fail_with_offset() {
        let err = base58().decode("2NEpo0TZ", false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidChar { chr: '0', offset: 5 });
        assert!(!base58().is_valid("2NEpo0TZ", false));

        let err = base16().decode("ff-00", false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidChar { chr: '-', offset: 2 });
    }

    #[test]
    fn construction_rejects_malformed_alphabets() {
        assert_eq!(
            BaseX::new("0", "", 0).unwrap_err().kind(),
            ErrorKind::BaseOutOfRange { base: 1 }
        );
        assert_eq!(
            BaseX::new("", "", 0).unwrap_err().kind(),
            ErrorKind::BaseOutOfRange { base: 0 }
        );
        // duplicate alphabet entry
        assert!(BaseX::new("0123401", "", 0).is_err());
        // alphabet character also in the ignored set
        assert!(BaseX::new("0123456789", "9 ", 0).is_err());
        // case folding collides two alphabet characters
        assert!(BaseX::new("aA01", "", IGNORE_CASE).is_err());
        // fine without the flag
        assert!(BaseX::new("aA01", "", 0).is_ok());
    }

    #[test]
    fn codecs_share_across_threads() {
        let handles: Vec<_> = (0u64..4)
            .map(|i| {
                std::thread::spawn(move || {
                    let codec = base58();
                    let n = BigUint::from(987654321u64 + i);
                    codec.decode(&codec.encode(&n, true), true).unwrap() == n
                })
            })
            .collect();
        for h in handles {
            assert!(h.join().unwrap());
        }
    }

    #[test]
    fn encoded_string_round_trips_back_to_itself() -> BigBaseTestResult {
        // decode → encode is the identity on canonical encodings
        for encoded in ["2cFupjhnEsSn59qHXstmK2ffpLv2", "Rt5zm", "ABnLTmg"] {
            assert_eq!(base58().encode(&base58().decode(encoded, false)?, false), encoded);
        }
        Ok(())
    }
}
