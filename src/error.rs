use std::fmt::{self, Display, Formatter};

/// Error type for every fallible operation in the crate. The `kind` carries
/// the structured payload (offending character, byte offset, base) so callers
/// can recover; the `message` is a preformatted human-readable rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BigBaseError {
    kind: ErrorKind,
    message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Division or modulus by zero.
    DivByZero,
    /// A numeric string contained a character outside `[0, base)`.
    InvalidDigit { chr: char, offset: usize },
    /// Requested base is outside `[2, 36] ∪ {256}` for string conversion, or
    /// a codec alphabet was outside `[2, 256]` (or otherwise malformed).
    BaseOutOfRange { base: usize },
    /// A codec input contained a character that is neither an alphabet
    /// character nor an ignored one.
    InvalidChar { chr: char, offset: usize },
    /// The trailing checksum character did not match the decoded payload.
    BadChecksum,
}

impl BigBaseError {
    pub fn div_by_zero() -> Self {
        Self {
            kind: ErrorKind::DivByZero,
            message: "division or modulus by zero".to_string(),
        }
    }

    pub fn invalid_digit(chr: char, offset: usize) -> Self {
        Self {
            kind: ErrorKind::InvalidDigit { chr, offset },
            message: format!("invalid digit '{}' at offset {}", chr.escape_default(), offset),
        }
    }

    pub fn base_out_of_range(base: usize) -> Self {
        Self {
            kind: ErrorKind::BaseOutOfRange { base },
            message: format!("base {} is not supported", base),
        }
    }

    /// Same kind as [`base_out_of_range`](Self::base_out_of_range) but for an
    /// alphabet whose size is fine while its contents are not.
    pub fn invalid_alphabet(base: usize) -> Self {
        Self {
            kind: ErrorKind::BaseOutOfRange { base },
            message: format!(
                "alphabet of size {} has duplicate or conflicting characters",
                base
            ),
        }
    }

    pub fn invalid_char(chr: char, offset: usize) -> Self {
        Self {
            kind: ErrorKind::InvalidChar { chr, offset },
            message: format!("invalid character '{}' at offset {}", chr.escape_default(), offset),
        }
    }

    pub fn bad_checksum() -> Self {
        Self {
            kind: ErrorKind::BadChecksum,
            message: "checksum mismatch".to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl Display for BigBaseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for BigBaseError {}

pub type BigBaseResult<T> = Result<T, BigBaseError>;
pub type BigBaseTestResult = Result<(), BigBaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_carry_payload() {
        let e = BigBaseError::invalid_digit('x', 3);
        assert_eq!(e.kind(), ErrorKind::InvalidDigit { chr: 'x', offset: 3 });

        let e = BigBaseError::invalid_char('!', 0);
        assert_eq!(e.kind(), ErrorKind::InvalidChar { chr: '!', offset: 0 });

        let e = BigBaseError::base_out_of_range(1);
        assert_eq!(e.kind(), ErrorKind::BaseOutOfRange { base: 1 });
    }

    #[test]
    fn display_is_readable() {
        assert_eq!(
            BigBaseError::div_by_zero().to_string(),
            "division or modulus by zero"
        );
        assert_eq!(
            BigBaseError::invalid_digit('z', 7).to_string(),
            "invalid digit 'z' at offset 7"
        );
    }
}
