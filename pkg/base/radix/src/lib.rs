#![no_std]

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "alloc")]
#[macro_use]
extern crate alloc;

#[cfg(feature = "std")]
#[macro_use]
extern crate failure;

#[macro_use]
extern crate log;

#[cfg(feature = "alloc")]
mod hex;

#[cfg(feature = "alloc")]
pub use hex::*;

/// Error produced when some text can't be interpreted as digits of a given
/// radix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(Fail))]
pub struct DecodeRadixError {
    /// Zero-based index of the offending character in the input text.
    ///
    /// NOTE: This counts characters and not UTF-8 bytes.
    pub input_position: usize,

    pub kind: DecodeRadixErrorKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeRadixErrorKind {
    /// Saw a character outside of [0-9a-fA-F].
    InvalidHexDigit { digit: char },
}

impl core::fmt::Display for DecodeRadixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            DecodeRadixErrorKind::InvalidHexDigit { digit } => write!(
                f,
                "invalid hex digit {:?} at position {}",
                digit, self.input_position
            ),
        }
    }
}
