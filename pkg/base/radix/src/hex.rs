use alloc::vec::Vec;
use core::iter::Enumerate;
use core::str::Chars;

use crate::{DecodeRadixError, DecodeRadixErrorKind};

/*
Two policies are supported for decoding hex text:
- Tolerant (hex_decode)
    - Any character outside of [0-9a-fA-F] is treated as a '0' digit.
    - Never fails.
- Strict (hex_decode_strict)
    - The first character outside of [0-9a-fA-F] fails the entire decode.

In both cases, pairs are formed from characters (not UTF-8 bytes) and an odd
trailing character is ignored without being looked at. Callers that need
exact input validation must check the parity of the length themselves.
*/

/// Number of bytes which will be produced by decoding 'text_len' characters.
pub fn hex_decoded_len(text_len: usize) -> usize {
    text_len / 2
}

/// Decodes hex text using the tolerant policy.
///
/// Each pair of characters becomes one byte with the first character of the
/// pair being the upper nibble.
pub fn hex_decode(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(hex_decoded_len(text.len()));
    let mut num_invalid = 0;

    for pair in DigitPairs::new(text) {
        let mut byte = 0;
        for (_, c) in pair.iter().cloned() {
            let nibble = match hex_digit_value(c) {
                Some(v) => v,
                None => {
                    num_invalid += 1;
                    0
                }
            };

            byte = (byte << 4) | nibble;
        }

        out.push(byte);
    }

    if num_invalid > 0 {
        debug!("Substituted zero for {} invalid hex digit(s)", num_invalid);
    }

    out
}

/// Decodes hex text using the strict policy.
///
/// No partial output is returned on failure.
pub fn hex_decode_strict(text: &str) -> Result<Vec<u8>, DecodeRadixError> {
    let mut out = Vec::with_capacity(hex_decoded_len(text.len()));

    for pair in DigitPairs::new(text) {
        let mut byte = 0;
        for (input_position, digit) in pair.iter().cloned() {
            let nibble = hex_digit_value(digit).ok_or(DecodeRadixError {
                input_position,
                kind: DecodeRadixErrorKind::InvalidHexDigit { digit },
            })?;

            byte = (byte << 4) | nibble;
        }

        out.push(byte);
    }

    Ok(out)
}

fn hex_digit_value(c: char) -> Option<u8> {
    Some(match c {
        '0'..='9' => (c as u8) - b'0',
        'a'..='f' => (c as u8) - b'a' + 10,
        'A'..='F' => (c as u8) - b'A' + 10,
        _ => {
            return None;
        }
    })
}

/// Iterates over consecutive pairs of characters along with their positions.
struct DigitPairs<'a> {
    chars: Enumerate<Chars<'a>>,
}

impl<'a> DigitPairs<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars().enumerate(),
        }
    }
}

impl<'a> Iterator for DigitPairs<'a> {
    type Item = [(usize, char); 2];

    fn next(&mut self) -> Option<Self::Item> {
        let high = self.chars.next()?;

        match self.chars.next() {
            Some(low) => Some([high, low]),
            None => {
                trace!("Dropping unpaired hex character at position {}", high.0);
                None
            }
        }
    }
}
