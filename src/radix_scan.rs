use crate::digit_table::{char_to_hex, digit_value};
use crate::radix::Radix;

/// Result of scanning a literal: the accumulated value, how many bytes were
/// consumed, and the unconsumed remainder of the input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scanned<'a, T> {
    pub value: T,
    pub digits: usize,
    pub rest: &'a [u8],
}

impl<T> Scanned<'_, T> {
    pub fn is_empty(&self) -> bool {
        self.digits == 0
    }
}

/// Accumulates the maximal prefix of `input` accepted by `digit`. Values
/// wrap on overflow of 64 bits.
fn scan_digits(input: &[u8], base: u64, digit: impl Fn(u8) -> Option<u8>) -> Scanned<'_, u64> {
    let mut value = 0u64;
    let mut digits = 0usize;
    for &byte in input {
        let Some(d) = digit(byte) else {
            break;
        };
        value = value.wrapping_mul(base).wrapping_add(u64::from(d));
        digits += 1;
    }
    Scanned {
        value,
        digits,
        rest: &input[digits..],
    }
}

pub fn bin_parse(input: &[u8]) -> Scanned<'_, u64> {
    scan_digits(input, 2, |byte| matches!(byte, b'0' | b'1').then(|| byte - b'0'))
}

pub fn oct_parse(input: &[u8]) -> Scanned<'_, u64> {
    scan_digits(input, 8, |byte| matches!(byte, b'0'..=b'7').then(|| byte - b'0'))
}

pub fn hex_parse(input: &[u8]) -> Scanned<'_, u64> {
    scan_digits(input, 16, |byte| u8::try_from(char_to_hex(byte)).ok())
}

/// Parses the maximal run of `radix` digits (letters in either case) at the
/// start of `input`. Returns `None` when not a single digit is present, so a
/// parsed zero stays distinguishable from no number at all.
pub fn radix_parse(input: &[u8], radix: Radix) -> Option<Scanned<'_, u64>> {
    let radix = radix.get();
    let scanned = scan_digits(input, u64::from(radix), |byte| {
        let d = digit_value(byte);
        (d < radix).then_some(d)
    });
    (!scanned.is_empty()).then_some(scanned)
}
