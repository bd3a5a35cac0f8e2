use std::fmt::Write as _;

use crate::ascii_buf::AsciiBuf;
use crate::constants::{
    DTOA_BUF_LEN, DTOA_MAX_FIXED_EXPONENT, DTOA_MIN_FIXED_EXPONENT, MAX_SHORTEST_DIGITS,
};

/// Long enough for `{:e}` of any finite double, e.g. `2.2250738585072014e-308`.
const EXP_SCRATCH_LEN: usize = 32;

/// Minimal decimal digit string of a finite, non-zero magnitude. The value
/// equals `0.d1d2..dk * 10^point`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortestDigits {
    digits: [u8; MAX_SHORTEST_DIGITS],
    len: usize,
    point: i32,
}

impl ShortestDigits {
    /// Returns `None` for zero, NaN and the infinities.
    pub fn new(value: f64) -> Option<Self> {
        if !value.is_finite() || value == 0.0 {
            return None;
        }

        let mut scratch = AsciiBuf::<EXP_SCRATCH_LEN>::new();
        let written = write!(scratch, "{:e}", value.abs());
        debug_assert!(written.is_ok(), "exponent form of a double overflowed");

        let mut out = Self {
            digits: [0; MAX_SHORTEST_DIGITS],
            len: 0,
            point: 0,
        };
        let raw = scratch.as_bytes();
        let exp_idx = raw.iter().position(|&b| b == b'e')?;
        for &byte in &raw[..exp_idx] {
            if byte.is_ascii_digit() && out.len < MAX_SHORTEST_DIGITS {
                out.digits[out.len] = byte;
                out.len += 1;
            }
        }

        let (negative, exponent_src) = match &raw[exp_idx + 1..] {
            [b'-', rest @ ..] => (true, rest),
            rest => (false, rest),
        };
        let exponent = exponent_src
            .iter()
            .fold(0i32, |acc, &b| acc * 10 + i32::from(b - b'0'));
        let exponent = if negative { -exponent } else { exponent };
        out.point = exponent + 1;

        Some(out)
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits[..self.len]
    }

    /// Position of the decimal point relative to the first digit.
    pub fn point(&self) -> i32 {
        self.point
    }
}

/// Writes the canonical decimal form of a finite double into `buf` and
/// returns the number of bytes written.
pub fn dtoa(value: f64, buf: &mut [u8; DTOA_BUF_LEN]) -> usize {
    let out = dtoa_buf(value);
    let bytes = out.as_bytes();
    buf[..bytes.len()].copy_from_slice(bytes);
    bytes.len()
}

pub(crate) fn dtoa_buf(value: f64) -> AsciiBuf<DTOA_BUF_LEN> {
    let mut out = AsciiBuf::new();
    let Some(shortest) = ShortestDigits::new(value) else {
        out.push(b'0');
        return out;
    };

    if value < 0.0 {
        out.push(b'-');
    }

    let digits = shortest.digits();
    let k = digits.len() as i32;
    let n = shortest.point();

    if k <= n && n <= DTOA_MAX_FIXED_EXPONENT {
        out.extend(digits);
        out.push_repeated(b'0', (n - k) as usize);
    } else if 0 < n && n <= DTOA_MAX_FIXED_EXPONENT {
        let (integral, fraction) = digits.split_at(n as usize);
        out.extend(integral);
        out.push(b'.');
        out.extend(fraction);
    } else if DTOA_MIN_FIXED_EXPONENT < n && n <= 0 {
        out.extend(b"0.");
        out.push_repeated(b'0', (-n) as usize);
        out.extend(digits);
    } else {
        let (first, rest) = digits.split_at(1);
        out.extend(first);
        if !rest.is_empty() {
            out.push(b'.');
            out.extend(rest);
        }
        let exponent = n - 1;
        out.push(b'e');
        out.push(if exponent < 0 { b'-' } else { b'+' });
        let mut exp_buf = AsciiBuf::<4>::new();
        let written = write!(exp_buf, "{}", exponent.unsigned_abs());
        debug_assert!(written.is_ok(), "decimal exponent overflowed");
        out.extend(exp_buf.as_bytes());
    }

    out
}
