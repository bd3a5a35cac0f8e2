use crate::ascii_buf::ascii_string;
use crate::constants::{DIGIT_ALPHABET, RADIX_BUF_LEN, RADIX_INTEGRAL_LEN};
use crate::dtoa::dtoa_buf;
use crate::radix::Radix;

/// Canonical decimal form of a number, as produced by `String(number)`.
pub fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value == f64::INFINITY {
        return "Infinity".to_string();
    }
    if value == f64::NEG_INFINITY {
        return "-Infinity".to_string();
    }

    dtoa_buf(value).to_string()
}

/// Formats a finite number in a non-decimal radix.
///
/// Integral digits are produced right to left from the middle of the buffer
/// so the sign can be prepended in place; fractional digits grow to the
/// right and stop once the remainder is exhausted or the buffer is full.
/// The last fractional digit is truncated, not rounded.
pub fn number_to_string_radix(value: f64, radix: Radix) -> String {
    debug_assert!(value.is_finite(), "radix formatting of a non-finite value");
    debug_assert!(radix != Radix::DECIMAL, "radix 10 uses the decimal formatter");

    let mut buf = [0u8; RADIX_BUF_LEN];
    let base = f64::from(radix);
    let max_digit = f64::from(radix.get() - 1);

    let mut p = RADIX_INTEGRAL_LEN;
    let mut n = value.abs();
    loop {
        let next = (n / base).trunc();
        let remainder = (n - next * base).clamp(0.0, max_digit);
        p -= 1;
        buf[p] = DIGIT_ALPHABET[remainder as usize];
        n = next;
        if n == 0.0 || p == 1 {
            break;
        }
    }

    if value < 0.0 {
        p -= 1;
        buf[p] = b'-';
    }

    let mut f = RADIX_INTEGRAL_LEN;
    let mut n = value.abs();
    n -= n.trunc();
    if n != 0.0 {
        buf[f] = b'.';
        f += 1;
        loop {
            n *= base;
            let digit = n.trunc().min(max_digit);
            buf[f] = DIGIT_ALPHABET[digit as usize];
            f += 1;
            n -= digit;
            if n == 0.0 || f == RADIX_BUF_LEN {
                break;
            }
        }
    }

    ascii_string(&buf[p..f])
}
