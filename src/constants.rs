/// 2^53 - 1 is the largest integer n such that n and n + 1
/// as well as -n and -n - 1 are all exactly representable
/// in the IEEE-754 format.
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;
pub const MIN_SAFE_INTEGER: f64 = -MAX_SAFE_INTEGER;

pub const EPSILON: f64 = f64::EPSILON;
pub const MAX_VALUE: f64 = f64::MAX;
/// Smallest positive subnormal, 5e-324.
pub const MIN_VALUE: f64 = 5e-324;

pub const MIN_RADIX: u8 = 2;
pub const MAX_RADIX: u8 = 36;

pub const DIGIT_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Radix 2 produces the longest integral part of a double: the largest
/// finite value is below 2^1024, so 1024 digits plus a minus sign.
pub const RADIX_INTEGRAL_LEN: usize = 1 + 1024;

/// Fractional digits emitted before the expansion is cut off. A double's
/// 52-bit mantissa is exhausted well within this many digits in the bases
/// where the expansion terminates.
pub const RADIX_FRACTION_DIGITS: usize = 54;

/// Decimal point plus the fractional digits.
pub const RADIX_FRACTION_LEN: usize = 1 + RADIX_FRACTION_DIGITS;

pub const RADIX_BUF_LEN: usize = RADIX_INTEGRAL_LEN + RADIX_FRACTION_LEN;

/// Scratch area for decimal formatting of a finite double.
pub const DTOA_BUF_LEN: usize = 128;

/// `f64` never needs more than 17 significant decimal digits to round trip.
pub(crate) const MAX_SHORTEST_DIGITS: usize = 17;

/// Fixed notation is used while the decimal exponent stays within
/// `(-6, 21]`.
pub(crate) const DTOA_MAX_FIXED_EXPONENT: i32 = 21;
pub(crate) const DTOA_MIN_FIXED_EXPONENT: i32 = -6;
