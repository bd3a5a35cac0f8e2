use std::error::Error as StdError;
use std::fmt;

mod ascii_buf;
mod constants;
mod dec_parse;
mod digit_table;
mod dtoa;
mod index;
mod number_builtins;
mod number_format;
mod radix;
mod radix_scan;
mod runtime_values;

pub use constants::{
    DIGIT_ALPHABET, DTOA_BUF_LEN, EPSILON, MAX_RADIX, MAX_SAFE_INTEGER, MAX_VALUE, MIN_RADIX,
    MIN_SAFE_INTEGER, MIN_VALUE, RADIX_BUF_LEN, RADIX_FRACTION_DIGITS, RADIX_FRACTION_LEN,
    RADIX_INTEGRAL_LEN,
};
pub use dec_parse::{dec_parse, string_to_index, string_to_number};
pub use digit_table::{DIGIT_TABLE, INVALID_DIGIT, char_to_hex, digit_value};
pub use dtoa::{ShortestDigits, dtoa};
pub use index::value_to_index;
pub use number_builtins::{
    GlobalFunction, NumberInstanceMethod, NumberMethod, construct_number, eval_global_function,
    eval_number_instance_method, eval_number_method, is_finite, is_integer, is_nan,
    is_safe_integer, number_constant, parse_float, parse_int,
};
pub use number_format::{number_to_string, number_to_string_radix};
pub use radix::Radix;
pub use radix_scan::{Scanned, bin_parse, hex_parse, oct_parse, radix_parse};
pub use runtime_values::{ArrayValue, ObjectValue, Value};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    TypeError(String),
    RangeError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeError(msg) => write!(f, "TypeError: {msg}"),
            Self::RangeError(msg) => write!(f, "RangeError: {msg}"),
        }
    }
}

impl StdError for Error {}

#[cfg(test)]
mod tests;
