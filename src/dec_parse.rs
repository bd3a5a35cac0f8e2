use crate::radix_scan::{Scanned, bin_parse, hex_parse, oct_parse};

const INFINITY_LITERAL: &[u8] = b"Infinity";

fn is_js_whitespace(ch: char) -> bool {
    matches!(
        ch,
        '\u{0009}'..='\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

fn count_ascii_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Parses the longest decimal literal prefix of `input`:
/// `digits [. digits] [(e|E) [+|-] digits]` with at least one mantissa digit.
/// An exponent marker that is not followed by digits is left unconsumed.
/// `digits` is zero and the value NaN when nothing matched.
pub fn dec_parse(input: &[u8]) -> Scanned<'_, f64> {
    let mut i = count_ascii_digits(input);
    let mut mantissa_digits = i;

    if input.get(i) == Some(&b'.') {
        let frac_digits = count_ascii_digits(&input[i + 1..]);
        if mantissa_digits + frac_digits > 0 {
            i += 1 + frac_digits;
            mantissa_digits += frac_digits;
        }
    }

    if mantissa_digits == 0 {
        return Scanned {
            value: f64::NAN,
            digits: 0,
            rest: input,
        };
    }

    if matches!(input.get(i), Some(b'e') | Some(b'E')) {
        let mut j = i + 1;
        if matches!(input.get(j), Some(b'+') | Some(b'-')) {
            j += 1;
        }
        let exp_digits = count_ascii_digits(&input[j.min(input.len())..]);
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }

    let value = std::str::from_utf8(&input[..i])
        .ok()
        .and_then(|literal| literal.parse::<f64>().ok())
        .unwrap_or(f64::NAN);

    Scanned {
        value,
        digits: i,
        rest: &input[i..],
    }
}

/// Converts a numeric string. With `parse_float` the longest valid prefix is
/// used and trailing garbage ignored (`parseFloat`); without it the whole
/// string must be a numeric literal surrounded by whitespace, and
/// `0x`/`0o`/`0b` literals are accepted (`Number(string)`).
pub fn string_to_number(src: &str, parse_float: bool) -> f64 {
    let trimmed = src.trim_start_matches(is_js_whitespace);
    let mut p = trimmed.as_bytes();

    if p.is_empty() {
        return if parse_float { f64::NAN } else { 0.0 };
    }

    let (negative, signed) = match p.first() {
        Some(b'-') => (true, true),
        Some(b'+') => (false, true),
        _ => (false, false),
    };
    if signed {
        p = &p[1..];
    }
    if p.is_empty() {
        return f64::NAN;
    }

    let prefix_base = match p {
        [b'0', b'x' | b'X', ..] => Some(16u8),
        [b'0', b'o' | b'O', ..] => Some(8),
        [b'0', b'b' | b'B', ..] => Some(2),
        _ => None,
    };

    let (num, rest) = match prefix_base {
        Some(base) if !parse_float => {
            if signed {
                return f64::NAN;
            }
            let digits = &p[2..];
            let scanned = match base {
                16 => hex_parse(digits),
                8 => oct_parse(digits),
                _ => bin_parse(digits),
            };
            if scanned.is_empty() {
                return f64::NAN;
            }
            (scanned.value as f64, scanned.rest)
        }
        _ => {
            let scanned = dec_parse(p);
            if !scanned.is_empty() {
                (scanned.value, scanned.rest)
            } else if p.starts_with(INFINITY_LITERAL) {
                (f64::INFINITY, &p[INFINITY_LITERAL.len()..])
            } else {
                return f64::NAN;
            }
        }
    };

    if !parse_float && !trailing_is_whitespace(rest) {
        return f64::NAN;
    }

    if negative { -num } else { num }
}

fn trailing_is_whitespace(rest: &[u8]) -> bool {
    match std::str::from_utf8(rest) {
        Ok(rest) => rest.chars().all(is_js_whitespace),
        Err(_) => false,
    }
}

/// Numeric value of a property-key string: the whole string must be a
/// decimal literal without a redundant leading zero. Anything else is NaN.
pub fn string_to_index(src: &str) -> f64 {
    let bytes = src.as_bytes();
    match bytes {
        [] => return f64::NAN,
        [b'0', _, ..] => return f64::NAN,
        _ => {}
    }

    let scanned = dec_parse(bytes);
    if scanned.is_empty() || !scanned.rest.is_empty() {
        return f64::NAN;
    }
    scanned.value
}
