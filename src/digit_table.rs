/// Marker for bytes that are not a digit in any base up to 36. It compares
/// greater than or equal to every radix, so a single `>= radix` test rejects
/// both invalid bytes and digits too large for the active base.
pub const INVALID_DIGIT: u8 = 0xff;

/// Maps an input byte to its digit value in base 36: `0`-`9` are 0-9 and
/// letters of either case are 10-35.
pub static DIGIT_TABLE: [u8; 256] = build_digit_table();

const fn build_digit_table() -> [u8; 256] {
    let mut table = [INVALID_DIGIT; 256];
    let mut i = 0u8;
    while i < 10 {
        table[(b'0' + i) as usize] = i;
        i += 1;
    }
    let mut i = 0u8;
    while i < 26 {
        table[(b'a' + i) as usize] = 10 + i;
        table[(b'A' + i) as usize] = 10 + i;
        i += 1;
    }
    table
}

#[inline]
pub fn digit_value(byte: u8) -> u8 {
    DIGIT_TABLE[usize::from(byte)]
}

/// Hexadecimal digit value, or -1 when `byte` is not a hex digit.
#[inline]
pub fn char_to_hex(byte: u8) -> i8 {
    match digit_value(byte) {
        digit if digit < 16 => digit as i8,
        _ => -1,
    }
}
