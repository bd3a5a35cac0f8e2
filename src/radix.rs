use super::*;
use crate::constants::{MAX_RADIX, MIN_RADIX};

/// Numeric base in `[2, 36]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Radix(u8);

impl Radix {
    pub const BINARY: Radix = Radix(2);
    pub const OCTAL: Radix = Radix(8);
    pub const DECIMAL: Radix = Radix(10);
    pub const HEX: Radix = Radix(16);

    pub fn new(radix: u32) -> Option<Self> {
        let radix = u8::try_from(radix).ok()?;
        (MIN_RADIX..=MAX_RADIX)
            .contains(&radix)
            .then_some(Self(radix))
    }

    /// Validates a radix argument given as a number, the way
    /// `Number.prototype.toString` receives it.
    pub fn from_number(radix: f64) -> Result<Self> {
        if radix < f64::from(MIN_RADIX) || radix > f64::from(MAX_RADIX) || radix != radix.trunc()
        {
            return Err(Error::RangeError(
                "toString() radix argument must be between 2 and 36".into(),
            ));
        }
        Ok(Self(radix as u8))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl From<Radix> for u32 {
    fn from(radix: Radix) -> Self {
        u32::from(radix.0)
    }
}

impl From<Radix> for f64 {
    fn from(radix: Radix) -> Self {
        f64::from(radix.0)
    }
}
