use core::fmt;

/// A sector number outside of `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidSectorError(pub u8);

impl fmt::Display for InvalidSectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid sector {}, expected 1..=6", self.0)
    }
}

impl core::error::Error for InvalidSectorError {}
