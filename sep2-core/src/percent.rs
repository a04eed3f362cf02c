//! Fixed-point percentage types
//!
//! SEP2 expresses percentages as integers in hundredths of a percent, so
//! 100% is carried on the wire as 10000.

use crate::error::{Sep2Error, Sep2Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Percentage in hundredths of a percent, 0 to 100.00%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PerCent(u16);

impl PerCent {
    /// The wire value representing 100.00%
    pub const MAX: u16 = 10000;

    /// Construct from a hundredths-of-a-percent value.
    ///
    /// # Errors
    ///
    /// Returns `Sep2Error::OutOfRange` if `value > 10000`.
    pub fn new(value: u16) -> Sep2Result<Self> {
        if value > Self::MAX {
            return Err(Sep2Error::OutOfRange {
                type_name: "PerCent",
                value: value as i64,
            });
        }
        Ok(Self(value))
    }

    /// The raw hundredths-of-a-percent value.
    pub fn value(self) -> u16 {
        self.0
    }
}

impl fmt::Display for PerCent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Signed percentage in hundredths of a percent, -100.00% to 100.00%.
///
/// Negative values indicate export (power flowing towards the grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignedPerCent(i16);

impl SignedPerCent {
    /// The wire value representing 100.00%
    pub const MAX: i16 = 10000;
    /// The wire value representing -100.00%
    pub const MIN: i16 = -10000;

    /// Construct from a hundredths-of-a-percent value.
    ///
    /// # Errors
    ///
    /// Returns `Sep2Error::OutOfRange` if the value is outside
    /// -10000..=10000.
    pub fn new(value: i16) -> Sep2Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(Sep2Error::OutOfRange {
                type_name: "SignedPerCent",
                value: value as i64,
            });
        }
        Ok(Self(value))
    }

    /// The raw hundredths-of-a-percent value.
    pub fn value(self) -> i16 {
        self.0
    }
}

impl fmt::Display for SignedPerCent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_range() {
        assert!(PerCent::new(0).is_ok());
        assert!(PerCent::new(10000).is_ok());
        assert!(PerCent::new(10001).is_err());
    }

    #[test]
    fn test_signed_percent_range() {
        assert!(SignedPerCent::new(-10000).is_ok());
        assert!(SignedPerCent::new(10000).is_ok());
        assert!(SignedPerCent::new(-10001).is_err());
        assert!(SignedPerCent::new(10001).is_err());
    }

    #[test]
    fn test_percent_value() {
        assert_eq!(PerCent::new(9500).unwrap().value(), 9500);
        assert_eq!(SignedPerCent::new(-2500).unwrap().value(), -2500);
    }
}
