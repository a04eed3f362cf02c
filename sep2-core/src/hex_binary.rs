//! Fixed-width hex binary types for SEP2
//!
//! SEP2 encodes bitmaps and identifiers as hex strings (`HexBinary8` through
//! `HexBinary160`). Only the *length* of the string is validated (at most
//! N/4 hex characters); the character content itself is deliberately not
//! checked, matching the permissiveness of deployed implementations.

use crate::error::{Sep2Error, Sep2Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! hex_binary {
    ($(#[$doc:meta])* $name:ident, $bits:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Maximum number of hex characters (bit width / 4)
            pub const MAX_LEN: usize = $bits / 4;

            /// Construct from a hex string.
            ///
            /// # Errors
            ///
            /// Returns `Sep2Error::LengthExceeded` if the string is longer
            /// than `MAX_LEN` characters. The content is not required to be
            /// valid hex digits.
            pub fn new(value: impl Into<String>) -> Sep2Result<Self> {
                let value = value.into();
                if value.len() > Self::MAX_LEN {
                    return Err(Sep2Error::LengthExceeded {
                        type_name: stringify!($name),
                        max: Self::MAX_LEN,
                    });
                }
                Ok(Self(value))
            }

            /// Get the hex string.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the underlying string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = Sep2Error;

            fn from_str(s: &str) -> Sep2Result<Self> {
                Self::new(s)
            }
        }
    };
}

hex_binary!(
    /// 8 bit hex string (max 2 characters)
    HexBinary8,
    8
);
hex_binary!(
    /// 16 bit hex string (max 4 characters)
    HexBinary16,
    16
);
hex_binary!(
    /// 32 bit hex string (max 8 characters)
    HexBinary32,
    32
);
hex_binary!(
    /// 48 bit hex string (max 12 characters)
    HexBinary48,
    48
);
hex_binary!(
    /// 64 bit hex string (max 16 characters)
    HexBinary64,
    64
);
hex_binary!(
    /// 128 bit hex string (max 32 characters)
    HexBinary128,
    128
);
hex_binary!(
    /// 160 bit hex string (max 40 characters)
    HexBinary160,
    160
);

/// Master resource identifier, a globally unique 128 bit value.
pub type Mrid = HexBinary128;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_binary_at_boundary() {
        assert!(HexBinary8::new("ff").is_ok());
        assert!(HexBinary16::new("ffff").is_ok());
        assert!(HexBinary32::new("ffffffff").is_ok());
        assert!(HexBinary48::new("f".repeat(12)).is_ok());
        assert!(HexBinary64::new("f".repeat(16)).is_ok());
        assert!(HexBinary128::new("f".repeat(32)).is_ok());
        assert!(HexBinary160::new("f".repeat(40)).is_ok());
    }

    #[test]
    fn test_hex_binary_over_boundary() {
        assert!(matches!(
            HexBinary8::new("fff"),
            Err(Sep2Error::LengthExceeded { max: 2, .. })
        ));
        assert!(matches!(
            HexBinary16::new("fffff"),
            Err(Sep2Error::LengthExceeded { max: 4, .. })
        ));
        assert!(matches!(
            HexBinary32::new("f".repeat(9)),
            Err(Sep2Error::LengthExceeded { max: 8, .. })
        ));
        assert!(matches!(
            HexBinary48::new("f".repeat(13)),
            Err(Sep2Error::LengthExceeded { max: 12, .. })
        ));
        assert!(matches!(
            HexBinary64::new("f".repeat(17)),
            Err(Sep2Error::LengthExceeded { max: 16, .. })
        ));
        assert!(matches!(
            HexBinary128::new("f".repeat(33)),
            Err(Sep2Error::LengthExceeded { max: 32, .. })
        ));
        assert!(matches!(
            HexBinary160::new("f".repeat(41)),
            Err(Sep2Error::LengthExceeded { max: 40, .. })
        ));
    }

    #[test]
    fn test_hex_binary_shorter_is_allowed() {
        let h = HexBinary32::new("0f").unwrap();
        assert_eq!(h.as_str(), "0f");
    }

    #[test]
    fn test_hex_binary_content_is_not_validated() {
        // Length-only validation is intentional; "zz" must be accepted.
        assert!(HexBinary8::new("zz").is_ok());
        assert!(HexBinary8::new("").is_ok());
    }

    #[test]
    fn test_hex_binary_from_str() {
        let h: HexBinary128 = "0123456789abcdef".parse().unwrap();
        assert_eq!(h.to_string(), "0123456789abcdef");
    }
}
