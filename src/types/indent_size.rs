use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Width of one indentation unit when indenting with spaces (1-8 spaces)
///
/// Feature files are conventionally indented with tabs or with 2 or 4 spaces per
/// nesting level. Values outside 1-8 are either mistakes or impractical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IndentSize(u8);

impl IndentSize {
    /// Minimum indentation (1 space)
    pub const MIN: u8 = 1;
    /// Maximum indentation (8 spaces)
    pub const MAX: u8 = 8;

    /// Create a new IndentSize, validating it's in range 1-8.
    ///
    /// # Errors
    /// Returns `IndentSizeError` if the value is not between 1 and 8 inclusive.
    pub fn new(value: u8) -> Result<Self, IndentSizeError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(IndentSizeError(value))
        }
    }

    /// Get the underlying value (guaranteed to be 1-8).
    pub fn get(self) -> u8 {
        self.0
    }

    /// Convert to usize for use in calculations.
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Convert from a default value (for use in config defaults).
    ///
    /// # Panics
    /// Panics if the value is not in range 1-8. This is intended for const defaults only.
    pub const fn from_const(value: u8) -> Self {
        assert!(
            value >= Self::MIN && value <= Self::MAX,
            "IndentSize must be between 1 and 8"
        );
        Self(value)
    }
}

impl Default for IndentSize {
    fn default() -> Self {
        Self(2)
    }
}

/// Error type for invalid IndentSize values.
#[derive(Debug, Clone, Copy)]
pub struct IndentSizeError(u8);

impl fmt::Display for IndentSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "indent-width must be between {} and {} spaces, got {}. \
             Common values are 2 (default) or 4.",
            IndentSize::MIN,
            IndentSize::MAX,
            self.0
        )
    }
}

impl std::error::Error for IndentSizeError {}

impl<'de> Deserialize<'de> for IndentSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        IndentSize::new(value).map_err(serde::de::Error::custom)
    }
}

impl Serialize for IndentSize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl From<IndentSize> for usize {
    fn from(val: IndentSize) -> Self {
        val.0 as usize
    }
}
