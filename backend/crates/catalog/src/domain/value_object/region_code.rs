//! Region Code Value Object
//!
//! Short administrative code for a region (e.g. `AKL`, `WLG`).
//!
//! ## Invariants
//! - 2 to 10 characters after normalization
//! - ASCII letters and digits only
//! - Stored in uppercase canonical form

use std::fmt;
use unicode_normalization::UnicodeNormalization;

/// Minimum length for a region code (in characters)
pub const REGION_CODE_MIN_LENGTH: usize = 2;

/// Maximum length for a region code (in characters)
pub const REGION_CODE_MAX_LENGTH: usize = 10;

/// Error returned when region code validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionCodeError {
    /// Code is empty after normalization
    Empty,

    /// Code is too short (minimum: REGION_CODE_MIN_LENGTH)
    TooShort { length: usize, min: usize },

    /// Code is too long (maximum: REGION_CODE_MAX_LENGTH)
    TooLong { length: usize, max: usize },

    /// Code contains a character outside A-Z / 0-9
    InvalidCharacter { char: char, position: usize },
}

impl fmt::Display for RegionCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "must not be blank"),
            Self::TooShort { length, min } => {
                write!(f, "is too short ({length} chars, minimum {min})")
            }
            Self::TooLong { length, max } => {
                write!(f, "is too long ({length} chars, maximum {max})")
            }
            Self::InvalidCharacter { char, position } => {
                write!(
                    f,
                    "has invalid character '{char}' at position {position}. Only letters and digits are allowed"
                )
            }
        }
    }
}

impl std::error::Error for RegionCodeError {}

/// Validated, uppercase region code
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegionCode(String);

impl RegionCode {
    /// Create a new RegionCode from raw input
    ///
    /// Applies normalization (NFKC, trim, uppercase) and validates.
    pub fn new(input: impl AsRef<str>) -> Result<Self, RegionCodeError> {
        let canonical = Self::normalize(input.as_ref());
        Self::validate(&canonical)?;
        Ok(Self(canonical))
    }

    /// Create from a database value (assumes already validated)
    pub fn from_db(value: String) -> Self {
        Self(value)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }

    fn normalize(input: &str) -> String {
        input
            .nfkc()
            .collect::<String>()
            .trim()
            .to_ascii_uppercase()
    }

    fn validate(canonical: &str) -> Result<(), RegionCodeError> {
        if canonical.is_empty() {
            return Err(RegionCodeError::Empty);
        }

        let length = canonical.chars().count();
        if length < REGION_CODE_MIN_LENGTH {
            return Err(RegionCodeError::TooShort {
                length,
                min: REGION_CODE_MIN_LENGTH,
            });
        }
        if length > REGION_CODE_MAX_LENGTH {
            return Err(RegionCodeError::TooLong {
                length,
                max: REGION_CODE_MAX_LENGTH,
            });
        }

        for (pos, ch) in canonical.chars().enumerate() {
            if !(ch.is_ascii_uppercase() || ch.is_ascii_digit()) {
                return Err(RegionCodeError::InvalidCharacter {
                    char: ch,
                    position: pos,
                });
            }
        }

        Ok(())
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RegionCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RegionCode {
    type Error = RegionCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RegionCode> for String {
    fn from(code: RegionCode) -> Self {
        code.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod normalization {
        use super::*;

        #[test]
        fn test_trim_whitespace() {
            let code = RegionCode::new("  akl  ").unwrap();
            assert_eq!(code.as_str(), "AKL");
        }

        #[test]
        fn test_uppercase() {
            let code = RegionCode::new("wlg").unwrap();
            assert_eq!(code.as_str(), "WLG");
        }

        #[test]
        fn test_nfkc_normalization() {
            // Full-width 'ＡＫＬ' becomes ASCII after NFKC
            let code = RegionCode::new("ＡＫＬ").unwrap();
            assert_eq!(code.as_str(), "AKL");
        }
    }

    mod validation {
        use super::*;

        #[test]
        fn test_empty_fails() {
            assert!(matches!(RegionCode::new(""), Err(RegionCodeError::Empty)));
            assert!(matches!(
                RegionCode::new("   "),
                Err(RegionCodeError::Empty)
            ));
        }

        #[test]
        fn test_too_short() {
            assert!(matches!(
                RegionCode::new("a"),
                Err(RegionCodeError::TooShort { length: 1, min: 2 })
            ));
        }

        #[test]
        fn test_length_bounds() {
            assert!(RegionCode::new("ab").is_ok());
            assert!(RegionCode::new("a".repeat(REGION_CODE_MAX_LENGTH)).is_ok());
            assert!(matches!(
                RegionCode::new("a".repeat(REGION_CODE_MAX_LENGTH + 1)),
                Err(RegionCodeError::TooLong { .. })
            ));
        }

        #[test]
        fn test_digits_allowed() {
            assert!(RegionCode::new("BOP2").is_ok());
        }

        #[test]
        fn test_invalid_character() {
            assert!(matches!(
                RegionCode::new("AK-L"),
                Err(RegionCodeError::InvalidCharacter { char: '-', .. })
            ));
            assert!(matches!(
                RegionCode::new("AK L"),
                Err(RegionCodeError::InvalidCharacter { .. })
            ));
        }
    }

    mod conversions {
        use super::*;

        #[test]
        fn test_try_from_string() {
            let code: Result<RegionCode, _> = "ntl".to_string().try_into();
            assert_eq!(code.unwrap().as_str(), "NTL");
        }

        #[test]
        fn test_into_string() {
            let s: String = RegionCode::new("STL").unwrap().into();
            assert_eq!(s, "STL");
        }

        #[test]
        fn test_display() {
            assert_eq!(RegionCode::new("AKL").unwrap().to_string(), "AKL");
        }
    }
}
