//! How decoding treats bytes that are not valid UTF-8.

use crate::error::TokenizerError;
use std::fmt;
use std::str::FromStr;

/// Controls how invalid UTF-8 is handled when decoding tokens to text.
///
/// Unknown token IDs are an error in every mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ErrorMode {
    /// Fail on any invalid byte sequence
    #[default]
    Strict,
    /// Drop invalid byte sequences
    Ignore,
    /// Substitute U+FFFD for each invalid byte sequence
    Replace,
}

impl ErrorMode {
    /// All recognized modes.
    pub const ALL: [ErrorMode; 3] = [ErrorMode::Strict, ErrorMode::Ignore, ErrorMode::Replace];

    /// The lowercase name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorMode::Strict => "strict",
            ErrorMode::Ignore => "ignore",
            ErrorMode::Replace => "replace",
        }
    }
}

impl FromStr for ErrorMode {
    type Err = TokenizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(ErrorMode::Strict),
            "ignore" => Ok(ErrorMode::Ignore),
            "replace" => Ok(ErrorMode::Replace),
            _ => Err(TokenizerError::InvalidConfig(format!(
                "unknown decode error mode {s:?} (expected \"strict\", \"ignore\" or \"replace\")"
            ))),
        }
    }
}

impl fmt::Display for ErrorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_modes() {
        for mode in ErrorMode::ALL {
            assert_eq!(mode.as_str().parse::<ErrorMode>().unwrap(), mode);
            assert_eq!(mode.to_string(), mode.as_str());
        }
    }

    #[test]
    fn test_parse_unknown_mode() {
        for bad in ["", "Strict", "backslashreplace", "surrogateescape"] {
            let err = bad.parse::<ErrorMode>().unwrap_err();
            assert!(matches!(err, TokenizerError::InvalidConfig(_)), "{bad}");
        }
    }

    #[test]
    fn test_default_is_strict() {
        assert_eq!(ErrorMode::default(), ErrorMode::Strict);
    }
}
