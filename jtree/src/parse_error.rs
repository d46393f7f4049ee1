// SPDX-License-Identifier: Apache-2.0

/// Errors returned by the public parse entry points.
///
/// The grammar itself only knows "parsed" and "did not parse"; `position` is
/// the byte offset where the failed top-level attempt began, after any
/// leading whitespace.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// No value of any kind could be read.
    ExpectedValue { position: usize },
    /// A document expected to be an array did not parse as one.
    ExpectedArray { position: usize },
    /// A document expected to be an object did not parse as one.
    ExpectedObject { position: usize },
    /// The input bytes were not valid UTF-8.
    InvalidUtf8(core::str::Utf8Error),
}

impl ParseError {
    /// Byte offset of the failure, if it has one.
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::ExpectedValue { position }
            | ParseError::ExpectedArray { position }
            | ParseError::ExpectedObject { position } => Some(*position),
            ParseError::InvalidUtf8(_) => None,
        }
    }
}

impl From<core::str::Utf8Error> for ParseError {
    fn from(err: core::str::Utf8Error) -> Self {
        ParseError::InvalidUtf8(err)
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseError::ExpectedValue { position } => {
                write!(f, "expected a JSON value at byte {position}")
            }
            ParseError::ExpectedArray { position } => {
                write!(f, "expected a JSON array at byte {position}")
            }
            ParseError::ExpectedObject { position } => {
                write!(f, "expected a JSON object at byte {position}")
            }
            ParseError::InvalidUtf8(e) => write!(f, "Invalid UTF-8: {e}"),
        }
    }
}

impl core::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_error_conversion() {
        use core::str;
        // Lone continuation byte, built at runtime to avoid the invalid-literal lint
        let mut invalid_utf8_array = [0u8; 1];
        invalid_utf8_array[0] = 0b10000000u8;

        match str::from_utf8(&invalid_utf8_array) {
            Err(utf8_error) => {
                let parse_error: ParseError = utf8_error.into();
                assert!(matches!(parse_error, ParseError::InvalidUtf8(_)));
                assert_eq!(parse_error.position(), None);
            }
            Ok(_) => panic!("Expected UTF-8 validation to fail"),
        }
    }

    #[test]
    fn test_display_includes_position() {
        let error = ParseError::ExpectedObject { position: 7 };
        assert_eq!(error.to_string(), "expected a JSON object at byte 7");
        assert_eq!(error.position(), Some(7));
    }
}
