// SPDX-License-Identifier: Apache-2.0

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Shared utilities for decoding and encoding escape sequences.
///
/// Decoding runs while a string literal is parsed; the encoders are used by
/// the JSON writer (quoted strings) and the XML writer (attributes, leaf text).
pub struct EscapeProcessor;

impl EscapeProcessor {
    /// Decode the character that followed a backslash and append the result.
    ///
    /// # Arguments
    /// * `escape_char` - The byte following the backslash
    /// * `delimiter` - The quote byte that opened the current literal
    /// * `out` - Destination for the decoded bytes
    ///
    /// Unknown escapes are kept verbatim, backslash included. An escaped
    /// quote only loses its backslash when it matches the literal's delimiter.
    pub fn process_simple_escape(escape_char: u8, delimiter: u8, out: &mut Vec<u8>) {
        match escape_char {
            b'\\' | b'/' => out.push(escape_char),
            b'b' => out.push(0x08), // Backspace
            b'f' => out.push(0x0C), // Form feed
            b'n' => out.push(b'\n'),
            b'r' => out.push(b'\r'),
            b't' => out.push(b'\t'),
            other if other == delimiter => out.push(other),
            other => {
                out.push(b'\\');
                out.push(other);
            }
        }
    }

    /// Write `value` as a double-quoted JSON string.
    ///
    /// Bytes below 0x20 without a short form are written as `\u` followed by
    /// six lowercase hex digits.
    pub fn write_json_string<W: fmt::Write>(out: &mut W, value: &str) -> fmt::Result {
        out.write_char('"')?;
        for ch in value.chars() {
            match ch {
                '"' => out.write_str("\\\"")?,
                '\\' => out.write_str("\\\\")?,
                '/' => out.write_str("\\/")?,
                '\u{08}' => out.write_str("\\b")?,
                '\u{0C}' => out.write_str("\\f")?,
                '\n' => out.write_str("\\n")?,
                '\r' => out.write_str("\\r")?,
                '\t' => out.write_str("\\t")?,
                c if (c as u32) < 0x20 => write!(out, "\\u{:06x}", c as u32)?,
                c => out.write_char(c)?,
            }
        }
        out.write_char('"')
    }

    /// Escape a member name for use inside a double-quoted XML attribute.
    pub fn escape_attribute(name: &str) -> String {
        let mut escaped = String::with_capacity(name.len());
        for ch in name.chars() {
            match ch {
                '"' => escaped.push_str("\\\""),
                '\'' => escaped.push_str("\\'"),
                c => escaped.push(c),
            }
        }
        escaped
    }

    /// Escape leaf text placed between XML tags. Only angle brackets are touched.
    pub fn escape_text(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for ch in text.chars() {
            match ch {
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                c => escaped.push(c),
            }
        }
        escaped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(escape_char: u8, delimiter: u8) -> Vec<u8> {
        let mut out = Vec::new();
        EscapeProcessor::process_simple_escape(escape_char, delimiter, &mut out);
        out
    }

    #[test]
    fn test_simple_escapes() {
        assert_eq!(decode(b'n', b'"'), b"\n");
        assert_eq!(decode(b't', b'"'), b"\t");
        assert_eq!(decode(b'r', b'"'), b"\r");
        assert_eq!(decode(b'b', b'"'), [0x08]);
        assert_eq!(decode(b'f', b'"'), [0x0C]);
        assert_eq!(decode(b'\\', b'"'), b"\\");
        assert_eq!(decode(b'/', b'"'), b"/");
    }

    #[test]
    fn test_escaped_quotes_depend_on_delimiter() {
        assert_eq!(decode(b'"', b'"'), b"\"");
        assert_eq!(decode(b'\'', b'\''), b"'");
        // A quote that is not the delimiter keeps its backslash
        assert_eq!(decode(b'\'', b'"'), b"\\'");
        assert_eq!(decode(b'"', b'\''), b"\\\"");
    }

    #[test]
    fn test_unknown_escape_is_preserved() {
        assert_eq!(decode(b'x', b'"'), b"\\x");
        assert_eq!(decode(b'u', b'"'), b"\\u");
    }

    #[test]
    fn test_write_json_string() {
        let mut out = String::new();
        EscapeProcessor::write_json_string(&mut out, "a\"b\\c/d\u{8}\u{c}\n\r\t").unwrap();
        assert_eq!(out, r#""a\"b\\c\/d\b\f\n\r\t""#);
    }

    #[test]
    fn test_control_bytes_use_six_hex_digits() {
        let mut out = String::new();
        EscapeProcessor::write_json_string(&mut out, "\u{7}\u{1f}").unwrap();
        assert_eq!(out, r#""\u000007\u00001f""#);
    }

    #[test]
    fn test_non_ascii_passes_through() {
        let mut out = String::new();
        EscapeProcessor::write_json_string(&mut out, "h\u{e9}\u{7f}").unwrap();
        assert_eq!(out, "\"h\u{e9}\u{7f}\"");
    }

    #[test]
    fn test_xml_escapes() {
        assert_eq!(EscapeProcessor::escape_attribute(r#"a"b'c"#), r#"a\"b\'c"#);
        assert_eq!(EscapeProcessor::escape_text("a<b>&c\u{7}"), "a&lt;b&gt;&c\u{7}");
    }
}
