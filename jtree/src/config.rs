// SPDX-License-Identifier: Apache-2.0

//! Parser and writer configuration.

use alloc::string::String;

/// Nesting depth accepted by [`ParserConfig::default`].
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Options that control how permissive the parser is.
///
/// The configuration is fixed for the lifetime of a [`crate::Parser`] and is
/// consulted by every nested parse call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// When `false`, single-quoted strings, elided array members before a
    /// comma (`[1,,2]`) and a trailing comma before `}` are accepted.
    pub strict: bool,
    /// Containers nested deeper than this fail to parse.
    pub max_depth: usize,
}

impl ParserConfig {
    /// Standard JSON grammar (plus the unconditional trailing comma in arrays).
    pub const fn strict() -> Self {
        Self {
            strict: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Tolerant grammar.
    pub const fn lenient() -> Self {
        Self {
            strict: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::strict()
    }
}

/// XML tag vocabulary used by the XML writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum XmlFormat {
    /// IBM JSONx: `json:object`, `json:string`, ... with `name="..."` attributes.
    #[default]
    JsonX,
    /// Terse dialect: every node is `<j son="type[:name]">`.
    JXml,
}

/// Options for [`crate::Object::xml`] and [`crate::Array::xml`].
///
/// `None` selects the format's default header or root attributes;
/// `Some("")` suppresses them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmlOptions {
    pub format: XmlFormat,
    /// Text emitted before the root tag. Must carry its own trailing newline.
    pub header: Option<String>,
    /// Attribute text appended inside the root tag, starting with a space.
    pub attrib: Option<String>,
}

impl XmlOptions {
    pub fn new(format: XmlFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn with_attrib(mut self, attrib: impl Into<String>) -> Self {
        self.attrib = Some(attrib.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strict() {
        let config = ParserConfig::default();
        assert!(config.strict);
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        assert!(!ParserConfig::lenient().strict);
        assert_eq!(ParserConfig::lenient().with_max_depth(3).max_depth, 3);
    }

    #[test]
    fn test_xml_options_builder() {
        let options = XmlOptions::new(XmlFormat::JXml)
            .with_header("")
            .with_attrib(" id=\"1\"");
        assert_eq!(options.format, XmlFormat::JXml);
        assert_eq!(options.header.as_deref(), Some(""));
        assert_eq!(options.attrib.as_deref(), Some(" id=\"1\""));
        assert_eq!(XmlOptions::default().format, XmlFormat::JsonX);
    }
}
