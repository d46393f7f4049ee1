// SPDX-License-Identifier: Apache-2.0

//! A small recursive-descent JSON parser that builds an owned value tree,
//! and writers that render the tree as JSON, JSONx or JXML.
//!
//! ```
//! use jtree::{Object, ParserConfig, XmlFormat, XmlOptions};
//!
//! let object = Object::parse(r#"{"b": 2, "a": [true, null]}"#, ParserConfig::default()).unwrap();
//! assert_eq!(object.json(), r#"{"a": [true, null], "b": 2}"#);
//!
//! let xml = object.xml(&XmlOptions::new(XmlFormat::JXml));
//! assert!(xml.contains("<j son=\"a:a\">"));
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod config;
pub use config::{ParserConfig, XmlFormat, XmlOptions, DEFAULT_MAX_DEPTH};

mod escape_processor;

mod json_writer;

mod number_parser;
pub use number_parser::NumberExtractor;

mod parse_error;
pub use parse_error::ParseError;

mod parser;
pub use parser::Parser;

mod slice_input_buffer;
pub use slice_input_buffer::{Error as InputBufferError, InputBuffer, SliceInputBuffer};

mod value;
pub use value::{Array, Object, Value};

mod xml_writer;
pub use xml_writer::{DEFAULT_HEADER, JSONX_ROOT_ATTRIB};

/// Check whether `input` starts with a value that parses under `config`.
pub fn validate(input: &str, config: ParserConfig) -> bool {
    Parser::with_config(input, config).next_value().is_ok()
}
