// SPDX-License-Identifier: Apache-2.0

use alloc::string::String;
use alloc::vec::Vec;

use log::{debug, trace};

use crate::config::ParserConfig;
use crate::escape_processor::EscapeProcessor;
use crate::number_parser::{self, NumberExtractor};
use crate::parse_error::ParseError;
use crate::slice_input_buffer::{InputBuffer, SliceInputBuffer};
use crate::value::{Array, Object, Value};

/// A recursive-descent parser that builds [`Value`] trees.
///
/// Each grammar rule either succeeds and leaves the cursor after what it
/// consumed, or fails and rewinds to where it started (leading whitespace
/// excepted), so the next alternative can be tried at the same spot.
pub struct Parser<B> {
    input: B,
    config: ParserConfig,
}

impl<'a> Parser<SliceInputBuffer<'a>> {
    /// Creates a strict parser for the given JSON text.
    ///
    /// # Example
    /// ```
    /// use jtree::Parser;
    /// let value = Parser::new(r#"{"name": "value"}"#).next_value();
    /// assert!(value.is_ok());
    /// ```
    pub fn new(input: &'a str) -> Self {
        Self::with_config(input, ParserConfig::default())
    }

    /// Creates a parser with an explicit configuration.
    pub fn with_config(input: &'a str, config: ParserConfig) -> Self {
        Self::from_buffer(SliceInputBuffer::new(input.as_bytes()), config)
    }
}

impl<B: InputBuffer + NumberExtractor> Parser<B> {
    /// Creates a parser over any character source.
    pub fn from_buffer(input: B, config: ParserConfig) -> Self {
        Self { input, config }
    }

    /// Byte offset of the cursor. After a successful parse this is just past
    /// the root value; trailing text is left for the caller to inspect.
    pub fn position(&self) -> usize {
        self.input.current_pos()
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn into_inner(self) -> B {
        self.input
    }

    /// Parse the next value of any kind.
    pub fn next_value(&mut self) -> Result<Value, ParseError> {
        let position = self.document_start();
        let value = self
            .parse_value(0)
            .ok_or(ParseError::ExpectedValue { position })?;
        debug!("parsed value spanning {}..{}", position, self.position());
        Ok(value)
    }

    /// Parse the next value, which must be an array.
    pub fn next_array(&mut self) -> Result<Array, ParseError> {
        let position = self.document_start();
        let array = self
            .parse_array(0)
            .ok_or(ParseError::ExpectedArray { position })?;
        debug!("parsed array of {} values", array.len());
        Ok(array)
    }

    /// Parse the next value, which must be an object.
    pub fn next_object(&mut self) -> Result<Object, ParseError> {
        let position = self.document_start();
        let object = self
            .parse_object(0)
            .ok_or(ParseError::ExpectedObject { position })?;
        debug!("parsed object of {} members", object.len());
        Ok(object)
    }

    fn document_start(&mut self) -> usize {
        self.input.skip_whitespace();
        let position = self.position();
        debug!("parsing at {} (strict: {})", position, self.config.strict);
        position
    }

    /// Value dispatch. The order is fixed: string, number, boolean, null,
    /// array (only when `[` is next), then object unconditionally.
    fn parse_value(&mut self, depth: usize) -> Option<Value> {
        if let Some(s) = self.parse_string() {
            return Some(Value::String(s));
        }
        if let Some(n) = number_parser::parse_number(&mut self.input) {
            return Some(Value::Number(n));
        }
        if let Some(b) = self.parse_bool() {
            return Some(Value::Boolean(b));
        }
        if self.parse_null() {
            return Some(Value::Null);
        }
        if self.input.peek() == Some(b'[') {
            if let Some(array) = self.parse_array(depth) {
                return Some(Value::Array(array));
            }
        }
        self.parse_object(depth).map(Value::Object)
    }

    fn parse_string(&mut self) -> Option<String> {
        let delimiter = if self.input.match_literal(b"\"") {
            b'"'
        } else if !self.config.strict && self.input.peek() == Some(b'\'') {
            let _ = self.input.consume_byte();
            b'\''
        } else {
            return None;
        };
        let start = self.position() - 1;

        let mut bytes = Vec::new();
        loop {
            let Ok(byte) = self.input.consume_byte() else {
                trace!("unterminated string starting at {}", start);
                self.input.restore(start);
                return None;
            };
            if byte == delimiter {
                break;
            }
            if byte != b'\\' {
                bytes.push(byte);
                continue;
            }
            let Ok(escaped) = self.input.consume_byte() else {
                trace!("unterminated escape in string starting at {}", start);
                self.input.restore(start);
                return None;
            };
            EscapeProcessor::process_simple_escape(escaped, delimiter, &mut bytes);
        }

        // Only ASCII bytes are ever replaced or inserted, so the input's
        // UTF-8 validity carries over.
        match String::from_utf8(bytes) {
            Ok(s) => Some(s),
            Err(_) => {
                self.input.restore(start);
                None
            }
        }
    }

    fn parse_bool(&mut self) -> Option<bool> {
        if self.input.match_literal(b"true") {
            return Some(true);
        }
        if self.input.match_literal(b"false") {
            return Some(false);
        }
        None
    }

    fn parse_null(&mut self) -> bool {
        if self.input.match_literal(b"null") {
            return true;
        }
        // An elided member such as the middle of `[1,,2]` reads as null
        !self.config.strict && self.input.peek() == Some(b',')
    }

    fn enter_container(&self, depth: usize, start: usize) -> bool {
        if depth >= self.config.max_depth {
            trace!("nesting limit {} reached at {}", self.config.max_depth, start);
            return false;
        }
        true
    }

    /// `[` then values separated by commas, then `]`. A value that fails to
    /// parse simply ends the list, which is why `[1,2,]` is accepted.
    fn parse_array(&mut self, depth: usize) -> Option<Array> {
        if !self.input.match_literal(b"[") {
            return None;
        }
        let start = self.position() - 1;
        if !self.enter_container(depth, start) {
            self.input.restore(start);
            return None;
        }

        let mut array = Array::new();
        loop {
            match self.parse_value(depth + 1) {
                Some(value) => array.push(value),
                None => break,
            }
            if !self.input.match_literal(b",") {
                break;
            }
        }

        if !self.input.match_literal(b"]") {
            trace!("array starting at {} not closed at {}", start, self.position());
            self.input.restore(start);
            return None;
        }
        Some(array)
    }

    /// `{` then `key: value` pairs separated by commas, then `}`. Repeated
    /// keys overwrite earlier ones. A value that fails to parse ends the
    /// member list the same way it does for arrays.
    fn parse_object(&mut self, depth: usize) -> Option<Object> {
        if !self.input.match_literal(b"{") {
            return None;
        }
        let start = self.position() - 1;
        if !self.enter_container(depth, start) {
            self.input.restore(start);
            return None;
        }

        let mut object = Object::new();
        if self.input.match_literal(b"}") {
            return Some(object);
        }

        loop {
            let Some(key) = self.parse_string() else {
                if !self.config.strict && self.input.peek() == Some(b'}') {
                    break;
                }
                trace!("expected object key at {}", self.position());
                self.input.restore(start);
                return None;
            };
            if !self.input.match_literal(b":") {
                trace!("expected ':' after key {:?} at {}", key, self.position());
                self.input.restore(start);
                return None;
            }
            match self.parse_value(depth + 1) {
                Some(value) => {
                    object.insert(key, value);
                }
                None => break,
            }
            if !self.input.match_literal(b",") {
                break;
            }
        }

        if !self.input.match_literal(b"}") {
            trace!("object starting at {} not closed at {}", start, self.position());
            self.input.restore(start);
            return None;
        }
        Some(object)
    }
}
