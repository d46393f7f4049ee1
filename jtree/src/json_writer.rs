// SPDX-License-Identifier: Apache-2.0

//! Canonical JSON output via `Display`.
//!
//! Members are separated by `", "`, object pairs are written as `"key": value`
//! in key order, and numbers use the shortest text that reads back as the
//! same double.

use core::fmt;

use crate::escape_processor::EscapeProcessor;
use crate::value::{Array, Object, Value};

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(true) => f.write_str("true"),
            Value::Boolean(false) => f.write_str("false"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => EscapeProcessor::write_json_string(f, s),
            Value::Array(a) => fmt::Display::fmt(a, f),
            Value::Object(o) => fmt::Display::fmt(o, f),
        }
    }
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(value, f)?;
        }
        f.write_str("]")
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            EscapeProcessor::write_json_string(f, key)?;
            f.write_str(": ")?;
            fmt::Display::fmt(value, f)?;
        }
        f.write_str("}")
    }
}
