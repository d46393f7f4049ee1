// SPDX-License-Identifier: Apache-2.0

//! The in-memory JSON tree.
//!
//! A [`Value`] holds exactly one of six variants. Containers own their
//! children outright, so dropping a root drops the whole tree.

use alloc::collections::btree_map::{self, BTreeMap};
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::str::FromStr;

use crate::config::ParserConfig;
use crate::parse_error::ParseError;
use crate::parser::Parser;

/// A parsed JSON value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Boolean(bool),
    /// Every number is stored as a double.
    Number(f64),
    String(String),
    Array(Array),
    Object(Object),
}

/// An ordered sequence of values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Array {
    values: Vec<Value>,
}

/// A mapping from unique string keys to values.
///
/// Iteration and serialization follow key order, not insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Object {
    value_map: BTreeMap<String, Value>,
}

impl Value {
    /// Parse one value from the start of `input`.
    pub fn parse(input: &str, config: ParserConfig) -> Result<Value, ParseError> {
        Parser::with_config(input, config).next_value()
    }

    /// Like [`Value::parse`], for byte input that still has to be checked for UTF-8.
    pub fn parse_from_slice(input: &[u8], config: ParserConfig) -> Result<Value, ParseError> {
        Value::parse(core::str::from_utf8(input)?, config)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Canonical JSON text for this value.
    pub fn json(&self) -> String {
        self.to_string()
    }
}

impl FromStr for Value {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Value::parse(s, ParserConfig::default())
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Array> for Value {
    fn from(a: Array) -> Self {
        Value::Array(a)
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Value::Object(o)
    }
}

impl Array {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an array from the start of `input`.
    pub fn parse(input: &str, config: ParserConfig) -> Result<Array, ParseError> {
        Parser::with_config(input, config).next_array()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.values.get_mut(index)
    }

    pub fn push(&mut self, value: impl Into<Value>) {
        self.values.push(value.into());
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Value> {
        self.values.iter()
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Canonical JSON text for this array.
    pub fn json(&self) -> String {
        self.to_string()
    }
}

impl FromStr for Array {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Array::parse(s, ParserConfig::default())
    }
}

impl From<Vec<Value>> for Array {
    fn from(values: Vec<Value>) -> Self {
        Self { values }
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = core::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an object from the start of `input`.
    pub fn parse(input: &str, config: ParserConfig) -> Result<Object, ParseError> {
        Parser::with_config(input, config).next_object()
    }

    pub fn len(&self) -> usize {
        self.value_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value_map.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.value_map.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.value_map.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.value_map.contains_key(key)
    }

    /// Store `value` under `key`, returning whatever was there before.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.value_map.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.value_map.remove(key)
    }

    pub fn clear(&mut self) {
        self.value_map.clear();
    }

    /// Members in ascending key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.value_map.iter()
    }

    pub fn keys(&self) -> btree_map::Keys<'_, String, Value> {
        self.value_map.keys()
    }

    pub fn kv_map(&self) -> &BTreeMap<String, Value> {
        &self.value_map
    }

    /// Canonical JSON text for this object.
    pub fn json(&self) -> String {
        self.to_string()
    }
}

impl FromStr for Object {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Object::parse(s, ParserConfig::default())
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            value_map: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.value_map.iter()
    }
}
