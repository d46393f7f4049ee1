// SPDX-License-Identifier: Apache-2.0

//! XML renderings of a JSON tree.
//!
//! Both dialects share one recursive walker; a [`TagStyle`] supplies the tag
//! text for each node kind. Every node goes on its own line, indented with
//! one tab per level, and only the root receives the header and the root
//! attribute block.

use alloc::string::{String, ToString};

use crate::config::{XmlFormat, XmlOptions};
use crate::escape_processor::EscapeProcessor;
use crate::value::{Array, Object, Value};

/// Declaration written before the root when no header is supplied.
pub const DEFAULT_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Root attributes written for JSONx when none are supplied.
pub const JSONX_ROOT_ATTRIB: &str = concat!(
    " xsi:schemaLocation=\"http://www.datapower.com/schemas/json jsonx.xsd\"",
    " xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\"",
    " xmlns:json=\"http://www.ibm.com/xmlns/prod/2009/jsonx\"",
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeKind {
    Null,
    Boolean,
    Array,
    String,
    Object,
    Number,
}

impl NodeKind {
    fn of(value: &Value) -> Self {
        match value {
            Value::Null => NodeKind::Null,
            Value::Boolean(_) => NodeKind::Boolean,
            Value::Number(_) => NodeKind::Number,
            Value::String(_) => NodeKind::String,
            Value::Array(_) => NodeKind::Array,
            Value::Object(_) => NodeKind::Object,
        }
    }

    /// Single-character type code used by JXML.
    fn code(self) -> char {
        match self {
            NodeKind::Null => '0',
            NodeKind::Boolean => 'b',
            NodeKind::Array => 'a',
            NodeKind::String => 's',
            NodeKind::Object => 'o',
            NodeKind::Number => 'n',
        }
    }

    fn jsonx_tag(self) -> &'static str {
        match self {
            NodeKind::Null => "json:null",
            NodeKind::Boolean => "json:boolean",
            NodeKind::Array => "json:array",
            NodeKind::String => "json:string",
            NodeKind::Object => "json:object",
            NodeKind::Number => "json:number",
        }
    }
}

/// Tag vocabulary of one XML dialect.
trait TagStyle {
    /// Write `<tag ...attrib>`. `name` is already escaped.
    fn open_tag(&self, out: &mut String, kind: NodeKind, name: Option<&str>, attrib: &str);
    fn close_tag(&self, out: &mut String, kind: NodeKind);
    fn default_attrib(&self) -> &'static str;
}

struct JsonXTags;

impl TagStyle for JsonXTags {
    fn open_tag(&self, out: &mut String, kind: NodeKind, name: Option<&str>, attrib: &str) {
        out.push('<');
        out.push_str(kind.jsonx_tag());
        if let Some(name) = name {
            out.push_str(" name=\"");
            out.push_str(name);
            out.push('"');
        }
        out.push_str(attrib);
        out.push('>');
    }

    fn close_tag(&self, out: &mut String, kind: NodeKind) {
        out.push_str("</");
        out.push_str(kind.jsonx_tag());
        out.push('>');
    }

    fn default_attrib(&self) -> &'static str {
        JSONX_ROOT_ATTRIB
    }
}

struct JXmlTags;

impl TagStyle for JXmlTags {
    fn open_tag(&self, out: &mut String, kind: NodeKind, name: Option<&str>, attrib: &str) {
        out.push_str("<j son=\"");
        out.push(kind.code());
        if let Some(name) = name {
            out.push(':');
            out.push_str(name);
        }
        out.push('"');
        out.push_str(attrib);
        out.push('>');
    }

    fn close_tag(&self, out: &mut String, _kind: NodeKind) {
        out.push_str("</j>");
    }

    fn default_attrib(&self) -> &'static str {
        ""
    }
}

struct XmlWriter<'s, S> {
    style: &'s S,
    out: String,
}

impl<S: TagStyle> XmlWriter<'_, S> {
    fn indent(&mut self, depth: usize) {
        for _ in 0..depth {
            self.out.push('\t');
        }
    }

    fn leaf(&mut self, depth: usize, kind: NodeKind, name: Option<&str>, text: &str) {
        self.indent(depth);
        self.style.open_tag(&mut self.out, kind, name, "");
        self.out.push_str(&EscapeProcessor::escape_text(text));
        self.style.close_tag(&mut self.out, kind);
        self.out.push('\n');
    }

    fn open_container(&mut self, depth: usize, kind: NodeKind, name: Option<&str>, attrib: &str) {
        self.indent(depth);
        self.style.open_tag(&mut self.out, kind, name, attrib);
        self.out.push('\n');
    }

    fn close_container(&mut self, depth: usize, kind: NodeKind) {
        self.indent(depth);
        self.style.close_tag(&mut self.out, kind);
        self.out.push('\n');
    }

    fn array(&mut self, depth: usize, name: Option<&str>, array: &Array, attrib: &str) {
        self.open_container(depth, NodeKind::Array, name, attrib);
        for value in array {
            self.node(depth + 1, None, value);
        }
        self.close_container(depth, NodeKind::Array);
    }

    fn object(&mut self, depth: usize, name: Option<&str>, object: &Object, attrib: &str) {
        self.open_container(depth, NodeKind::Object, name, attrib);
        for (key, value) in object {
            self.node(depth + 1, Some(key.as_str()), value);
        }
        self.close_container(depth, NodeKind::Object);
    }

    fn node(&mut self, depth: usize, name: Option<&str>, value: &Value) {
        let escaped = name.map(EscapeProcessor::escape_attribute);
        let name = escaped.as_deref();
        let kind = NodeKind::of(value);
        match value {
            Value::Null => {
                self.indent(depth);
                self.style.open_tag(&mut self.out, kind, name, " /");
                self.out.push('\n');
            }
            Value::Boolean(b) => self.leaf(depth, kind, name, if *b { "true" } else { "false" }),
            Value::Number(n) => self.leaf(depth, kind, name, &n.to_string()),
            Value::String(s) => self.leaf(depth, kind, name, s),
            Value::Array(array) => self.array(depth, name, array, ""),
            Value::Object(object) => self.object(depth, name, object, ""),
        }
    }
}

/// Document root. Only containers can be rendered as documents.
#[derive(Clone, Copy)]
enum Root<'v> {
    Array(&'v Array),
    Object(&'v Object),
}

fn render_with<S: TagStyle>(style: &S, root: Root<'_>, options: &XmlOptions) -> String {
    let header = options.header.as_deref().unwrap_or(DEFAULT_HEADER);
    let attrib = options.attrib.as_deref().unwrap_or(style.default_attrib());
    let mut writer = XmlWriter {
        style,
        out: String::from(header),
    };
    match root {
        Root::Array(array) => writer.array(0, None, array, attrib),
        Root::Object(object) => writer.object(0, None, object, attrib),
    }
    log::debug!("rendered {:?} document of {} bytes", options.format, writer.out.len());
    writer.out
}

fn render(root: Root<'_>, options: &XmlOptions) -> String {
    match options.format {
        XmlFormat::JsonX => render_with(&JsonXTags, root, options),
        XmlFormat::JXml => render_with(&JXmlTags, root, options),
    }
}

impl Object {
    /// Render this object as an XML document.
    ///
    /// # Example
    /// ```
    /// use jtree::{Object, XmlFormat, XmlOptions};
    /// let object: Object = r#"{"a": 1}"#.parse().unwrap();
    /// let xml = object.xml(&XmlOptions::new(XmlFormat::JXml).with_header(""));
    /// assert_eq!(xml, "<j son=\"o\">\n\t<j son=\"n:a\">1</j>\n</j>\n");
    /// ```
    pub fn xml(&self, options: &XmlOptions) -> String {
        render(Root::Object(self), options)
    }
}

impl Array {
    /// Render this array as an XML document.
    pub fn xml(&self, options: &XmlOptions) -> String {
        render(Root::Array(self), options)
    }
}
