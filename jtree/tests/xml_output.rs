// JSONx and JXML document rendering

use jtree::{Array, Object, XmlFormat, XmlOptions, DEFAULT_HEADER, JSONX_ROOT_ATTRIB};

fn sample() -> Object {
    r#"{"name": "a<b", "list": [1, true, null], "empty": {}}"#
        .parse()
        .expect("sample parses")
}

#[test]
fn test_empty_object_jsonx_is_open_close_pair() {
    let xml = Object::new().xml(&XmlOptions::new(XmlFormat::JsonX));
    let body = xml.strip_prefix(DEFAULT_HEADER).expect("default header");
    assert_eq!(
        body,
        format!("<json:object{JSONX_ROOT_ATTRIB}>\n</json:object>\n")
    );
}

#[test]
fn test_empty_object_jxml_is_open_close_pair() {
    let xml = Object::new().xml(&XmlOptions::new(XmlFormat::JXml));
    assert_eq!(xml.strip_prefix(DEFAULT_HEADER), Some("<j son=\"o\">\n</j>\n"));
}

#[test]
fn test_jsonx_document() {
    let xml = sample().xml(&XmlOptions::new(XmlFormat::JsonX));
    let expected = format!(
        "{DEFAULT_HEADER}<json:object{JSONX_ROOT_ATTRIB}>\n\
         \t<json:object name=\"empty\">\n\
         \t</json:object>\n\
         \t<json:array name=\"list\">\n\
         \t\t<json:number>1</json:number>\n\
         \t\t<json:boolean>true</json:boolean>\n\
         \t\t<json:null />\n\
         \t</json:array>\n\
         \t<json:string name=\"name\">a&lt;b</json:string>\n\
         </json:object>\n"
    );
    assert_eq!(xml, expected);
}

#[test]
fn test_jxml_document() {
    let xml = sample().xml(&XmlOptions::new(XmlFormat::JXml));
    let expected = format!(
        "{DEFAULT_HEADER}<j son=\"o\">\n\
         \t<j son=\"o:empty\">\n\
         \t</j>\n\
         \t<j son=\"a:list\">\n\
         \t\t<j son=\"n\">1</j>\n\
         \t\t<j son=\"b\">true</j>\n\
         \t\t<j son=\"0\" />\n\
         \t</j>\n\
         \t<j son=\"s:name\">a&lt;b</j>\n\
         </j>\n"
    );
    assert_eq!(xml, expected);
}

#[test]
fn test_array_root_receives_attributes() {
    let array: Array = "[\"x\"]".parse().expect("array");
    let xml = array.xml(
        &XmlOptions::new(XmlFormat::JsonX)
            .with_header("<?xml version=\"1.0\"?>\n")
            .with_attrib(" xmlns:json=\"urn:test\""),
    );
    assert_eq!(
        xml,
        "<?xml version=\"1.0\"?>\n\
         <json:array xmlns:json=\"urn:test\">\n\
         \t<json:string>x</json:string>\n\
         </json:array>\n"
    );
}

#[test]
fn test_leaf_text_keeps_ampersand_and_control_bytes() {
    let array: Array = r#"["a & b", "bell\u0007"]"#.parse().expect("array");
    // `\u` is not a recognized escape, so the text is kept as written
    let xml = array.xml(&XmlOptions::new(XmlFormat::JXml).with_header(""));
    assert!(xml.contains("<j son=\"s\">a & b</j>"));
    assert!(xml.contains("<j son=\"s\">bell\\u0007</j>"));

    let mut raw = Array::new();
    raw.push("bell\u{7}");
    let xml = raw.xml(&XmlOptions::new(XmlFormat::JXml).with_header(""));
    assert!(xml.contains("<j son=\"s\">bell\u{7}</j>"));
}
