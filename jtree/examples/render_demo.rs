// Example: parse one document and print it in every output format

use jtree::{Object, ParseError, ParserConfig, XmlFormat, XmlOptions};

fn main() -> Result<(), ParseError> {
    env_logger::init();

    let json = r#"{'title': "Demo", "items": [1, 2.5, true, null,], 'tags': {"a": "x<y"},}"#;
    println!("Input: {}", json);

    // Single quotes and trailing commas need the lenient grammar
    let object = Object::parse(json, ParserConfig::lenient())?;

    println!();
    println!("JSON:");
    println!("{}", object);

    println!();
    println!("JSONx:");
    print!("{}", object.xml(&XmlOptions::new(XmlFormat::JsonX)));

    println!();
    println!("JXML:");
    print!("{}", object.xml(&XmlOptions::new(XmlFormat::JXml)));

    match Object::parse(json, ParserConfig::strict()) {
        Ok(_) => println!("Strict mode unexpectedly accepted the input"),
        Err(e) => println!("Strict mode rejects it: {}", e),
    }
    Ok(())
}
