//! Decodes a small typed record from a JSON document.
//!
//! The record type opts into decoding by implementing [`FromReader`]; the
//! engine never learns its shape. Note the trailing comma in the document —
//! the materializer's separator policy is lenient.
//!
//! Run with
//!
//! ```bash
//! cargo run -p jsonlens --example typed_record
//! ```

use jsonlens::{FromReader, ReadError, Reader, decode_object};

#[derive(Debug)]
struct Greeting {
    hello: bool,
    nice: bool,
    wir: String,
}

impl FromReader for Greeting {
    fn from_reader(reader: &Reader<'_>) -> Result<Self, ReadError> {
        Ok(Self {
            hello: reader.read_bool("hello")?,
            nice: reader.read_bool("nice")?,
            wir: reader.read_string("wir")?,
        })
    }
}

fn main() -> Result<(), ReadError> {
    let doc = br#"{
        "hello": true,
        "nice": false,
        "wir": "hello my friend",
    }"#;

    let greeting: Greeting = decode_object(doc)?;

    println!("hello: {}", greeting.hello);
    println!("nice:  {}", greeting.nice);
    println!("wir:   {}", greeting.wir);
    Ok(())
}
