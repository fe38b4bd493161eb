//! Parse, query, modify and write an FDS document.
//!
//! Run with: cargo run --example simple

use fds_syntax::{parse, to_string};
use std::error::Error;

const CONFIG: &str = "\
# Web server settings
server:
    host: localhost
    port: 8080
    secure: false
admins:
- alice
- bob
token= c2VjcmV0
";

fn main() -> Result<(), Box<dyn Error>> {
    let mut root = parse(CONFIG)?;

    println!("host   = {}", root.get_string("server.host", "0.0.0.0"));
    println!("port   = {}", root.get_i64("server.port", 80));
    println!("secure = {}", root.get_bool("server.secure", true));
    println!("admins = {:?}", root.get_string_list("admins", Vec::new()));
    if let Some(token) = root.get_value("token").and_then(|v| v.as_bytes()) {
        println!("token  = {:?}", String::from_utf8_lossy(token));
    }

    root.set("server.port", 9090)?;
    root.set("server.limits.connections", 256)?;
    root.get_mut("server.limits")
        .ok_or("limits section missing")?
        .add_comment(" Added at runtime");

    let text = to_string(&root);
    println!("\nFDS output:\n{}", text);

    let reparsed = parse(&text)?;
    assert_eq!(root, reparsed);
    println!("✓ Round-trip successful");

    Ok(())
}
