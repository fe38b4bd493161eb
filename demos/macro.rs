//! Using the fds! macro to build values.
//!
//! Run with: cargo run --example macro

use fds_syntax::{fds, to_string, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let flag = fds!(true);
    let number = fds!(42);
    let text = fds!("Hello, FDS!");
    let blob = fds!(b"raw".to_vec());

    println!("Scalars (display form):");
    println!("  bool:   {}", flag);
    println!("  number: {}", number);
    println!("  text:   {}", text);
    println!("  bytes:  {}\n", blob);

    let features = fds!(["auth", "logging", "metrics"]);
    println!("List (display form): {}\n", features);

    let config = fds!({
        "app": {
            "name": "MyApp",
            "version": "1.0.0"
        },
        "database": {
            "host": "localhost",
            "port": 5432,
            "timeout": (-1)
        },
        "features": ["auth", "logging", "metrics"],
        "debug": true
    });

    let root = config.as_section().ok_or("fds!({..}) always builds a section")?;
    println!("As an FDS document:\n{}", to_string(root));

    println!("Accessing values:");
    println!("  App name: {}", root.get_string("app.name", "?"));
    println!("  DB port:  {}", root.get_i64("database.port", 0));
    if let Some(Value::List(items)) = root.get_value("features") {
        println!("  Features: {}", items.len());
    }

    Ok(())
}
