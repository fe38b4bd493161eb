//! Customizing FDS parsing and output with FdsOptions.
//!
//! Run with: cargo run --example custom_options

use fds_syntax::{parse_with_options, to_string, to_string_with_options, FdsOptions, Indent};
use std::error::Error;

const PATHS: &str = "\
mounts:
    /data:
        device: sda1
        read.only: false
";

fn main() -> Result<(), Box<dyn Error>> {
    // Keys here contain '.', so address sections with '>' instead
    let options = FdsOptions::new().with_path_separator('>');
    let root = parse_with_options(PATHS, &options)?;
    println!(
        "mounts>/data>read.only = {}",
        root.get_bool("mounts>/data>read.only", true)
    );

    println!("\nDefault (tabs):");
    println!("{}", to_string(&root));

    println!("Two spaces per level:");
    let spaces = FdsOptions::new().with_indent(Indent::Spaces(2));
    println!("{}", to_string_with_options(&root, &spaces));

    println!("Windows line endings:");
    let windows = FdsOptions::new().with_newline("\r\n");
    let text = to_string_with_options(&root, &windows);
    println!("{:?}", text);

    // Every layout reads back to the same tree
    let reparsed = parse_with_options(&text, &options)?;
    assert_eq!(root, reparsed);
    println!("\n✓ All layouts parse back identically");

    Ok(())
}
