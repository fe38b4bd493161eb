//! Walking a parsed tree at runtime and bridging it to other serde formats.
//!
//! Run with: cargo run --example dynamic_sections

use fds_syntax::{parse, to_string, Entry, Section, Value};
use serde::{Deserialize, Serialize};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize)]
struct User {
    id: u32,
    name: String,
    roles: Vec<String>,
}

const USERS: &str = "\
Users:
    # The first account
    Alice:
        id: 1
        name: Alice
        roles:
        - admin
        - developer
    Bob:
        id: 2
        name: Bob
        roles:
        - viewer
";

fn walk(section: &Section, depth: usize) {
    for (key, entry) in section.iter() {
        let pad = "  ".repeat(depth);
        for comment in &entry.preceding_comments {
            println!("{}(comment:{})", pad, comment);
        }
        match &entry.value {
            Value::Section(child) => {
                println!("{}{} (section, line {})", pad, key, child.start_line());
                walk(child, depth + 1);
            }
            Value::List(items) => println!("{}{} = list of {}", pad, key, items.len()),
            other => println!("{}{} = {} ({})", pad, key, other, other.kind_name()),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let root = parse(USERS)?;
    walk(&root, 0);

    // Keys keep their case; lowered lookups ignore it
    println!(
        "\nusers.alice.id = {}",
        root.get_lowered("users.alice.id")
            .map(|e| e.value.to_string())
            .unwrap_or_default()
    );

    // Section -> JSON
    let json = serde_json::to_string_pretty(&root)?;
    println!("\nAs JSON:\n{}", json);

    // JSON -> typed struct
    let alice: User = serde_json::from_value(serde_json::to_value(
        root.get_section("Users.Alice").ok_or("missing Alice")?,
    )?)?;
    println!("\nTyped: {:?}", alice);

    // struct -> Section -> FDS
    let carol = User {
        id: 3,
        name: "Carol".to_string(),
        roles: vec!["ops".to_string()],
    };
    let mut section: Section = serde_json::from_value(serde_json::to_value(&carol)?)?;
    let mut note = Entry::new(Value::from("added from a struct"));
    note.add_comment(" provenance");
    section.set_entry("note", note)?;
    println!("\nCarol as FDS:\n{}", to_string(&section));

    Ok(())
}
