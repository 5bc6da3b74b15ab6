//! Guarded Inputs
//!
//! This example demonstrates guarding a function's arguments at its boundary.
//!
//! Key concepts:
//! - Categorized failures: NullArgument, InvalidArgument, OutOfRange
//! - Failures name the offending parameter
//! - Labels are validated before the payload
//!
//! Run with: cargo run --example guarded_inputs

use lockstep::{guard, GuardError};

fn register_user(user_id: i64, username: Option<&str>, tags: Option<&[&str]>) -> Result<(), GuardError> {
    guard::positive_id_described(user_id, "user_id", "the user's database id")?;
    guard::non_empty_max_length(username, "username", 16)?;
    guard::max_count(tags, "tags", 4)?;

    println!("registered user {user_id}");
    Ok(())
}

fn main() {
    println!("=== Guarded Inputs Example ===\n");

    // A valid call passes every gate silently.
    register_user(42, Some("ada"), Some(&["admin"])).unwrap();

    // Each invalid call is rejected with a categorized, named failure.
    let attempts = [
        register_user(0, Some("ada"), Some(&["admin"])),
        register_user(42, None, Some(&["admin"])),
        register_user(42, Some(""), Some(&["admin"])),
        register_user(42, Some("a-name-that-goes-on-forever"), Some(&["admin"])),
        register_user(42, Some("ada"), Some(&["a", "b", "c", "d", "e"])),
    ];

    for attempt in attempts {
        match attempt {
            Ok(()) => println!("accepted"),
            Err(err) => println!("rejected [{}] {}", err.parameter(), err),
        }
    }

    println!("\n=== Example Complete ===");
}
