//! Simple SDK Example
//!
//! Demonstrates basic usage of the Nexus SDK.
//!
//! # Usage
//!
//! 1. Make sure the `nexus` binary is on your PATH (or pass its location):
//!    ```bash
//!    nexus version
//!    ```
//!
//! 2. Run this example:
//!    ```bash
//!    cargo run --example simple
//!    ```

use anyhow::{Context, Result};
use nexus_sdk::{NexusClient, ToolOutput};

fn main() -> Result<()> {
    // RUST_LOG=debug shows every constructed argument vector
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("Nexus SDK - Simple Example");
    println!("================================\n");

    // 1. Create a client (assumes `nexus` is on PATH)
    let client = NexusClient::default();
    println!("1. Client created for `{}`\n", client.bin_path());

    // 2. Ask the tool for its version
    println!("2. Fetching tool version...");
    let version = client
        .version()
        .context("is the `nexus` binary installed and on PATH?")?;
    match version {
        ToolOutput::Structured(value) => println!("   ✓ {}\n", value),
        ToolOutput::Raw(text) => println!("   ✓ (raw) {}\n", text.trim_end()),
    }

    // 3. List installed entities
    println!("3. Listing installed entities...");
    let entities = client.list()?;
    println!("   ✓ {}\n", serde_json::to_string_pretty(&entities)?);

    // 4. Run a search through the google entity
    println!("4. Searching via @google...");
    match client.execute("google", Some("search"), &["python bindings"]) {
        Ok(results) => {
            println!("   ✓ Results:");
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        Err(e) => println!("   ⚠ Search failed (is @google installed?): {e}"),
    }

    println!("\n✓ Example completed!");

    Ok(())
}
