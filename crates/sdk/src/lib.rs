//! Nexus SDK - Rust Client Library
//!
//! Drives the `nexus` command-line tool as if it were an RPC interface:
//! the client builds an argument vector per call, launches the tool as a
//! child process, and decodes its stdout into structured data with a raw
//! text fallback.
//!
//! # Example
//!
//! ```no_run
//! use nexus_sdk::NexusClient;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Assumes the `nexus` binary is resolvable on PATH
//!     let client = NexusClient::default();
//!
//!     // nexus @google search "python bindings" --json
//!     let results = client.execute("google", Some("search"), &["python bindings"])?;
//!     println!("{}", serde_json::to_string_pretty(&results)?);
//!
//!     Ok(())
//! }
//! ```

mod client;

pub use client::{NexusClient, DEFAULT_BIN};
pub use nexus_core::domain::{
    EntityName, Invocation, Request, ToolOutput, JSON_FLAG, RAW_OUTPUT_KEY,
};
pub use nexus_core::{ClientError, Result};
pub use nexus_infra_process::SystemProcessRunner;
