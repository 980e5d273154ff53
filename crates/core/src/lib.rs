// Nexus Core - Domain Logic & Ports
// NO infrastructure dependencies (Hexagonal Architecture)

pub mod domain;
pub mod error;
pub mod port;

pub use error::{ClientError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
