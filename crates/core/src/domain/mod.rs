// Domain Layer - Pure request/invocation/output model

pub mod entity;
pub mod error;
pub mod invocation;
pub mod output;
pub mod request;

// Re-exports
pub use entity::EntityName;
pub use error::DomainError;
pub use invocation::{Invocation, JSON_FLAG};
pub use output::{ToolOutput, RAW_OUTPUT_KEY};
pub use request::Request;
