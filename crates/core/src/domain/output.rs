// Tool Output Domain Model
// Decoded stdout of a successful invocation

use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;

/// Well-known key wrapping stdout that could not be parsed.
pub const RAW_OUTPUT_KEY: &str = "raw_output";

/// Result of a successful invocation: structured data when stdout parsed
/// as JSON, the raw text verbatim otherwise. Never both.
///
/// The raw variant is a degraded success, not an error. It keeps the
/// client correct against tool subcommands that do not emit JSON yet.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutput {
    Structured(Value),
    Raw(String),
}

impl ToolOutput {
    /// Decode captured stdout. Parse failure selects the raw fallback,
    /// keeping the text byte-for-byte.
    pub fn decode(stdout: &str) -> Self {
        match serde_json::from_str(stdout) {
            Ok(value) => ToolOutput::Structured(value),
            Err(err) => {
                debug!(error = %err, "stdout is not well-formed JSON, keeping raw text");
                ToolOutput::Raw(stdout.to_string())
            }
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, ToolOutput::Structured(_))
    }

    /// The decoded value when structured.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            ToolOutput::Structured(value) => Some(value),
            ToolOutput::Raw(_) => None,
        }
    }

    /// The verbatim text when raw.
    pub fn as_raw(&self) -> Option<&str> {
        match self {
            ToolOutput::Structured(_) => None,
            ToolOutput::Raw(text) => Some(text),
        }
    }

    /// Convert into a JSON value. The raw variant is wrapped under
    /// [`RAW_OUTPUT_KEY`].
    pub fn into_value(self) -> Value {
        match self {
            ToolOutput::Structured(value) => value,
            ToolOutput::Raw(text) => json!({ RAW_OUTPUT_KEY: text }),
        }
    }
}

impl Serialize for ToolOutput {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            ToolOutput::Structured(value) => value.serialize(serializer),
            ToolOutput::Raw(text) => json!({ RAW_OUTPUT_KEY: text }).serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_well_formed_json() {
        let output = ToolOutput::decode(r#"{"results": [1, 2, 3]}"#);
        assert_eq!(
            output,
            ToolOutput::Structured(json!({"results": [1, 2, 3]}))
        );
    }

    #[test]
    fn test_decode_scalar_json() {
        // Any well-formed JSON value counts as structured, not just objects.
        assert_eq!(ToolOutput::decode("42"), ToolOutput::Structured(json!(42)));
    }

    #[test]
    fn test_decode_malformed_keeps_text_verbatim() {
        let text = "Installed Entities:\n  @google -> google.nx.js\n";
        let output = ToolOutput::decode(text);
        assert_eq!(output, ToolOutput::Raw(text.to_string()));
        assert_eq!(output.as_raw(), Some(text));
    }

    #[test]
    fn test_decode_empty_stdout_is_raw() {
        assert_eq!(ToolOutput::decode(""), ToolOutput::Raw(String::new()));
    }

    #[test]
    fn test_into_value_wraps_raw_under_known_key() {
        let value = ToolOutput::Raw("plain text".to_string()).into_value();
        assert_eq!(value, json!({ "raw_output": "plain text" }));
    }

    #[test]
    fn test_serialize_matches_into_value() {
        let structured = ToolOutput::Structured(json!({"ok": true}));
        assert_eq!(
            serde_json::to_value(&structured).unwrap(),
            json!({"ok": true})
        );

        let raw = ToolOutput::Raw("oops".to_string());
        assert_eq!(
            serde_json::to_value(&raw).unwrap(),
            json!({"raw_output": "oops"})
        );
    }
}
