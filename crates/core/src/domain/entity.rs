// Entity Name Domain Model

use serde::{Deserialize, Serialize};

use super::error::{DomainError, Result};

/// Name of an installable entity in the tool's registry.
///
/// Stored without the `@` sigil; `as_arg` renders the wire form. A leading
/// `@` supplied by the caller is stripped on construction, mirroring what
/// the tool itself does, so `"google"` and `"@google"` name the same entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityName(String);

impl EntityName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let bare = name.strip_prefix('@').unwrap_or(&name);
        if bare.is_empty() {
            return Err(DomainError::EmptyEntityName);
        }
        Ok(Self(bare.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Wire form used in argument vectors: `@<name>`.
    pub fn as_arg(&self) -> String {
        format!("@{}", self.0)
    }
}

impl std::fmt::Display for EntityName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "@{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_name() {
        let name = EntityName::new("google").unwrap();
        assert_eq!(name.as_str(), "google");
        assert_eq!(name.as_arg(), "@google");
    }

    #[test]
    fn test_sigil_is_stripped() {
        let name = EntityName::new("@google").unwrap();
        assert_eq!(name.as_str(), "google");
        assert_eq!(name.as_arg(), "@google");
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(matches!(
            EntityName::new(""),
            Err(DomainError::EmptyEntityName)
        ));
        assert!(matches!(
            EntityName::new("@"),
            Err(DomainError::EmptyEntityName)
        ));
    }
}
