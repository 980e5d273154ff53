// Request Domain Model
// Logical operations against the external tool's CLI

use super::entity::EntityName;

/// A logical operation plus its ordered string arguments.
///
/// `to_args` materializes the tokens exactly as the tool expects them:
/// caller argument order is preserved and absent optionals produce no
/// token at all (no empty-string placeholders).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Execute a local script file, optionally passing script arguments.
    Run { path: String, args: Vec<String> },

    /// Execute inline code.
    Exec { code: String },

    /// Fetch a URL and return the response.
    Fetch { url: String },

    /// Save an HTML snapshot of a page, optionally under a custom filename.
    Screenshot {
        url: String,
        filename: Option<String>,
    },

    /// Install an entity from the registry.
    Install { name: EntityName },

    /// Install an entity from a custom URL or local file.
    Add { name: EntityName, source: String },

    /// Remove an installed entity.
    Remove { name: EntityName },

    /// List installed entities.
    List,

    /// Report the tool version.
    Version,

    /// Invoke an installed entity with an optional sub-command and arguments.
    Entity {
        name: EntityName,
        command: Option<String>,
        args: Vec<String>,
    },
}

impl Request {
    /// Argument tokens for this request, in wire order.
    ///
    /// Pure and deterministic: the same request always yields the same
    /// token sequence.
    pub fn to_args(&self) -> Vec<String> {
        match self {
            Request::Run { path, args } => {
                let mut tokens = vec!["run".to_string(), path.clone()];
                tokens.extend(args.iter().cloned());
                tokens
            }
            Request::Exec { code } => vec!["exec".to_string(), code.clone()],
            Request::Fetch { url } => vec!["fetch".to_string(), url.clone()],
            Request::Screenshot { url, filename } => {
                let mut tokens = vec!["screenshot".to_string(), url.clone()];
                if let Some(filename) = filename {
                    tokens.push(filename.clone());
                }
                tokens
            }
            Request::Install { name } => vec!["install".to_string(), name.as_arg()],
            Request::Add { name, source } => {
                vec!["add".to_string(), name.as_arg(), source.clone()]
            }
            Request::Remove { name } => vec!["remove".to_string(), name.as_arg()],
            Request::List => vec!["list".to_string()],
            Request::Version => vec!["version".to_string()],
            Request::Entity {
                name,
                command,
                args,
            } => {
                let mut tokens = vec![name.as_arg()];
                if let Some(command) = command {
                    tokens.push(command.clone());
                }
                tokens.extend(args.iter().cloned());
                tokens
            }
        }
    }
}
