// Invocation Domain Model
// A materialized argument vector for exactly one process launch

use super::request::Request;

/// Machine-readable output flag, appended to every invocation.
pub const JSON_FLAG: &str = "--json";

/// The fully materialized argument vector for one launch of the external
/// tool: program path, request tokens, then `--json`, always last.
///
/// An invocation is built per call and owned for the duration of a single
/// launch. There is no pooling and no reuse across launches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
}

impl Invocation {
    /// Materialize `request` as `[program, ...tokens, "--json"]`.
    ///
    /// The flag is unconditional: every invocation requests structured
    /// output regardless of operation.
    pub fn build(program: impl Into<String>, request: &Request) -> Self {
        let mut args = request.to_args();
        args.push(JSON_FLAG.to_string());
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Full vector including the program, for logging and assertions.
    pub fn argv(&self) -> Vec<String> {
        let mut argv = Vec::with_capacity(self.args.len() + 1);
        argv.push(self.program.clone());
        argv.extend(self.args.iter().cloned());
        argv
    }
}
