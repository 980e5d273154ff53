//! Nexus Client Implementation

use std::sync::Arc;

use tracing::debug;

use nexus_core::domain::{EntityName, Invocation, Request, ToolOutput};
use nexus_core::port::ProcessRunner;
use nexus_core::{ClientError, Result};
use nexus_infra_process::SystemProcessRunner;

/// Conventional name of the external tool, resolved via the search path.
pub const DEFAULT_BIN: &str = "nexus";

/// Nexus Client
///
/// Provides a high-level interface to the `nexus` command-line tool. Each
/// method builds one argument vector, launches one child process, blocks
/// until it exits and decodes the result. The client holds no shared
/// mutable state: calls are independent and the client is freely shareable
/// across threads.
///
/// # Example
///
/// ```no_run
/// use nexus_sdk::NexusClient;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = NexusClient::new("nexus");
/// let output = client.run("hello.js")?;
/// # Ok(())
/// # }
/// ```
pub struct NexusClient {
    bin_path: String,
    runner: Arc<dyn ProcessRunner>,
}

impl Default for NexusClient {
    fn default() -> Self {
        Self::new(DEFAULT_BIN)
    }
}

impl NexusClient {
    /// Create a client for the tool at `bin_path`.
    ///
    /// The path is the client's single configuration option. It is handed
    /// to the platform's process launcher unchanged, so a bare name is
    /// resolved via the search path.
    pub fn new(bin_path: impl Into<String>) -> Self {
        Self::with_runner(bin_path, Arc::new(SystemProcessRunner::new()))
    }

    /// Create a client with a custom [`ProcessRunner`].
    pub fn with_runner(bin_path: impl Into<String>, runner: Arc<dyn ProcessRunner>) -> Self {
        Self {
            bin_path: bin_path.into(),
            runner,
        }
    }

    pub fn bin_path(&self) -> &str {
        &self.bin_path
    }

    /// Run a local script file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use nexus_sdk::NexusClient;
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = NexusClient::default();
    /// let output = client.run("script.ext")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn run(&self, path: impl Into<String>) -> Result<ToolOutput> {
        self.invoke(&Request::Run {
            path: path.into(),
            args: vec![],
        })
    }

    /// Run a local script file with script arguments.
    pub fn run_with_args(&self, path: impl Into<String>, args: &[&str]) -> Result<ToolOutput> {
        self.invoke(&Request::Run {
            path: path.into(),
            args: owned(args),
        })
    }

    /// Execute inline code.
    pub fn exec(&self, code: impl Into<String>) -> Result<ToolOutput> {
        self.invoke(&Request::Exec { code: code.into() })
    }

    /// Fetch a URL and return the response.
    pub fn fetch(&self, url: impl Into<String>) -> Result<ToolOutput> {
        self.invoke(&Request::Fetch { url: url.into() })
    }

    /// Save an HTML snapshot of a page, optionally under a custom filename.
    pub fn screenshot(
        &self,
        url: impl Into<String>,
        filename: Option<&str>,
    ) -> Result<ToolOutput> {
        self.invoke(&Request::Screenshot {
            url: url.into(),
            filename: filename.map(str::to_string),
        })
    }

    /// Install an entity from the registry.
    ///
    /// Success or failure is communicated by the exit status alone: the
    /// decoded output is discarded, a non-zero exit still surfaces as
    /// [`ClientError::ExternalTool`].
    pub fn install(&self, name: &str) -> Result<()> {
        let name = EntityName::new(name)?;
        self.invoke(&Request::Install { name })?;
        Ok(())
    }

    /// Install an entity from a custom URL or local file.
    ///
    /// Exit-status semantics like [`install`](Self::install).
    pub fn add(&self, name: &str, source: impl Into<String>) -> Result<()> {
        let name = EntityName::new(name)?;
        self.invoke(&Request::Add {
            name,
            source: source.into(),
        })?;
        Ok(())
    }

    /// Remove an installed entity.
    ///
    /// Exit-status semantics like [`install`](Self::install).
    pub fn remove(&self, name: &str) -> Result<()> {
        let name = EntityName::new(name)?;
        self.invoke(&Request::Remove { name })?;
        Ok(())
    }

    /// List installed entities.
    pub fn list(&self) -> Result<ToolOutput> {
        self.invoke(&Request::List)
    }

    /// Report the tool version.
    pub fn version(&self) -> Result<ToolOutput> {
        self.invoke(&Request::Version)
    }

    /// Invoke an installed entity.
    ///
    /// The leading argument is the entity name in `@name` form, followed by
    /// the sub-command when present, followed by the extra arguments in
    /// their original order. Omitted optionals produce no argument.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use nexus_sdk::NexusClient;
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = NexusClient::default();
    /// // nexus @google search "python bindings" --json
    /// let results = client.execute("google", Some("search"), &["python bindings"])?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn execute(
        &self,
        entity_name: &str,
        command: Option<&str>,
        args: &[&str],
    ) -> Result<ToolOutput> {
        let name = EntityName::new(entity_name)?;
        self.invoke(&Request::Entity {
            name,
            command: command.map(str::to_string),
            args: owned(args),
        })
    }

    /// Send a pre-built request through the shared invoke+decode pipeline.
    ///
    /// 1. argv = `[bin_path, ...request tokens, "--json"]`
    /// 2. launch, block until exit, capture stdout/stderr/exit code
    /// 3. non-zero exit -> [`ClientError::ExternalTool`] with stderr verbatim
    /// 4. zero exit -> decoded [`ToolOutput`]
    pub fn invoke(&self, request: &Request) -> Result<ToolOutput> {
        let invocation = Invocation::build(&self.bin_path, request);
        debug!(argv = ?invocation.argv(), "Invoking external tool");

        let output = self.runner.run(&invocation)?;

        if !output.success() {
            return Err(ClientError::ExternalTool {
                stderr: output.stderr,
            });
        }

        Ok(ToolOutput::decode(&output.stdout))
    }
}

fn owned(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}
