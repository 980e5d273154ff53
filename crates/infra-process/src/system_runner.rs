// System process runner
// Spawns the external tool and blocks until it exits

use std::process::{Command, Stdio};
use std::time::Instant;

use tracing::info;

use nexus_core::domain::Invocation;
use nexus_core::port::{LaunchError, ProcessOutput, ProcessRunner};

/// Launches the external tool as a child process.
///
/// Stateless: every call is an independent launch with its own pipes, and
/// nothing is shared or reused between calls. The call blocks the current
/// thread until the child exits and both channels are fully read; a caller
/// wishing to bound execution time must impose its own timeout around the
/// blocking call.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, invocation: &Invocation) -> Result<ProcessOutput, LaunchError> {
        let start = Instant::now();

        info!(
            program = %invocation.program(),
            args = ?invocation.args(),
            "Launching external tool"
        );

        let output = Command::new(invocation.program())
            .args(invocation.args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| LaunchError::SpawnFailed(e.to_string()))?;

        let result = ProcessOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        };

        info!(
            program = %invocation.program(),
            exit_code = ?result.exit_code,
            duration_ms = %start.elapsed().as_millis(),
            "External tool exited"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexus_core::domain::Request;

    #[test]
    fn test_run_captures_stdout() {
        let runner = SystemProcessRunner::new();
        let invocation = Invocation::build(
            "echo",
            &Request::Run {
                path: "hello".to_string(),
                args: vec![],
            },
        );

        let output = runner.run(&invocation).unwrap();

        assert!(output.success());
        // echo prints the tokens it was handed, flag included
        assert_eq!(output.stdout, "run hello --json\n");
        assert_eq!(output.stderr, "");
    }

    #[test]
    fn test_missing_executable_is_a_launch_error() {
        let runner = SystemProcessRunner::new();
        let invocation = Invocation::build("nonexistent-binary-for-tests", &Request::List);

        let result = runner.run(&invocation);

        assert!(matches!(result, Err(LaunchError::SpawnFailed(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_is_captured_not_an_error() {
        let runner = SystemProcessRunner::new();
        // `false` exits 1; the runner reports it, classification is the
        // client's job.
        let invocation = Invocation::build("false", &Request::List);

        let output = runner.run(&invocation).unwrap();

        assert!(!output.success());
        assert_eq!(output.exit_code, Some(1));
    }
}
