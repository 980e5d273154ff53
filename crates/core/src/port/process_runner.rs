// Process Runner Port
// Abstraction for launching the external tool

use thiserror::Error;

use crate::domain::Invocation;

/// Captured channels of one finished child process.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    /// Exit code, `None` when the child was terminated by a signal.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Launch errors: the child never ran.
///
/// Distinct from a non-zero exit, which means the tool ran and failed.
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Spawn failed: {0}")]
    SpawnFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Process Runner trait
///
/// Implementations:
/// - SystemProcessRunner: launches a real child process (infra-process)
/// - mocks::MockProcessRunner: canned outputs for tests
pub trait ProcessRunner: Send + Sync {
    /// Launch the invocation and block until the child exits, capturing
    /// stdout, stderr and the exit status.
    ///
    /// # Errors
    /// - LaunchError::SpawnFailed if the executable cannot be started
    /// - LaunchError::IoError if the captured channels cannot be read
    fn run(&self, invocation: &Invocation) -> Result<ProcessOutput, LaunchError>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Mock runner behavior
    #[derive(Debug, Clone)]
    pub enum MockBehavior {
        /// Exit 0 with the given stdout
        Succeed(String),
        /// Exit with the given code and stderr
        Exit(i32, String),
        /// Fail to spawn with message
        SpawnFail(String),
    }

    /// Mock Process Runner for testing
    ///
    /// Records every invocation it receives so tests can assert on the
    /// constructed argument vectors.
    pub struct MockProcessRunner {
        behavior: Arc<Mutex<MockBehavior>>,
        invocations: Arc<Mutex<Vec<Invocation>>>,
    }

    impl MockProcessRunner {
        pub fn new(behavior: MockBehavior) -> Self {
            Self {
                behavior: Arc::new(Mutex::new(behavior)),
                invocations: Arc::new(Mutex::new(Vec::new())),
            }
        }

        pub fn new_stdout(stdout: impl Into<String>) -> Self {
            Self::new(MockBehavior::Succeed(stdout.into()))
        }

        pub fn new_exit(code: i32, stderr: impl Into<String>) -> Self {
            Self::new(MockBehavior::Exit(code, stderr.into()))
        }

        pub fn new_spawn_fail(message: impl Into<String>) -> Self {
            Self::new(MockBehavior::SpawnFail(message.into()))
        }

        pub fn call_count(&self) -> usize {
            self.invocations.lock().unwrap().len()
        }

        pub fn invocations(&self) -> Vec<Invocation> {
            self.invocations.lock().unwrap().clone()
        }

        pub fn last_invocation(&self) -> Option<Invocation> {
            self.invocations.lock().unwrap().last().cloned()
        }
    }

    impl ProcessRunner for MockProcessRunner {
        fn run(&self, invocation: &Invocation) -> Result<ProcessOutput, LaunchError> {
            self.invocations.lock().unwrap().push(invocation.clone());

            let behavior = self.behavior.lock().unwrap().clone();
            match behavior {
                MockBehavior::Succeed(stdout) => Ok(ProcessOutput {
                    exit_code: Some(0),
                    stdout,
                    stderr: String::new(),
                }),
                MockBehavior::Exit(code, stderr) => Ok(ProcessOutput {
                    exit_code: Some(code),
                    // Failed tools often write partial stdout too; it must
                    // never be surfaced by the client on this path.
                    stdout: "partial stdout".to_string(),
                    stderr,
                }),
                MockBehavior::SpawnFail(message) => Err(LaunchError::SpawnFailed(message)),
            }
        }
    }
}
