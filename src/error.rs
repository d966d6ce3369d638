use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Usage: {program} <args>")]
    Usage { program: String },

    /// `call` names the primitive that failed, e.g., `execvp`.
    #[error("{call} failed: {source}")]
    Exec {
        call: &'static str,
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    /// Status the launcher exits with when it could not hand off to the interpreter.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::Usage { .. } | LaunchError::Exec { .. } => 1,
        }
    }
}
