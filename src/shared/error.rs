use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish a graph that cannot be
/// ordered from an outright failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - report produced and a load order exists
    Success = 0,
    /// Report produced, but the graph contains a cycle so no load order exists
    CycleDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (registry error, network error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::CycleDetected => write!(f, "Cycle Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency graph analysis.
///
/// Uses thiserror to derive Display and Error traits automatically.
/// Application code passes these around inside `anyhow::Error` and
/// callers recover the concrete kind with `downcast_ref`.
#[derive(Debug, Error)]
pub enum DepGraphError {
    #[error("Registry request failed ({status}): {url}\nResponse: {body}")]
    Registry {
        url: String,
        status: u16,
        body: String,
    },

    #[error("Failed to decode registry response from {url}\nDetails: {details}")]
    Decode { url: String, details: String },

    #[error("Invalid version requirement {requirement:?} for {name}")]
    InvalidRequirement { name: String, requirement: String },

    #[error("No available (non-yanked) versions for {name}")]
    NoAvailableVersion { name: String },

    #[error("Cycle detected: the dependency graph rooted at {root} cannot be ordered")]
    CycleDetected { root: String },

    #[error("Failed to parse fixture at line {line}: {details}\n\n💡 Hint: Use `parent: child1, child2` or `parent -> child1 child2`")]
    FixtureParse { line: usize, details: String },

    #[error("Invalid package reference: {reason}")]
    InvalidPackage { reason: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}
