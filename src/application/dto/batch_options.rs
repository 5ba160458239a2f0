//! Batch options DTO

use std::fmt;
use std::str::FromStr;

/// What the batch driver does after a file fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Print the abort notice and stop processing the remaining files
    #[default]
    Halt,
    /// Log the failure and go on with the next file
    Continue,
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorPolicy::Halt => write!(f, "halt"),
            ErrorPolicy::Continue => write!(f, "continue"),
        }
    }
}

impl FromStr for ErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "halt" => Ok(ErrorPolicy::Halt),
            "continue" => Ok(ErrorPolicy::Continue),
            other => Err(format!("unknown error policy '{}'", other)),
        }
    }
}

/// Options for a classification batch
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Behaviour after a failed file
    pub error_policy: ErrorPolicy,
    /// Whether to skip the definition export/restore round trip
    pub skip_reload: bool,
}

impl BatchOptions {
    /// Sets the error policy
    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    /// Skips the definition export/restore round trip
    pub fn without_reload(mut self) -> Self {
        self.skip_reload = true;
        self
    }
}
