use std::fmt;

/// What a single remote-control request produced.
///
/// Dispatching never fails outright; every path ends in one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The device answered with HTTP 200. `payload` carries the body for queries.
    Success { status: u16, payload: Option<String> },
    /// The device answered with any other status.
    Failure { status: u16 },
    /// No usable HTTP response: timeout, refused connection, protocol error.
    Error { message: String },
}

impl CommandOutcome {
    pub fn success(status: u16) -> Self {
        CommandOutcome::Success {
            status,
            payload: None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CommandOutcome::Success { .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            CommandOutcome::Success { status, .. } | CommandOutcome::Failure { status } => {
                Some(*status)
            }
            CommandOutcome::Error { .. } => None,
        }
    }

    pub fn payload(&self) -> Option<&str> {
        match self {
            CommandOutcome::Success { payload, .. } => payload.as_deref(),
            _ => None,
        }
    }
}

impl fmt::Display for CommandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandOutcome::Success { status, .. } => write!(f, "Success: {status}"),
            CommandOutcome::Failure { status } => write!(f, "Failed: {status}"),
            CommandOutcome::Error { message } => write!(f, "Error: {message}"),
        }
    }
}
