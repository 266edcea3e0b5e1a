use std::io::{self, Write};

use tracing::info;

pub const TRUE_TOKEN: &str = "true";

/// Outcome of a push-status check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushStatus {
    Pushed,
    NotPushed,
}

impl PushStatus {
    /// Only the exact token `"true"` counts as pushed. No case folding and no
    /// other truthy spellings.
    pub fn from_token(token: &str) -> Self {
        if token == TRUE_TOKEN {
            PushStatus::Pushed
        } else {
            PushStatus::NotPushed
        }
    }

    pub fn exit_code(self) -> i32 {
        match self {
            PushStatus::Pushed => 0,
            PushStatus::NotPushed => 1,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PushStatus::Pushed => "Commit has been pushed successfully",
            PushStatus::NotPushed => "Commit has not been pushed successfully",
        }
    }
}

/// Writes the progress line and the outcome line to `out`.
pub fn check_push_status<W: Write>(token: &str, out: &mut W) -> io::Result<PushStatus> {
    writeln!(out, "Checking push status")?;
    let status = PushStatus::from_token(token);
    writeln!(out, "{}", status.message())?;
    out.flush()?;

    info!(?status, "push status checked");
    Ok(status)
}
