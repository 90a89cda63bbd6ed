use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed, reports written (findings are not failures)
/// - `Failure` (1): Command refused to run (missing `--search-path`, config already exists)
/// - `Error` (2): Command failed due to internal error (I/O error, malformed JSON, bad config)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
