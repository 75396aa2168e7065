//! Command-line interface for the subtext client.

pub mod commands;
pub mod display;
pub mod output;
pub mod types;

pub use output::{output, CommandOutput};
pub use types::{Cli, Commands};

/// A failure whose details were already written as command output.
///
/// [`handle_error`] exits non-zero for it without printing anything more, so
/// `--json` mode emits exactly one document.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct ReportedFailure(pub String);

/// Text [`handle_error`] prints for an error, or `None` when it was already reported.
///
/// In JSON mode this is `{"success": false, "error": "..."}` for stdout.
pub fn error_report(err: &anyhow::Error, json_mode: bool) -> Option<String> {
    if err.is::<ReportedFailure>() {
        return None;
    }

    if json_mode {
        let body = serde_json::json!({
            "success": false,
            "error": format!("{err:#}"),
        });
        Some(body.to_string())
    } else {
        Some(display::action_failure(&format!("Error: {err:#}")))
    }
}

/// Print an error and exit with a non-zero status.
///
/// JSON reports go to stdout so scripts can parse them; human reports go to stderr.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    if let Some(report) = error_report(&err, json_mode) {
        if json_mode {
            println!("{report}");
        } else {
            eprintln!("{report}");
        }
    }
    std::process::exit(1);
}
