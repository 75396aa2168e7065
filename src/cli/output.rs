//! Output formatting utilities for the CLI.

use serde::Serialize;

/// Trait for command results that render as human-readable text or JSON.
pub trait CommandOutput: Serialize {
    /// Text for a terminal.
    fn to_human(&self) -> String;
    /// Machine-readable form for `--json`.
    fn to_json(&self) -> serde_json::Value;
}

/// Dispatch output based on JSON mode flag.
pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(&result.to_json()).unwrap_or_default());
    } else {
        println!("{}", result.to_human());
    }
}
