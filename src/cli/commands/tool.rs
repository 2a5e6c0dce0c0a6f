//! Tool Command
//!
//! Dispatches one JSON tool request against the configured document store
//! and prints the response envelope.
//!
//! Usage:
//!   docsight tool request.json
//!   echo '{"tool": "list_documents"}' | docsight tool
//!   docsight tool --list

use std::path::Path;

use crate::cli::util::{CommandContext, print_json, read_json};
use crate::tools::{ToolDispatcher, tool_definitions};
use crate::types::Result;

/// Returns whether the tool call succeeded
pub fn run(context: &CommandContext, request: Option<&Path>, list: bool) -> Result<bool> {
    if list {
        print_json(&tool_definitions())?;
        return Ok(true);
    }

    let request = read_json(request)?;
    let dispatcher = ToolDispatcher::new(context.store());
    let response = dispatcher.handle(&request);
    print_json(&response)?;

    Ok(response.success)
}
