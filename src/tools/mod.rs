//! Tool Module
//!
//! A closed set of named document operations. Requests decode into the
//! `ToolRequest` enum and run through one exhaustive match, so adding or
//! removing an operation is a compile-time change.

pub mod definitions;
pub mod dispatcher;

pub use definitions::{
    ParameterDefinition, ReadFormat, ToolDefinition, ToolName, ToolRequest, tool_definitions,
};
pub use dispatcher::{ToolDispatcher, ToolResponse};
