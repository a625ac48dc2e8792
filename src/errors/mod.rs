//! Server-side failures only. GitLab API and transport failures are not
//! errors at this level; they come back in-band as the tool payload.

mod mcp_error;
mod tool_error;

pub use mcp_error::{ErrorCode, McpError};
pub use tool_error::{ToolError, ToolErrorKind};
