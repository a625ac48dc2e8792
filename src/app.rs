use std::sync::Arc;

use crate::config::ConfigStore;
use crate::constants::server;
use crate::errors::ToolError;
use crate::gitlab::GitLabClient;
use crate::mcp::catalog::tool_catalog;
use crate::services::logger::Logger;
use crate::services::tool_executor::ToolExecutor;
use crate::tools;

pub struct App {
    pub logger: Logger,
    pub config: Arc<ConfigStore>,
    pub tool_executor: Arc<ToolExecutor>,
}

impl App {
    /// Catches wiring drift at startup: every cataloged tool must resolve to
    /// a handler or an endpoint, with no duplicates on either side.
    fn validate_tool_wiring(executor: &ToolExecutor) -> Result<(), ToolError> {
        let catalog = tool_catalog();
        let mut missing: Vec<String> = catalog
            .iter()
            .filter(|tool| !executor.knows(&tool.name))
            .map(|tool| tool.name.clone())
            .collect();
        if !missing.is_empty() {
            missing.sort();
            return Err(ToolError::internal("Tool wiring is incomplete")
                .with_hint(
                    "Every cataloged tool must resolve to a bespoke handler or a registered endpoint.",
                )
                .with_details(serde_json::json!({ "missing_tools": missing })));
        }
        if executor.tool_count() != catalog.len() {
            return Err(ToolError::internal("Tool wiring is inconsistent")
                .with_hint("A tool name is registered twice, or an endpoint has no catalog entry.")
                .with_details(serde_json::json!({
                    "executor_tools": executor.tool_count(),
                    "cataloged_tools": catalog.len(),
                })));
        }
        Ok(())
    }

    pub fn initialize() -> Result<Self, ToolError> {
        let logger = Logger::new(server::NAME);
        let config = Arc::new(ConfigStore::from_env());
        let client = Arc::new(GitLabClient::new(&logger, config.clone())?);

        let tool_executor = Arc::new(ToolExecutor::new(
            &logger,
            client,
            tools::all_endpoints(),
            tools::config::handlers(&config),
        ));
        Self::validate_tool_wiring(&tool_executor)?;

        logger.info(
            "tool catalog ready",
            Some(&serde_json::json!({
                "tools": tool_catalog().len(),
                "configured": config.is_configured(),
            })),
        );

        Ok(Self {
            logger,
            config,
            tool_executor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_wires_every_cataloged_tool() {
        let app = App::initialize().expect("wiring must be complete");
        assert_eq!(app.tool_executor.tool_count(), tool_catalog().len());
        assert!(app.tool_executor.knows("gitlab_configure"));
        assert!(app.tool_executor.knows("gitlab_list_branches"));
    }
}
