use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::errors::ToolError;
use crate::gitlab::{EndpointSpec, GitLabClient};
use crate::services::logger::Logger;
use crate::utils::suggest::suggest;

/// Bespoke tool backed by local state rather than a declarative endpoint.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    async fn handle(&self, args: Value) -> Result<Value, ToolError>;
}

/// Routes a validated tool call to its bespoke handler or to the shared
/// HTTP client via the endpoint's metadata.
pub struct ToolExecutor {
    logger: Logger,
    client: Arc<GitLabClient>,
    endpoints: HashMap<String, EndpointSpec>,
    handlers: HashMap<String, Arc<dyn ToolHandler>>,
}

impl ToolExecutor {
    pub fn new(
        logger: &Logger,
        client: Arc<GitLabClient>,
        endpoints: Vec<EndpointSpec>,
        handlers: Vec<(&'static str, Arc<dyn ToolHandler>)>,
    ) -> Self {
        Self {
            logger: logger.child("executor"),
            client,
            endpoints: endpoints
                .into_iter()
                .map(|spec| (spec.name.to_string(), spec))
                .collect(),
            handlers: handlers
                .into_iter()
                .map(|(name, handler)| (name.to_string(), handler))
                .collect(),
        }
    }

    pub fn knows(&self, tool: &str) -> bool {
        self.handlers.contains_key(tool) || self.endpoints.contains_key(tool)
    }

    pub fn tool_count(&self) -> usize {
        self.handlers.len() + self.endpoints.len()
    }

    pub async fn execute(&self, tool: &str, args: Value) -> Result<Value, ToolError> {
        let started_at = chrono::Utc::now().timestamp_millis();
        let request_id = uuid::Uuid::new_v4().to_string();

        self.logger.debug(
            "tool call",
            Some(&json!({ "request_id": request_id, "tool": tool, "args": args })),
        );

        let result = if let Some(handler) = self.handlers.get(tool) {
            handler.handle(args).await?
        } else if let Some(spec) = self.endpoints.get(tool) {
            let args = args.as_object().cloned().unwrap_or_default();
            self.client.invoke(spec, &args).await?
        } else {
            let candidates: Vec<String> = self
                .handlers
                .keys()
                .chain(self.endpoints.keys())
                .cloned()
                .collect();
            let suggestions = suggest(tool, &candidates, 6);
            let mut error = ToolError::invalid_params(format!("Unknown tool: {tool}"));
            if !suggestions.is_empty() {
                error = error.with_hint(format!("Did you mean: {}", suggestions.join(", ")));
            }
            return Err(error);
        };

        self.logger.info(
            "tool call complete",
            Some(&json!({
                "request_id": request_id,
                "tool": tool,
                "duration_ms": chrono::Utc::now().timestamp_millis() - started_at,
            })),
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigStore;
    use crate::gitlab::{p, ParamKind};

    struct Echo;

    #[async_trait]
    impl ToolHandler for Echo {
        async fn handle(&self, args: Value) -> Result<Value, ToolError> {
            Ok(json!({ "echo": args }))
        }
    }

    fn executor() -> ToolExecutor {
        let logger = Logger::new("test");
        let config = Arc::new(ConfigStore::new());
        let client = Arc::new(GitLabClient::new(&logger, config).unwrap());
        let endpoints = vec![EndpointSpec::get(
            "gitlab_list_branches",
            "/projects/{project_id}/repository/branches",
            "demo",
        )
        .path(p("project_id", ParamKind::IdOrPath))];
        let handlers = vec![("echo", Arc::new(Echo) as Arc<dyn ToolHandler>)];
        ToolExecutor::new(&logger, client, endpoints, handlers)
    }

    #[tokio::test]
    async fn routes_to_bespoke_handlers_first() {
        let out = executor()
            .execute("echo", json!({ "k": 1 }))
            .await
            .unwrap();
        assert_eq!(out, json!({ "echo": { "k": 1 } }));
    }

    #[tokio::test]
    async fn unknown_tool_suggests_near_matches() {
        let err = executor()
            .execute("gitlab_list_branch", json!({}))
            .await
            .unwrap_err();
        assert!(err.message.contains("Unknown tool"));
        assert!(err.hint.unwrap().contains("gitlab_list_branches"));
    }

    #[tokio::test]
    async fn endpoint_call_without_required_path_arg_fails_locally() {
        let err = executor()
            .execute("gitlab_list_branches", json!({}))
            .await
            .unwrap_err();
        assert!(err.message.contains("project_id"));
    }
}
