use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::config::ConfigStore;
use crate::constants::gitlab as gitlab_consts;
use crate::errors::ToolError;
use crate::mcp::catalog::ToolDef;
use crate::services::tool_executor::ToolHandler;

/// Sets the base URL and/or token for the running process. Updates are
/// partial: a call carrying only a token rotates the token and keeps the URL.
pub struct ConfigureTool {
    store: Arc<ConfigStore>,
}

impl ConfigureTool {
    pub fn new(store: Arc<ConfigStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ToolHandler for ConfigureTool {
    async fn handle(&self, args: Value) -> Result<Value, ToolError> {
        let api_url = args.get("api_url").and_then(Value::as_str);
        let token = args.get("token").and_then(Value::as_str);
        let snapshot = self.store.set(api_url, token);
        Ok(json!({
            "status": "configured",
            "api_url": display_url(&snapshot.base_url),
            "token_set": !snapshot.token.is_empty(),
            "message": "GitLab configuration updated.",
        }))
    }
}

/// Reports the configuration state. The token itself never appears in the
/// payload, only whether one is set.
pub struct CheckConfigTool {
    store: Arc<ConfigStore>,
}

impl CheckConfigTool {
    pub fn new(store: Arc<ConfigStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ToolHandler for CheckConfigTool {
    async fn handle(&self, _args: Value) -> Result<Value, ToolError> {
        let snapshot = self.store.snapshot();
        let url_set = !snapshot.base_url.is_empty();
        let token_set = !snapshot.token.is_empty();
        let message = match (url_set, token_set) {
            (true, true) => "Ready to use GitLab tools.",
            (true, false) => "Token is not set. Call gitlab_configure with 'token'.",
            (false, true) => "API URL is not set. Call gitlab_configure with 'api_url'.",
            (false, false) => {
                "API URL and token are not set. Call gitlab_configure with 'api_url' and 'token'."
            }
        };
        Ok(json!({
            "configured": snapshot.is_configured(),
            "api_url": display_url(&snapshot.base_url),
            "token_set": token_set,
            "message": message,
        }))
    }
}

fn display_url(base_url: &str) -> &str {
    if base_url.is_empty() {
        gitlab_consts::UNSET_PLACEHOLDER
    } else {
        base_url
    }
}

pub(crate) fn tool_defs() -> Vec<ToolDef> {
    vec![
        ToolDef {
            name: "gitlab_configure".to_string(),
            description: "Set the GitLab API base URL and private token for this session."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "api_url": { "type": "string" },
                    "token": { "type": "string" },
                },
                "required": [],
                "additionalProperties": false,
            }),
        },
        ToolDef {
            name: "gitlab_check_config".to_string(),
            description: "Report whether the GitLab connection is configured, without revealing the token.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {},
                "required": [],
                "additionalProperties": false,
            }),
        },
    ]
}

pub(crate) fn handlers(store: &Arc<ConfigStore>) -> Vec<(&'static str, Arc<dyn ToolHandler>)> {
    vec![
        (
            "gitlab_configure",
            Arc::new(ConfigureTool::new(store.clone())) as Arc<dyn ToolHandler>,
        ),
        (
            "gitlab_check_config",
            Arc::new(CheckConfigTool::new(store.clone())),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn configure_applies_partial_updates() {
        let store = Arc::new(ConfigStore::new());
        let tool = ConfigureTool::new(store.clone());

        let out = tool
            .handle(json!({
                "api_url": "https://gitlab.example.com/api/v4",
                "token": "glpat-abc",
            }))
            .await
            .unwrap();
        assert_eq!(out["status"], json!("configured"));
        assert_eq!(out["api_url"], json!("https://gitlab.example.com/api/v4"));
        assert_eq!(out["token_set"], json!(true));
        assert_eq!(out["message"], json!("GitLab configuration updated."));

        let out = tool.handle(json!({ "token": "glpat-def" })).await.unwrap();
        assert_eq!(out["api_url"], json!("https://gitlab.example.com/api/v4"));
        assert_eq!(store.token(), "glpat-def");
    }

    #[tokio::test]
    async fn configure_never_echoes_the_token() {
        let tool = ConfigureTool::new(Arc::new(ConfigStore::new()));
        let out = tool
            .handle(json!({ "token": "glpat-supersecret" }))
            .await
            .unwrap();
        let rendered = serde_json::to_string(&out).unwrap();
        assert!(!rendered.contains("glpat-supersecret"));
        assert_eq!(out["api_url"], json!("(not set)"));
        assert_eq!(out["token_set"], json!(true));
    }

    #[tokio::test]
    async fn check_config_names_missing_pieces() {
        let store = Arc::new(ConfigStore::new());
        let tool = CheckConfigTool::new(store.clone());

        let out = tool.handle(json!({})).await.unwrap();
        assert_eq!(out["configured"], json!(false));
        assert_eq!(out["api_url"], json!("(not set)"));
        let message = out["message"].as_str().unwrap();
        assert!(message.contains("api_url"));
        assert!(message.contains("token"));

        store.set(Some("https://gitlab.example.com/api/v4"), None);
        let out = tool.handle(json!({})).await.unwrap();
        assert_eq!(out["configured"], json!(false));
        assert!(out["message"].as_str().unwrap().contains("token"));

        store.set(None, Some("glpat-abc"));
        let out = tool.handle(json!({})).await.unwrap();
        assert_eq!(out["configured"], json!(true));
        assert_eq!(out["token_set"], json!(true));
        assert_eq!(out["message"], json!("Ready to use GitLab tools."));
    }
}
