use std::sync::Arc;
use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine as _;
use bytes::Bytes;
use reqwest::header;
use reqwest::StatusCode;
use serde_json::{json, Map, Value};
use thiserror::Error;
use url::Url;

use crate::config::ConfigStore;
use crate::constants::{gitlab, network, protocols};
use crate::errors::ToolError;
use crate::services::logger::Logger;

use super::endpoint::{
    error_payload, is_provided, render_template, EndpointSpec, Method, ResponseMode,
};
use super::params::{render_comma_list, render_scalar, ListStyle, ParamKind, ParamSpec, ParamTarget};

/// Transport-level failure: no usable response was obtained. Remote non-2xx
/// statuses are not errors at this seam.
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("request timed out after {} ms", network::TIMEOUT_API_REQUEST_MS)]
    Timeout,
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),
    #[error("connection failed: {0}")]
    Connect(String),
    #[error("request failed: {0}")]
    Request(String),
}

fn map_reqwest_error(err: reqwest::Error) -> HttpError {
    if err.is_timeout() {
        HttpError::Timeout
    } else if err.is_connect() {
        HttpError::Connect(err.to_string())
    } else {
        HttpError::Request(err.to_string())
    }
}

/// Shared HTTP front end for every registered endpoint. Builds the request
/// from the endpoint metadata, performs exactly one call, and shapes the
/// outcome so no remote failure ever propagates as a Rust error.
pub struct GitLabClient {
    logger: Logger,
    config: Arc<ConfigStore>,
    http: reqwest::Client,
}

impl GitLabClient {
    pub fn new(logger: &Logger, config: Arc<ConfigStore>) -> Result<Self, ToolError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(network::TIMEOUT_API_REQUEST_MS))
            .build()
            .map_err(|err| ToolError::internal(format!("HTTP client init failed: {err}")))?;
        Ok(Self {
            logger: logger.child("client"),
            config,
            http,
        })
    }

    pub fn config(&self) -> &Arc<ConfigStore> {
        &self.config
    }

    /// Executes one endpoint call. GitLab/transport failures come back as
    /// `Ok` carrying the in-band error payload; `Err` is reserved for local
    /// misuse (missing required argument).
    pub async fn invoke(
        &self,
        spec: &EndpointSpec,
        args: &Map<String, Value>,
    ) -> Result<Value, ToolError> {
        if let Some(payload) = spec.check_rules(args) {
            return Ok(payload);
        }

        for param in &spec.params {
            if param.target == ParamTarget::Path
                && param.default.is_none()
                && !is_provided(args, param.name)
            {
                return Err(ToolError::invalid_params(format!(
                    "Missing required argument '{}' for tool '{}'",
                    param.name, spec.name
                )));
            }
        }

        // Files are read before anything touches the network so a bad local
        // path costs no request.
        let mut file_parts = Vec::new();
        for param in &spec.params {
            if param.target != ParamTarget::File {
                continue;
            }
            let value = match args.get(param.name).filter(|v| !v.is_null()) {
                Some(value) => value,
                None => {
                    return Err(ToolError::invalid_params(format!(
                        "Missing required argument '{}' for tool '{}'",
                        param.name, spec.name
                    )))
                }
            };
            let path = render_scalar(value);
            match tokio::fs::read(&path).await {
                Ok(contents) => {
                    let filename = if param.file_basename {
                        std::path::Path::new(&path)
                            .file_name()
                            .map(|name| name.to_string_lossy().into_owned())
                            .unwrap_or_else(|| path.clone())
                    } else {
                        path.clone()
                    };
                    file_parts.push((param.wire_name(), filename, contents));
                }
                Err(err) => {
                    self.logger.warn(
                        "local file unavailable",
                        Some(&json!({ "tool": spec.name, "path": path })),
                    );
                    let details = match param.missing_message {
                        Some(template) => render_template(template, args),
                        None => err.to_string(),
                    };
                    return Ok(error_payload("File Not Found", json!(details)));
                }
            }
        }

        let url = match self.build_url(spec, args) {
            Ok(url) => url,
            Err(err) => {
                self.logger.warn(
                    "request build failed",
                    Some(&json!({ "tool": spec.name, "error": err.to_string() })),
                );
                return Ok(transport_error_payload(&err));
            }
        };

        self.logger.debug(
            "dispatching",
            Some(&json!({
                "tool": spec.name,
                "method": spec.method.as_str(),
                "url": url.as_str(),
            })),
        );

        let request = self.build_request(spec, args, url, file_parts)?;
        match self.dispatch(request).await {
            Ok((status, body)) => {
                self.logger.debug(
                    "response received",
                    Some(&json!({
                        "tool": spec.name,
                        "status": status.as_u16(),
                        "bytes": body.len(),
                    })),
                );
                self.shape_response(spec, args, status, body).await
            }
            Err(err) => {
                self.logger.warn(
                    "transport failure",
                    Some(&json!({ "tool": spec.name, "error": err.to_string() })),
                );
                Ok(transport_error_payload(&err))
            }
        }
    }

    fn build_url(&self, spec: &EndpointSpec, args: &Map<String, Value>) -> Result<Url, HttpError> {
        let base = self.config.base_url();
        if base.is_empty() {
            return Err(HttpError::InvalidUrl(
                "API base URL is not configured".to_string(),
            ));
        }
        let mut url = Url::parse(&base).map_err(|err| HttpError::InvalidUrl(err.to_string()))?;

        let scheme_ok = protocols::ALLOWED_HTTP
            .iter()
            .any(|allowed| allowed.trim_end_matches(':') == url.scheme());
        if !scheme_ok {
            return Err(HttpError::InvalidUrl(format!(
                "unsupported URL scheme '{}'",
                url.scheme()
            )));
        }

        // Path presets fill in when the argument is absent (archive format
        // suffix). Regular path params are pre-checked by invoke().
        let mut path_args = args.clone();
        for param in &spec.params {
            if param.target != ParamTarget::Path {
                continue;
            }
            let absent = path_args.get(param.name).map(Value::is_null).unwrap_or(true);
            if absent {
                if let Some(default) = &param.default {
                    path_args.insert(param.name.to_string(), default.clone());
                }
            }
        }

        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| HttpError::InvalidUrl("URL cannot carry a path".to_string()))?;
            segments.pop_if_empty();
            for segment in spec.path.split('/').filter(|s| !s.is_empty()) {
                if segment.contains('{') {
                    // One opaque segment per placeholder: embedded slashes
                    // percent-encode rather than splitting the path.
                    segments.push(&render_template(segment, &path_args));
                } else {
                    segments.push(segment);
                }
            }
        }

        let query = query_entries(spec, args);
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    fn build_request(
        &self,
        spec: &EndpointSpec,
        args: &Map<String, Value>,
        url: Url,
        file_parts: Vec<(&'static str, String, Vec<u8>)>,
    ) -> Result<reqwest::RequestBuilder, ToolError> {
        let method = match spec.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };
        let token = self.config.token();
        let mut request = self
            .http
            .request(method, url)
            .header(header::ACCEPT, gitlab::ACCEPT_JSON);
        if !token.is_empty() {
            request = request.header(gitlab::AUTH_HEADER, token);
        }

        if !file_parts.is_empty() {
            let mut form = reqwest::multipart::Form::new();
            for (name, filename, contents) in file_parts {
                form = form.part(
                    name,
                    reqwest::multipart::Part::bytes(contents).file_name(filename),
                );
            }
            for (key, value) in form_entries(spec, args) {
                form = form.text(key, value);
            }
            request = request.multipart(form);
        } else {
            let form = form_entries(spec, args);
            if !form.is_empty() {
                let encoded = serde_urlencoded::to_string(&form)
                    .map_err(|err| ToolError::internal(format!("form encoding failed: {err}")))?;
                request = request
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(encoded);
            } else {
                let body = body_object(spec, args);
                if !body.is_empty() {
                    request = request.json(&body);
                }
            }
        }
        Ok(request)
    }

    async fn dispatch(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<(StatusCode, Bytes), HttpError> {
        let response = request.send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_reqwest_error)?;
        Ok((status, body))
    }

    async fn shape_response(
        &self,
        spec: &EndpointSpec,
        args: &Map<String, Value>,
        status: StatusCode,
        body: Bytes,
    ) -> Result<Value, ToolError> {
        if let Some(message) = spec.status_message(status.as_u16()) {
            return Ok(json!({
                "status": message.status,
                "message": render_template(message.message, args),
            }));
        }

        if status.is_success() {
            return match spec.response {
                ResponseMode::Bytes => self.shape_binary(spec, args, &body).await,
                ResponseMode::Text => {
                    Ok(Value::String(String::from_utf8_lossy(&body).into_owned()))
                }
                ResponseMode::Json => Ok(decode_json_or_text(&body)),
            };
        }

        let summary = match spec.custom_error_summary(status.as_u16()) {
            Some(custom) => custom.to_string(),
            None => format!("GitLab API error: {}", status_line(status)),
        };
        Ok(error_payload(summary, error_details(status, &body)))
    }

    async fn shape_binary(
        &self,
        spec: &EndpointSpec,
        args: &Map<String, Value>,
        body: &Bytes,
    ) -> Result<Value, ToolError> {
        let save_path = spec
            .save_path_param
            .and_then(|name| args.get(name))
            .and_then(Value::as_str)
            .filter(|path| !path.is_empty());
        match save_path {
            Some(path) => match tokio::fs::write(path, body).await {
                Ok(()) => Ok(json!({
                    "status": "success",
                    "file_path": path,
                    "bytes": body.len(),
                })),
                Err(err) => Ok(error_payload("File Write Error", json!(err.to_string()))),
            },
            None => Ok(json!({
                "content_base64": BASE64_STANDARD.encode(body),
                "bytes": body.len(),
            })),
        }
    }
}

/// Resolves one parameter to its wire name and value: explicit argument
/// first, then the declared alias, then the always-sent default.
fn resolve(param: &ParamSpec, args: &Map<String, Value>) -> Option<(String, Value)> {
    if let Some(value) = args.get(param.name).filter(|v| !v.is_null()) {
        return Some((param.wire_name().to_string(), wrap_value(param, value)));
    }
    if let Some(alias) = param.alias {
        if let Some(value) = args.get(alias).filter(|v| !v.is_null()) {
            return Some((alias.to_string(), wrap_value(param, value)));
        }
    }
    param
        .default
        .as_ref()
        .map(|value| (param.wire_name().to_string(), value.clone()))
}

fn wrap_value(param: &ParamSpec, value: &Value) -> Value {
    match param.wrap {
        Some(template) => Value::String(template.replace("{value}", &render_scalar(value))),
        None => value.clone(),
    }
}

fn query_entries(spec: &EndpointSpec, args: &Map<String, Value>) -> Vec<(String, String)> {
    let mut entries = Vec::new();
    for param in &spec.params {
        if param.target != ParamTarget::Query {
            continue;
        }
        let (wire, value) = match resolve(param, args) {
            Some(resolved) => resolved,
            None => continue,
        };
        match param.kind {
            ParamKind::StrList | ParamKind::IntList | ParamKind::ObjList => match param.list_style
            {
                ListStyle::Comma | ListStyle::Native => {
                    entries.push((wire, render_comma_list(&value)))
                }
                ListStyle::Bracket => {
                    let key = format!("{wire}[]");
                    match value.as_array() {
                        Some(items) => {
                            for item in items {
                                entries.push((key.clone(), render_scalar(item)));
                            }
                        }
                        None => entries.push((key, render_scalar(&value))),
                    }
                }
            },
            ParamKind::Map => {
                if let Some(map) = value.as_object() {
                    for (sub, item) in map {
                        let key = format!("{wire}[{sub}]");
                        match item.as_array() {
                            Some(items) => {
                                for entry in items {
                                    entries.push((key.clone(), render_scalar(entry)));
                                }
                            }
                            None => entries.push((key, render_scalar(item))),
                        }
                    }
                }
            }
            _ => entries.push((wire, render_scalar(&value))),
        }
    }
    entries
}

fn form_entries(spec: &EndpointSpec, args: &Map<String, Value>) -> Vec<(String, String)> {
    let mut entries = Vec::new();
    for param in &spec.params {
        if param.target != ParamTarget::Form {
            continue;
        }
        if let Some((wire, value)) = resolve(param, args) {
            match param.kind {
                ParamKind::StrList | ParamKind::IntList => {
                    entries.push((wire, render_comma_list(&value)))
                }
                _ => entries.push((wire, render_scalar(&value))),
            }
        }
    }
    entries
}

fn body_object(spec: &EndpointSpec, args: &Map<String, Value>) -> Map<String, Value> {
    let mut body = Map::new();
    for param in &spec.params {
        if param.target != ParamTarget::Body {
            continue;
        }
        if let Some((wire, value)) = resolve(param, args) {
            let comma_list = param.list_style == ListStyle::Comma
                && matches!(param.kind, ParamKind::StrList | ParamKind::IntList);
            if comma_list {
                body.insert(wire, Value::String(render_comma_list(&value)));
            } else {
                body.insert(wire, value);
            }
        }
    }
    body
}

fn transport_error_payload(err: &HttpError) -> Value {
    let details = match err {
        HttpError::Timeout => format!(
            "The request did not complete within {} ms.",
            network::TIMEOUT_API_REQUEST_MS
        ),
        HttpError::InvalidUrl(inner) | HttpError::Connect(inner) | HttpError::Request(inner) => {
            inner.clone()
        }
    };
    error_payload(format!("Network/Request Error: {err}"), json!(details))
}

fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("HTTP {} {}", status.as_u16(), reason),
        None => format!("HTTP {}", status.as_u16()),
    }
}

fn decode_json_or_text(body: &Bytes) -> Value {
    match serde_json::from_slice::<Value>(body) {
        Ok(decoded) => decoded,
        Err(_) => Value::String(String::from_utf8_lossy(body).into_owned()),
    }
}

/// Detail fallback chain: decoded JSON, then raw text, then the status line
/// for empty bodies. Never empty.
fn error_details(status: StatusCode, body: &Bytes) -> Value {
    if let Ok(decoded) = serde_json::from_slice::<Value>(body) {
        if !decoded.is_null() {
            return decoded;
        }
    }
    let text = String::from_utf8_lossy(body);
    if text.trim().is_empty() {
        Value::String(status_line(status))
    } else {
        Value::String(text.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::super::params::p;
    use super::*;

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    fn sample_spec() -> EndpointSpec {
        EndpointSpec::get("demo_list", "/projects/{project_id}/issues", "demo")
            .path(p("project_id", ParamKind::IdOrPath))
            .query(p("with_stats", ParamKind::Bool))
            .query(p("labels", ParamKind::StrList).comma())
            .query(p("iids", ParamKind::IntList).bracket())
            .query(p("all_commits", ParamKind::Bool).rename("all"))
            .query(p("encoding", ParamKind::Str).preset(json!("text")))
    }

    #[test]
    fn absent_optionals_are_omitted() {
        let entries = query_entries(&sample_spec(), &args(json!({ "project_id": 1 })));
        assert!(entries.iter().all(|(k, _)| k != "with_stats" && k != "labels"));
    }

    #[test]
    fn explicit_false_is_sent_lowercase() {
        let entries = query_entries(
            &sample_spec(),
            &args(json!({ "project_id": 1, "with_stats": false })),
        );
        assert!(entries.contains(&("with_stats".to_string(), "false".to_string())));
    }

    #[test]
    fn lists_encode_per_declared_style() {
        let entries = query_entries(
            &sample_spec(),
            &args(json!({ "project_id": 1, "labels": ["bug", "p1"], "iids": [3, 9] })),
        );
        assert!(entries.contains(&("labels".to_string(), "bug,p1".to_string())));
        assert!(entries.contains(&("iids[]".to_string(), "3".to_string())));
        assert!(entries.contains(&("iids[]".to_string(), "9".to_string())));
    }

    #[test]
    fn renames_and_defaults_apply() {
        let entries = query_entries(
            &sample_spec(),
            &args(json!({ "project_id": 1, "all_commits": true })),
        );
        assert!(entries.contains(&("all".to_string(), "true".to_string())));
        assert!(entries.contains(&("encoding".to_string(), "text".to_string())));
    }

    #[test]
    fn alias_defers_to_primary() {
        let spec = EndpointSpec::post("demo_status", "/x", "demo")
            .query(p("name", ParamKind::Str).alias("context"));

        let both = query_entries(&spec, &args(json!({ "name": "ci", "context": "old" })));
        assert_eq!(both, vec![("name".to_string(), "ci".to_string())]);

        let alias_only = query_entries(&spec, &args(json!({ "context": "old" })));
        assert_eq!(alias_only, vec![("context".to_string(), "old".to_string())]);
    }

    #[test]
    fn json_bodies_keep_native_types() {
        let spec = EndpointSpec::post("demo_create", "/x", "demo")
            .body(p("title", ParamKind::Str).req())
            .body(p("confidential", ParamKind::Bool))
            .body(p("assignee_ids", ParamKind::IntList));
        let body = body_object(
            &spec,
            &args(json!({ "title": "t", "confidential": false, "assignee_ids": [1, 2] })),
        );
        assert_eq!(body.get("confidential"), Some(&json!(false)));
        assert_eq!(body.get("assignee_ids"), Some(&json!([1, 2])));
    }

    #[test]
    fn body_comma_lists_join_into_strings() {
        let spec = EndpointSpec::post("demo_create", "/x", "demo")
            .body(p("labels", ParamKind::StrList).comma());
        let body = body_object(&spec, &args(json!({ "labels": ["bug", "p1"] })));
        assert_eq!(body.get("labels"), Some(&json!("bug,p1")));
    }

    #[test]
    fn wrapped_values_render_their_template() {
        let spec = EndpointSpec::post("demo_note", "/x", "demo").query(
            p("comment", ParamKind::Str)
                .rename("body")
                .wrap("{value}\n\n/promote")
                .preset(json!("/promote")),
        );

        let with = query_entries(&spec, &args(json!({ "comment": "Scope grew" })));
        assert_eq!(
            with,
            vec![("body".to_string(), "Scope grew\n\n/promote".to_string())]
        );

        let without = query_entries(&spec, &args(json!({})));
        assert_eq!(without, vec![("body".to_string(), "/promote".to_string())]);
    }

    #[test]
    fn form_entries_render_scalars() {
        let spec = EndpointSpec::put("demo_form", "/x", "demo")
            .form(p("avatar", ParamKind::Str).preset(json!("")))
            .form(p("group_access", ParamKind::Int));
        let entries = form_entries(&spec, &args(json!({ "group_access": 30 })));
        assert!(entries.contains(&("avatar".to_string(), String::new())));
        assert!(entries.contains(&("group_access".to_string(), "30".to_string())));
    }

    #[test]
    fn timeout_payloads_name_the_time_limit() {
        let payload = transport_error_payload(&HttpError::Timeout);
        assert_eq!(
            payload["details"],
            json!("The request did not complete within 30000 ms.")
        );
        assert!(payload["error"]
            .as_str()
            .map(|s| s.starts_with("Network/Request Error:"))
            .unwrap_or(false));
    }

    #[test]
    fn error_details_fall_back_in_order() {
        let status = StatusCode::NOT_FOUND;
        assert_eq!(
            error_details(status, &Bytes::from_static(b"{\"message\":\"404\"}")),
            json!({ "message": "404" })
        );
        assert_eq!(
            error_details(status, &Bytes::from_static(b"plain text")),
            json!("plain text")
        );
        assert_eq!(
            error_details(status, &Bytes::new()),
            json!("HTTP 404 Not Found")
        );
    }

    #[test]
    fn two_xx_decode_failure_degrades_to_text() {
        assert_eq!(
            decode_json_or_text(&Bytes::from_static(b"not json")),
            json!("not json")
        );
        assert_eq!(decode_json_or_text(&Bytes::new()), json!(""));
    }
}
