use serde_json::{json, Map, Value};

use super::params::{render_scalar, ParamSpec, ParamTarget};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// How the response body is surfaced to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseMode {
    /// Decode as JSON, degrade to raw text.
    Json,
    /// Return the body verbatim as a string payload.
    Text,
    /// Buffer the body; write to the save-path argument or return base64.
    Bytes,
}

/// Synthesized `{status, message}` payload for an empty-body success code.
/// Codes listed here are accepted even when outside the 2xx range (304).
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub code: u16,
    pub status: &'static str,
    pub message: &'static str,
}

/// Pre-dispatch argument checks that fail as in-band Error Results.
#[derive(Debug, Clone)]
pub enum Rule {
    /// At least one optional query/body/form field must be provided.
    RequireUpdateField {
        error: &'static str,
        details: &'static str,
    },
    /// At least one of the named arguments must be provided.
    RequireOneOf {
        params: &'static [&'static str],
        error: &'static str,
        details: &'static str,
    },
    /// The named list argument must carry at least `min` items.
    RequireMinItems {
        param: &'static str,
        min: usize,
        error: &'static str,
        details: &'static str,
    },
}

/// One remote operation: everything the generic invoke path needs to build
/// the request, accept the response, and shape the payload.
#[derive(Debug, Clone)]
pub struct EndpointSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub method: Method,
    pub path: &'static str,
    pub params: Vec<ParamSpec>,
    pub statuses: Vec<StatusMessage>,
    pub error_summaries: Vec<(u16, &'static str)>,
    pub rules: Vec<Rule>,
    pub response: ResponseMode,
    pub save_path_param: Option<&'static str>,
}

impl EndpointSpec {
    fn new(method: Method, name: &'static str, path: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            method,
            path,
            params: Vec::new(),
            statuses: Vec::new(),
            error_summaries: Vec::new(),
            rules: Vec::new(),
            response: ResponseMode::Json,
            save_path_param: None,
        }
    }

    pub fn get(name: &'static str, path: &'static str, description: &'static str) -> Self {
        Self::new(Method::Get, name, path, description)
    }

    pub fn post(name: &'static str, path: &'static str, description: &'static str) -> Self {
        Self::new(Method::Post, name, path, description)
    }

    pub fn put(name: &'static str, path: &'static str, description: &'static str) -> Self {
        Self::new(Method::Put, name, path, description)
    }

    pub fn delete(name: &'static str, path: &'static str, description: &'static str) -> Self {
        Self::new(Method::Delete, name, path, description)
    }

    fn push(mut self, mut param: ParamSpec, target: ParamTarget) -> Self {
        param.target = target;
        self.params.push(param);
        self
    }

    /// Path placeholder; required unless it declares a preset.
    pub fn path(self, param: ParamSpec) -> Self {
        let param = if param.default.is_some() {
            param
        } else {
            param.req()
        };
        self.push(param, ParamTarget::Path)
    }

    pub fn query(self, param: ParamSpec) -> Self {
        self.push(param, ParamTarget::Query)
    }

    pub fn body(self, param: ParamSpec) -> Self {
        self.push(param, ParamTarget::Body)
    }

    pub fn form(self, param: ParamSpec) -> Self {
        self.push(param, ParamTarget::Form)
    }

    pub fn file(self, param: ParamSpec) -> Self {
        self.push(param, ParamTarget::File)
    }

    pub fn on_status(mut self, code: u16, status: &'static str, message: &'static str) -> Self {
        self.statuses.push(StatusMessage {
            code,
            status,
            message,
        });
        self
    }

    pub fn error_summary(mut self, code: u16, summary: &'static str) -> Self {
        self.error_summaries.push((code, summary));
        self
    }

    pub fn require_update_field(mut self, error: &'static str, details: &'static str) -> Self {
        self.rules.push(Rule::RequireUpdateField { error, details });
        self
    }

    pub fn require_one_of(
        mut self,
        params: &'static [&'static str],
        error: &'static str,
        details: &'static str,
    ) -> Self {
        self.rules.push(Rule::RequireOneOf {
            params,
            error,
            details,
        });
        self
    }

    pub fn require_min_items(
        mut self,
        param: &'static str,
        min: usize,
        error: &'static str,
        details: &'static str,
    ) -> Self {
        self.rules.push(Rule::RequireMinItems {
            param,
            min,
            error,
            details,
        });
        self
    }

    pub fn text_response(mut self) -> Self {
        self.response = ResponseMode::Text;
        self
    }

    /// Binary endpoint: declares the local save-path argument.
    pub fn binary(mut self, save_path: ParamSpec) -> Self {
        self.response = ResponseMode::Bytes;
        self.save_path_param = Some(save_path.name);
        self.push(save_path, ParamTarget::Local)
    }

    pub fn status_message(&self, code: u16) -> Option<&StatusMessage> {
        self.statuses.iter().find(|s| s.code == code)
    }

    pub fn custom_error_summary(&self, code: u16) -> Option<&'static str> {
        self.error_summaries
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, summary)| *summary)
    }

    /// Generated JSON input schema: typed properties, required list, closed
    /// to unknown keys.
    pub fn input_schema(&self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();
        for param in &self.params {
            properties.insert(param.name.to_string(), param.schema());
            if let Some(alias) = param.alias {
                properties.insert(alias.to_string(), param.schema());
            }
            if param.required {
                required.push(Value::String(param.name.to_string()));
            }
        }
        json!({
            "type": "object",
            "properties": properties,
            "required": required,
            "additionalProperties": false,
        })
    }

    /// Runs the declared pre-dispatch rules; a violation produces the
    /// in-band Error Result without any HTTP traffic.
    pub fn check_rules(&self, args: &Map<String, Value>) -> Option<Value> {
        for rule in &self.rules {
            match rule {
                Rule::RequireUpdateField { error, details } => {
                    if !self.has_update_field(args) {
                        return Some(error_payload(*error, json!(details)));
                    }
                }
                Rule::RequireOneOf {
                    params,
                    error,
                    details,
                } => {
                    let any = params.iter().any(|name| is_provided(args, name));
                    if !any {
                        return Some(error_payload(*error, json!(details)));
                    }
                }
                Rule::RequireMinItems {
                    param,
                    min,
                    error,
                    details,
                } => {
                    let len = args
                        .get(*param)
                        .and_then(Value::as_array)
                        .map(Vec::len)
                        .unwrap_or(0);
                    if len < *min {
                        return Some(error_payload(*error, json!(details)));
                    }
                }
            }
        }
        None
    }

    fn has_update_field(&self, args: &Map<String, Value>) -> bool {
        self.params.iter().any(|param| {
            let updatable = !param.required
                && param.default.is_none()
                && matches!(
                    param.target,
                    ParamTarget::Query | ParamTarget::Body | ParamTarget::Form
                );
            if !updatable {
                return false;
            }
            if is_provided(args, param.name) {
                return true;
            }
            param
                .alias
                .map(|alias| is_provided(args, alias))
                .unwrap_or(false)
        })
    }
}

pub(crate) fn is_provided(args: &Map<String, Value>, name: &str) -> bool {
    args.get(name).map(|v| !v.is_null()).unwrap_or(false)
}

/// The uniform in-band failure shape; `details` is always present.
pub fn error_payload(error: impl Into<String>, details: Value) -> Value {
    json!({ "error": error.into(), "details": details })
}

/// Fills `{name}` placeholders from the call arguments; unknown placeholders
/// are left verbatim.
pub fn render_template(template: &str, args: &Map<String, Value>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => {
                let key = &after[..end];
                match args.get(key) {
                    Some(value) => out.push_str(&render_scalar(value)),
                    None => {
                        out.push('{');
                        out.push_str(key);
                        out.push('}');
                    }
                }
                rest = &after[end + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::params::{p, ParamKind};

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn schema_marks_path_params_required() {
        let spec = EndpointSpec::get("demo", "/projects/{project_id}", "demo")
            .path(p("project_id", ParamKind::IdOrPath))
            .query(p("search", ParamKind::Str));
        let schema = spec.input_schema();
        assert_eq!(schema["required"], json!(["project_id"]));
        assert_eq!(schema["additionalProperties"], json!(false));
        assert_eq!(
            schema["properties"]["project_id"]["type"],
            json!(["integer", "string"])
        );
    }

    #[test]
    fn update_rule_rejects_empty_calls() {
        let spec = EndpointSpec::put("demo_update", "/projects/{project_id}", "demo")
            .path(p("project_id", ParamKind::IdOrPath))
            .body(p("title", ParamKind::Str))
            .body(p("description", ParamKind::Str))
            .require_update_field("Validation Error", "At least one parameter to update is required.");

        let failed = spec
            .check_rules(&args(json!({ "project_id": 1 })))
            .unwrap();
        assert_eq!(failed["error"], json!("Validation Error"));
        assert_eq!(
            failed["details"],
            json!("At least one parameter to update is required.")
        );

        assert!(spec
            .check_rules(&args(json!({ "project_id": 1, "title": "x" })))
            .is_none());
    }

    #[test]
    fn update_rule_counts_explicit_false() {
        let spec = EndpointSpec::put("demo_update", "/projects/{project_id}", "demo")
            .path(p("project_id", ParamKind::IdOrPath))
            .body(p("archived", ParamKind::Bool))
            .require_update_field("Validation Error", "At least one parameter to update is required.");
        assert!(spec
            .check_rules(&args(json!({ "project_id": 1, "archived": false })))
            .is_none());
    }

    #[test]
    fn one_of_rule_accepts_either_argument() {
        let spec = EndpointSpec::put("demo_reorder", "/x", "demo")
            .body(p("move_after_id", ParamKind::Int))
            .body(p("move_before_id", ParamKind::Int))
            .require_one_of(
                &["move_after_id", "move_before_id"],
                "Validation Error",
                "At least one of 'move_after_id' or 'move_before_id' is required.",
            );
        assert!(spec.check_rules(&args(json!({}))).is_some());
        assert!(spec
            .check_rules(&args(json!({ "move_before_id": 4 })))
            .is_none());
    }

    #[test]
    fn min_items_rule_counts_entries() {
        let spec = EndpointSpec::get("demo_merge_base", "/x", "demo")
            .query(p("refs", ParamKind::StrList).bracket().req())
            .require_min_items("refs", 2, "Invalid Input", "need two refs");
        assert!(spec
            .check_rules(&args(json!({ "refs": ["main"] })))
            .is_some());
        assert!(spec
            .check_rules(&args(json!({ "refs": ["main", "dev"] })))
            .is_none());
    }

    #[test]
    fn templates_interpolate_arguments() {
        let rendered = render_template(
            "Branch '{branch_name}' deleted successfully (HTTP 204 No Content).",
            &args(json!({ "branch_name": "feature/x" })),
        );
        assert_eq!(
            rendered,
            "Branch 'feature/x' deleted successfully (HTTP 204 No Content)."
        );
    }

    #[test]
    fn templates_keep_unknown_placeholders() {
        let rendered = render_template("{present} and {missing}", &args(json!({ "present": 1 })));
        assert_eq!(rendered, "1 and {missing}");
    }
}
