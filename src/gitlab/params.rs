use serde_json::{json, Value};

/// Argument type as declared in the tool schema and used for wire encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Str,
    Int,
    Num,
    Bool,
    /// Numeric id or URL-encoded path, accepted as integer or string.
    IdOrPath,
    StrList,
    IntList,
    /// Array of JSON objects, sent as-is in a JSON body.
    ObjList,
    /// JSON object, sent as-is in a body or expanded to `key[sub]` pairs in
    /// a query string.
    Map,
}

/// Where a parameter ends up in the outgoing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamTarget {
    /// Substituted into the path template as one opaque segment.
    Path,
    Query,
    /// JSON body field.
    Body,
    /// urlencoded form field, or a text part in multipart requests.
    Form,
    /// Local filesystem path read and attached as a multipart file part.
    File,
    /// Consumed locally (e.g. a save path for binary downloads), never sent.
    Local,
}

/// Encoding for list values. Declared explicitly per parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStyle {
    /// JSON array in a body; comma-joined when forced into a query string.
    Native,
    /// `labels=a,b` (also as a joined string inside JSON bodies)
    Comma,
    /// `iids[]=1&iids[]=2`
    Bracket,
}

/// One declared tool argument: schema shape plus wire encoding.
#[derive(Debug, Clone)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub target: ParamTarget,
    pub required: bool,
    /// Remote field name when it differs from the argument name.
    pub wire_name: Option<&'static str>,
    pub list_style: ListStyle,
    /// Value sent whenever the argument is absent.
    pub default: Option<Value>,
    /// Allowed values, surfaced as a schema `enum`.
    pub one_of: Option<&'static [&'static str]>,
    /// Secondary argument name consulted when this one is absent; the alias
    /// value is sent under the alias's own name.
    pub alias: Option<&'static str>,
    /// Multipart uploads: use only the basename of the local path as the
    /// remote filename.
    pub file_basename: bool,
    /// Error Result details when a File param points at nothing on disk.
    pub missing_message: Option<&'static str>,
    /// Template applied to a provided value before sending; `{value}` stands
    /// for the argument's rendered form. Presets are sent untouched.
    pub wrap: Option<&'static str>,
}

/// Starts a parameter spec; the endpoint builder assigns the target.
pub fn p(name: &'static str, kind: ParamKind) -> ParamSpec {
    ParamSpec {
        name,
        kind,
        target: ParamTarget::Query,
        required: false,
        wire_name: None,
        list_style: ListStyle::Native,
        default: None,
        one_of: None,
        alias: None,
        file_basename: false,
        missing_message: None,
        wrap: None,
    }
}

impl ParamSpec {
    pub fn req(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn rename(mut self, wire_name: &'static str) -> Self {
        self.wire_name = Some(wire_name);
        self
    }

    pub fn comma(mut self) -> Self {
        self.list_style = ListStyle::Comma;
        self
    }

    pub fn bracket(mut self) -> Self {
        self.list_style = ListStyle::Bracket;
        self
    }

    pub fn preset(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    pub fn one_of(mut self, values: &'static [&'static str]) -> Self {
        self.one_of = Some(values);
        self
    }

    pub fn alias(mut self, name: &'static str) -> Self {
        self.alias = Some(name);
        self
    }

    pub fn file_basename(mut self) -> Self {
        self.file_basename = true;
        self
    }

    pub fn missing(mut self, message: &'static str) -> Self {
        self.missing_message = Some(message);
        self
    }

    pub fn wrap(mut self, template: &'static str) -> Self {
        self.wrap = Some(template);
        self
    }

    pub fn wire_name(&self) -> &'static str {
        self.wire_name.unwrap_or(self.name)
    }

    /// JSON Schema fragment for this argument.
    pub fn schema(&self) -> Value {
        let mut node = match self.kind {
            ParamKind::Str => json!({ "type": "string" }),
            ParamKind::Int => json!({ "type": "integer" }),
            ParamKind::Num => json!({ "type": "number" }),
            ParamKind::Bool => json!({ "type": "boolean" }),
            ParamKind::IdOrPath => json!({ "type": ["integer", "string"] }),
            ParamKind::StrList => json!({ "type": "array", "items": { "type": "string" } }),
            ParamKind::IntList => json!({ "type": "array", "items": { "type": "integer" } }),
            ParamKind::ObjList => json!({ "type": "array", "items": { "type": "object" } }),
            ParamKind::Map => json!({ "type": "object" }),
        };
        if let Some(values) = self.one_of {
            if let Some(map) = node.as_object_mut() {
                map.insert("enum".to_string(), json!(values));
            }
        }
        node
    }
}

/// Renders a scalar for a query string, form field, or path segment.
/// Booleans become lowercase `"true"`/`"false"`; everything else uses its
/// natural string form.
pub fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Renders a list value as a comma-joined string.
pub fn render_comma_list(value: &Value) -> String {
    match value {
        Value::Array(items) => items
            .iter()
            .map(render_scalar)
            .collect::<Vec<_>>()
            .join(","),
        other => render_scalar(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booleans_render_lowercase() {
        assert_eq!(render_scalar(&json!(true)), "true");
        assert_eq!(render_scalar(&json!(false)), "false");
    }

    #[test]
    fn numbers_and_strings_render_verbatim() {
        assert_eq!(render_scalar(&json!(42)), "42");
        assert_eq!(render_scalar(&json!("group/project")), "group/project");
    }

    #[test]
    fn comma_lists_join_mixed_scalars() {
        assert_eq!(render_comma_list(&json!(["bug", "p1"])), "bug,p1");
        assert_eq!(render_comma_list(&json!([7, 9])), "7,9");
    }

    #[test]
    fn id_or_path_schema_accepts_both() {
        let node = p("project_id", ParamKind::IdOrPath).schema();
        assert_eq!(node["type"], json!(["integer", "string"]));
    }

    #[test]
    fn enum_values_surface_in_schema() {
        let node = p("state", ParamKind::Str)
            .one_of(&["opened", "closed"])
            .schema();
        assert_eq!(node["enum"], json!(["opened", "closed"]));
    }
}
