mod common;
use common::{serve_canned, CannedResponse, CapturedRequest};

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine as _;
use serde_json::{json, Map, Value};

use gitlab_mcp::config::ConfigStore;
use gitlab_mcp::gitlab::{EndpointSpec, GitLabClient};
use gitlab_mcp::services::logger::Logger;
use gitlab_mcp::tools::all_endpoints;

fn endpoint(name: &str) -> EndpointSpec {
    all_endpoints()
        .into_iter()
        .find(|spec| spec.name == name)
        .unwrap_or_else(|| panic!("endpoint '{name}' is not registered"))
}

fn client_for(base: &str, token: Option<&str>) -> GitLabClient {
    let logger = Logger::new("test");
    let config = Arc::new(ConfigStore::new());
    config.set(Some(base), token);
    GitLabClient::new(&logger, config).expect("client")
}

fn args(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap_or_default()
}

fn parse_captured(request: &CapturedRequest) -> url::Url {
    let full = format!("http://listener.invalid{}", request.path_and_query);
    url::Url::parse(&full).expect("parse captured url")
}

fn decoded_query(request: &CapturedRequest) -> Vec<(String, String)> {
    parse_captured(request)
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

fn tmp_dir(prefix: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("{}-{}", prefix, uuid::Uuid::new_v4()))
}

#[tokio::test]
async fn list_queries_encode_lists_per_declared_style() {
    let (base, handle) = serve_canned(vec![CannedResponse::json(200, json!([]))]).await;
    let client = client_for(&base, Some("glpat-test"));

    client
        .invoke(
            &endpoint("list_project_issues"),
            &args(json!({
                "project_id": "group/app",
                "labels": ["bug", "p1"],
                "iids": [3, 9],
                "state": "opened"
            })),
        )
        .await
        .expect("invoke list_project_issues");

    let captured = handle.await.expect("listener").remove(0);
    assert_eq!(captured.method, "GET");
    // Namespaced project paths ride as one percent-encoded segment.
    assert_eq!(
        parse_captured(&captured).path(),
        "/api/v4/projects/group%2Fapp/issues"
    );
    let query = decoded_query(&captured);
    assert!(query.contains(&("labels".to_string(), "bug,p1".to_string())));
    assert!(query.contains(&("iids[]".to_string(), "3".to_string())));
    assert!(query.contains(&("iids[]".to_string(), "9".to_string())));
    assert!(query.contains(&("state".to_string(), "opened".to_string())));
    assert_eq!(captured.header("private-token"), Some("glpat-test"));
    assert_eq!(captured.header("accept"), Some("application/json"));
}

#[tokio::test]
async fn issue_creation_sends_a_json_body_with_native_types() {
    let created = json!({ "iid": 101, "title": "Crash on save" });
    let (base, handle) = serve_canned(vec![CannedResponse::json(201, created.clone())]).await;
    let client = client_for(&base, Some("glpat-test"));

    let out = client
        .invoke(
            &endpoint("create_new_issue"),
            &args(json!({
                "project_id": 42,
                "title": "Crash on save",
                "confidential": false,
                "assignee_ids": [5, 7],
                "labels": ["bug", "p1"]
            })),
        )
        .await
        .expect("invoke create_new_issue");
    assert_eq!(out, created);

    let captured = handle.await.expect("listener").remove(0);
    assert_eq!(captured.method, "POST");
    assert_eq!(
        parse_captured(&captured).path(),
        "/api/v4/projects/42/issues"
    );
    assert!(captured
        .header("content-type")
        .unwrap_or_default()
        .starts_with("application/json"));
    let body: Value = serde_json::from_slice(&captured.body).expect("json body");
    assert_eq!(body["title"], json!("Crash on save"));
    assert_eq!(body["confidential"], json!(false));
    assert_eq!(body["assignee_ids"], json!([5, 7]));
    // Labels are declared comma-style, so the body carries a joined string.
    assert_eq!(body["labels"], json!("bug,p1"));
}

#[tokio::test]
async fn share_project_posts_an_urlencoded_form() {
    let (base, handle) =
        serve_canned(vec![CannedResponse::json(201, json!({ "id": 7 }))]).await;
    let client = client_for(&base, Some("glpat-test"));

    client
        .invoke(
            &endpoint("share_project_with_group"),
            &args(json!({ "project_id": 7, "group_id": 12, "group_access": 30 })),
        )
        .await
        .expect("invoke share_project_with_group");

    let captured = handle.await.expect("listener").remove(0);
    assert_eq!(captured.method, "POST");
    assert_eq!(
        captured.header("content-type"),
        Some("application/x-www-form-urlencoded")
    );
    let pairs: Vec<(String, String)> = url::form_urlencoded::parse(&captured.body)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert!(pairs.contains(&("group_id".to_string(), "12".to_string())));
    assert!(pairs.contains(&("group_access".to_string(), "30".to_string())));
}

#[tokio::test]
async fn branch_creation_renames_arguments_onto_the_wire() {
    let (base, handle) =
        serve_canned(vec![CannedResponse::json(201, json!({ "name": "feature/x" }))]).await;
    let client = client_for(&base, Some("glpat-test"));

    client
        .invoke(
            &endpoint("gitlab_create_branch"),
            &args(json!({
                "project_id": "team/app",
                "branch_name": "feature/x",
                "ref_source": "main"
            })),
        )
        .await
        .expect("invoke gitlab_create_branch");

    let captured = handle.await.expect("listener").remove(0);
    assert_eq!(
        parse_captured(&captured).path(),
        "/api/v4/projects/team%2Fapp/repository/branches"
    );
    let query = decoded_query(&captured);
    assert!(query.contains(&("branch".to_string(), "feature/x".to_string())));
    assert!(query.contains(&("ref".to_string(), "main".to_string())));
    assert!(query.iter().all(|(k, _)| k != "branch_name" && k != "ref_source"));
}

#[tokio::test]
async fn archive_downloads_fill_the_format_suffix_from_its_preset() {
    let (base, handle) = serve_canned(vec![CannedResponse {
        status: 200,
        content_type: "application/gzip",
        body: b"archive-bytes".to_vec(),
    }])
    .await;
    let client = client_for(&base, Some("glpat-test"));

    let out = client
        .invoke(
            &endpoint("get_gitlab_file_archive"),
            &args(json!({ "project_id": 3 })),
        )
        .await
        .expect("invoke get_gitlab_file_archive");

    let captured = handle.await.expect("listener").remove(0);
    assert_eq!(
        parse_captured(&captured).path(),
        "/api/v4/projects/3/repository/archive.tar.gz"
    );
    assert_eq!(
        out["content_base64"],
        json!(BASE64_STANDARD.encode("archive-bytes"))
    );
    assert_eq!(out["bytes"], json!(13));
}

#[tokio::test]
async fn metric_image_uploads_send_multipart_with_the_file_basename() {
    let dir = tmp_dir("gitlab-mcp-upload");
    std::fs::create_dir_all(&dir).expect("create temp dir");
    let image = dir.join("burn-rate.png");
    std::fs::write(&image, b"png-bytes").expect("write image");

    let (base, handle) =
        serve_canned(vec![CannedResponse::json(201, json!({ "id": 23 }))]).await;
    let client = client_for(&base, Some("glpat-test"));

    client
        .invoke(
            &endpoint("upload_incident_metric_image"),
            &args(json!({
                "project_id": 1,
                "issue_iid": 2,
                "file_path": image.to_string_lossy(),
                "url": "https://dash.example/burn"
            })),
        )
        .await
        .expect("invoke upload_incident_metric_image");

    let captured = handle.await.expect("listener").remove(0);
    assert!(captured
        .header("content-type")
        .unwrap_or_default()
        .starts_with("multipart/form-data; boundary="));
    let body = captured.body_text();
    assert!(body.contains("name=\"file\""));
    assert!(
        body.contains("filename=\"burn-rate.png\""),
        "the upload must carry the basename, not the full path"
    );
    assert!(body.contains("png-bytes"));
    assert!(body.contains("name=\"url\""));
    assert!(body.contains("https://dash.example/burn"));
}

#[tokio::test]
async fn missing_local_files_fail_before_any_request() {
    let missing = tmp_dir("gitlab-mcp-missing").join("nope.png");
    // No listener: the file read happens first, so nothing must hit the network.
    let client = client_for("http://127.0.0.1:9/api/v4", Some("glpat-test"));

    let out = client
        .invoke(
            &endpoint("upload_incident_metric_image"),
            &args(json!({
                "project_id": 1,
                "issue_iid": 2,
                "file_path": missing.to_string_lossy()
            })),
        )
        .await
        .expect("invoke with missing file");
    assert_eq!(out["error"], json!("File Not Found"));
    assert_eq!(
        out["details"],
        json!(format!("File not found at path: {}", missing.to_string_lossy()))
    );
}

#[tokio::test]
async fn empty_tokens_leave_the_auth_header_off() {
    let (base, handle) = serve_canned(vec![CannedResponse::json(
        401,
        json!({ "message": "401 Unauthorized" }),
    )])
    .await;
    let client = client_for(&base, None);

    let out = client
        .invoke(
            &endpoint("gitlab_get_single_branch"),
            &args(json!({ "project_id": 5, "branch": "main" })),
        )
        .await
        .expect("invoke gitlab_get_single_branch");

    let captured = handle.await.expect("listener").remove(0);
    assert_eq!(captured.header("private-token"), None);
    assert_eq!(out["error"], json!("GitLab API error: HTTP 401 Unauthorized"));
    assert_eq!(out["details"], json!({ "message": "401 Unauthorized" }));
}
