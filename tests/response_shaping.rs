mod common;
use common::{serve_canned, CannedResponse};

use std::sync::Arc;

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

fn client_for(base: &str) -> GitLabClient {
    let logger = Logger::new("test");
    let config = Arc::new(ConfigStore::new());
    config.set(Some(base), Some("glpat-test"));
    GitLabClient::new(&logger, config).expect("client")
}

fn args(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap_or_default()
}

fn tmp_dir(prefix: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("{}-{}", prefix, uuid::Uuid::new_v4()))
}

#[tokio::test]
async fn success_bodies_that_are_not_json_degrade_to_text() {
    let (base, _handle) = serve_canned(vec![CannedResponse::text(200, "not json")]).await;
    let client = client_for(&base);

    let out = client
        .invoke(&endpoint("get_single_issue"), &args(json!({ "issue_id": 3 })))
        .await
        .expect("invoke get_single_issue");
    assert_eq!(out, json!("not json"));
}

#[tokio::test]
async fn api_errors_carry_decoded_json_details() {
    let (base, _handle) = serve_canned(vec![CannedResponse::json(
        404,
        json!({ "message": "404 Project Not Found" }),
    )])
    .await;
    let client = client_for(&base);

    let out = client
        .invoke(
            &endpoint("gitlab_get_single_branch"),
            &args(json!({ "project_id": 1, "branch": "main" })),
        )
        .await
        .expect("invoke gitlab_get_single_branch");
    assert_eq!(out["error"], json!("GitLab API error: HTTP 404 Not Found"));
    assert_eq!(out["details"], json!({ "message": "404 Project Not Found" }));
}

#[tokio::test]
async fn api_errors_fall_back_to_text_details() {
    let (base, _handle) = serve_canned(vec![CannedResponse::text(500, "upstream exploded")]).await;
    let client = client_for(&base);

    let out = client
        .invoke(
            &endpoint("gitlab_get_single_branch"),
            &args(json!({ "project_id": 1, "branch": "main" })),
        )
        .await
        .expect("invoke gitlab_get_single_branch");
    assert_eq!(
        out["error"],
        json!("GitLab API error: HTTP 500 Internal Server Error")
    );
    assert_eq!(out["details"], json!("upstream exploded"));
}

#[tokio::test]
async fn created_resources_decode_and_later_calls_start_clean() {
    let created = json!({ "name": "feature", "commit": { "id": "abc123" } });
    let (base, handle) = serve_canned(vec![
        CannedResponse::text(500, "boom"),
        CannedResponse::json(201, created.clone()),
    ])
    .await;
    let client = client_for(&base);
    let branch_args = args(json!({
        "project_id": 7,
        "branch_name": "feature",
        "ref_source": "main"
    }));

    let first = client
        .invoke(&endpoint("gitlab_create_branch"), &branch_args)
        .await
        .expect("first create call");
    assert_eq!(
        first["error"],
        json!("GitLab API error: HTTP 500 Internal Server Error")
    );

    // A retry after a failure sends the identical request and decodes the
    // created resource; nothing lingers from the failed attempt.
    let second = client
        .invoke(&endpoint("gitlab_create_branch"), &branch_args)
        .await
        .expect("second create call");
    assert_eq!(second, created);

    let captured = handle.await.expect("listener");
    assert_eq!(captured[0].path_and_query, captured[1].path_and_query);
}

#[tokio::test]
async fn empty_204_bodies_synthesize_a_status_payload() {
    let (base, _handle) = serve_canned(vec![CannedResponse::empty(204)]).await;
    let client = client_for(&base);

    let out = client
        .invoke(
            &endpoint("gitlab_delete_branch"),
            &args(json!({ "project_id": 1, "branch_name": "stale" })),
        )
        .await
        .expect("invoke gitlab_delete_branch");
    assert_eq!(
        out,
        json!({
            "status": "success",
            "message": "Branch 'stale' deleted successfully (HTTP 204 No Content)."
        })
    );
}

#[tokio::test]
async fn not_modified_synthesizes_an_already_subscribed_payload() {
    let (base, _handle) = serve_canned(vec![CannedResponse::empty(304)]).await;
    let client = client_for(&base);

    let out = client
        .invoke(
            &endpoint("subscribe_to_issue"),
            &args(json!({ "project_id": 4, "issue_iid": 9 })),
        )
        .await
        .expect("invoke subscribe_to_issue");
    assert_eq!(
        out,
        json!({
            "status": "not_modified",
            "message": "Already subscribed to issue 9."
        })
    );
}

#[tokio::test]
async fn text_endpoints_return_the_body_verbatim() {
    let raw = "fn main() {}\n";
    let (base, handle) = serve_canned(vec![CannedResponse::text(200, raw)]).await;
    let client = client_for(&base);

    let out = client
        .invoke(
            &endpoint("get_raw_gitlab_file"),
            &args(json!({ "project_id": 1, "file_path": "src/main.rs", "ref": "main" })),
        )
        .await
        .expect("invoke get_raw_gitlab_file");
    assert_eq!(out, json!(raw));

    let captured = handle.await.expect("listener").remove(0);
    assert!(
        captured.path_and_query.contains("/files/src%2Fmain.rs/raw"),
        "file paths ride as one encoded segment: {}",
        captured.path_and_query
    );
}

#[tokio::test]
async fn binary_endpoints_write_to_the_save_path() {
    let dir = tmp_dir("gitlab-mcp-archive");
    std::fs::create_dir_all(&dir).expect("create temp dir");
    let target = dir.join("repo.tar.gz");

    let (base, _handle) = serve_canned(vec![CannedResponse {
        status: 200,
        content_type: "application/gzip",
        body: b"archive-bytes".to_vec(),
    }])
    .await;
    let client = client_for(&base);

    let out = client
        .invoke(
            &endpoint("get_gitlab_file_archive"),
            &args(json!({ "project_id": 3, "save_path": target.to_string_lossy() })),
        )
        .await
        .expect("invoke get_gitlab_file_archive");
    assert_eq!(out["status"], json!("success"));
    assert_eq!(out["file_path"], json!(target.to_string_lossy()));
    assert_eq!(out["bytes"], json!(13));
    assert_eq!(
        std::fs::read(&target).expect("read saved archive"),
        b"archive-bytes"
    );
}

#[tokio::test]
async fn refused_connections_surface_as_network_errors() {
    // Bind to learn a free port, then drop the listener so connects are refused.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let base = format!("http://{}/api/v4", listener.local_addr().expect("addr"));
    drop(listener);

    let client = client_for(&base);
    let out = client
        .invoke(
            &endpoint("gitlab_list_branches"),
            &args(json!({ "project_id": 1 })),
        )
        .await
        .expect("invoke gitlab_list_branches");
    assert!(
        out["error"]
            .as_str()
            .unwrap_or_default()
            .starts_with("Network/Request Error:"),
        "unexpected payload: {out}"
    );
    assert!(!out["details"].as_str().unwrap_or_default().is_empty());
}

#[tokio::test]
async fn update_endpoints_reject_empty_field_sets_without_calling_out() {
    // No listener: the rule fires before any request is built.
    let client = client_for("http://127.0.0.1:9/api/v4");

    let out = client
        .invoke(&endpoint("edit_project"), &args(json!({ "project_id": 8 })))
        .await
        .expect("invoke edit_project");
    assert_eq!(out["error"], json!("No fields provided for update."));
    assert_eq!(out["details"], json!("The API was not called."));
}
