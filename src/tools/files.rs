use serde_json::json;

use crate::gitlab::ParamKind::*;
use crate::gitlab::{p, EndpointSpec};

pub(crate) fn register(out: &mut Vec<EndpointSpec>) {
    out.push(
        EndpointSpec::post(
            "create_gitlab_file",
            "/projects/{project_id}/repository/files/{file_path}",
            "Create a new file on a branch in one commit.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("file_path", Str))
        .body(p("branch", Str).req())
        .body(p("content", Str).req())
        .body(p("commit_message", Str).req())
        .body(p("author_email", Str))
        .body(p("author_name", Str))
        .body(
            p("encoding", Str)
                .one_of(&["text", "base64"])
                .preset(json!("text")),
        )
        .body(p("execute_filemode", Bool).preset(json!(false)))
        .body(p("start_branch", Str)),
    );

    out.push(
        EndpointSpec::put(
            "update_gitlab_file",
            "/projects/{project_id}/repository/files/{file_path}",
            "Replace the contents of an existing file on a branch.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("file_path", Str))
        .body(p("branch", Str).req())
        .body(p("content", Str).req())
        .body(p("commit_message", Str).req())
        .body(p("author_email", Str))
        .body(p("author_name", Str))
        .body(
            p("encoding", Str)
                .one_of(&["text", "base64"])
                .preset(json!("text")),
        )
        .body(p("execute_filemode", Bool).preset(json!(false)))
        .body(p("last_commit_id", Str))
        .body(p("start_branch", Str)),
    );

    out.push(
        EndpointSpec::delete(
            "delete_gitlab_file",
            "/projects/{project_id}/repository/files/{file_path}",
            "Delete a file from a branch in one commit.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("file_path", Str))
        .body(p("branch", Str).req())
        .body(p("commit_message", Str).req())
        .body(p("author_email", Str))
        .body(p("author_name", Str))
        .body(p("last_commit_id", Str))
        .body(p("start_branch", Str))
        .on_status(
            204,
            "success",
            "File deleted successfully (No Content returned)",
        ),
    );

    out.push(
        EndpointSpec::get(
            "get_raw_gitlab_file",
            "/projects/{project_id}/repository/files/{file_path}/raw",
            "Fetch raw file contents from a ref as plain text.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("file_path", Str))
        .query(p("ref", Str).req())
        .query(p("lfs", Bool).preset(json!(false)))
        .text_response(),
    );

    out.push(
        EndpointSpec::get(
            "get_gitlab_file_metadata_and_content",
            "/projects/{project_id}/repository/files/{file_path}",
            "Fetch file metadata plus base64 content from a ref.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("file_path", Str))
        .query(p("ref", Str).req()),
    );

    out.push(
        EndpointSpec::get(
            "get_gitlab_file_blame",
            "/projects/{project_id}/repository/files/{file_path}/blame",
            "Fetch per-line blame for a file, optionally limited to a line range.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("file_path", Str))
        .query(p("ref", Str).req())
        .query(p("range_start", Int).rename("range[start]"))
        .query(p("range_end", Int).rename("range[end]"))
        .query(p("range_hash", Str).rename("range")),
    );
}
