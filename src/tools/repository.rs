use serde_json::json;

use crate::gitlab::ParamKind::*;
use crate::gitlab::{p, EndpointSpec};

pub(crate) fn register(out: &mut Vec<EndpointSpec>) {
    out.push(
        EndpointSpec::get(
            "list_gitlab_repository_tree",
            "/projects/{project_id}/repository/tree",
            "List files and directories in a repository, optionally recursively.",
        )
        .path(p("project_id", IdOrPath))
        .query(p("ref", Str))
        .query(p("path", Str))
        .query(p("recursive", Bool))
        .query(p("per_page", Int))
        .query(p("page_token", Str))
        .query(p("pagination", Str)),
    );

    out.push(
        EndpointSpec::get(
            "get_gitlab_blob",
            "/projects/{project_id}/repository/blobs/{sha}",
            "Fetch blob metadata and base64 content by SHA.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("sha", Str)),
    );

    out.push(
        EndpointSpec::get(
            "get_raw_gitlab_blob",
            "/projects/{project_id}/repository/blobs/{sha}/raw",
            "Fetch the raw contents of a blob by SHA.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("sha", Str))
        .text_response(),
    );

    // The archive format rides in the final path segment, so the suffix is a
    // path preset rather than a query parameter.
    out.push(
        EndpointSpec::get(
            "get_gitlab_file_archive",
            "/projects/{project_id}/repository/archive.{format_suffix}",
            "Download the repository (or a subpath) as a compressed archive.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("format_suffix", Str).preset(json!("tar.gz")))
        .query(p("sha", Str))
        .query(p("path", Str))
        .binary(p("save_path", Str)),
    );

    out.push(
        EndpointSpec::get(
            "compare_gitlab_refs",
            "/projects/{project_id}/repository/compare",
            "Compare two branches, tags, or commits, optionally across projects.",
        )
        .path(p("project_id", IdOrPath))
        .query(p("from_ref", Str).req().rename("from"))
        .query(p("to_ref", Str).req().rename("to"))
        .query(p("straight", Bool).preset(json!(false)))
        .query(p("from_project_id", IdOrPath)),
    );

    out.push(
        EndpointSpec::get(
            "get_gitlab_contributors",
            "/projects/{project_id}/repository/contributors",
            "List repository contributors with their commit counts.",
        )
        .path(p("project_id", IdOrPath))
        .query(p("order_by", Str).one_of(&["name", "email", "commits"]))
        .query(p("sort", Str).one_of(&["asc", "desc"])),
    );

    out.push(
        EndpointSpec::get(
            "get_gitlab_merge_base",
            "/projects/{project_id}/repository/merge_base",
            "Find the common ancestor commit of two or more refs.",
        )
        .path(p("project_id", IdOrPath))
        .query(p("refs", StrList).bracket().req())
        .require_min_items(
            "refs",
            2,
            "Invalid Input",
            "The 'refs' list must contain at least two references (SHA, branch, or tag) to find a common merge base.",
        ),
    );

    out.push(
        EndpointSpec::post(
            "add_gitlab_changelog_data",
            "/projects/{project_id}/repository/changelog",
            "Generate changelog entries for a version and commit them to the changelog file.",
        )
        .path(p("project_id", IdOrPath))
        .form(p("version", Str).req())
        .form(p("branch", Str))
        .form(p("config_file", Str))
        .form(p("date", Str))
        .form(p("file", Str))
        .form(p("from_ref", Str).rename("from"))
        .form(p("message", Str))
        .form(p("to_ref", Str).rename("to"))
        .form(p("trailer", Str)),
    );

    out.push(
        EndpointSpec::get(
            "generate_gitlab_changelog_data",
            "/projects/{project_id}/repository/changelog",
            "Preview changelog entries for a version without committing anything.",
        )
        .path(p("project_id", IdOrPath))
        .query(p("version", Str).req())
        .query(p("config_file", Str))
        .query(p("date", Str))
        .query(p("from_ref", Str).rename("from"))
        .query(p("to_ref", Str).rename("to"))
        .query(p("trailer", Str)),
    );

    out.push(
        EndpointSpec::put(
            "update_gitlab_submodule_reference",
            "/projects/{project_id}/repository/submodules/{submodule_path}",
            "Point a submodule at a new commit SHA on a branch.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("submodule_path", Str))
        .form(p("branch", Str).req())
        .form(p("commit_sha", Str).req())
        .form(p("commit_message", Str)),
    );
}
