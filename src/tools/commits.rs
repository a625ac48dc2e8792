use crate::gitlab::ParamKind::*;
use crate::gitlab::{p, EndpointSpec};

pub(crate) fn register(out: &mut Vec<EndpointSpec>) {
    out.push(
        EndpointSpec::get(
            "list_gitlab_repository_commits",
            "/projects/{project_id}/repository/commits",
            "List repository commits filtered by ref, date range, author, or file path.",
        )
        .path(p("project_id", IdOrPath))
        .query(p("all_commits", Bool).rename("all"))
        .query(p("author", Str))
        .query(p("first_parent", Bool))
        .query(p("order", Str).one_of(&["default", "topo"]))
        .query(p("path", Str))
        .query(p("ref_name", Str))
        .query(p("since", Str))
        .query(p("trailers", Bool))
        .query(p("until", Str))
        .query(p("with_stats", Bool))
        .query(p("per_page", Int))
        .query(p("page", Int)),
    );

    out.push(
        EndpointSpec::post(
            "create_gitlab_commit",
            "/projects/{project_id}/repository/commits",
            "Create one commit from a batch of file actions (create, update, delete, move, chmod).",
        )
        .path(p("project_id", IdOrPath))
        .body(p("branch", Str).req())
        .body(p("commit_message", Str).req())
        .body(p("actions", ObjList).req())
        .body(p("author_email", Str))
        .body(p("author_name", Str))
        .body(p("force", Bool))
        .body(p("start_branch", Str))
        .body(p("start_project", IdOrPath))
        .body(p("start_sha", Str))
        .body(p("stats", Bool)),
    );

    out.push(
        EndpointSpec::get(
            "get_gitlab_single_commit",
            "/projects/{project_id}/repository/commits/{sha}",
            "Fetch a single commit by SHA, branch, or tag name.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("sha", Str))
        .query(p("stats", Bool)),
    );

    out.push(
        EndpointSpec::get(
            "get_gitlab_commit_references",
            "/projects/{project_id}/repository/commits/{sha}/refs",
            "List the branches and tags a commit is pushed to.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("sha", Str))
        .query(p("type", Str).one_of(&["branch", "tag", "all"]))
        .query(p("per_page", Int))
        .query(p("page", Int)),
    );

    out.push(
        EndpointSpec::get(
            "get_gitlab_commit_sequence",
            "/projects/{project_id}/repository/commits/{sha}/sequence",
            "Count the commits reachable from a SHA, like git rev-list --count.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("sha", Str))
        .query(p("first_parent", Bool)),
    );

    out.push(
        EndpointSpec::post(
            "cherry_pick_gitlab_commit",
            "/projects/{project_id}/repository/commits/{sha}/cherry_pick",
            "Cherry-pick a commit onto a branch; dry_run checks for conflicts first.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("sha", Str))
        .body(p("branch", Str).req())
        .body(p("dry_run", Bool))
        .body(p("message", Str)),
    );

    out.push(
        EndpointSpec::post(
            "revert_gitlab_commit",
            "/projects/{project_id}/repository/commits/{sha}/revert",
            "Revert a commit in a branch; dry_run checks for conflicts first.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("sha", Str))
        .body(p("branch", Str).req())
        .body(p("dry_run", Bool)),
    );

    out.push(
        EndpointSpec::get(
            "get_gitlab_commit_diff",
            "/projects/{project_id}/repository/commits/{sha}/diff",
            "Fetch the per-file diff of a commit.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("sha", Str))
        .query(p("unidiff", Bool)),
    );

    out.push(
        EndpointSpec::get(
            "get_gitlab_commit_comments",
            "/projects/{project_id}/repository/commits/{sha}/comments",
            "List the comments on a commit.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("sha", Str)),
    );

    out.push(
        EndpointSpec::post(
            "post_gitlab_commit_comment",
            "/projects/{project_id}/repository/commits/{sha}/comments",
            "Add a comment to a commit, optionally anchored to a file line.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("sha", Str))
        .body(p("note", Str).req())
        .body(p("path", Str))
        .body(p("line", Int))
        .body(p("line_type", Str).one_of(&["new", "old"])),
    );

    out.push(
        EndpointSpec::get(
            "get_gitlab_commit_discussions",
            "/projects/{project_id}/repository/commits/{sha}/discussions",
            "List the discussion threads on a commit.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("sha", Str)),
    );

    out.push(
        EndpointSpec::get(
            "list_gitlab_commit_statuses",
            "/projects/{project_id}/repository/commits/{sha}/statuses",
            "List CI/CD statuses reported for a commit.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("sha", Str))
        .query(p("all", Bool))
        .query(p("name", Str))
        .query(p("order_by", Str).one_of(&["id", "pipeline_id"]))
        .query(p("pipeline_id", Int))
        .query(p("ref", Str))
        .query(p("sort", Str).one_of(&["asc", "desc"]))
        .query(p("stage", Str))
        .query(p("per_page", Int))
        .query(p("page", Int)),
    );

    out.push(
        EndpointSpec::post(
            "set_gitlab_commit_pipeline_status",
            "/projects/{project_id}/statuses/{sha}",
            "Report a pipeline status for a commit; 'name' wins over its 'context' alias.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("sha", Str))
        .body(
            p("state", Str)
                .req()
                .one_of(&["pending", "running", "success", "failed", "canceled", "skipped"]),
        )
        .body(p("coverage", Num))
        .body(p("description", Str))
        .body(p("name", Str).alias("context"))
        .body(p("pipeline_id", Int))
        .body(p("ref", Str))
        .body(p("target_url", Str)),
    );

    out.push(
        EndpointSpec::get(
            "list_gitlab_commit_merge_requests",
            "/projects/{project_id}/repository/commits/{sha}/merge_requests",
            "List merge requests that introduced a commit.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("sha", Str))
        .query(p("state", Str)),
    );

    out.push(
        EndpointSpec::get(
            "get_gitlab_commit_signature",
            "/projects/{project_id}/repository/commits/{sha}/signature",
            "Fetch the GPG/X.509 signature of a commit, when signed.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("sha", Str))
        .error_summary(
            404,
            "Commit signature not found (Commit is likely unsigned).",
        ),
    );
}
