use crate::gitlab::ParamKind::*;
use crate::gitlab::{p, EndpointSpec};

pub(crate) fn register(out: &mut Vec<EndpointSpec>) {
    out.push(
        EndpointSpec::get(
            "gitlab_list_branches",
            "/projects/{project_id}/repository/branches",
            "List repository branches, filtered by an RE2 regex or a search string.",
        )
        .path(p("project_id", IdOrPath))
        .query(p("regex", Str).alias("search")),
    );

    out.push(
        EndpointSpec::get(
            "gitlab_get_single_branch",
            "/projects/{project_id}/repository/branches/{branch}",
            "Fetch one branch with commit, protection, and merge metadata.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("branch", Str)),
    );

    out.push(
        EndpointSpec::post(
            "gitlab_create_branch",
            "/projects/{project_id}/repository/branches",
            "Create a branch from a source branch name or commit SHA.",
        )
        .path(p("project_id", IdOrPath))
        .query(p("branch_name", Str).req().rename("branch"))
        .query(p("ref_source", Str).req().rename("ref")),
    );

    out.push(
        EndpointSpec::delete(
            "gitlab_delete_branch",
            "/projects/{project_id}/repository/branches/{branch_name}",
            "Delete a branch; protected and default branches are refused by GitLab.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("branch_name", Str))
        .on_status(
            204,
            "success",
            "Branch '{branch_name}' deleted successfully (HTTP 204 No Content).",
        ),
    );
}
