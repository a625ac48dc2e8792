use crate::gitlab::ParamKind::*;
use crate::gitlab::{p, EndpointSpec};

const GLOBAL_SCOPES: &[&str] = &["projects", "issues", "merge_requests", "blobs", "commits"];
const PROJECT_SCOPES: &[&str] = &[
    "blobs",
    "commits",
    "issues",
    "merge_requests",
    "milestones",
    "notes",
    "users",
    "wiki_blobs",
];

pub(crate) fn register(out: &mut Vec<EndpointSpec>) {
    out.push(
        EndpointSpec::get(
            "gitlab_global_search",
            "/search",
            "Search the whole instance within one scope (projects, issues, merge requests, blobs, or commits).",
        )
        .query(p("scope", Str).req().one_of(GLOBAL_SCOPES))
        .query(p("search_query", Str).req().rename("search"))
        .query(p("confidential", Bool))
        .query(p("order_by", Str))
        .query(p("sort", Str).one_of(&["asc", "desc"]))
        .query(p("state", Str)),
    );

    out.push(
        EndpointSpec::get(
            "gitlab_search_within_group",
            "/groups/{group_id}/search",
            "Search within one group's projects, issues, merge requests, blobs, or commits.",
        )
        .path(p("group_id", IdOrPath))
        .query(p("scope", Str).req().one_of(GLOBAL_SCOPES))
        .query(p("search_query", Str).req().rename("search"))
        .query(p("confidential", Bool))
        .query(p("order_by", Str))
        .query(p("sort", Str).one_of(&["asc", "desc"]))
        .query(p("state", Str)),
    );

    out.push(
        EndpointSpec::get(
            "gitlab_search_within_project",
            "/projects/{project_id}/search",
            "Search within one project; blob, commit, and wiki scopes accept a ref.",
        )
        .path(p("project_id", IdOrPath))
        .query(p("scope", Str).req().one_of(PROJECT_SCOPES))
        .query(p("search_query", Str).req().rename("search"))
        .query(p("confidential", Bool))
        .query(p("ref", Str))
        .query(p("order_by", Str))
        .query(p("sort", Str).one_of(&["asc", "desc"]))
        .query(p("state", Str)),
    );
}
