use crate::gitlab::ParamKind::*;
use crate::gitlab::{p, EndpointSpec};

const NO_UPDATE_PARAMS: &str = "No update parameters provided.";
const UPDATE_SKIPPED: &str = "The API call was skipped because no optional parameters were set.";

pub(crate) fn register(out: &mut Vec<EndpointSpec>) {
    register_approvals(out);
    register_listing(out);
    register_lifecycle(out);
}

fn register_approvals(out: &mut Vec<EndpointSpec>) {
    out.push(
        EndpointSpec::post(
            "approve_gitlab_merge_request",
            "/projects/{project_id}/merge_requests/{merge_request_iid}/approve",
            "Approve a merge request as the authenticated user; an optional SHA guards against approving a moved head.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("merge_request_iid", Int))
        .body(p("approval_password", Str))
        .body(p("sha", Str)),
    );

    out.push(
        EndpointSpec::put(
            "reset_gitlab_merge_request_approvals",
            "/projects/{project_id}/merge_requests/{merge_request_iid}/reset_approvals",
            "Clear all approvals on a merge request (bot/service accounts only).",
        )
        .path(p("project_id", IdOrPath))
        .path(p("merge_request_iid", Int)),
    );

    out.push(
        EndpointSpec::get(
            "get_gitlab_approval_configuration",
            "/projects/{project_id}/approvals",
            "Fetch a project's merge request approval settings.",
        )
        .path(p("project_id", IdOrPath)),
    );

    out.push(
        EndpointSpec::post(
            "update_gitlab_approval_configuration",
            "/projects/{project_id}/approvals",
            "Change project-level approval settings such as push resets and self-approval.",
        )
        .path(p("project_id", IdOrPath))
        .body(p("approvals_before_merge", Int))
        .body(p("disable_overriding_approvers_per_merge_request", Bool))
        .body(p("merge_requests_author_approval", Bool))
        .body(p("merge_requests_disable_committers_approval", Bool))
        .body(p("require_password_to_approve", Bool))
        .body(p("require_reauthentication_to_approve", Bool))
        .body(p("reset_approvals_on_push", Bool))
        .body(p("selective_code_owner_removals", Bool))
        .require_update_field(NO_UPDATE_PARAMS, UPDATE_SKIPPED),
    );

    out.push(
        EndpointSpec::get(
            "list_gitlab_project_approval_rules",
            "/projects/{project_id}/approval_rules",
            "List the approval rules configured on a project.",
        )
        .path(p("project_id", IdOrPath))
        .query(p("per_page", Int))
        .query(p("page", Int)),
    );

    out.push(
        EndpointSpec::get(
            "get_gitlab_project_approval_rule",
            "/projects/{project_id}/approval_rules/{approval_rule_id}",
            "Fetch a single project approval rule by ID.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("approval_rule_id", Int)),
    );

    out.push(
        EndpointSpec::post(
            "create_gitlab_project_approval_rule",
            "/projects/{project_id}/approval_rules",
            "Create a project approval rule naming the eligible approvers and required count.",
        )
        .path(p("project_id", IdOrPath))
        .body(p("name", Str).req())
        .body(p("approvals_required", Int).req())
        .body(p("applies_to_all_protected_branches", Bool))
        .body(p("group_ids", IntList))
        .body(p("protected_branch_ids", IntList))
        .body(p("report_type", Str).one_of(&["license_scanning", "code_coverage"]))
        .body(p("rule_type", Str).one_of(&["any_approver", "regular"]))
        .body(p("user_ids", IntList))
        .body(p("usernames", StrList)),
    );

    out.push(
        EndpointSpec::put(
            "update_gitlab_project_approval_rule",
            "/projects/{project_id}/approval_rules/{approval_rule_id}",
            "Rewrite a project approval rule; approver lists not supplied are cleared by GitLab.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("approval_rule_id", Int))
        .body(p("name", Str))
        .body(p("approvals_required", Int))
        .body(p("applies_to_all_protected_branches", Bool))
        .body(p("group_ids", IntList))
        .body(p("protected_branch_ids", IntList))
        .body(p("remove_hidden_groups", Bool))
        .body(p("user_ids", IntList))
        .body(p("usernames", StrList))
        .require_update_field(NO_UPDATE_PARAMS, UPDATE_SKIPPED),
    );

    out.push(
        EndpointSpec::delete(
            "delete_gitlab_project_approval_rule",
            "/projects/{project_id}/approval_rules/{approval_rule_id}",
            "Delete a project approval rule.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("approval_rule_id", Int))
        .on_status(
            204,
            "success",
            "Successfully deleted approval rule {approval_rule_id}.",
        ),
    );

    out.push(
        EndpointSpec::get(
            "get_gitlab_merge_request_approval_state",
            "/projects/{project_id}/merge_requests/{merge_request_iid}/approvals",
            "Summarize a merge request's approval status: required, remaining, and given approvals.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("merge_request_iid", Int)),
    );

    out.push(
        EndpointSpec::get(
            "get_gitlab_merge_request_approval_details",
            "/projects/{project_id}/merge_requests/{merge_request_iid}/approval_state",
            "Fetch the rule-by-rule approval state of a merge request.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("merge_request_iid", Int)),
    );

    out.push(
        EndpointSpec::get(
            "list_gitlab_merge_request_approval_rules",
            "/projects/{project_id}/merge_requests/{merge_request_iid}/approval_rules",
            "List the approval rules that apply to one merge request.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("merge_request_iid", Int))
        .query(p("per_page", Int))
        .query(p("page", Int)),
    );

    out.push(
        EndpointSpec::get(
            "get_gitlab_merge_request_approval_rule",
            "/projects/{project_id}/merge_requests/{merge_request_iid}/approval_rules/{approval_rule_id}",
            "Fetch a single merge-request-scoped approval rule by ID.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("merge_request_iid", Int))
        .path(p("approval_rule_id", Int)),
    );

    out.push(
        EndpointSpec::post(
            "create_gitlab_merge_request_approval_rule",
            "/projects/{project_id}/merge_requests/{merge_request_iid}/approval_rules",
            "Create an approval rule scoped to one merge request, optionally copied from a project rule.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("merge_request_iid", Int))
        .body(p("name", Str).req())
        .body(p("approvals_required", Int).req())
        .body(p("approval_project_rule_id", Int))
        .body(p("group_ids", IntList))
        .body(p("user_ids", IntList))
        .body(p("usernames", StrList)),
    );

    out.push(
        EndpointSpec::put(
            "update_gitlab_merge_request_approval_rule",
            "/projects/{project_id}/merge_requests/{merge_request_iid}/approval_rules/{approval_rule_id}",
            "Rewrite a merge-request-scoped approval rule; omitted approver lists are cleared.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("merge_request_iid", Int))
        .path(p("approval_rule_id", Int))
        .body(p("name", Str))
        .body(p("approvals_required", Int))
        .body(p("group_ids", IntList))
        .body(p("remove_hidden_groups", Bool))
        .body(p("user_ids", IntList))
        .body(p("usernames", StrList))
        .require_update_field(NO_UPDATE_PARAMS, UPDATE_SKIPPED),
    );

    out.push(
        EndpointSpec::delete(
            "delete_gitlab_merge_request_approval_rule",
            "/projects/{project_id}/merge_requests/{merge_request_iid}/approval_rules/{approval_rule_id}",
            "Delete a merge-request-scoped approval rule.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("merge_request_iid", Int))
        .path(p("approval_rule_id", Int))
        .on_status(
            204,
            "success",
            "Successfully deleted approval rule {approval_rule_id}.",
        ),
    );

    out.push(
        EndpointSpec::get(
            "list_gitlab_group_approval_rules",
            "/groups/{group_id}/approval_rules",
            "List the approval rules configured on a group (group admins only).",
        )
        .path(p("group_id", IdOrPath))
        .query(p("per_page", Int))
        .query(p("page", Int)),
    );

    out.push(
        EndpointSpec::post(
            "create_gitlab_group_approval_rule",
            "/groups/{group_id}/approval_rules",
            "Create a group-level approval rule applied to all projects in the group.",
        )
        .path(p("group_id", IdOrPath))
        .body(p("name", Str).req())
        .body(p("approvals_required", Int).req())
        .body(p("group_ids", IntList))
        .body(p("rule_type", Str).one_of(&["any_approver", "regular"]))
        .body(p("user_ids", IntList)),
    );

    out.push(
        EndpointSpec::put(
            "update_gitlab_group_approval_rule",
            "/groups/{group_id}/approval_rules/{approval_rule_id}",
            "Update a group-level approval rule's name, count, or approvers.",
        )
        .path(p("group_id", IdOrPath))
        .path(p("approval_rule_id", Int))
        .body(p("name", Str))
        .body(p("approvals_required", Int))
        .body(p("group_ids", IntList))
        .body(p("user_ids", IntList))
        .require_update_field(NO_UPDATE_PARAMS, UPDATE_SKIPPED),
    );
}

fn register_listing(out: &mut Vec<EndpointSpec>) {
    out.push(
        EndpointSpec::get(
            "list_gitlab_merge_requests",
            "/merge_requests",
            "List merge requests across all reachable projects with the full filter set.",
        )
        .query(p("state", Str).one_of(&["opened", "closed", "locked", "merged", "all"]))
        .query(p("scope", Str).one_of(&["created_by_me", "assigned_to_me", "reviews_for_me", "all"]))
        .query(p("labels", Str))
        .query(p("milestone", Str))
        .query(p("author_id", Int))
        .query(p("author_username", Str))
        .query(p("assignee_id", IdOrPath))
        .query(p("reviewer_id", IdOrPath))
        .query(p("reviewer_username", Str))
        .query(p("approved_by_ids", IntList).bracket())
        .query(p("approver_ids", IntList).bracket())
        .query(p("merge_user_id", Int))
        .query(p("merge_user_username", Str))
        .query(p("my_reaction_emoji", Str))
        .query(p("source_branch", Str))
        .query(p("target_branch", Str))
        .query(p("search", Str))
        .query(p("in_scope", Str).rename("in"))
        .query(p("order_by", Str))
        .query(p("sort", Str).one_of(&["asc", "desc"]))
        .query(p("created_after", Str))
        .query(p("created_before", Str))
        .query(p("updated_after", Str))
        .query(p("updated_before", Str))
        .query(p("deployed_after", Str))
        .query(p("deployed_before", Str))
        .query(p("environment", Str))
        .query(p("view", Str))
        .query(p("render_html", Bool))
        .query(p("with_labels_details", Bool))
        .query(p("with_merge_status_recheck", Bool))
        .query(p("wip", Str).one_of(&["yes", "no"]))
        .query(p("not_params", Map).rename("not"))
        .query(p("per_page", Int))
        .query(p("page", Int)),
    );

    out.push(
        EndpointSpec::get(
            "list_gitlab_project_merge_requests",
            "/projects/{project_id}/merge_requests",
            "List one project's merge requests, filterable down to specific IIDs.",
        )
        .path(p("project_id", IdOrPath))
        .query(p("state", Str).one_of(&["opened", "closed", "locked", "merged", "all"]))
        .query(p("scope", Str).one_of(&["created_by_me", "assigned_to_me", "all"]))
        .query(p("iids", IntList).bracket())
        .query(p("labels", Str))
        .query(p("milestone", Str))
        .query(p("author_id", Int))
        .query(p("author_username", Str))
        .query(p("assignee_id", IdOrPath))
        .query(p("reviewer_id", IdOrPath))
        .query(p("reviewer_username", Str))
        .query(p("approved_by_ids", IntList).bracket())
        .query(p("approver_ids", IntList).bracket())
        .query(p("merge_user_id", Int))
        .query(p("merge_user_username", Str))
        .query(p("my_reaction_emoji", Str))
        .query(p("source_branch", Str))
        .query(p("target_branch", Str))
        .query(p("search", Str))
        .query(p("order_by", Str))
        .query(p("sort", Str).one_of(&["asc", "desc"]))
        .query(p("created_after", Str))
        .query(p("created_before", Str))
        .query(p("updated_after", Str))
        .query(p("updated_before", Str))
        .query(p("environment", Str))
        .query(p("view", Str))
        .query(p("wip", Str).one_of(&["yes", "no"]))
        .query(p("with_labels_details", Bool))
        .query(p("with_merge_status_recheck", Bool))
        .query(p("not_params", Map).rename("not"))
        .query(p("per_page", Int))
        .query(p("page", Int)),
    );

    out.push(
        EndpointSpec::get(
            "list_gitlab_group_merge_requests",
            "/groups/{group_id}/merge_requests",
            "List merge requests across every project in a group.",
        )
        .path(p("group_id", IdOrPath))
        .query(p("state", Str).one_of(&["opened", "closed", "locked", "merged", "all"]))
        .query(p("scope", Str).one_of(&["created_by_me", "assigned_to_me", "all"]))
        .query(p("labels", Str))
        .query(p("milestone", Str))
        .query(p("author_id", Int))
        .query(p("author_username", Str))
        .query(p("assignee_id", IdOrPath))
        .query(p("reviewer_id", IdOrPath))
        .query(p("reviewer_username", Str))
        .query(p("approved_by_ids", IntList).bracket())
        .query(p("approved_by_usernames", StrList).bracket())
        .query(p("approver_ids", IntList).bracket())
        .query(p("merge_user_id", Int))
        .query(p("merge_user_username", Str))
        .query(p("my_reaction_emoji", Str))
        .query(p("source_branch", Str))
        .query(p("target_branch", Str))
        .query(p("search", Str))
        .query(p("order_by", Str))
        .query(p("sort", Str).one_of(&["asc", "desc"]))
        .query(p("created_after", Str))
        .query(p("created_before", Str))
        .query(p("updated_after", Str))
        .query(p("updated_before", Str))
        .query(p("non_archived", Bool))
        .query(p("view", Str))
        .query(p("with_labels_details", Bool))
        .query(p("with_merge_status_recheck", Bool))
        .query(p("not_params", Map).rename("not"))
        .query(p("per_page", Int))
        .query(p("page", Int)),
    );

    out.push(
        EndpointSpec::get(
            "get_gitlab_single_merge_request",
            "/projects/{project_id}/merge_requests/{merge_request_iid}",
            "Fetch one merge request by IID with optional divergence and rebase details.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("merge_request_iid", Int))
        .query(p("include_diverged_commits_count", Bool))
        .query(p("include_rebase_in_progress", Bool))
        .query(p("render_html", Bool)),
    );

    out.push(
        EndpointSpec::get(
            "list_gitlab_merge_request_participants",
            "/projects/{project_id}/merge_requests/{merge_request_iid}/participants",
            "List every user who has participated in a merge request.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("merge_request_iid", Int)),
    );

    out.push(
        EndpointSpec::get(
            "list_gitlab_merge_request_reviewers",
            "/projects/{project_id}/merge_requests/{merge_request_iid}/reviewers",
            "List the assigned reviewers of a merge request and their review state.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("merge_request_iid", Int)),
    );

    out.push(
        EndpointSpec::get(
            "list_gitlab_merge_request_commits",
            "/projects/{project_id}/merge_requests/{merge_request_iid}/commits",
            "List the commits contained in a merge request.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("merge_request_iid", Int)),
    );

    out.push(
        EndpointSpec::get(
            "list_gitlab_merge_request_dependencies",
            "/projects/{project_id}/merge_requests/{merge_request_iid}/blocks",
            "List the merge requests that must merge before this one can.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("merge_request_iid", Int)),
    );

    out.push(
        EndpointSpec::delete(
            "delete_gitlab_merge_request_dependency",
            "/projects/{project_id}/merge_requests/{merge_request_iid}/blocks/{block_id}",
            "Remove a block relationship from a merge request.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("merge_request_iid", Int))
        .path(p("block_id", Int))
        .on_status(
            204,
            "success",
            "Successfully deleted block {block_id} for merge request !{merge_request_iid}.",
        ),
    );

    out.push(
        EndpointSpec::post(
            "create_gitlab_merge_request_dependency",
            "/projects/{project_id}/merge_requests/{merge_request_iid}/blocks",
            "Make another merge request block this one from merging.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("merge_request_iid", Int))
        .query(p("blocking_merge_request_id", Int).req()),
    );

    out.push(
        EndpointSpec::get(
            "list_gitlab_merge_request_blockees",
            "/projects/{project_id}/merge_requests/{merge_request_iid}/blockees",
            "List the merge requests blocked by this one.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("merge_request_iid", Int)),
    );

    out.push(
        EndpointSpec::get(
            "list_gitlab_merge_request_diffs",
            "/projects/{project_id}/merge_requests/{merge_request_iid}/diffs",
            "List the per-file diffs of a merge request, optionally in unified format.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("merge_request_iid", Int))
        .query(p("page", Int))
        .query(p("per_page", Int))
        .query(p("unidiff", Bool)),
    );

    out.push(
        EndpointSpec::get(
            "get_gitlab_merge_request_raw_diffs",
            "/projects/{project_id}/merge_requests/{merge_request_iid}/raw_diffs",
            "Fetch a merge request's diff as one raw unified-diff string.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("merge_request_iid", Int))
        .text_response(),
    );

    out.push(
        EndpointSpec::get(
            "list_gitlab_merge_request_pipelines",
            "/projects/{project_id}/merge_requests/{merge_request_iid}/pipelines",
            "List the CI pipelines that ran for a merge request.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("merge_request_iid", Int))
        .query(p("page", Int))
        .query(p("per_page", Int)),
    );

    out.push(
        EndpointSpec::post(
            "create_gitlab_merge_request_pipeline",
            "/projects/{project_id}/merge_requests/{merge_request_iid}/pipelines",
            "Trigger a new detached or merged-results pipeline for a merge request.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("merge_request_iid", Int)),
    );
}

fn register_lifecycle(out: &mut Vec<EndpointSpec>) {
    out.push(
        EndpointSpec::post(
            "create_gitlab_merge_request",
            "/projects/{project_id}/merge_requests",
            "Open a merge request from a source branch to a target branch.",
        )
        .path(p("project_id", IdOrPath))
        .body(p("source_branch", Str).req())
        .body(p("target_branch", Str).req())
        .body(p("title", Str).req())
        .body(p("description", Str))
        .body(p("target_project_id", Int))
        .body(p("assignee_ids", IntList))
        .body(p("reviewer_ids", IntList))
        .body(p("labels", Str))
        .body(p("milestone_id", Int))
        .body(p("remove_source_branch", Bool))
        .body(p("squash", Bool))
        .body(p("allow_collaboration", Bool))
        .body(p("merge_after", Str))
        .body(p("approvals_before_merge", Int))
        .body(p("assignee_id", Int))
        .body(p("allow_maintainer_to_push", Bool)),
    );

    out.push(
        EndpointSpec::put(
            "update_gitlab_merge_request",
            "/projects/{project_id}/merge_requests/{merge_request_iid}",
            "Update a merge request's metadata, labels, reviewers, or open/closed state.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("merge_request_iid", Int))
        .body(p("title", Str))
        .body(p("description", Str))
        .body(p("target_branch", Str))
        .body(p("state_event", Str).one_of(&["close", "reopen"]))
        .body(p("assignee_ids", IntList))
        .body(p("reviewer_ids", IntList))
        .body(p("add_labels", Str))
        .body(p("remove_labels", Str))
        .body(p("labels", Str))
        .body(p("milestone_id", Int))
        .body(p("remove_source_branch", Bool))
        .body(p("squash", Bool))
        .body(p("discussion_locked", Bool))
        .body(p("allow_collaboration", Bool))
        .body(p("merge_after", Str))
        .body(p("assignee_id", Int))
        .body(p("allow_maintainer_to_push", Bool))
        .require_update_field(
            "Update failed: Must provide at least one field to update (e.g., title, description, state_event).",
            UPDATE_SKIPPED,
        ),
    );

    out.push(
        EndpointSpec::delete(
            "delete_gitlab_merge_request",
            "/projects/{project_id}/merge_requests/{merge_request_iid}",
            "Delete a merge request outright (administrators and owners only).",
        )
        .path(p("project_id", IdOrPath))
        .path(p("merge_request_iid", Int))
        .on_status(
            204,
            "success",
            "Merge request !{merge_request_iid} deleted successfully.",
        ),
    );

    out.push(
        EndpointSpec::put(
            "merge_gitlab_merge_request",
            "/projects/{project_id}/merge_requests/{merge_request_iid}/merge",
            "Accept a merge request, optionally squashing or deferring to a green pipeline.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("merge_request_iid", Int))
        .body(p("auto_merge", Bool))
        .body(p("merge_commit_message", Str))
        .body(p("sha", Str))
        .body(p("should_remove_source_branch", Bool))
        .body(p("squash_commit_message", Str))
        .body(p("squash", Bool))
        .body(p("merge_when_pipeline_succeeds", Bool)),
    );

    out.push(
        EndpointSpec::get(
            "get_gitlab_merge_request_merge_ref",
            "/projects/{project_id}/merge_requests/{merge_request_iid}/merge_ref",
            "Refresh and return the HEAD commit of the merge request's merge ref.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("merge_request_iid", Int)),
    );

    out.push(
        EndpointSpec::post(
            "cancel_gitlab_merge_when_pipeline_succeeds",
            "/projects/{project_id}/merge_requests/{merge_request_iid}/cancel_merge_when_pipeline_succeeds",
            "Cancel a pending auto-merge on a merge request.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("merge_request_iid", Int)),
    );

    out.push(
        EndpointSpec::put(
            "rebase_gitlab_merge_request",
            "/projects/{project_id}/merge_requests/{merge_request_iid}/rebase",
            "Enqueue a rebase of the source branch onto the target branch.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("merge_request_iid", Int))
        .body(p("skip_ci", Bool)),
    );

    out.push(
        EndpointSpec::get(
            "list_gitlab_issues_that_close_on_merge",
            "/projects/{project_id}/merge_requests/{merge_request_iid}/closes_issues",
            "List the issues that merging this merge request would close.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("merge_request_iid", Int)),
    );

    out.push(
        EndpointSpec::get(
            "list_gitlab_merge_request_related_issues",
            "/projects/{project_id}/merge_requests/{merge_request_iid}/related_issues",
            "List the issues referenced from a merge request's title, description, or commits.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("merge_request_iid", Int)),
    );

    out.push(
        EndpointSpec::post(
            "subscribe_to_gitlab_merge_request",
            "/projects/{project_id}/merge_requests/{merge_request_iid}/subscribe",
            "Subscribe the authenticated user to a merge request's notifications.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("merge_request_iid", Int))
        .on_status(
            304,
            "not_modified",
            "User is already subscribed to this merge request.",
        ),
    );

    out.push(
        EndpointSpec::post(
            "unsubscribe_from_gitlab_merge_request",
            "/projects/{project_id}/merge_requests/{merge_request_iid}/unsubscribe",
            "Unsubscribe the authenticated user from a merge request's notifications.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("merge_request_iid", Int))
        .on_status(
            304,
            "not_modified",
            "User is already unsubscribed from this merge request.",
        ),
    );

    out.push(
        EndpointSpec::post(
            "create_gitlab_merge_request_todo",
            "/projects/{project_id}/merge_requests/{merge_request_iid}/todo",
            "Create a to-do item for the authenticated user on a merge request.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("merge_request_iid", Int))
        .on_status(304, "not_modified", "To-do item already exists."),
    );

    out.push(
        EndpointSpec::get(
            "get_gitlab_merge_request_diff_versions",
            "/projects/{project_id}/merge_requests/{merge_request_iid}/versions",
            "List the diff versions recorded for a merge request.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("merge_request_iid", Int)),
    );

    out.push(
        EndpointSpec::get(
            "get_gitlab_single_merge_request_diff_version",
            "/projects/{project_id}/merge_requests/{merge_request_iid}/versions/{version_id}",
            "Fetch one diff version of a merge request with its commits and file changes.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("merge_request_iid", Int))
        .path(p("version_id", Int))
        .query(p("unidiff", Bool)),
    );

    out.push(
        EndpointSpec::post(
            "set_gitlab_merge_request_time_estimate",
            "/projects/{project_id}/merge_requests/{merge_request_iid}/time_estimate",
            "Set the time estimate on a merge request from a human duration such as '3h30m'.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("merge_request_iid", Int))
        .query(p("duration", Str).req()),
    );

    out.push(
        EndpointSpec::post(
            "reset_gitlab_merge_request_time_estimate",
            "/projects/{project_id}/merge_requests/{merge_request_iid}/reset_time_estimate",
            "Reset a merge request's time estimate to zero.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("merge_request_iid", Int)),
    );

    out.push(
        EndpointSpec::post(
            "add_gitlab_merge_request_spent_time",
            "/projects/{project_id}/merge_requests/{merge_request_iid}/add_spent_time",
            "Add spent time to a merge request, optionally with a summary note.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("merge_request_iid", Int))
        .query(p("duration", Str).req())
        .query(p("summary", Str)),
    );

    out.push(
        EndpointSpec::post(
            "reset_gitlab_merge_request_spent_time",
            "/projects/{project_id}/merge_requests/{merge_request_iid}/reset_spent_time",
            "Reset a merge request's total spent time to zero.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("merge_request_iid", Int)),
    );

    out.push(
        EndpointSpec::get(
            "get_gitlab_merge_request_time_stats",
            "/projects/{project_id}/merge_requests/{merge_request_iid}/time_stats",
            "Fetch the time tracking totals for a merge request.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("merge_request_iid", Int)),
    );
}
