use serde_json::json;

use crate::gitlab::ParamKind::*;
use crate::gitlab::{p, EndpointSpec};

pub(crate) fn register(out: &mut Vec<EndpointSpec>) {
    out.push(
        EndpointSpec::get(
            "list_issues",
            "/issues",
            "List all issues visible to the authenticated user, across projects.",
        )
        .query(p("assignee_id", Int))
        .query(p("assignee_username", Str))
        .query(p("author_id", Int))
        .query(p("author_username", Str))
        .query(p("confidential", Bool))
        .query(p("created_after", Str))
        .query(p("created_before", Str))
        .query(p("due_date", Str))
        .query(p("iids", IntList).bracket())
        .query(p("in_field", Str).rename("in").one_of(&["title", "description", "title,description"]))
        .query(p("issue_type", Str).one_of(&["issue", "incident", "test_case", "task"]))
        .query(p("labels", StrList).comma())
        .query(p("milestone", Str))
        .query(p("my_reaction_emoji", Str))
        .query(p("order_by", Str))
        .query(p("scope", Str).one_of(&["created_by_me", "assigned_to_me", "all"]))
        .query(p("search", Str))
        .query(p("sort", Str).one_of(&["asc", "desc"]))
        .query(p("state", Str).one_of(&["opened", "closed"]))
        .query(p("updated_after", Str))
        .query(p("updated_before", Str))
        .query(p("with_labels_details", Bool)),
    );

    out.push(
        EndpointSpec::get(
            "list_project_issues",
            "/projects/{project_id}/issues",
            "List a project's issues with the same filters as the global listing.",
        )
        .path(p("project_id", IdOrPath))
        .query(p("assignee_id", Int))
        .query(p("assignee_username", StrList).bracket())
        .query(p("author_id", Int))
        .query(p("author_username", Str))
        .query(p("confidential", Bool))
        .query(p("created_after", Str))
        .query(p("created_before", Str))
        .query(p("due_date", Str))
        .query(p("iids", IntList).bracket())
        .query(p("issue_type", Str).one_of(&["issue", "incident", "test_case", "task"]))
        .query(p("labels", StrList).comma())
        .query(p("milestone", Str))
        .query(p("my_reaction_emoji", Str))
        .query(p("order_by", Str))
        .query(p("scope", Str).one_of(&["created_by_me", "assigned_to_me", "all"]))
        .query(p("search", Str))
        .query(p("sort", Str).one_of(&["asc", "desc"]))
        .query(p("state", Str).one_of(&["opened", "closed"]))
        .query(p("updated_after", Str))
        .query(p("updated_before", Str))
        .query(p("with_labels_details", Bool))
        .query(p("cursor", Str)),
    );

    out.push(
        EndpointSpec::get(
            "get_single_issue",
            "/issues/{issue_id}",
            "Fetch one issue by its global ID (administrators only).",
        )
        .path(p("issue_id", Int)),
    );

    out.push(
        EndpointSpec::post(
            "create_new_issue",
            "/projects/{project_id}/issues",
            "Open a new issue, incident, test case, or task in a project.",
        )
        .path(p("project_id", IdOrPath))
        .body(p("title", Str).req())
        .body(p("assignee_id", Int))
        .body(p("assignee_ids", IntList))
        .body(p("confidential", Bool))
        .body(p("created_at", Str))
        .body(p("description", Str))
        .body(p("discussion_to_resolve", Str))
        .body(p("due_date", Str))
        .body(p("epic_id", Int))
        .body(p("iid", IdOrPath))
        .body(p("issue_type", Str).one_of(&["issue", "incident", "test_case", "task"]))
        .body(p("labels", StrList).comma())
        .body(p("merge_request_to_resolve_discussions_of", Int))
        .body(p("milestone_id", Int))
        .body(p("weight", Int)),
    );

    out.push(
        EndpointSpec::put(
            "edit_issue",
            "/projects/{project_id}/issues/{issue_iid}",
            "Update, close, or reopen an issue; label fields take comma-separated strings.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("issue_iid", Int))
        .body(p("add_labels", Str))
        .body(p("assignee_ids", IntList))
        .body(p("confidential", Bool))
        .body(p("description", Str))
        .body(p("discussion_locked", Bool))
        .body(p("due_date", Str))
        .body(p("epic_id", Int))
        .body(p("issue_type", Str).one_of(&["issue", "incident", "test_case", "task"]))
        .body(p("labels", Str))
        .body(p("milestone_id", Int))
        .body(p("remove_labels", Str))
        .body(p("state_event", Str).one_of(&["close", "reopen"]))
        .body(p("title", Str))
        .body(p("updated_at", Str))
        .body(p("weight", Int))
        .require_update_field(
            "Validation Error",
            "At least one parameter to update is required.",
        ),
    );

    out.push(
        EndpointSpec::delete(
            "delete_issue",
            "/projects/{project_id}/issues/{issue_iid}",
            "Delete an issue (administrators and project owners only).",
        )
        .path(p("project_id", IdOrPath))
        .path(p("issue_iid", Int))
        .on_status(204, "success", "Issue {issue_iid} deleted successfully."),
    );

    out.push(
        EndpointSpec::put(
            "reorder_issue",
            "/projects/{project_id}/issues/{issue_iid}/reorder",
            "Move an issue within a project's manual sort order.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("issue_iid", Int))
        .query(p("move_after_id", Int))
        .query(p("move_before_id", Int))
        .require_one_of(
            &["move_after_id", "move_before_id"],
            "Validation Error",
            "At least one of 'move_after_id' or 'move_before_id' is required.",
        ),
    );

    out.push(
        EndpointSpec::post(
            "move_issue",
            "/projects/{project_id}/issues/{issue_iid}/move",
            "Move an issue to another project.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("issue_iid", Int))
        .form(p("to_project_id", Int).req()),
    );

    out.push(
        EndpointSpec::post(
            "clone_issue",
            "/projects/{project_id}/issues/{issue_iid}/clone",
            "Clone an issue to another project, optionally with its notes.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("issue_iid", Int))
        .query(p("to_project_id", Int).req())
        .query(p("with_notes", Bool)),
    );

    out.push(
        EndpointSpec::post(
            "subscribe_to_issue",
            "/projects/{project_id}/issues/{issue_iid}/subscribe",
            "Subscribe the authenticated user to an issue's notifications.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("issue_iid", Int))
        .on_status(
            304,
            "not_modified",
            "Already subscribed to issue {issue_iid}.",
        ),
    );

    out.push(
        EndpointSpec::post(
            "unsubscribe_from_issue",
            "/projects/{project_id}/issues/{issue_iid}/unsubscribe",
            "Unsubscribe the authenticated user from an issue's notifications.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("issue_iid", Int))
        .on_status(
            304,
            "not_modified",
            "You were not subscribed to issue {issue_iid}.",
        ),
    );

    out.push(
        EndpointSpec::post(
            "create_todo_on_issue",
            "/projects/{project_id}/issues/{issue_iid}/todo",
            "Add an issue to the authenticated user's to-do list.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("issue_iid", Int))
        .on_status(
            304,
            "not_modified",
            "A to-do item already exists for you on issue {issue_iid}.",
        ),
    );

    // Promotion is a quick action delivered through the notes endpoint.
    out.push(
        EndpointSpec::post(
            "promote_issue_to_epic",
            "/projects/{project_id}/issues/{issue_iid}/notes",
            "Promote an issue to an epic, optionally with an accompanying comment.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("issue_iid", Int))
        .query(
            p("comment", Str)
                .rename("body")
                .wrap("{value}\n\n/promote")
                .preset(json!("/promote")),
        ),
    );

    out.push(
        EndpointSpec::post(
            "set_issue_time_estimate",
            "/projects/{project_id}/issues/{issue_iid}/time_estimate",
            "Set the estimated working time on an issue, e.g. '3h30m'.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("issue_iid", Int))
        .query(p("duration", Str).req()),
    );

    out.push(
        EndpointSpec::post(
            "reset_issue_time_estimate",
            "/projects/{project_id}/issues/{issue_iid}/reset_time_estimate",
            "Reset the time estimate on an issue to zero.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("issue_iid", Int)),
    );

    out.push(
        EndpointSpec::post(
            "add_spent_time_for_issue",
            "/projects/{project_id}/issues/{issue_iid}/add_spent_time",
            "Log spent time on an issue.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("issue_iid", Int))
        .query(p("duration", Str).req())
        .query(p("summary", Str)),
    );

    out.push(
        EndpointSpec::post(
            "reset_spent_time_for_issue",
            "/projects/{project_id}/issues/{issue_iid}/reset_spent_time",
            "Reset the total spent time on an issue to zero.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("issue_iid", Int)),
    );

    out.push(
        EndpointSpec::get(
            "get_issue_time_tracking_stats",
            "/projects/{project_id}/issues/{issue_iid}/time_stats",
            "Fetch estimated and spent time for an issue.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("issue_iid", Int)),
    );

    out.push(
        EndpointSpec::get(
            "list_related_merge_requests_for_issue",
            "/projects/{project_id}/issues/{issue_iid}/related_merge_requests",
            "List merge requests related to an issue.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("issue_iid", Int)),
    );

    out.push(
        EndpointSpec::get(
            "list_merge_requests_closing_issue",
            "/projects/{project_id}/issues/{issue_iid}/closed_by",
            "List merge requests that close this issue when merged.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("issue_iid", Int)),
    );

    out.push(
        EndpointSpec::get(
            "list_issue_participants",
            "/projects/{project_id}/issues/{issue_iid}/participants",
            "List users participating in an issue.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("issue_iid", Int)),
    );

    out.push(
        EndpointSpec::get(
            "get_issue_user_agent_details",
            "/projects/{project_id}/issues/{issue_iid}/user_agent_detail",
            "Fetch the issue author's user agent and IP details (administrators only).",
        )
        .path(p("project_id", IdOrPath))
        .path(p("issue_iid", Int)),
    );

    out.push(
        EndpointSpec::get(
            "list_issue_state_events",
            "/projects/{project_id}/issues/{issue_iid}/resource_state_events",
            "List the state-change history of an issue.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("issue_iid", Int)),
    );

    out.push(
        EndpointSpec::post(
            "upload_incident_metric_image",
            "/projects/{project_id}/issues/{issue_iid}/metric_images",
            "Upload a metric image from local disk to an incident's Metrics tab.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("issue_iid", Int))
        .file(
            p("file_path", Str)
                .req()
                .rename("file")
                .file_basename()
                .missing("File not found at path: {file_path}"),
        )
        .form(p("url", Str))
        .form(p("url_text", Str)),
    );

    out.push(
        EndpointSpec::get(
            "list_incident_metric_images",
            "/projects/{project_id}/issues/{issue_iid}/metric_images",
            "List the metric images attached to an incident.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("issue_iid", Int)),
    );

    out.push(
        EndpointSpec::put(
            "update_incident_metric_image",
            "/projects/{project_id}/issues/{issue_iid}/metric_images/{image_id}",
            "Update the URL or description of an incident metric image.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("issue_iid", Int))
        .path(p("image_id", Int))
        .form(p("url", Str))
        .form(p("url_text", Str))
        .require_one_of(
            &["url", "url_text"],
            "Validation Error",
            "At least one of 'url' or 'url_text' is required to update.",
        ),
    );

    out.push(
        EndpointSpec::delete(
            "delete_incident_metric_image",
            "/projects/{project_id}/issues/{issue_iid}/metric_images/{image_id}",
            "Delete a metric image from an incident.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("issue_iid", Int))
        .path(p("image_id", Int))
        .on_status(
            204,
            "success",
            "Metric image {image_id} deleted successfully.",
        ),
    );
}
