use serde_json::json;

use crate::gitlab::ParamKind::*;
use crate::gitlab::{p, EndpointSpec};

const VISIBILITY: &[&str] = &["public", "internal", "private"];
const ACCESS_LEVELS: &[&str] = &["disabled", "private", "enabled", "public"];
const MERGE_METHODS: &[&str] = &["merge", "rebase_merge", "ff"];
const SQUASH_OPTIONS: &[&str] = &["never", "always", "default_on", "default_off"];
const DEPLOY_STRATEGIES: &[&str] = &["continuous", "manual", "timed_incremental"];
const GIT_STRATEGIES: &[&str] = &["fetch", "clone"];

pub(crate) fn register(out: &mut Vec<EndpointSpec>) {
    register_listing(out);
    register_lifecycle(out);
    register_settings(out);
}

fn register_listing(out: &mut Vec<EndpointSpec>) {
    out.push(
        EndpointSpec::get(
            "get_single_project",
            "/projects/{project_id}",
            "Fetch one project by ID or URL-encoded path, optionally with license and statistics.",
        )
        .path(p("project_id", IdOrPath))
        .query(p("license", Bool))
        .query(p("statistics", Bool))
        .query(p("with_custom_attributes", Bool)),
    );

    out.push(
        EndpointSpec::get(
            "list_projects",
            "/users/{user_id}/projects",
            "List the projects owned by a user, with the full set of project filters.",
        )
        .path(p("user_id", IdOrPath))
        .query(p("archived", Bool))
        .query(p("id_after", Int))
        .query(p("id_before", Int))
        .query(p("imported", Bool))
        .query(p("include_hidden", Bool))
        .query(p("include_pending_delete", Bool))
        .query(p("last_activity_after", Str))
        .query(p("last_activity_before", Str))
        .query(p("membership", Bool))
        .query(p("min_access_level", Int))
        .query(p("order_by", Str))
        .query(p("owned", Bool))
        .query(p("repository_checksum_failed", Bool))
        .query(p("repository_storage", Str))
        .query(p("search", Str))
        .query(p("search_namespaces", Bool))
        .query(p("simple", Bool))
        .query(p("starred", Bool))
        .query(p("statistics", Bool))
        .query(p("topic", Str))
        .query(p("topic_id", Int))
        .query(p("updated_after", Str))
        .query(p("updated_before", Str))
        .query(p("visibility", Str).one_of(VISIBILITY))
        .query(p("wiki_checksum_failed", Bool))
        .query(p("with_custom_attributes", Bool))
        .query(p("with_issues_enabled", Bool))
        .query(p("with_merge_requests_enabled", Bool))
        .query(p("with_programming_language", Str))
        .query(p("marked_for_deletion_on", Str))
        .query(p("active", Bool)),
    );

    out.push(
        EndpointSpec::get(
            "list_user_contributed_projects",
            "/users/{user_id}/contributed_projects",
            "List projects a user has contributed to within the past year.",
        )
        .path(p("user_id", IdOrPath))
        .query(p("order_by", Str))
        .query(p("simple", Bool))
        .query(p("sort", Str).one_of(&["asc", "desc"])),
    );

    out.push(
        EndpointSpec::get(
            "search_projects_by_name",
            "/projects",
            "Search visible projects by name substring.",
        )
        .query(p("search", Str).req())
        .query(p("order_by", Str))
        .query(p("sort", Str).one_of(&["asc", "desc"])),
    );

    out.push(
        EndpointSpec::get(
            "list_project_users",
            "/projects/{project_id}/users",
            "List users with access to a project.",
        )
        .path(p("project_id", IdOrPath))
        .query(p("search", Str))
        .query(p("skip_users", IntList).comma()),
    );

    out.push(
        EndpointSpec::get(
            "list_project_groups",
            "/projects/{project_id}/groups",
            "List a project's ancestor groups, optionally including shared groups.",
        )
        .path(p("project_id", IdOrPath))
        .query(p("search", Str))
        .query(p("shared_min_access_level", Int))
        .query(p("shared_visible_only", Bool))
        .query(p("skip_groups", IntList).comma())
        .query(p("with_shared", Bool)),
    );

    out.push(
        EndpointSpec::get(
            "list_project_shareable_groups",
            "/projects/{project_id}/share_locations",
            "List groups the project can be shared with.",
        )
        .path(p("project_id", IdOrPath))
        .query(p("search", Str)),
    );

    out.push(
        EndpointSpec::get(
            "list_project_invited_groups",
            "/projects/{project_id}/invited_groups",
            "List groups invited to a project, directly or through a parent group.",
        )
        .path(p("project_id", IdOrPath))
        .query(p("search", Str))
        .query(p("min_access_level", Int))
        .query(p("relation", StrList).comma())
        .query(p("with_custom_attributes", Bool)),
    );

    out.push(
        EndpointSpec::get(
            "list_project_languages",
            "/projects/{project_id}/languages",
            "Fetch the programming-language breakdown of a project in percent.",
        )
        .path(p("project_id", IdOrPath)),
    );
}

fn register_lifecycle(out: &mut Vec<EndpointSpec>) {
    out.push(
        EndpointSpec::post(
            "create_project",
            "/projects",
            "Create a project for the authenticated user; at least one of name or path is required.",
        )
        .body(p("name", Str))
        .body(p("path", Str))
        .body(p("namespace_id", IdOrPath))
        .body(p("description", Str))
        .body(p("visibility", Str).one_of(VISIBILITY).preset(json!("public")))
        .body(p("initialize_with_readme", Bool).preset(json!(false)))
        .body(p("default_branch", Str))
        .body(p("import_url", Str))
        .body(p("lfs_enabled", Bool))
        .body(p("merge_method", Str).one_of(MERGE_METHODS))
        .body(p("remove_source_branch_after_merge", Bool))
        .body(p("repository_object_format", Str))
        .body(p("repository_storage", Str))
        .body(p("squash_option", Str).one_of(SQUASH_OPTIONS))
        .body(p("auto_cancel_pending_pipelines", Str))
        .body(p("auto_devops_deploy_strategy", Str).one_of(DEPLOY_STRATEGIES))
        .body(p("auto_devops_enabled", Bool))
        .body(p("build_git_strategy", Str).one_of(GIT_STRATEGIES))
        .body(p("build_timeout", Int))
        .body(p("ci_config_path", Str))
        .body(p("group_runners_enabled", Bool))
        .body(p("merge_pipelines_enabled", Bool))
        .body(p("merge_trains_enabled", Bool))
        .body(p("merge_trains_skip_train_allowed", Bool))
        .body(p("mirror", Bool))
        .body(p("mirror_trigger_builds", Bool))
        .body(p("only_allow_merge_if_pipeline_succeeds", Bool))
        .body(p("public_jobs", Bool))
        .body(p("shared_runners_enabled", Bool))
        .body(p("approvals_before_merge", Int))
        .body(p("autoclose_referenced_issues", Bool))
        .body(p("only_allow_merge_if_all_discussions_are_resolved", Bool))
        .body(p("only_allow_merge_if_all_status_checks_passed", Bool))
        .body(p("printing_merge_request_link_enabled", Bool))
        .body(p("resolve_outdated_diff_discussions", Bool))
        .body(p("emails_enabled", Bool))
        .body(p("external_authorization_classification_label", Str))
        .body(p("group_with_project_templates_id", IdOrPath))
        .body(p("request_access_enabled", Bool))
        .body(p("show_default_award_emojis", Bool))
        .body(p("template_name", Str))
        .body(p("template_project_id", IdOrPath))
        .body(p("topics", StrList))
        .body(p("use_custom_template", Bool))
        .body(p("warn_about_potentially_unwanted_characters", Bool))
        .body(p("analytics_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("builds_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("container_registry_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("environments_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("feature_flags_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("forking_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("infrastructure_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("issues_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("merge_requests_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("model_experiments_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("model_registry_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("monitor_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("pages_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("package_registry_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("releases_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("repository_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("requirements_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("security_and_compliance_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("snippets_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("wiki_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("emails_disabled", Bool))
        .body(p("issues_enabled", Bool))
        .body(p("jobs_enabled", Bool))
        .body(p("merge_requests_enabled", Bool))
        .body(p("packages_enabled", Bool))
        .body(p("public_builds", Bool))
        .body(p("snippets_enabled", Bool))
        .body(p("wiki_enabled", Bool))
        .body(p("tag_list", StrList))
        .require_one_of(
            &["name", "path"],
            "Validation Error",
            "Either 'name' or 'path' must be provided to create a project.",
        ),
    );

    out.push(
        EndpointSpec::post(
            "create_project_for_user",
            "/projects/user/{user_id}",
            "Create a project owned by another user (administrators only).",
        )
        .path(p("user_id", IdOrPath))
        .body(p("name", Str).req())
        .body(p("path", Str))
        .body(p("namespace_id", IdOrPath))
        .body(p("description", Str))
        .body(p("visibility", Str).one_of(VISIBILITY).preset(json!("private")))
        .body(p("initialize_with_readme", Bool).preset(json!(false)))
        .body(p("default_branch", Str))
        .body(p("import_url", Str))
        .body(p("lfs_enabled", Bool))
        .body(p("merge_method", Str).one_of(MERGE_METHODS))
        .body(p("remove_source_branch_after_merge", Bool))
        .body(p("repository_object_format", Str))
        .body(p("repository_storage", Str))
        .body(p("squash_option", Str).one_of(SQUASH_OPTIONS))
        .body(p("issue_branch_template", Str))
        .body(p("auto_cancel_pending_pipelines", Str))
        .body(p("auto_devops_deploy_strategy", Str).one_of(DEPLOY_STRATEGIES))
        .body(p("auto_devops_enabled", Bool))
        .body(p("build_git_strategy", Str).one_of(GIT_STRATEGIES))
        .body(p("build_timeout", Int))
        .body(p("ci_config_path", Str))
        .body(p("group_runners_enabled", Bool))
        .body(p("merge_pipelines_enabled", Bool))
        .body(p("mirror", Bool))
        .body(p("mirror_trigger_builds", Bool))
        .body(p("only_allow_merge_if_pipeline_succeeds", Bool))
        .body(p("public_jobs", Bool))
        .body(p("shared_runners_enabled", Bool))
        .body(p("approvals_before_merge", Int))
        .body(p("autoclose_referenced_issues", Bool))
        .body(p("only_allow_merge_if_all_discussions_are_resolved", Bool))
        .body(p("only_allow_merge_if_all_status_checks_passed", Bool))
        .body(p("printing_merge_request_link_enabled", Bool))
        .body(p("resolve_outdated_diff_discussions", Bool))
        .body(p("merge_commit_template", Str))
        .body(p("squash_commit_template", Str))
        .body(p("suggestion_commit_message", Str))
        .body(p("emails_enabled", Bool))
        .body(p("enforce_auth_checks_on_uploads", Bool))
        .body(p("external_authorization_classification_label", Str))
        .body(p("group_with_project_templates_id", IdOrPath))
        .body(p("request_access_enabled", Bool))
        .body(p("show_default_award_emojis", Bool))
        .body(p("template_name", Str))
        .body(p("topics", StrList))
        .body(p("use_custom_template", Bool))
        .body(p("warn_about_potentially_unwanted_characters", Bool))
        .body(p("analytics_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("builds_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("container_registry_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("environments_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("feature_flags_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("forking_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("infrastructure_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("issues_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("merge_requests_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("model_experiments_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("model_registry_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("monitor_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("pages_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("package_registry_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("releases_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("repository_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("requirements_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("security_and_compliance_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("snippets_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("wiki_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("emails_disabled", Bool))
        .body(p("issues_enabled", Bool))
        .body(p("jobs_enabled", Bool))
        .body(p("merge_requests_enabled", Bool))
        .body(p("packages_enabled", Bool))
        .body(p("public_builds", Bool))
        .body(p("snippets_enabled", Bool))
        .body(p("wiki_enabled", Bool))
        .body(p("tag_list", StrList)),
    );

    out.push(
        EndpointSpec::put(
            "edit_project",
            "/projects/{project_id}",
            "Update any subset of a project's settings; at least one field is required.",
        )
        .path(p("project_id", IdOrPath))
        .body(p("name", Str))
        .body(p("path", Str))
        .body(p("description", Str))
        .body(p("visibility", Str).one_of(VISIBILITY))
        .body(p("default_branch", Str))
        .body(p("import_url", Str))
        .body(p("lfs_enabled", Bool))
        .body(p("merge_method", Str).one_of(MERGE_METHODS))
        .body(p("remove_source_branch_after_merge", Bool))
        .body(p("repository_storage", Str))
        .body(p("squash_option", Str).one_of(SQUASH_OPTIONS))
        .body(p("issue_branch_template", Str))
        .body(p("allow_merge_on_skipped_pipeline", Bool))
        .body(p("allow_pipeline_trigger_approve_deployment", Bool))
        .body(p("auto_cancel_pending_pipelines", Str))
        .body(p("auto_devops_deploy_strategy", Str).one_of(DEPLOY_STRATEGIES))
        .body(p("auto_devops_enabled", Bool))
        .body(p("build_git_strategy", Str).one_of(GIT_STRATEGIES))
        .body(p("build_timeout", Int))
        .body(p("ci_config_path", Str))
        .body(p("ci_default_git_depth", Int))
        .body(p("ci_delete_pipelines_in_seconds", Int))
        .body(p("ci_forward_deployment_enabled", Bool))
        .body(p("ci_forward_deployment_rollback_allowed", Bool))
        .body(p("ci_allow_fork_pipelines_to_run_in_parent_project", Bool))
        .body(p("ci_id_token_sub_claim_components", StrList))
        .body(p("ci_separated_caches", Bool))
        .body(p("ci_restrict_pipeline_cancellation_role", Str))
        .body(p("ci_pipeline_variables_minimum_override_role", Str))
        .body(p("ci_push_repository_for_job_token_allowed", Bool))
        .body(p("group_runners_enabled", Bool))
        .body(p("merge_pipelines_enabled", Bool))
        .body(p("merge_trains_enabled", Bool))
        .body(p("merge_trains_skip_train_allowed", Bool))
        .body(p("mirror", Bool))
        .body(p("mirror_overwrites_diverged_branches", Bool))
        .body(p("mirror_trigger_builds", Bool))
        .body(p("mirror_user_id", Int))
        .body(p("only_allow_merge_if_pipeline_succeeds", Bool))
        .body(p("only_mirror_protected_branches", Bool))
        .body(p("public_jobs", Bool))
        .body(p("shared_runners_enabled", Bool))
        .body(p("approvals_before_merge", Int))
        .body(p("auto_duo_code_review_enabled", Bool))
        .body(p("autoclose_referenced_issues", Bool))
        .body(p("issues_template", Str))
        .body(p("merge_commit_template", Str))
        .body(p("mr_default_target_self", Bool))
        .body(p("only_allow_merge_if_all_discussions_are_resolved", Bool))
        .body(p("only_allow_merge_if_all_status_checks_passed", Bool))
        .body(p("prevent_merge_without_jira_issue", Bool))
        .body(p("printing_merge_request_link_enabled", Bool))
        .body(p("resolve_outdated_diff_discussions", Bool))
        .body(p("squash_commit_template", Str))
        .body(p("suggestion_commit_message", Str))
        .body(p("container_expiration_policy_attributes", Map))
        .body(p("duo_remote_flows_enabled", Bool))
        .body(p("emails_enabled", Bool))
        .body(p("enforce_auth_checks_on_uploads", Bool))
        .body(p("external_authorization_classification_label", Str))
        .body(p("group_with_project_templates_id", IdOrPath))
        .body(p("keep_latest_artifact", Bool))
        .body(p("max_artifacts_size", Int))
        .body(p("request_access_enabled", Bool))
        .body(p("restrict_user_defined_variables", Bool))
        .body(p("service_desk_enabled", Bool))
        .body(p("show_default_award_emojis", Bool))
        .body(p("spp_repository_pipeline_access", Bool))
        .body(p("template_name", Str))
        .body(p("topics", StrList))
        .body(p("use_custom_template", Bool))
        .body(p("warn_about_potentially_unwanted_characters", Bool))
        .body(p("web_based_commit_signing_enabled", Bool))
        .body(p("analytics_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("builds_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("container_registry_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("environments_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("feature_flags_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("forking_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("infrastructure_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("issues_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("merge_requests_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("model_experiments_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("model_registry_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("monitor_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("pages_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("package_registry_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("releases_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("repository_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("requirements_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("security_and_compliance_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("snippets_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("wiki_access_level", Str).one_of(ACCESS_LEVELS))
        .body(p("container_registry_enabled", Bool))
        .body(p("emails_disabled", Bool))
        .body(p("issues_enabled", Bool))
        .body(p("jobs_enabled", Bool))
        .body(p("merge_requests_enabled", Bool))
        .body(p("packages_enabled", Bool))
        .body(p("public_builds", Bool))
        .body(p("snippets_enabled", Bool))
        .body(p("wiki_enabled", Bool))
        .body(p("tag_list", StrList))
        .require_update_field("No fields provided for update.", "The API was not called."),
    );

    out.push(
        EndpointSpec::post(
            "import_project_members",
            "/projects/{target_project_id}/import_project_members/{source_project_id}",
            "Copy the members of one project into another.",
        )
        .path(p("target_project_id", IdOrPath))
        .path(p("source_project_id", IdOrPath)),
    );

    out.push(
        EndpointSpec::post(
            "archive_project",
            "/projects/{project_id}/archive",
            "Archive a project; idempotent.",
        )
        .path(p("project_id", IdOrPath)),
    );

    out.push(
        EndpointSpec::post(
            "unarchive_project",
            "/projects/{project_id}/unarchive",
            "Unarchive a project; idempotent.",
        )
        .path(p("project_id", IdOrPath)),
    );

    out.push(
        EndpointSpec::delete(
            "delete_project",
            "/projects/{project_id}",
            "Delete a project: delayed by default, immediate when permanently_remove is set.",
        )
        .path(p("project_id", IdOrPath))
        .query(p("full_path", Str))
        .query(p("permanently_remove", Bool))
        .on_status(
            202,
            "success",
            "Project '{project_id}' successfully queued for deletion (HTTP 202).",
        )
        .on_status(
            204,
            "success",
            "Project '{project_id}' successfully immediately deleted (HTTP 204).",
        ),
    );

    out.push(
        EndpointSpec::post(
            "restore_project",
            "/projects/{project_id}/restore",
            "Restore a project that is marked for delayed deletion.",
        )
        .path(p("project_id", IdOrPath)),
    );

    out.push(
        EndpointSpec::put(
            "transfer_project",
            "/projects/{project_id}/transfer",
            "Transfer a project to another namespace.",
        )
        .path(p("project_id", IdOrPath))
        .body(p("namespace", IdOrPath).req()),
    );

    out.push(
        EndpointSpec::get(
            "list_transfer_locations",
            "/projects/{project_id}/transfer_locations",
            "List groups the project could be transferred to.",
        )
        .path(p("project_id", IdOrPath))
        .query(p("search", Str)),
    );
}

fn register_settings(out: &mut Vec<EndpointSpec>) {
    // Avatar changes go through the project update endpoint itself: a
    // multipart PUT to set it, a form-encoded blank value to clear it.
    out.push(
        EndpointSpec::put(
            "upload_project_avatar",
            "/projects/{project_id}",
            "Upload a local image file as the project avatar.",
        )
        .path(p("project_id", IdOrPath))
        .file(
            p("avatar_file_path", Str)
                .req()
                .rename("avatar")
                .missing("The avatar file path '{avatar_file_path}' does not exist."),
        ),
    );

    out.push(
        EndpointSpec::get(
            "download_project_avatar",
            "/projects/{project_id}/avatar",
            "Download the project avatar, to disk when save_path is given.",
        )
        .path(p("project_id", IdOrPath))
        .binary(p("save_path", Str)),
    );

    out.push(
        EndpointSpec::put(
            "remove_project_avatar",
            "/projects/{project_id}",
            "Remove the project avatar.",
        )
        .path(p("project_id", IdOrPath))
        .form(p("avatar", Str).preset(json!(""))),
    );

    out.push(
        EndpointSpec::post(
            "share_project_with_group",
            "/projects/{project_id}/share",
            "Share a project with a group at a given access level.",
        )
        .path(p("project_id", IdOrPath))
        .form(p("group_id", Int).req())
        .form(p("group_access", Int).req())
        .form(p("expires_at", Str)),
    );

    out.push(
        EndpointSpec::delete(
            "unshare_project_from_group",
            "/projects/{project_id}/share/{group_id}",
            "Remove a project's sharing link with a group.",
        )
        .path(p("project_id", IdOrPath))
        .path(p("group_id", Int))
        .on_status(
            204,
            "success",
            "Project {project_id} unshared from group {group_id}.",
        ),
    );

    out.push(
        EndpointSpec::post(
            "start_project_housekeeping",
            "/projects/{project_id}/housekeeping",
            "Start the housekeeping task for a project's repository.",
        )
        .path(p("project_id", IdOrPath))
        .form(p("task", Str).one_of(&["prune", "eager"]))
        .on_status(202, "success", "Housekeeping task initiated."),
    );

    out.push(
        EndpointSpec::post(
            "sast_real_time_scan",
            "/projects/{project_id}/security_scans/sast/scan",
            "Run a real-time SAST scan over one file's content (Ultimate, experimental).",
        )
        .path(p("project_id", IdOrPath))
        .body(p("file_path", Str).req())
        .body(p("content", Str).req()),
    );

    // Administrators only; the tar archive always lands on disk.
    out.push(
        EndpointSpec::get(
            "download_repository_snapshot",
            "/projects/{project_id}/snapshot",
            "Download a raw snapshot of the project or wiki repository as a tar archive.",
        )
        .path(p("project_id", IdOrPath))
        .query(p("wiki", Bool).preset(json!(false)))
        .binary(p("save_path", Str).req()),
    );

    out.push(
        EndpointSpec::get(
            "get_repository_storage_path",
            "/projects/{project_id}/storage",
            "Fetch the repository storage location of a project (administrators only).",
        )
        .path(p("project_id", IdOrPath)),
    );
}
