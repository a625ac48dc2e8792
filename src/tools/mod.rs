mod branches;
mod commits;
pub mod config;
mod files;
mod issues;
mod merge_requests;
mod projects;
mod repository;
mod search;

use crate::gitlab::EndpointSpec;

/// Every declarative endpoint, in catalog order.
pub fn all_endpoints() -> Vec<EndpointSpec> {
    let mut out = Vec::new();
    branches::register(&mut out);
    commits::register(&mut out);
    files::register(&mut out);
    issues::register(&mut out);
    merge_requests::register(&mut out);
    projects::register(&mut out);
    repository::register(&mut out);
    search::register(&mut out);
    out
}
