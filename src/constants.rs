pub mod network {
    pub const TIMEOUT_API_REQUEST_MS: u64 = 30_000;
}

pub mod env {
    pub const GITLAB_API: &str = "GITLAB_API";
    pub const GITLAB_TOKEN: &str = "GITLAB_TOKEN";
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
}

pub mod gitlab {
    pub const AUTH_HEADER: &str = "PRIVATE-TOKEN";
    pub const ACCEPT_JSON: &str = "application/json";
    pub const UNSET_PLACEHOLDER: &str = "(not set)";
}

pub mod limits {
    pub const LOG_SUBSTRING_LENGTH: usize = 100;
}

pub mod protocols {
    pub const ALLOWED_HTTP: &[&str] = &["http:", "https:"];
}

pub mod server {
    pub const NAME: &str = "gitlab-mcp";
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PROTOCOL_VERSION: &str = "2025-06-18";
}
