mod client;
mod endpoint;
mod params;

pub use client::{GitLabClient, HttpError};
pub use endpoint::{error_payload, EndpointSpec, Method, ResponseMode, Rule, StatusMessage};
pub use params::{p, ListStyle, ParamKind, ParamSpec, ParamTarget};
