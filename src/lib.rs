pub mod app;
pub mod config;
pub mod constants;
pub mod errors;
pub mod gitlab;
pub mod mcp;
pub mod services;
pub mod tools;
pub mod utils;
