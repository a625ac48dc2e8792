#[tokio::main]
async fn main() {
    if let Err(err) = gitlab_mcp::mcp::server::run_stdio().await {
        eprintln!("gitlab-mcp: {}", err);
        std::process::exit(1);
    }
}
