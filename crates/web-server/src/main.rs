use tracing_subscriber::EnvFilter;

// This main function is the entry point when running `cargo run -p web-server`.
// It loads `config.toml` from the working directory and serves the API.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = configuration::load_config("config.toml")?;
    web_server::run_server(settings).await
}
