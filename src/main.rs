use clap::Parser;
use color_eyre::Result;
use tracing_subscriber::{fmt, EnvFilter};

use murmur::adapters::{FileSessionStorage, ReqwestHttpClient};
use murmur::api::ApiClient;
use murmur::cli::{self, Cli};
use murmur::session::SessionStore;

/// Log to stderr so command output on stdout stays clean.
fn init_logging(args: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_filter()));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();
    init_logging(&args);

    let config = args.config();
    tracing::debug!(api = %config.base_url, "starting");

    let storage = match &config.storage_dir {
        Some(dir) => FileSessionStorage::with_dir(dir.clone()),
        None => FileSessionStorage::new()?,
    };
    let session = SessionStore::restore(storage);
    let api = ApiClient::new(config.base_url.as_str(), ReqwestHttpClient::new());

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(cli::run(args.command, api, session, &config))
}
