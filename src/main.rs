use errors::AppResult;
use seace_dashboard::{cli, errors};
use tracing_subscriber::EnvFilter;

fn main() -> AppResult<()> {
    // Logs go to stderr so they do not interleave with the rendered table.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let rt =
        tokio::runtime::Runtime::new().map_err(|e| errors::AppError::IoError(e.to_string()))?;

    rt.block_on(cli::cli())
}
