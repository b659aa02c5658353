mod cli;
mod content;
mod server;
mod util;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::{cli::Cli, util::Result};

#[tokio::main]
async fn main() -> Result<()> {
  #[cfg(feature = "dotenv")]
  dotenv::dotenv().ok();

  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info")),
    )
    .init();

  let cli = Cli::parse();
  cli.run().await?;

  Ok(())
}
