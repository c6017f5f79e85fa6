use anyhow::Result;
use clap::Parser;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use smart_hire::cli::{run, RankCli};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().expect("Invalid log directive")),
        )
        .init();

    let cli = RankCli::parse();
    run(cli).await
}
