//! SLR CLI - chart data and HTTP server for the SpaceX launch records dashboard.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "slr-cli",
    version,
    about = "SpaceX launch records dashboard toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: slr_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    slr_cmd::run(cli.command).await
}
