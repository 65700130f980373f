//! Command implementations for the SLR CLI.
//!
//! Provides subcommands that print the dashboard's chart specifications as
//! JSON and a `serve` command that runs the dashboard's HTTP server.

use anyhow::Context;
use clap::Subcommand;
use slr_data::LaunchData;
use std::path::PathBuf;

pub mod charts;
pub mod serve;

/// Default port for `serve`.
pub const DEFAULT_PORT: u16 = 8050;

#[derive(Subcommand)]
pub enum Command {
    /// Print payload bounds and the launch site dropdown options
    Summary {
        /// Launch CSV to read (defaults to the embedded dataset)
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Print the success pie chart as JSON
    Pie {
        /// Launch CSV to read (defaults to the embedded dataset)
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Launch site, or ALL for every site
        #[arg(short, long, default_value = slr_core::site::ALL_SITES)]
        site: String,
    },

    /// Print the payload vs. outcome scatter chart as JSON
    Scatter {
        /// Launch CSV to read (defaults to the embedded dataset)
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Launch site, or ALL for every site
        #[arg(short, long, default_value = slr_core::site::ALL_SITES)]
        site: String,

        /// Lower payload bound in kg (defaults to the dataset minimum)
        #[arg(long)]
        min: Option<f64>,

        /// Upper payload bound in kg (defaults to the dataset maximum)
        #[arg(long)]
        max: Option<f64>,
    },

    /// Serve the dashboard and its chart API over HTTP
    Serve {
        /// Launch CSV to read (defaults to the embedded dataset)
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Built dashboard directory (e.g. launch-dashboard/dist) to serve at /
        #[arg(long)]
        dist: Option<PathBuf>,
    },
}

/// Load launch data from `csv`, or from the embedded dataset when None.
pub fn load_data(csv: Option<&PathBuf>) -> anyhow::Result<LaunchData> {
    match csv {
        Some(path) => {
            let csv_data = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            LaunchData::from_csv(&csv_data)
                .with_context(|| format!("failed to load launches from {}", path.display()))
        }
        None => LaunchData::from_csv(slr_core::CSV_OBJECT),
    }
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Summary { csv } => {
            let data = load_data(csv.as_ref())?;
            println!("{}", charts::summary_json(&data)?);
            Ok(())
        }
        Command::Pie { csv, site } => {
            let data = load_data(csv.as_ref())?;
            println!("{}", charts::pie_json(&data, &site)?);
            Ok(())
        }
        Command::Scatter {
            csv,
            site,
            min,
            max,
        } => {
            let data = load_data(csv.as_ref())?;
            println!("{}", charts::scatter_json(&data, &site, min, max)?);
            Ok(())
        }
        Command::Serve {
            csv,
            host,
            port,
            dist,
        } => {
            let data = load_data(csv.as_ref())?;
            serve::run_server(data, &host, port, dist).await
        }
    }
}
