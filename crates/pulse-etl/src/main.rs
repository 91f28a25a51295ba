//! Pulse - data pipeline runner

use anyhow::Result;
use clap::Parser;
use pulse_common::logging::{init_logging, LogConfig, LogLevel};
use pulse_etl::{config::PipelineConfig, pipeline::Pipeline, tip};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "pulse")]
#[command(author, version, about = "Fetch, flatten, persist, and upload measurement data")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Parser, Debug)]
enum Command {
    /// Run the pipeline once: fetch, transform, write, upload
    Run {
        /// Local output directory (overrides PULSE_LOCAL_FOLDER)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Split a restaurant bill, tip included
    Tip {
        /// Total bill amount
        #[arg(long)]
        bill: f64,

        /// Tip percentage, e.g. 10, 12, or 15
        #[arg(long, default_value_t = 15)]
        tip: u32,

        /// Number of people splitting the bill
        #[arg(long, default_value_t = 1)]
        people: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Environment settings first, then the verbose flag on top.
    let mut log_config = LogConfig::from_env()?;
    if cli.verbose {
        log_config.level = LogLevel::Debug;
    }
    init_logging(&log_config)?;

    match cli.command {
        Command::Run { output } => {
            let mut config = PipelineConfig::from_env()?;
            if let Some(dir) = output {
                config.local_folder = dir.into();
            }

            let pipeline = Pipeline::new(config);
            match pipeline.run().await {
                Ok(object) => info!("Pipeline completed, uploaded {}", object),
                Err(e) => {
                    error!("Pipeline aborted in {} stage: {}", e.stage(), e);
                    return Err(e.into());
                },
            }
        },
        Command::Tip { bill, tip, people } => {
            let split = tip::split_bill(bill, tip, people)?;
            info!("Total bill including tip: {:.2}", split.total);
            println!("Each person should pay: ${}", split.per_person_display());
        },
    }

    Ok(())
}
