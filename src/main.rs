use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

use commands::seed::ExportFormat;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Developer utilities for the OpenCanvas writing platform", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the sample story dataset for the client feed
    Seed {
        /// Output file
        #[arg(short, long, default_value = "Stories.js")]
        output: PathBuf,

        /// Output shape: ES module the client imports, or a bare JSON array
        #[arg(long, value_enum, default_value = "module")]
        format: ExportFormat,
    },

    /// Create the backend service skeleton
    Scaffold {
        /// Base directory to scaffold into
        #[arg(default_value = "src")]
        base: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Seed { output, format } => {
            commands::seed::execute(output, format)?;
        }
        Commands::Scaffold { base } => {
            commands::scaffold::execute(base)?;
        }
    }

    Ok(())
}
