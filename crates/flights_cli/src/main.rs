mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::SourceArgs;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "flights")]
#[command(version, about = "Flight schedule CSV validator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate sources and write accepted flights and diagnostics
    Parse {
        #[command(flatten)]
        sources: SourceArgs,

        /// Output JSON path for valid flights (defaults to db.json)
        #[arg(short, long)]
        output: Option<String>,

        /// Path for the diagnostics report (defaults to errors.txt)
        #[arg(short, long)]
        errors: Option<String>,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Validate sources and print diagnostics without writing any file
    Check {
        #[command(flatten)]
        sources: SourceArgs,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    // Execute command
    match cli.command {
        Commands::Parse {
            sources,
            output,
            errors,
            format,
        } => commands::parse::execute(&sources, output.as_deref(), errors.as_deref(), &format),

        Commands::Check { sources, format } => commands::check::execute(&sources, &format),
    }
}
