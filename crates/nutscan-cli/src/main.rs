mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nutscan", about = "Metal nut anomaly detection client")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send an image to the analysis service and print the result
    Analyze(commands::analyze::AnalyzeArgs),
    /// Print a saved service response
    Show(commands::show::ShowArgs),
    /// Print or save the default client config
    Config(commands::config::ConfigArgs),
    /// Print the display strings of a language
    Strings(commands::strings::StringsArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Analyze(args) => commands::analyze::run(args),
        Commands::Show(args) => commands::show::run(args),
        Commands::Config(args) => commands::config::run(args),
        Commands::Strings(args) => commands::strings::run(args),
    }
}
