use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use pagepulse_cli::commands;

#[derive(Parser)]
#[command(name = "pagepulse")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "A CLI tool for scoring and comparing web pages on CRO quality and load performance",
    long_about = "PagePulse renders pages in headless Chrome, scores them against conversion-rate \
                  optimization best practices and load-performance tiers, and ranks multiple pages \
                  against each other with comparative insights."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (json, table, pretty)
    #[arg(short, long, global = true, default_value = "pretty")]
    format: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a single URL
    Analyze {
        /// URL to analyze (bare hostnames default to https)
        #[arg(value_name = "URL")]
        url: String,

        /// Include the performance section in the output
        #[arg(long)]
        performance: bool,
    },

    /// Compare 2-10 URLs and rank them against each other
    Compare {
        /// URLs to compare
        #[arg(value_name = "URL", num_args = 1.., required = true)]
        urls: Vec<String>,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Analyze { url, performance } => {
            commands::analyze::execute(&url, performance, &cli.format).await
        }
        Commands::Compare { urls } => commands::compare::execute(&urls, &cli.format).await,
        Commands::Completion { shell } => commands::completion::execute(shell, &mut Cli::command()),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("pagepulse=debug,pagepulse_core=debug,pagepulse_browser=debug")
    } else {
        EnvFilter::new("pagepulse=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
