//! CLI entry point and command handlers for chartcheck.

mod cmd;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chartcheck")]
#[command(version)]
#[command(about = "Validate Helm chart values.schema.json image tags", long_about = None)]
#[command(
    after_help = "EXIT CODES:\n    0    all checked charts match the catalog (skipped and warned charts included)\n    1    at least one chart mismatched, or a chart could not be read\n    2    usage error"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate chart directories against the pinned tag catalog
    ///
    /// Charts whose name is not in the catalog are skipped successfully.
    Check {
        /// Chart directories, each containing a values.schema.json
        #[arg(value_name = "CHART_DIR", required = true)]
        chart_dirs: Vec<PathBuf>,
        /// Catalog file replacing the built-in expectations (YAML)
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,
        /// Output format (text or json)
        #[arg(short, long, default_value = "text")]
        format: String,
        /// Also warn on image tags without a YYYY.MM.DD build-date suffix
        #[arg(long)]
        strict: bool,
    },
    /// Discover charts under a root directory and validate each
    Scan {
        /// Directory whose direct children are chart directories
        root: PathBuf,
        /// Catalog file replacing the built-in expectations (YAML)
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,
        /// Output format (text or json)
        #[arg(short, long, default_value = "text")]
        format: String,
        /// Also warn on image tags without a YYYY.MM.DD build-date suffix
        #[arg(long)]
        strict: bool,
    },
    /// Print the active expectations catalog
    Catalog {
        /// Catalog file replacing the built-in expectations (YAML)
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,
        /// Output format (text or json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },
    /// Show version information
    Version {
        /// Show additional build information
        #[arg(long, short)]
        verbose: bool,
    },
    /// Generate shell completion script
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            chart_dirs,
            catalog,
            format,
            strict,
        } => {
            let format = parse_format(&format);
            cmd::check::cmd_check(&chart_dirs, catalog.as_deref(), format, strict)
        }
        Commands::Scan {
            root,
            catalog,
            format,
            strict,
        } => {
            let format = parse_format(&format);
            cmd::scan::cmd_scan(&root, catalog.as_deref(), format, strict)
        }
        Commands::Catalog { catalog, format } => {
            let format = parse_format(&format);
            cmd::catalog::cmd_catalog(catalog.as_deref(), format)
        }
        Commands::Version { verbose } => cmd_version(verbose),
        Commands::Completion { shell } => cmd_completion(shell),
    }
}

/// Parse an output format string, exiting on unknown values
fn parse_format(format: &str) -> cmd::OutputFormat {
    match format.to_lowercase().as_str() {
        "json" => cmd::OutputFormat::Json,
        "text" => cmd::OutputFormat::Text,
        _ => {
            eprintln!("Error: Invalid format '{}'. Use 'text' or 'json'.", format);
            std::process::exit(1);
        }
    }
}

/// Show version information
fn cmd_version(verbose: bool) -> Result<()> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    println!("chartcheck {}", VERSION);

    if verbose {
        const GIT_SHA: &str = env!("GIT_SHA");
        const BUILD_DATE: &str = env!("BUILD_DATE");
        println!("commit: {}", GIT_SHA);
        println!("built: {}", BUILD_DATE);
    }

    Ok(())
}

/// Generate shell completion script
fn cmd_completion(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "chartcheck", &mut io::stdout());
    Ok(())
}
