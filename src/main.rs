use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use miette::{IntoDiagnostic, Result, WrapErr};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

use deadcode_detective::{Config, Reporter, ScanRequest, Scanner, SystemRunner};

/// Deadcode Detective - detect dead code in JavaScript/TypeScript and Python projects
#[derive(Parser, Debug)]
#[command(name = "deadcode-detective")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode - only output results
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run ts-prune and/or vulture and report unused code
    Detect(DetectArgs),
}

#[derive(Args, Debug)]
struct DetectArgs {
    /// Scan JavaScript/TypeScript files under this path (uses ts-prune)
    #[arg(long, value_name = "PATH")]
    js: Option<PathBuf>,

    /// Scan Python files under this path (uses vulture)
    #[arg(long, value_name = "PATH")]
    py: Option<PathBuf>,

    /// Confidence threshold for Python dead code detection (0-100, default: 60)
    #[arg(long, value_name = "NUMBER", allow_hyphen_values = true)]
    confidence: Option<String>,

    /// Output format (cli, html, json; default: cli)
    #[arg(long, value_name = "TYPE")]
    format: Option<String>,

    /// Output file path (for html/json; results go to stdout when omitted)
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.quiet);

    info!("Deadcode Detective v{}", env!("CARGO_PKG_VERSION"));

    let root = std::env::current_dir()
        .into_diagnostic()
        .wrap_err("Failed to determine the working directory")?;

    // Load configuration
    let config = load_config(&cli, &root)?;

    match cli.command {
        Commands::Detect(args) => run_detect(&config, &root, args, cli.quiet),
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli, root: &Path) -> Result<Config> {
    if let Some(config_path) = &cli.config {
        Config::from_file(config_path)
    } else {
        // Try to load from default locations
        Config::from_default_locations(root)
    }
}

fn run_detect(config: &Config, root: &Path, args: DetectArgs, quiet: bool) -> Result<()> {
    // CLI flags override config values
    let request = ScanRequest {
        js: args.js,
        py: args.py,
        confidence: args
            .confidence
            .unwrap_or_else(|| config.confidence.to_string()),
        format: args.format.unwrap_or_else(|| config.format.clone()),
    };

    // Rejects bad thresholds and formats before any analyzer is spawned
    let plan = request.validate().into_diagnostic()?;

    let spinner = if quiet { ProgressBar::hidden() } else { scan_spinner()? };

    let runner = SystemRunner;
    let scanner = Scanner::new(config, &runner, root.to_path_buf()).with_progress(spinner.clone());

    let results = match scanner.scan(&plan) {
        Ok(results) => {
            spinner.finish_with_message("Scan completed successfully");
            results
        }
        Err(e) => {
            spinner.abandon_with_message("Scan failed");
            return Err(e).into_diagnostic();
        }
    };

    info!("Found {} dead code candidates", results.total());

    let reporter = Reporter::new(plan.format, args.output)
        .with_html_default(config.html.default_output.clone());
    reporter.report(&results).into_diagnostic()?;

    Ok(())
}

fn scan_spinner() -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .into_diagnostic()?,
    );
    spinner.set_message("Scanning for dead code...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    Ok(spinner)
}
