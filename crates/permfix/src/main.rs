use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info, warn};
use std::{io::Write, path::PathBuf};

use permfix::constants::{DEFAULT_CONFIG_PATH, ENV_OUTPUT_DIR};
use permfix::{Config, TextReport, run_analysis, write_summary_csv};

#[derive(Parser)]
#[command(author, version, about = "Search fixing certificates for every pattern of a given length", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Pattern length (overrides the configuration)
    #[arg(short = 'n', long)]
    length: Option<usize>,

    /// Try every horizontal separator
    #[arg(long)]
    horizontal: bool,

    /// Try vertical sub-separators
    #[arg(long)]
    sub: bool,

    /// Try horizontal sub-separators (implies --horizontal)
    #[arg(long)]
    horizontal_sub: bool,

    /// Trace every fix
    #[arg(short, long)]
    debug: bool,

    /// Output directory for the report
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Report file name inside the output directory
    #[arg(long)]
    report_file: Option<String>,

    /// CSV summary file name inside the output directory
    #[arg(long)]
    summary_csv: Option<String>,

    /// Do not echo record lines to stdout
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        // No-op when run() already installed the logger
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .try_init();
        error!("Error: {e}");

        use std::io::ErrorKind;
        for cause in e.chain().skip(1) {
            if let Some(ioe) = cause.downcast_ref::<std::io::Error>() {
                match ioe.kind() {
                    ErrorKind::PermissionDenied => {
                        error!("Hint: Run in a writable directory or set {ENV_OUTPUT_DIR}.");
                        break;
                    }
                    ErrorKind::Other if format!("{ioe}").contains("No space left") => {
                        error!("Hint: Check available disk space.");
                        break;
                    }
                    _ => {}
                }
            }
        }
        let _ = std::io::stderr().flush();
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config_found = args.config.exists();
    let mut config = if config_found {
        Config::load_from_file(&args.config)?
    } else {
        Config::default()
    };
    config.apply_env_overrides()?;
    apply_args(&mut config, &args);

    let filter = if config.search.debug { "debug" } else { "info" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .try_init();

    if config_found {
        info!("Loaded configuration from {}", args.config.display());
    } else {
        warn!(
            "Config file not found: {}, using default settings",
            args.config.display()
        );
    }
    config.validate()?;

    let search = &config.search;
    info!("=== Fixing certificate search ===");
    info!("Pattern length: {}", search.pattern_length);
    info!("Horizontal separator: {}", search.use_horizontal_separator);
    info!("Vertical sub-separator: {}", search.use_sub_separator);
    info!("Horizontal sub-separator: {}", search.use_horizontal_sub_separator);

    let mut report = TextReport::create(
        &config.output.output_dir,
        config.output.report_file.as_deref(),
        search.pattern_length,
    )?
    .with_echo(config.output.echo);

    let summary = run_analysis(search, &mut report)?;
    info!("Report saved to: {}", report.path().display());

    if let Some(name) = &config.output.summary_csv {
        let path = config.output.output_dir.join(name);
        write_summary_csv(&path, &summary.results)
            .with_context(|| format!("writing summary to {}", path.display()))?;
        info!("Summary saved to: {}", path.display());
    }

    info!("=== Results ===");
    info!("Symmetry classes: {}", summary.classes);
    info!("Combinations: {}", summary.combinations);
    info!("Certified: {}", summary.certified);
    info!("Failed: {}", summary.failed);
    Ok(())
}

/// Command line flags take precedence over the file and environment.
fn apply_args(config: &mut Config, args: &Args) {
    let search = &mut config.search;
    if let Some(n) = args.length {
        search.pattern_length = n;
    }
    search.use_horizontal_separator |= args.horizontal || args.horizontal_sub;
    search.use_sub_separator |= args.sub;
    search.use_horizontal_sub_separator |= args.horizontal_sub;
    search.debug |= args.debug;

    let output = &mut config.output;
    if let Some(dir) = &args.output_dir {
        output.output_dir = dir.clone();
    }
    if let Some(name) = &args.report_file {
        output.report_file = Some(name.clone());
    }
    if let Some(name) = &args.summary_csv {
        output.summary_csv = Some(name.clone());
    }
    if args.quiet {
        output.echo = false;
    }
}
