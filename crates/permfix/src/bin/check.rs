use anyhow::{Result, bail};
use clap::Parser;
use log::info;

use permfix::{Pattern, SearchOptions, Separators, run_trial, search};

#[derive(Parser)]
#[command(author, version, about = "Check one pattern for a fixing certificate", long_about = None)]
struct Args {
    /// Pattern, e.g. 2413 or 2,4,1,3
    pattern: String,

    /// Main separator (every position when omitted)
    #[arg(short, long)]
    main: Option<usize>,

    /// Horizontal separator, placed below this value
    #[arg(long)]
    horizontal: Option<usize>,

    /// Try vertical sub-separators
    #[arg(long)]
    sub: bool,

    /// Try horizontal sub-separators (requires --horizontal)
    #[arg(long)]
    horizontal_sub: bool,

    /// Run a single trial seeded with this value instead of the full search
    #[arg(short, long)]
    seed: Option<usize>,

    /// Trace every fix
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let filter = if args.debug { "debug" } else { "info" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .try_init();

    let pattern = Pattern::parse(&args.pattern)?;
    if args.horizontal_sub && args.horizontal.is_none() {
        bail!("--horizontal-sub needs --horizontal");
    }
    let mains: Vec<usize> = match args.main {
        Some(m) => vec![m],
        None => (1..pattern.len()).collect(),
    };

    if let Some(seed) = args.seed {
        if args.sub || args.horizontal_sub {
            bail!("--seed runs a single trial and cannot place sub-separators");
        }
        for main in mains {
            let separators = Separators::new(main).with_horizontal(args.horizontal);
            let (state, run) = run_trial(&pattern, separators, seed)?;
            info!("{} passes, {:?}", run.passes, run.outcome);
            let order: Vec<String> = state.fixed_values().iter().map(|v| v.to_string()).collect();
            println!("{} ---> {}", separators.render(&pattern), order.join(", "));
        }
        return Ok(());
    }

    let options = SearchOptions {
        use_sub_separator: args.sub,
        use_horizontal_sub_separator: args.horizontal_sub,
    };
    for main in mains {
        let outcome = search(&pattern, main, args.horizontal, options)?;
        if outcome.success && outcome.records.is_empty() {
            info!("main separator {main}: certified with no room for a sub-separator");
        }
        for record in &outcome.records {
            println!("{record}");
        }
    }
    Ok(())
}
