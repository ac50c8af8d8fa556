use anyhow::{Result, bail};
use clap::Parser;
use log::info;

use permfix::{MAX_PATTERN_LENGTH, MIN_PATTERN_LENGTH, symmetry_groups};

#[derive(Parser)]
#[command(author, version, about = "List reflection classes of permutations of a given length", long_about = None)]
struct Args {
    /// Pattern length
    #[arg(short = 'n', long, default_value_t = 4)]
    length: usize,

    /// Print the classes as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
    let args = Args::parse();

    if !(MIN_PATTERN_LENGTH..=MAX_PATTERN_LENGTH).contains(&args.length) {
        bail!(
            "length must be between {} and {}, got {}",
            MIN_PATTERN_LENGTH,
            MAX_PATTERN_LENGTH,
            args.length
        );
    }

    let groups = symmetry_groups(args.length);
    info!("{} classes for length {}", groups.len(), args.length);

    if args.json {
        let classes: Vec<_> = groups
            .iter()
            .map(|class| {
                serde_json::json!({
                    "representative": class.representative().to_string(),
                    "members": class.members().iter().map(|m| m.values().to_vec()).collect::<Vec<_>>(),
                })
            })
            .collect();
        let json_data = serde_json::json!({
            "pattern_length": args.length,
            "class_count": groups.len(),
            "classes": classes,
        });
        println!("{}", serde_json::to_string_pretty(&json_data)?);
    } else {
        for class in &groups {
            let members: Vec<String> = class.members().iter().map(|m| m.to_string()).collect();
            println!("{} ({}): {}", class.representative(), class.len(), members.join(" "));
        }
    }

    Ok(())
}
