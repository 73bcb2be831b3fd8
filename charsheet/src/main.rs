//! Console character creator.
//!
//! Creates a character, saves it, reloads it and levels it up, then accepts
//! `#`-commands on stdin:
//!
//! ```bash
//! cargo run -p charsheet -- --name "Thorin" --class warrior --save thorin.txt
//! ```

mod config;
mod headless;
mod render;

use anyhow::Context;
use charsheet_core::ClassArchetype;
use config::CliConfig;
use std::io;

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    let config = CliConfig::from_env().with_args(&args);
    tracing::debug!(?config, "starting");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    headless::run(&config, &mut stdin.lock(), &mut stdout).context("console I/O failed")
}

fn print_help() {
    println!("Character creator with save/load");
    println!();
    println!("USAGE:");
    println!("  charsheet [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -h, --help          Show this help message");
    println!("  --name <NAME>       Character name (prompted if omitted)");
    println!("  --class <CLASS>     Character class (prompted if omitted)");
    println!(
        "  --save <PATH>       Save file (default: $CHARSHEET_SAVE_PATH or {})",
        config::DEFAULT_SAVE_PATH
    );
    println!();
    println!("CLASSES:");
    for class in ClassArchetype::playable() {
        println!("  {:<10}{}", class.name().to_lowercase(), class.description());
    }
    println!("  (any other class name uses fallback stats)");
    println!();
    println!("EXAMPLES:");
    println!("  charsheet                                  # Prompt for everything");
    println!("  charsheet --name Thorin --class warrior");
    println!();
    println!("Set RUST_LOG=debug to see save/load diagnostics on stderr.");
}
