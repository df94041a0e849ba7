//! Manor Mystery
//!
//! Explore the manor, gather every clue, and only then face the killer.

use anyhow::Context;
use clap::Parser;
use manor_mystery::console::{App, Theme};
use manor_mystery::{Game, World};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// A text-driven murder mystery
#[derive(Parser, Debug)]
#[command(name = "manor-mystery")]
#[command(author, version, about = "Manor Mystery - Solve the murder!", long_about = None)]
struct Args {
    /// Play a JSON world definition instead of Blackwood Manor
    #[arg(short = 'w', long = "world")]
    world: Option<PathBuf>,

    /// Disable colours
    #[arg(long)]
    plain: bool,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| level.into()))
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let world = match &args.world {
        Some(path) => World::load(path)
            .with_context(|| format!("failed to load world from {}", path.display()))?,
        None => World::standard().context("built-in world is invalid")?,
    };

    let theme = if args.plain { Theme::plain() } else { Theme::default() };

    let stdin = io::stdin();
    let mut app = App::new(Game::new(world), stdin.lock(), io::stdout()).with_theme(theme);
    let outcome = app.run()?;

    tracing::debug!(?outcome, "session finished");
    Ok(())
}
