//! Tournament CLI
//!
//! Run round-robin or multi-robin tournaments between the known players.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use roster::Roster;
use tournament::{install_panic_hook, ModeSetting, Tournament, TournamentConfig};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "tournament", version, about = "Play tournaments between chess players")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Play a tournament (the default)
    Run(RunArgs),
    /// List the known players
    Players,
}

#[derive(Args, Default)]
struct RunArgs {
    /// TOML file with tournament settings; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pairing mode
    #[arg(long, value_enum)]
    mode: Option<ModeSetting>,

    /// Repetitions of the round-robin in multi-robin mode
    #[arg(long)]
    rounds: Option<usize>,

    /// Player to enter, by exact name (repeatable; default: everyone)
    #[arg(long = "player", value_name = "NAME")]
    players: Vec<String>,

    /// Write every game as PGN to this file
    #[arg(long)]
    pgn: Option<PathBuf>,

    /// Write results as JSON to this file
    #[arg(long)]
    results: Option<PathBuf>,

    /// Print the PGN of game N (1-based, as numbered in the report)
    #[arg(long, value_name = "N")]
    game: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    // Player panics are forfeits, reported through the log
    install_panic_hook();

    let cli = Cli::parse();
    match cli.command {
        Some(Command::Players) => {
            for (seat, name) in Roster::standard().names().enumerate() {
                let marker = if seat == 0 { " (default)" } else { "" };
                println!("{}{}", name, marker);
            }
            Ok(())
        }
        Some(Command::Run(args)) => run(args),
        None => run(RunArgs::default()),
    }
}

fn run(args: RunArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => TournamentConfig::load(path)?,
        None => TournamentConfig::default(),
    };

    if let Some(mode) = args.mode {
        config.mode = mode;
    }
    if args.rounds.is_some() {
        config.rounds = args.rounds;
    }
    if !args.players.is_empty() {
        config.roster = args.players;
    }
    if args.pgn.is_some() {
        config.pgn = args.pgn;
    }
    if args.results.is_some() {
        config.results = args.results;
    }

    let roster = Roster::standard()
        .subset(&config.roster)
        .context("building the tournament roster")?;
    if roster.len() < 2 {
        bail!("a tournament needs at least two players, got {}", roster.len());
    }

    let mode = config.pairing_mode(roster.len());
    let name = config.name.clone().unwrap_or_else(|| "Tournament".to_string());
    let mut tournament = Tournament::new(roster, mode).with_name(name);

    info!(players = ?tournament.roster().names().collect::<Vec<_>>(), %mode, "tournament scheduled");
    tournament.play();

    let results = tournament.report();
    results.print_report();

    if let Some(path) = &config.pgn {
        let pgn = tournament.export(None)?;
        std::fs::write(path, pgn).with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), "games saved");
    }

    if let Some(path) = &config.results {
        results.save(path)?;
        info!(path = %path.display(), "results saved");
    }

    if let Some(number) = args.game {
        println!();
        print!("{}", tournament.export(Some(number))?);
    }

    Ok(())
}
