//! UCI engine binary. Speaks UCI on stdin/stdout; logs never go to stdout.

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uci_engine::Session;

#[derive(Parser)]
#[command(name = "elephas", version, about = "UCI chess engine with selectable personalities")]
struct Cli {
    /// Append logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn init_logging(log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let (file_layer, stderr_layer) = match log_file {
        Some(path) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            let layer = fmt::layer().with_ansi(false).with_writer(Mutex::new(file));
            (Some(layer), None)
        }
        None => (None, Some(fmt::layer().with_writer(io::stderr))),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref())?;

    // Record panics in the log before the default hook prints them
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        error!("engine panicked: {}", panic);
        default_hook(panic);
    }));

    info!(version = env!("CARGO_PKG_VERSION"), "engine started");

    let mut session = Session::default();
    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = session.run(stdin.lock(), &mut stdout.lock()) {
        error!("session failed: {}", e);
        return Err(e).context("UCI session failed");
    }

    info!("engine stopped");
    Ok(())
}
