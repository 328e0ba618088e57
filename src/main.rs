mod terminal;

use std::io;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use terminal::TerminalOptions;
use vaultsh_core::Session;

#[derive(Parser)]
#[command(name = "vaultsh", version)]
#[command(about = "Interactive shell over a simulated filesystem with password-locked files")]
struct Cli {
    /// Skip the greeting banner
    #[arg(long)]
    no_banner: bool,

    /// Typewriter effect: delay between printed characters, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 0)]
    typing_delay_ms: u64,

    /// Log debug events to stderr (overrides RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

/// Initialize tracing on stderr so stdout stays the terminal.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let session = Session::seeded().context("failed to build the seed filesystem")?;
    let options = TerminalOptions {
        banner: !cli.no_banner,
        typing_delay: Duration::from_millis(cli.typing_delay_ms),
    };

    tracing::debug!(?options, "starting session");
    terminal::run(session, io::stdin().lock(), io::stdout().lock(), &options)
        .context("terminal I/O failed")?;
    Ok(())
}
