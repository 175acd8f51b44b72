use {
    crate::common::{debug_eprintln, DEBUG},
    clap::Parser,
    std::sync::atomic::Ordering,
};

/// Report which of the integers 1 through 11 are prime
#[derive(Debug, Parser)]
#[command(version)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long)]
    debug: bool,
}

pub(crate) fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    DEBUG.store(cli.debug, Ordering::Relaxed);
    debug_eprintln!("{cli:?}");
    debug_eprintln!("checking {:?} by trial division", report::RANGE);
    let lines = report::lines().inspect(|line| {
        debug_eprintln!("{line:?}");
    });
    report::write_report(&mut std::io::stdout().lock(), lines)?;
    Ok(())
}
