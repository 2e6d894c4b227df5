//! selftest - Runs the documented bintree examples
//!
//! Usage:
//!   cargo run -p selftest -- [--quiet] [--filter <substring>] [--log-level <level>]

mod checks;

use anyhow::bail;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "selftest")]
#[command(about = "Runs the documented bintree examples and reports pass/fail")]
struct Cli {
    /// Only print the summary line
    #[arg(short, long)]
    quiet: bool,

    /// Run only checks whose name contains this substring
    #[arg(short, long)]
    filter: Option<String>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, env = "BINTREE_LOG", default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(&cli)?;

    let selected: Vec<_> = checks::all()
        .into_iter()
        .filter(|check| {
            cli.filter
                .as_deref()
                .is_none_or(|filter| check.name.contains(filter))
        })
        .collect();

    let report = checks::run(&selected);
    println!(
        "{} passed, {} failed, {} total",
        report.passed,
        report.failed.len(),
        selected.len()
    );

    if !report.failed.is_empty() {
        bail!("failed checks: {}", report.failed.join(", "));
    }
    Ok(())
}

fn setup_logging(cli: &Cli) -> anyhow::Result<()> {
    let level = if cli.quiet { "warn" } else { cli.log_level.as_str() };
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!(level, "logging initialised");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rstest::rstest;

    #[rstest]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[rstest]
    fn test_parse_filter_and_quiet() {
        let cli = Cli::parse_from(["selftest", "--quiet", "--filter", "height"]);
        assert!(cli.quiet);
        assert_eq!(cli.filter.as_deref(), Some("height"));
    }
}
