//! Command execution for the CSV query CLI
//!
//! Runs the single load -> filter -> aggregate -> render pipeline and
//! owns logging setup. All errors propagate to `main`, which reports
//! them and exits non-zero.

use tracing::debug;

use crate::Result;
use crate::cli::args::Args;
use crate::render;
use crate::table::Table;

/// Run the query pipeline described by the CLI arguments.
///
/// The table is owned here and passed by mutable reference into the
/// filter and aggregate steps; rendering goes to stdout.
pub fn run(args: Args) -> Result<()> {
    setup_logging(&args);

    let mut table = Table::from_path(&args.file)?;

    if let Some(condition) = &args.filter {
        table.filter(condition)?;
    }

    if let Some(condition) = &args.aggregate {
        table.aggregate(condition)?;
    }

    println!("{}", render::render(&table, args.format, args.headers));
    Ok(())
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("csvquery={}", args.log_level())));

    // Logs go to stderr so stdout stays clean for the rendered table.
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", args.log_level());
}
