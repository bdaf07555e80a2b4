use tracing_subscriber::{EnvFilter, filter::LevelFilter, fmt, prelude::*};

/// Install the global subscriber: compact output on stderr, so answers on
/// stdout stay clean.
///
/// `RUST_LOG` takes precedence over `level` when it is set.
pub fn init(level: LevelFilter) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

/// Map the CLI flags to a level: single problems show their debug output,
/// `--all` stays at info, `-v` raises and `--quiet` silences.
pub fn level_for(single_problem: bool, verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::OFF;
    }
    let base = verbosity.saturating_add(if single_problem { 2 } else { 1 });
    match base {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}
