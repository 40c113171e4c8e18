//! Tracing setup for the binary.

use tracing_subscriber::EnvFilter;

/// Filter directive implied by the verbosity flags, if any
pub fn flag_directive(verbose: bool, quiet: bool) -> Option<&'static str> {
    if verbose {
        Some("debug")
    } else if quiet {
        Some("warn")
    } else {
        None
    }
}

/// Build the log filter
///
/// Explicit flags win over `RUST_LOG`; with neither, the level is `info`.
pub fn build_filter(verbose: bool, quiet: bool) -> EnvFilter {
    match flag_directive(verbose, quiet) {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    }
}

/// Install the global subscriber, logging to stderr
pub fn init(verbose: bool, quiet: bool) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(build_filter(verbose, quiet))
        .with_target(false)
        .init();
}
