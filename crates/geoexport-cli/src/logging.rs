use anyhow::Context;
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// Logs go to stderr so stdout carries only the human-readable output. The
/// filter comes from `--log-level` / `GEOEXPORT_LOG`, then `RUST_LOG`, then
/// defaults to `warn`. An explicit filter that does not parse is an error.
pub fn init_logging(filter: Option<&str>) -> anyhow::Result<()> {
    let filter = build_filter(filter)?;

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    Ok(())
}

fn build_filter(explicit: Option<&str>) -> anyhow::Result<EnvFilter> {
    match explicit {
        Some(f) => EnvFilter::try_new(f).with_context(|| format!("invalid log filter `{f}`")),
        None => Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))),
    }
}
