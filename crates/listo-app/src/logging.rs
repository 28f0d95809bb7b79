use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

/// Install a compact stderr subscriber for the host process.
///
/// Honors `RUST_LOG`; defaults to `info`. Calling it again is a no-op, which
/// returns false.
#[must_use]
pub fn install_tracing() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_span_events(FmtSpan::NONE)
        .compact()
        .try_init()
        .is_ok()
}
