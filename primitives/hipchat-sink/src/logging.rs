use tracing::Dispatch;
use tracing_subscriber::{EnvFilter, fmt::MakeWriter};

/// Filter used when `RUST_LOG` is not set.
pub fn default_directive(debug: bool) -> &'static str {
    if debug { "hipchat_sink=debug,warn" } else { "warn" }
}

/// Builds the log dispatcher handed to the sender.
///
/// `RUST_LOG` takes precedence. Otherwise only warnings and errors are shown,
/// unless `debug` is set.
pub fn dispatch(debug: bool) -> Dispatch {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

    dispatch_to(filter, std::io::stderr, true)
}

/// Builds a dispatcher writing formatted events to `writer`.
pub fn dispatch_to<W>(filter: EnvFilter, writer: W, ansi: bool) -> Dispatch
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false)
        .finish();

    Dispatch::new(subscriber)
}
