use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt::format;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::prelude::*;

/// Logs to stderr without timestamps. `RUST_LOG` overrides the default
/// level, which is `info`, or `debug` when verbose.
pub fn init_logger(verbose: bool) {
    struct NoTime;
    impl FormatTime for NoTime {
	fn format_time(&self, _: &mut format::Writer<'_>) -> std::fmt::Result {
	    Ok(())
	}
    }

    let format = format()
	.with_timer(NoTime)
	.with_level(true)
	.with_target(false)
	.with_ansi(true);

    let default_level = if verbose { LevelFilter::DEBUG } else { LevelFilter::INFO };
    let filter = EnvFilter::builder()
	.with_default_directive(default_level.into())
	.from_env_lossy();

    tracing_subscriber::registry()
	.with(
	    tracing_subscriber::fmt::layer()
		.event_format(format)
		.with_writer(std::io::stderr)
		.with_filter(filter),
	)
	.init();
}
