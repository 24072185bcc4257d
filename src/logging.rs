use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static INIT: Once = Once::new();

/// Initialize the tracing system
///
/// This function sets up tracing with an `EnvFilter` that:
/// - Honors the `RUST_LOG` environment variable if set
/// - Uses the `SYSCALLGEN_DEBUG` environment variable to enable debug output
/// - Only logs warnings and errors by default
pub fn init() {
	INIT.call_once(|| {
		let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
			if std::env::var("SYSCALLGEN_DEBUG").is_ok() {
				EnvFilter::new("syscallgen=debug")
			} else {
				EnvFilter::new("syscallgen=warn")
			}
		});

		tracing_subscriber::registry()
			.with(fmt::layer().with_target(true).with_writer(std::io::stderr))
			.with(filter)
			.init();
	});
}
