pub mod build_info;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Default filter applied when `RUST_LOG` does not mention this crate.
const DEFAULT_DIRECTIVE: &str = "cgpa_calc=info";

/// Initializes the global tracing subscriber, logging to stderr so script
/// output on stdout stays clean.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = DEFAULT_DIRECTIVE.parse() {
            filter = filter.add_directive(directive);
        }

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
