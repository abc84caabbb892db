use std::sync::Once;
use tracing_forest::{ForestLayer, PrettyPrinter};
use tracing_subscriber::{
    filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry,
};

static INIT: Once = Once::new();

/// Install the global subscriber once per process.
///
/// `RUST_LOG` selects the level, `info` by default. Step-by-step traces of each multiplication
/// are logged at `debug`. Logs are written to stderr, leaving stdout to command output.
pub fn setup_logger() {
    INIT.call_once(|| {
        let env_filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy();

        // Another subscriber may already be installed by the host application.
        let _ = Registry::default()
            .with(env_filter)
            .with(ForestLayer::from(
                PrettyPrinter::new().writer(std::io::stderr),
            ))
            .try_init();
    });
}
