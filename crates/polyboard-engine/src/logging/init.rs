use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// `filter` follows the `env_logger` syntax (e.g. "info",
/// "polyboard_engine=debug"). When `None`, `RUST_LOG` is honored and the
/// default level is info. Subsequent calls are ignored; intended usage is
/// early in `main`.
pub fn init_logging(filter: Option<&str>) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = filter {
            builder.parse_filters(filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.init();
        log::debug!("logging initialized");
    });
}
