use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global logger once. Idempotent; call early in `main`.
///
/// Filter resolution order: the `filter` argument (env_logger syntax, e.g.
/// `"nabu_engine=debug,wgpu=warn"`), then `RUST_LOG`, then info level.
pub fn init(filter: Option<&str>) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = filter {
            builder.parse_filters(filter);
        } else if let Ok(env) = std::env::var("RUST_LOG") {
            builder.parse_filters(&env);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.init();
        log::debug!("logging initialized");
    });
}
