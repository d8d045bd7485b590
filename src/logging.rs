//! Logging setup for binaries and tests.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the caller.

use tracing_subscriber::EnvFilter;

/// Environment variable read when no explicit filter is given
pub const LOG_ENV: &str = "DUNGEON_LOG";
const DEFAULT_FILTER: &str = "warn";

/// Install a fmt subscriber writing to stderr.
///
/// `filter` takes `EnvFilter` directives such as `seeded_dungeon=debug`.
/// Without one, `DUNGEON_LOG` is used, then `warn`. Calling this again after
/// a subscriber is installed does nothing.
pub fn init(filter: Option<&str>) {
    let filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
