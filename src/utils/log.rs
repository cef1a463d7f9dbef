// src/utils/log.rs

//! Logging setup for the codec.
//!
//! The library itself emits records through the `log` facade (`debug!` for
//! table and stream summaries, `trace!` for per-code listings, `warn!` when a
//! stream is rejected). Applications that do not already have a logger can
//! install a `tracing` subscriber here, which also picks up `log` records.
//!
//! ```
//! huffman_codec::utils::log::init_subscriber(tracing::Level::DEBUG);
//! ```

pub use log::{debug, error, info, trace, warn};
pub use tracing::Level;

/// Installs a global subscriber that writes to standard error.
///
/// Returns `false` if a global subscriber (or `log` logger) was already set,
/// in which case the existing one is left in place.
///
/// # Arguments
/// * `max_level` - The maximum level of messages to log (e.g., `Level::INFO`, `Level::DEBUG`).
pub fn init_subscriber(max_level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_thread_ids(true)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
