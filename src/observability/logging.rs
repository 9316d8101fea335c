//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once, in the binary
//! - Default directive when `RUST_LOG` is unset
//!
//! Unlock secrets never reach the logging sink: the secret type redacts
//! itself in `Debug` and `Display`, so no call site can leak it by
//! accident.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
///
/// Honors `RUST_LOG` when set; otherwise falls back to
/// `stake_facilitator=info`.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stake_facilitator=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
