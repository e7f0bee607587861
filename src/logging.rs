// SPDX-License-Identifier: MPL-2.0
//! Logging configuration using tracing.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter directives.
pub const ENV_LOG_FILTER: &str = "POLICY_PORTAL_LOG";

/// Filter used when [`ENV_LOG_FILTER`] is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "policy_portal=info,warn";

/// Initialize the logging subsystem.
///
/// Logs go to stderr. The level is controlled by `POLICY_PORTAL_LOG`:
///
/// ```bash
/// POLICY_PORTAL_LOG=policy_portal=debug policy_portal
/// ```
///
/// Calling this twice keeps the first subscriber.
pub fn init() {
    let env_filter = EnvFilter::try_from_env(ENV_LOG_FILTER)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init();

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
