//! # Supply-Chain Telemetry
//!
//! Logging setup shared by the Supply-Chain Tracker crates.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sc_telemetry::{init_logging, TelemetryConfig};
//!
//! fn main() {
//!     let config = TelemetryConfig::from_env();
//!     init_logging(&config).expect("Failed to init logging");
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OTEL_SERVICE_NAME` | `supply-chain-tracker` | Service name in logs |
//! | `SC_LOG_LEVEL` | `info` | Log level filter |
//! | `SC_JSON_LOGS` | `false` | JSON output |
//! | `SC_CONSOLE_OUTPUT` | `true` | Write logs to stdout |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::init_logging;

use thiserror::Error;

/// Subsystem label for the contract-state crate.
pub const CONTRACT_STATE: &str = "contract-state";
/// Subsystem label for the client-views crate.
pub const CLIENT_VIEWS: &str = "client-views";

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to install tracing subscriber: {0}")]
    SubscriberInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Convenience macro for creating a span with subsystem context.
///
/// ```rust,ignore
/// let _span = subsystem_span!("submit_batch", subsystem = "client-views", batch_id = 7);
/// ```
#[macro_export]
macro_rules! subsystem_span {
    ($name:expr, $($field:tt)*) => {
        tracing::info_span!($name, $($field)*)
    };
}
