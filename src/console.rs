//! Log output for the command-line tools.
//!
//! ## Log Levels
//!
//! - **INFO**: Search start and end, with the number of paths checked
//! - **DEBUG**: One line per breadth-first generation
//! - **TRACE**: Every path taken off the frontier

use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

static INIT: OnceLock<()> = OnceLock::new();

/// Installs the log subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence; otherwise `verbosity` picks the level (0 = warn,
/// 1 = info, 2 = debug, 3+ = trace). Only the first call has effect.
pub fn init(verbosity: u8) {
    INIT.get_or_init(|| {
        let level = match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("crossing_solver={level}")));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
