//! Logging setup, powered by tracing-subscriber.
//!
//! Activity records and diagnostics both go through `tracing`; this module
//! installs the subscriber that writes them to the log file and, optionally,
//! to stderr.

use std::fs::{self, OpenOptions};
use std::path::Path;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::Config;

/// Build the `EnvFilter` from the configured level, quieting the HTTP stack.
fn build_env_filter(level: &str) -> anyhow::Result<EnvFilter> {
    let mut directives = vec![level.to_string()];
    for (target, lvl) in [("actix_server", "warn"), ("actix_web", "warn")] {
        directives.push(format!("{}={}", target, lvl));
    }

    let filter_str = directives.join(",");
    EnvFilter::try_new(&filter_str)
        .map_err(|e| anyhow::anyhow!("Invalid tracing filter '{}': {}", filter_str, e))
}

/// Initialize logging from configuration.
///
/// Installs a file layer (append mode, no ANSI) and, when `log_to_console`
/// is set, a stderr layer. Fails if the log file cannot be opened or the
/// level is not a valid filter directive.
pub fn init_logging(config: &Config) -> anyhow::Result<()> {
    let file_path = &config.log_file;

    if let Some(parent) = Path::new(file_path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let log_file = OpenOptions::new().create(true).append(true).open(file_path)?;

    let console_layer = if config.log_to_console {
        Some(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(true)
                .with_target(true)
                .with_filter(build_env_filter(&config.log_level)?),
        )
    } else {
        None
    };

    let file_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(log_file))
        .with_target(true)
        .with_filter(build_env_filter(&config.log_level)?);

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    tracing::trace!(
        "Logging initialized: level={}, console={}, file={}",
        config.log_level,
        config.log_to_console,
        file_path.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_accepts_levels() {
        assert!(build_env_filter("info").is_ok());
        assert!(build_env_filter("debug").is_ok());
    }

    #[test]
    fn test_env_filter_rejects_garbage() {
        assert!(build_env_filter("sqlterp=notalevel").is_err());
    }
}
