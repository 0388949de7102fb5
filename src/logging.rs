use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "pretty" | "compact" | "text" => Some(Self::Pretty),
            _ => None,
        }
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `level` when set.
pub fn init(format: &str, level: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let format = LogFormat::parse(format).unwrap_or_else(|| {
        eprintln!(
            "WARN: Invalid log format '{}', defaulting to 'pretty'. Valid options: json, pretty",
            format
        );
        LogFormat::Pretty
    });

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_timer(fmt::time::UtcTime::rfc_3339()),
            )
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().compact())
            .init(),
    }

    tracing::debug!(log_format = ?format, log_level = level, "Logging system initialized");
}
