use crate::config::TelemetryConfig;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Directives appended to a bare level so HTTP plumbing stays quiet.
const QUIET_DEPENDENCIES: &str = "hyper=warn,tower=warn";

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid log filter {directives:?}")]
    Filter {
        directives: String,
        #[source]
        source: ParseError,
    },
    #[error("tracing subscriber already installed: {0}")]
    Install(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => configured_filter(&config.log_level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .compact()
        .try_init()
        .map_err(TelemetryError::Install)
}

fn configured_filter(level: &str) -> Result<EnvFilter, TelemetryError> {
    let level = level.trim();
    let directives = if level.contains('=') {
        level.to_string()
    } else {
        format!("{level},{QUIET_DEPENDENCIES}")
    };

    EnvFilter::try_new(&directives).map_err(|source| TelemetryError::Filter { directives, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_filter_directives() {
        let error = configured_filter("pharma_intel=verbose").expect_err("invalid directive");
        assert!(error.to_string().contains("pharma_intel=verbose"));
    }

    #[test]
    fn accepts_plain_levels_and_module_directives() {
        assert!(configured_filter(" debug ").is_ok());
        assert!(configured_filter("info,pharma_intel::workflows=trace").is_ok());
    }

    #[test]
    fn bare_level_quiets_http_dependencies() {
        let filter = configured_filter("debug").expect("valid level");
        let rendered = filter.to_string();
        assert!(rendered.contains("hyper=warn"));
        assert!(rendered.contains("debug"));
    }
}
