use crate::config::TelemetryConfig;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("PARKING_LOG_LEVEL '{value}' is not a valid tracing filter")]
    EnvFilter {
        value: String,
        #[source]
        source: ParseError,
    },
    #[error("could not install the log subscriber: {0}")]
    Subscriber(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Install the global subscriber. `RUST_LOG` takes precedence over the configured level.
///
/// Events go to stderr so they never interleave with console replies on stdout.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => build_filter(&config.log_level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

fn build_filter(level: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(level).map_err(|source| TelemetryError::EnvFilter {
        value: level.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_levels_and_directives() {
        build_filter("debug").expect("plain level parses");
        build_filter("parking_attendant=trace,warn").expect("directives parse");
    }

    #[test]
    fn rejects_malformed_filters() {
        match build_filter("parking_attendant=loud") {
            Err(err @ TelemetryError::EnvFilter { .. }) => assert_eq!(
                err.to_string(),
                "PARKING_LOG_LEVEL 'parking_attendant=loud' is not a valid tracing filter"
            ),
            other => panic!("expected env filter error, got {other:?}"),
        }
    }
}
