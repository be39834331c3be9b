use tracing_subscriber::EnvFilter;

/// Environment variable read for the filter when none is passed explicitly.
pub const LOG_ENV: &str = "COLORSHELL_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

/// Install a stderr `fmt` subscriber.
///
/// Filter precedence: `directive`, then `COLORSHELL_LOG`, then `warn`. An
/// unparseable directive also falls back to `warn`. Returns `false` when a
/// global subscriber is already set.
pub fn init(directive: Option<&str>) -> bool {
    let filter = match directive {
        Some(directive) => EnvFilter::try_new(directive).ok(),
        None => EnvFilter::try_from_env(LOG_ENV).ok(),
    }
    .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
