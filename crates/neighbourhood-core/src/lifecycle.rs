use tracing_subscriber::EnvFilter;

/// Default directives: the embedded SurrealDB engine logs a lot at info,
/// which drowns out the login flow's own events.
const DEFAULT_FILTER: &str = "info,surrealdb=warn,surrealdb_core=warn";

/// Initialize tracing with env filter support.
///
/// Set `RUST_LOG=debug` for verbose output, defaults to [`DEFAULT_FILTER`].
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_parses() {
        let filter: EnvFilter = DEFAULT_FILTER.parse().expect("default filter must parse");
        let rendered = filter.to_string();
        assert!(rendered.contains("surrealdb=warn"));
    }
}
