use thiserror::Error;

/// Every way the opportunities load can fail. Callers treat all variants
/// alike; the variant only shapes the log message.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {location}: {source}")]
    Read {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to fetch {location}: {source}")]
    Fetch {
        location: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to parse {location}: {source}")]
    Parse {
        location: String,
        #[source]
        source: serde_json::Error,
    },
}
