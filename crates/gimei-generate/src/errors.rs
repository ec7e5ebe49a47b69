use std::path::PathBuf;

use thiserror::Error;

use crate::corpus::CorpusGroup;

/// Errors emitted while loading the reference corpus.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("failed to read asset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid {group} data: {source}")]
    Yaml {
        group: CorpusGroup,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("table '{0}' has no rows")]
    EmptyTable(&'static str),
}
