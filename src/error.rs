use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub(crate) enum ScaffoldError {
    #[error("Title cannot be empty")]
    Validation,

    #[error("{0:?} already exists")]
    FileExists(PathBuf),

    #[error("could not write {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(test)]
    #[error("invalid front matter: {0}")]
    Parse(String),
}
