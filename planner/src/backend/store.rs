use serde::de::IgnoredAny;
use std::fs;
use std::io;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("no plan published for {0}")]
    NotFound(String),
    #[error("reading plan {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("plan {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Directory of `<PROGRAM>.json` plan files served by the backend emulator.
#[derive(Debug, Clone)]
pub struct PlanStore {
    root: PathBuf,
}

impl PlanStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Loads the raw plan bytes for a program code exactly as stored.
    ///
    /// The file is checked for JSON syntax but never re-encoded, so repeated
    /// keys reach the client untouched.
    pub fn load(&self, code: &str) -> Result<Vec<u8>, StoreError> {
        if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(StoreError::NotFound(code.to_string()));
        }

        let path = self.root.join(format!("{}.json", code));
        let contents = match fs::read(&path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(code.to_string()))
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        serde_json::from_slice::<IgnoredAny>(&contents)
            .map_err(|source| StoreError::Parse { path, source })?;
        Ok(contents)
    }
}
