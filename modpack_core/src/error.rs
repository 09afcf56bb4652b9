use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("a modpack named '{0}' already exists")]
    AlreadyExists(String),
    #[error("no modpack named '{0}'")]
    NotFound(String),
    #[error("invalid modpack name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },
    #[error("i/o error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| StoreError::Io { path, source }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("unknown {kind} '{value}'")]
pub struct ParseSettingError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseSettingError {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
