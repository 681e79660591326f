#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("cannot find `{0}` in the endpoint registry")]
    UnknownEndpoint(String),

    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    EnvVar(#[from] EnvVarError),
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Transport(Box::new(e))
    }
}

#[derive(thiserror::Error, Debug)]
#[error("{source} ({var})")]
pub struct EnvVarError {
    var: String,
    #[source]
    source: std::env::VarError,
}

impl EnvVarError {
    pub fn new(var: &str, source: std::env::VarError) -> Self {
        Self {
            var: var.into(),
            source,
        }
    }

    pub fn var(&self) -> &str {
        &self.var
    }
}
