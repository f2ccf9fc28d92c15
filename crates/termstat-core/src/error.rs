/// Errors that can occur in Termstat operations.
#[derive(Debug, thiserror::Error)]
pub enum TermstatError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("config error: {0}")]
    Config(String),
}

impl From<std::io::Error> for TermstatError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
