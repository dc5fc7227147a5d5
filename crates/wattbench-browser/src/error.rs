use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to launch browser: {0}")]
    Launch(String),

    #[error("browser binary not found: {0}")]
    BinaryNotFound(String),

    #[error("navigation failed: {0}")]
    Navigation(String),

    #[error("element not found: {0}")]
    ElementNotFound(String),

    #[error("page script failed: {0}")]
    Script(String),

    #[error("timed out waiting for {0}")]
    Timeout(String),

    #[error("devtools error: {0}")]
    Cdp(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<chromiumoxide::error::CdpError> for Error {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        Error::Cdp(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
