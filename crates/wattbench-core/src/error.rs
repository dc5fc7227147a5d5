use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown browser '{name}', expected one of: {known}")]
    UnknownBrowser { name: String, known: String },

    #[error("unknown scenario '{name}', expected one of: {known}")]
    UnknownScenario { name: String, known: String },

    #[error("a run plan needs at least one scenario")]
    EmptyPlan,

    #[error("loop count must be at least 1")]
    ZeroLoops,

    #[error("scenario '{scenario}' overran its slot: {elapsed:?} of work against a {slot:?} budget")]
    SlotOverrun {
        scenario: &'static str,
        slot: Duration,
        elapsed: Duration,
    },

    #[error("scenario '{name}' failed")]
    Scenario {
        name: &'static str,
        #[source]
        source: anyhow::Error,
    },

    #[error("session driver failed")]
    Driver(#[source] anyhow::Error),

    #[error("failed to read credentials from {path}")]
    CredentialsIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse credentials in {path}")]
    CredentialsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no login configured for site '{0}'")]
    MissingLogin(String),
}

pub type Result<T> = std::result::Result<T, Error>;
