//! Site logins loaded from an external file.
//!
//! Scenarios that sign in look their site up here; the scheduler itself
//! never touches credentials.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One site's login record, as it appears in the credential file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteLogin {
    pub site: String,
    pub username: String,
    pub password: String,
}

/// All logins supplied for a run.
///
/// The credential file is a JSON array of [`SiteLogin`] records:
///
/// ```json
/// [{ "site": "facebook", "username": "user@example.com", "password": "..." }]
/// ```
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    logins: Vec<SiteLogin>,
}

impl CredentialStore {
    /// Read and parse a credential file, failing with a descriptive error
    /// on either the read or the parse.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::CredentialsIo {
            path: path.to_path_buf(),
            source,
        })?;
        let logins = serde_json::from_str(&text).map_err(|source| Error::CredentialsParse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { logins })
    }

    /// A store with no logins. Scenarios that need one will fail with
    /// [`Error::MissingLogin`] when they ask.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_logins(logins: Vec<SiteLogin>) -> Self {
        Self { logins }
    }

    pub fn get(&self, site: &str) -> Option<&SiteLogin> {
        self.logins.iter().find(|login| login.site == site)
    }

    /// Like [`CredentialStore::get`], but absence is an error the caller
    /// can surface directly.
    pub fn require(&self, site: &str) -> Result<&SiteLogin> {
        self.get(site).ok_or_else(|| Error::MissingLogin(site.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.logins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_logins_from_json() {
        let file = write_file(
            r#"[
                { "site": "facebook", "username": "fb@example.com", "password": "hunter2" },
                { "site": "gmail", "username": "g@example.com", "password": "hunter3" }
            ]"#,
        );

        let store = CredentialStore::load(file.path()).unwrap();
        assert_eq!(store.get("facebook").unwrap().username, "fb@example.com");
        assert_eq!(store.get("gmail").unwrap().password, "hunter3");
        assert!(store.get("outlook").is_none());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let file = write_file("{ not json");
        let err = CredentialStore::load(file.path()).unwrap_err();
        assert!(matches!(err, Error::CredentialsParse { .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = CredentialStore::load(Path::new("/nonexistent/credentials.json")).unwrap_err();
        assert!(matches!(err, Error::CredentialsIo { .. }));
    }

    #[test]
    fn require_names_the_missing_site() {
        let store = CredentialStore::empty();
        let err = store.require("facebook").unwrap_err();
        assert!(err.to_string().contains("facebook"));
    }
}
