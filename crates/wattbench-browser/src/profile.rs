use std::path::{Path, PathBuf};

use crate::error::Result;

/// The user-data directory a session runs against.
///
/// A measurement run normally gets a throwaway profile so cached state from
/// a previous run cannot skew page-load work. A persistent profile is for
/// scenarios that want a signed-in browser prepared ahead of time.
pub struct ProfileDir {
    path: PathBuf,
    // Owns cleanup for throwaway profiles; None for persistent ones.
    temp: Option<tempfile::TempDir>,
}

impl ProfileDir {
    /// A fresh profile directory, removed when the value is dropped.
    pub fn temporary() -> Result<Self> {
        let temp = tempfile::Builder::new()
            .prefix("wattbench-profile-")
            .tempdir()?;
        Ok(Self {
            path: temp.path().to_path_buf(),
            temp: Some(temp),
        })
    }

    /// Use (creating if needed) a profile directory that outlives the run.
    pub fn persistent(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            std::fs::create_dir_all(&path)?;
        }
        Ok(Self { path, temp: None })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_temporary(&self) -> bool {
        self.temp.is_some()
    }
}
