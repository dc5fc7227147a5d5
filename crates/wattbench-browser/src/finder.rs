use std::path::{Path, PathBuf};

use wattbench_core::BrowserKind;

use crate::error::{Error, Result};

/// Locates the binary for a browser kind on the system.
pub struct BrowserFinder {
    kind: BrowserKind,
    custom_path: Option<PathBuf>,
}

impl BrowserFinder {
    /// A finder for `kind`, checking `custom_path` first when supplied.
    pub fn new(kind: BrowserKind, custom_path: Option<PathBuf>) -> Self {
        Self { kind, custom_path }
    }

    /// Find the browser binary: custom path, then platform defaults, then
    /// a `$PATH` lookup.
    pub fn find(&self) -> Result<PathBuf> {
        if let Some(ref path) = self.custom_path {
            return self.validate_binary(path);
        }

        let default_paths = Self::default_paths(self.kind);
        for path in &default_paths {
            if let Ok(valid_path) = self.validate_binary(path) {
                return Ok(valid_path);
            }
        }

        for name in Self::path_names(self.kind) {
            if let Ok(path) = which::which(name) {
                return Ok(path);
            }
        }

        Err(Error::BinaryNotFound(format!(
            "no {} binary. Checked: {}, and $PATH for: {}. Use --browser-path to specify a location.",
            self.kind,
            default_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", "),
            Self::path_names(self.kind).join(", "),
        )))
    }

    /// Platform default install paths for `kind`.
    fn default_paths(kind: BrowserKind) -> Vec<PathBuf> {
        #[cfg(target_os = "macos")]
        let candidates: &[&str] = match kind {
            BrowserKind::Chrome => {
                &["/Applications/Google Chrome.app/Contents/MacOS/Google Chrome"]
            }
            BrowserKind::Chromium => &["/Applications/Chromium.app/Contents/MacOS/Chromium"],
            BrowserKind::Edge => &["/Applications/Microsoft Edge.app/Contents/MacOS/Microsoft Edge"],
        };

        #[cfg(target_os = "linux")]
        let candidates: &[&str] = match kind {
            BrowserKind::Chrome => &[
                "/usr/bin/google-chrome",
                "/usr/bin/google-chrome-stable",
                "/opt/google/chrome/chrome",
            ],
            BrowserKind::Chromium => &[
                "/usr/bin/chromium",
                "/usr/bin/chromium-browser",
                "/snap/bin/chromium",
            ],
            BrowserKind::Edge => &[
                "/usr/bin/microsoft-edge",
                "/usr/bin/microsoft-edge-stable",
            ],
        };

        #[cfg(target_os = "windows")]
        let candidates: &[&str] = match kind {
            BrowserKind::Chrome => &[
                r"C:\Program Files\Google\Chrome\Application\chrome.exe",
                r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe",
            ],
            BrowserKind::Chromium => &[r"C:\Program Files\Chromium\Application\chrome.exe"],
            BrowserKind::Edge => &[
                r"C:\Program Files (x86)\Microsoft\Edge\Application\msedge.exe",
                r"C:\Program Files\Microsoft\Edge\Application\msedge.exe",
            ],
        };

        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        let candidates: &[&str] = &[];

        candidates.iter().map(PathBuf::from).collect()
    }

    /// Names to try on `$PATH` for `kind`.
    fn path_names(kind: BrowserKind) -> &'static [&'static str] {
        match kind {
            BrowserKind::Chrome => &["google-chrome", "google-chrome-stable"],
            BrowserKind::Chromium => &["chromium", "chromium-browser"],
            BrowserKind::Edge => &["microsoft-edge", "microsoft-edge-stable"],
        }
    }

    /// Validate that a path exists and is executable.
    fn validate_binary(&self, path: &Path) -> Result<PathBuf> {
        if !path.exists() {
            return Err(Error::BinaryNotFound(format!(
                "no {} binary at: {}",
                self.kind,
                path.display()
            )));
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let metadata = std::fs::metadata(path).map_err(Error::Io)?;
            if metadata.permissions().mode() & 0o111 == 0 {
                return Err(Error::BinaryNotFound(format!(
                    "{} binary not executable: {}",
                    self.kind,
                    path.display()
                )));
            }
        }

        Ok(path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_a_custom_path() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        let path = temp.path();

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
        }

        let finder = BrowserFinder::new(BrowserKind::Chrome, Some(path.to_path_buf()));
        assert_eq!(finder.find().unwrap(), path);
    }

    #[test]
    fn missing_custom_path_fails() {
        let finder = BrowserFinder::new(
            BrowserKind::Chromium,
            Some(PathBuf::from("/nonexistent/chromium")),
        );
        let err = finder.find().unwrap_err();
        assert!(err.to_string().contains("/nonexistent/chromium"));
        assert!(err.to_string().contains("chromium"));
    }

    #[cfg(unix)]
    #[test]
    fn non_executable_custom_path_fails() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::NamedTempFile::new().unwrap();
        std::fs::set_permissions(temp.path(), std::fs::Permissions::from_mode(0o644)).unwrap();

        let finder = BrowserFinder::new(BrowserKind::Chrome, Some(temp.path().to_path_buf()));
        let err = finder.find().unwrap_err();
        assert!(err.to_string().contains("not executable"));
    }

    #[test]
    fn every_kind_has_path_names() {
        for kind in BrowserKind::ALL {
            assert!(!BrowserFinder::path_names(kind).is_empty());
        }
    }
}
