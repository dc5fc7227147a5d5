use std::path::{Path, PathBuf};

use chromiumoxide::browser::BrowserConfig;
use wattbench_core::BrowserKind;

use crate::error::{Error, Result};

/// Assembles the launch configuration for one browser session.
pub struct SessionLauncher {
    kind: BrowserKind,
    executable: PathBuf,
    profile_dir: PathBuf,
    window: (u32, u32),
}

impl SessionLauncher {
    pub fn new(kind: BrowserKind, executable: PathBuf, profile_dir: PathBuf) -> Self {
        Self {
            kind,
            executable,
            profile_dir,
            window: (1920, 1080),
        }
    }

    pub fn window_size(mut self, width: u32, height: u32) -> Self {
        self.window = (width, height);
        self
    }

    pub fn kind(&self) -> BrowserKind {
        self.kind
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Command-line switches beyond what the driver sets itself.
    fn extra_args(&self) -> Vec<String> {
        vec![
            // First-run and default-browser prompts would steal the first
            // slot's wall clock.
            "--no-first-run".to_string(),
            "--no-default-browser-check".to_string(),
            // Some login flows open their dialog in a popup.
            "--disable-popup-blocking".to_string(),
        ]
    }

    /// Build the driver configuration. Always headed: a power run measures
    /// what a user-visible browser does, and headless changes the workload.
    pub fn browser_config(&self) -> Result<BrowserConfig> {
        BrowserConfig::builder()
            .with_head()
            .chrome_executable(&self.executable)
            .user_data_dir(&self.profile_dir)
            .window_size(self.window.0, self.window.1)
            .args(self.extra_args())
            .build()
            .map_err(Error::Launch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn launcher() -> SessionLauncher {
        SessionLauncher::new(
            BrowserKind::Chrome,
            PathBuf::from("/usr/bin/google-chrome"),
            PathBuf::from("/tmp/profile"),
        )
    }

    #[test]
    fn extra_args_disable_first_run_noise() {
        let args = launcher().extra_args();
        assert!(args.contains(&"--no-first-run".to_string()));
        assert!(args.contains(&"--no-default-browser-check".to_string()));
        assert!(args.contains(&"--disable-popup-blocking".to_string()));
    }

    #[test]
    fn browser_config_builds() {
        assert!(launcher().browser_config().is_ok());
    }

    #[test]
    fn window_size_is_configurable() {
        let launcher = launcher().window_size(1280, 720);
        assert_eq!(launcher.window, (1280, 720));
    }
}
