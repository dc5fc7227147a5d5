use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{info, warn};

use wattbench_browser::{BrowserFinder, BrowserSession, ProfileDir, SessionLauncher};
use wattbench_core::{CredentialStore, RunPlan, schedule};
use wattbench_scenarios::ScenarioRegistry;

use crate::cli::RunOptions;
use crate::progress::RunProgress;

pub fn execute(options: RunOptions) -> Result<()> {
    // Everything that can be validated is validated before any browser
    // process exists.
    let registry = ScenarioRegistry::with_all_sites();
    let scenarios = if options.scenario.iter().any(|name| name == "all") {
        if options.scenario.len() > 1 {
            anyhow::bail!(
                "'all' selects the standard ordering and cannot be combined with other scenario names"
            );
        }
        registry.curated()
    } else {
        registry.resolve(&options.scenario)?
    };
    let plan = RunPlan::new(scenarios, options.loops)?;

    let logins = load_credentials(&options.config)?;

    let binary = BrowserFinder::new(options.browser, options.browser_path.clone()).find()?;
    let profile = match &options.profile {
        Some(name) => {
            let path = dirs::home_dir()
                .context("could not determine home directory")?
                .join(".wattbench")
                .join("profiles")
                .join(name);
            ProfileDir::persistent(path)?
        }
        None => ProfileDir::temporary()?,
    };

    let launcher = SessionLauncher::new(options.browser, binary, profile.path().to_path_buf());

    info!(
        browser = %options.browser,
        loops = plan.loops(),
        planned = ?plan.planned_duration(),
        "starting measurement run"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(async {
        let session = BrowserSession::launch(&launcher).await?;

        let progress = (!options.no_progress).then(|| RunProgress::start(plan.planned_duration()));

        let outcome = schedule::execute(&plan, &session, options.browser, &logins).await;

        if let Some(progress) = progress {
            progress.finish();
        }

        // Best effort; a close failure must not mask the run's outcome.
        if let Err(e) = session.close().await {
            warn!("failed to close browser session: {e}");
        }

        outcome.map_err(Into::into)
    });

    // Shut the runtime down promptly so lingering blocking tasks cannot
    // hold the process open.
    runtime.shutdown_timeout(Duration::from_millis(100));

    result
}

fn load_credentials(path: &Path) -> Result<CredentialStore> {
    if path.exists() {
        Ok(CredentialStore::load(path)?)
    } else {
        warn!(
            "no credential file at {}; scenarios that sign in will fail if selected",
            path.display()
        );
        Ok(CredentialStore::empty())
    }
}
