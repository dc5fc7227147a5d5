//! The scenario and session-driver capabilities the scheduler runs against.

use std::time::Duration;

use async_trait::async_trait;

use crate::browser::BrowserKind;
use crate::credentials::CredentialStore;

/// Outcome of one scenario pass. Success carries no value: a scenario
/// passed if it returned without error and fit inside its slot.
pub type ScenarioResult = anyhow::Result<()>;

/// The slice of a live browser session the scheduler itself needs.
///
/// Scenarios interact with the concrete session type; the scheduler only
/// ever asks for tab isolation between slots.
#[async_trait]
pub trait SessionDriver: Send + Sync {
    /// Open a fresh tab and make it the focused target for whatever runs
    /// next. Latency here is charged to the upcoming slot.
    async fn open_tab_and_focus(&self) -> anyhow::Result<()>;
}

/// A named, fixed-duration unit of scripted browser interaction.
///
/// Instances are constructed once when the registry is populated and live
/// for the rest of the process.
#[async_trait]
pub trait Scenario<D: SessionDriver>: Send + Sync + std::fmt::Debug {
    /// Unique lowercase identifier used for selection on the command line.
    fn name(&self) -> &'static str;

    /// The wall-clock slot this scenario must occupy, work plus padding.
    /// Always positive.
    fn duration(&self) -> Duration;

    /// Drive the browser. Control is fully ceded here; the scenario may
    /// navigate, click, and scroll for as long as it likes, but it is
    /// expected to finish well inside `duration`. The scheduler sleeps
    /// out the remainder and treats an overrun as fatal.
    async fn run(&self, driver: &D, browser: BrowserKind, logins: &CredentialStore)
    -> ScenarioResult;
}
