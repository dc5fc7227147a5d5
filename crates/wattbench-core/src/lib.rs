pub mod browser;
pub mod credentials;
pub mod error;
pub mod plan;
pub mod scenario;
pub mod schedule;

pub use browser::BrowserKind;
pub use credentials::{CredentialStore, SiteLogin};
pub use error::{Error, Result};
pub use plan::RunPlan;
pub use scenario::{Scenario, ScenarioResult, SessionDriver};
