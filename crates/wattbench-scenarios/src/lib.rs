//! Site scenarios and the registry that maps names to them.
//!
//! A scenario is opening a tab and doing something a person would do:
//! watching a video, browsing a feed, reading the news. Every scenario
//! declares a fixed slot duration; the scheduler in `wattbench-core`
//! guarantees the slot is honored regardless of how long the interaction
//! itself takes.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use wattbench_browser::BrowserSession;
use wattbench_core::{Error, Result, Scenario};

pub mod amazon;
pub mod facebook;
pub mod gmail;
pub mod google;
pub mod msn;
pub mod msnbc;
pub mod outlook;
pub mod reddit;
pub mod wikipedia;
pub mod youtube;

pub type SiteScenario = Arc<dyn Scenario<BrowserSession>>;

pub(crate) async fn pause(secs: u64) {
    tokio::time::sleep(Duration::from_secs(secs)).await;
}

/// Maps lowercase scenario names to instances. Populated once at startup;
/// instances live for the rest of the process.
pub struct ScenarioRegistry {
    scenarios: HashMap<&'static str, SiteScenario>,
}

impl ScenarioRegistry {
    /// A registry holding every site scenario, polished or not. Workloads
    /// are assembled from it by name; registration order does not matter.
    pub fn with_all_sites() -> Self {
        let mut registry = Self {
            scenarios: HashMap::new(),
        };
        registry.add(Arc::new(facebook::Facebook));
        registry.add(Arc::new(gmail::Gmail));
        registry.add(Arc::new(msn::Msn));
        registry.add(Arc::new(msnbc::Msnbc));
        registry.add(Arc::new(outlook::Outlook));
        registry.add(Arc::new(reddit::Reddit));
        registry.add(Arc::new(wikipedia::Wikipedia));
        registry.add(Arc::new(youtube::Youtube));
        registry.add(Arc::new(amazon::Amazon));
        registry.add(Arc::new(google::Google));
        registry
    }

    fn add(&mut self, scenario: SiteScenario) {
        let name = scenario.name();
        if self.scenarios.insert(name, scenario).is_some() {
            panic!("scenario '{name}' is already registered");
        }
    }

    pub fn get(&self, name: &str) -> Option<SiteScenario> {
        self.scenarios.get(name).cloned()
    }

    /// All registered names, sorted for display and error messages.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.scenarios.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// The standard measurement ordering, what `all` expands to.
    ///
    /// Reddit stays out of this list: back to back with amazon it
    /// destabilized one of the target browsers, and amazon kept the place.
    /// It remains individually selectable.
    pub fn curated(&self) -> Vec<SiteScenario> {
        ["youtube", "amazon", "facebook", "google", "gmail", "wikipedia"]
            .iter()
            .map(|name| self.get(name).expect("curated scenario missing"))
            .collect()
    }

    /// Map user-supplied names to instances, in order, repetition allowed.
    /// Fails on the first unknown name, naming the known set.
    pub fn resolve(&self, names: &[String]) -> Result<Vec<SiteScenario>> {
        names
            .iter()
            .map(|name| {
                self.get(name).ok_or_else(|| Error::UnknownScenario {
                    name: name.clone(),
                    known: self.names().join(", "),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_all_ten_sites() {
        let registry = ScenarioRegistry::with_all_sites();
        assert_eq!(
            registry.names(),
            vec![
                "amazon",
                "facebook",
                "gmail",
                "google",
                "msn",
                "msnbc",
                "outlook",
                "reddit",
                "wikipedia",
                "youtube",
            ]
        );
    }

    #[test]
    fn every_scenario_declares_a_positive_duration() {
        let registry = ScenarioRegistry::with_all_sites();
        for name in registry.names() {
            let scenario = registry.get(name).unwrap();
            assert!(
                scenario.duration() > Duration::ZERO,
                "{name} has a zero slot"
            );
            assert_eq!(scenario.name(), name);
        }
    }

    #[test]
    fn curated_ordering_is_stable() {
        let registry = ScenarioRegistry::with_all_sites();
        let names: Vec<_> = registry.curated().iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            vec!["youtube", "amazon", "facebook", "google", "gmail", "wikipedia"]
        );
    }

    #[test]
    fn resolve_preserves_order_and_repetition() {
        let registry = ScenarioRegistry::with_all_sites();
        let selected = registry
            .resolve(&[
                "wikipedia".to_string(),
                "youtube".to_string(),
                "wikipedia".to_string(),
            ])
            .unwrap();
        let names: Vec<_> = selected.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["wikipedia", "youtube", "wikipedia"]);
    }

    #[test]
    fn resolve_rejects_unknown_names_with_the_known_set() {
        let registry = ScenarioRegistry::with_all_sites();
        let err = registry.resolve(&["myspace".to_string()]).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("myspace"));
        assert!(message.contains("youtube"));
        assert!(message.contains("wikipedia"));
    }
}
