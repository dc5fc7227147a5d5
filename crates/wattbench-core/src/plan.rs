use std::sync::Arc;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::scenario::{Scenario, SessionDriver};

/// The ordered, repeatable list of scenarios selected for one measurement
/// run.
///
/// Built once from user selection before any browser launches; immutable
/// while the run executes. The same scenario may appear more than once.
#[derive(Debug)]
pub struct RunPlan<D: SessionDriver> {
    scenarios: Vec<Arc<dyn Scenario<D>>>,
    loops: u32,
}

impl<D: SessionDriver> RunPlan<D> {
    pub fn new(scenarios: Vec<Arc<dyn Scenario<D>>>, loops: u32) -> Result<Self> {
        if scenarios.is_empty() {
            return Err(Error::EmptyPlan);
        }
        if loops == 0 {
            return Err(Error::ZeroLoops);
        }
        Ok(Self { scenarios, loops })
    }

    pub fn scenarios(&self) -> &[Arc<dyn Scenario<D>>] {
        &self.scenarios
    }

    pub fn loops(&self) -> u32 {
        self.loops
    }

    /// Wall-clock time the plan will occupy if nothing overruns: loop
    /// count times the sum of declared durations.
    pub fn planned_duration(&self) -> Duration {
        self.scenarios.iter().map(|s| s.duration()).sum::<Duration>() * self.loops
    }
}
