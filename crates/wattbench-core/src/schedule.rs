//! Runs a plan so that every scenario occupies exactly its declared slot.
//!
//! One monotonic clock is started when the run starts and read, never
//! reset, around each scenario. After a scenario returns, the remainder of
//! its slot is slept away, so the wall-clock shape of a run depends only on
//! the declared durations and never on page-load variance. That equality is
//! what makes power-meter ratios comparable across browsers and devices.

use tokio::time::Instant;
use tracing::{debug, info};

use crate::browser::BrowserKind;
use crate::credentials::CredentialStore;
use crate::error::{Error, Result};
use crate::plan::RunPlan;
use crate::scenario::SessionDriver;

/// Execute every (loop, scenario) pair of `plan` in order, strictly
/// sequentially, against a session the caller owns.
///
/// The very first scenario of the run reuses the tab the session came up
/// with; every later slot starts by opening and focusing a fresh tab so
/// history and cookies do not bleed between scenarios. Tab-opening latency
/// is charged to the slot it precedes.
///
/// Any scenario error, driver error, or slot overrun aborts the run as a
/// whole: nothing is retried and no later scenario executes. An overrun is
/// deliberately fatal rather than clamped; absorbing it would stretch
/// total run time away from the sum of declared durations and silently
/// invalidate the measurement. Releasing the session is the caller's job
/// and must happen on the error path too.
pub async fn execute<D: SessionDriver>(
    plan: &RunPlan<D>,
    driver: &D,
    browser: BrowserKind,
    logins: &CredentialStore,
) -> Result<()> {
    let clock = Instant::now();
    let mut awaiting_first = true;

    for loop_index in 0..plan.loops() {
        debug!(loop_index, "starting loop");

        for scenario in plan.scenarios() {
            let slot = scenario.duration();
            let started = clock.elapsed();

            if awaiting_first {
                // The session's initial tab serves the first slot.
                awaiting_first = false;
            } else {
                driver.open_tab_and_focus().await.map_err(Error::Driver)?;
            }

            info!(scenario = scenario.name(), ?slot, "running scenario");
            scenario
                .run(driver, browser, logins)
                .await
                .map_err(|source| Error::Scenario {
                    name: scenario.name(),
                    source,
                })?;

            let elapsed = clock.elapsed() - started;
            let remaining = slot.checked_sub(elapsed).ok_or(Error::SlotOverrun {
                scenario: scenario.name(),
                slot,
                elapsed,
            })?;

            debug!(scenario = scenario.name(), ?elapsed, ?remaining, "padding slot");
            tokio::time::sleep(remaining).await;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::{Scenario, ScenarioResult};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    #[derive(Default)]
    struct FakeDriver {
        tabs_opened: AtomicUsize,
        fail_on_open: bool,
    }

    #[async_trait]
    impl SessionDriver for FakeDriver {
        async fn open_tab_and_focus(&self) -> anyhow::Result<()> {
            if self.fail_on_open {
                anyhow::bail!("tab host went away");
            }
            self.tabs_opened.fetch_add(1, Ordering::Relaxed);
            Ok(())
        }
    }

    type RunLog = Arc<Mutex<Vec<&'static str>>>;

    #[derive(Debug)]
    struct TimedScenario {
        name: &'static str,
        slot: Duration,
        work: Duration,
        log: RunLog,
    }

    #[async_trait]
    impl Scenario<FakeDriver> for TimedScenario {
        fn name(&self) -> &'static str {
            self.name
        }

        fn duration(&self) -> Duration {
            self.slot
        }

        async fn run(
            &self,
            _driver: &FakeDriver,
            _browser: BrowserKind,
            _logins: &CredentialStore,
        ) -> ScenarioResult {
            self.log.lock().unwrap().push(self.name);
            tokio::time::sleep(self.work).await;
            Ok(())
        }
    }

    #[derive(Debug)]
    struct FailingScenario {
        name: &'static str,
        log: RunLog,
    }

    #[async_trait]
    impl Scenario<FakeDriver> for FailingScenario {
        fn name(&self) -> &'static str {
            self.name
        }

        fn duration(&self) -> Duration {
            Duration::from_secs(10)
        }

        async fn run(
            &self,
            _driver: &FakeDriver,
            _browser: BrowserKind,
            _logins: &CredentialStore,
        ) -> ScenarioResult {
            self.log.lock().unwrap().push(self.name);
            anyhow::bail!("element not found")
        }
    }

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    fn timed(
        log: &RunLog,
        name: &'static str,
        slot: u64,
        work: u64,
    ) -> Arc<dyn Scenario<FakeDriver>> {
        Arc::new(TimedScenario {
            name,
            slot: secs(slot),
            work: secs(work),
            log: log.clone(),
        })
    }

    fn plan(scenarios: Vec<Arc<dyn Scenario<FakeDriver>>>, loops: u32) -> RunPlan<FakeDriver> {
        RunPlan::new(scenarios, loops).unwrap()
    }

    async fn run(plan: &RunPlan<FakeDriver>, driver: &FakeDriver) -> Result<()> {
        execute(plan, driver, BrowserKind::Chrome, &CredentialStore::empty()).await
    }

    #[tokio::test(start_paused = true)]
    async fn slot_lasts_exactly_the_declared_duration() {
        let log = RunLog::default();
        let plan = plan(vec![timed(&log, "a", 30, 5)], 1);
        let driver = FakeDriver::default();

        let started = Instant::now();
        run(&plan, &driver).await.unwrap();

        assert_eq!(started.elapsed(), secs(30));
    }

    #[tokio::test(start_paused = true)]
    async fn total_run_time_is_loops_times_the_declared_sum() {
        let log = RunLog::default();
        let plan = plan(vec![timed(&log, "a", 10, 1)], 3);
        let driver = FakeDriver::default();

        let started = Instant::now();
        run(&plan, &driver).await.unwrap();

        assert_eq!(started.elapsed(), secs(30));
        assert_eq!(*log.lock().unwrap(), vec!["a", "a", "a"]);
    }

    #[tokio::test(start_paused = true)]
    async fn varying_work_does_not_change_the_slot_shape() {
        // Same plan, wildly different work times, identical wall clock.
        for work in [1, 8, 29] {
            let log = RunLog::default();
            let plan = plan(vec![timed(&log, "a", 30, work), timed(&log, "b", 20, 2)], 1);
            let driver = FakeDriver::default();

            let started = Instant::now();
            run(&plan, &driver).await.unwrap();

            assert_eq!(started.elapsed(), secs(50));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn first_slot_reuses_the_initial_tab() {
        let log = RunLog::default();
        let plan = plan(vec![timed(&log, "a", 10, 1)], 3);
        let driver = FakeDriver::default();

        run(&plan, &driver).await.unwrap();

        // Tabs before loop-2's and loop-3's slot, never before the first.
        assert_eq!(driver.tabs_opened.load(Ordering::Relaxed), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn every_slot_after_the_first_gets_a_fresh_tab() {
        let log = RunLog::default();
        let plan = plan(
            vec![
                timed(&log, "a", 10, 1),
                timed(&log, "b", 10, 1),
                timed(&log, "c", 10, 1),
            ],
            2,
        );
        let driver = FakeDriver::default();

        run(&plan, &driver).await.unwrap();

        assert_eq!(driver.tabs_opened.load(Ordering::Relaxed), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn overrun_aborts_before_the_next_scenario() {
        let log = RunLog::default();
        let plan = plan(
            vec![
                timed(&log, "a", 30, 5),
                timed(&log, "b", 20, 25),
                timed(&log, "c", 10, 1),
            ],
            1,
        );
        let driver = FakeDriver::default();

        let started = Instant::now();
        let err = run(&plan, &driver).await.unwrap_err();

        match err {
            Error::SlotOverrun {
                scenario,
                slot,
                elapsed,
            } => {
                assert_eq!(scenario, "b");
                assert_eq!(slot, secs(20));
                assert_eq!(elapsed, secs(25));
            }
            other => panic!("expected SlotOverrun, got {other:?}"),
        }

        // The run died the moment b's work finished, at t = 30 + 25.
        assert_eq!(started.elapsed(), secs(55));
        assert_eq!(*log.lock().unwrap(), vec!["a", "b"]);
    }

    #[tokio::test(start_paused = true)]
    async fn work_exactly_filling_the_slot_is_not_an_overrun() {
        let log = RunLog::default();
        let plan = plan(vec![timed(&log, "a", 10, 10)], 1);
        let driver = FakeDriver::default();

        let started = Instant::now();
        run(&plan, &driver).await.unwrap();

        assert_eq!(started.elapsed(), secs(10));
    }

    #[tokio::test(start_paused = true)]
    async fn scenario_failure_stops_the_run() {
        let log = RunLog::default();
        let plan = plan(
            vec![
                timed(&log, "a", 10, 1),
                Arc::new(FailingScenario {
                    name: "bad",
                    log: log.clone(),
                }),
                timed(&log, "c", 10, 1),
            ],
            1,
        );
        let driver = FakeDriver::default();

        let err = run(&plan, &driver).await.unwrap_err();

        assert!(matches!(err, Error::Scenario { name: "bad", .. }));
        assert_eq!(*log.lock().unwrap(), vec!["a", "bad"]);
    }

    #[tokio::test(start_paused = true)]
    async fn driver_failure_stops_the_run() {
        let log = RunLog::default();
        let plan = plan(vec![timed(&log, "a", 10, 1), timed(&log, "b", 10, 1)], 1);
        let driver = FakeDriver {
            fail_on_open: true,
            ..Default::default()
        };

        let err = run(&plan, &driver).await.unwrap_err();

        assert!(matches!(err, Error::Driver(_)));
        // The first slot needs no tab, so only "a" ever ran.
        assert_eq!(*log.lock().unwrap(), vec!["a"]);
    }
}
