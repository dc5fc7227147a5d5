//! Progress display for a measurement run.

use std::cmp::min;
use std::fmt::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressState, ProgressStyle};

/// A progress bar sized to the plan's total wall-clock duration.
///
/// The scheduler keeps the run glued to that total, so elapsed time is the
/// position; nothing needs to report progress explicitly.
pub struct RunProgress {
    stop: Arc<AtomicBool>,
    thread: std::thread::JoinHandle<()>,
}

impl RunProgress {
    pub fn start(planned: Duration) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = stop.clone();

        let thread = std::thread::Builder::new()
            .name("progress".to_string())
            .spawn(move || {
                let started = Instant::now();
                let bar = ProgressBar::new(planned.as_secs());
                bar.set_style(
                    ProgressStyle::with_template(
                        "{spinner:.green} [{wide_bar:.cyan/blue}] [{elapsed_precise} / {planned}]",
                    )
                    .expect("Failed to set progress style")
                    .with_key("planned", {
                        let hours = planned.as_secs() / 3600;
                        let minutes = (planned.as_secs() % 3600) / 60;
                        let seconds = planned.as_secs() % 60;
                        move |_state: &ProgressState, w: &mut dyn Write| {
                            write!(w, "{hours:02}:{minutes:02}:{seconds:02}")
                                .expect("Could not write planned duration")
                        }
                    })
                    .progress_chars("#>-"),
                );

                while !stop_flag.load(Ordering::Relaxed) {
                    bar.set_position(min(started.elapsed().as_secs(), planned.as_secs()));
                    std::thread::sleep(Duration::from_secs(1));
                }

                bar.finish_and_clear();
            })
            .expect("Failed to start progress thread");

        Self { stop, thread }
    }

    /// Stop the display. Called on success and failure alike, before the
    /// session is released, so the bar never outlives the run.
    pub fn finish(self) {
        self.stop.store(true, Ordering::Relaxed);
        let _ = self.thread.join();
    }
}
