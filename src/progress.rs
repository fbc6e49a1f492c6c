//! Cosmetic terminal progress indicator.

use std::io::{self, IsTerminal, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

const FRAMES: [char; 4] = ['|', '/', '-', '\\'];
const TICK: Duration = Duration::from_millis(100);

/// Background spinner shown on stderr while a comparison runs.
///
/// Purely cosmetic: it never blocks the scan or diff work and is torn down
/// by flag as soon as the run finishes. Inert when stderr is not a
/// terminal, so piped and test runs see no control characters.
pub struct Spinner {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    /// Start spinning on a background thread.
    pub fn start(label: &str) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        if !io::stderr().is_terminal() {
            return Self { stop, handle: None };
        }

        let flag = Arc::clone(&stop);
        let label = label.to_string();
        let handle = thread::spawn(move || {
            let mut frames = FRAMES.iter().cycle();
            while !flag.load(Ordering::Relaxed) {
                if let Some(frame) = frames.next() {
                    let mut stderr = io::stderr();
                    let _ = write!(stderr, "\r{} {}", label, frame);
                    let _ = stderr.flush();
                }
                thread::park_timeout(TICK);
            }
        });
        Self {
            stop,
            handle: Some(handle),
        }
    }

    /// Stop the spinner and replace the line with `message`.
    pub fn finish(mut self, message: &str) {
        if self.halt() {
            let mut stderr = io::stderr();
            let _ = writeln!(stderr, "\r{}", message);
            let _ = stderr.flush();
        }
    }

    fn halt(&mut self) -> bool {
        self.stop.store(true, Ordering::Relaxed);
        match self.handle.take() {
            Some(handle) => {
                handle.thread().unpark();
                let _ = handle.join();
                true
            }
            None => false,
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.halt();
    }
}
