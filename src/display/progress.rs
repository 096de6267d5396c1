//! Progress spinner shown while a request is in flight

use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

const SPINNER_UPDATE_INTERVAL_MS: u64 = 100;
const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Spinner on stderr; a no-op when stderr is not a terminal
pub struct ProgressSpinner {
    message: String,
    enabled: bool,
    running: Arc<AtomicBool>,
    handle: Option<thread::JoinHandle<()>>,
}

impl ProgressSpinner {
    pub fn new(message: String) -> Self {
        Self {
            message,
            enabled: atty::is(atty::Stream::Stderr),
            running: Arc::new(AtomicBool::new(false)),
            handle: None,
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub fn start(&mut self) {
        if !self.enabled || self.handle.is_some() {
            return;
        }

        self.running.store(true, Ordering::Relaxed);
        let running = Arc::clone(&self.running);
        let message = self.message.clone();

        let handle = thread::spawn(move || {
            let mut index = 0;
            let mut stderr = io::stderr();

            while running.load(Ordering::Relaxed) {
                let _ = write!(stderr, "\r{} {}", SPINNER_CHARS[index], message);
                let _ = stderr.flush();

                index = (index + 1) % SPINNER_CHARS.len();
                thread::sleep(Duration::from_millis(SPINNER_UPDATE_INTERVAL_MS));
            }

            // Spinner glyph + space + message
            let clear_width = message.chars().count() + 2;
            let _ = write!(stderr, "\r{:<width$}\r", "", width = clear_width);
            let _ = stderr.flush();
        });

        self.handle = Some(handle);
    }

    /// Stop and erase the spinner line
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::Relaxed);

        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for ProgressSpinner {
    fn drop(&mut self) {
        self.stop();
    }
}
