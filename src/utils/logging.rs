//! Verbose diagnostics, enabled by the global `--verbose` flag.
//!
//! Everything goes to stderr so stdout stays clean for `--json` output.

pub fn print_verbose(verbose: bool, msg: &str) {
    if verbose {
        eprintln!("Verbose: {}", msg);
    }
}

/// `print_verbose` bound to a fixed flag, for components that log repeatedly
#[derive(Debug, Clone, Copy)]
pub struct VerboseLogger {
    enabled: bool,
}

impl VerboseLogger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn log(&self, msg: &str) {
        print_verbose(self.enabled, msg);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}
