//! Terminal colors, applied only when the target stream is a terminal

use crossterm::style::{StyledContent, Stylize};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutputStyle {
    use_colors: bool,
}

impl OutputStyle {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Colors on when stdout is a TTY
    pub fn detect() -> Self {
        Self::new(atty::is(atty::Stream::Stdout))
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn use_colors(&self) -> bool {
        self.use_colors
    }

    fn apply(&self, text: &str, styler: impl Fn(&str) -> StyledContent<&str>) -> String {
        if self.use_colors {
            styler(text).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn heading(&self, text: &str) -> String {
        self.apply(text, |t| t.bold())
    }

    pub fn header(&self, text: &str) -> String {
        self.apply(text, |t| t.bold().cyan())
    }

    pub fn accent(&self, text: &str) -> String {
        self.apply(text, |t| t.cyan())
    }

    pub fn highlight(&self, text: &str) -> String {
        self.apply(text, |t| t.bold().green())
    }

    pub fn price(&self, text: &str) -> String {
        self.apply(text, |t| t.green())
    }

    pub fn dim(&self, text: &str) -> String {
        self.apply(text, |t| t.dim())
    }

    pub fn warning(&self, text: &str) -> String {
        self.apply(text, |t| t.yellow())
    }

    pub fn success_mark(&self) -> String {
        self.apply("✓", |t| t.green())
    }

    pub fn error_mark(&self) -> String {
        self.apply("✗", |t| t.red())
    }
}

/// `✓ <message>` on stdout
pub fn print_success(message: &str) {
    println!("{} {}", OutputStyle::detect().success_mark(), message);
}

/// `✗ <message>` on stderr
pub fn print_error(message: &str) {
    let style = OutputStyle::new(atty::is(atty::Stream::Stderr));
    eprintln!("{} {}", style.error_mark(), message);
}
