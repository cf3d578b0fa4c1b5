//! Colored terminal output.
//!
//! Human-readable messages go to stderr; machine-readable data goes to stdout.

use console::{Style, Term};

/// Width of the separator when stderr is not a terminal.
const FALLBACK_WIDTH: usize = 70;

#[derive(Debug, Clone, Copy)]
enum Tone {
    Plain,
    Good,
    Warn,
    Bad,
    Heading,
}

impl Tone {
    fn style(self) -> Style {
        match self {
            Self::Plain => Style::new(),
            Self::Good => Style::new().green(),
            Self::Warn => Style::new().yellow(),
            Self::Bad => Style::new().red(),
            Self::Heading => Style::new().cyan().bold(),
        }
    }
}

/// Terminal output formatter.
pub(crate) struct Output {
    messages: Term,
    data: Term,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            messages: Term::stderr(),
            data: Term::stdout(),
        }
    }

    fn say(&self, tone: Tone, msg: &str) {
        let _ = self
            .messages
            .write_line(&tone.style().apply_to(msg).to_string());
    }

    pub(crate) fn info(&self, msg: &str) {
        self.say(Tone::Plain, msg);
    }

    pub(crate) fn success(&self, msg: &str) {
        self.say(Tone::Good, msg);
    }

    pub(crate) fn warning(&self, msg: &str) {
        self.say(Tone::Warn, msg);
    }

    pub(crate) fn error(&self, msg: &str) {
        self.say(Tone::Bad, msg);
    }

    pub(crate) fn highlight(&self, msg: &str) {
        self.say(Tone::Heading, msg);
    }

    /// Print a rule across the terminal.
    pub(crate) fn separator(&self) {
        let width = self
            .messages
            .size_checked()
            .map_or(FALLBACK_WIDTH, |(_, cols)| usize::from(cols));
        self.say(Tone::Plain, &"-".repeat(width));
    }

    /// Print data to stdout, uncolored.
    pub(crate) fn data(&self, msg: &str) {
        let _ = self.data.write_line(msg);
    }
}
