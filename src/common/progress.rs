//! Spinner-backed progress reporting for long-running steps.
//!
//! Each network call, download, and install step shows a transient spinner
//! that resolves to a success or failure mark. The install step additionally
//! streams child-process output, pausing the spinner for each line so the
//! output stays readable.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Lifecycle of a progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressState {
    /// Created but not started
    Idle,
    /// Spinner ticking
    Running,
    /// Spinner suspended while a line of child-process output is printed
    PausedForOutput,
    /// Finished with a success mark
    Succeeded,
    /// Finished with a failure mark
    Failed,
}

/// A single step's spinner with an explicit state machine.
///
/// Transitions: `Idle -> Running` via [`start`](Self::start),
/// `Running <-> PausedForOutput` via [`print_line`](Self::print_line),
/// and `Running -> Succeeded | Failed` via [`succeed`](Self::succeed) /
/// [`fail`](Self::fail). Terminal states are sticky.
pub struct StepProgress {
    bar: ProgressBar,
    state: ProgressState,
}

impl StepProgress {
    /// Create an idle spinner with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner:.blue} {msg}")
                .expect("static template is valid")
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "),
        );
        bar.set_message(message.into());
        Self {
            bar,
            state: ProgressState::Idle,
        }
    }

    /// Create and immediately start a spinner.
    pub fn start_new(message: impl Into<String>) -> Self {
        let mut progress = Self::new(message);
        progress.start();
        progress
    }

    /// Start ticking. No-op unless idle.
    pub fn start(&mut self) {
        if self.state == ProgressState::Idle {
            self.bar.enable_steady_tick(Duration::from_millis(100));
            self.state = ProgressState::Running;
        }
    }

    /// Print one line of streamed output above the spinner.
    ///
    /// The spinner pauses while the line is written and resumes afterwards,
    /// so interleaved child-process output never tears the spinner row.
    pub fn print_line(&mut self, line: &str) {
        if self.state == ProgressState::Running {
            self.state = ProgressState::PausedForOutput;
            self.bar.suspend(|| println!("{}", line));
            self.state = ProgressState::Running;
        } else {
            println!("{}", line);
        }
    }

    /// Finish with a green check mark.
    pub fn succeed(&mut self, message: impl Into<String>) {
        if self.is_finished() {
            return;
        }
        self.bar
            .finish_with_message(format!("{} {}", "✓".green().bold(), message.into()));
        self.state = ProgressState::Succeeded;
    }

    /// Finish with a red cross mark.
    pub fn fail(&mut self, message: impl Into<String>) {
        if self.is_finished() {
            return;
        }
        self.bar
            .finish_with_message(format!("{} {}", "✗".red().bold(), message.into()));
        self.state = ProgressState::Failed;
    }

    /// Current state of the indicator.
    pub fn state(&self) -> ProgressState {
        self.state
    }

    fn is_finished(&self) -> bool {
        matches!(
            self.state,
            ProgressState::Succeeded | ProgressState::Failed
        )
    }
}
