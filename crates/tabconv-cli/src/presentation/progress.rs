//! Terminal rendering of the busy indicator and progress events.
//!
//! Picks an indicatif bar on a terminal and plain percentage lines
//! otherwise (pipes, CI logs).

use std::io::{self, IsTerminal, Write};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

// ============================================================================
// CLI Progress Printer
// ============================================================================

/// Busy indicator that automatically selects terminal or plain output.
pub struct CliProgressPrinter {
    inner: ProgressRender,
}

enum ProgressRender {
    Fancy(FancyProgress),
    Plain(PlainProgress),
}

impl CliProgressPrinter {
    pub fn new() -> Self {
        let inner = if io::stdout().is_terminal() {
            ProgressRender::Fancy(FancyProgress::default())
        } else {
            ProgressRender::Plain(PlainProgress::default())
        };
        Self { inner }
    }

    /// Show the indicator with `label`, as an indeterminate spinner.
    pub fn start(&mut self, label: &str) {
        match &mut self.inner {
            ProgressRender::Fancy(inner) => inner.start(label),
            ProgressRender::Plain(inner) => inner.start(label),
        }
    }

    /// Switch to (or advance) a determinate 0-100 bar.
    pub fn set_percent(&mut self, percent: f64) {
        match &mut self.inner {
            ProgressRender::Fancy(inner) => inner.set_percent(percent),
            ProgressRender::Plain(inner) => inner.set_percent(percent),
        }
    }

    /// Run `f` with the indicator hidden so printed lines are not torn.
    pub fn suspend<R>(&self, f: impl FnOnce() -> R) -> R {
        match &self.inner {
            ProgressRender::Fancy(inner) => match &inner.bar {
                Some(bar) => bar.suspend(f),
                None => f(),
            },
            ProgressRender::Plain(_) => f(),
        }
    }

    /// Hide the indicator.
    pub fn finish(&mut self) {
        match &mut self.inner {
            ProgressRender::Fancy(inner) => inner.finish(),
            ProgressRender::Plain(inner) => inner.finish(),
        }
    }
}

impl Default for CliProgressPrinter {
    fn default() -> Self {
        Self::new()
    }
}

/// Whole percent for display; inputs are already clamped to 0..=100.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_percent(percent: f64) -> u64 {
    percent.clamp(0.0, 100.0).round() as u64
}

// ============================================================================
// Fancy Terminal Progress (indicatif)
// ============================================================================

#[derive(Default)]
struct FancyProgress {
    bar: Option<ProgressBar>,
    determinate: bool,
}

impl FancyProgress {
    fn start(&mut self, label: &str) {
        self.finish();
        let bar = ProgressBar::with_draw_target(None, ProgressDrawTarget::stdout());
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            bar.set_style(style);
        }
        bar.set_message(label.to_string());
        bar.enable_steady_tick(Duration::from_millis(120));
        self.bar = Some(bar);
        self.determinate = false;
    }

    fn set_percent(&mut self, percent: f64) {
        let Some(bar) = &self.bar else {
            return;
        };
        if !self.determinate {
            if let Ok(style) =
                ProgressStyle::with_template("{msg} {bar:32.cyan/blue} {pos:>3}% ETA {eta}")
            {
                bar.set_style(style);
            }
            bar.set_length(100);
            self.determinate = true;
        }
        bar.set_position(whole_percent(percent));
    }

    fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

// ============================================================================
// Plain Progress (non-terminal)
// ============================================================================

/// Prints the label once and then every 10% step.
#[derive(Default)]
struct PlainProgress {
    label: String,
    last_step: Option<u64>,
}

impl PlainProgress {
    fn start(&mut self, label: &str) {
        self.label = label.to_string();
        self.last_step = None;
        println!("{label}");
    }

    fn set_percent(&mut self, percent: f64) {
        let step = whole_percent(percent) / 10;
        if self.last_step.is_some_and(|last| last >= step) {
            return;
        }
        self.last_step = Some(step);
        println!("{} {:>3}%", self.label, step * 10);
        let _ = io::stdout().flush();
    }

    fn finish(&mut self) {
        self.last_step = None;
    }
}
