//! Side effects for at-risk products
//!
//! The renderer only describes which products are at risk. This module is
//! the consumer that logs the reorder advisories and, when notifications are
//! permitted, sends a best-effort alert per product.

use std::io::{self, Write};

use console::style;

use crate::predict::Prediction;

/// Best-effort notification channel
pub trait Notifier {
    fn notify(&mut self, title: &str) -> io::Result<()>;
}

/// Writes alerts to the terminal's stderr
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&mut self, title: &str) -> io::Result<()> {
        let mut stderr = io::stderr().lock();
        writeln!(stderr, "{} {}", style("!").yellow().bold(), title)
    }
}

/// Keeps alerts in memory
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub sent: Vec<String>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, title: &str) -> io::Result<()> {
        self.sent.push(title.to_string());
        Ok(())
    }
}

/// Counts of what `dispatch` did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    pub advisories: usize,
    pub notified: usize,
    pub failed: usize,
}

impl DispatchSummary {
    /// Report failed notifications once per command
    pub fn log(&self) {
        if self.failed > 0 {
            tracing::warn!(
                "{} of {} low-stock notifications could not be delivered",
                self.failed,
                self.notified + self.failed
            );
        } else if self.notified > 0 {
            tracing::debug!("Sent {} low-stock notifications", self.notified);
        }
    }
}

/// Log each advisory and notify when permitted; failures never propagate
pub fn dispatch(
    predictions: &[Prediction],
    notifications_enabled: bool,
    notifier: &mut dyn Notifier,
) -> DispatchSummary {
    let mut summary = DispatchSummary::default();

    for prediction in predictions {
        tracing::info!(product = %prediction.id, "{}", prediction.advisory());
        summary.advisories += 1;

        if !notifications_enabled {
            continue;
        }

        match notifier.notify(&prediction.alert_title()) {
            Ok(()) => summary.notified += 1,
            Err(e) => {
                tracing::debug!("Notification for {} failed: {}", prediction.name, e);
                summary.failed += 1;
            }
        }
    }

    summary
}
