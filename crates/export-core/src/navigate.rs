// File: crates/export-core/src/navigate.rs
// Summary: Browsing-context navigation capability (trait, recording fake, logging impl).

use std::cell::RefCell;

use anyhow::Result;
use tracing::info;

/// Which browsing context receives the export URL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disposition {
    /// Open a fresh context (the document-preview flow).
    NewContext,
    /// Navigate the current context; download vs inline render is the
    /// server's call.
    CurrentContext,
}

/// Navigation capability of the host page. Once requested, a navigation is
/// not cancellable from this layer.
pub trait Navigator {
    fn navigate(&self, href: &str, disposition: Disposition) -> Result<()>;
}

/// Navigator that records every request; for tests and the demo.
pub struct RecordingNavigator {
    visits: RefCell<Vec<(String, Disposition)>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self { visits: RefCell::new(Vec::new()) }
    }

    pub fn visits(&self) -> Vec<(String, Disposition)> {
        self.visits.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, href: &str, disposition: Disposition) -> Result<()> {
        self.visits.borrow_mut().push((href.to_string(), disposition));
        Ok(())
    }
}

/// Navigator that only reports where it would go.
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, href: &str, disposition: Disposition) -> Result<()> {
        info!(href, ?disposition, "navigation requested");
        Ok(())
    }
}
