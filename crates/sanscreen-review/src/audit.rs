//! # Audit Viewer
//!
//! On-demand display state for one decision's audit history. The viewer
//! holds fetched entries only while open; closing discards them, so every
//! open is a fresh fetch. History is assumed bounded — no pagination.

use sanscreen_client::DecisionAuditEntry;

/// Visibility and content of one decision's audit history panel.
#[derive(Debug, Default)]
pub struct AuditViewer {
    entries: Option<Vec<DecisionAuditEntry>>,
}

impl AuditViewer {
    /// A closed viewer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the panel with freshly fetched entries (ordered by timestamp,
    /// as the backend returns them).
    pub fn open(&mut self, entries: Vec<DecisionAuditEntry>) {
        self.entries = Some(entries);
    }

    /// Whether the panel is showing.
    pub fn is_open(&self) -> bool {
        self.entries.is_some()
    }

    /// The entries on display, if open.
    pub fn entries(&self) -> Option<&[DecisionAuditEntry]> {
        self.entries.as_deref()
    }

    /// Close the panel and discard the fetched history.
    pub fn close(&mut self) {
        self.entries = None;
    }
}
