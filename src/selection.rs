use std::sync::RwLock;

use crate::model::MatchRecord;

/// Single-slot store for the currently selected match.
///
/// The dashboard list view sets the slot when the user picks a match; the
/// detail view reads it back. Construct one and hand it (usually as
/// `Arc<SelectionSlot>`) to whichever views need the handoff; there is no
/// process-wide instance.
#[derive(Debug, Default)]
pub struct SelectionSlot {
    current: RwLock<Option<MatchRecord>>,
}

impl SelectionSlot {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the slot with `record`.
    pub fn set(&self, record: MatchRecord) {
        let mut slot = self.current.write().unwrap_or_else(|e| e.into_inner());
        *slot = Some(record);
    }

    /// The last-set record, or `None` before any selection.
    pub fn get(&self) -> Option<MatchRecord> {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Empty the slot, e.g. when leaving the detail view.
    pub fn clear(&self) {
        let mut slot = self.current.write().unwrap_or_else(|e| e.into_inner());
        *slot = None;
    }
}
