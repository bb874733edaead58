use super::state::DraftKey;
use crate::core::HandlingCollection;
use std::sync::Arc;

/// Snapshot reduziert auf die für Undo/Redo relevanten Teile.
///
/// Nutzt Arc-Clone (Copy-on-Write): der eigentliche Klon der Sammlung passiert
/// erst beim nächsten `Arc::make_mut()` in einem Use-Case.
#[derive(Clone)]
pub struct Snapshot {
    /// Optionale Sammlung (Arc-Klon für O(1)-Snapshot)
    pub collection: Option<Arc<HandlingCollection>>,
}

impl Snapshot {
    /// Erstellt einen O(1)-Snapshot durch Arc-Clone statt Deep-Clone.
    pub fn from_state(state: &crate::app::AppState) -> Self {
        Self {
            collection: state.collection.clone(),
        }
    }

    /// Stellt den Snapshot wieder her (O(1) Arc-Zuweisung).
    pub fn apply_to(self, state: &mut crate::app::AppState) {
        state.collection = self.collection;
    }
}

/// Einfacher Undo/Redo-Manager mit Snapshotting.
#[derive(Default)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
    /// Feld der letzten Eingabe; Folge-Eingaben ins selbe Feld bilden einen Schritt
    last_edit: Option<DraftKey>,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        let max_depth = max_depth.max(1);
        Self {
            undo_stack: Vec::with_capacity(max_depth.min(64)),
            redo_stack: Vec::new(),
            max_depth,
            last_edit: None,
        }
    }

    /// Ändert die maximale Tiefe; überzählige alte Einträge werden verworfen.
    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.max_depth = max_depth.max(1);
        if self.undo_stack.len() > self.max_depth {
            let excess = self.undo_stack.len() - self.max_depth;
            self.undo_stack.drain(..excess);
        }
        if self.redo_stack.len() > self.max_depth {
            let excess = self.redo_stack.len() - self.max_depth;
            self.redo_stack.drain(..excess);
        }
    }

    /// Nimmt einen vorab erstellten Snapshot auf.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        self.last_edit = None;
        self.push_undo(snap);
        self.redo_stack.clear();
    }

    /// Wie `record_snapshot`, fasst aber aufeinanderfolgende Eingaben in dasselbe
    /// Feld zu einem Undo-Schritt zusammen.
    pub fn record_edit_snapshot(&mut self, snap: Snapshot, key: DraftKey) {
        if self.last_edit == Some(key) && self.can_undo() {
            self.redo_stack.clear();
            return;
        }
        self.push_undo(snap);
        self.redo_stack.clear();
        self.last_edit = Some(key);
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Anzahl möglicher Undo-Schritte.
    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Pop undo stack and push `current` onto redo stack; returns the snapshot to apply.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let prev = self.undo_stack.pop()?;
        if self.redo_stack.len() >= self.max_depth {
            self.redo_stack.remove(0);
        }
        self.redo_stack.push(current);
        self.last_edit = None;
        Some(prev)
    }

    /// Pop redo stack and push `current` onto undo stack; returns the snapshot to apply.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        self.push_undo(current);
        self.last_edit = None;
        Some(next)
    }

    fn push_undo(&mut self, snap: Snapshot) {
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snap);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{HandlingField, HandlingRecord};

    fn make_snapshot_with_record_count(count: usize) -> Snapshot {
        let records = (0..count)
            .map(|i| HandlingRecord::new(format!("CAR{i}")))
            .collect();
        Snapshot {
            collection: Some(Arc::new(HandlingCollection::new(records))),
        }
    }

    fn restored_len(snap: &Snapshot) -> usize {
        snap.collection.as_deref().map_or(0, HandlingCollection::len)
    }

    #[test]
    fn empty_history_cannot_undo_or_redo() {
        let history = EditHistory::new_with_capacity(10);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_restores_previous_snapshot() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_record_count(2));

        let restored = history
            .pop_undo_with_current(make_snapshot_with_record_count(5))
            .expect("undo vorhanden");

        assert_eq!(restored_len(&restored), 2);
        assert!(!history.can_undo());
        assert!(history.can_redo());
    }

    #[test]
    fn redo_restores_undone_snapshot() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_record_count(2));
        let _restored = history.pop_undo_with_current(make_snapshot_with_record_count(5));

        let redone = history
            .pop_redo_with_current(make_snapshot_with_record_count(2))
            .expect("redo vorhanden");

        assert_eq!(restored_len(&redone), 5);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn new_record_clears_redo_stack() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_record_count(1));
        let _restored = history.pop_undo_with_current(make_snapshot_with_record_count(3));
        assert!(history.can_redo());

        history.record_snapshot(make_snapshot_with_record_count(7));
        assert!(!history.can_redo());
    }

    #[test]
    fn respects_max_depth() {
        let mut history = EditHistory::new_with_capacity(3);
        for i in 1..=5 {
            history.record_snapshot(make_snapshot_with_record_count(i));
        }
        assert_eq!(history.undo_len(), 3);

        history.set_max_depth(1);
        assert_eq!(history.undo_len(), 1);
    }

    #[test]
    fn consecutive_edits_of_same_field_are_coalesced() {
        let mut history = EditHistory::new_with_capacity(10);
        let mass = (0, HandlingField::Mass, None);
        let drag = (0, HandlingField::InitialDragCoeff, None);

        history.record_edit_snapshot(make_snapshot_with_record_count(1), mass);
        history.record_edit_snapshot(make_snapshot_with_record_count(1), mass);
        assert_eq!(history.undo_len(), 1);

        history.record_edit_snapshot(make_snapshot_with_record_count(1), drag);
        assert_eq!(history.undo_len(), 2);

        // nach Undo beginnt ein neuer Schritt
        let _ = history.pop_undo_with_current(make_snapshot_with_record_count(1));
        history.record_edit_snapshot(make_snapshot_with_record_count(1), mass);
        assert_eq!(history.undo_len(), 2);
    }
}
