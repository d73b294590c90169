use std::rc::Rc;

use tracing::info;

use crate::models::Note;

/// Read-only view of the notes at the time it was taken.
pub type Snapshot = Rc<Vec<Note>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&Snapshot)>;

/// Append-only, in-memory list of notes.
///
/// Appending while a [`Snapshot`] is alive copies the list first, so handed
/// out snapshots never see later notes.
pub struct NoteStore {
    notes: Snapshot,
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
}

impl NoteStore {
    pub fn new() -> NoteStore {
        NoteStore {
            notes: Rc::new(Vec::new()),
            observers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn append(&mut self, note: Note) {
        Rc::make_mut(&mut self.notes).push(note);
        info!(count = self.notes.len(), "note appended");

        let snapshot = Rc::clone(&self.notes);
        for (_, observer) in self.observers.iter_mut() {
            observer(&snapshot);
        }
    }

    pub fn list(&self) -> Snapshot {
        Rc::clone(&self.notes)
    }

    pub fn get(&self, index: usize) -> Option<&Note> {
        self.notes.get(index)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Registers `observer`, called with the full list after every append.
    pub fn subscribe(&mut self, observer: impl FnMut(&Snapshot) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(registered, _)| *registered != id);
        self.observers.len() != before
    }
}

impl Default for NoteStore {
    fn default() -> Self {
        NoteStore::new()
    }
}
