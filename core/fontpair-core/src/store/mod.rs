//! Favorites, comparison set, preview text, and history with write-through persistence (made by FontLab https://www.fontlab.com/)
//!
//! [`CollectionState`] holds the transitions and knows nothing about storage.
//! [`CollectionStore`] wraps it, and after every successful mutation writes
//! the touched slot to a [`KeyValueStore`] under that slot's fixed key.
//!
//! Storage is best effort. Read faults and malformed values hydrate as
//! "absent"; write faults are logged and the in-memory change stands.
//!
//! Mutations made before [`CollectionStore::hydrate`] are kept in memory and
//! their slot is marked dirty. Hydration then loads every key that exists in
//! storage, overwriting any dirty slot with the stored value, and writes the
//! dirty slots whose key was absent.

mod state;
mod storage;

use serde::Deserialize;

pub use state::{
    Admission, CollectionState, PreviewField, PreviewPatch, PreviewText, Slot, Toggle,
    MAX_COMPARE_ITEMS, MAX_PREVIEW_CHARS, MAX_RECENT_ITEMS,
};
pub use storage::{FileStore, KeyValueStore, MemoryStore};

use state::{DirtySlots, Restored};

/// Collection state bound to durable storage.
#[derive(Debug)]
pub struct CollectionStore<S> {
    state: CollectionState,
    storage: S,
    hydrated: bool,
    dirty: DirtySlots,
}

impl<S: KeyValueStore> CollectionStore<S> {
    /// Empty, not yet hydrated store.
    pub fn new(storage: S) -> Self {
        Self {
            state: CollectionState::new(),
            storage,
            hydrated: false,
            dirty: DirtySlots::default(),
        }
    }

    /// Create and hydrate in one step.
    pub fn open(storage: S) -> Self {
        let mut store = Self::new(storage);
        store.hydrate();
        store
    }

    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    /// Load every slot from storage. Calling it again does nothing.
    pub fn hydrate(&mut self) {
        if self.hydrated {
            tracing::debug!("collection store already hydrated");
            return;
        }

        for slot in Slot::ALL {
            let changed_early = self.dirty.take(slot);
            match self.read_slot(slot) {
                Some(restored) => {
                    if changed_early {
                        tracing::warn!(
                            key = slot.key(),
                            "stored value overwrites a change made before hydration"
                        );
                    }
                    self.state.restore(restored);
                }
                None if changed_early => self.write_slot(slot),
                None => {}
            }
        }

        self.hydrated = true;
        tracing::debug!(
            favorites = self.state.favorites().len(),
            comparison = self.state.comparison().len(),
            recent = self.state.recent().len(),
            "hydrated collection store"
        );
    }

    fn read_slot(&self, slot: Slot) -> Option<Restored> {
        let raw = match self.storage.get(slot.key()) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!(key = slot.key(), error = %err, "storage read failed; using default");
                return None;
            }
        };

        let decoded = decode_slot(slot, &raw);
        if decoded.is_none() {
            tracing::warn!(key = slot.key(), "discarding malformed stored value");
        }
        decoded
    }

    fn persist(&mut self, slot: Slot) {
        if self.hydrated {
            self.write_slot(slot);
        } else {
            tracing::debug!(key = slot.key(), "deferring write until hydration");
            self.dirty.mark(slot);
        }
    }

    fn write_slot(&mut self, slot: Slot) {
        let result = match encode_slot(&self.state, slot) {
            Ok(Some(value)) => self.storage.set(slot.key(), &value),
            Ok(None) => self.storage.remove(slot.key()),
            Err(err) => {
                tracing::warn!(key = slot.key(), error = %err, "could not encode state");
                return;
            }
        };

        match result {
            Ok(()) => tracing::debug!(key = slot.key(), "persisted"),
            Err(err) => tracing::warn!(key = slot.key(), error = %err, "storage write failed"),
        }
    }

    pub fn state(&self) -> &CollectionState {
        &self.state
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    pub fn favorites(&self) -> &[String] {
        self.state.favorites()
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.state.is_favorite(id)
    }

    pub fn toggle_favorite(&mut self, id: &str) -> Toggle {
        let outcome = self.state.toggle_favorite(id);
        self.persist(Slot::Favorites);
        outcome
    }

    pub fn add_favorite(&mut self, id: &str) -> usize {
        let count = self.state.add_favorite(id);
        self.persist(Slot::Favorites);
        count
    }

    pub fn remove_favorite(&mut self, id: &str) -> usize {
        let count = self.state.remove_favorite(id);
        self.persist(Slot::Favorites);
        count
    }

    pub fn clear_favorites(&mut self) {
        self.state.clear_favorites();
        self.persist(Slot::Favorites);
    }

    pub fn comparison(&self) -> &[String] {
        self.state.comparison()
    }

    pub fn is_in_comparison(&self, id: &str) -> bool {
        self.state.is_in_comparison(id)
    }

    pub fn can_add_more(&self) -> bool {
        self.state.can_add_more()
    }

    /// Rejection leaves both memory and storage untouched.
    pub fn toggle_comparison(&mut self, id: &str) -> Toggle {
        let outcome = self.state.toggle_comparison(id);
        if !outcome.is_rejected() {
            self.persist(Slot::Comparison);
        }
        outcome
    }

    pub fn add_to_comparison(&mut self, id: &str) -> Admission {
        let before = self.state.comparison().len();
        let admission = self.state.add_to_comparison(id);
        if admission.count != before {
            self.persist(Slot::Comparison);
        }
        admission
    }

    pub fn remove_from_comparison(&mut self, id: &str) -> usize {
        let count = self.state.remove_from_comparison(id);
        self.persist(Slot::Comparison);
        count
    }

    pub fn clear_comparison(&mut self) {
        self.state.clear_comparison();
        self.persist(Slot::Comparison);
    }

    pub fn preview_text(&self) -> &PreviewText {
        self.state.preview_text()
    }

    pub fn has_preview_text(&self) -> bool {
        self.state.has_preview_text()
    }

    pub fn set_preview_field(&mut self, field: PreviewField, text: &str) {
        self.state.set_preview_field(field, text);
        self.persist(Slot::Preview);
    }

    pub fn set_preview_text(&mut self, patch: &PreviewPatch) {
        if patch.is_empty() {
            return;
        }
        self.state.set_preview_text(patch);
        self.persist(Slot::Preview);
    }

    pub fn clear_preview_text(&mut self) {
        self.state.clear_preview_text();
        self.persist(Slot::Preview);
    }

    pub fn recent(&self) -> &[String] {
        self.state.recent()
    }

    pub fn record_view(&mut self, id: &str) {
        self.state.record_view(id);
        self.persist(Slot::Recent);
    }

    pub fn clear_recent(&mut self) {
        self.state.clear_recent();
        self.persist(Slot::Recent);
    }
}

/// Stored preview: the current object form or the older bare string.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredPreview {
    Fields(PreviewText),
    Legacy(String),
}

fn decode_slot(slot: Slot, raw: &str) -> Option<Restored> {
    match slot {
        Slot::Favorites => decode_ids(raw).map(Restored::Favorites),
        Slot::Comparison => decode_ids(raw).map(Restored::Comparison),
        Slot::Recent => decode_ids(raw).map(Restored::Recent),
        Slot::Preview => {
            let text = match serde_json::from_str::<StoredPreview>(raw).ok()? {
                StoredPreview::Fields(text) => text,
                StoredPreview::Legacy(text) => PreviewText {
                    headline: text.clone(),
                    subhead: String::new(),
                    body: text,
                },
            };
            Some(Restored::Preview(text))
        }
    }
}

fn decode_ids(raw: &str) -> Option<Vec<String>> {
    serde_json::from_str(raw).ok()
}

/// `Ok(None)` means the key should be removed.
fn encode_slot(state: &CollectionState, slot: Slot) -> serde_json::Result<Option<String>> {
    let value = match slot {
        Slot::Favorites => serde_json::to_string(state.favorites())?,
        Slot::Comparison => serde_json::to_string(state.comparison())?,
        Slot::Recent => serde_json::to_string(state.recent())?,
        Slot::Preview if state.preview_text().is_empty() => return Ok(None),
        Slot::Preview => serde_json::to_string(state.preview_text())?,
    };
    Ok(Some(value))
}
