//! Pure state transitions for favorites, comparison, preview text, and history (made by FontLab https://www.fontlab.com/)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseValueError;

/// Most combos that can be compared side by side.
pub const MAX_COMPARE_ITEMS: usize = 3;
/// Longest preview override kept, in characters.
pub const MAX_PREVIEW_CHARS: usize = 200;
/// Length of the recently viewed list.
pub const MAX_RECENT_ITEMS: usize = 10;

/// User-supplied preview copy. Blank fields fall back to the canned sample.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewText {
    pub headline: String,
    pub subhead: String,
    pub body: String,
}

impl PreviewText {
    pub fn is_empty(&self) -> bool {
        self.headline.is_empty() && self.subhead.is_empty() && self.body.is_empty()
    }

    pub fn get(&self, field: PreviewField) -> &str {
        match field {
            PreviewField::Headline => &self.headline,
            PreviewField::Subhead => &self.subhead,
            PreviewField::Body => &self.body,
        }
    }

    fn slot_mut(&mut self, field: PreviewField) -> &mut String {
        match field {
            PreviewField::Headline => &mut self.headline,
            PreviewField::Subhead => &mut self.subhead,
            PreviewField::Body => &mut self.body,
        }
    }

    /// Copy with every field cut to [`MAX_PREVIEW_CHARS`].
    pub(crate) fn truncated(mut self) -> Self {
        for field in PreviewField::ALL {
            let slot = self.slot_mut(*field);
            *slot = truncate_chars(slot);
        }
        self
    }
}

/// One editable field of [`PreviewText`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreviewField {
    Headline,
    Subhead,
    Body,
}

impl PreviewField {
    pub const ALL: &'static [PreviewField] = &[
        PreviewField::Headline,
        PreviewField::Subhead,
        PreviewField::Body,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PreviewField::Headline => "headline",
            PreviewField::Subhead => "subhead",
            PreviewField::Body => "body",
        }
    }
}

impl fmt::Display for PreviewField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PreviewField {
    type Err = ParseValueError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let wanted = raw.trim();
        PreviewField::ALL
            .iter()
            .copied()
            .find(|field| field.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseValueError {
                kind: "preview field",
                value: raw.to_string(),
                expected: "headline, subhead, body".to_string(),
            })
    }
}

/// Several preview fields committed at once. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewPatch {
    pub headline: Option<String>,
    pub subhead: Option<String>,
    pub body: Option<String>,
}

impl PreviewPatch {
    pub fn is_empty(&self) -> bool {
        self.headline.is_none() && self.subhead.is_none() && self.body.is_none()
    }

    fn fields(&self) -> [(PreviewField, Option<&str>); 3] {
        [
            (PreviewField::Headline, self.headline.as_deref()),
            (PreviewField::Subhead, self.subhead.as_deref()),
            (PreviewField::Body, self.body.as_deref()),
        ]
    }
}

/// Outcome of a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added { count: usize },
    Removed { count: usize },
    /// The comparison set is full; nothing changed.
    Rejected,
}

impl Toggle {
    /// Size after the toggle, or `None` when it was rejected.
    pub fn count(self) -> Option<usize> {
        match self {
            Toggle::Added { count } | Toggle::Removed { count } => Some(count),
            Toggle::Rejected => None,
        }
    }

    pub fn is_rejected(self) -> bool {
        matches!(self, Toggle::Rejected)
    }
}

/// Outcome of a non-toggling add to the comparison set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Admission {
    /// `false` only when the set was full and the id was not in it.
    pub accepted: bool,
    pub count: usize,
}

/// Independently persisted part of the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    Favorites,
    Comparison,
    Preview,
    Recent,
}

impl Slot {
    pub const ALL: [Slot; 4] = [Slot::Favorites, Slot::Comparison, Slot::Preview, Slot::Recent];

    /// Fixed key under which the slot is persisted.
    pub fn key(self) -> &'static str {
        match self {
            Slot::Favorites => "fontpair-favorites",
            Slot::Comparison => "fontpair-compare",
            Slot::Preview => "fontpair-custom-text",
            Slot::Recent => "fontpair-recent",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Everything the user has collected, with no knowledge of persistence.
///
/// Id lists keep insertion order and never hold duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionState {
    favorites: Vec<String>,
    comparison: Vec<String>,
    preview: PreviewText,
    recent: Vec<String>,
}

impl CollectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn favorites(&self) -> &[String] {
        &self.favorites
    }

    pub fn comparison(&self) -> &[String] {
        &self.comparison
    }

    pub fn preview_text(&self) -> &PreviewText {
        &self.preview
    }

    /// Most recently viewed first.
    pub fn recent(&self) -> &[String] {
        &self.recent
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.iter().any(|fav| fav == id)
    }

    pub fn toggle_favorite(&mut self, id: &str) -> Toggle {
        if remove_id(&mut self.favorites, id) {
            Toggle::Removed {
                count: self.favorites.len(),
            }
        } else {
            self.favorites.push(id.to_string());
            Toggle::Added {
                count: self.favorites.len(),
            }
        }
    }

    /// Add unless already present; returns the new count.
    pub fn add_favorite(&mut self, id: &str) -> usize {
        if !self.is_favorite(id) {
            self.favorites.push(id.to_string());
        }
        self.favorites.len()
    }

    pub fn remove_favorite(&mut self, id: &str) -> usize {
        remove_id(&mut self.favorites, id);
        self.favorites.len()
    }

    pub fn clear_favorites(&mut self) {
        self.favorites.clear();
    }

    pub fn is_in_comparison(&self, id: &str) -> bool {
        self.comparison.iter().any(|item| item == id)
    }

    pub fn can_add_more(&self) -> bool {
        self.comparison.len() < MAX_COMPARE_ITEMS
    }

    pub fn toggle_comparison(&mut self, id: &str) -> Toggle {
        if remove_id(&mut self.comparison, id) {
            Toggle::Removed {
                count: self.comparison.len(),
            }
        } else if self.can_add_more() {
            self.comparison.push(id.to_string());
            Toggle::Added {
                count: self.comparison.len(),
            }
        } else {
            Toggle::Rejected
        }
    }

    pub fn add_to_comparison(&mut self, id: &str) -> Admission {
        let accepted = if self.is_in_comparison(id) {
            true
        } else if self.can_add_more() {
            self.comparison.push(id.to_string());
            true
        } else {
            false
        };
        Admission {
            accepted,
            count: self.comparison.len(),
        }
    }

    /// Unconditional removal; returns the new count.
    pub fn remove_from_comparison(&mut self, id: &str) -> usize {
        remove_id(&mut self.comparison, id);
        self.comparison.len()
    }

    pub fn clear_comparison(&mut self) {
        self.comparison.clear();
    }

    /// Store `text` cut to [`MAX_PREVIEW_CHARS`] characters.
    pub fn set_preview_field(&mut self, field: PreviewField, text: &str) {
        *self.preview.slot_mut(field) = truncate_chars(text);
    }

    /// Commit every field the patch carries.
    pub fn set_preview_text(&mut self, patch: &PreviewPatch) {
        for (field, text) in patch.fields() {
            if let Some(text) = text {
                self.set_preview_field(field, text);
            }
        }
    }

    pub fn clear_preview_text(&mut self) {
        self.preview = PreviewText::default();
    }

    pub fn has_preview_text(&self) -> bool {
        !self.preview.is_empty()
    }

    /// Move `id` to the front of the history, dropping the oldest past the cap.
    pub fn record_view(&mut self, id: &str) {
        remove_id(&mut self.recent, id);
        self.recent.insert(0, id.to_string());
        self.recent.truncate(MAX_RECENT_ITEMS);
    }

    pub fn clear_recent(&mut self) {
        self.recent.clear();
    }

    /// Replace one slot with hydrated data, normalizing it on the way in.
    pub(crate) fn restore(&mut self, restored: Restored) {
        match restored {
            Restored::Favorites(ids) => self.favorites = dedup_ids(ids, usize::MAX),
            Restored::Comparison(ids) => self.comparison = dedup_ids(ids, MAX_COMPARE_ITEMS),
            Restored::Preview(text) => self.preview = text.truncated(),
            Restored::Recent(ids) => self.recent = dedup_ids(ids, MAX_RECENT_ITEMS),
        }
    }
}

/// Decoded contents of one persisted slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Restored {
    Favorites(Vec<String>),
    Comparison(Vec<String>),
    Preview(PreviewText),
    Recent(Vec<String>),
}

/// Tracks slots changed before hydration.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct DirtySlots([bool; 4]);

impl DirtySlots {
    pub(crate) fn mark(&mut self, slot: Slot) {
        self.0[slot.index()] = true;
    }

    pub(crate) fn take(&mut self, slot: Slot) -> bool {
        std::mem::take(&mut self.0[slot.index()])
    }
}

fn remove_id(ids: &mut Vec<String>, id: &str) -> bool {
    match ids.iter().position(|item| item == id) {
        Some(pos) => {
            ids.remove(pos);
            true
        }
        None => false,
    }
}

fn dedup_ids(ids: Vec<String>, cap: usize) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(ids.len().min(cap));
    for id in ids {
        if out.len() == cap {
            break;
        }
        if !out.contains(&id) {
            out.push(id);
        }
    }
    out
}

fn truncate_chars(text: &str) -> String {
    text.chars().take(MAX_PREVIEW_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_favorite_reports_direction_and_count() {
        let mut state = CollectionState::new();
        assert_eq!(state.toggle_favorite("a"), Toggle::Added { count: 1 });
        assert_eq!(state.toggle_favorite("b"), Toggle::Added { count: 2 });
        assert_eq!(state.toggle_favorite("a"), Toggle::Removed { count: 1 });
        assert_eq!(state.favorites(), ["b".to_string()]);
    }

    #[test]
    fn full_comparison_rejects_new_ids_without_mutation() {
        let mut state = CollectionState::new();
        for id in ["a", "b", "c"] {
            assert!(!state.toggle_comparison(id).is_rejected());
        }
        let before = state.clone();

        assert_eq!(state.toggle_comparison("d"), Toggle::Rejected);
        assert_eq!(state, before);
        assert!(!state.can_add_more());
        assert_eq!(
            state.add_to_comparison("d"),
            Admission {
                accepted: false,
                count: 3
            }
        );
        assert_eq!(
            state.add_to_comparison("b"),
            Admission {
                accepted: true,
                count: 3
            }
        );
    }

    #[test]
    fn remove_from_comparison_is_unconditional() {
        let mut state = CollectionState::new();
        state.toggle_comparison("a");
        assert_eq!(state.remove_from_comparison("zzz"), 1);
        assert_eq!(state.remove_from_comparison("a"), 0);
    }

    #[test]
    fn preview_fields_are_cut_by_characters_not_bytes() {
        let mut state = CollectionState::new();
        let long = "é".repeat(MAX_PREVIEW_CHARS + 20);
        state.set_preview_field(PreviewField::Body, &long);

        assert_eq!(state.preview_text().body.chars().count(), MAX_PREVIEW_CHARS);
        assert!(state.has_preview_text());

        state.clear_preview_text();
        assert!(!state.has_preview_text());
    }

    #[test]
    fn patch_leaves_missing_fields_alone() {
        let mut state = CollectionState::new();
        state.set_preview_field(PreviewField::Headline, "Keep");
        state.set_preview_text(&PreviewPatch {
            body: Some("New body".into()),
            ..PreviewPatch::default()
        });

        assert_eq!(state.preview_text().headline, "Keep");
        assert_eq!(state.preview_text().body, "New body");
        assert_eq!(state.preview_text().get(PreviewField::Subhead), "");
    }

    #[test]
    fn history_is_most_recent_first_and_capped() {
        let mut state = CollectionState::new();
        for i in 0..12 {
            state.record_view(&format!("c{i}"));
        }
        state.record_view("c5");

        assert_eq!(state.recent().len(), MAX_RECENT_ITEMS);
        assert_eq!(state.recent()[0], "c5");
        assert_eq!(state.recent()[1], "c11");
        assert_eq!(
            state.recent().iter().filter(|id| id.as_str() == "c5").count(),
            1
        );
    }

    #[test]
    fn restore_dedups_and_caps_comparison() {
        let mut state = CollectionState::new();
        let ids = ["a", "a", "b", "c", "d"].map(String::from).to_vec();
        state.restore(Restored::Comparison(ids));
        assert_eq!(state.comparison(), ["a", "b", "c"].map(String::from));
    }
}
