//! Combo filtering and ordering (made by FontLab https://www.fontlab.com/)

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseValueError;
use crate::model::{FontSource, Timelessness, UsageContext, VibeTag};
use crate::resolve::ResolvedFontCombo;

/// What a combo must satisfy to be listed.
///
/// Criteria are ANDed; inside each multi-value criterion any member matches.
/// An empty criterion places no constraint.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    search_query: String,
    timelessness: Vec<Timelessness>,
    vibe_tags: Vec<VibeTag>,
    usage_contexts: Vec<UsageContext>,
    google_fonts_only: bool,
    restrict_to: Option<HashSet<String>>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive substring searched in names, description, and tags.
    ///
    /// Surrounding whitespace is trimmed first, so `"sans "` searches for
    /// `sans` and a blank query matches every combo.
    pub fn with_search_query(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into().trim().to_lowercase();
        self
    }

    pub fn with_timelessness(mut self, values: Vec<Timelessness>) -> Self {
        self.timelessness = values;
        self
    }

    pub fn with_vibe_tags(mut self, tags: Vec<VibeTag>) -> Self {
        self.vibe_tags = tags;
        self
    }

    pub fn with_usage_contexts(mut self, contexts: Vec<UsageContext>) -> Self {
        self.usage_contexts = contexts;
        self
    }

    /// Require both the primary and the secondary family to come from Google Fonts.
    pub fn google_fonts_only(mut self, yes: bool) -> Self {
        self.google_fonts_only = yes;
        self
    }

    /// Keep only combos whose id is in `ids` (used for "favorites only").
    pub fn restrict_to_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.restrict_to = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.search_query.is_empty()
            && self.timelessness.is_empty()
            && self.vibe_tags.is_empty()
            && self.usage_contexts.is_empty()
            && !self.google_fonts_only
            && self.restrict_to.is_none()
    }

    /// Check whether one resolved combo satisfies every criterion.
    pub fn matches(&self, combo: &ResolvedFontCombo<'_>) -> bool {
        if let Some(ids) = &self.restrict_to {
            if !ids.contains(&combo.id) {
                return false;
            }
        }

        if self.google_fonts_only
            && (combo.primary_font.source != FontSource::Google
                || combo.secondary_font.source != FontSource::Google)
        {
            return false;
        }

        if !matches_any(&self.timelessness, |t| combo.timelessness == *t) {
            return false;
        }

        if !matches_any(&self.vibe_tags, |tag| combo.vibe_tags.contains(tag)) {
            return false;
        }

        if !matches_any(&self.usage_contexts, |ctx| combo.usage_contexts.contains(ctx)) {
            return false;
        }

        self.search_query.is_empty() || self.text_matches(combo)
    }

    fn text_matches(&self, combo: &ResolvedFontCombo<'_>) -> bool {
        let needle = self.search_query.as_str();
        let contains = |haystack: &str| haystack.to_lowercase().contains(needle);

        contains(&combo.name)
            || contains(&combo.description)
            || contains(&combo.primary_font.name)
            || contains(&combo.secondary_font.name)
            || combo.vibe_tags.iter().any(|tag| contains(tag.as_str()))
            || combo.usage_contexts.iter().any(|ctx| contains(ctx.as_str()))
    }
}

fn matches_any<T>(wanted: &[T], pred: impl Fn(&T) -> bool) -> bool {
    wanted.is_empty() || wanted.iter().any(pred)
}

/// Combos satisfying `criteria`, in their original order.
pub fn filter<'a>(
    combos: &[ResolvedFontCombo<'a>],
    criteria: &FilterCriteria,
) -> Vec<ResolvedFontCombo<'a>> {
    let kept: Vec<ResolvedFontCombo<'a>> = combos
        .iter()
        .filter(|combo| criteria.matches(combo))
        .cloned()
        .collect();
    tracing::debug!(total = combos.len(), kept = kept.len(), "filtered combos");
    kept
}

/// Display order for a listing. Sorting is stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Keep catalog order.
    #[default]
    Catalog,
    NameAsc,
    NameDesc,
    /// Timeless first, then modern classics, then trending.
    Timeless,
    /// Trending first.
    Trending,
}

impl SortOrder {
    pub const ALL: &'static [SortOrder] = &[
        SortOrder::Catalog,
        SortOrder::NameAsc,
        SortOrder::NameDesc,
        SortOrder::Timeless,
        SortOrder::Trending,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Catalog => "catalog",
            SortOrder::NameAsc => "name-asc",
            SortOrder::NameDesc => "name-desc",
            SortOrder::Timeless => "timeless",
            SortOrder::Trending => "trending",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ParseValueError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let wanted = raw.trim();
        SortOrder::ALL
            .iter()
            .copied()
            .find(|order| order.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseValueError {
                kind: "sort order",
                value: raw.to_string(),
                expected: SortOrder::ALL
                    .iter()
                    .map(|order| order.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

fn timeless_rank(value: Timelessness) -> u8 {
    match value {
        Timelessness::Timeless => 0,
        Timelessness::ModernClassic => 1,
        Timelessness::Trending => 2,
    }
}

/// Reorder combos in place.
pub fn sort_combos(combos: &mut [ResolvedFontCombo<'_>], order: SortOrder) {
    let by_name = |a: &ResolvedFontCombo<'_>, b: &ResolvedFontCombo<'_>| {
        a.name.to_lowercase().cmp(&b.name.to_lowercase())
    };
    match order {
        SortOrder::Catalog => {}
        SortOrder::NameAsc => combos.sort_by(by_name),
        SortOrder::NameDesc => combos.sort_by(|a, b| by_name(b, a)),
        SortOrder::Timeless => combos.sort_by(|a, b| {
            timeless_rank(a.timelessness).cmp(&timeless_rank(b.timelessness))
        }),
        SortOrder::Trending => combos.sort_by(|a, b| {
            timeless_rank(b.timelessness).cmp(&timeless_rank(a.timelessness))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_order_parses_flag_spelling() {
        assert_eq!("name-desc".parse::<SortOrder>(), Ok(SortOrder::NameDesc));
        assert_eq!("Trending".parse::<SortOrder>(), Ok(SortOrder::Trending));
        assert!("newest".parse::<SortOrder>().is_err());
    }

    #[test]
    fn empty_criteria_report_empty() {
        assert!(FilterCriteria::new().is_empty());
        assert!(FilterCriteria::new().with_search_query("   ").is_empty());
        assert!(!FilterCriteria::new().google_fonts_only(true).is_empty());
    }
}
