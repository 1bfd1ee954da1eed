//! Joining combos against the font catalog (made by FontLab https://www.fontlab.com/)
//!
//! A [`ResolvedFontCombo`] is a read-only view: it borrows the combo and the
//! families it references instead of copying them. Every hierarchy level is
//! resolved up front, so nothing downstream (filters, exports) ever has to
//! handle a missing font.

use std::collections::HashMap;
use std::ops::Deref;

use serde::Serialize;

use crate::error::{FontRole, ResolveError};
use crate::model::{FontCombo, FontFamily, HierarchyLevel, TypeScaleEntry};

/// One hierarchy level joined with its font.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedLevel<'a> {
    pub level: HierarchyLevel,
    pub entry: &'a TypeScaleEntry,
    pub font: &'a FontFamily,
}

/// A combo with its font references replaced by the catalog families.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedFontCombo<'a> {
    #[serde(flatten)]
    pub combo: &'a FontCombo,
    pub primary_font: &'a FontFamily,
    pub secondary_font: &'a FontFamily,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tertiary_font: Option<&'a FontFamily>,
    #[serde(skip)]
    required: [ResolvedLevel<'a>; 5],
    #[serde(skip)]
    extended: Vec<ResolvedLevel<'a>>,
}

impl<'a> Deref for ResolvedFontCombo<'a> {
    type Target = FontCombo;

    fn deref(&self) -> &FontCombo {
        self.combo
    }
}

impl<'a> ResolvedFontCombo<'a> {
    /// The five required levels in export order (h1, h2, h3, body, caption).
    pub fn required_levels(&self) -> &[ResolvedLevel<'a>; 5] {
        &self.required
    }

    pub fn h1(&self) -> &ResolvedLevel<'a> {
        &self.required[0]
    }

    pub fn body(&self) -> &ResolvedLevel<'a> {
        &self.required[3]
    }

    /// Every defined level, required and extended, in canonical order.
    pub fn levels(&self) -> Vec<ResolvedLevel<'a>> {
        let mut all: Vec<ResolvedLevel<'a>> = self
            .required
            .iter()
            .chain(self.extended.iter())
            .copied()
            .collect();
        all.sort_by_key(|resolved| resolved.level);
        all
    }

    pub fn level(&self, level: HierarchyLevel) -> Option<&ResolvedLevel<'a>> {
        self.required
            .iter()
            .chain(self.extended.iter())
            .find(|resolved| resolved.level == level)
    }

    /// Distinct families used by the required levels, in first-seen order.
    pub fn distinct_fonts(&self) -> Vec<&'a FontFamily> {
        let mut seen: Vec<&'a FontFamily> = Vec::new();
        for resolved in &self.required {
            if !seen.iter().any(|font| font.id == resolved.font.id) {
                seen.push(resolved.font);
            }
        }
        seen
    }

    /// Distinct weights the required levels use for `font_id`, ascending.
    pub fn weights_for(&self, font_id: &str) -> Vec<u16> {
        let mut weights: Vec<u16> = self
            .required
            .iter()
            .filter(|resolved| resolved.entry.font_id == font_id)
            .map(|resolved| resolved.entry.weight)
            .collect();
        weights.sort_unstable();
        weights.dedup();
        weights
    }

    /// Levels (in export order) that use `font_id`.
    pub fn levels_using(&self, font_id: &str) -> Vec<&ResolvedLevel<'a>> {
        self.required
            .iter()
            .filter(|resolved| resolved.entry.font_id == font_id)
            .collect()
    }
}

/// Resolve one combo against a list of families.
pub fn resolve<'a>(
    combo: &'a FontCombo,
    fonts: &'a [FontFamily],
) -> Result<ResolvedFontCombo<'a>, ResolveError> {
    resolve_with(combo, |id| fonts.iter().find(|font| font.id == id))
}

/// Resolve every combo, preserving input order. Fails on the first integrity fault.
pub fn resolve_all<'a>(
    combos: &'a [FontCombo],
    fonts: &'a [FontFamily],
) -> Result<Vec<ResolvedFontCombo<'a>>, ResolveError> {
    let index: HashMap<&str, &'a FontFamily> =
        fonts.iter().map(|font| (font.id.as_str(), font)).collect();
    combos
        .iter()
        .map(|combo| resolve_with(combo, |id| index.get(id).copied()))
        .collect()
}

fn resolve_with<'a, F>(combo: &'a FontCombo, lookup: F) -> Result<ResolvedFontCombo<'a>, ResolveError>
where
    F: Fn(&str) -> Option<&'a FontFamily>,
{
    let find = |font_id: &str, role: FontRole| {
        lookup(font_id).ok_or_else(|| {
            let err = ResolveError {
                combo_id: combo.id.clone(),
                font_id: font_id.to_string(),
                role,
            };
            tracing::error!(error = %err, "catalog integrity fault");
            err
        })
    };

    let primary_font = find(&combo.primary_font_id, FontRole::Primary)?;
    let secondary_font = find(&combo.secondary_font_id, FontRole::Secondary)?;
    let tertiary_font = match &combo.tertiary_font_id {
        Some(id) => Some(find(id, FontRole::Tertiary)?),
        None => None,
    };

    let resolve_level = |(level, entry): (HierarchyLevel, &'a TypeScaleEntry)| {
        find(&entry.font_id, FontRole::Level(level)).map(|font| ResolvedLevel { level, entry, font })
    };

    let [h1, h2, h3, body, caption] = combo.hierarchy.required();
    let required = [
        resolve_level(h1)?,
        resolve_level(h2)?,
        resolve_level(h3)?,
        resolve_level(body)?,
        resolve_level(caption)?,
    ];
    let extended = combo
        .hierarchy
        .entries()
        .filter(|(level, _)| !level.is_required())
        .map(&resolve_level)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ResolvedFontCombo {
        combo,
        primary_font,
        secondary_font,
        tertiary_font,
        required,
        extended,
    })
}
