//! Catalog data model (made by FontLab https://www.fontlab.com/)

use serde::{Deserialize, Serialize};

pub use crate::tags::{
    FontClassification, FontSource, HierarchyLevel, Timelessness, UsageContext, VibeTag,
};

/// A typeface family as listed in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontFamily {
    pub id: String,
    pub name: String,
    pub source: FontSource,
    pub classification: FontClassification,
    pub available_weights: Vec<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_released: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Family key understood by the Google Fonts CSS API (`Playfair+Display`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_font_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl FontFamily {
    pub fn supports_weight(&self, weight: u16) -> bool {
        self.available_weights.contains(&weight)
    }
}

/// Settings for one level of a type hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeScaleEntry {
    pub font_id: String,
    pub weight: u16,
    /// Size with unit, e.g. `48px` or `3rem`.
    pub size: String,
    /// Unitless ratio.
    pub line_height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<String>,
}

impl TypeScaleEntry {
    /// Letter spacing worth emitting: present, not `normal`, and not a zero length.
    pub fn effective_letter_spacing(&self) -> Option<&str> {
        let raw = self.letter_spacing.as_deref()?.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("normal") {
            return None;
        }
        let number = raw.trim_end_matches(|c: char| c.is_ascii_alphabetic() || c == '%');
        match number.parse::<f64>() {
            Ok(value) if value == 0.0 => None,
            _ => Some(raw),
        }
    }
}

/// The type scale of a combo: five required levels plus optional extras.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeHierarchy {
    pub h1: TypeScaleEntry,
    pub h2: TypeScaleEntry,
    pub h3: TypeScaleEntry,
    pub body: TypeScaleEntry,
    pub caption: TypeScaleEntry,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<TypeScaleEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h4: Option<TypeScaleEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h5: Option<TypeScaleEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h6: Option<TypeScaleEntry>,
    #[serde(
        rename = "body-large",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub body_large: Option<TypeScaleEntry>,
    #[serde(
        rename = "body-small",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub body_small: Option<TypeScaleEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overline: Option<TypeScaleEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<TypeScaleEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub micro: Option<TypeScaleEntry>,
}

impl TypeHierarchy {
    /// Hierarchy with only the five required levels.
    pub fn new(
        h1: TypeScaleEntry,
        h2: TypeScaleEntry,
        h3: TypeScaleEntry,
        body: TypeScaleEntry,
        caption: TypeScaleEntry,
    ) -> Self {
        Self {
            h1,
            h2,
            h3,
            body,
            caption,
            display: None,
            h4: None,
            h5: None,
            h6: None,
            body_large: None,
            body_small: None,
            overline: None,
            label: None,
            micro: None,
        }
    }

    pub fn entry(&self, level: HierarchyLevel) -> Option<&TypeScaleEntry> {
        match level {
            HierarchyLevel::H1 => Some(&self.h1),
            HierarchyLevel::H2 => Some(&self.h2),
            HierarchyLevel::H3 => Some(&self.h3),
            HierarchyLevel::Body => Some(&self.body),
            HierarchyLevel::Caption => Some(&self.caption),
            HierarchyLevel::Display => self.display.as_ref(),
            HierarchyLevel::H4 => self.h4.as_ref(),
            HierarchyLevel::H5 => self.h5.as_ref(),
            HierarchyLevel::H6 => self.h6.as_ref(),
            HierarchyLevel::BodyLarge => self.body_large.as_ref(),
            HierarchyLevel::BodySmall => self.body_small.as_ref(),
            HierarchyLevel::Overline => self.overline.as_ref(),
            HierarchyLevel::Label => self.label.as_ref(),
            HierarchyLevel::Micro => self.micro.as_ref(),
        }
    }

    /// The five required levels in export order.
    pub fn required(&self) -> [(HierarchyLevel, &TypeScaleEntry); 5] {
        [
            (HierarchyLevel::H1, &self.h1),
            (HierarchyLevel::H2, &self.h2),
            (HierarchyLevel::H3, &self.h3),
            (HierarchyLevel::Body, &self.body),
            (HierarchyLevel::Caption, &self.caption),
        ]
    }

    /// Every defined level, required and extended, in canonical order.
    pub fn entries(&self) -> impl Iterator<Item = (HierarchyLevel, &TypeScaleEntry)> + '_ {
        HierarchyLevel::ALL
            .iter()
            .filter_map(move |level| self.entry(*level).map(|entry| (*level, entry)))
    }
}

/// A curated pairing of families with a complete type scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontCombo {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub primary_font_id: String,
    pub secondary_font_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tertiary_font_id: Option<String>,
    pub usage_contexts: Vec<UsageContext>,
    pub vibe_tags: Vec<VibeTag>,
    pub timelessness: Timelessness,
    pub hierarchy: TypeHierarchy,
    pub description: String,
    /// Extra guidance appended to generated AI prompts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_prompt_context: Option<String>,
    /// Hex colors suggested alongside the pairing.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommended_palette: Vec<String>,
}
