//! Static catalog of families, combos, and sample copy (made by FontLab https://www.fontlab.com/)

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, FontRole, ResolveError};
use crate::model::{FontCombo, FontFamily};
use crate::resolve::{resolve, resolve_all, ResolvedFontCombo};
use crate::samples::SampleText;

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

static SLUG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug pattern compiles"));

/// Families, curated combos, and per-combo sample copy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub fonts: Vec<FontFamily>,
    pub combos: Vec<FontCombo>,
    #[serde(default)]
    pub samples: BTreeMap<String, SampleText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_sample: Option<SampleText>,
}

/// A data-authoring problem found by [`Catalog::validate`].
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogIssue {
    DuplicateFontId(String),
    EmptyWeights { font_id: String },
    InvalidWeight { font_id: String, weight: u16 },
    /// Weights must be strictly ascending, with no repeats.
    UnorderedWeights { font_id: String },
    DuplicateComboId(String),
    DuplicateSlug(String),
    InvalidSlug { combo_id: String, slug: String },
    UnknownFont { combo_id: String, role: FontRole, font_id: String },
    UnavailableWeight { combo_id: String, role: FontRole, font_id: String, weight: u16 },
    InvalidLineHeight { combo_id: String, role: FontRole, line_height: f64 },
    OrphanSample(String),
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogIssue::DuplicateFontId(id) => write!(f, "font id `{id}` is defined more than once"),
            CatalogIssue::EmptyWeights { font_id } => {
                write!(f, "font `{font_id}` lists no available weights")
            }
            CatalogIssue::InvalidWeight { font_id, weight } => {
                write!(f, "font `{font_id}` lists weight {weight} outside 100-900")
            }
            CatalogIssue::UnorderedWeights { font_id } => {
                write!(f, "font `{font_id}` lists weights out of order or more than once")
            }
            CatalogIssue::DuplicateComboId(id) => write!(f, "combo id `{id}` is defined more than once"),
            CatalogIssue::DuplicateSlug(slug) => write!(f, "slug `{slug}` is used by more than one combo"),
            CatalogIssue::InvalidSlug { combo_id, slug } => {
                write!(f, "combo `{combo_id}` has non URL-safe slug `{slug}`")
            }
            CatalogIssue::UnknownFont {
                combo_id,
                role,
                font_id,
            } => write!(f, "combo `{combo_id}`: {role} references unknown font `{font_id}`"),
            CatalogIssue::UnavailableWeight {
                combo_id,
                role,
                font_id,
                weight,
            } => write!(
                f,
                "combo `{combo_id}`: {role} uses weight {weight}, which `{font_id}` does not ship"
            ),
            CatalogIssue::InvalidLineHeight {
                combo_id,
                role,
                line_height,
            } => write!(
                f,
                "combo `{combo_id}`: {role} has line height {line_height}, expected a positive number"
            ),
            CatalogIssue::OrphanSample(id) => write!(f, "sample text for unknown combo `{id}`"),
        }
    }
}

impl Catalog {
    /// The catalog embedded in this crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    /// Parse a catalog without validating it.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read, parse, and validate a catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&raw)?;
        catalog.ensure_valid()?;
        tracing::debug!(
            path = %path.display(),
            fonts = catalog.fonts.len(),
            combos = catalog.combos.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Fail with every issue when validation finds any.
    pub fn ensure_valid(&self) -> Result<(), CatalogError> {
        let issues = self.validate();
        if issues.is_empty() {
            Ok(())
        } else {
            Err(CatalogError::Invalid(issues))
        }
    }

    pub fn font(&self, id: &str) -> Option<&FontFamily> {
        self.fonts.iter().find(|font| font.id == id)
    }

    pub fn combo(&self, id: &str) -> Option<&FontCombo> {
        self.combos.iter().find(|combo| combo.id == id)
    }

    pub fn combo_by_slug(&self, slug: &str) -> Option<&FontCombo> {
        self.combos.iter().find(|combo| combo.slug == slug)
    }

    /// Look a combo up by id first, then by slug.
    pub fn find_combo(&self, id_or_slug: &str) -> Option<&FontCombo> {
        self.combo(id_or_slug)
            .or_else(|| self.combo_by_slug(id_or_slug))
    }

    /// Every combo resolved, in catalog order.
    pub fn resolve_all(&self) -> Result<Vec<ResolvedFontCombo<'_>>, ResolveError> {
        resolve_all(&self.combos, &self.fonts)
    }

    /// Resolve a catalog combo by id or slug.
    pub fn resolve_combo(
        &self,
        id_or_slug: &str,
    ) -> Option<Result<ResolvedFontCombo<'_>, ResolveError>> {
        self.find_combo(id_or_slug)
            .map(|combo| resolve(combo, &self.fonts))
    }

    /// Curated copy for a combo, falling back to the catalog or built-in default.
    pub fn sample_for(&self, combo_id: &str) -> SampleText {
        self.samples
            .get(combo_id)
            .or(self.default_sample.as_ref())
            .cloned()
            .unwrap_or_default()
    }

    /// Check every authoring invariant and report all problems found.
    pub fn validate(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();

        let mut font_ids = HashSet::new();
        for font in &self.fonts {
            if !font_ids.insert(font.id.as_str()) {
                issues.push(CatalogIssue::DuplicateFontId(font.id.clone()));
            }
            if font.available_weights.is_empty() {
                issues.push(CatalogIssue::EmptyWeights {
                    font_id: font.id.clone(),
                });
            }
            for &weight in &font.available_weights {
                if !(100..=900).contains(&weight) || weight % 100 != 0 {
                    issues.push(CatalogIssue::InvalidWeight {
                        font_id: font.id.clone(),
                        weight,
                    });
                }
            }
            if font.available_weights.windows(2).any(|pair| pair[0] >= pair[1]) {
                issues.push(CatalogIssue::UnorderedWeights {
                    font_id: font.id.clone(),
                });
            }
        }

        let fonts: HashMap<&str, &FontFamily> =
            self.fonts.iter().map(|font| (font.id.as_str(), font)).collect();
        let mut combo_ids = HashSet::new();
        let mut slugs = HashSet::new();

        for combo in &self.combos {
            if !combo_ids.insert(combo.id.as_str()) {
                issues.push(CatalogIssue::DuplicateComboId(combo.id.clone()));
            }
            if !slugs.insert(combo.slug.as_str()) {
                issues.push(CatalogIssue::DuplicateSlug(combo.slug.clone()));
            }
            if !SLUG_PATTERN.is_match(&combo.slug) {
                issues.push(CatalogIssue::InvalidSlug {
                    combo_id: combo.id.clone(),
                    slug: combo.slug.clone(),
                });
            }

            let mut references = vec![
                (FontRole::Primary, combo.primary_font_id.as_str()),
                (FontRole::Secondary, combo.secondary_font_id.as_str()),
            ];
            if let Some(tertiary) = &combo.tertiary_font_id {
                references.push((FontRole::Tertiary, tertiary.as_str()));
            }
            for (role, font_id) in references {
                if !fonts.contains_key(font_id) {
                    issues.push(CatalogIssue::UnknownFont {
                        combo_id: combo.id.clone(),
                        role,
                        font_id: font_id.to_string(),
                    });
                }
            }

            for (level, entry) in combo.hierarchy.entries() {
                let role = FontRole::Level(level);
                if !(entry.line_height.is_finite() && entry.line_height > 0.0) {
                    issues.push(CatalogIssue::InvalidLineHeight {
                        combo_id: combo.id.clone(),
                        role,
                        line_height: entry.line_height,
                    });
                }
                match fonts.get(entry.font_id.as_str()) {
                    None => issues.push(CatalogIssue::UnknownFont {
                        combo_id: combo.id.clone(),
                        role,
                        font_id: entry.font_id.clone(),
                    }),
                    Some(font) if !font.supports_weight(entry.weight) => {
                        issues.push(CatalogIssue::UnavailableWeight {
                            combo_id: combo.id.clone(),
                            role,
                            font_id: font.id.clone(),
                            weight: entry.weight,
                        })
                    }
                    Some(_) => {}
                }
            }
        }

        for sample_id in self.samples.keys() {
            if !combo_ids.contains(sample_id.as_str()) {
                issues.push(CatalogIssue::OrphanSample(sample_id.clone()));
            }
        }

        issues
    }
}
