//! Error types for fontpair-core (made by FontLab https://www.fontlab.com/)

use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::CatalogIssue;

/// Failure to load or accept a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("reading catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog failed validation with {} issue(s); first: {}", .0.len(), first_issue(.0))]
    Invalid(Vec<CatalogIssue>),
}

fn first_issue(issues: &[CatalogIssue]) -> String {
    issues
        .first()
        .map(ToString::to_string)
        .unwrap_or_else(|| "(none)".to_string())
}

/// Which reference of a combo failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontRole {
    Primary,
    Secondary,
    Tertiary,
    Level(crate::model::HierarchyLevel),
}

impl std::fmt::Display for FontRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FontRole::Primary => f.write_str("primary font"),
            FontRole::Secondary => f.write_str("secondary font"),
            FontRole::Tertiary => f.write_str("tertiary font"),
            FontRole::Level(level) => write!(f, "{level} level"),
        }
    }
}

/// Data-integrity fault: a combo references a font the catalog does not contain.
///
/// This is a catalog authoring bug. It is never recovered from by substituting
/// a fallback font.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("combo `{combo_id}`: {role} references unknown font `{font_id}`")]
pub struct ResolveError {
    pub combo_id: String,
    pub font_id: String,
    pub role: FontRole,
}

/// Failure of the durable key-value store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O on key `{key}`: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid storage key `{0}`")]
    InvalidKey(String),

    /// For [`KeyValueStore`](crate::store::KeyValueStore) backends outside this
    /// crate that are switched off or out of quota. The bundled backends only
    /// report `Io` and `InvalidKey`.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// A string did not name a known vocabulary value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind} `{value}` (expected one of: {expected})")]
pub struct ParseValueError {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}
