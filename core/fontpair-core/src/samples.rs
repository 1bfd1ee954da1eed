//! Canned preview copy for combos (made by FontLab https://www.fontlab.com/)

use serde::{Deserialize, Serialize};

use crate::store::PreviewText;

/// Sample copy written to show off a particular pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleText {
    pub headline: String,
    pub subhead: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_quote: Option<String>,
    /// Attribution or other small print.
    pub micro: String,
}

impl Default for SampleText {
    fn default() -> Self {
        Self {
            headline: "Typography Matters".to_string(),
            subhead: "The invisible art that shapes how we read".to_string(),
            body: "Great typography disappears into the reading experience, guiding the eye \
                   without calling attention to itself. The best font pairings create harmony \
                   between form and function."
                .to_string(),
            pull_quote: Some("Typography is the voice of design.".to_string()),
            micro: "Unknown".to_string(),
        }
    }
}

impl SampleText {
    /// Replace headline, subhead, and body with any non-blank override.
    pub fn with_overrides(&self, overrides: &PreviewText) -> SampleText {
        let pick = |custom: &str, canned: &str| {
            if custom.trim().is_empty() {
                canned.to_string()
            } else {
                custom.to_string()
            }
        };

        SampleText {
            headline: pick(&overrides.headline, &self.headline),
            subhead: pick(&overrides.subhead, &self.subhead),
            body: pick(&overrides.body, &self.body),
            pull_quote: self.pull_quote.clone(),
            micro: self.micro.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_overrides_keep_canned_copy() {
        let canned = SampleText::default();
        let overrides = PreviewText {
            headline: "Hello".to_string(),
            subhead: "   ".to_string(),
            body: String::new(),
        };

        let merged = canned.with_overrides(&overrides);
        assert_eq!(merged.headline, "Hello");
        assert_eq!(merged.subhead, canned.subhead);
        assert_eq!(merged.body, canned.body);
        assert_eq!(merged.micro, "Unknown");
    }
}
