/// The small vocabularies a catalog speaks in
///
/// Vibe tags, usage contexts, timelessness buckets, sources, and
/// classifications all travel through JSON and command lines as short
/// kebab- or snake-cased words. Every enum here parses from and prints as
/// exactly the spelling the catalog uses, so the same word works in a data
/// file, a filter flag, and an export.
///
/// Made with curiosity at FontLab https://www.fontlab.com/
use std::str::FromStr;

use crate::error::ParseValueError;

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::ParseValueError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                let wanted = raw.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|value| value.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| $crate::error::ParseValueError {
                        kind: $kind,
                        value: raw.to_string(),
                        expected: $name::ALL
                            .iter()
                            .map(|value| value.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
            }
        }
    };
}

pub(crate) use vocabulary;

vocabulary! {
    /// Where a family's files come from.
    FontSource, "font source" {
        Google => "google",
        Adobe => "adobe",
        Custom => "custom",
    }
}

vocabulary! {
    /// Broad structural classification of a family.
    FontClassification, "classification" {
        Sans => "sans",
        Serif => "serif",
        Slab => "slab",
        Display => "display",
        Mono => "mono",
    }
}

impl FontClassification {
    /// Generic CSS family used as the fallback after the named family.
    pub fn generic_fallback(self) -> &'static str {
        match self {
            FontClassification::Serif => "serif",
            FontClassification::Mono => "monospace",
            _ => "sans-serif",
        }
    }
}

vocabulary! {
    /// How long a pairing is expected to stay in fashion.
    Timelessness, "timelessness" {
        Timeless => "timeless",
        ModernClassic => "modern_classic",
        Trending => "trending",
    }
}

vocabulary! {
    /// Mood tags attached to a combo.
    VibeTag, "vibe tag" {
        Luxury => "luxury",
        Calm => "calm",
        Tech => "tech",
        Stoic => "stoic",
        Minimal => "minimal",
        Playful => "playful",
        Editorial => "editorial",
        Masculine => "masculine",
        Feminine => "feminine",
        Warm => "warm",
        Cool => "cool",
        Bold => "bold",
        Elegant => "elegant",
        Modern => "modern",
        Classic => "classic",
        Professional => "professional",
        Readable => "readable",
        Friendly => "friendly",
        Rounded => "rounded",
        Approachable => "approachable",
        Urban => "urban",
        Impactful => "impactful",
        Condensed => "condensed",
        Stylish => "stylish",
        Retro => "retro",
        Fun => "fun",
        Industrial => "industrial",
        Striking => "striking",
        Accessible => "accessible",
        Inclusive => "inclusive",
        Clear => "clear",
        Fashion => "fashion",
        Sophisticated => "sophisticated",
        Literary => "literary",
        Neutral => "neutral",
        Clean => "clean",
        Timeless => "timeless",
    }
}

vocabulary! {
    /// Kinds of product a combo is suited for.
    UsageContext, "usage context" {
        SaasUi => "saas-ui",
        Branding => "branding",
        Editorial => "editorial",
        Portfolio => "portfolio",
        LandingPage => "landing-page",
        Dashboard => "dashboard",
        Blog => "blog",
        Ecommerce => "ecommerce",
        Corporate => "corporate",
    }
}

vocabulary! {
    /// One level of a type hierarchy, in canonical top-to-bottom order.
    HierarchyLevel, "hierarchy level" {
        Display => "display",
        H1 => "h1",
        H2 => "h2",
        H3 => "h3",
        H4 => "h4",
        H5 => "h5",
        H6 => "h6",
        BodyLarge => "body-large",
        Body => "body",
        BodySmall => "body-small",
        Caption => "caption",
        Overline => "overline",
        Label => "label",
        Micro => "micro",
    }
}

impl HierarchyLevel {
    /// The five levels every combo must define, in export order.
    pub const REQUIRED: [HierarchyLevel; 5] = [
        HierarchyLevel::H1,
        HierarchyLevel::H2,
        HierarchyLevel::H3,
        HierarchyLevel::Body,
        HierarchyLevel::Caption,
    ];

    pub fn is_required(self) -> bool {
        HierarchyLevel::REQUIRED.contains(&self)
    }

    pub fn is_heading(self) -> bool {
        matches!(
            self,
            HierarchyLevel::H1
                | HierarchyLevel::H2
                | HierarchyLevel::H3
                | HierarchyLevel::H4
                | HierarchyLevel::H5
                | HierarchyLevel::H6
        )
    }

    /// Human label used in prompts and tables ("H1", "Body", "Body large").
    pub fn label(self) -> &'static str {
        match self {
            HierarchyLevel::Display => "Display",
            HierarchyLevel::H1 => "H1",
            HierarchyLevel::H2 => "H2",
            HierarchyLevel::H3 => "H3",
            HierarchyLevel::H4 => "H4",
            HierarchyLevel::H5 => "H5",
            HierarchyLevel::H6 => "H6",
            HierarchyLevel::BodyLarge => "Body large",
            HierarchyLevel::Body => "Body",
            HierarchyLevel::BodySmall => "Body small",
            HierarchyLevel::Caption => "Caption",
            HierarchyLevel::Overline => "Overline",
            HierarchyLevel::Label => "Label",
            HierarchyLevel::Micro => "Micro",
        }
    }

    /// Headings map to element selectors, every other level to a class.
    pub fn css_selector(self) -> String {
        if self.is_heading() {
            self.as_str().to_string()
        } else {
            format!(".{}", self.as_str())
        }
    }
}

/// Parse a list of raw strings into vocabulary values, rejecting unknown words.
pub fn parse_tag_list<T>(raw: &[String]) -> Result<Vec<T>, ParseValueError>
where
    T: FromStr<Err = ParseValueError>,
{
    raw.iter()
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.parse())
        .collect()
}
