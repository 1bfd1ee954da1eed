//! Text exports of a resolved combo (made by FontLab https://www.fontlab.com/)
//!
//! Every generator is a pure string builder over a [`ResolvedFontCombo`]:
//! fonts are already joined in, so nothing here can fail, and identical input
//! always yields byte-identical output. Only the five required levels are
//! exported, in the order h1, h2, h3, body, caption.

use crate::model::{FontFamily, FontSource, TypeScaleEntry};
use crate::resolve::{ResolvedFontCombo, ResolvedLevel};
use crate::tags::vocabulary;

vocabulary! {
    /// Export flavours offered for a combo.
    ExportFormat, "export format" {
        Css => "css",
        CssVars => "css-vars",
        Tailwind => "tailwind",
        Link => "link",
        AiSystem => "ai-system",
        AiUi => "ai-ui",
    }
}

impl ExportFormat {
    pub fn render(self, combo: &ResolvedFontCombo<'_>) -> String {
        match self {
            ExportFormat::Css => css_classes(combo),
            ExportFormat::CssVars => css_variables(combo),
            ExportFormat::Tailwind => tailwind_config(combo),
            ExportFormat::Link => google_fonts_link(combo),
            ExportFormat::AiSystem => ai_system_prompt(combo),
            ExportFormat::AiUi => ai_ui_prompt(combo),
        }
    }

    /// Short human title for menus and headings.
    pub fn title(self) -> &'static str {
        match self {
            ExportFormat::Css => "CSS classes",
            ExportFormat::CssVars => "CSS variables",
            ExportFormat::Tailwind => "Tailwind config",
            ExportFormat::Link => "Google Fonts link",
            ExportFormat::AiSystem => "AI system prompt",
            ExportFormat::AiUi => "AI UI prompt",
        }
    }
}

/// `"Name", generic-fallback`
fn font_stack(font: &FontFamily) -> String {
    format!(
        "\"{}\", {}",
        font.name,
        font.classification.generic_fallback()
    )
}

/// One rule block per required level.
pub fn css_classes(combo: &ResolvedFontCombo<'_>) -> String {
    combo
        .required_levels()
        .iter()
        .map(|resolved| {
            let entry = resolved.entry;
            let mut block = vec![
                format!("{} {{", resolved.level.css_selector()),
                format!("  font-family: {};", font_stack(resolved.font)),
                format!("  font-size: {};", entry.size),
                format!("  font-weight: {};", entry.weight),
                format!("  line-height: {};", entry.line_height),
            ];
            if let Some(spacing) = entry.effective_letter_spacing() {
                block.push(format!("  letter-spacing: {spacing};"));
            }
            block.push("}".to_string());
            block.join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// `:root` custom properties: one `--font-*` per distinct family, then the scale.
pub fn css_variables(combo: &ResolvedFontCombo<'_>) -> String {
    let mut lines = vec![":root {".to_string()];
    for font in combo.distinct_fonts() {
        lines.push(format!("  --font-{}: {};", font.id, font_stack(font)));
    }

    for resolved in combo.required_levels() {
        let name = resolved.level.as_str();
        let entry = resolved.entry;
        lines.push(String::new());
        lines.push(format!("  --{name}-font: var(--font-{});", resolved.font.id));
        lines.push(format!("  --{name}-size: {};", entry.size));
        lines.push(format!("  --{name}-weight: {};", entry.weight));
        lines.push(format!("  --{name}-line-height: {};", entry.line_height));
        if let Some(spacing) = entry.effective_letter_spacing() {
            lines.push(format!("  --{name}-letter-spacing: {spacing};"));
        }
    }
    lines.push("}".to_string());
    lines.join("\n")
}

fn tailwind_key(font: &FontFamily) -> String {
    let key: String = font.id.chars().filter(|c| *c != '-').collect();
    if key.starts_with(|c: char| c.is_ascii_digit()) {
        format!("\"{key}\"")
    } else {
        key
    }
}

fn tailwind_size(entry: &TypeScaleEntry) -> String {
    let mut props = vec![
        format!("lineHeight: \"{}\"", entry.line_height),
        format!("fontWeight: \"{}\"", entry.weight),
    ];
    if let Some(spacing) = entry.effective_letter_spacing() {
        props.push(format!("letterSpacing: \"{spacing}\""));
    }
    format!("[\"{}\", {{ {} }}]", entry.size, props.join(", "))
}

/// A `tailwind.config.ts` snippet with one font family per distinct font.
pub fn tailwind_config(combo: &ResolvedFontCombo<'_>) -> String {
    let families = combo
        .distinct_fonts()
        .into_iter()
        .map(|font| {
            format!(
                "        {}: ['\"{}\"', \"{}\"],",
                tailwind_key(font),
                font.name,
                font.classification.generic_fallback()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let sizes = combo
        .required_levels()
        .iter()
        .map(|resolved| {
            format!(
                "        \"{}\": {},",
                resolved.level.as_str(),
                tailwind_size(resolved.entry)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "// tailwind.config.ts
import type {{ Config }} from \"tailwindcss\";

const config: Config = {{
  theme: {{
    extend: {{
      fontFamily: {{
{families}
      }},
      fontSize: {{
{sizes}
      }},
    }},
  }},
}};

export default config;"
    )
}

/// Family key for the Google Fonts CSS API, spaces escaped as `+`.
fn google_family_key(font: &FontFamily) -> String {
    let family = match &font.google_font_id {
        Some(id) if !id.trim().is_empty() => id.trim(),
        _ => font.name.trim(),
    };
    family.split_whitespace().collect::<Vec<_>>().join("+")
}

/// Google Fonts `<link>` tags, or an empty string when no Google family is used.
pub fn google_fonts_link(combo: &ResolvedFontCombo<'_>) -> String {
    let families: Vec<String> = combo
        .distinct_fonts()
        .into_iter()
        .filter(|font| font.source == FontSource::Google)
        .map(|font| {
            let weights = combo
                .weights_for(&font.id)
                .iter()
                .map(u16::to_string)
                .collect::<Vec<_>>()
                .join(";");
            format!("family={}:wght@{weights}", google_family_key(font))
        })
        .collect();

    if families.is_empty() {
        return String::new();
    }

    format!(
        "<link rel=\"preconnect\" href=\"https://fonts.googleapis.com\">
<link rel=\"preconnect\" href=\"https://fonts.gstatic.com\" crossorigin>
<link href=\"https://fonts.googleapis.com/css2?{}&display=swap\" rel=\"stylesheet\">",
        families.join("&")
    )
}

fn role_name(position: usize) -> &'static str {
    match position {
        0 => "Primary",
        1 => "Secondary",
        _ => "Accent",
    }
}

fn scale_line(resolved: &ResolvedLevel<'_>) -> String {
    let entry = resolved.entry;
    let mut line = format!(
        "  {} — {} / {}",
        resolved.level.label(),
        entry.size,
        entry.line_height
    );
    if let Some(spacing) = entry.effective_letter_spacing() {
        line.push_str(&format!(" / {spacing}"));
    }
    line
}

/// Plain-text description of the system, for an assistant's system prompt.
///
/// The family used at h1 is always framed as primary.
pub fn ai_system_prompt(combo: &ResolvedFontCombo<'_>) -> String {
    let mut lines = vec!["Use this typographic system:".to_string()];

    for (position, font) in combo.distinct_fonts().into_iter().enumerate() {
        let usage = combo
            .levels_using(&font.id)
            .iter()
            .map(|resolved| format!("{} ({})", resolved.level.label(), resolved.entry.weight))
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(String::new());
        lines.push(format!("{}:", role_name(position)));
        lines.push(format!("  {} ({})", font.name, font.classification));
        lines.push(format!("  Used for {usage}"));
        if let Some(description) = &font.description {
            lines.push(format!("  {description}"));
        }
    }

    lines.push(String::new());
    lines.push("Tone:".to_string());
    let tone = combo
        .vibe_tags
        .iter()
        .take(3)
        .map(|tag| tag.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    if !tone.is_empty() {
        lines.push(format!("  {tone}"));
    }
    lines.push(format!("  {}", combo.description));

    if let Some(context) = &combo.ai_prompt_context {
        lines.push(String::new());
        lines.push("Context:".to_string());
        lines.push(format!("  {context}"));
    }

    lines.push(String::new());
    lines.push("Use this scale:".to_string());
    lines.extend(combo.required_levels().iter().map(scale_line));

    lines.join("\n")
}

/// Instruction block for generating UI with this system.
pub fn ai_ui_prompt(combo: &ResolvedFontCombo<'_>) -> String {
    let mut lines = vec![
        "When generating UI or HTML, use this typography system:".to_string(),
        String::new(),
    ];

    for resolved in combo.required_levels() {
        let entry = resolved.entry;
        let mut line = format!(
            "{} — {} — {} — {} — line-height {}",
            resolved.level.label(),
            resolved.font.name,
            entry.weight,
            entry.size,
            entry.line_height
        );
        if let Some(spacing) = entry.effective_letter_spacing() {
            line.push_str(&format!(" — letter-spacing {spacing}"));
        }
        lines.push(line);
    }

    let heading_feel = combo
        .vibe_tags
        .iter()
        .take(2)
        .map(|tag| tag.as_str())
        .collect::<Vec<_>>()
        .join(" and ");
    let heading_feel = if heading_feel.is_empty() {
        "balanced".to_string()
    } else {
        heading_feel
    };
    let body_feel = match combo.body().font.classification {
        crate::model::FontClassification::Serif => "refined",
        _ => "modern",
    };

    lines.push(String::new());
    lines.push(format!("Headings should feel {heading_feel}."));
    lines.push(format!("Body text should feel readable and {body_feel}."));
    lines.push(String::new());
    lines.push("Do NOT mix additional fonts.".to_string());
    lines.push("Maintain consistent hierarchy throughout.".to_string());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names_match_flag_spelling() {
        assert_eq!("css-vars".parse::<ExportFormat>(), Ok(ExportFormat::CssVars));
        assert_eq!(ExportFormat::AiUi.to_string(), "ai-ui");
        assert_eq!(ExportFormat::ALL.len(), 6);
    }

    #[test]
    fn tailwind_keys_drop_hyphens_and_quote_leading_digits() {
        let mut font = FontFamily {
            id: "source-serif-4".into(),
            name: "Source Serif 4".into(),
            source: FontSource::Google,
            classification: crate::model::FontClassification::Serif,
            available_weights: vec![400],
            designer: None,
            year_released: None,
            description: None,
            google_font_id: None,
            category: None,
        };
        assert_eq!(tailwind_key(&font), "sourceserif4");
        font.id = "3d-sans".into();
        assert_eq!(tailwind_key(&font), "\"3dsans\"");
        assert_eq!(google_family_key(&font), "Source+Serif+4");
    }
}
