use fontpair_core::catalog::Catalog;
use fontpair_core::export::{
    ai_system_prompt, ai_ui_prompt, css_classes, css_variables, google_fonts_link,
    tailwind_config, ExportFormat,
};
use fontpair_core::model::{
    FontClassification, FontCombo, FontFamily, FontSource, Timelessness, TypeHierarchy,
    TypeScaleEntry, VibeTag,
};
use fontpair_core::resolve::resolve;

fn inter() -> FontFamily {
    FontFamily {
        id: "inter".into(),
        name: "Inter".into(),
        source: FontSource::Google,
        classification: FontClassification::Sans,
        available_weights: vec![400, 700],
        designer: None,
        year_released: None,
        description: Some("Screen sans.".into()),
        google_font_id: Some("Inter".into()),
        category: None,
    }
}

fn entry(font: &str, weight: u16, size: &str, line_height: f64) -> TypeScaleEntry {
    TypeScaleEntry {
        font_id: font.into(),
        weight,
        size: size.into(),
        line_height,
        letter_spacing: None,
    }
}

fn inter_only() -> FontCombo {
    FontCombo {
        id: "inter-only".into(),
        name: "Inter".into(),
        slug: "inter".into(),
        primary_font_id: "inter".into(),
        secondary_font_id: "inter".into(),
        tertiary_font_id: None,
        usage_contexts: Vec::new(),
        vibe_tags: vec![VibeTag::Minimal, VibeTag::Tech, VibeTag::Clean, VibeTag::Modern],
        timelessness: Timelessness::ModernClassic,
        hierarchy: TypeHierarchy::new(
            entry("inter", 700, "48px", 1.1),
            entry("inter", 400, "32px", 1.2),
            entry("inter", 400, "24px", 1.3),
            entry("inter", 400, "16px", 1.7),
            entry("inter", 400, "14px", 1.5),
        ),
        description: "One family.".into(),
        ai_prompt_context: None,
        recommended_palette: Vec::new(),
    }
}

#[test]
fn single_family_combo_exports_one_font() {
    let fonts = vec![inter()];
    let combo = inter_only();
    let resolved = resolve(&combo, &fonts).expect("resolve");

    let link = google_fonts_link(&resolved);
    assert_eq!(link.matches("family=").count(), 1);
    assert!(link.contains("family=Inter:wght@400;700&display=swap"));

    let css = css_classes(&resolved);
    assert_eq!(css.split("\n\n").count(), 5);
    assert_eq!(css.matches('{').count(), 5);

    let tailwind = tailwind_config(&resolved);
    assert_eq!(tailwind.matches("inter: ['\"Inter\"', \"sans-serif\"],").count(), 1);
}

#[test]
fn css_blocks_follow_level_order_and_skip_zero_spacing() {
    let fonts = vec![inter()];
    let mut combo = inter_only();
    combo.hierarchy.h1.letter_spacing = Some("-0.02em".into());
    combo.hierarchy.h2.letter_spacing = Some("0em".into());
    let resolved = resolve(&combo, &fonts).expect("resolve");

    let css = css_classes(&resolved);
    let expected_h1 = "h1 {\n  font-family: \"Inter\", sans-serif;\n  font-size: 48px;\n  font-weight: 700;\n  line-height: 1.1;\n  letter-spacing: -0.02em;\n}";
    assert!(css.starts_with(expected_h1), "{css}");
    assert_eq!(css.matches("letter-spacing").count(), 1);

    let selectors: Vec<&str> = css
        .lines()
        .filter(|line| line.ends_with(" {"))
        .collect();
    assert_eq!(selectors, ["h1 {", "h2 {", "h3 {", ".body {", ".caption {"]);
}

#[test]
fn link_weights_are_sorted_and_unique() {
    let fonts = vec![inter()];
    let mut combo = inter_only();
    combo.hierarchy.h1 = entry("inter", 700, "48px", 1.1);
    combo.hierarchy.h2 = entry("inter", 400, "32px", 1.2);
    combo.hierarchy.body = entry("inter", 400, "16px", 1.7);
    let resolved = resolve(&combo, &fonts).expect("resolve");

    assert!(google_fonts_link(&resolved).contains("wght@400;700&"));
}

#[test]
fn link_escapes_spaces_in_catalog_family_keys() {
    let mut font = inter();
    font.google_font_id = Some("Playfair Display".into());
    let fonts = vec![font];
    let combo = inter_only();
    let resolved = resolve(&combo, &fonts).expect("resolve");

    let link = google_fonts_link(&resolved);
    assert!(link.contains("family=Playfair+Display:wght@400;700&"), "{link}");
    assert!(!link.contains("Playfair Display"));
}

#[test]
fn link_is_empty_without_google_fonts() {
    let mut font = inter();
    font.source = FontSource::Custom;
    let fonts = vec![font];
    let combo = inter_only();
    let resolved = resolve(&combo, &fonts).expect("resolve");

    assert_eq!(google_fonts_link(&resolved), "");
}

#[test]
fn every_format_is_deterministic() {
    let catalog = Catalog::builtin().expect("builtin catalog");
    for resolved in catalog.resolve_all().expect("resolve") {
        for format in ExportFormat::ALL {
            assert_eq!(
                format.render(&resolved),
                format.render(&resolved),
                "{} for {}",
                format,
                resolved.id
            );
        }
    }
}

#[test]
fn pairing_exports_name_both_families() {
    let catalog = Catalog::builtin().expect("builtin catalog");
    let resolved = catalog
        .resolve_combo("playfair-inter")
        .expect("known")
        .expect("resolves");

    let link = google_fonts_link(&resolved);
    assert!(link.contains("family=Playfair+Display:wght@600;700&family=Inter:wght@400&display=swap"));

    let vars = css_variables(&resolved);
    assert!(vars.starts_with(":root {\n  --font-playfair-display: \"Playfair Display\", serif;\n  --font-inter: \"Inter\", sans-serif;\n"));
    assert!(vars.contains("  --body-font: var(--font-inter);"));
    assert!(vars.contains("  --h1-letter-spacing: -0.02em;"));
    assert!(vars.ends_with("\n}"));

    let tailwind = tailwind_config(&resolved);
    assert!(tailwind.contains("playfairdisplay: ['\"Playfair Display\"', \"serif\"],"));
    assert!(tailwind.contains(
        "\"h1\": [\"48px\", { lineHeight: \"1.1\", fontWeight: \"700\", letterSpacing: \"-0.02em\" }],"
    ));
    assert!(tailwind.contains("\"caption\": [\"14px\", { lineHeight: \"1.5\", fontWeight: \"400\" }],"));
}

#[test]
fn system_prompt_frames_h1_font_as_primary() {
    let catalog = Catalog::builtin().expect("builtin catalog");
    let resolved = catalog
        .resolve_combo("playfair-inter")
        .expect("known")
        .expect("resolves");

    let prompt = ai_system_prompt(&resolved);
    assert!(prompt.starts_with("Use this typographic system:\n\nPrimary:\n  Playfair Display (serif)\n  Used for H1 (700), H2 (600), H3 (600)"));
    assert!(prompt.contains("Secondary:\n  Inter (sans)\n  Used for Body (400), Caption (400)"));
    assert!(prompt.contains("Tone:\n  elegant, modern, editorial\n"));
    assert!(prompt.contains("Context:\n  This pairing conveys"));
    assert!(prompt.ends_with("  Body — 16px / 1.7\n  Caption — 14px / 1.5"));
    assert!(prompt.contains("  H1 — 48px / 1.1 / -0.02em\n"));
}

#[test]
fn ui_prompt_lists_levels_and_body_feel() {
    let catalog = Catalog::builtin().expect("builtin catalog");
    let serif_body = catalog
        .resolve_combo("merriweather-open-sans")
        .expect("known")
        .expect("resolves");

    let prompt = ai_ui_prompt(&serif_body);
    assert!(prompt.contains("H1 — Merriweather — 700 — 42px — line-height 1.15\n"));
    assert!(prompt.contains("Caption — Open Sans — 400 — 14px — line-height 1.5\n"));
    assert!(prompt.contains("Headings should feel warm and professional."));
    assert!(prompt.contains("Body text should feel readable and refined."));
    assert!(prompt.ends_with("Do NOT mix additional fonts.\nMaintain consistent hierarchy throughout."));
}

#[test]
fn ui_prompt_without_vibes_stays_readable() {
    let fonts = vec![inter()];
    let mut combo = inter_only();
    combo.vibe_tags.clear();
    let resolved = resolve(&combo, &fonts).expect("resolve");

    let prompt = ai_ui_prompt(&resolved);
    assert!(prompt.contains("Headings should feel balanced."));
    assert!(prompt.contains("Body text should feel readable and modern."));
}
