/// fontpair-core: curated font pairings and everything you can do with them
///
/// A catalog of font families and hand-picked pairings ("combos"), each with
/// a complete type scale. The library answers the questions a pairing
/// browser asks:
///
/// - **Catalog**: load the embedded or a custom JSON catalog and check it for
///   authoring mistakes before anything else sees it.
/// - **Resolve**: join every combo with the families it references, so the
///   rest of the crate never handles a dangling font id.
/// - **Filter**: narrow combos by text, timelessness, vibe, usage context,
///   and font source, then order them for display.
/// - **Collect**: favorites, a three-slot comparison set, custom preview copy,
///   and a recently viewed list, persisted to a small key-value store.
/// - **Export**: CSS rules, CSS variables, a Tailwind config, Google Fonts
///   links, and prompts describing the system to an AI assistant.
///
/// ```rust,no_run
/// use fontpair_core::catalog::Catalog;
/// use fontpair_core::export::ExportFormat;
/// use fontpair_core::filter::{filter, FilterCriteria};
/// use fontpair_core::model::VibeTag;
///
/// let catalog = Catalog::builtin()?;
/// let combos = catalog.resolve_all()?;
/// let criteria = FilterCriteria::new()
///     .with_vibe_tags(vec![VibeTag::Editorial])
///     .google_fonts_only(true);
///
/// for combo in filter(&combos, &criteria) {
///     println!("{}", ExportFormat::Link.render(&combo));
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// Made with care at FontLab https://www.fontlab.com/
pub mod catalog;
pub mod error;
pub mod export;
pub mod filter;
pub mod model;
pub mod output;
pub mod resolve;
pub mod samples;
pub mod store;
pub mod tags;
