//! fontpair CLI (made by FontLab https://www.fontlab.com/)

use std::env;
use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum, ValueHint};
use directories::ProjectDirs;
use tracing_subscriber::EnvFilter;

use fontpair_core::catalog::Catalog;
use fontpair_core::export::ExportFormat;
use fontpair_core::filter::{filter, sort_combos, FilterCriteria, SortOrder};
use fontpair_core::model::{HierarchyLevel, Timelessness, UsageContext, VibeTag};
use fontpair_core::output::{write_json_pretty, write_ndjson};
use fontpair_core::resolve::ResolvedFontCombo;
use fontpair_core::store::{
    CollectionStore, FileStore, PreviewField, PreviewPatch, Toggle, MAX_COMPARE_ITEMS,
};
use fontpair_core::tags::parse_tag_list;

const CATALOG_ENV: &str = "FONTPAIR_CATALOG";
const STATE_DIR_ENV: &str = "FONTPAIR_STATE_DIR";

/// CLI entrypoint for fontpair.
#[derive(Debug, Parser)]
#[command(
    name = "fontpair",
    about = "Browse, collect, and export curated font pairings (made by FontLab https://www.fontlab.com/)"
)]
pub struct Cli {
    /// JSON catalog to use instead of the built-in one [env: FONTPAIR_CATALOG]
    #[arg(long = "catalog", global = true, value_hint = ValueHint::FilePath)]
    catalog: Option<PathBuf>,

    /// Directory holding favorites, comparison, and preview state [env: FONTPAIR_STATE_DIR]
    #[arg(long = "state-dir", global = true, value_hint = ValueHint::DirPath)]
    state_dir: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug); RUST_LOG wins when set
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Control colorized output (auto|always|never)
    #[arg(long = "color", global = true, default_value_t = ColorChoice::Auto, value_enum)]
    color: ColorChoice,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List combos, optionally filtered and sorted
    List(ListArgs),
    /// Show one combo in detail and remember it as recently viewed
    Show(ShowArgs),
    /// Print a combo as CSS, Tailwind config, a font link, or an AI prompt
    Export(ExportArgs),
    /// Manage favorite combos
    Fav {
        #[command(subcommand)]
        action: FavAction,
    },
    /// Manage the side-by-side comparison set (at most three combos)
    Compare {
        #[command(subcommand)]
        action: CompareAction,
    },
    /// Manage custom preview text
    Preview {
        #[command(subcommand)]
        action: PreviewAction,
    },
    /// Recently viewed combos
    Recent {
        #[command(subcommand)]
        action: RecentAction,
    },
    /// Check the catalog for authoring problems
    Validate,
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Case-insensitive text matched against names, descriptions, and tags
    #[arg(short = 'q', long = "search")]
    search: Option<String>,

    /// Allowed timelessness values (timeless, modern_classic, trending)
    #[arg(long = "timelessness", value_delimiter = ',')]
    timelessness: Vec<String>,

    /// Vibe tags; a combo needs at least one of them
    #[arg(long = "vibe", value_delimiter = ',')]
    vibes: Vec<String>,

    /// Usage contexts; a combo needs at least one of them
    #[arg(long = "context", value_delimiter = ',')]
    contexts: Vec<String>,

    /// Only combos whose primary and secondary fonts are on Google Fonts
    #[arg(long = "google-only", action = ArgAction::SetTrue)]
    google_only: bool,

    /// Only favorite combos
    #[arg(long = "favorites-only", action = ArgAction::SetTrue)]
    favorites_only: bool,

    /// Ordering (catalog, name-asc, name-desc, timeless, trending)
    #[arg(long = "sort", default_value_t = SortOrder::Catalog)]
    sort: SortOrder,

    /// Emit a single JSON array
    #[arg(long = "json", action = ArgAction::SetTrue, conflicts_with = "ndjson")]
    json: bool,

    /// Emit newline-delimited JSON
    #[arg(long = "ndjson", action = ArgAction::SetTrue)]
    ndjson: bool,

    /// Format output as padded columns
    #[arg(long = "columns", action = ArgAction::SetTrue)]
    columns: bool,
}

#[derive(Debug, Args)]
struct ShowArgs {
    /// Combo id or slug
    target: String,

    /// Emit the resolved combo as JSON
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,
}

#[derive(Debug, Args)]
struct ExportArgs {
    /// Combo id or slug
    target: String,

    /// css, css-vars, tailwind, link, ai-system, or ai-ui
    #[arg(short = 'f', long = "format", default_value_t = ExportFormat::Css, conflicts_with = "all")]
    format: ExportFormat,

    /// Print every format, each under a heading
    #[arg(long = "all", action = ArgAction::SetTrue)]
    all: bool,
}

#[derive(Debug, Subcommand)]
enum FavAction {
    /// Add the combo if absent, remove it if present
    Toggle { target: String },
    Add { target: String },
    Remove { target: String },
    List,
    Clear,
}

#[derive(Debug, Subcommand)]
enum CompareAction {
    /// Add the combo if absent and there is room, remove it if present
    Toggle { target: String },
    Add { target: String },
    Remove { target: String },
    List,
    Clear,
    /// Print the compared type scales side by side
    Show,
}

#[derive(Debug, Subcommand)]
enum PreviewAction {
    /// Commit one or more preview fields (each cut to 200 characters)
    Set(PreviewSetArgs),
    Clear,
    /// Show stored overrides, or the effective preview for a combo
    Show { target: Option<String> },
}

#[derive(Debug, Args)]
#[command(group(
    clap::ArgGroup::new("fields")
        .required(true)
        .multiple(true)
        .args(["headline", "subhead", "body"])
))]
struct PreviewSetArgs {
    #[arg(long = "headline")]
    headline: Option<String>,
    #[arg(long = "subhead")]
    subhead: Option<String>,
    #[arg(long = "body")]
    body: Option<String>,
}

#[derive(Debug, Subcommand)]
enum RecentAction {
    List,
    Clear,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

/// Settings after flags, environment, and defaults have been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Settings {
    catalog: Option<PathBuf>,
    state_dir: PathBuf,
}

fn resolve_settings(cli: &Cli) -> Settings {
    let catalog = cli
        .catalog
        .clone()
        .or_else(|| env::var_os(CATALOG_ENV).filter(|v| !v.is_empty()).map(PathBuf::from));
    let state_dir = cli
        .state_dir
        .clone()
        .or_else(|| env::var_os(STATE_DIR_ENV).filter(|v| !v.is_empty()).map(PathBuf::from))
        .unwrap_or_else(default_state_dir);
    Settings { catalog, state_dir }
}

fn default_state_dir() -> PathBuf {
    ProjectDirs::from("", "", "fontpair")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".fontpair"))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    // A subscriber may already be installed when running under tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Parse CLI args and execute the selected command.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let use_color = match cli.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => handle.is_terminal(),
    };

    execute(cli, &mut handle, use_color)
}

fn execute(cli: Cli, out: &mut impl Write, color: bool) -> Result<()> {
    let settings = resolve_settings(&cli);
    tracing::debug!(?settings, "resolved settings");

    if let Command::Validate = cli.command {
        return run_validate(settings.catalog.as_deref(), out);
    }

    let catalog = load_catalog(settings.catalog.as_deref())?;
    let mut store = CollectionStore::open(FileStore::new(&settings.state_dir));
    let mut app = App {
        catalog: &catalog,
        store: &mut store,
        color,
    };

    match cli.command {
        Command::List(args) => app.list(&args, out),
        Command::Show(args) => app.show(&args, out),
        Command::Export(args) => app.export(&args, out),
        Command::Fav { action } => app.fav(action, out),
        Command::Compare { action } => app.compare(action, out),
        Command::Preview { action } => app.preview(action, out),
        Command::Recent { action } => app.recent(action, out),
        Command::Validate => unreachable!("handled before the store is opened"),
    }
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("loading catalog {}", path.display())),
        None => Catalog::builtin().context("parsing the built-in catalog"),
    }
}

fn run_validate(path: Option<&Path>, out: &mut impl Write) -> Result<()> {
    let catalog = match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading catalog {}", path.display()))?;
            Catalog::from_json_str(&raw)
                .with_context(|| format!("parsing catalog {}", path.display()))?
        }
        None => Catalog::builtin().context("parsing the built-in catalog")?,
    };

    let issues = catalog.validate();
    for issue in &issues {
        writeln!(out, "{issue}")?;
    }
    if !issues.is_empty() {
        bail!("catalog has {} issue(s)", issues.len());
    }
    writeln!(
        out,
        "ok: {} fonts, {} combos",
        catalog.fonts.len(),
        catalog.combos.len()
    )?;
    Ok(())
}

struct App<'a> {
    catalog: &'a Catalog,
    store: &'a mut CollectionStore<FileStore>,
    color: bool,
}

impl<'a> App<'a> {
    fn resolved(&self, target: &str) -> Result<ResolvedFontCombo<'a>> {
        let catalog: &'a Catalog = self.catalog;
        match catalog.resolve_combo(target) {
            Some(resolved) => Ok(resolved?),
            None => Err(anyhow!("unknown combo `{target}`")),
        }
    }

    /// Catalog id for a target; stale ids already in `held` are accepted as-is.
    fn combo_id(&self, target: &str, held: &[String]) -> Result<String> {
        if let Some(combo) = self.catalog.find_combo(target) {
            return Ok(combo.id.clone());
        }
        if held.iter().any(|id| id == target) {
            return Ok(target.to_string());
        }
        Err(anyhow!("unknown combo `{target}`"))
    }

    fn display_name(&self, id: &str) -> String {
        self.catalog
            .combo(id)
            .map(|combo| combo.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    fn list(&mut self, args: &ListArgs, out: &mut impl Write) -> Result<()> {
        let criteria = build_criteria(args, self.store.favorites())?;
        let all = self.catalog.resolve_all()?;
        let mut combos = filter(&all, &criteria);
        sort_combos(&mut combos, args.sort);

        let favorites = self.store.favorites();
        if args.ndjson {
            write_ndjson(&combos, &mut *out)?;
        } else if args.json {
            write_json_pretty(&combos, &mut *out)?;
        } else if args.columns {
            write_columns(&combos, favorites, out, self.color)?;
        } else {
            write_plain(&combos, favorites, out, self.color)?;
        }
        Ok(())
    }

    fn show(&mut self, args: &ShowArgs, out: &mut impl Write) -> Result<()> {
        let combo = self.resolved(&args.target)?;
        self.store.record_view(&combo.id);

        if args.json {
            let json = serde_json::to_string_pretty(&combo)?;
            writeln!(out, "{json}")?;
            return Ok(());
        }

        let marker = if self.store.is_favorite(&combo.id) {
            " *"
        } else {
            ""
        };
        writeln!(
            out,
            "{}{marker}",
            apply_color(&format!("{} ({})", combo.name, combo.id), self.color, AnsiColor::Cyan)
        )?;
        writeln!(out, "slug: {}", combo.slug)?;
        let mut fonts = vec![describe_font_role("primary", combo.primary_font)];
        fonts.push(describe_font_role("secondary", combo.secondary_font));
        if let Some(tertiary) = combo.tertiary_font {
            fonts.push(describe_font_role("tertiary", tertiary));
        }
        for line in fonts {
            writeln!(out, "{line}")?;
        }
        writeln!(out, "timelessness: {}", combo.timelessness)?;
        writeln!(out, "vibes: {}", join_display(&combo.vibe_tags))?;
        writeln!(out, "contexts: {}", join_display(&combo.usage_contexts))?;
        if !combo.recommended_palette.is_empty() {
            writeln!(out, "palette: {}", combo.recommended_palette.join(" "))?;
        }
        writeln!(out)?;
        writeln!(out, "{}", combo.description)?;
        writeln!(out)?;

        writeln!(out, "Type scale:")?;
        write_scale(&combo, out, self.color)?;
        writeln!(out)?;

        let sample = self
            .catalog
            .sample_for(&combo.id)
            .with_overrides(self.store.preview_text());
        writeln!(out, "Preview:")?;
        writeln!(out, "  {}", sample.headline)?;
        writeln!(out, "  {}", sample.subhead)?;
        writeln!(out, "  {}", sample.body)?;
        Ok(())
    }

    fn export(&mut self, args: &ExportArgs, out: &mut impl Write) -> Result<()> {
        let combo = self.resolved(&args.target)?;

        if !args.all {
            let rendered = args.format.render(&combo);
            if rendered.is_empty() {
                tracing::info!(format = %args.format, combo = %combo.id, "nothing to export");
            } else {
                writeln!(out, "{rendered}")?;
            }
            return Ok(());
        }

        for (idx, format) in ExportFormat::ALL.iter().enumerate() {
            if idx > 0 {
                writeln!(out)?;
            }
            let heading = format!("== {} ({format}) ==", format.title());
            writeln!(out, "{}", apply_color(&heading, self.color, AnsiColor::Yellow))?;
            let rendered = format.render(&combo);
            if rendered.is_empty() {
                writeln!(out, "(nothing to export)")?;
            } else {
                writeln!(out, "{rendered}")?;
            }
        }
        Ok(())
    }

    fn fav(&mut self, action: FavAction, out: &mut impl Write) -> Result<()> {
        match action {
            FavAction::Toggle { target } => {
                let id = self.combo_id(&target, self.store.favorites())?;
                let name = self.display_name(&id);
                let outcome = self.store.toggle_favorite(&id);
                writeln!(out, "{}", favorite_toggle_message(&name, outcome)?)?;
            }
            FavAction::Add { target } => {
                let id = self.combo_id(&target, &[])?;
                let count = self.store.add_favorite(&id);
                writeln!(out, "{} is a favorite ({count} total)", self.display_name(&id))?;
            }
            FavAction::Remove { target } => {
                let id = self.combo_id(&target, self.store.favorites())?;
                let count = self.store.remove_favorite(&id);
                writeln!(
                    out,
                    "{} is not a favorite ({count} total)",
                    self.display_name(&id)
                )?;
            }
            FavAction::List => self.write_id_list(self.store.favorites(), out)?,
            FavAction::Clear => {
                self.store.clear_favorites();
                writeln!(out, "cleared favorites")?;
            }
        }
        Ok(())
    }

    fn compare(&mut self, action: CompareAction, out: &mut impl Write) -> Result<()> {
        match action {
            CompareAction::Toggle { target } => {
                let id = self.combo_id(&target, self.store.comparison())?;
                let name = self.display_name(&id);
                match self.store.toggle_comparison(&id) {
                    Toggle::Added { count } => writeln!(
                        out,
                        "added {name} to comparison ({count} of {MAX_COMPARE_ITEMS})"
                    )?,
                    Toggle::Removed { count } => writeln!(
                        out,
                        "removed {name} from comparison ({count} of {MAX_COMPARE_ITEMS})"
                    )?,
                    Toggle::Rejected => write_comparison_full(out)?,
                }
            }
            CompareAction::Add { target } => {
                let id = self.combo_id(&target, &[])?;
                let admission = self.store.add_to_comparison(&id);
                if admission.accepted {
                    writeln!(
                        out,
                        "{} is in comparison ({} of {MAX_COMPARE_ITEMS})",
                        self.display_name(&id),
                        admission.count
                    )?;
                } else {
                    write_comparison_full(out)?;
                }
            }
            CompareAction::Remove { target } => {
                let id = self.combo_id(&target, self.store.comparison())?;
                let count = self.store.remove_from_comparison(&id);
                writeln!(
                    out,
                    "{} is not in comparison ({count} of {MAX_COMPARE_ITEMS})",
                    self.display_name(&id)
                )?;
            }
            CompareAction::List => self.write_id_list(self.store.comparison(), out)?,
            CompareAction::Clear => {
                self.store.clear_comparison();
                writeln!(out, "cleared comparison")?;
            }
            CompareAction::Show => self.compare_show(out)?,
        }
        Ok(())
    }

    fn compare_show(&self, out: &mut impl Write) -> Result<()> {
        let combos: Vec<ResolvedFontCombo<'a>> = self
            .store
            .comparison()
            .iter()
            .filter_map(|id| match self.catalog.resolve_combo(id) {
                Some(resolved) => Some(resolved),
                None => {
                    tracing::warn!(combo = %id, "compared combo is not in the catalog");
                    None
                }
            })
            .collect::<Result<_, _>>()?;

        if combos.is_empty() {
            writeln!(out, "comparison is empty")?;
            return Ok(());
        }

        let mut rows = vec![std::iter::once(String::new())
            .chain(combos.iter().map(|combo| combo.name.clone()))
            .collect::<Vec<_>>()];
        for level in HierarchyLevel::REQUIRED {
            let mut row = vec![level.label().to_string()];
            for combo in &combos {
                row.push(match combo.level(level) {
                    Some(resolved) => format!(
                        "{} {} {}/{}",
                        resolved.font.name, resolved.entry.weight, resolved.entry.size,
                        resolved.entry.line_height
                    ),
                    None => String::new(),
                });
            }
            rows.push(row);
        }
        write_table(&rows, out, self.color)
    }

    fn preview(&mut self, action: PreviewAction, out: &mut impl Write) -> Result<()> {
        match action {
            PreviewAction::Set(args) => {
                let patch = PreviewPatch {
                    headline: args.headline,
                    subhead: args.subhead,
                    body: args.body,
                };
                self.store.set_preview_text(&patch);
                writeln!(out, "preview text saved")?;
            }
            PreviewAction::Clear => {
                self.store.clear_preview_text();
                writeln!(out, "preview text cleared")?;
            }
            PreviewAction::Show { target: Some(target) } => {
                let combo = self.resolved(&target)?;
                let sample = self
                    .catalog
                    .sample_for(&combo.id)
                    .with_overrides(self.store.preview_text());
                writeln!(out, "headline: {}", sample.headline)?;
                writeln!(out, "subhead: {}", sample.subhead)?;
                writeln!(out, "body: {}", sample.body)?;
                if let Some(quote) = &sample.pull_quote {
                    writeln!(out, "quote: {quote} ({})", sample.micro)?;
                }
            }
            PreviewAction::Show { target: None } => {
                let text = self.store.preview_text();
                for field in PreviewField::ALL {
                    let value = text.get(*field);
                    let shown = if value.is_empty() { "(default)" } else { value };
                    writeln!(out, "{field}: {shown}")?;
                }
            }
        }
        Ok(())
    }

    fn recent(&mut self, action: RecentAction, out: &mut impl Write) -> Result<()> {
        match action {
            RecentAction::List => self.write_id_list(self.store.recent(), out)?,
            RecentAction::Clear => {
                self.store.clear_recent();
                writeln!(out, "cleared recently viewed")?;
            }
        }
        Ok(())
    }

    fn write_id_list(&self, ids: &[String], out: &mut impl Write) -> Result<()> {
        for id in ids {
            let rendered = apply_color(id, self.color, AnsiColor::Cyan);
            writeln!(out, "{rendered}  {}", self.display_name(id))?;
        }
        Ok(())
    }
}

fn favorite_toggle_message(name: &str, outcome: Toggle) -> Result<String> {
    match outcome {
        Toggle::Added { count } => Ok(format!("added {name} to favorites ({count} total)")),
        Toggle::Removed { count } => Ok(format!("removed {name} from favorites ({count} total)")),
        Toggle::Rejected => bail!("favorites refused {name}; favorites have no capacity limit"),
    }
}

fn write_comparison_full(out: &mut impl Write) -> Result<()> {
    writeln!(
        out,
        "comparison is full ({MAX_COMPARE_ITEMS} of {MAX_COMPARE_ITEMS}); remove a combo first"
    )?;
    Ok(())
}

fn build_criteria(args: &ListArgs, favorites: &[String]) -> Result<FilterCriteria> {
    let timelessness: Vec<Timelessness> = parse_tag_list(&args.timelessness)?;
    let vibes: Vec<VibeTag> = parse_tag_list(&args.vibes)?;
    let contexts: Vec<UsageContext> = parse_tag_list(&args.contexts)?;

    let mut criteria = FilterCriteria::new()
        .with_search_query(args.search.clone().unwrap_or_default())
        .with_timelessness(timelessness)
        .with_vibe_tags(vibes)
        .with_usage_contexts(contexts)
        .google_fonts_only(args.google_only);
    if args.favorites_only {
        criteria = criteria.restrict_to_ids(favorites.iter().cloned());
    }
    Ok(criteria)
}

fn describe_font_role(role: &str, font: &fontpair_core::model::FontFamily) -> String {
    format!(
        "{role}: {} ({}, {})",
        font.name, font.classification, font.source
    )
}

fn join_display<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn write_scale(combo: &ResolvedFontCombo<'_>, out: &mut impl Write, color: bool) -> Result<()> {
    let mut rows = vec![["level", "font", "weight", "size", "line-height", "spacing"]
        .map(String::from)
        .to_vec()];
    for resolved in combo.levels() {
        rows.push(vec![
            resolved.level.label().to_string(),
            resolved.font.name.clone(),
            resolved.entry.weight.to_string(),
            resolved.entry.size.clone(),
            resolved.entry.line_height.to_string(),
            resolved
                .entry
                .effective_letter_spacing()
                .unwrap_or("")
                .to_string(),
        ]);
    }
    write_table(&rows, out, color)
}

/// Padded columns; the first row is a header.
fn write_table(rows: &[Vec<String>], out: &mut impl Write, color: bool) -> Result<()> {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|col| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .clamp(0, 60)
        })
        .collect();

    for (idx, row) in rows.iter().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect();
        let line = format!("  {}", cells.join("  "));
        let line = line.trim_end();
        if idx == 0 {
            writeln!(out, "{}", apply_color(line, color, AnsiColor::Yellow))?;
        } else {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

fn favorite_mark(id: &str, favorites: &[String]) -> &'static str {
    if favorites.iter().any(|fav| fav == id) {
        "*"
    } else {
        " "
    }
}

fn write_plain(
    combos: &[ResolvedFontCombo<'_>],
    favorites: &[String],
    mut w: impl Write,
    color: bool,
) -> Result<()> {
    for combo in combos {
        let mark = favorite_mark(&combo.id, favorites);
        let rendered = apply_color(&combo.id, color, AnsiColor::Cyan);
        writeln!(w, "{mark} {rendered}")?;
    }
    Ok(())
}

fn write_columns(
    combos: &[ResolvedFontCombo<'_>],
    favorites: &[String],
    mut w: impl Write,
    color: bool,
) -> Result<()> {
    let mut rows: Vec<(String, String, String)> = combos
        .iter()
        .map(|combo| {
            let fonts = combo
                .distinct_fonts()
                .iter()
                .map(|font| font.name.as_str())
                .collect::<Vec<_>>()
                .join(" + ");
            let tags = format!(
                "{:<14} {}",
                combo.timelessness.as_str(),
                join_display(&combo.vibe_tags)
            );
            (combo.id.clone(), fonts, tags)
        })
        .collect();

    let id_width = rows
        .iter()
        .map(|r| r.0.len())
        .max()
        .unwrap_or(0)
        .clamp(0, 60);
    let font_width = rows
        .iter()
        .map(|r| r.1.chars().count())
        .max()
        .unwrap_or(0)
        .clamp(0, 80);

    for (id, fonts, tags) in rows.drain(..) {
        let mark = favorite_mark(&id, favorites);
        let padded_id = format!("{:<id_width$}", id);
        let padded_fonts = format!("{:<font_width$}", fonts);
        let rendered_id = apply_color(&padded_id, color, AnsiColor::Cyan);
        let rendered_fonts = apply_color(&padded_fonts, color, AnsiColor::Yellow);
        let rendered_tags = apply_color(&tags, color, AnsiColor::Green);

        writeln!(w, "{mark} {rendered_id}  {rendered_fonts}  {rendered_tags}")?;
    }

    Ok(())
}

#[derive(Copy, Clone)]
enum AnsiColor {
    Cyan,
    Yellow,
    Green,
}

fn apply_color(text: &str, color: bool, code: AnsiColor) -> String {
    if !color {
        return text.to_string();
    }

    let code_str = match code {
        AnsiColor::Cyan => "36",
        AnsiColor::Yellow => "33",
        AnsiColor::Green => "32",
    };

    format!("\u{1b}[{}m{}\u{1b}[0m", code_str, text)
}

#[cfg(test)]
mod tests;
