use super::*;
use clap::CommandFactory;
use std::io::Cursor;
use tempfile::{tempdir, TempDir};

fn run_in(state: &TempDir, args: &[&str]) -> Result<String> {
    let state_dir = state.path().display().to_string();
    let mut argv = vec!["fontpair", "--state-dir", state_dir.as_str()];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv)?;

    let mut buf = Cursor::new(Vec::new());
    execute(cli, &mut buf, false)?;
    Ok(String::from_utf8(buf.into_inner())?)
}

#[test]
fn parses_list_filters_into_criteria() {
    let cli = Cli::try_parse_from([
        "fontpair",
        "list",
        "-q",
        "inter",
        "--vibe",
        "tech,minimal",
        "--context",
        "saas-ui",
        "--timelessness",
        "trending",
        "--google-only",
        "--sort",
        "name-desc",
        "--json",
    ])
    .expect("parse cli");

    let Command::List(args) = cli.command else {
        panic!("expected list command");
    };
    assert!(args.json);
    assert_eq!(args.sort, SortOrder::NameDesc);
    assert_eq!(args.vibes, vec!["tech", "minimal"]);

    let criteria = build_criteria(&args, &[]).expect("criteria");
    let catalog = Catalog::builtin().expect("catalog");
    let combos = catalog.resolve_all().expect("resolve");
    let ids: Vec<String> = filter(&combos, &criteria)
        .iter()
        .map(|c| c.id.clone())
        .collect();
    assert_eq!(ids, vec!["space-grotesk-inter"]);
}

#[test]
fn unknown_vibe_is_rejected() {
    let cli = Cli::try_parse_from(["fontpair", "list", "--vibe", "grunge"]).expect("parse cli");
    let Command::List(args) = cli.command else {
        panic!("expected list command");
    };

    let err = build_criteria(&args, &[]).unwrap_err();
    assert!(err.to_string().contains("unknown vibe tag `grunge`"));
}

#[test]
fn json_and_ndjson_conflict() {
    let parse = Cli::try_parse_from(["fontpair", "list", "--json", "--ndjson"]);
    assert!(parse.is_err());
}

#[test]
fn preview_set_requires_a_field() {
    assert!(Cli::try_parse_from(["fontpair", "preview", "set"]).is_err());
    assert!(Cli::try_parse_from(["fontpair", "preview", "set", "--body", "x"]).is_ok());
}

#[test]
fn state_dir_flag_wins_over_default() {
    let cli = Cli::try_parse_from(["fontpair", "--state-dir", "/tmp/fp", "validate"])
        .expect("parse cli");
    assert_eq!(resolve_settings(&cli).state_dir, PathBuf::from("/tmp/fp"));
}

#[test]
fn favorites_are_marked_in_plain_listing() {
    let state = tempdir().expect("tempdir");
    run_in(&state, &["fav", "toggle", "inter"]).expect("toggle");

    let output = run_in(&state, &["list"]).expect("list");
    assert!(output.lines().any(|line| line == "* inter-only"));
    assert!(output.lines().any(|line| line == "  playfair-inter"));

    let favorites_only = run_in(&state, &["list", "--favorites-only"]).expect("list");
    assert_eq!(favorites_only.trim(), "* inter-only");
}

#[test]
fn fav_toggle_reports_direction() {
    let state = tempdir().expect("tempdir");

    let added = run_in(&state, &["fav", "toggle", "playfair-inter"]).expect("add");
    assert!(added.contains("added Playfair + Inter to favorites (1 total)"));

    let removed = run_in(&state, &["fav", "toggle", "playfair-inter"]).expect("remove");
    assert!(removed.contains("removed Playfair + Inter from favorites (0 total)"));
}

#[test]
fn favorite_toggle_messages_cover_every_outcome() {
    assert_eq!(
        favorite_toggle_message("Inter", Toggle::Added { count: 2 }).expect("added"),
        "added Inter to favorites (2 total)"
    );
    assert_eq!(
        favorite_toggle_message("Inter", Toggle::Removed { count: 1 }).expect("removed"),
        "removed Inter from favorites (1 total)"
    );
    let err = favorite_toggle_message("Inter", Toggle::Rejected).unwrap_err();
    assert!(err.to_string().contains("favorites refused Inter"));
}

#[test]
fn unknown_combo_is_an_error() {
    let state = tempdir().expect("tempdir");
    let err = run_in(&state, &["fav", "add", "no-such-combo"]).unwrap_err();
    assert!(err.to_string().contains("unknown combo `no-such-combo`"));
}

#[test]
fn full_comparison_is_reported_not_failed() {
    let state = tempdir().expect("tempdir");
    for id in ["inter", "manrope", "lexend-atkinson"] {
        run_in(&state, &["compare", "toggle", id]).expect("toggle");
    }

    let output = run_in(&state, &["compare", "toggle", "playfair-inter"]).expect("rejected");
    assert!(output.contains("comparison is full (3 of 3)"));

    let listed = run_in(&state, &["compare", "list"]).expect("list");
    assert_eq!(listed.lines().count(), 3);
    assert!(!listed.contains("playfair-inter"));
}

#[test]
fn compare_show_prints_one_column_per_combo() {
    let state = tempdir().expect("tempdir");
    run_in(&state, &["compare", "add", "inter"]).expect("add");
    run_in(&state, &["compare", "add", "playfair-inter"]).expect("add");

    let output = run_in(&state, &["compare", "show"]).expect("show");
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[0].contains("Inter") && lines[0].contains("Playfair + Inter"));
    assert!(lines[1].trim_start().starts_with("H1"));
    assert!(lines[1].contains("Playfair Display 700 48px/1.1"));
}

#[test]
fn show_records_recent_views() {
    let state = tempdir().expect("tempdir");
    run_in(&state, &["show", "inter"]).expect("show");
    run_in(&state, &["show", "playfair-inter"]).expect("show");

    let recent = run_in(&state, &["recent", "list"]).expect("recent");
    let ids: Vec<&str> = recent
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    assert_eq!(ids, vec!["playfair-inter", "inter-only"]);

    run_in(&state, &["recent", "clear"]).expect("clear");
    assert_eq!(run_in(&state, &["recent", "list"]).expect("recent"), "");
}

#[test]
fn preview_overrides_flow_into_show() {
    let state = tempdir().expect("tempdir");
    run_in(&state, &["preview", "set", "--headline", "Custom headline"]).expect("set");

    let output = run_in(&state, &["preview", "show", "playfair-inter"]).expect("show");
    assert!(output.contains("headline: Custom headline"));
    assert!(output.contains("subhead: On the delicate balance"));

    run_in(&state, &["preview", "clear"]).expect("clear");
    let stored = run_in(&state, &["preview", "show"]).expect("show");
    assert!(stored.contains("headline: (default)"));
}

#[test]
fn export_link_for_single_family() {
    let state = tempdir().expect("tempdir");
    let output = run_in(&state, &["export", "inter", "--format", "link"]).expect("export");
    assert!(output.contains("family=Inter:wght@400;600;700&display=swap"));
}

#[test]
fn export_all_prints_every_heading() {
    let state = tempdir().expect("tempdir");
    let output = run_in(&state, &["export", "manrope", "--all"]).expect("export");
    for format in ExportFormat::ALL {
        assert!(output.contains(&format!("({format}) ==")), "missing {format}");
    }
}

#[test]
fn columns_align_fonts() {
    let catalog = Catalog::builtin().expect("catalog");
    let combos = catalog.resolve_all().expect("resolve");

    let mut buf = Cursor::new(Vec::new());
    write_columns(&combos[..2], &[], &mut buf, false).expect("write");

    let output = String::from_utf8(buf.into_inner()).expect("utf8");
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    let first = lines[0].find("Playfair Display").expect("first fonts");
    let second = lines[1].find("Merriweather").expect("second fonts");
    assert_eq!(first, second);
}

#[test]
fn color_choice_is_applied() {
    let catalog = Catalog::builtin().expect("catalog");
    let combos = catalog.resolve_all().expect("resolve");

    let mut buf = Cursor::new(Vec::new());
    write_plain(&combos[..1], &[], &mut buf, true).expect("write");

    let output = String::from_utf8(buf.into_inner()).expect("utf8");
    assert!(output.contains("\u{1b}["));
}

#[test]
fn validate_reports_issues_from_custom_catalog() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("bad.json");
    std::fs::write(&path, r#"{"fonts": [], "combos": [], "samples": {"ghost": {"headline": "h", "subhead": "s", "body": "b", "micro": "m"}}}"#)
        .expect("write");

    let path_arg = path.display().to_string();
    let err = run_in(&dir, &["--catalog", path_arg.as_str(), "validate"]).unwrap_err();
    assert!(err.to_string().contains("1 issue"));
}

#[test]
fn help_output_lists_commands() {
    let mut root = Cli::command();
    let help = root.render_long_help().to_string();
    for command in ["list", "show", "export", "fav", "compare", "preview", "recent", "validate"] {
        assert!(help.contains(command), "help lacks {command}");
    }
    assert!(help.contains("--state-dir"));
}
