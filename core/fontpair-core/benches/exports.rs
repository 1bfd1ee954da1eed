use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fontpair_core::catalog::Catalog;
use fontpair_core::export::ExportFormat;
use fontpair_core::filter::{filter, FilterCriteria};
use fontpair_core::model::VibeTag;

fn bench_exports(c: &mut Criterion) {
    let catalog = Catalog::builtin().expect("builtin catalog");
    let combos = catalog.resolve_all().expect("resolve");

    for format in ExportFormat::ALL {
        c.bench_function(&format!("export/{format}"), |b| {
            b.iter(|| {
                for combo in &combos {
                    black_box(format.render(black_box(combo)));
                }
            })
        });
    }
}

fn bench_filter(c: &mut Criterion) {
    let catalog = Catalog::builtin().expect("builtin catalog");
    let combos = catalog.resolve_all().expect("resolve");
    let criteria = FilterCriteria::new()
        .with_search_query("sans")
        .with_vibe_tags(vec![VibeTag::Modern, VibeTag::Editorial])
        .google_fonts_only(true);

    c.bench_function("filter/builtin", |b| {
        b.iter(|| black_box(filter(black_box(&combos), &criteria)))
    });
}

criterion_group!(benches, bench_exports, bench_filter);
criterion_main!(benches);
