use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use folio_core::{FolioConfig, NoScroll, Outline, Site};

fn bench_navigator(c: &mut Criterion) {
    let site = Site::new();
    let page = site.by_slug("privacy").unwrap();
    let ids: Vec<&str> = page.section_ids().collect();

    c.bench_function("Navigator::toggle_and_navigate", |b| {
        b.iter(|| {
            let mut nav = page.navigator(100);
            for id in &ids {
                nav.toggle(id);
                nav.navigate_to(id, &mut NoScroll);
            }
            black_box(nav.expanded().count())
        });
    });
}

fn bench_outline(c: &mut Criterion) {
    let site = Site::new();
    let config = FolioConfig::default();
    let mut group = c.benchmark_group("Outline::build");

    for page in site.pages() {
        let nav = page.is_disclosure().then(|| page.navigator(1));
        group.bench_with_input(BenchmarkId::from_parameter(page.slug), page, |b, page| {
            b.iter(|| {
                let outline = Outline::build(page, nav.as_ref(), &config);
                black_box(outline.len())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_navigator, bench_outline);

criterion_main!(benches);
