// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use policy_portal::content::POLICY_TABS;
use policy_portal::i18n::{Language, Translator};
use std::hint::black_box;

fn translation_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("translation");
    let translator = Translator::embedded();

    group.bench_function("resolve_chrome_string", |b| {
        b.iter(|| black_box(translator.resolve(black_box("I AGREE TO THE POLICY"), Language::Fr)));
    });

    group.bench_function("resolve_trimmed_fallback", |b| {
        b.iter(|| black_box(translator.resolve(black_box("  WARRANTY \n"), Language::Ar)));
    });

    group.bench_function("localize_every_policy_section", |b| {
        let localizer = translator.localizer(Language::Fr);
        b.iter(|| {
            for tab in POLICY_TABS {
                for section in tab.sections {
                    black_box(section.localized(localizer));
                }
            }
        });
    });

    group.finish();
}

criterion_group!(benches, translation_benchmark);
criterion_main!(benches);
