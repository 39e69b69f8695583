use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use predicat_rules::Translator;

fn bench_translate(c: &mut Criterion) {
    let translator = Translator::builtin().expect("builtin catalogue should compile");

    c.bench_function("translate_first_rule", |b| {
        b.iter(|| translator.translate(black_box("Tous les hommes sont mortels")));
    });

    c.bench_function("translate_catch_all", |b| {
        b.iter(|| translator.translate(black_box("Socrate est philosophe")));
    });

    c.bench_function("translate_fallback", |b| {
        b.iter(|| {
            translator.translate(black_box(
                "une phrase assez longue qui ne correspond à aucune règle connue",
            ))
        });
    });
}

criterion_group!(benches, bench_translate);
criterion_main!(benches);
