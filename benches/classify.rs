use criterion::{black_box, criterion_group, criterion_main, Criterion};

use vitalcheck::history::HistoryBuffer;
use vitalcheck::triage::{classify, CheckResult};
use vitalcheck::vitals::VitalsInput;

fn bench_classify(c: &mut Criterion) {
    c.bench_function("classify_normal", |b| {
        b.iter(|| classify(black_box(72.0), black_box(118.0), black_box(76.0), black_box(36.8), black_box(98.0)))
    });

    c.bench_function("classify_all_critical", |b| {
        b.iter(|| classify(black_box(140.0), black_box(190.0), black_box(130.0), black_box(40.0), black_box(85.0)))
    });
}

fn bench_history_push(c: &mut Criterion) {
    let history = HistoryBuffer::default();
    let result = CheckResult::evaluate(VitalsInput::new(110.0, 135.0, 85.0, 38.5, 93.0));

    c.bench_function("history_push_at_capacity", |b| {
        b.iter(|| history.push(black_box(result.clone())))
    });
}

criterion_group!(benches, bench_classify, bench_history_push);
criterion_main!(benches);
