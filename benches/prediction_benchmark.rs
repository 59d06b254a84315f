use criterion::{black_box, criterion_group, criterion_main, Criterion};
use diascreen::{predict, FeatureVector, ModelEntry, ModelFormat, ModelHandle, TabularModel};

fn setup_benchmark_entry() -> ModelEntry {
    ModelEntry {
        name: "logreg.json".to_string(),
        format: ModelFormat::Tabular,
        handle: ModelHandle::Tabular(TabularModel {
            coefficients: vec![0.12, 0.035, -0.01, 0.002, 0.0004, 0.09, 0.95, 0.015],
            intercept: -8.4,
            scaler: None,
        }),
    }
}

fn bench_prediction(c: &mut Criterion) {
    let entry = setup_benchmark_entry();
    let input = FeatureVector::new([2.0, 130.0, 70.0, 20.0, 80.0, 28.5, 0.35, 33.0]);

    let mut group = c.benchmark_group("Prediction");
    group.sample_size(100);
    group.warm_up_time(std::time::Duration::from_secs(1));

    group.bench_function("tabular_single_row", |b| {
        b.iter(|| predict(black_box(&entry), black_box(&input)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_prediction);
criterion_main!(benches);
