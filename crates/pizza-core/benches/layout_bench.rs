use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pizza_core::{ChartRequest, MetricSeries};

fn build_request(n: usize) -> ChartRequest {
    let pairs = (0..n).map(|i| (format!("Metric {i}"), (i as f64 * 37.0) % 100.0));
    let series = MetricSeries::from_pairs(pairs).expect("valid series");
    ChartRequest::new(series)
        .with_title("Wallet Analysis", Some("Address: 0x...".to_string()))
        .with_center_badge(81.0)
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_and_compose");
    for &n in &[6usize, 24usize] {
        group.bench_function(format!("sectors_{n}"), |b| {
            let request = build_request(n);
            b.iter(|| {
                let scene = request.build().expect("build scene");
                black_box(scene);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build);
criterion_main!(benches);
