use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use montecarlo::math::monte_carlo::{
    estimate_integral_exponential, estimate_pi_coinflip, estimate_pi_uniform, pairwise_sum,
    set_seed,
};

fn bench_estimators(c: &mut Criterion) {
    let mut group = c.benchmark_group("monte_carlo_estimators");

    for k in [3u32, 5] {
        group.bench_with_input(BenchmarkId::new("uniform_pi", k), &k, |b, &k| {
            let mut stream = set_seed(0);
            b.iter(|| estimate_pi_uniform(&mut stream, black_box(k)))
        });
        group.bench_with_input(BenchmarkId::new("exponential_integral", k), &k, |b, &k| {
            let mut stream = set_seed(0);
            b.iter(|| estimate_integral_exponential(&mut stream, black_box(k)))
        });
        let n_points = 2 * 10usize.pow(k);
        group.bench_with_input(
            BenchmarkId::new("coin_flip_pi", n_points),
            &n_points,
            |b, &n| {
                let mut stream = set_seed(0);
                b.iter(|| estimate_pi_coinflip(&mut stream, black_box(n)))
            },
        );
    }

    group.finish();
}

fn bench_summation(c: &mut Criterion) {
    let data: Vec<f64> = set_seed(1).uniform(1_000_000);
    c.bench_function("pairwise_sum_1m", |b| b.iter(|| pairwise_sum(black_box(&data))));
    c.bench_function("naive_sum_1m", |b| {
        b.iter(|| black_box(&data).iter().sum::<f64>())
    });
}

criterion_group!(benches, bench_estimators, bench_summation);
criterion_main!(benches);
