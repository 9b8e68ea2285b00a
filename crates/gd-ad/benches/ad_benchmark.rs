use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use gd_ad::{Dual, Scalar};
use std::hint::black_box;

/// f(x) = sum_i ln(x_i^2 + 1), written against the generic scalar interface.
fn sum_log1p_sq<S: Scalar>(xs: &[S]) -> S {
    let one = S::from_f64(1.0);
    xs.iter().map(|&x| (x * x + one).ln()).sum()
}

fn bench_dual_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("ad_dual");

    for n_vars in [4usize, 16, 64, 256] {
        let x0: Vec<f64> = (0..n_vars).map(|i| 1.0 + (i as f64) * 1e-3).collect();

        group.bench_with_input(BenchmarkId::new("f64_eval", n_vars), &n_vars, |b, _| {
            b.iter(|| black_box(sum_log1p_sq(black_box(&x0))))
        });

        group.bench_with_input(
            BenchmarkId::new("forward_grad_n_evals", n_vars),
            &n_vars,
            |b, &n| {
                // Forward-mode gradient: N evaluations, each with one seeded variable.
                b.iter(|| {
                    let mut grad = vec![0.0; n];
                    for seed in 0..n {
                        let mut xs: Vec<Dual> = x0.iter().copied().map(Dual::constant).collect();
                        xs[seed].dot = 1.0;
                        grad[seed] = sum_log1p_sq(&xs).dot;
                    }
                    black_box(grad[0]);
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_dual_ops);
criterion_main!(benches);
