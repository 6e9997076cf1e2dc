use std::collections::VecDeque;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use mergeinsert::{sort, theoretical_minimum};

const TEST_LENS: [usize; 4] = [21, 100, 1_000, 3_000];

fn random_values(len: usize) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(len as u64);
    (0..len).map(|_| rng.gen_range(0..u32::MAX)).collect()
}

fn report_comp_count(len: usize) {
    // Comparisons are deterministic per input, so one run per length is enough.
    let comparisons = sort(random_values(len)).comparisons;
    println!(
        "mergeinsert-comp-random-{len}: {comparisons} / {}",
        theoretical_minimum(len)
    );
}

fn bench_sort(c: &mut Criterion) {
    for len in TEST_LENS {
        report_comp_count(len);

        let batch_size = if len > 30 {
            BatchSize::LargeInput
        } else {
            BatchSize::SmallInput
        };

        c.bench_function(&format!("mergeinsert-vec-random-{len}"), |b| {
            b.iter_batched(
                || random_values(len),
                |values| black_box(sort(black_box(values))),
                batch_size,
            );
        });

        c.bench_function(&format!("mergeinsert-deque-random-{len}"), |b| {
            b.iter_batched(
                || random_values(len).into_iter().collect::<VecDeque<_>>(),
                |values| black_box(sort(black_box(values))),
                batch_size,
            );
        });
    }
}

criterion_group!(benches, bench_sort);
criterion_main!(benches);
