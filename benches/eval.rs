//! Checked application vs. compiled evaluation.
//!
//! Run with:
//! ```bash
//! cargo bench --bench eval
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use truthtab::table::TruthTable;

/// Parity of `arity` inputs: the table never collapses, which makes it the
/// worst case for the compiled decision tree.
fn parity(arity: usize) -> TruthTable {
    let outputs = (0..1usize << arity).map(|row| (row.count_ones() & 1) as u8);
    TruthTable::new(outputs).unwrap()
}

/// All input vectors of the given arity.
fn all_inputs(arity: usize) -> Vec<Vec<u8>> {
    (0..1usize << arity)
        .map(|row| {
            (0..arity)
                .map(|position| ((row >> (arity - 1 - position)) & 1) as u8)
                .collect()
        })
        .collect()
}

fn bench_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval");

    for arity in [2usize, 3, 8] {
        let table = parity(arity);
        let compiled = table.compile().unwrap();
        let inputs = all_inputs(arity);

        group.bench_with_input(BenchmarkId::new("apply", arity), &inputs, |b, inputs| {
            b.iter(|| {
                for input in inputs {
                    black_box(table.apply(black_box(input)).unwrap());
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("compiled", arity), &inputs, |b, inputs| {
            b.iter(|| {
                for input in inputs {
                    black_box(compiled.eval(black_box(input)));
                }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_eval);
criterion_main!(benches);
