//! Compares the eight policy/scope variants on a synthetic workload.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use swapsim::{run_policy, Policy, ProcessId, Scope, Workload};

/// Three processes cycling over overlapping page sets, long enough that the
/// optimal policy's per-tick look-ahead scan actually costs something.
fn synthetic_workload() -> Workload {
    let sequences: Vec<(ProcessId, Vec<u32>)> = ['A', 'B', 'C']
        .into_iter()
        .enumerate()
        .map(|(i, pid)| {
            let pages = (0..200).map(|n| (n + i as u32) % 7 + 1).collect();
            (ProcessId::new(pid), pages)
        })
        .collect();

    Workload::new(sequences).unwrap()
}

fn bench_policies(c: &mut Criterion) {
    let workload = synthetic_workload();
    let mut group = c.benchmark_group("replacement");

    for scope in Scope::ALL {
        for policy in Policy::ALL {
            group.bench_function(format!("{} {}", scope, policy), |b| {
                b.iter(|| run_policy(black_box(&workload), policy, scope, 10).unwrap());
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_policies);
criterion_main!(benches);
