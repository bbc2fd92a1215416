use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lsdb_sort::{ByteLongBuf, LongBuf, sort};

fn gen_data(n: usize) -> Vec<(&'static str, Vec<i64>)> {
  let mut rng = fastrand::Rng::with_seed(42);
  let ni = n as i64;
  vec![
    ("random", (0..n).map(|_| rng.i64(..)).collect()),
    ("sorted", (0..ni).collect()),
    ("reversed", (0..ni).rev().collect()),
    ("few_unique", (0..n).map(|_| rng.i64(0..16)).collect()),
    (
      "runs",
      (0..ni).map(|i| if (i / 1000) % 2 == 0 { i } else { -i }).collect(),
    ),
  ]
}

fn bench_sort(c: &mut Criterion) {
  let n = 100_000;
  let mut group = c.benchmark_group("sort");
  for (name, data) in gen_data(n) {
    group.bench_with_input(BenchmarkId::new("lsdb_vec", name), &data, |b, data| {
      b.iter_batched_ref(
        || data.clone(),
        |v| sort(v),
        criterion::BatchSize::LargeInput,
      )
    });
    group.bench_with_input(BenchmarkId::new("std_unstable", name), &data, |b, data| {
      b.iter_batched_ref(
        || data.clone(),
        |v| v.sort_unstable(),
        criterion::BatchSize::LargeInput,
      )
    });
    group.bench_with_input(BenchmarkId::new("lsdb_bytes", name), &data, |b, data| {
      b.iter_batched_ref(
        || {
          let mut buf = ByteLongBuf::zeroed(data.len());
          for (i, &x) in data.iter().enumerate() {
            buf.set(i, x);
          }
          buf
        },
        |buf| sort(buf),
        criterion::BatchSize::LargeInput,
      )
    });
  }
  group.finish();
}

criterion_group!(benches, bench_sort);
criterion_main!(benches);
