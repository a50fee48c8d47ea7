use std::{hint::black_box};

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use stlkit::DynArray;
use smallvec::SmallVec;
use arrayvec::ArrayVec;


pub fn benchmark(c: &mut Criterion) {

    let mut group = c.benchmark_group("DynArray Perf");
    group.sample_size(1000);

    group.bench_function(
        BenchmarkId::new("DynArray", "push_back"),
        |b| b.iter_batched_ref(
            || DynArray::<u8>::with_capacity(16),
            |array| black_box({ array.push_back(black_box(128)); }),
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("Vec", "push_back"),
        |b| b.iter_batched_ref(
            || Vec::<u8>::with_capacity(16),
            |vec| black_box({ vec.push(black_box(128)); }),
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("SmallVec", "push_back"),
        |b| b.iter_batched_ref(
            || SmallVec::<[u8; 16]>::new(),
            |vec| black_box({ vec.push(black_box(128)); }),
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("ArrayVec", "push_back"),
        |b| b.iter_batched_ref(
            || ArrayVec::<u8, 16>::new(),
            |vec| black_box({ vec.push(black_box(128)); }),
            BatchSize::SmallInput
        )
    );


    group.bench_function(
        BenchmarkId::new("DynArray", "push_back-grow"),
        |b| b.iter_batched_ref(
            || DynArray::<u8>::from([1; 16]),
            |array| black_box({ array.push_back(black_box(128)); }),
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("Vec", "push_back-grow"),
        |b| b.iter_batched_ref(
            || { let mut vec = vec![1u8; 16]; vec.shrink_to_fit(); vec },
            |vec| black_box({ vec.push(black_box(128)); }),
            BatchSize::SmallInput
        )
    );


    group.bench_function(
        BenchmarkId::new("DynArray", "emplace_back"),
        |b| b.iter_batched_ref(
            || DynArray::<String>::with_capacity(4),
            |array| black_box({ array.emplace_back(|| String::from("emplaced")); }),
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("Vec", "emplace_back"),
        |b| b.iter_batched_ref(
            || Vec::<String>::with_capacity(4),
            |vec| black_box({ vec.push(String::from("emplaced")); }),
            BatchSize::SmallInput
        )
    );


    group.bench_function(
        BenchmarkId::new("DynArray", "insert"),
        |b| b.iter_batched_ref(
            || { let mut array = DynArray::<u8>::from([0, 1, 2, 3]); array.reserve(16); array },
            |array| black_box({ array.insert(1, black_box(9)); }),
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("Vec", "insert"),
        |b| b.iter_batched_ref(
            || { let mut vec: Vec<u8> = vec![0, 1, 2, 3]; vec.reserve_exact(12); vec },
            |vec| black_box({ vec.insert(1, black_box(9)); }),
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("SmallVec", "insert"),
        |b| b.iter_batched_ref(
            || SmallVec::<[u8; 16]>::from_vec(vec![0, 1, 2, 3]),
            |vec| black_box({ vec.insert(1, black_box(9)); }),
            BatchSize::SmallInput
        )
    );


    group.bench_function(
        BenchmarkId::new("DynArray", "erase"),
        |b| b.iter_batched_ref(
            || DynArray::<u8>::from([0, 1, 2, 3]),
            |array| black_box({ let _ = array.erase(1); }),
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("Vec", "erase"),
        |b| b.iter_batched_ref(
            || vec![0u8, 1, 2, 3],
            |vec| black_box({ let _ = vec.remove(1); }),
            BatchSize::SmallInput
        )
    );


    group.bench_function(
        BenchmarkId::new("DynArray", "resize"),
        |b| b.iter_batched_ref(
            || DynArray::<u32>::from([1, 2, 3]),
            |array| black_box({ array.resize(black_box(64), 7); }),
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("Vec", "resize"),
        |b| b.iter_batched_ref(
            || vec![1u32, 2, 3],
            |vec| black_box({ vec.resize(black_box(64), 7); }),
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("SmallVec", "resize"),
        |b| b.iter_batched_ref(
            || SmallVec::<[u32; 16]>::from_slice(&[1, 2, 3]),
            |vec| black_box({ vec.resize(black_box(64), 7); }),
            BatchSize::SmallInput
        )
    );


    group.bench_function(
        BenchmarkId::new("DynArray", "reserve"),
        |b| b.iter_batched_ref(
            || DynArray::<u64>::new(),
            |array| black_box({ array.reserve(black_box(256)); }),
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("Vec", "reserve"),
        |b| b.iter_batched_ref(
            || Vec::<u64>::new(),
            |vec| black_box({ vec.reserve_exact(black_box(256)); }),
            BatchSize::SmallInput
        )
    );


    group.bench_function(
        BenchmarkId::new("DynArray", "clear"),
        |b| b.iter_batched_ref(
            || DynArray::from_elem(64, String::from("x")),
            |array| black_box(array.clear()),
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("Vec", "clear"),
        |b| b.iter_batched_ref(
            || vec![String::from("x"); 64],
            |vec| black_box(vec.clear()),
            BatchSize::SmallInput
        )
    );


    group.bench_function(
        BenchmarkId::new("DynArray", "swap"),
        |b| b.iter_batched_ref(
            || (DynArray::from([1u32; 32]), DynArray::from([2u32; 8])),
            |(a, b)| black_box(a.swap(b)),
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("Vec", "swap"),
        |b| b.iter_batched_ref(
            || (vec![1u32; 32], vec![2u32; 8]),
            |(a, b)| black_box(std::mem::swap(a, b)),
            BatchSize::SmallInput
        )
    );


    group.bench_function(
        BenchmarkId::new("DynArray", "compare"),
        |b| b.iter_batched_ref(
            || (DynArray::from([5u32; 64]), DynArray::from([5u32; 64])),
            |(a, b)| black_box(*a == *b && *a <= *b),
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("Vec", "compare"),
        |b| b.iter_batched_ref(
            || (vec![5u32; 64], vec![5u32; 64]),
            |(a, b)| black_box(*a == *b && *a <= *b),
            BatchSize::SmallInput
        )
    );


    group.bench_function(
        "iter",
        |b| b.iter_batched_ref(
            || DynArray::<u32>::from(black_box([32; 64])),
            |array| black_box(for v in array.iter() { black_box(v); }),
            BatchSize::SmallInput
        )
    );

    group.finish();

}

criterion_group!(benches, benchmark);
criterion_main!(benches);
