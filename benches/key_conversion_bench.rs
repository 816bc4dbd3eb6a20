//! Performance benchmarks for key notation conversion

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use keywheel::{key_to_camelot, KeyTable, Notation};

fn bench_key_conversion(c: &mut Criterion) {
    let table = KeyTable::new();

    // One input per notation plus a miss
    let inputs = ["8B", "1d", "C#m", "A-Flat Minor", "A♭ Minor", "not a key"];

    c.bench_function("parse_mixed_notations", |b| {
        b.iter(|| {
            for input in inputs {
                let _ = table.parse(black_box(input));
            }
        });
    });

    c.bench_function("convert_standard_to_camelot", |b| {
        b.iter(|| table.convert(black_box("A♭ Minor"), Notation::Camelot, false));
    });

    c.bench_function("key_to_camelot_shared_table", |b| {
        b.iter(|| key_to_camelot(black_box("6m")));
    });
}

criterion_group!(benches, bench_key_conversion);
criterion_main!(benches);
