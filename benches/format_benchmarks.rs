use criterion::{black_box, criterion_group, criterion_main, Criterion};
use indicpostal::{clean_address_input, format_address};

const FIXTURES: &[&str] = &[
    "door no 12, mg road, bangalore, karnataka 560001",
    "FLAT NO 3B\nABC APARTMENT\nNEAR CITY HOSPITAL\nCHENNAI",
    "#45, 1st flr, opp sbi atm, ks colony, hyderabad",
    "sy no 10/2a, rampur village, nr dtdc office, pune, maharashtra 411001",
];

fn bench_format_address(c: &mut Criterion) {
    c.bench_function("format_address", |b| {
        b.iter(|| {
            for raw in FIXTURES {
                black_box(format_address(black_box(raw)));
            }
        })
    });
}

fn bench_clean_address_input(c: &mut Criterion) {
    c.bench_function("clean_address_input", |b| {
        b.iter(|| {
            for raw in FIXTURES {
                black_box(clean_address_input(black_box(raw)));
            }
        })
    });
}

criterion_group!(benches, bench_format_address, bench_clean_address_input);
criterion_main!(benches);
