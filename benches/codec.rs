use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use typed_cell::{parse_cell, stringify_cell, Value};

fn benchmark_parse_scalars(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_scalar");

    group.bench_function("integer", |b| b.iter(|| parse_cell(black_box("42"))));
    group.bench_function("float", |b| b.iter(|| parse_cell(black_box("2.5"))));
    group.bench_function("boolean", |b| b.iter(|| parse_cell(black_box("true"))));
    group.bench_function("string", |b| {
        b.iter(|| parse_cell(black_box("hello world")))
    });
    group.bench_function("nan", |b| b.iter(|| parse_cell(black_box(".nan"))));

    group.finish();
}

fn benchmark_parse_special(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_special");

    group.bench_function("regex", |b| b.iter(|| parse_cell(black_box("/ab+c/gi"))));
    group.bench_function("date", |b| {
        b.iter(|| parse_cell(black_box("2021-05-04T10:00:00Z")))
    });
    group.bench_function("fallback", |b| {
        b.iter(|| parse_cell(black_box("not: valid: yaml: at all:")))
    });

    group.finish();
}

fn benchmark_parse_sequences(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_sequence");

    for size in [10, 100, 1000].iter() {
        let cell = format!(
            "[{}]",
            (0..*size)
                .map(|i| i.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );

        group.bench_with_input(BenchmarkId::from_parameter(size), &cell, |b, cell| {
            b.iter(|| parse_cell(black_box(cell)))
        });
    }
    group.finish();
}

fn benchmark_stringify(c: &mut Criterion) {
    let mut group = c.benchmark_group("stringify");

    let number = parse_cell("42");
    let string = parse_cell("hello world");
    let reserved = typed_cell::CellValue::Structured(Value::from("=1+1"));
    let sequence = parse_cell("[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]");
    let mapping = parse_cell("{a: 1, b: 2, c: 3}");

    group.bench_function("number", |b| {
        b.iter(|| stringify_cell(black_box(&number)))
    });
    group.bench_function("plain_string", |b| {
        b.iter(|| stringify_cell(black_box(&string)))
    });
    group.bench_function("reserved_string", |b| {
        b.iter(|| stringify_cell(black_box(&reserved)))
    });
    group.bench_function("sequence", |b| {
        b.iter(|| stringify_cell(black_box(&sequence)))
    });
    group.bench_function("mapping", |b| {
        b.iter(|| stringify_cell(black_box(&mapping)))
    });

    group.finish();
}

fn benchmark_roundtrip(c: &mut Criterion) {
    let cells = [
        "42",
        "hello world",
        "2021-05-04T10:00:00Z",
        "[1, 2, 3]",
        "{a: 1, b: two}",
    ];

    c.bench_function("roundtrip_mixed_row", |b| {
        b.iter(|| {
            for cell in &cells {
                let value = parse_cell(black_box(cell));
                let _ = stringify_cell(black_box(&value)).unwrap();
            }
        })
    });
}

criterion_group!(
    benches,
    benchmark_parse_scalars,
    benchmark_parse_special,
    benchmark_parse_sequences,
    benchmark_stringify,
    benchmark_roundtrip
);
criterion_main!(benches);
