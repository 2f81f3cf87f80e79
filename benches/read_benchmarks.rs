//! Performance benchmarks for the WKT file reader.
//!
//! Measures full reads (resolve, load, tokenize, split) of generated
//! point files of increasing size, and the cost of option resolution.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::io::Write;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tempfile::NamedTempFile;

use wktfile::options::{comma_delimiter, custom_delimiter, no_header, resolve, ParseOption};
use wktfile::read;

/// Writes a point file with the given number of data rows.
fn create_points_file(rows: usize, delimiter: char) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "point_id{delimiter}name{delimiter}wkt").unwrap();
    for i in 0..rows {
        let x = -72.0 - (i % 1000) as f64 / 100.0;
        let y = 43.0 + (i % 500) as f64 / 100.0;
        writeln!(
            file,
            "{i}{delimiter}\"Site {i}{delimiter} north\"{delimiter}POINT({x:.4} {y:.4})"
        )
        .unwrap();
    }
    file.flush().unwrap();
    file
}

fn bench_resolve(c: &mut Criterion) {
    let semicolon = custom_delimiter(';');
    let options: [&dyn ParseOption; 3] = [&comma_delimiter, &semicolon, &no_header];
    c.bench_function("resolve_options", |b| {
        b.iter(|| resolve(black_box(&options)).unwrap())
    });
}

fn bench_read_small(c: &mut Criterion) {
    let file = create_points_file(10, '|');
    c.bench_function("read_10_rows", |b| {
        b.iter(|| read(black_box(file.path()), &[]).unwrap())
    });
}

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_scaling");

    for row_count in [100usize, 1_000, 10_000].iter() {
        let file = create_points_file(*row_count, ',');

        group.throughput(Throughput::Elements(*row_count as u64));
        group.bench_with_input(BenchmarkId::new("rows", row_count), row_count, |b, _| {
            b.iter(|| {
                let table = read(file.path(), &[&comma_delimiter]).unwrap();
                black_box(table)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_resolve, bench_read_small, bench_scaling);
criterion_main!(benches);
