//! Criterion benchmarks for parsed-dump.
//!
//! ## Benchmark groups
//!
//! 1. **snapshot** — bincode decode of synthetic snapshots.
//! 2. **canonicalize** — per-module canonical views at various sizes.
//! 3. **render** — YAML emission of a full dump.
//!
//! ## Running
//!
//! ```sh
//! cargo bench --manifest-path crates/parsed-dump/Cargo.toml
//! # Run only the canonicalization group:
//! cargo bench --manifest-path crates/parsed-dump/Cargo.toml -- canonicalize
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use parsed_dump::canonical::canonicalize_module;
use parsed_dump::models::{Argument, Class, Field, Function, Method, Module};
use parsed_dump::report::{build_dump, render_dump};
use parsed_dump::store::snapshot::{decode_snapshot, encode_snapshot};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Build a module with `class_count` classes, each carrying a handful of
/// methods and fields, inserted in reverse name order so sorting has work.
fn synthetic_module(name: &str, class_count: usize) -> Module {
    let classes = (0..class_count)
        .rev()
        .map(|i| Class {
            superclasses: vec!["Standard_Transient".to_string()],
            methods: (0..12)
                .rev()
                .map(|m| Method {
                    args: vec![Argument::new("theValue", "double").with_default("0.0")],
                    ..Method::new(format!("Method{m}"), "void")
                })
                .collect(),
            fields: (0..4)
                .rev()
                .map(|f| Field {
                    name: format!("myField{f}"),
                    ty: "double".to_string(),
                    pod: true,
                    ..Field::default()
                })
                .collect(),
            ..Class::new(format!("{name}_Class{i:04}"))
        })
        .collect();
    let functions = (0..class_count)
        .map(|i| Function::new(format!("Helper{}", i % 17), "int"))
        .collect();
    Module {
        classes,
        functions,
        ..Module::new(name)
    }
}

fn synthetic_snapshot(module_count: usize, class_count: usize) -> Vec<Module> {
    (0..module_count)
        .rev()
        .map(|i| synthetic_module(&format!("Mod{i:03}"), class_count))
        .collect()
}

// ---------------------------------------------------------------------------
// 1. Snapshot decode
// ---------------------------------------------------------------------------

fn bench_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot");
    for &modules in &[1usize, 10, 50] {
        let bytes = encode_snapshot(&synthetic_snapshot(modules, 50)).unwrap();
        group.bench_with_input(BenchmarkId::new("decode", modules), &bytes, |b, bytes| {
            b.iter(|| decode_snapshot(black_box(bytes)).unwrap())
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// 2. Canonicalization
// ---------------------------------------------------------------------------

fn bench_canonicalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("canonicalize");
    for &classes in &[10usize, 100, 1000] {
        let module = synthetic_module("Bench", classes);
        group.bench_with_input(BenchmarkId::new("module", classes), &module, |b, module| {
            b.iter(|| canonicalize_module(black_box(module)))
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// 3. Rendering
// ---------------------------------------------------------------------------

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let dump = build_dump(&synthetic_snapshot(10, 100));
    group.bench_function("yaml_10x100", |b| {
        b.iter(|| render_dump(black_box(&dump)).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_snapshot, bench_canonicalize, bench_render);
criterion_main!(benches);
