//! Benchmark for per-pass context building.
//!
//! Each compilation pass rebuilds the context from scratch, so the build has
//! to stay cheap against a realistically large type universe.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use vmgen_core::constants::*;
use vmgen_resolve::{detect, InMemoryUniverse, ResolutionContext, UniverseBuilder};

fn large_universe() -> InMemoryUniverse {
    let mut builder = UniverseBuilder::new();
    for name in [PROPERTY_CHANGED, PROPERTY_CHANGING, TASK, BOOLEAN, ATTRIBUTE_USAGE] {
        builder.add_type(name);
    }
    for namespace in [
        DX_ATTRIBUTE_NAMESPACE,
        PRISM_ATTRIBUTE_NAMESPACE,
        MVVM_LIGHT_ATTRIBUTE_NAMESPACE,
    ] {
        for attr in [VIEW_MODEL_ATTRIBUTE, PROPERTY_ATTRIBUTE, COMMAND_ATTRIBUTE] {
            builder.add_type(&format!("{namespace}.{attr}"));
        }
    }
    for name in [DX_MARKER, PRISM_MARKER, MVVM_LIGHT_MARKER, DATA_ERROR_INFO, PRISM_ACTIVE_AWARE] {
        builder.add_type(name);
    }
    for i in 0..50_000 {
        builder.add_type(&format!("App.Module{}.Type{i}", i / 500));
    }
    builder.freeze()
}

fn bench_detection(c: &mut Criterion) {
    let universe = large_universe();
    c.bench_function("detect_50k_types", |b| {
        b.iter(|| detect(black_box(&universe)))
    });
}

fn bench_context_build(c: &mut Criterion) {
    let universe = large_universe();
    c.bench_function("context_build_50k_types", |b| {
        b.iter(|| ResolutionContext::build(black_box(&universe)))
    });
}

criterion_group!(benches, bench_detection, bench_context_build);
criterion_main!(benches);
