//! Benchmarks for the recording and supplying hot paths.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::sync::Arc;
use testdouble::prelude::*;

fn doubles_benchmark(c: &mut Criterion) {
    c.bench_function("spy_record_1k", |b| {
        let arg = Arg::i32(1);
        b.iter(|| {
            let mut spy = Spy::new("f", 2);
            for _ in 0..1_000 {
                spy.record_call([arg.clone(), arg.clone()]).ok();
            }
            black_box(spy.call_count())
        });
    });

    c.bench_function("output_capture_1k", |b| {
        b.iter(|| {
            let mut output = OutputDouble::new("print");
            for _ in 0..1_000 {
                output.capture("line of output");
            }
            black_box(output.output_count())
        });
    });

    c.bench_function("mock_call_and_verify", |b| {
        let mut mock = Mock::new("add", 2).with_sink(Arc::new(NoOpDiagnosticSink));
        mock.set_comparator(0, i32_eq).ok();
        mock.set_comparator(1, i32_eq).ok();
        mock.set_expected_arguments([Arg::i32(2), Arg::i32(3)]).ok();
        mock.set_return_values([Arg::i32(5)]);
        b.iter(|| {
            let value = mock.call([Arg::i32(2), Arg::i32(3)]);
            black_box((value, mock.verify()))
        });
    });

    c.bench_function("input_cycle", |b| {
        let mut input = InputDouble::new("read");
        input.set_inputs((0..8).map(Arg::i32));
        b.iter(|| black_box(input.get()));
    });
}

criterion_group!(benches, doubles_benchmark);
criterion_main!(benches);
