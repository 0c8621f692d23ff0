//! Criterion benchmarks for rust_event_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_event_logger::prelude::*;
use std::io;

fn sink_output() -> Output {
    Output::from_writer(io::sink())
}

fn quiet(logger: JsonLogger) -> Logger {
    logger.with_policy(TerminationPolicy::SUPPRESSED).into()
}

// ============================================================================
// Logger Creation Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("json", |b| {
        b.iter(|| black_box(Logger::json(Output::Discard)));
    });

    group.bench_function("builder_pretty", |b| {
        b.iter(|| {
            black_box(
                Logger::builder()
                    .format(Format::Pretty)
                    .output(Output::Discard)
                    .color(ColorMode::Never)
                    .build(),
            )
        });
    });

    group.finish();
}

// ============================================================================
// Encoding Benchmarks
// ============================================================================

fn bench_json_events(c: &mut Criterion) {
    let mut group = c.benchmark_group("json_events");
    group.throughput(Throughput::Elements(1));

    let logger = quiet(JsonLogger::new(sink_output()));

    group.bench_function("message_only", |b| {
        b.iter(|| logger.info(black_box("Test")).send());
    });

    group.bench_function("five_fields", |b| {
        b.iter(|| {
            logger
                .info("request")
                .str("method", "GET")
                .str("path", "/api/v1/users")
                .uint16("status", 200)
                .float64("latency_ms", 12.5)
                .bool("cached", false)
                .send()
        });
    });

    group.bench_function("bytes_base64", |b| {
        let payload = [0xABu8; 64];
        b.iter(|| logger.info("blob").bytes("data", black_box(&payload)).send());
    });

    group.finish();
}

fn bench_pretty_events(c: &mut Criterion) {
    let mut group = c.benchmark_group("pretty_events");
    group.throughput(Throughput::Elements(1));

    let plain: Logger = PrettyLogger::new(sink_output()).with_color(false).into();
    let colored: Logger = PrettyLogger::new(sink_output()).with_color(true).into();

    group.bench_function("plain", |b| {
        b.iter(|| plain.info("Test").int("n", black_box(1234)).send());
    });

    group.bench_function("colored", |b| {
        b.iter(|| colored.info("Test").int("n", black_box(1234)).send());
    });

    group.finish();
}

// ============================================================================
// Filtering Benchmarks
// ============================================================================

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");
    group.throughput(Throughput::Elements(1));

    let logger = quiet(JsonLogger::new(sink_output()));
    let discard = Logger::json(Output::Discard);
    let nop = Logger::nop();

    group.bench_function("below_threshold", |b| {
        b.iter(|| {
            logger
                .debug("filtered")
                .int("n", black_box(1))
                .str("s", "value")
                .send()
        });
    });

    group.bench_function("discard_output", |b| {
        b.iter(|| discard.error("discarded").int("n", black_box(1)).send());
    });

    group.bench_function("nop_logger", |b| {
        b.iter(|| nop.error("nothing").int("n", black_box(1)).send());
    });

    group.finish();
}

// ============================================================================
// Fan-out Benchmarks
// ============================================================================

fn bench_fan_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("fan_out");

    for members in [1usize, 2, 4] {
        group.throughput(Throughput::Elements(members as u64));
        let loggers = (0..members)
            .map(|_| Logger::json(sink_output()))
            .collect();
        let mut multi = Logger::multi(loggers);
        multi.no_exit();
        multi.no_panic();

        group.bench_function(format!("{}_members", members), |b| {
            b.iter(|| multi.info("x").int("n", black_box(1)).send());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_logger_creation,
    bench_json_events,
    bench_pretty_events,
    bench_level_filtering,
    bench_fan_out,
);
criterion_main!(benches);
