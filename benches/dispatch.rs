/*
 *
 *  *
 *  *      Copyright (c) 2018-2025, SnackCloud All rights reserved.
 *  *
 *  *   Redistribution and use in source and binary forms, with or without
 *  *   modification, are permitted provided that the following conditions are met:
 *  *
 *  *   Redistributions of source code must retain the above copyright notice,
 *  *   this list of conditions and the following disclaimer.
 *  *   Redistributions in binary form must reproduce the above copyright
 *  *   notice, this list of conditions and the following disclaimer in the
 *  *   documentation and/or other materials provided with the distribution.
 *  *   Neither the name of the www.snackcloud.cn developer nor the names of its
 *  *   contributors may be used to endorse or promote products derived from
 *  *   this software without specific prior written permission.
 *  *   Author: SnackCloud
 *  *
 *
 */
use std::hint::black_box;
use std::time::{Duration, Instant};

use criterion::{criterion_group, criterion_main, Criterion};
use querylog::prelude::*;

pub fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    group.measurement_time(Duration::from_secs(3));

    let ctx = QueryContext::new().with_connection_id(1);

    // Benchmark: successful query through the info branch
    let logger = Logger::new()
        .with_slow_threshold(Duration::from_secs(5))
        .with_log_func(noop_log_func());
    group.bench_function("trace_info", |b| {
        b.iter(|| {
            logger.trace(
                black_box(&ctx),
                Instant::now(),
                || ("SELECT * FROM t_system_user".to_string(), 1),
                None,
            );
        });
    });

    // Benchmark: failed query through the error branch
    let err = anyhow::anyhow!("duplicate key");
    group.bench_function("trace_error", |b| {
        b.iter(|| {
            logger.trace(
                black_box(&ctx),
                Instant::now(),
                || ("INSERT INTO t_system_user VALUES (1)".to_string(), 0),
                Some(&err),
            );
        });
    });

    // Benchmark: fully suppressed dispatch
    let silent = logger.log_mode(LogLevel::Silent);
    group.bench_function("trace_silent", |b| {
        b.iter(|| {
            silent.trace(
                black_box(&ctx),
                Instant::now(),
                || ("SELECT 1".to_string(), 1),
                None,
            );
        });
    });

    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default()
        .warm_up_time(Duration::from_secs(1))
        .sample_size(20);
    targets = bench_dispatch
);

criterion_main!(benches);
