// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use tally_formats::{Format, parse_str};

/// Build a JUnit document with `cases` test cases, every tenth one failing
fn junit_document(cases: usize) -> String {
    let failures = cases / 10;
    let mut xml = format!(
        r#"<?xml version="1.0"?><testsuite name="bench" tests="{cases}" failures="{failures}" time="1.0">"#
    );
    for i in 0..cases {
        if i % 10 == 0 {
            xml.push_str(&format!(
                r#"<testcase classname="bench" name="case_{i}" time="0.001"><failure message="boom">trace {i}</failure></testcase>"#
            ));
        } else {
            xml.push_str(&format!(
                r#"<testcase classname="bench" name="case_{i}" time="0.001"/>"#
            ));
        }
    }
    xml.push_str("</testsuite>");
    xml
}

fn go_output(cases: usize) -> String {
    let mut out = String::new();
    for i in 0..cases {
        out.push_str(&format!("=== RUN   Test{i}\n--- PASS: Test{i} (0.00s)\n"));
    }
    out.push_str("PASS\nok  \texample.com/bench\t1.234s\n");
    out
}

fn tap_output(cases: usize) -> String {
    let mut out = format!("1..{cases}\n");
    for i in 1..=cases {
        out.push_str(&format!("ok {i} - case {i}\n"));
    }
    out
}

fn parser_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsers");

    for cases in [100usize, 1_000, 10_000] {
        let junit = junit_document(cases);
        group.bench_with_input(BenchmarkId::new("junit", cases), &junit, |b, input| {
            b.iter(|| parse_str(Format::Junit, input).expect("junit parse failed"))
        });

        let go = go_output(cases);
        group.bench_with_input(BenchmarkId::new("go", cases), &go, |b, input| {
            b.iter(|| parse_str(Format::Go, input).expect("go parse failed"))
        });

        let tap = tap_output(cases);
        group.bench_with_input(BenchmarkId::new("tap", cases), &tap, |b, input| {
            b.iter(|| parse_str(Format::Tap, input).expect("tap parse failed"))
        });
    }

    group.finish();
}

fn detection_benchmarks(c: &mut Criterion) {
    let head = "TAP version 13\n1..4\nok 1\nok 2\nok 3\nok 4\n";
    c.bench_function("sniff_tap", |b| {
        b.iter(|| tally_formats::detect::sniff(std::hint::black_box(head)))
    });
}

criterion_group!(benches, parser_benchmarks, detection_benchmarks);
criterion_main!(benches);
