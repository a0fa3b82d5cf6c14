//! Criterion benchmarks for trace reading and rendering.
//!
//! Run with: cargo bench -p tracer-report

use criterion::{criterion_group, criterion_main, Criterion};
use tracer_model::{parse, Model, ParseConfig};
use tracer_report::render_trace;
use tracer_xtr::Trace;

const PROCESSES: usize = 8;
const CLOCKS: usize = 6;
const STEPS: usize = 2_000;

/// `PROCESSES` two-location processes with an edge each way, `CLOCKS`
/// clocks and one integer per process.
fn synth_model() -> Model {
    let mut s = String::from("layout\n");
    let mut index = 0;
    for c in 0..CLOCKS {
        s.push_str(&format!("{index}:clock:{c}:x{c}\n"));
        index += 1;
    }
    for p in 0..PROCESSES {
        s.push_str(&format!("{index}:var:0:100:0:{p}:v{p}\n"));
        index += 1;
    }
    let first_location = index;
    for p in 0..PROCESSES {
        s.push_str(&format!("{index}:location::p{p}_a\n{}:location::p{p}_b\n", index + 1));
        index += 2;
    }
    s.push_str("\nprocesses\n");
    for p in 0..PROCESSES {
        s.push_str(&format!("{p}:{}:P{p}\n", first_location + 2 * p));
    }
    s.push_str("\nlocations\n");
    for p in 0..PROCESSES {
        let a = first_location + 2 * p;
        s.push_str(&format!("{a}:{p}:0\n{}:{p}:0\n", a + 1));
    }
    s.push_str("\nedges\n");
    for p in 0..PROCESSES {
        let a = first_location + 2 * p;
        s.push_str(&format!("{p}:{a}:{}:1:0:2\n{p}:{}:{a}:0:0:0\n", a + 1, a + 1));
    }
    s.push_str("\nexpressions\n0:0:0:1\n1:0:0:x1 >= 1\n2:0:0:v0 = v0 + 1\n");
    parse(&s, &ParseConfig { priced: false }).unwrap()
}

fn synth_state(step: usize, out: &mut String) {
    let locations: Vec<String> = (0..PROCESSES).map(|p| ((step + p) % 2).to_string()).collect();
    out.push_str(&locations.join(" "));
    out.push_str("\n.\n");
    for c in 1..CLOCKS {
        out.push_str(&format!("{c} 0 {}\n.\n0 {c} {}\n.\n", 2 * (step + c) as i32, -2));
    }
    out.push_str(".\n");
    let values: Vec<String> = (0..PROCESSES).map(|p| (step * p % 100).to_string()).collect();
    out.push_str(&values.join(" "));
    out.push_str("\n.\n");
}

fn synth_trace() -> String {
    let mut out = String::new();
    synth_state(0, &mut out);
    for step in 1..=STEPS {
        synth_state(step, &mut out);
        out.push_str(&format!("{} {};\n.\n", step % PROCESSES, step % 2));
    }
    out.push_str(".\n");
    out
}

fn benchmarks(c: &mut Criterion) {
    let model = synth_model();
    let source = synth_trace();

    c.bench_function("read_trace", |b| {
        b.iter(|| Trace::parse(&model, &source).unwrap())
    });

    let trace = Trace::parse(&model, &source).unwrap();
    c.bench_function("render_trace", |b| {
        b.iter(|| render_trace(&model, &trace).unwrap())
    });
}

criterion_group!(benches, benchmarks);
criterion_main!(benches);
