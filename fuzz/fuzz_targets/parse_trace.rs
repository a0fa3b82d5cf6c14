#![no_main]
use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;
use tracer_model::{Model, ParseConfig};
use tracer_xtr::Trace;

/// Two processes with two locations and one edge each, two clocks and one
/// integer.
const MODEL: &str = "\
layout
0:clock:0:t(0)
1:clock:1:x
2:var:0:5:0:0:n
3:location::a
4:location::b
5:location::c
6:location::d

processes
0:3:P
1:5:Q

locations
3:0:0
4:0:0
5:1:0
6:1:0

edges
0:3:4:0:0:0
1:5:6:0:0:0

expressions
0:0:0:1
";

fn model() -> &'static Model {
    static MODEL_CELL: OnceLock<Model> = OnceLock::new();
    MODEL_CELL.get_or_init(|| {
        tracer_model::parse(MODEL, &ParseConfig { priced: false })
            .expect("fuzz model parses")
    })
}

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = Trace::parse(model(), s);
    }
});
