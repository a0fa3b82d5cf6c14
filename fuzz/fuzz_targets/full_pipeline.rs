#![no_main]
use libfuzzer_sys::fuzz_target;
use tracer_model::ParseConfig;
use tracer_xtr::Trace;

// Input is the model text and the trace text separated by a NUL byte.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let Some((model, trace)) = s.split_once('\0') else {
        return;
    };
    if let Ok(model) = tracer_model::parse(model, &ParseConfig { priced: false }) {
        if let Ok(trace) = Trace::parse(&model, trace) {
            let _ = tracer_report::render_trace(&model, &trace);
        }
    }
});
