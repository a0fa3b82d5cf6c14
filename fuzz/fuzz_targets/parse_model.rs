#![no_main]
use libfuzzer_sys::fuzz_target;
use tracer_model::ParseConfig;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = tracer_model::parse(s, &ParseConfig { priced: false });
        let _ = tracer_model::parse(s, &ParseConfig { priced: true });
    }
});
