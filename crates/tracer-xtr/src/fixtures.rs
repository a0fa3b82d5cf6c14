use tracer_model::{parse, Model, ParseConfig};

/// Two processes `A` (idle, busy) and `B` (off, on), clocks `t(0)` and `x`,
/// one integer `n`. `A.0` and `B.0` synchronise on `go`.
pub(crate) const MODEL: &str = "\
layout
0:clock:0:t(0)
1:clock:1:x
2:var:0:5:0:0:n
3:location::idle
4:location::busy
5:location::off
6:location::on

processes
0:3:A
1:5:B

locations
3:0:0
4:0:0
5:1:0
6:1:0

edges
0:3:4:1:2:3
0:4:3:0:0:0
1:5:6:0:4:0

expressions
0:0:0:1
1:0:0:x >= 2
2:0:0:go!
3:0:0:n = n + 1
4:0:0:go?
";

/// Initial state, then one synchronised step of `A.0` with `B.0`.
pub(crate) const TRACE: &str = "\
0 0
.
1 0 10
.
.
0
.
1 1
.
0 1 -4
.
.
1
.
0 0;
1 0;
.
.
";

pub(crate) fn model() -> Model {
    parse(MODEL, &ParseConfig { priced: false }).unwrap()
}
