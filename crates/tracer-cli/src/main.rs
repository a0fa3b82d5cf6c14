//! Command-line front end: prints an XTR trace of a compiled model as text.

use clap::Parser;
use miette::{Diagnostic, NamedSource, SourceSpan};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracer_model::{Model, ModelError, ParseConfig};
use tracer_report::{render_trace, ReportError};
use tracer_xtr::{Trace, TraceError};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("TRACER_GIT_HASH"),
    " ",
    env!("TRACER_GIT_DATE"),
    ")"
);

/// CLI error with source context for pretty printing.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("cannot open {path}")]
    #[diagnostic(code(tracer::open))]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("model error: {message}")]
    #[diagnostic(code(tracer::model))]
    Model {
        message: String,
        #[source_code]
        src: NamedSource<Arc<String>>,
        #[label("here")]
        span: Option<SourceSpan>,
    },

    #[error("trace error: {message}")]
    #[diagnostic(code(tracer::trace))]
    Trace {
        message: String,
        #[source_code]
        src: NamedSource<Arc<String>>,
        #[label("here")]
        span: Option<SourceSpan>,
    },

    #[error("cannot render trace: {0}")]
    #[diagnostic(code(tracer::report))]
    Report(#[from] ReportError),

    #[error("cannot write output")]
    Write(#[source] io::Error),
}

impl CliError {
    fn from_model_error(e: ModelError, source: Arc<String>, filename: &str) -> Self {
        CliError::Model {
            span: e.line().and_then(|line| line_span(&source, line)),
            message: e.to_string(),
            src: NamedSource::new(filename, source),
        }
    }

    fn from_trace_error(e: TraceError, source: Arc<String>, filename: &str) -> Self {
        CliError::Trace {
            span: e.line().and_then(|line| line_span(&source, line)),
            message: e.to_string(),
            src: NamedSource::new(filename, source),
        }
    }
}

type CliResult<T> = Result<T, CliError>;

/// Byte span of a 1-based line, without its line break.
fn line_span(source: &str, line: usize) -> Option<SourceSpan> {
    let mut start = 0;
    for (number, text) in source.split_inclusive('\n').enumerate() {
        if number + 1 == line {
            let len = text.trim_end_matches(['\n', '\r']).len();
            return Some((start, len).into());
        }
        start += text.len();
    }
    None
}

#[derive(Parser)]
#[command(name = "tracer", version = VERSION)]
#[command(about = "Print a symbolic trace of a compiled timed-automata model", long_about = None)]
struct Cli {
    /// Intermediate-format model, or `-` for standard input
    #[arg(value_name = "MODEL")]
    model: PathBuf,

    /// XTR trace recorded against the model
    #[arg(value_name = "TRACE")]
    trace: PathBuf,
}

fn main() {
    // Install miette's fancy error handler
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(false)
                .context_lines(1)
                .build(),
        )
    }))
    .ok();

    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("{:?}", miette::Report::new(e));
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> CliResult<()> {
    let (model_name, model_source) = read_model_source(&cli.model)?;
    let config = ParseConfig::default();
    info!(file = %model_name, priced = config.priced, "parsing model");
    let model = Model::parse(&model_source, &config)
        .map_err(|e| CliError::from_model_error(e, model_source.clone(), &model_name))?;
    debug!(
        processes = model.process_count(),
        clocks = model.clock_count(),
        integers = model.integer_count(),
        edges = model.edges().len(),
        instructions = model.instructions().len(),
        expressions = model.expressions().count(),
        "model summary"
    );

    let trace_name = cli.trace.display().to_string();
    let trace_source = Arc::new(read_file(&cli.trace)?);
    info!(file = %trace_name, "reading trace");
    let trace = Trace::parse(&model, &trace_source)
        .map_err(|e| CliError::from_trace_error(e, trace_source.clone(), &trace_name))?;
    info!(
        steps = trace.steps.len(),
        states = trace.states().count(),
        "trace read"
    );

    let text = render_trace(&model, &trace)?;
    io::stdout()
        .lock()
        .write_all(text.as_bytes())
        .map_err(CliError::Write)
}

/// The model comes from a file, or from standard input when the path is `-`.
fn read_model_source(path: &Path) -> CliResult<(String, Arc<String>)> {
    if path.as_os_str() == "-" {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .map_err(|source| CliError::Open {
                path: "<stdin>".into(),
                source,
            })?;
        Ok(("<stdin>".into(), Arc::new(source)))
    } else {
        let source = read_file(path)?;
        Ok((path.display().to_string(), Arc::new(source)))
    }
}

fn read_file(path: &Path) -> CliResult<String> {
    fs::read_to_string(path).map_err(|source| CliError::Open {
        path: path.display().to_string(),
        source,
    })
}
