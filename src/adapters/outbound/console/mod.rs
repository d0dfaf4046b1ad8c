/// Console adapters for diagnostics output
mod diagnostic_sink;

pub use diagnostic_sink::StderrDiagnosticSink;
