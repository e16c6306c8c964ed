//! Injected diagnostic narration for gateway calls.

use std::sync::Mutex;

/// A line-oriented sink for per-call diagnostic narration.
///
/// A sink is only consulted when the caller sets the debug flag on a call,
/// and must never influence control flow or the call result.
pub trait DiagnosticSink: Send + Sync {
    /// Record one narration line.
    fn line(&self, line: &str);
}

/// A [`DiagnosticSink`] that forwards every line to the `tracing` facade at
/// debug level.
#[derive(Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn line(&self, line: &str) {
        tracing::debug!(target: "llm_gateway", "{line}");
    }
}

/// A [`DiagnosticSink`] that records lines in memory, for inspection in
/// tests or admin tooling.
#[derive(Debug, Default)]
pub struct BufferSink {
    lines: Mutex<Vec<String>>,
}

impl BufferSink {
    /// Create an empty buffer sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines recorded so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl DiagnosticSink for BufferSink {
    fn line(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}

/// Per-call handle bundling the injected sink with the caller's debug flag.
/// When the flag is off, narration closures are never evaluated.
pub(crate) struct Diagnostics<'a> {
    sink: Option<&'a dyn DiagnosticSink>,
}

impl<'a> Diagnostics<'a> {
    pub(crate) fn new(sink: Option<&'a dyn DiagnosticSink>, enabled: bool) -> Self {
        Self {
            sink: if enabled { sink } else { None },
        }
    }

    pub(crate) fn line(&self, make: impl FnOnce() -> String) {
        if let Some(sink) = self.sink {
            sink.line(&make());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_sink_records_lines() {
        let sink = BufferSink::new();
        sink.line("first");
        sink.line("second");

        assert_eq!(sink.lines(), vec!["first", "second"]);
    }

    #[test]
    fn test_disabled_diagnostics_never_evaluate_narration() {
        let sink = BufferSink::new();
        let diag = Diagnostics::new(Some(&sink), false);

        diag.line(|| panic!("narration must not be evaluated when debug is off"));
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_enabled_diagnostics_forward_to_sink() {
        let sink = BufferSink::new();
        let diag = Diagnostics::new(Some(&sink), true);

        diag.line(|| "resolved configuration".to_string());
        assert_eq!(sink.lines(), vec!["resolved configuration"]);
    }
}
