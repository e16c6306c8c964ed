//! The call pipeline and its guard.
//!
//! One call runs configuration resolution, request construction, the
//! transport round trip, body assembly, and text extraction inside a single
//! guarded scope. The public entry point always returns a string; faults are
//! flattened to `"ERROR: "`-prefixed results at this boundary and never
//! propagate to the caller.

use std::sync::Arc;

use crate::assembler::assemble_body;
use crate::config::{ConfigStore, DEFAULT_CONFIG_NAME};
use crate::diagnostics::{DiagnosticSink, Diagnostics};
use crate::extract::extract_text;
use crate::request::build_call_request;
use crate::transport::{HttpTransport, Transport};
use crate::Error;

/// Per-call options: which named configuration to use and whether to narrate
/// the call to the diagnostic sink.
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    /// Configuration name; `None` selects [`DEFAULT_CONFIG_NAME`].
    pub config_name: Option<String>,
    /// Enables diagnostic narration for this call.
    pub debug: bool,
}

impl CallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, name: impl Into<String>) -> Self {
        self.config_name = Some(name.into());
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Typed outcome of a call, before boundary flattening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallOutcome {
    /// Text extracted from the expected JSON path.
    Text(String),
    /// HTTP 200 with a body the extractor could not read; carries the raw,
    /// unparsed body. A non-error outcome by contract.
    RawBody(String),
    /// Non-200 status; extraction was skipped.
    StatusFailure { status: u16, reason: String },
}

impl CallOutcome {
    /// Flatten to the public string contract.
    pub fn into_result_string(self) -> String {
        match self {
            CallOutcome::Text(text) => text,
            CallOutcome::RawBody(body) => body,
            CallOutcome::StatusFailure { reason, .. } => format!("ERROR: {reason}"),
        }
    }
}

/// Forwards prompts to a remote generative-language API using named,
/// externally stored configurations.
pub struct Gateway {
    store: Arc<dyn ConfigStore>,
    transport: Arc<dyn Transport>,
    sink: Option<Arc<dyn DiagnosticSink>>,
}

impl Gateway {
    /// Create a gateway with the production HTTP transport.
    pub fn new(store: Arc<dyn ConfigStore>) -> Result<Self, Error> {
        Ok(Self::with_transport(store, Arc::new(HttpTransport::new()?)))
    }

    /// Create a gateway over a custom transport.
    pub fn with_transport(store: Arc<dyn ConfigStore>, transport: Arc<dyn Transport>) -> Self {
        Self {
            store,
            transport,
            sink: None,
        }
    }

    /// Attach a diagnostic sink, consulted only for calls made with the
    /// debug flag set.
    pub fn with_diagnostics(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Forward `prompt` and return the single string result.
    ///
    /// Never fails: the result carries the generated text, the raw response
    /// body when extraction falls back, or an `"ERROR: "`-prefixed
    /// diagnostic on any failure path.
    pub async fn generate(&self, prompt: &str, options: &CallOptions) -> String {
        match self.try_generate(prompt, options).await {
            Ok(outcome) => outcome.into_result_string(),
            Err(fault) => format!("ERROR: {fault}"),
        }
    }

    /// Typed variant of [`generate`](Self::generate) for callers that need
    /// to distinguish extracted text, raw-body fallback, and status failure.
    pub async fn try_generate(
        &self,
        prompt: &str,
        options: &CallOptions,
    ) -> Result<CallOutcome, Error> {
        let diag = Diagnostics::new(self.sink.as_deref(), options.debug);
        let result = self.run(prompt, options, &diag).await;
        if let Err(fault) = &result {
            diag.line(|| format!("caught fault: {fault}"));
        }
        result
    }

    async fn run(
        &self,
        prompt: &str,
        options: &CallOptions,
        diag: &Diagnostics<'_>,
    ) -> Result<CallOutcome, Error> {
        let name = options
            .config_name
            .as_deref()
            .unwrap_or(DEFAULT_CONFIG_NAME);
        diag.line(|| format!("call start (config '{name}')"));

        let config = self.store.resolve(name).await?;
        diag.line(|| format!("resolved configuration '{name}' (model {})", config.model_name));

        let request = build_call_request(&config, prompt)?;
        diag.line(|| format!("request built ({} bytes)", request.body.len()));

        diag.line(|| "sending request".to_string());
        let mut reply = self.transport.execute(request).await?;
        diag.line(|| format!("response received (status {} {})", reply.status, reply.reason));

        // The reply's body reader is owned by this scope; every exit path,
        // early returns included, drops it exactly once.
        let raw = assemble_body(reply.body.as_mut(), diag).await?;

        if reply.status != 200 {
            diag.line(|| "status failure, extraction skipped".to_string());
            return Ok(CallOutcome::StatusFailure {
                status: reply.status,
                reason: reply.reason,
            });
        }

        let body = String::from_utf8_lossy(&raw).into_owned();
        match extract_text(&body) {
            Some(text) => {
                diag.line(|| format!("extracted {} bytes of generated text", text.len()));
                Ok(CallOutcome::Text(text))
            }
            None => {
                diag.line(|| "extraction failed, returning raw body".to_string());
                Ok(CallOutcome::RawBody(body))
            }
        }
    }
}
