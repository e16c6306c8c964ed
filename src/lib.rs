//! A gateway that forwards prompts to a remote generative-language API.
//!
//! This library resolves a named configuration (endpoint URL, API key, model
//! identifier) from an injected store, posts the prompt in the provider's
//! JSON schema, assembles the possibly-chunked response body, and extracts
//! the generated text. The public entry point always returns a string: the
//! model's text, the raw response body when extraction falls back, or an
//! `"ERROR: "`-prefixed diagnostic on any failure path.

pub mod error;
pub mod config;
pub mod diagnostics;
pub mod wire;
pub mod request;
pub mod transport;
mod assembler;
pub mod extract;
pub mod gateway;

// Re-export core types for easy usage
pub use error::Error;
pub use config::{ConfigStore, GatewayConfig, InMemoryConfigStore, DEFAULT_CONFIG_NAME};
pub use diagnostics::{BufferSink, DiagnosticSink, TracingSink};
pub use extract::extract_text;
pub use gateway::{CallOptions, CallOutcome, Gateway};
pub use request::{build_call_request, CallRequest};
pub use transport::{BodyReader, HttpTransport, Transport, TransportReply};
