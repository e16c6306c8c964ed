//! Transport seam over the HTTPS round trip.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};
use reqwest::Client;

use crate::request::CallRequest;
use crate::Error;

/// Reads a response body chunk by chunk.
///
/// `Ok(None)` is the end-of-stream sentinel and the normal termination path;
/// an `Err` is a real transport fault. Dropping the reader releases the
/// underlying connection.
#[async_trait]
pub trait BodyReader: Send {
    async fn next_chunk(&mut self) -> Result<Option<Bytes>, Error>;
}

/// Response descriptor handed back by a transport: status code, reason
/// phrase, and the body reader. Exists only within the call's lifetime.
pub struct TransportReply {
    pub status: u16,
    pub reason: String,
    pub body: Box<dyn BodyReader>,
}

/// Performs the HTTP round trip for a prepared [`CallRequest`].
///
/// The request is consumed by the invocation and the reply's body reader is
/// owned by the caller, so both are released exactly once on every exit path.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    async fn execute(&self, request: CallRequest) -> Result<TransportReply, Error>;
}

/// Production transport backed by a shared `reqwest` client.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport with the default client (60 second timeout).
    pub fn new() -> Result<Self, Error> {
        let client = Client::builder().timeout(Duration::from_secs(60)).build()?;
        Ok(Self { client })
    }

    /// Wrap an existing client (custom timeout, proxy, ...).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: CallRequest) -> Result<TransportReply, Error> {
        let response = self
            .client
            .post(request.url)
            .header(CONTENT_TYPE, "application/json")
            .header(CONTENT_LENGTH, request.body.len())
            .body(request.body)
            .send()
            .await?;

        let status = response.status();
        // HTTP/2 carries no reason phrase on the wire, so surface the
        // canonical reason for the status code.
        let reason = status
            .canonical_reason()
            .unwrap_or("Unknown Status")
            .to_string();

        Ok(TransportReply {
            status: status.as_u16(),
            reason,
            body: Box::new(HttpBodyReader { response }),
        })
    }
}

struct HttpBodyReader {
    response: reqwest::Response,
}

#[async_trait]
impl BodyReader for HttpBodyReader {
    async fn next_chunk(&mut self) -> Result<Option<Bytes>, Error> {
        Ok(self.response.chunk().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_transport_creation() {
        assert!(HttpTransport::new().is_ok());
    }
}
