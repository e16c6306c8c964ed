//! Construction of the outbound call request.

use reqwest::Url;

use crate::config::GatewayConfig;
use crate::wire::GenerateRequest;
use crate::Error;

/// A fully prepared outbound request: final URL plus serialized JSON body.
/// Created fresh per call and consumed by the transport invocation.
#[derive(Debug, Clone)]
pub struct CallRequest {
    pub url: Url,
    pub body: String,
}

/// Build the outbound request for `prompt` against a resolved configuration.
///
/// The prompt is embedded through serde serialization, so quotes and
/// backslashes in the prompt always yield valid JSON. The API key is appended
/// as the `key` query parameter, merging with any query string the endpoint
/// already carries.
pub fn build_call_request(config: &GatewayConfig, prompt: &str) -> Result<CallRequest, Error> {
    let body = serde_json::to_string(&GenerateRequest::from_prompt(prompt))?;

    let mut url = Url::parse(&config.api_url)
        .map_err(|e| Error::config(format!("invalid endpoint URL '{}': {e}", config.api_url)))?;
    url.query_pairs_mut().append_pair("key", &config.api_key);

    Ok(CallRequest { url, body })
}
