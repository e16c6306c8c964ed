//! Assembly of a possibly-chunked response body into a single buffer.

use crate::diagnostics::Diagnostics;
use crate::transport::BodyReader;
use crate::Error;

/// Read `reader` to completion, concatenating every chunk into one buffer.
///
/// End-of-stream (`None`) is the normal termination path, not an error. No
/// size cap is imposed; very large responses are buffered whole (known
/// scaling risk, deferred).
pub(crate) async fn assemble_body(
    reader: &mut dyn BodyReader,
    diag: &Diagnostics<'_>,
) -> Result<Vec<u8>, Error> {
    let mut buffer = Vec::new();
    while let Some(chunk) = reader.next_chunk().await? {
        diag.line(|| format!("read chunk of {} bytes", chunk.len()));
        buffer.extend_from_slice(&chunk);
    }
    Ok(buffer)
}
