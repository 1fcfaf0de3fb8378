use axum::{
    body::{self, Body},
    http::Request,
};
use serde_json::Value;

use crate::error::AppError;

/// Read the whole body (up to `limit` bytes), parse it as JSON if it is JSON, and hand
/// back a request carrying the very same bytes for the next stage.
///
/// A body that is not JSON parses to `None`; only a body that cannot be read is an error.
pub(super) async fn buffer_json(
    req: Request<Body>,
    limit: usize,
) -> Result<(Request<Body>, Option<Value>), AppError> {
    let (parts, body) = req.into_parts();

    let bytes = body::to_bytes(body, limit).await.map_err(|err| {
        tracing::warn!(error = %err, "failed to read request body");
        AppError::InvalidBody
    })?;

    let json = serde_json::from_slice::<Value>(&bytes).ok();

    Ok((Request::from_parts(parts, Body::from(bytes)), json))
}

/// `body[field]`, if the body is a JSON object that has it.
pub(super) fn field<'a>(json: Option<&'a Value>, field: &str) -> Option<&'a Value> {
    json.and_then(|v| v.as_object()).and_then(|o| o.get(field))
}
