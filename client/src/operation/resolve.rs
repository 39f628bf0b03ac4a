//! Envelope validation: turns a normalized HTTP response into the operation's result.

use serde_json::Value;
use shared::Envelope;

use super::spec::OperationSpec;
use crate::core::error::OperationError;
use crate::core::http::HttpResponse;

/// Resolve a response into `data` or a tagged failure.
///
/// - non-2xx: `HttpError` (`AuthExpired` for 401), reason from the body's `message`
///   or `"<Operation> failed (<status>)"`
/// - 2xx with a non-envelope body, `success:false`, or missing `data`: `LogicalError`
pub(crate) fn resolve_response(op: OperationSpec, response: HttpResponse) -> Result<Value, OperationError> {
    let HttpResponse { ok, status, json } = response;

    if !ok {
        let message = json
            .as_ref()
            .and_then(extract_message)
            .unwrap_or_else(|| op.failure_message(status));
        return Err(OperationError::http(status, message));
    }

    let Some(json) = json else {
        return Err(OperationError::logical(op.failure_message(status)).with_status(status));
    };

    let envelope: Envelope<Value> = serde_json::from_value(json).map_err(|e| {
        tracing::warn!(operation = %op, error = %e, "Response body is not an envelope");
        OperationError::logical(op.failure_message(status)).with_status(status)
    })?;

    envelope
        .into_result()
        .map_err(|message| {
            OperationError::logical(message.unwrap_or_else(|| op.failure_message(status))).with_status(status)
        })
}

fn extract_message(json: &Value) -> Option<String> {
    ["message", "error"]
        .iter()
        .filter_map(|key| json.get(key).and_then(Value::as_str))
        .map(str::trim)
        .find(|m| !m.is_empty())
        .map(str::to_string)
}
