use serde_json::Value;

/// Errors produced while turning a raw API reply into a status message.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum HomeworkError {
    #[error("{0}")]
    MalformedResponse(&'static str),
    #[error("API rejected the request: {0}")]
    RemoteError(String),
    #[error("homeworks list is empty")]
    EmptyResult,
    #[error("missing key '{0}' in homework")]
    MissingField(&'static str),
    #[error("unknown homework status '{0}'")]
    UnknownStatus(String),
}

/// Validate a raw reply from the homework API and extract the newest record.
///
/// The API reports errors in-band: an HTTP 200 body can be an error envelope
/// keyed by `code` instead of a normal payload. `not_authenticated` carries
/// its detail under `message`, `UnknownError` under `error`.
pub fn latest_homework(payload: &Value) -> Result<&Value, HomeworkError> {
    let object = payload
        .as_object()
        .ok_or(HomeworkError::MalformedResponse("response is not an object"))?;

    if let Some(code) = object.get("code").and_then(Value::as_str) {
        if matches!(code, "not_authenticated" | "UnknownError") {
            let detail = match code {
                "not_authenticated" => object.get("message"),
                _ => object.get("error"),
            };
            let text = detail.and_then(Value::as_str).unwrap_or(code).to_string();
            return Err(HomeworkError::RemoteError(text));
        }
    }

    let homeworks = object
        .get("homeworks")
        .and_then(Value::as_array)
        .ok_or(HomeworkError::MalformedResponse("homeworks is not a list"))?;

    // Newest record comes first; an empty list means there is nothing to track.
    homeworks.first().ok_or(HomeworkError::EmptyResult)
}
