//! Request body decoding for the mutating note routes.
//!
//! Accepts `application/x-www-form-urlencoded`, `multipart/form-data` and
//! `application/json`, chosen by `Content-Type`. Anything else is treated as
//! a urlencoded form so the rejection message names the expected type.

use axum::{
    extract::{FromRequest, Multipart, Request},
    http::{header::CONTENT_TYPE, StatusCode},
    Form, Json,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::http::error::ApiError;

/// A deserialized note body, whatever encoding the client used.
#[derive(Debug)]
pub struct NoteBody<T>(pub T);

impl<S, T> FromRequest<S> for NoteBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("application/json") {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|r| rejected(r.status(), r.body_text()))?;
            Ok(Self(value))
        } else if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|r| rejected(r.status(), r.body_text()))?;
            from_multipart(multipart).await.map(Self)
        } else {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|r| rejected(r.status(), r.body_text()))?;
            Ok(Self(value))
        }
    }
}

/// Collect text fields into an object and deserialize `T` from it.
/// A repeated field keeps its last value.
async fn from_multipart<T: DeserializeOwned>(mut multipart: Multipart) -> Result<T, ApiError> {
    let mut fields = Map::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| rejected(e.status(), e.body_text()))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        let text = field
            .text()
            .await
            .map_err(|e| rejected(e.status(), e.body_text()))?;
        fields.insert(name, Value::String(text));
    }

    serde_json::from_value(Value::Object(fields))
        .map_err(|e| ApiError::BadRequest(format!("Failed to deserialize multipart body: {e}")))
}

fn rejected(status: StatusCode, body_text: String) -> ApiError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge
    } else {
        ApiError::BadRequest(body_text)
    }
}
