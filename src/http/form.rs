//! Static upload form served at `/` for manual testing.

use axum::{extract::State, response::Html};

use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Read the form file from disk and return it as HTML.
pub async fn upload_form(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    match tokio::fs::read_to_string(state.form_path.as_path()).await {
        Ok(html) => Ok(Html(html)),
        Err(e) => {
            tracing::error!(path = %state.form_path.display(), error = %e, "Failed to read form");
            Err(ApiError::FormUnavailable)
        }
    }
}
