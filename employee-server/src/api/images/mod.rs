//! Photo serving
//!
//! Stored employee photos are public, like static files under the web root.

use axum::{
    Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
};
use http::header;

use crate::AppResult;
use crate::core::ServerState;

/// Images router - public
pub fn router() -> Router<ServerState> {
    Router::new().route("/images/{filename}", get(serve_photo))
}

/// Serve a stored photo, content type guessed from the extension
async fn serve_photo(
    State(state): State<ServerState>,
    Path(filename): Path<String>,
) -> AppResult<impl IntoResponse> {
    let content = state.photos.read(&filename).await?;
    let mime = mime_guess::from_path(&filename).first_or_octet_stream();

    tracing::debug!(filename = %filename, size = content.len(), "Serving photo");

    Ok(([(header::CONTENT_TYPE, mime.essence_str().to_string())], content))
}
