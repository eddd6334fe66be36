//! JSON catalog of playable media for `GET /movies-list`.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::context::AppContext;
use crate::error::AppError;
use crate::library::LibraryEntry;

/// One catalog entry, as the front end consumes it.
#[derive(Debug, Serialize)]
pub struct MovieResponse {
    /// Display title (file name without extension).
    pub title: String,
    /// Player page URL for this file.
    pub video: String,
    /// Stream URL of the poster image, `null` when none exists.
    pub thumbnail: Option<String>,
}

impl MovieResponse {
    fn from_entry(entry: &LibraryEntry) -> Self {
        Self {
            title: entry.title.clone(),
            video: format!("/watch/{}", urlencoding::encode(&entry.file_name)),
            thumbnail: entry
                .thumbnail
                .as_deref()
                .map(|thumb| format!("/movies/{}", urlencoding::encode(thumb))),
        }
    }
}

/// GET /movies-list
pub async fn movies_list(
    State(ctx): State<AppContext>,
) -> Result<Json<Vec<MovieResponse>>, AppError> {
    let entries = ctx.library.scan().await?;
    tracing::debug!(count = entries.len(), "Catalog scan");
    let movies = entries.iter().map(MovieResponse::from_entry).collect();
    Ok(Json(movies))
}
