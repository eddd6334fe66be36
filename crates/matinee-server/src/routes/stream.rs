//! Range-aware file streaming for `GET /movies/{filename}`.
//!
//! Bodies go out in 64KB chunks via `ReaderStream` so memory stays bounded
//! regardless of file size. A `Range: bytes=start-[end]` header turns the
//! response into a 206 carrying exactly the requested slice.

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use tokio::io::{AsyncReadExt, AsyncSeekExt};
use tokio_util::io::ReaderStream;

use matinee_core::{media, Error, RangeError, RangeHeader};

use crate::context::AppContext;
use crate::error::AppError;

/// Served files never change under a given name; clients may cache hard.
const CACHE_CONTROL: &str = "public, max-age=31536000";

const CHUNK_SIZE: usize = 64 * 1024;

/// GET /movies/{filename}
pub async fn stream_media(
    State(ctx): State<AppContext>,
    Path(filename): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let resolved = ctx.library.resolve(&filename).await?;
    let size = resolved.len;
    let content_type = media::content_type(&filename);

    // A present but undecodable value counts as malformed, not absent.
    let range_value = match headers.get(header::RANGE).map(|v| v.to_str()) {
        None => None,
        Some(Ok(value)) => Some(value),
        Some(Err(_)) => {
            tracing::warn!(file = %filename, "Range header is not visible ASCII");
            return Err(Error::malformed_range("value is not visible ASCII").into());
        }
    };
    tracing::debug!(
        file = %filename,
        size,
        content_type = %content_type,
        range = ?range_value,
        "Stream request"
    );

    match RangeHeader::parse(range_value, size) {
        RangeHeader::Absent => {
            let file = tokio::fs::File::open(&resolved.path)
                .await
                .map_err(|_| Error::not_found("file", &filename))?;
            let stream = ReaderStream::with_capacity(file, CHUNK_SIZE);

            Ok((
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE.as_str(), content_type),
                    (header::CONTENT_LENGTH.as_str(), size.to_string()),
                    (header::CACHE_CONTROL.as_str(), CACHE_CONTROL.to_string()),
                ],
                Body::from_stream(stream),
            )
                .into_response())
        }
        RangeHeader::Valid(range) => {
            let length = range.length();

            let mut file = tokio::fs::File::open(&resolved.path)
                .await
                .map_err(|_| Error::not_found("file", &filename))?;
            file.seek(std::io::SeekFrom::Start(range.start))
                .await
                .map_err(|e| Error::Internal(format!("Seek failed: {e}")))?;

            // Wrap in a Take so reads stop at exactly `length` bytes.
            let limited = file.take(length);
            let stream = ReaderStream::with_capacity(limited, CHUNK_SIZE);

            Ok((
                StatusCode::PARTIAL_CONTENT,
                [
                    (header::CONTENT_TYPE.as_str(), content_type),
                    (
                        header::CONTENT_RANGE.as_str(),
                        format!("bytes {}-{}/{}", range.start, range.end, size),
                    ),
                    (header::CONTENT_LENGTH.as_str(), length.to_string()),
                    (header::ACCEPT_RANGES.as_str(), "bytes".to_string()),
                    (header::CACHE_CONTROL.as_str(), CACHE_CONTROL.to_string()),
                ],
                Body::from_stream(stream),
            )
                .into_response())
        }
        RangeHeader::Invalid(RangeError::Unsatisfiable) => {
            tracing::warn!(file = %filename, range = ?range_value, size, "Unsatisfiable range");
            Err(Error::RangeNotSatisfiable { size }.into())
        }
        RangeHeader::Invalid(RangeError::Malformed(reason)) => {
            tracing::warn!(file = %filename, range = ?range_value, reason = %reason, "Malformed Range header");
            Err(Error::malformed_range(reason).into())
        }
    }
}
