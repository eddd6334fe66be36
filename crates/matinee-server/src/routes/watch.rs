//! Player page for `GET /watch/{filename}`.
//!
//! Renders a standalone HTML document with a `<video>` or `<audio>` element
//! depending on the file's MIME classification. Every interpolated value
//! goes through maud, which escapes it, so hostile file names cannot inject
//! markup; the stream URL is additionally percent-encoded.

use axum::extract::{Path, State};
use axum::response::Html;
use maud::{html, Markup, PreEscaped, DOCTYPE};

use matinee_core::{media, MediaKind};

use crate::context::AppContext;
use crate::error::AppError;

/// Stylesheet for the player page. Static, no interpolation.
const PLAYER_CSS: &str = "\
body {
    margin: 0;
    padding: 0;
    display: flex;
    justify-content: center;
    align-items: center;
    height: 100vh;
    background-color: #1C1813;
    color: white;
    font-family: Arial, sans-serif;
}
.container {
    text-align: center;
}
h1 {
    margin-bottom: 20px;
}
video {
    max-width: 90%;
    max-height: 80vh;
    border: 5px solid #f1f1f1;
    border-radius: 10px;
}
video:fullscreen {
    border: none;
}
video:-webkit-full-screen {
    border: none;
}
audio {
    width: 90%;
    max-width: 600px;
}
";

/// GET /watch/{filename}
pub async fn watch_page(
    State(ctx): State<AppContext>,
    Path(filename): Path<String>,
) -> Result<Html<String>, AppError> {
    // Existence gate only; the page itself never touches the file.
    ctx.library.resolve(&filename).await?;

    tracing::debug!(file = %filename, kind = %media::kind(&filename), "Watch page");
    Ok(Html(render_player(&filename).into_string()))
}

/// Build the player document for a file name.
fn render_player(filename: &str) -> Markup {
    let title = media::title(filename);
    let content_type = media::content_type(filename);
    let src = format!("/movies/{}", urlencoding::encode(filename));

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(PLAYER_CSS)) }
            }
            body {
                div class="container" {
                    h1 { (title) }
                    @match media::kind(filename) {
                        MediaKind::Video => {
                            video controls autoplay {
                                source src=(src) type=(content_type);
                                "Your browser does not support the video tag."
                            }
                        }
                        MediaKind::Audio => {
                            audio controls autoplay {
                                source src=(src) type=(content_type);
                                "Your browser does not support the audio tag."
                            }
                        }
                    }
                }
            }
        }
    }
}
