use axum::{
    body::Bytes,
    extract::{Multipart, State},
    response::Json,
};
use chrono::Utc;
use serde_json::{Value, json};

use crate::{
    builder,
    error::ApiError,
    server::AppState,
    setlist,
    types::PlaylistRequest,
};

/// Handles the multipart setlist submission.
///
/// Form fields: `playlistName` (optional), `inputType` (`"text"` when
/// absent), `setlistText` for text input, `image` for a photographed
/// setlist. An unknown inputType or an image submission without an image
/// part is rejected with 400 before any provider is called.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Value>, ApiError> {
    let mut playlist_name = String::new();
    let mut input_type: Option<String> = None;
    let mut setlist_text = String::new();
    let mut image: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Validation(e.to_string()))?
    {
        let Some(name) = field.name().map(ToString::to_string) else {
            continue;
        };
        match name.as_str() {
            "playlistName" => {
                playlist_name = field
                    .text()
                    .await
                    .map_err(|e| ApiError::Validation(e.to_string()))?;
            }
            "inputType" => {
                input_type = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| ApiError::Validation(e.to_string()))?,
                );
            }
            "setlistText" => {
                setlist_text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::Validation(e.to_string()))?;
            }
            "image" => {
                image = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| ApiError::Validation(e.to_string()))?,
                );
            }
            _ => {}
        }
    }

    let input_type = input_type.unwrap_or_else(|| "text".to_string());
    let raw_text = match input_type.as_str() {
        "text" => setlist_text,
        "image" => {
            let Some(image) = image.filter(|b| !b.is_empty()) else {
                return Err(ApiError::Validation("no image provided".to_string()));
            };
            state.extractor.extract_text(&image).await?
        }
        other => {
            return Err(ApiError::Validation(format!("invalid inputType: {other}")));
        }
    };

    let name = if playlist_name.is_empty() {
        format!("{} Setlist", Utc::now().format("%Y-%m-%d"))
    } else {
        playlist_name
    };

    let request = PlaylistRequest {
        name,
        entries: setlist::normalize(&raw_text),
    };
    let playlist_id = builder::build(&request, state.catalog.as_ref()).await?;

    Ok(Json(json!({
        "message": format!("Playlist created. ID: {playlist_id}")
    })))
}
