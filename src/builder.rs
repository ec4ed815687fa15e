//! Playlist orchestration.
//!
//! Strictly linear: resolve the current user, create the playlist, search
//! the catalog once per entry in position order, then append everything that
//! matched in a single call. Searches run sequentially; latency is one
//! catalog round-trip per entry. There is no retry policy: any provider
//! failure aborts the whole operation, and a playlist created before the
//! failure is left behind on the provider side.

use crate::{catalog::Catalog, error::ApiError, types::PlaylistRequest};

/// Creates a playlist from normalized entries and returns its id.
///
/// Entries whose search comes back empty contribute nothing and are skipped
/// silently. When no entry matched at all, the add-tracks call is skipped
/// and the playlist is left empty, which is still a success.
pub async fn build(request: &PlaylistRequest, catalog: &dyn Catalog) -> Result<String, ApiError> {
    let user_id = catalog.current_user_id().await?;
    let playlist_id = catalog.create_playlist(&user_id, &request.name).await?;

    let mut uris: Vec<String> = Vec::new();
    for entry in &request.entries {
        if let Some(uri) = catalog.search_track(&entry.artist, &entry.track).await? {
            uris.push(uri);
        }
    }

    if !uris.is_empty() {
        catalog.add_tracks(&playlist_id, &uris).await?;
    }

    Ok(playlist_id)
}
