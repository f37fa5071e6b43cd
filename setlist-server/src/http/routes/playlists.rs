//! Playlist endpoints

use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use setlist_core::{PlaylistView, Song, SortKey};

use super::{message, MessageResponse};
use crate::http::error::ApiError;
use crate::http::extractors::{ValidId, ValidIdPair};
use crate::state::AppState;

/// Create playlist request
#[derive(Deserialize)]
pub struct CreatePlaylistRequest {
    pub playlist_id: i64,
    pub name: String,
}

/// Rename request; a missing or empty name leaves the playlist as is
#[derive(Deserialize)]
pub struct UpdatePlaylistRequest {
    #[serde(default)]
    pub name: Option<String>,
}

/// Body for add_song / remove_song
#[derive(Deserialize)]
pub struct SongRefRequest {
    pub song_id: i64,
}

/// Sort request, key defaults to "name"
#[derive(Deserialize)]
pub struct SortRequest {
    #[serde(default = "default_sort_key")]
    pub key: String,
}

fn default_sort_key() -> String {
    SortKey::default().as_str().to_owned()
}

/// Song entry as listed inside a playlist
#[derive(Serialize)]
pub struct PlaylistSongResponse {
    pub song_id: i64,
    pub name: String,
}

/// Playlist response
#[derive(Serialize)]
pub struct PlaylistResponse {
    pub playlist_id: i64,
    pub name: String,
    pub songs: Vec<PlaylistSongResponse>,
}

impl From<PlaylistView> for PlaylistResponse {
    fn from(p: PlaylistView) -> Self {
        Self {
            playlist_id: p.playlist_id,
            name: p.name,
            songs: p
                .songs
                .into_iter()
                .map(|s| PlaylistSongResponse {
                    song_id: s.song_id,
                    name: s.name,
                })
                .collect(),
        }
    }
}

/// POST /playlists - create an empty playlist
async fn create_playlist(
    State(state): State<AppState>,
    Json(req): Json<CreatePlaylistRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    state
        .library()
        .write()
        .await
        .create_playlist(req.playlist_id, req.name)?;
    Ok((StatusCode::CREATED, message("Playlist created successfully.")))
}

/// GET /playlists/{id} - playlist with song ids and names
async fn get_playlist(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Json<PlaylistResponse>, ApiError> {
    let view = state.library().read().await.playlist(id)?;
    Ok(Json(PlaylistResponse::from(view)))
}

/// PUT /playlists/{id} - rename
async fn update_playlist(
    State(state): State<AppState>,
    ValidId(id): ValidId,
    Json(req): Json<UpdatePlaylistRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .library()
        .write()
        .await
        .rename_playlist(id, req.name.unwrap_or_default())?;
    Ok(message("Playlist updated successfully."))
}

/// DELETE /playlists/{id}
async fn delete_playlist(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Json<MessageResponse>, ApiError> {
    state.library().write().await.delete_playlist(id)?;
    Ok(message("Playlist deleted successfully."))
}

/// POST /playlists/{id}/add_song
async fn add_song(
    State(state): State<AppState>,
    ValidId(id): ValidId,
    Json(req): Json<SongRefRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .library()
        .write()
        .await
        .add_song_to_playlist(id, req.song_id)?;
    Ok(message("Song added to playlist successfully."))
}

/// DELETE /playlists/{id}/remove_song - drops every occurrence
async fn remove_song(
    State(state): State<AppState>,
    ValidId(id): ValidId,
    Json(req): Json<SongRefRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .library()
        .write()
        .await
        .remove_song_from_playlist(id, req.song_id)?;
    Ok(message("Song removed from playlist successfully."))
}

/// POST /playlists/{id}/sort
///
/// A missing playlist is reported before an unsupported key.
async fn sort_playlist(
    State(state): State<AppState>,
    ValidId(id): ValidId,
    Json(req): Json<SortRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .library()
        .write()
        .await
        .sort_playlist_by(id, &req.key)?;
    Ok(message("Playlist sorted successfully."))
}

/// GET /playlists/{id}/songs/{song_id} - first matching entry
async fn get_playlist_song(
    State(state): State<AppState>,
    ValidIdPair(id, song_id): ValidIdPair,
) -> Result<Json<Song>, ApiError> {
    let library = state.library().read().await;
    Ok(Json(library.playlist_song(id, song_id)?.clone()))
}

/// Playlist routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/playlists", post(create_playlist))
        .route(
            "/playlists/{id}",
            get(get_playlist).put(update_playlist).delete(delete_playlist),
        )
        .route("/playlists/{id}/add_song", post(add_song))
        .route("/playlists/{id}/remove_song", delete(remove_song))
        .route("/playlists/{id}/sort", post(sort_playlist))
        .route("/playlists/{id}/songs/{song_id}", get(get_playlist_song))
}
