//! Song endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use setlist_core::{Song, SongPatch, SongQuery};

use super::{message, MessageResponse};
use crate::http::error::ApiError;
use crate::http::extractors::ValidId;
use crate::state::AppState;

/// Create song request
#[derive(Deserialize)]
pub struct CreateSongRequest {
    pub song_id: i64,
    pub name: String,
    pub artist: String,
    pub genre: String,
}

impl From<CreateSongRequest> for Song {
    fn from(req: CreateSongRequest) -> Self {
        Song::new(req.song_id, req.name, req.artist, req.genre)
    }
}

/// POST /songs - create a new song
async fn create_song(
    State(state): State<AppState>,
    Json(req): Json<CreateSongRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    state.library().write().await.create_song(req.into())?;
    Ok((StatusCode::CREATED, message("Song created successfully.")))
}

/// GET /songs/{id} - get a single song
async fn get_song(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Json<Song>, ApiError> {
    let library = state.library().read().await;
    Ok(Json(library.song(id)?.clone()))
}

/// PUT /songs/{id} - update non-empty fields
async fn update_song(
    State(state): State<AppState>,
    ValidId(id): ValidId,
    Json(patch): Json<SongPatch>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.library().write().await.update_song(id, patch)?;
    Ok(message("Song updated successfully."))
}

/// DELETE /songs/{id}
async fn delete_song(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Json<MessageResponse>, ApiError> {
    state.library().write().await.delete_song(id)?;
    Ok(message("Song deleted successfully."))
}

/// GET /songs/search?name=&artist=&genre= - OR-combined substring search
async fn search_songs(
    State(state): State<AppState>,
    Query(query): Query<SongQuery>,
) -> Json<Vec<Song>> {
    Json(state.library().read().await.search_songs(&query))
}

/// Song routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/songs", post(create_song))
        .route("/songs/search", get(search_songs))
        .route(
            "/songs/{id}",
            get(get_song).put(update_song).delete(delete_song),
        )
}
