//! Route handlers organized by resource

pub mod health;
pub mod playlists;
pub mod songs;

use axum::Json;
use serde::Serialize;

/// Acknowledgement body for mutations
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

pub(crate) fn message(message: &'static str) -> Json<MessageResponse> {
    Json(MessageResponse { message })
}
