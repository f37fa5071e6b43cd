pub mod config;
pub mod error;
pub mod library;
pub mod playlist;
pub mod song;

pub use config::SetlistConfig;
pub use error::{LibraryError, Result};
pub use library::Library;
pub use playlist::{PlaylistId, PlaylistView, SortKey};
pub use song::{Song, SongId, SongPatch, SongQuery};
