//! Conteneur ordonné des tracks et son accès partagé

pub mod core;
pub mod shared;

pub use self::core::Playlist;
pub use self::shared::{PlaylistState, SharedPlaylist};
