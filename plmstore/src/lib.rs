//! # plmstore - Stockage des médias envoyés
//!
//! Cette crate conserve sur disque les fichiers audio reçus et les pochettes
//! extraites de leurs tags, et les resservira en HTTP.
//!
//! - [`MediaStore`] : écriture/lecture des fichiers, références stables
//! - [`sanitize_filename`] : nettoyage des noms fournis par les clients
//! - [`file_router`] : routes `GET /uploads/...`
//!
//! ```rust,no_run
//! use plmstore::MediaStore;
//!
//! # async fn example() -> plmstore::Result<()> {
//! let store = MediaStore::new("./uploads", "./uploads/covers")?;
//! let stored = store.save_media("My Song.mp3", b"...").await?;
//! assert_eq!(stored.filename, "My_Song.mp3");
//! # Ok(())
//! # }
//! ```

mod config_ext;
mod error;
mod routes;
mod store;

pub use config_ext::MediaStoreConfigExt;
pub use error::{Error, Result};
pub use routes::file_router;
pub use store::{MediaStore, StoredMedia, content_type_for, sanitize_filename};
