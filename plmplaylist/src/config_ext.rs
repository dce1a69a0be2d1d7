//! Extension de plmconfig pour les uploads

use crate::upload::Uploader;
use anyhow::Result;
use plmconfig::Config;
use plmmetadata::MetadataExtractor;
use plmstore::MediaStore;
use std::sync::Arc;

/// Trait d'extension pour plmconfig::Config
pub trait PlaylistConfigExt {
    /// Crée un [`Uploader`] acceptant les extensions `media.allowed_extensions`
    fn create_uploader(
        &self,
        store: Arc<MediaStore>,
        extractor: Arc<dyn MetadataExtractor>,
    ) -> Result<Uploader>;

    /// Taille maximale d'une requête d'upload (`media.max_upload_size`)
    fn upload_body_limit(&self) -> Result<usize>;
}

impl PlaylistConfigExt for Config {
    fn create_uploader(
        &self,
        store: Arc<MediaStore>,
        extractor: Arc<dyn MetadataExtractor>,
    ) -> Result<Uploader> {
        Ok(Uploader::new(store, extractor).with_allowed_extensions(self.get_allowed_extensions()?))
    }

    fn upload_body_limit(&self) -> Result<usize> {
        self.get_max_upload_size()
    }
}
