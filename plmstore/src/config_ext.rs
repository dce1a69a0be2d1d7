//! Extension de plmconfig pour le stockage des médias

use crate::MediaStore;
use anyhow::Result;
use plmconfig::Config;
use std::sync::Arc;

/// Trait d'extension pour créer le store depuis la configuration
pub trait MediaStoreConfigExt {
    /// Crée un [`MediaStore`] sur les répertoires `media.directory`
    /// et `media.covers_directory`
    fn create_media_store(&self) -> Result<Arc<MediaStore>>;
}

impl MediaStoreConfigExt for Config {
    fn create_media_store(&self) -> Result<Arc<MediaStore>> {
        let media_dir = self.get_media_dir()?;
        let covers_dir = self.get_covers_dir()?;
        Ok(Arc::new(MediaStore::new(media_dir, covers_dir)?))
    }
}
