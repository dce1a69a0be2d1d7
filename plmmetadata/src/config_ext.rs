//! Extension de plmconfig pour l'extracteur

use crate::TagExtractor;
use anyhow::Result;
use plmconfig::Config;
use plmstore::MediaStore;
use std::sync::Arc;

pub trait MetadataConfigExt {
    /// Crée un [`TagExtractor`] avec la taille de pochette `media.cover_max_size`
    fn create_tag_extractor(&self, store: Arc<MediaStore>) -> Result<TagExtractor>;
}

impl MetadataConfigExt for Config {
    fn create_tag_extractor(&self, store: Arc<MediaStore>) -> Result<TagExtractor> {
        let size = u32::try_from(self.get_cover_max_size()?)?;
        Ok(TagExtractor::new(store).with_cover_max_size(size))
    }
}
