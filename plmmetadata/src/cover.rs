//! Préparation des pochettes embarquées dans les tags

use crate::error::Result;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;

/// Qualité JPEG des pochettes enregistrées
pub const COVER_JPEG_QUALITY: u8 = 85;

/// Décode une image, la réduit pour tenir dans `max_size` x `max_size`
/// et la réencode en JPEG RGB
///
/// Les images plus petites gardent leur taille, le ratio est conservé.
pub fn prepare_cover(data: &[u8], max_size: u32) -> Result<Vec<u8>> {
    let max_size = max_size.max(1);
    let img = image::load_from_memory(data)?;

    let img = if img.width() > max_size || img.height() > max_size {
        img.resize(max_size, max_size, FilterType::Lanczos3)
    } else {
        img
    };

    let rgb = img.to_rgb8();
    let mut buffer = Vec::new();
    JpegEncoder::new_with_quality(&mut buffer, COVER_JPEG_QUALITY).encode_image(&rgb)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([200, 30, 30, 128]));
        let mut buffer = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(img)
            .write_to(&mut buffer, ImageFormat::Png)
            .unwrap();
        buffer.into_inner()
    }

    #[test]
    fn test_large_cover_is_reduced() {
        let jpeg = prepare_cover(&png(1000, 600), 500).unwrap();

        assert_eq!(image::guess_format(&jpeg).unwrap(), ImageFormat::Jpeg);
        let decoded = image::load_from_memory(&jpeg).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (500, 300));
    }

    #[test]
    fn test_small_cover_keeps_size() {
        let jpeg = prepare_cover(&png(120, 80), 500).unwrap();

        let decoded = image::load_from_memory(&jpeg).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (120, 80));
        assert!(decoded.color().channel_count() == 3);
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(prepare_cover(b"not an image", 500).is_err());
    }
}
