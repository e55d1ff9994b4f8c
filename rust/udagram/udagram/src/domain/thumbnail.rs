//! Resizing of uploaded images into thumbnails

use std::io::Cursor;

use anyhow::Context;
use image::{DynamicImage, GenericImageView, ImageFormat, imageops::FilterType};

/// Width of every thumbnail, the height follows the aspect ratio
pub const THUMBNAIL_WIDTH: u32 = 150;

/// Appended to the source key to form the thumbnail key
pub const THUMBNAIL_SUFFIX: &str = ".jpeg";

/// The content type thumbnails are stored with.
/// The bytes are jpeg, the stored type has always been png and clients rely on it.
pub const THUMBNAIL_CONTENT_TYPE: &str = "image/png";

/// The key of the thumbnail of `key`
pub fn thumbnail_key(key: &str) -> String {
    format!("{key}{THUMBNAIL_SUFFIX}")
}

/// The thumbnail height of a `width` x `height` image
pub fn scaled_height(width: u32, height: u32) -> u32 {
    let scaled = (height as f64 * THUMBNAIL_WIDTH as f64 / width as f64).round() as u32;
    scaled.max(1)
}

/// Decodes `bytes`, resizes to [THUMBNAIL_WIDTH] and encodes the result as jpeg
pub fn make_thumbnail(bytes: &[u8]) -> anyhow::Result<Vec<u8>> {
    let img = image::load_from_memory(bytes).context("unable to decode image")?;
    let (width, height) = img.dimensions();
    if width == 0 {
        anyhow::bail!("image has no width");
    }

    let resized = img.resize_exact(
        THUMBNAIL_WIDTH,
        scaled_height(width, height),
        FilterType::Lanczos3,
    );

    // jpeg has no alpha channel
    let rgb = DynamicImage::ImageRgb8(resized.to_rgb8());

    let mut out = Cursor::new(Vec::new());
    rgb.write_to(&mut out, ImageFormat::Jpeg)
        .context("unable to encode thumbnail")?;

    Ok(out.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([200, 30, 30, 255]));
        let mut out = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(img)
            .write_to(&mut out, ImageFormat::Png)
            .unwrap();
        out.into_inner()
    }

    #[test]
    fn it_keeps_the_aspect_ratio() {
        let thumb = make_thumbnail(&png(300, 200)).unwrap();

        assert_eq!(image::guess_format(&thumb).unwrap(), ImageFormat::Jpeg);
        let decoded = image::load_from_memory(&thumb).unwrap();
        assert_eq!(decoded.dimensions(), (150, 100));
    }

    #[test]
    fn it_upscales_narrow_images() {
        let thumb = make_thumbnail(&png(50, 20)).unwrap();

        let decoded = image::load_from_memory(&thumb).unwrap();
        assert_eq!(decoded.dimensions(), (150, 60));
    }

    #[test]
    fn very_wide_images_keep_one_row() {
        assert_eq!(scaled_height(3000, 1), 1);
        assert_eq!(scaled_height(301, 200), 100);
    }

    #[test]
    fn it_rejects_bytes_that_are_not_an_image() {
        assert!(make_thumbnail(b"definitely not a png").is_err());
    }

    #[test]
    fn thumbnail_key_appends_the_suffix() {
        assert_eq!(thumbnail_key("abc"), "abc.jpeg");
    }
}
