use std::fs::File;
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ImageEncoder, RgbaImage};

use crate::error::Result;

pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Cursor::new(Vec::new());
    PngEncoder::new(&mut bytes).write_image(
        img.as_raw(),
        img.width(),
        img.height(),
        image::ExtendedColorType::Rgba8,
    )?;
    Ok(bytes.into_inner())
}

pub fn write_png(output: &Path, img: &RgbaImage) -> Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    PngEncoder::new(&mut writer).write_image(
        img.as_raw(),
        img.width(),
        img.height(),
        image::ExtendedColorType::Rgba8,
    )?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn encoded_png_decodes_to_same_pixels() {
        let mut img = RgbaImage::from_pixel(7, 5, Rgba([0, 0, 0, 0]));
        img.put_pixel(3, 2, Rgba([10, 20, 30, 128]));
        let bytes = encode_png(&img).unwrap();

        assert_eq!(&bytes[1..4], b"PNG");
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded, img);
    }

    #[test]
    fn writes_png_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("card.png");
        write_png(&path, &RgbaImage::new(3, 3)).unwrap();
        assert_eq!(image::image_dimensions(&path).unwrap(), (3, 3));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn full_device_is_an_error() {
        // writes to /dev/full fail with ENOSPC once the buffer is flushed
        let full = Path::new("/dev/full");
        if !full.exists() {
            return;
        }
        assert!(write_png(full, &RgbaImage::new(3, 3)).is_err());
    }
}
