use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat, ImageReader};
use log::debug;

use crate::models::color::ColorMode;
use crate::models::error::ConversionError;
use crate::service::traits::i_service::CodecServiceTrait;

pub struct ImageCodec;

impl ImageCodec {
    pub fn new() -> Self {
        ImageCodec
    }
}

impl Default for ImageCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl CodecServiceTrait for ImageCodec {
    fn decode(&self, path: &Path) -> Result<DynamicImage, ConversionError> {
        let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;
        debug!(
            "解碼完成：{}，尺寸 {}x{}，色彩類型 {:?}",
            path.display(),
            image.width(),
            image.height(),
            image.color()
        );
        Ok(image)
    }

    fn normalize(&self, image: DynamicImage) -> DynamicImage {
        let mode = ColorMode::of(image.color());
        match (mode, mode.normalized_for_bmp()) {
            (ColorMode::Rgba, ColorMode::Rgb) => {
                debug!("移除 alpha 通道：{:?} -> Rgb8", image.color());
                DynamicImage::ImageRgb8(image.to_rgb8())
            }
            _ => image,
        }
    }

    fn encode_bmp(&self, image: &DynamicImage, path: &Path) -> Result<(), ConversionError> {
        // 先在記憶體完成編碼，編碼失敗時不會留下殘缺的輸出檔
        let mut buffer = Cursor::new(Vec::new());
        image.write_to(&mut buffer, ImageFormat::Bmp)?;
        let bytes = buffer.into_inner();
        fs::write(path, &bytes)?;
        debug!("寫入 BMP：{}，大小：{} 位元組", path.display(), bytes.len());
        Ok(())
    }
}
