use image::ColorType;

/// 解碼後影像的通道配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Grayscale,
    GrayscaleAlpha,
    Rgb,
    Rgba,
}

impl ColorMode {
    pub fn of(color: ColorType) -> Self {
        match (color.has_color(), color.has_alpha()) {
            (false, false) => ColorMode::Grayscale,
            (false, true) => ColorMode::GrayscaleAlpha,
            (true, false) => ColorMode::Rgb,
            (true, true) => ColorMode::Rgba,
        }
    }

    pub fn has_alpha(self) -> bool {
        matches!(self, ColorMode::GrayscaleAlpha | ColorMode::Rgba)
    }

    /// BMP 寫出前的目標模式：RGBA 去除 alpha，其餘原樣交給編碼器
    pub fn normalized_for_bmp(self) -> Self {
        match self {
            ColorMode::Rgba => ColorMode::Rgb,
            other => other,
        }
    }
}
