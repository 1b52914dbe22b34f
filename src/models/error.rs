use std::io;

// 單一檔案轉換的錯誤分類
#[derive(thiserror::Error, Debug)]
pub enum ConversionError {
    #[error("File not found '{path}'")]
    NotFound { path: String },
    // 解碼、色彩轉換、編碼或寫檔失敗，保留函式庫原始訊息
    #[error("{message}")]
    Failure { message: String },
}

impl ConversionError {
    pub fn not_found(path: impl Into<String>) -> Self {
        ConversionError::NotFound { path: path.into() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ConversionError::NotFound { .. })
    }
}

impl From<image::ImageError> for ConversionError {
    fn from(e: image::ImageError) -> Self {
        ConversionError::Failure { message: e.to_string() }
    }
}

impl From<io::Error> for ConversionError {
    fn from(e: io::Error) -> Self {
        ConversionError::Failure { message: e.to_string() }
    }
}
