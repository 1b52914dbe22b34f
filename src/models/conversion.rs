use std::path::{Path, PathBuf};

use crate::models::error::ConversionError;

#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub input_path: PathBuf,
}

impl ConversionRequest {
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        ConversionRequest { input_path: input_path.into() }
    }

    /// 去掉最後一個副檔名後加上 `.bmp`，與輸入放在同一目錄
    pub fn output_path(&self) -> PathBuf {
        derive_output_path(&self.input_path)
    }
}

pub fn derive_output_path(input: &Path) -> PathBuf {
    input.with_extension("bmp")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSuccess {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

pub type ConversionResult = Result<ConversionSuccess, ConversionError>;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn record(&mut self, result: &ConversionResult) {
        self.attempted += 1;
        if result.is_ok() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
    }
}
