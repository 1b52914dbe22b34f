use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{error, info, warn};

use crate::config::config::USAGE;
use crate::config::ports::{AppConfig, ConversionPort};
use crate::models::conversion::{BatchSummary, ConversionRequest, ConversionResult, ConversionSuccess};
use crate::models::error::ConversionError;
use crate::service::codec::ImageCodec;
use crate::service::traits::i_service::CodecServiceTrait;
use crate::utils::utils::ProgressManager;

pub const COMPLETION_LINE: &str = "Conversion complete.";

pub struct BatchConverter {
    codec: Box<dyn CodecServiceTrait>,
    show_progress: bool,
}

impl BatchConverter {
    pub fn new(codec: Box<dyn CodecServiceTrait>, show_progress: bool) -> Self {
        BatchConverter { codec, show_progress }
    }

    /// 依輸入順序逐一轉換，每個路徑輸出一行狀態
    /// # 參數
    /// - paths: 輸入檔案路徑，可為空
    /// - out: 狀態輸出目標（正式執行時為 stdout）
    /// # 回傳
    /// - 批次統計；只有寫入 out 失敗時才返回錯誤
    pub fn convert_all(&self, paths: &[PathBuf], out: &mut dyn Write) -> io::Result<BatchSummary> {
        let mut summary = BatchSummary::default();
        if paths.is_empty() {
            writeln!(out, "{}", USAGE)?;
            return Ok(summary);
        }

        let total = paths.len();
        writeln!(out, "Starting batch conversion for {} image(s)...", total)?;
        info!("開始批次轉換，共 {} 個檔案", total);

        let pm = ProgressManager::new(total as u64, self.show_progress);
        for (index, path) in paths.iter().enumerate() {
            pm.start_item(index, total, &path.to_string_lossy());
            let result = self.convert_one(path);
            summary.record(&result);
            let line = render_status(path, &result);
            pm.suspend(|| writeln!(out, "{}", line))?;
            pm.inc();
        }
        pm.finish(summary.succeeded, summary.failed);

        writeln!(out, "{}", COMPLETION_LINE)?;
        out.flush()?;
        Ok(summary)
    }

    pub fn convert_one(&self, path: &Path) -> ConversionResult {
        let request = ConversionRequest::new(path);
        if !request.input_path.exists() {
            warn!("輸入路徑不存在：{}", path.display());
            return Err(ConversionError::not_found(path.to_string_lossy()));
        }

        let output_path = request.output_path();
        let result = self
            .codec
            .decode(&request.input_path)
            .map(|image| self.codec.normalize(image))
            .and_then(|image| self.codec.encode_bmp(&image, &output_path));

        match result {
            Ok(()) => {
                info!("轉換成功：{} -> {}", path.display(), output_path.display());
                Ok(ConversionSuccess {
                    input_path: request.input_path,
                    output_path,
                })
            }
            Err(e) => {
                error!("處理檔案 {} 失敗: {}", path.display(), e);
                Err(e)
            }
        }
    }
}

pub fn render_status(path: &Path, result: &ConversionResult) -> String {
    match result {
        Ok(success) => format!(
            "Successfully converted: '{}' -> '{}'",
            success.input_path.display(),
            success.output_path.display()
        ),
        Err(e @ ConversionError::NotFound { .. }) => format!("Error: {}", e),
        Err(e) => format!("Error converting '{}': {}", path.display(), e),
    }
}

// 以實際影像函式庫與 stdout 執行轉換
pub struct ConversionAdapter;

impl ConversionPort for ConversionAdapter {
    fn execute(&self, config: AppConfig) -> io::Result<BatchSummary> {
        let converter = BatchConverter::new(Box::new(ImageCodec::new()), config.show_progress);
        let stdout = io::stdout();
        let mut out = stdout.lock();
        converter.convert_all(&config.paths, &mut out)
    }
}
