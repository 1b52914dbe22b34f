use std::io;
use std::path::PathBuf;

use crate::models::conversion::BatchSummary;

// 應用配置結構體
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub paths: Vec<PathBuf>,
    pub show_progress: bool,
}

// 配置來源的 Port
pub trait ConfigPort {
    fn get_config(&self) -> io::Result<AppConfig>;
}

// 轉換執行的 Port
pub trait ConversionPort {
    fn execute(&self, config: AppConfig) -> io::Result<BatchSummary>;
}
