use clap::Parser;
use std::path::PathBuf;

pub const USAGE: &str = "Usage: image_to_bmp [image1.png] [image2.jpg] ...";

#[derive(Parser, Clone, Debug)]
#[command(
    name = "image_to_bmp",
    version,
    about = "將影像檔批次轉換為 BMP 格式",
    long_about = "將 PNG、JPEG 等影像檔逐一轉換為 BMP，輸出檔與輸入檔同名同目錄，副檔名改為 .bmp。\n含 alpha 通道的 RGBA 影像會先轉為 RGB。\n環境變數 IMAGE_TO_BMP_LOG 可調整日誌等級（預設 warn）。"
)]
pub struct Cli {
    /// 要轉換的影像檔，依序處理
    pub paths: Vec<PathBuf>,
}
