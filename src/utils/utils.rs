use std::io;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};

pub const LOG_ENV: &str = "IMAGE_TO_BMP_LOG";

pub fn setup_logging() -> io::Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_env(LOG_ENV)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("日誌初始化失敗: {}", e)))
}

pub struct ProgressManager {
    pb: ProgressBar,
    start: Instant,
}

impl ProgressManager {
    pub fn new(total: u64, show_progress: bool) -> Self {
        let pb = if show_progress {
            let pb = ProgressBar::new(total);
            match ProgressStyle::default_bar().template("{msg} [{bar:40}] {pos}/{len} ETA: {eta_precise}") {
                Ok(style) => pb.set_style(style.progress_chars("##-")),
                Err(e) => log::warn!("進度條樣式無效: {}，使用預設樣式", e),
            }
            pb
        } else {
            ProgressBar::hidden()
        };
        ProgressManager {
            pb,
            start: Instant::now(),
        }
    }

    pub fn start_item(&self, index: usize, total: usize, name: &str) {
        self.pb.set_message(format!("轉換 {}/{}：{}", index + 1, total, name));
    }

    /// 暫停進度條繪製，避免與狀態輸出交錯
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.pb.suspend(f)
    }

    pub fn inc(&self) {
        self.pb.inc(1);
    }

    pub fn finish(&self, succeeded: usize, failed: usize) {
        let elapsed = self.start.elapsed().as_secs_f64();
        self.pb.finish_with_message(format!(
            "完成，成功 {} 個，失敗 {} 個，耗時 {:.2} 秒",
            succeeded, failed, elapsed
        ));
    }
}
