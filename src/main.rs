use std::io;

use image_to_bmp::action::cli::process_cli_mode;
use image_to_bmp::utils::utils::setup_logging;

fn main() -> io::Result<()> {
    setup_logging()?;
    let summary = process_cli_mode()?;
    log::info!(
        "程式執行完成：{} 個檔案，成功 {}，失敗 {}",
        summary.attempted, summary.succeeded, summary.failed
    );
    Ok(())
}
