use std::path::Path;

use image::DynamicImage;

use crate::models::error::ConversionError;

// 影像函式庫的接口，負責解碼、色彩模式調整與 BMP 編碼
pub trait CodecServiceTrait: Send + Sync {
    /// 讀取並解碼影像，格式依檔案內容判斷
    /// # 參數
    /// - path: 輸入檔案路徑
    /// # 回傳
    /// - 成功時返回解碼後的影像，失敗時返回 ConversionError::Failure
    fn decode(&self, path: &Path) -> Result<DynamicImage, ConversionError>;

    /// 將影像調整為 BMP 可寫出的色彩模式
    fn normalize(&self, image: DynamicImage) -> DynamicImage;

    /// 以 BMP 編碼影像並寫入輸出路徑
    /// # 參數
    /// - image: 已調整色彩模式的影像
    /// - path: 輸出檔案路徑，已存在時直接覆寫
    fn encode_bmp(&self, image: &DynamicImage, path: &Path) -> Result<(), ConversionError>;
}
