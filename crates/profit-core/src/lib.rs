//! # Profit Core
//!
//! 核心資料模型與類型定義

pub mod general;
pub mod product;
pub mod report;

// Re-export 主要類型
pub use general::{FixedCost, GeneralData};
pub use product::{Product, ProductDraft};
pub use report::{CalculationResult, CostPreview, ProductCalculation};

/// 獲利計算錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum ProfitError {
    #[error("序列化錯誤: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO 錯誤: {0}")]
    Io(#[from] std::io::Error),

    #[error("找不到系統資料目錄")]
    StorageUnavailable,

    #[error("匯出錯誤: {0}")]
    ExportError(String),

    #[error("其他錯誤: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ProfitError>;
