//! # Profit Export
//!
//! 計算結果報表匯出
//!
//! 將 `CalculationResult` 輸出為兩張 CSV 表：逐產品明細表與
//! 企業彙總表。非有限值（inf/NaN）照原樣輸出，不清洗、不歸零。

pub mod sheet;

pub use sheet::{export_report, write_products_sheet, write_summary_sheet};
