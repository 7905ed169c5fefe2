//! # Profitability Calculation Engine
//!
//! 核心獲利能力計算引擎
//!
//! 純函數：相同輸入必得相同輸出，無共享狀態、無 I/O。
//! 引擎不驗證數值合理性（除以零產生的非有限值原樣傳遞），
//! 必填欄位與定價模式的互斥檢查由呼叫端負責。

pub mod calculator;
pub mod costing;
pub mod preview;
pub mod pricing;

// Re-export 主要入口
pub use calculator::calculate_profitability;
pub use costing::UnitCosts;
pub use preview::preview_product_costs;
