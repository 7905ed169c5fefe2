//! # Profit
//!
//! 小型企業獲利能力計算器
//!
//! 統一 re-export 各子 crate 的主要類型與入口

pub use profit_api::{handle_calculate, ApiResponse, CalculateRequest};
pub use profit_calc::{calculate_profitability, preview_product_costs, UnitCosts};
pub use profit_core::{
    CalculationResult, CostPreview, FixedCost, GeneralData, Product, ProductCalculation,
    ProductDraft, ProfitError, Result,
};
pub use profit_export::export_report;
pub use profit_store::{AppState, PersistedState};
