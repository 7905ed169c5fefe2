//! 計算結果模型

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// 單一產品的完整成本/利潤拆解
///
/// 每次計算重新產生的不可變快照，輸入欄位原樣保留
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCalculation {
    /// 原始輸入欄位
    #[serde(flatten)]
    pub product: Product,

    /// 每單位人工成本
    pub labor_cost_per_unit: f64,

    /// 直接成本（材料 + 人工）
    pub direct_cost: f64,

    /// 分攤後每單位固定成本
    pub fixed_cost_per_unit: f64,

    /// 每單位總成本
    pub total_cost_per_unit: f64,

    /// 由毛利率反推的售價（僅毛利率定價模式）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calculated_sale_price: Option<f64>,

    /// 最終採用的售價
    pub final_sale_price: f64,

    /// 每單位毛利
    pub gross_profit_per_unit: f64,

    /// 毛利率（百分比）
    pub profit_margin_percentage: f64,

    /// 預估每月利潤
    pub monthly_profit: f64,
}

/// 表單即時預覽的成本拆解（不含利潤欄位）
///
/// 利潤需要在整批脈絡下確定售價後才能計算
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostPreview {
    /// 每單位人工成本
    pub labor_cost_per_unit: f64,

    /// 直接成本
    pub direct_cost: f64,

    /// 分攤後每單位固定成本
    pub fixed_cost_per_unit: f64,

    /// 每單位總成本
    pub total_cost_per_unit: f64,

    /// 由毛利率反推的售價（僅毛利率定價模式）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calculated_sale_price: Option<f64>,
}

/// 整批計算結果：逐產品拆解 + 企業層級彙總
///
/// 完全由輸入推導，產品順序與輸入一一對應
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// 逐產品計算結果（與輸入同序）
    pub products: Vec<ProductCalculation>,

    /// 每月總利潤
    pub total_monthly_profit: f64,

    /// 每月總營收
    pub total_monthly_revenue: f64,

    /// 每月總成本（營收 - 利潤，恆等式）
    pub total_monthly_costs: f64,

    /// 平均毛利率（總利潤 / 總營收）
    pub average_profit_margin: f64,

    /// 固定支出總和
    pub total_fixed_costs: f64,
}
