//! 產品模型

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 產品輸入資料
///
/// 定價模式為互斥契約：`use_price_by_margin` 為 true 時以
/// `contribution_margin` 反推售價並忽略 `sale_price`；為 false 時
/// 直接採用 `sale_price` 並忽略 `contribution_margin`。此契約由
/// 呼叫端（表單）在提交前保證，引擎對缺值一律採取寬鬆預設。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// 產品ID
    pub id: String,

    /// 產品名稱
    pub name: String,

    /// 每單位材料成本（≥0）
    pub material_cost: f64,

    /// 每小時產量（預期 >0，引擎不驗證）
    pub production_per_hour: f64,

    /// 固定售價（可缺，改由毛利率推算時忽略）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<f64>,

    /// 每月產量（≥0）
    pub monthly_production: f64,

    /// 目標貢獻毛利率（百分比，預期落在 [0,100)）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contribution_margin: Option<f64>,

    /// 是否以毛利率推算售價
    pub use_price_by_margin: bool,
}

impl Product {
    /// 創建新的產品（自動產生ID，固定售價模式）
    pub fn new(
        name: impl Into<String>,
        material_cost: f64,
        production_per_hour: f64,
        monthly_production: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            material_cost,
            production_per_hour,
            sale_price: None,
            monthly_production,
            contribution_margin: None,
            use_price_by_margin: false,
        }
    }

    /// 建構器模式：設置固定售價
    pub fn with_sale_price(mut self, price: f64) -> Self {
        self.sale_price = Some(price);
        self.use_price_by_margin = false;
        self
    }

    /// 建構器模式：設置目標貢獻毛利率（切換為毛利率定價）
    pub fn with_contribution_margin(mut self, margin: f64) -> Self {
        self.contribution_margin = Some(margin);
        self.use_price_by_margin = true;
        self
    }
}

/// 表單編輯中的產品草稿（欄位皆可缺）
///
/// 用於提交前的即時成本預覽，對應 `Product` 的部分填寫狀態
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub material_cost: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub production_per_hour: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_production: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contribution_margin: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_price_by_margin: Option<bool>,
}

impl ProductDraft {
    /// 將已填的欄位套用到既有產品（部分更新，未填欄位保持原值）
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(v) = self.material_cost {
            product.material_cost = v;
        }
        if let Some(v) = self.production_per_hour {
            product.production_per_hour = v;
        }
        if let Some(v) = self.sale_price {
            product.sale_price = Some(v);
        }
        if let Some(v) = self.monthly_production {
            product.monthly_production = v;
        }
        if let Some(v) = self.contribution_margin {
            product.contribution_margin = Some(v);
        }
        if let Some(v) = self.use_price_by_margin {
            product.use_price_by_margin = v;
        }
    }
}
