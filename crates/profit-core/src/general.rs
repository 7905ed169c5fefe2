//! 企業共通成本模型

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 每月固定支出（房租、水電等），與產量無關
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedCost {
    /// 固定支出ID
    pub id: String,

    /// 支出名稱
    pub name: String,

    /// 每月金額（≥0，貨幣單位）
    pub amount: f64,
}

impl FixedCost {
    /// 創建新的固定支出（自動產生ID）
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            amount,
        }
    }

    /// 以指定ID創建固定支出
    pub fn with_id(id: impl Into<String>, name: impl Into<String>, amount: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            amount,
        }
    }
}

/// 企業共通資料：人工時薪與固定支出清單
///
/// `fixed_costs` 的順序不影響計算，只有總和參與分攤
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralData {
    /// 每小時人工成本（≥0）
    pub labor_cost_per_hour: f64,

    /// 固定支出清單
    pub fixed_costs: Vec<FixedCost>,
}

impl GeneralData {
    /// 創建新的企業共通資料
    pub fn new(labor_cost_per_hour: f64) -> Self {
        Self {
            labor_cost_per_hour,
            fixed_costs: Vec::new(),
        }
    }

    /// 建構器模式：添加固定支出
    pub fn with_fixed_cost(mut self, cost: FixedCost) -> Self {
        self.fixed_costs.push(cost);
        self
    }

    /// 固定支出總和
    pub fn total_fixed_costs(&self) -> f64 {
        self.fixed_costs.iter().map(|fc| fc.amount).sum()
    }

    /// 預設的四筆固定支出項目（金額為 0，待使用者填寫）
    pub fn default_fixed_costs() -> Vec<FixedCost> {
        vec![
            FixedCost::with_id("1", "Rent", 0.0),
            FixedCost::with_id("2", "Utilities", 0.0),
            FixedCost::with_id("3", "Transport", 0.0),
            FixedCost::with_id("4", "Other", 0.0),
        ]
    }
}

impl Default for GeneralData {
    fn default() -> Self {
        Self {
            labor_cost_per_hour: 0.0,
            fixed_costs: Self::default_fixed_costs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_fixed_costs() {
        let data = GeneralData::new(20.0)
            .with_fixed_cost(FixedCost::new("Rent", 800.0))
            .with_fixed_cost(FixedCost::new("Utilities", 200.0));

        assert_eq!(data.labor_cost_per_hour, 20.0);
        assert_eq!(data.total_fixed_costs(), 1000.0);
    }

    #[test]
    fn test_empty_fixed_costs_sum_to_zero() {
        let data = GeneralData::new(15.0);
        assert_eq!(data.total_fixed_costs(), 0.0);
    }

    #[test]
    fn test_default_seeds_four_rows() {
        let data = GeneralData::default();
        assert_eq!(data.fixed_costs.len(), 4);
        assert!(data.fixed_costs.iter().all(|fc| fc.amount == 0.0));
        assert_eq!(data.fixed_costs[0].id, "1");
    }

    #[test]
    fn test_fixed_cost_generates_unique_ids() {
        let a = FixedCost::new("Rent", 100.0);
        let b = FixedCost::new("Rent", 100.0);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_serde_field_names() {
        let data = GeneralData::new(12.5).with_fixed_cost(FixedCost::with_id("1", "Rent", 500.0));
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["laborCostPerHour"], 12.5);
        assert_eq!(json["fixedCosts"][0]["amount"], 500.0);
    }
}
