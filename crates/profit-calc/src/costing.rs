//! 每單位成本拆解

/// 單一產品的每單位成本組成
///
/// 批次計算與表單預覽共用同一套算式
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitCosts {
    /// 每單位人工成本
    pub labor_cost_per_unit: f64,

    /// 直接成本（材料 + 人工）
    pub direct_cost: f64,

    /// 分攤後每單位固定成本
    pub fixed_cost_per_unit: f64,

    /// 每單位總成本
    pub total_cost_per_unit: f64,
}

impl UnitCosts {
    /// 計算每單位成本拆解
    ///
    /// `production_per_hour` 為 0 或 `total_monthly_production` 為 0 時
    /// 產生非有限值（Infinity/NaN），原樣保留不修正
    pub fn compute(
        material_cost: f64,
        production_per_hour: f64,
        labor_cost_per_hour: f64,
        total_fixed_costs: f64,
        total_monthly_production: f64,
    ) -> Self {
        let labor_cost_per_unit = labor_cost_per_hour / production_per_hour;
        let direct_cost = material_cost + labor_cost_per_unit;
        let fixed_cost_per_unit = total_fixed_costs / total_monthly_production;
        let total_cost_per_unit = direct_cost + fixed_cost_per_unit;

        Self {
            labor_cost_per_unit,
            direct_cost,
            fixed_cost_per_unit,
            total_cost_per_unit,
        }
    }
}
