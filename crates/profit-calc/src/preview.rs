//! 表單即時成本預覽

use profit_core::{CostPreview, GeneralData, ProductDraft};

use crate::costing::UnitCosts;
use crate::pricing;

/// 計算編輯中產品的成本預覽
///
/// `total_monthly_production` 由呼叫端提供，且須已包含草稿本身的
/// 產量（已提交產品的總產量 + 草稿產量）。
///
/// 材料成本、每小時產量、每月產量任一缺值或為 0 時回傳 `None`，
/// 避免表單未填完整時顯示無意義的數字。
pub fn preview_product_costs(
    draft: &ProductDraft,
    general_data: &GeneralData,
    total_monthly_production: f64,
) -> Option<CostPreview> {
    let material_cost = draft.material_cost.filter(|&v| v != 0.0)?;
    let production_per_hour = draft.production_per_hour.filter(|&v| v != 0.0)?;
    draft.monthly_production.filter(|&v| v != 0.0)?;

    let costs = UnitCosts::compute(
        material_cost,
        production_per_hour,
        general_data.labor_cost_per_hour,
        general_data.total_fixed_costs(),
        total_monthly_production,
    );

    let use_price_by_margin = draft.use_price_by_margin.unwrap_or(false);
    let calculated_sale_price =
        if pricing::margin_pricing_active(use_price_by_margin, draft.contribution_margin) {
            Some(pricing::price_from_margin(
                costs.total_cost_per_unit,
                draft.contribution_margin.unwrap_or_default(),
            ))
        } else {
            None
        };

    Some(CostPreview {
        labor_cost_per_unit: costs.labor_cost_per_unit,
        direct_cost: costs.direct_cost,
        fixed_cost_per_unit: costs.fixed_cost_per_unit,
        total_cost_per_unit: costs.total_cost_per_unit,
        calculated_sale_price,
    })
}
